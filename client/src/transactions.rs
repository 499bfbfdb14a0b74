use anyhow::Context;
use colored::Colorize;
use solana_account::Account;
use solana_address::Address;
use solana_client::{
    client_error::ClientError,
    rpc_client::RpcClient,
    rpc_config::{
        RpcAccountInfoConfig,
        RpcProgramAccountsConfig,
        UiAccountEncoding,
    },
    rpc_filter::{
        Memcmp as RpcMemcmp,
        RpcFilterType,
    },
};
use solana_commitment_config::CommitmentConfig;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_instruction_error::InstructionError;
use solana_sdk::{
    message::{
        Instruction,
        Message,
    },
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};
use solana_transaction_error::TransactionError;
use tweet_interface::{
    error::TweetError,
    filter::Memcmp,
    instructions::{
        send_tweet::SendTweetInstructionData,
        InstructionTag,
    },
};

use crate::{
    error::StoreError,
    logs::{
        log_error,
        log_info,
        log_success,
        log_warning,
        LogColor,
    },
    store::TweetStore,
    TWEET_PROGRAM_ID,
};

pub const DEFAULT_RPC_URL: &str = "http://localhost:8899";

pub struct SendTransactionConfig {
    pub compute_budget: Option<u32>,
    pub debug_logs: Option<bool>,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            compute_budget: Default::default(),
            debug_logs: Some(true),
        }
    }
}

/// A blocking RPC client for sending tweets to, and reading tweets from, a cluster.
pub struct TweetRpcClient {
    client: RpcClient,
    config: SendTransactionConfig,
}

impl TweetRpcClient {
    pub fn new(url: impl ToString, config: SendTransactionConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(url.to_string(), CommitmentConfig::confirmed()),
            config,
        }
    }

    pub fn localhost() -> Self {
        Self::new(DEFAULT_RPC_URL, SendTransactionConfig::default())
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.client
    }

    /// Airdrops 10 SOL to `keypair`, or to a new keypair if none is passed.
    pub fn fund_account(&self, keypair: Option<Keypair>) -> anyhow::Result<Keypair> {
        let payer = keypair.unwrap_or_else(Keypair::new);

        let airdrop_signature = self
            .client
            .request_airdrop(&payer.pubkey(), 10_000_000_000)
            .context("Failed to request airdrop")?;

        let mut i = 0;
        while !self
            .client
            .confirm_transaction(&airdrop_signature)
            .context("Couldn't confirm transaction")?
            && i < 10
        {
            std::thread::sleep(std::time::Duration::from_millis(500));
            i += 1;
        }

        Ok(payer)
    }

    /// Creates a tweet at a fresh keypair's address. Returns the tweet address and the signature.
    pub fn send_tweet(
        &self,
        author: &Keypair,
        topic: &str,
        content: &str,
    ) -> anyhow::Result<(Address, Signature)> {
        let tweet = Keypair::new();
        let instruction = SendTweetInstructionData::new(topic, content)
            .create_instruction(tweet.pubkey(), author.pubkey());

        let sig = self.send_transaction(author, &[&tweet], &[instruction])?;
        Ok((tweet.pubkey(), sig))
    }

    pub fn send_transaction(
        &self,
        payer: &Keypair,
        signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        let bh = self
            .client
            .get_latest_blockhash()
            .context("Couldn't get the latest blockhash")?;

        let msg = Message::new(
            &[
                self.config.compute_budget.map_or(vec![], |budget| {
                    vec![
                        ComputeBudgetInstruction::set_compute_unit_limit(budget),
                        ComputeBudgetInstruction::set_compute_unit_price(1),
                    ]
                }),
                instructions.to_vec(),
            ]
            .concat(),
            Some(&payer.pubkey()),
        );

        let mut tx = Transaction::new_unsigned(msg);
        tx.try_sign(
            &[std::iter::once(payer)
                .chain(signers.iter().cloned())
                .collect::<Vec<_>>()]
            .concat(),
            bh,
        )
        .context("Couldn't sign transaction")?;

        match self.client.send_and_confirm_transaction(&tx) {
            Ok(sig) => {
                if matches!(self.config.debug_logs, Some(true)) {
                    let sender_info =
                        format!("{}: {}", "sender".color(LogColor::Gray), payer.pubkey());
                    log_success("Signature", format!("{sig}\n{sender_info}"));
                }
                Ok(sig)
            }
            Err(error) => {
                log_instruction_error(&error, tx.message.instructions.len(), instructions);
                log_info("Payer", payer.pubkey());

                Err(error).context("Failed transaction submission")
            }
        }
    }
}

impl TweetStore for TweetRpcClient {
    fn account(&self, address: &Address) -> Result<Option<Account>, StoreError> {
        let response = self
            .client
            .get_account_with_commitment(address, self.client.commitment())
            .with_context(|| format!("Couldn't fetch account {address}"))?;

        Ok(response.value)
    }

    fn program_accounts(
        &self,
        program_id: &Address,
        filters: &[Memcmp],
    ) -> Result<Vec<(Address, Account)>, StoreError> {
        let config = RpcProgramAccountsConfig {
            filters: Some(
                filters
                    .iter()
                    .map(|filter| {
                        RpcFilterType::Memcmp(RpcMemcmp::new_raw_bytes(
                            filter.offset,
                            filter.bytes.to_vec(),
                        ))
                    })
                    .collect(),
            ),
            account_config: RpcAccountInfoConfig {
                commitment: Some(self.client.commitment()),
                encoding: Some(UiAccountEncoding::Base64),
                data_slice: None,
                min_context_slot: None,
            },
            with_context: None,
            sort_results: None,
        };

        let accounts = self
            .client
            .get_program_accounts_with_config(program_id, config)
            .with_context(|| format!("Couldn't fetch accounts owned by {program_id}"))?;

        Ok(accounts)
    }
}

/// Maps a failed transaction back to the [`TweetError`] it failed with, if the failing instruction
/// was a tweet program instruction that returned one of its custom error codes.
///
/// `instructions` are the instructions passed to [`TweetRpcClient::send_transaction`]. The compute
/// budget instructions it prepends are accounted for with `num_compiled`, the number of instructions
/// in the sent message.
pub fn tweet_error_from_client_error(
    error: &ClientError,
    num_compiled: usize,
    instructions: &[Instruction],
) -> Option<(InstructionTag, TweetError)> {
    let TransactionError::InstructionError(idx, InstructionError::Custom(code)) =
        error.get_transaction_error()?
    else {
        return None;
    };

    let offset = num_compiled.checked_sub(instructions.len())?;
    let instruction = instructions.get((idx as usize).checked_sub(offset)?)?;
    if instruction.program_id != TWEET_PROGRAM_ID {
        return None;
    }

    let tag = InstructionTag::try_from(*instruction.data.first()?).ok()?;
    let error = TweetError::from_repr(u8::try_from(code).ok()?)?;
    Some((tag, error))
}

pub fn log_instruction_error(
    error: &ClientError,
    num_compiled: usize,
    instructions: &[Instruction],
) {
    match tweet_error_from_client_error(error, num_compiled, instructions) {
        Some((tag, tweet_error)) => log_error("Tweet error", format!("({tag}, {tweet_error})")),
        None => log_warning("Generic error", error),
    }
}
