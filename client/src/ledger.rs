//! An in-memory ledger that creates tweet accounts without a validator.
//!
//! [`LocalLedger::send_tweet`] runs the same checks in the same order as the on-chain `SendTweet`
//! instruction and serializes with the same [`write_tweet`], so the account data it produces is
//! byte-for-byte what the program would write.

use std::{
    collections::HashMap,
    time::{
        SystemTime,
        UNIX_EPOCH,
    },
};

use anyhow::anyhow;
use solana_account::Account;
use solana_address::Address;
use solana_sdk::rent::Rent;
use tweet_interface::{
    error::TweetError,
    filter::Memcmp,
    state::{
        signer::VerifiedSigner,
        tweet::{
            tweet_space,
            validate_tweet_fields,
            write_tweet,
        },
    },
};

use crate::{
    error::StoreError,
    store::{
        scan_program_accounts,
        TweetStore,
    },
    SYSTEM_PROGRAM_ID,
    TWEET_PROGRAM_ID,
};

#[derive(Clone, Debug)]
pub struct LocalLedger {
    accounts: HashMap<Address, Account>,
    unix_timestamp: i64,
    rent: Rent,
}

/// A ledger whose clock reads the host's current unix time.
impl Default for LocalLedger {
    fn default() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX));
        Self::new(now)
    }
}

impl LocalLedger {
    /// A ledger whose clock is fixed at `unix_timestamp`. Tweets can only be sent while the clock
    /// is positive.
    pub fn new(unix_timestamp: i64) -> Self {
        Self {
            accounts: HashMap::new(),
            unix_timestamp,
            rent: Rent::default(),
        }
    }

    /// Credits `lamports` to a system-owned account at `address`, creating it if needed.
    pub fn fund(&mut self, address: Address, lamports: u64) {
        let account = self.accounts.entry(address).or_insert_with(|| Account {
            lamports: 0,
            data: vec![],
            owner: SYSTEM_PROGRAM_ID,
            executable: false,
            rent_epoch: 0,
        });
        account.lamports = account.lamports.saturating_add(lamports);
    }

    pub fn insert(&mut self, address: Address, account: Account) {
        self.accounts.insert(address, account);
    }

    pub fn get(&self, address: &Address) -> Option<&Account> {
        self.accounts.get(address)
    }

    /// Every account owned by the tweet program that matches all `filters`.
    pub fn scan_all(&self, filters: &[Memcmp]) -> Vec<(Address, Account)> {
        scan_program_accounts(&self.accounts, &TWEET_PROGRAM_ID, filters)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn unix_timestamp(&self) -> i64 {
        self.unix_timestamp
    }

    pub fn set_unix_timestamp(&mut self, unix_timestamp: i64) {
        self.unix_timestamp = unix_timestamp;
    }

    /// Creates a tweet account at `tweet`, paid for by `author`.
    ///
    /// `signers` are the addresses that signed the request. Both `author` and `tweet` must be among
    /// them. The ledger is left untouched if any check fails.
    pub fn send_tweet(
        &mut self,
        tweet: Address,
        author: Address,
        signers: &[Address],
        topic: &str,
        content: &str,
    ) -> Result<Address, StoreError> {
        let author_key = author.to_bytes();
        let signer = VerifiedSigner::new(&author_key, signers.contains(&author))?;

        if let Some(existing) = self.accounts.get(&tweet) {
            if !existing.data.is_empty() {
                return Err(TweetError::AlreadyInitializedAccount.into());
            }
            if existing.owner != SYSTEM_PROGRAM_ID {
                return Err(TweetError::NotOwnedBySystemProgram.into());
            }
        }
        if !signers.contains(&tweet) {
            return Err(TweetError::TweetAccountMustBeSigner.into());
        }

        validate_tweet_fields(topic, content)?;

        if self.unix_timestamp <= 0 {
            return Err(StoreError::InvalidClock(self.unix_timestamp));
        }

        // The system program refuses to create an account at an address that already holds lamports.
        if self.accounts.get(&tweet).is_some_and(|a| a.lamports > 0) {
            return Err(anyhow!("Account {tweet} is already in use").into());
        }

        let space = tweet_space(topic.len(), content.len());
        let required = self.rent.minimum_balance(space);
        let available = self.accounts.get(&author).map_or(0, |a| a.lamports);
        if available < required {
            return Err(StoreError::InsufficientFunds {
                payer: author,
                required,
                available,
            });
        }

        let mut data = vec![0u8; space];
        write_tweet(&mut data, &signer, self.unix_timestamp, topic, content)?;

        if let Some(payer) = self.accounts.get_mut(&author) {
            payer.lamports -= required;
        }
        self.accounts.insert(
            tweet,
            Account {
                lamports: required,
                data,
                owner: TWEET_PROGRAM_ID,
                executable: false,
                rent_epoch: 0,
            },
        );

        Ok(tweet)
    }
}

impl TweetStore for LocalLedger {
    fn account(&self, address: &Address) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.get(address).cloned())
    }

    fn program_accounts(
        &self,
        program_id: &Address,
        filters: &[Memcmp],
    ) -> Result<Vec<(Address, Account)>, StoreError> {
        Ok(scan_program_accounts(&self.accounts, program_id, filters))
    }
}
