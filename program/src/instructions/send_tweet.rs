//! See [`process_send_tweet`].

use pinocchio::{
    account_info::AccountInfo,
    sysvars::{
        clock::Clock,
        rent::Rent,
        Sysvar,
    },
    ProgramResult,
};
use tweet_interface::{
    instructions::send_tweet::SendTweetInstructionData,
    state::tweet::{
        tweet_space,
        validate_tweet_fields,
        write_tweet,
    },
};

use crate::{
    context::send_tweet_context::SendTweetContext,
    debug,
};

/// Creates a new tweet account at the tweet account's address, funded by the author.
///
/// Every check runs before the account is created, so a failed instruction never leaves a partially
/// written tweet behind.
pub fn process_send_tweet(accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    let ctx = SendTweetContext::load(accounts)?;
    let args = SendTweetInstructionData::unpack(instruction_data)?;
    validate_tweet_fields(args.topic, args.content)?;

    let account_space = tweet_space(args.topic.len(), args.content.len());
    let lamports_required = Rent::get()?.minimum_balance(account_space);

    pinocchio_system::instructions::CreateAccount {
        from: ctx.author.info,
        to: ctx.tweet_account.info,
        lamports: lamports_required,
        space: account_space as u64,
        owner: &crate::ID,
    }
    .invoke()?;

    let timestamp = Clock::get()?.unix_timestamp;
    let mut data = ctx.tweet_account.info.try_borrow_mut_data()?;
    write_tweet(
        &mut data,
        &ctx.author.signer,
        timestamp,
        args.topic,
        args.content,
    )?;

    debug!("tweet created, {} bytes", account_space);

    Ok(())
}
