use pinocchio::account_info::AccountInfo;
use tweet_interface::{
    error::TweetError,
    state::SYSTEM_PROGRAM_ID,
    utils::owned_by,
};

/// Represents a completely uninitialized account that signed the transaction, i.e. a fresh keypair
/// address the system program can create an account at.
#[derive(Clone)]
pub struct UninitializedAccountInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> UninitializedAccountInfo<'a> {
    #[inline(always)]
    pub fn new(info: &'a AccountInfo) -> Result<UninitializedAccountInfo<'a>, TweetError> {
        if !info.data_is_empty() {
            return Err(TweetError::AlreadyInitializedAccount);
        }

        if !owned_by(info, &SYSTEM_PROGRAM_ID) {
            return Err(TweetError::NotOwnedBySystemProgram);
        }

        if !info.is_signer() {
            return Err(TweetError::TweetAccountMustBeSigner);
        }

        Ok(Self { info })
    }
}
