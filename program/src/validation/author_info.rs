use pinocchio::account_info::AccountInfo;
use tweet_interface::{
    error::TweetError,
    state::signer::VerifiedSigner,
};

/// The tweet's author. Loading it fails with [`TweetError::Unauthorized`] unless the account signed
/// the transaction.
#[derive(Clone)]
pub struct AuthorInfo<'a> {
    pub info: &'a AccountInfo,
    pub signer: VerifiedSigner,
}

impl<'a> AuthorInfo<'a> {
    #[inline(always)]
    pub fn new(info: &'a AccountInfo) -> Result<AuthorInfo<'a>, TweetError> {
        let signer = VerifiedSigner::new(info.key(), info.is_signer())?;
        Ok(Self { info, signer })
    }
}
