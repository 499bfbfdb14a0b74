use pinocchio::pubkey::Pubkey;

use crate::error::TweetError;

/// An identity that co-signed the current request.
///
/// The only way to obtain one is through [`VerifiedSigner::new`], so anything that takes a
/// `VerifiedSigner` can rely on the author check having already passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifiedSigner(Pubkey);

impl VerifiedSigner {
    #[inline(always)]
    pub fn new(key: &Pubkey, is_signer: bool) -> Result<Self, TweetError> {
        if !is_signer {
            return Err(TweetError::Unauthorized);
        }
        Ok(Self(*key))
    }

    #[inline(always)]
    pub fn key(&self) -> &Pubkey {
        &self.0
    }
}
