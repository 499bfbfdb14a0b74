use mollusk_svm::result::Check;
use solana_program_error::ProgramError;
use tweet_interface::error::TweetError;

/// Extension trait for converting a [`TweetError`] directly into a [`Check`] that asserts
/// the instruction failed with that error.
pub trait IntoCheckFailure {
    fn into_check_failure(self) -> Check<'static>;
}

impl IntoCheckFailure for TweetError {
    fn into_check_failure(self) -> Check<'static> {
        Check::err(ProgramError::Custom(self as u32))
    }
}
