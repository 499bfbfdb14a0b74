use pinocchio::program_error::ProgramError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(strum_macros::FromRepr, strum_macros::EnumIter)
)]
#[repr(u8)]
pub enum TweetError {
    InvalidInstructionTag,
    InsufficientByteLength,
    InvalidInstructionData,
    InvalidUtf8,
    NotEnoughAccountKeys,
    Unauthorized,
    TopicTooLong,
    ContentTooLong,
    AlreadyInitializedAccount,
    NotOwnedBySystemProgram,
    TweetAccountMustBeSigner,
    IncorrectSystemProgram,
    InvalidAccountDiscriminant,
    MismatchedDataLengths,
}

impl From<TweetError> for ProgramError {
    #[inline(always)]
    fn from(e: TweetError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<TweetError> for &'static str {
    fn from(value: TweetError) -> Self {
        match value {
            TweetError::InvalidInstructionTag => "Invalid instruction tag",
            TweetError::InsufficientByteLength => "Not enough bytes passed",
            TweetError::InvalidInstructionData => "Invalid instruction data",
            TweetError::InvalidUtf8 => "String data is not valid UTF-8",
            TweetError::NotEnoughAccountKeys => "Not enough account keys passed",
            TweetError::Unauthorized => "The author must sign the transaction",
            TweetError::TopicTooLong => "Topic should be 50 chars long max",
            TweetError::ContentTooLong => "Content should be 280 chars long max",
            TweetError::AlreadyInitializedAccount => "Account is already initialized",
            TweetError::NotOwnedBySystemProgram => "Account is not owned by the system program",
            TweetError::TweetAccountMustBeSigner => "The tweet account must sign the transaction",
            TweetError::IncorrectSystemProgram => "Incorrect system program",
            TweetError::InvalidAccountDiscriminant => "Invalid account discriminant",
            TweetError::MismatchedDataLengths => "Account data length doesn't match its prefixes",
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for TweetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str((*self).into())
    }
}

#[cfg(all(feature = "std", not(target_os = "solana")))]
impl std::error::Error for TweetError {}

pub type TweetResult = Result<(), TweetError>;

#[cfg(test)]
mod tests {
    extern crate std;

    use strum::IntoEnumIterator;

    use super::TweetError;
    use pinocchio::program_error::ProgramError;

    #[test]
    fn error_codes_round_trip_through_program_error() {
        for variant in TweetError::iter() {
            let ProgramError::Custom(code) = ProgramError::from(variant) else {
                panic!("{variant:?} should convert to a custom program error");
            };
            assert_eq!(TweetError::from_repr(code as u8), Some(variant));
        }
    }

    #[test]
    fn topic_error_message() {
        let msg: &'static str = TweetError::TopicTooLong.into();
        assert_eq!(msg, "Topic should be 50 chars long max");
        assert_eq!(
            std::format!("{}", TweetError::TopicTooLong),
            "Topic should be 50 chars long max"
        );
    }
}
