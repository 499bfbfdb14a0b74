use pinocchio::program_error::ProgramError;

use crate::error::TweetError;

pub mod send_tweet;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(strum_macros::FromRepr, strum_macros::EnumIter, strum_macros::Display)
)]
pub enum InstructionTag {
    SendTweet,
}

impl TryFrom<u8> for InstructionTag {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(InstructionTag::SendTweet),
            _ => Err(TweetError::InvalidInstructionTag.into()),
        }
    }
}
