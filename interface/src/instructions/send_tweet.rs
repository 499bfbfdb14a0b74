//! Instruction data for [`InstructionTag::SendTweet`](crate::instructions::InstructionTag).
//!
//! Layout after the tag byte: `u32 LE topic length || topic || u32 LE content length || content`.

use crate::{
    error::TweetError,
    state::tweet::STRING_PREFIX_SIZE,
};

/// Creates a tweet account and writes the author, the current unix timestamp, the topic and the
/// content into it.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Tweet account, a fresh address
///  1. `[WRITE, SIGNER]` Author, pays for the tweet account
///  2. `[READ]` System program
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SendTweetInstructionData<'a> {
    pub topic: &'a str,
    pub content: &'a str,
}

#[inline(always)]
fn read_string(data: &[u8]) -> Result<(&str, &[u8]), TweetError> {
    let (prefix, rest) = data
        .split_at_checked(STRING_PREFIX_SIZE)
        .ok_or(TweetError::InsufficientByteLength)?;
    let len = u32::from_le_bytes(
        prefix
            .try_into()
            .map_err(|_| TweetError::InsufficientByteLength)?,
    );
    let (bytes, rest) = rest
        .split_at_checked(len as usize)
        .ok_or(TweetError::InsufficientByteLength)?;
    let s = core::str::from_utf8(bytes).map_err(|_| TweetError::InvalidUtf8)?;
    Ok((s, rest))
}

#[inline(always)]
fn write_string<'a>(dst: &'a mut [u8], s: &str) -> Result<&'a mut [u8], TweetError> {
    let len = u32::try_from(s.len()).map_err(|_| TweetError::InvalidInstructionData)?;
    let (prefix, rest) = dst
        .split_at_mut_checked(STRING_PREFIX_SIZE)
        .ok_or(TweetError::InsufficientByteLength)?;
    prefix.copy_from_slice(&len.to_le_bytes());
    let (bytes, rest) = rest
        .split_at_mut_checked(s.len())
        .ok_or(TweetError::InsufficientByteLength)?;
    bytes.copy_from_slice(s.as_bytes());
    Ok(rest)
}

impl<'a> SendTweetInstructionData<'a> {
    pub fn new(topic: &'a str, content: &'a str) -> Self {
        Self { topic, content }
    }

    /// Decodes the instruction data that follows the tag byte. Trailing bytes are rejected.
    pub fn unpack(data: &'a [u8]) -> Result<Self, TweetError> {
        let (topic, rest) = read_string(data)?;
        let (content, rest) = read_string(rest)?;
        if !rest.is_empty() {
            return Err(TweetError::InvalidInstructionData);
        }
        Ok(Self { topic, content })
    }

    /// The length of the packed data, excluding the tag byte.
    pub fn packed_len(&self) -> usize {
        STRING_PREFIX_SIZE + self.topic.len() + STRING_PREFIX_SIZE + self.content.len()
    }

    /// Packs the data, excluding the tag byte, into the start of `dst`. Returns the number of bytes
    /// written.
    pub fn pack_into(&self, dst: &mut [u8]) -> Result<usize, TweetError> {
        let rest = write_string(dst, self.topic)?;
        write_string(rest, self.content)?;
        Ok(self.packed_len())
    }

    /// Packs the tag byte followed by the instruction data.
    #[cfg(feature = "std")]
    pub fn pack_tagged(&self) -> std::vec::Vec<u8> {
        let mut data = std::vec![0u8; 1 + self.packed_len()];
        data[0] = crate::instructions::InstructionTag::SendTweet as u8;
        self.pack_into(&mut data[1..])
            .expect("Buffer is sized with `packed_len`");
        data
    }

    /// Builds the `SendTweet` instruction for a client transaction.
    #[cfg(feature = "client")]
    pub fn create_instruction(
        &self,
        tweet: solana_address::Address,
        author: solana_address::Address,
    ) -> solana_instruction::Instruction {
        use solana_instruction::AccountMeta;

        solana_instruction::Instruction {
            program_id: solana_address::Address::new_from_array(crate::program::ID),
            accounts: std::vec![
                AccountMeta::new(tweet, true),
                AccountMeta::new(author, true),
                AccountMeta::new_readonly(
                    solana_address::Address::new_from_array(crate::state::SYSTEM_PROGRAM_ID),
                    false,
                ),
            ],
            data: self.pack_tagged(),
        }
    }
}
