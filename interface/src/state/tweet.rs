//! The tweet account layout.
//!
//! Every tweet account is serialized as:
//!
//! | Offset               | Size | Field                      |
//! |----------------------|------|----------------------------|
//! | 0                    | 8    | account discriminant       |
//! | 8                    | 32   | author                     |
//! | 40                   | 8    | unix timestamp (i64, LE)   |
//! | 48                   | 4    | topic length (u32, LE)     |
//! | 52                   | n    | topic bytes                |
//! | 52 + n               | 4    | content length (u32, LE)   |
//! | 52 + n + 4           | m    | content bytes              |
//!
//! The fixed-width prefix is [`TweetHeader`]. The offsets below are the only place these positions
//! are defined; serialization, decoding and the memcmp filters in [`crate::filter`] all use them.

use pinocchio::pubkey::Pubkey;
use static_assertions::const_assert_eq;

use crate::{
    error::{
        TweetError,
        TweetResult,
    },
    state::{
        signer::VerifiedSigner,
        transmutable::{
            load,
            load_mut,
            Transmutable,
        },
        LeI64,
        LeU32,
        PUBKEY_SIZE,
        U32_SIZE,
        U64_SIZE,
    },
};

pub const DISCRIMINANT_SIZE: usize = 8;
pub const STRING_PREFIX_SIZE: usize = U32_SIZE;

/// The first 8 bytes of `sha256("account:Tweet")`.
pub const TWEET_ACCOUNT_DISCRIMINANT: [u8; DISCRIMINANT_SIZE] = [229, 13, 110, 58, 118, 6, 20, 79];

pub const DISCRIMINANT_OFFSET: usize = 0;
pub const AUTHOR_OFFSET: usize = DISCRIMINANT_OFFSET + DISCRIMINANT_SIZE;
pub const TIMESTAMP_OFFSET: usize = AUTHOR_OFFSET + PUBKEY_SIZE;
pub const TOPIC_PREFIX_OFFSET: usize = TIMESTAMP_OFFSET + U64_SIZE;
pub const TOPIC_OFFSET: usize = TOPIC_PREFIX_OFFSET + STRING_PREFIX_SIZE;

pub const TWEET_HEADER_SIZE: usize = TOPIC_OFFSET;

/// Maximum topic length in bytes.
pub const MAX_TOPIC_BYTES: usize = 50;
/// Maximum content length in characters.
pub const MAX_CONTENT_CHARS: usize = 280;

const_assert_eq!(AUTHOR_OFFSET, 8);
const_assert_eq!(TIMESTAMP_OFFSET, 40);
const_assert_eq!(TOPIC_PREFIX_OFFSET, 48);
const_assert_eq!(TOPIC_OFFSET, 52);

#[repr(C)]
#[derive(Clone, Debug)]
pub struct TweetHeader {
    /// The account discriminant, always [`TWEET_ACCOUNT_DISCRIMINANT`].
    discriminant: [u8; DISCRIMINANT_SIZE],
    /// The signer that created the tweet.
    pub author: Pubkey,
    /// The i64 unix timestamp at creation as LE bytes.
    timestamp: LeI64,
    /// The u32 topic length in bytes as LE bytes.
    topic_len: LeU32,
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid.
unsafe impl Transmutable for TweetHeader {
    const LEN: usize = TWEET_HEADER_SIZE;
}

const_assert_eq!(TWEET_HEADER_SIZE, size_of::<TweetHeader>());
const_assert_eq!(align_of::<TweetHeader>(), 1);

impl TweetHeader {
    #[inline(always)]
    pub fn discriminant(&self) -> [u8; DISCRIMINANT_SIZE] {
        self.discriminant
    }

    #[inline(always)]
    pub fn verify_discriminant(&self) -> TweetResult {
        if self.discriminant != TWEET_ACCOUNT_DISCRIMINANT {
            return Err(TweetError::InvalidAccountDiscriminant);
        }
        Ok(())
    }

    #[inline(always)]
    pub fn timestamp(&self) -> i64 {
        i64::from_le_bytes(self.timestamp)
    }

    #[inline(always)]
    pub fn topic_len(&self) -> usize {
        u32::from_le_bytes(self.topic_len) as usize
    }
}

/// The exact account size of a tweet with the given topic and content byte lengths.
#[inline(always)]
pub const fn tweet_space(topic_len: usize, content_len: usize) -> usize {
    TWEET_HEADER_SIZE + topic_len + STRING_PREFIX_SIZE + content_len
}

/// The offset of the content length prefix for a tweet whose topic is `topic_len` bytes.
#[inline(always)]
pub const fn content_prefix_offset(topic_len: usize) -> usize {
    TOPIC_OFFSET + topic_len
}

/// Checks the user supplied fields of a new tweet. The topic is checked first.
#[inline(always)]
pub fn validate_tweet_fields(topic: &str, content: &str) -> TweetResult {
    if topic.len() > MAX_TOPIC_BYTES {
        return Err(TweetError::TopicTooLong);
    }

    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(TweetError::ContentTooLong);
    }

    Ok(())
}

#[inline(always)]
fn string_prefix(s: &str) -> Result<LeU32, TweetError> {
    u32::try_from(s.len())
        .map(u32::to_le_bytes)
        .map_err(|_| TweetError::InvalidInstructionData)
}

/// Serializes a tweet into `dst`, which must be exactly [`tweet_space`] bytes long.
///
/// Only a [`VerifiedSigner`] can be written as the author.
pub fn write_tweet(
    dst: &mut [u8],
    author: &VerifiedSigner,
    timestamp: i64,
    topic: &str,
    content: &str,
) -> TweetResult {
    if dst.len() != tweet_space(topic.len(), content.len()) {
        return Err(TweetError::MismatchedDataLengths);
    }

    let (header_bytes, rest) = dst.split_at_mut(TWEET_HEADER_SIZE);
    *load_mut::<TweetHeader>(header_bytes)? = TweetHeader {
        discriminant: TWEET_ACCOUNT_DISCRIMINANT,
        author: *author.key(),
        timestamp: timestamp.to_le_bytes(),
        topic_len: string_prefix(topic)?,
    };

    let (topic_dst, rest) = rest.split_at_mut(topic.len());
    topic_dst.copy_from_slice(topic.as_bytes());

    let (content_prefix, content_dst) = rest.split_at_mut(STRING_PREFIX_SIZE);
    content_prefix.copy_from_slice(&string_prefix(content)?);
    content_dst.copy_from_slice(content.as_bytes());

    Ok(())
}

/// A zero-copy, read-only view of a tweet account's data.
#[derive(Clone, Debug)]
pub struct TweetRef<'a> {
    pub header: &'a TweetHeader,
    pub topic: &'a str,
    pub content: &'a str,
}

impl<'a> TweetRef<'a> {
    /// Decodes tweet account data, checking the discriminant, both length prefixes, the total data
    /// length and that both strings are valid UTF-8.
    pub fn try_from_bytes(data: &'a [u8]) -> Result<Self, TweetError> {
        let header = load::<TweetHeader>(data)?;
        header.verify_discriminant()?;

        let rest = &data[TWEET_HEADER_SIZE..];
        let (topic, rest) = rest
            .split_at_checked(header.topic_len())
            .ok_or(TweetError::InsufficientByteLength)?;
        let (content_prefix, content) = rest
            .split_at_checked(STRING_PREFIX_SIZE)
            .ok_or(TweetError::InsufficientByteLength)?;

        let content_len = u32::from_le_bytes(
            content_prefix
                .try_into()
                .map_err(|_| TweetError::InsufficientByteLength)?,
        );
        match content.len().cmp(&(content_len as usize)) {
            core::cmp::Ordering::Less => return Err(TweetError::InsufficientByteLength),
            core::cmp::Ordering::Greater => return Err(TweetError::MismatchedDataLengths),
            core::cmp::Ordering::Equal => (),
        }

        Ok(Self {
            header,
            topic: core::str::from_utf8(topic).map_err(|_| TweetError::InvalidUtf8)?,
            content: core::str::from_utf8(content).map_err(|_| TweetError::InvalidUtf8)?,
        })
    }

    #[inline(always)]
    pub fn author(&self) -> &'a Pubkey {
        &self.header.author
    }

    #[inline(always)]
    pub fn timestamp(&self) -> i64 {
        self.header.timestamp()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::{
        vec,
        vec::Vec,
    };

    use super::*;

    const AUTHOR: Pubkey = [7; PUBKEY_SIZE];

    fn serialize(topic: &str, content: &str, timestamp: i64) -> Vec<u8> {
        let signer = VerifiedSigner::new(&AUTHOR, true).unwrap();
        let mut data = vec![0u8; tweet_space(topic.len(), content.len())];
        write_tweet(&mut data, &signer, timestamp, topic, content).unwrap();
        data
    }

    #[test]
    fn fields_land_at_fixed_offsets() {
        let data = serialize("Veganism", "Yay tofu!", 1_650_000_000);

        assert_eq!(&data[..AUTHOR_OFFSET], &TWEET_ACCOUNT_DISCRIMINANT);
        assert_eq!(&data[AUTHOR_OFFSET..TIMESTAMP_OFFSET], &AUTHOR);
        assert_eq!(
            &data[TIMESTAMP_OFFSET..TOPIC_PREFIX_OFFSET],
            &1_650_000_000i64.to_le_bytes()
        );
        assert_eq!(&data[TOPIC_PREFIX_OFFSET..TOPIC_OFFSET], &8u32.to_le_bytes());
        assert_eq!(&data[TOPIC_OFFSET..TOPIC_OFFSET + 8], b"Veganism");

        let content_prefix = content_prefix_offset(8);
        assert_eq!(&data[content_prefix..content_prefix + 4], &9u32.to_le_bytes());
        assert_eq!(&data[content_prefix + 4..], b"Yay tofu!");
        assert_eq!(data.len(), 52 + 8 + 4 + 9);
    }

    #[test]
    fn decode_written_tweet() {
        let data = serialize("Best Pizza Topping", "Pepperoni ofc...", 42);
        let tweet = TweetRef::try_from_bytes(&data).expect("Should decode");

        assert_eq!(tweet.author(), &AUTHOR);
        assert_eq!(tweet.timestamp(), 42);
        assert_eq!(tweet.topic, "Best Pizza Topping");
        assert_eq!(tweet.content, "Pepperoni ofc...");
    }

    #[test]
    fn empty_topic() {
        let data = serialize("", "gm", 1);
        assert_eq!(data.len(), TWEET_HEADER_SIZE + STRING_PREFIX_SIZE + 2);

        let tweet = TweetRef::try_from_bytes(&data).expect("Should decode");
        assert_eq!(tweet.topic, "");
        assert_eq!(tweet.content, "gm");
    }

    #[test]
    fn write_rejects_wrongly_sized_buffer() {
        let signer = VerifiedSigner::new(&AUTHOR, true).unwrap();
        let mut data = vec![0u8; tweet_space(1, 1) + 1];
        assert_eq!(
            write_tweet(&mut data, &signer, 0, "a", "b"),
            Err(TweetError::MismatchedDataLengths)
        );
        assert!(data.iter().all(|b| *b == 0));
    }

    #[test]
    fn decode_rejects_bad_discriminant() {
        let mut data = serialize("topic", "content", 1);
        data[0] ^= 0xff;
        assert_eq!(
            TweetRef::try_from_bytes(&data).unwrap_err(),
            TweetError::InvalidAccountDiscriminant
        );
    }

    #[test]
    fn decode_rejects_bad_lengths() {
        let data = serialize("topic", "content", 1);

        assert_eq!(
            TweetRef::try_from_bytes(&data[..TWEET_HEADER_SIZE - 1]).unwrap_err(),
            TweetError::InsufficientByteLength
        );
        assert_eq!(
            TweetRef::try_from_bytes(&data[..data.len() - 1]).unwrap_err(),
            TweetError::InsufficientByteLength
        );

        let mut trailing = data.clone();
        trailing.push(0);
        assert_eq!(
            TweetRef::try_from_bytes(&trailing).unwrap_err(),
            TweetError::MismatchedDataLengths
        );

        // A topic prefix that points past the end of the data.
        let mut long_topic = data;
        long_topic[TOPIC_PREFIX_OFFSET..TOPIC_OFFSET].copy_from_slice(&1000u32.to_le_bytes());
        assert_eq!(
            TweetRef::try_from_bytes(&long_topic).unwrap_err(),
            TweetError::InsufficientByteLength
        );
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        let mut data = serialize("ab", "cd", 1);
        data[TOPIC_OFFSET] = 0xff;
        assert_eq!(
            TweetRef::try_from_bytes(&data).unwrap_err(),
            TweetError::InvalidUtf8
        );
    }

    #[test]
    fn topic_limit_is_in_bytes() {
        let max = "x".repeat(MAX_TOPIC_BYTES);
        assert_eq!(validate_tweet_fields(&max, "content"), Ok(()));

        let too_long = "x".repeat(MAX_TOPIC_BYTES + 1);
        assert_eq!(
            validate_tweet_fields(&too_long, "content"),
            Err(TweetError::TopicTooLong)
        );

        // 26 two-byte characters.
        let multibyte = "é".repeat(26);
        assert_eq!(multibyte.len(), 52);
        assert_eq!(
            validate_tweet_fields(&multibyte, "content"),
            Err(TweetError::TopicTooLong)
        );
    }

    #[test]
    fn content_limit_is_in_chars() {
        let max = "é".repeat(MAX_CONTENT_CHARS);
        assert_eq!(validate_tweet_fields("", &max), Ok(()));

        let too_long = "x".repeat(MAX_CONTENT_CHARS + 1);
        assert_eq!(
            validate_tweet_fields("", &too_long),
            Err(TweetError::ContentTooLong)
        );
    }

    #[test]
    fn topic_is_checked_before_content() {
        let topic = "x".repeat(MAX_TOPIC_BYTES + 1);
        let content = "x".repeat(MAX_CONTENT_CHARS + 1);
        assert_eq!(
            validate_tweet_fields(&topic, &content),
            Err(TweetError::TopicTooLong)
        );
    }

    #[test]
    fn unsigned_author_is_unauthorized() {
        assert_eq!(
            VerifiedSigner::new(&AUTHOR, false),
            Err(TweetError::Unauthorized)
        );
        assert_eq!(VerifiedSigner::new(&AUTHOR, true).unwrap().key(), &AUTHOR);
    }
}
