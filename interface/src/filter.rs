//! Byte-offset filters over serialized tweet accounts.
//!
//! These mirror the RPC `memcmp` filter: an account matches when the bytes at `offset` equal `bytes`.
//! Offsets come from the layout in [`crate::state::tweet`], which is identical for every tweet
//! account.

use pinocchio::pubkey::Pubkey;

use crate::{
    error::TweetError,
    state::tweet::{
        AUTHOR_OFFSET,
        DISCRIMINANT_OFFSET,
        MAX_TOPIC_BYTES,
        STRING_PREFIX_SIZE,
        TOPIC_OFFSET,
        TOPIC_PREFIX_OFFSET,
        TWEET_ACCOUNT_DISCRIMINANT,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Memcmp<'a> {
    pub offset: usize,
    pub bytes: &'a [u8],
}

impl<'a> Memcmp<'a> {
    pub const fn new(offset: usize, bytes: &'a [u8]) -> Self {
        Self { offset, bytes }
    }

    /// Matches every tweet account.
    pub const fn discriminant() -> Memcmp<'static> {
        Memcmp::new(DISCRIMINANT_OFFSET, &TWEET_ACCOUNT_DISCRIMINANT)
    }

    /// Matches tweets created by `author`.
    pub const fn author(author: &'a Pubkey) -> Self {
        Self::new(AUTHOR_OFFSET, author)
    }

    /// Matches tweets whose topic starts with `topic`.
    ///
    /// The comparison starts right after the topic length prefix, so `"Vegan"` also matches a tweet
    /// with the topic `"Veganism"`. Use [`Memcmp::topic_exact`] to match a single topic.
    pub const fn topic_prefix(topic: &'a str) -> Self {
        Self::new(TOPIC_OFFSET, topic.as_bytes())
    }

    /// Matches tweets whose topic is exactly the encoded topic, length prefix included.
    pub fn topic_exact(topic: &'a EncodedTopic) -> Self {
        Self::new(TOPIC_PREFIX_OFFSET, topic.as_bytes())
    }

    #[inline(always)]
    pub fn matches(&self, data: &[u8]) -> bool {
        self.offset
            .checked_add(self.bytes.len())
            .and_then(|end| data.get(self.offset..end))
            .is_some_and(|window| window == self.bytes)
    }
}

/// Returns true if `data` matches every filter. An empty filter list matches everything.
#[inline(always)]
pub fn matches_all(data: &[u8], filters: &[Memcmp]) -> bool {
    filters.iter().all(|filter| filter.matches(data))
}

/// A topic serialized the way it appears in account data: a u32 LE length prefix followed by its
/// bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedTopic {
    buf: [u8; STRING_PREFIX_SIZE + MAX_TOPIC_BYTES],
    len: usize,
}

impl EncodedTopic {
    pub fn new(topic: &str) -> Result<Self, TweetError> {
        if topic.len() > MAX_TOPIC_BYTES {
            return Err(TweetError::TopicTooLong);
        }

        let mut buf = [0; STRING_PREFIX_SIZE + MAX_TOPIC_BYTES];
        let len = STRING_PREFIX_SIZE + topic.len();
        buf[..STRING_PREFIX_SIZE].copy_from_slice(&(topic.len() as u32).to_le_bytes());
        buf[STRING_PREFIX_SIZE..len].copy_from_slice(topic.as_bytes());

        Ok(Self { buf, len })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}
