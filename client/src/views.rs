//! Owned views for decoding tweet account data into ergonomic Rust structs.

use std::fmt::Display;

use colored::Colorize;
use solana_address::Address;
use tweet_interface::{
    error::TweetError,
    state::tweet::TweetRef,
};

use crate::LogColor;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TweetAccountView {
    pub author: Address,
    pub timestamp: i64,
    pub topic: String,
    pub content: String,
}

impl TryFrom<&[u8]> for TweetAccountView {
    type Error = TweetError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let tweet = TweetRef::try_from_bytes(data)?;
        Ok(Self {
            author: Address::new_from_array(*tweet.author()),
            timestamp: tweet.timestamp(),
            topic: tweet.topic.to_string(),
            content: tweet.content.to_string(),
        })
    }
}

impl Display for TweetAccountView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let topic = match self.topic.as_str() {
            "" => "(no topic)".color(LogColor::FadedGray),
            topic => format!("#{topic}").color(LogColor::Highlight),
        };
        write!(
            f,
            "{} {} {}\n  {}",
            self.author.to_string().color(LogColor::Debug),
            self.timestamp.to_string().color(LogColor::Gray),
            topic,
            self.content
        )
    }
}
