use std::collections::HashMap;

use mollusk_svm::{
    result::{
        Check,
        InstructionResult,
    },
    MolluskContext,
};
use solana_account::Account;
use solana_address::Address;
use tweet_interface::instructions::send_tweet::SendTweetInstructionData;

use crate::{
    query::fetch_tweet,
    views::TweetAccountView,
};

pub trait TweetTestHelper {
    /// Sends a tweet from `author` to a fresh address, validating the result against `checks`.
    fn send_tweet(
        &self,
        author: Address,
        topic: &str,
        content: &str,
        checks: &[Check],
    ) -> (Address, InstructionResult);

    fn view_tweet(&self, tweet: &Address) -> TweetAccountView;
}

impl TweetTestHelper for MolluskContext<HashMap<Address, Account>> {
    fn send_tweet(
        &self,
        author: Address,
        topic: &str,
        content: &str,
        checks: &[Check],
    ) -> (Address, InstructionResult) {
        let tweet = Address::new_unique();
        let instruction =
            SendTweetInstructionData::new(topic, content).create_instruction(tweet, author);

        (tweet, self.process_and_validate_instruction(&instruction, checks))
    }

    fn view_tweet(&self, tweet: &Address) -> TweetAccountView {
        fetch_tweet(self, tweet)
            .unwrap_or_else(|e| panic!("Tweet account {tweet} should be readable: {e}"))
    }
}
