use std::collections::HashSet;

use client::{
    mollusk_helpers::{
        helper_trait::TweetTestHelper,
        new_tweet_mollusk_context,
        utils::create_mock_user_account,
    },
    query::{
        fetch_tweets,
        fetch_tweets_by_author,
        fetch_tweets_by_topic,
    },
    views::TweetAccountView,
};
use mollusk_svm::result::Check;
use solana_address::Address;
use tweet_interface::filter::Memcmp;

fn addresses(tweets: &[(Address, TweetAccountView)]) -> HashSet<Address> {
    tweets.iter().map(|(address, _)| *address).collect()
}

#[test]
fn fetch_all_by_author_and_by_topic() -> anyhow::Result<()> {
    let w1_mock = create_mock_user_account(Address::new_unique(), 10_000_000_000);
    let w2_mock = create_mock_user_account(Address::new_unique(), 10_000_000_000);
    let (w1, w2) = (w1_mock.0, w2_mock.0);
    let mollusk = new_tweet_mollusk_context(vec![w1_mock, w2_mock]);

    let success = [Check::success()];
    let (a, _) = mollusk.send_tweet(w1, "Best Pizza Topping", "Pepperoni ofc...", &success);
    let (b, _) = mollusk.send_tweet(w1, "", "gm", &success);
    let (c, _) = mollusk.send_tweet(w2, "Veganism", "Yay tofu!", &success);

    let all = fetch_tweets(&mollusk, &[])?;
    assert_eq!(addresses(&all), HashSet::from([a, b, c]));

    let by_w1 = fetch_tweets_by_author(&mollusk, &w1)?;
    assert_eq!(addresses(&by_w1), HashSet::from([a, b]));

    let veganism = fetch_tweets_by_topic(&mollusk, "Veganism")?;
    assert_eq!(addresses(&veganism), HashSet::from([c]));
    assert_eq!(veganism[0].1.author, w2);

    let raw_topic = fetch_tweets(&mollusk, &[Memcmp::topic_prefix("Veganism")])?;
    assert_eq!(addresses(&raw_topic), HashSet::from([c]));

    Ok(())
}
