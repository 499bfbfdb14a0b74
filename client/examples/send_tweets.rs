//! Sends a few tweets to a local validator and queries them back.
//!
//! Requires a running `solana-test-validator` with the tweet program deployed.

use client::{
    logs::log_tweet,
    query::{
        fetch_tweet,
        fetch_tweets,
        fetch_tweets_by_author,
        fetch_tweets_by_topic,
    },
    transactions::TweetRpcClient,
};
use solana_sdk::signer::Signer;

fn main() -> anyhow::Result<()> {
    let rpc = TweetRpcClient::localhost();

    let w1 = rpc.fund_account(None)?;
    let w2 = rpc.fund_account(None)?;

    let (pizza, _) = rpc.send_tweet(&w1, "Best Pizza Topping", "Pepperoni ofc...")?;
    rpc.send_tweet(&w1, "", "gm")?;
    rpc.send_tweet(&w2, "Veganism", "Yay tofu!")?;

    println!("{}\n", fetch_tweet(&rpc, &pizza)?);

    println!("All tweets: {}", fetch_tweets(&rpc, &[])?.len());

    for (address, tweet) in fetch_tweets_by_author(&rpc, &w1.pubkey())? {
        log_tweet(&address, &tweet);
    }

    for (address, tweet) in fetch_tweets_by_topic(&rpc, "Veganism")? {
        log_tweet(&address, &tweet);
    }

    Ok(())
}
