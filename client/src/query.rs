//! Tweet queries over any [`TweetStore`].
//!
//! Every multi-account query is restricted to accounts owned by the tweet program and carries the
//! account discriminant filter, so non-tweet accounts never show up in results. Results are
//! unordered.

use solana_address::Address;
use tweet_interface::filter::{
    EncodedTopic,
    Memcmp,
};

use crate::{
    error::StoreError,
    store::TweetStore,
    views::TweetAccountView,
    TWEET_PROGRAM_ID,
};

/// Fetches and decodes the tweet stored at `address`.
pub fn fetch_tweet<S: TweetStore + ?Sized>(
    store: &S,
    address: &Address,
) -> Result<TweetAccountView, StoreError> {
    let account = store
        .account(address)?
        .filter(|account| account.owner == TWEET_PROGRAM_ID)
        .ok_or(StoreError::NotFound(*address))?;

    TweetAccountView::try_from(account.data.as_slice()).map_err(|source| {
        StoreError::InvalidAccount {
            address: *address,
            source,
        }
    })
}

/// Fetches every tweet matching all `filters`.
pub fn fetch_tweets<S: TweetStore + ?Sized>(
    store: &S,
    filters: &[Memcmp],
) -> Result<Vec<(Address, TweetAccountView)>, StoreError> {
    let filters = [&[Memcmp::discriminant()][..], filters].concat();

    store
        .program_accounts(&TWEET_PROGRAM_ID, &filters)?
        .into_iter()
        .map(|(address, account)| {
            TweetAccountView::try_from(account.data.as_slice())
                .map(|view| (address, view))
                .map_err(|source| StoreError::InvalidAccount { address, source })
        })
        .collect()
}

pub fn fetch_tweets_by_author<S: TweetStore + ?Sized>(
    store: &S,
    author: &Address,
) -> Result<Vec<(Address, TweetAccountView)>, StoreError> {
    let author = author.to_bytes();
    fetch_tweets(store, &[Memcmp::author(&author)])
}

/// Fetches tweets whose topic is exactly `topic`. No tweet can have a topic longer than the maximum,
/// so such a query returns no tweets.
pub fn fetch_tweets_by_topic<S: TweetStore + ?Sized>(
    store: &S,
    topic: &str,
) -> Result<Vec<(Address, TweetAccountView)>, StoreError> {
    let Ok(topic) = EncodedTopic::new(topic) else {
        return Ok(vec![]);
    };
    fetch_tweets(store, &[Memcmp::topic_exact(&topic)])
}
