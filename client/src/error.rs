use solana_address::Address;
use thiserror::Error;
use tweet_interface::error::TweetError;

/// Errors from creating or reading tweet accounts through a [`crate::store::TweetStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request failed validation; nothing was written.
    #[error("{0}")]
    Rejected(#[from] TweetError),

    #[error("Tweet account {0} not found")]
    NotFound(Address),

    #[error("Account {address} isn't a valid tweet account: {source}")]
    InvalidAccount {
        address: Address,
        #[source]
        source: TweetError,
    },

    #[error("Payer {payer} has {available} lamports but {required} are required")]
    InsufficientFunds {
        payer: Address,
        required: u64,
        available: u64,
    },

    /// Tweets carry their creation time, so a store whose clock isn't positive can't create them.
    #[error("Clock reads {0}, a tweet's timestamp must be positive")]
    InvalidClock(i64),

    /// The underlying ledger or RPC node failed.
    #[error("Storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}
