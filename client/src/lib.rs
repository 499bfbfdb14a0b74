//! Client-side utilities for the tweet program.
//!
//! Includes the account store abstraction, the tweet query layer, an in-memory ledger, RPC
//! transaction helpers and mollusk test helpers.

pub mod error;
pub mod ledger;
pub mod logs;
pub mod mollusk_helpers;
pub mod query;
pub mod store;
pub mod transactions;
pub mod views;

pub use logs::LogColor;
use solana_address::Address;

/// The tweet program's id as an [`Address`].
pub const TWEET_PROGRAM_ID: Address = Address::new_from_array(tweet_interface::program::ID);
/// The system program's id as an [`Address`].
pub const SYSTEM_PROGRAM_ID: Address =
    Address::new_from_array(tweet_interface::state::SYSTEM_PROGRAM_ID);
