//! On-chain tweet program: a single `SendTweet` instruction that creates an immutable,
//! append-only tweet account.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod context;
mod debug;
mod instructions;
mod validation;

#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint;

pub use tweet_interface::program::ID;
