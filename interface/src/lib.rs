//! Shared definitions for the tweet program: the account layout, errors, instruction data and the
//! memcmp filters clients use to query tweet accounts.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod filter;
pub mod instructions;
pub mod state;
pub mod utils;

pub mod program {
    pinocchio_pubkey::declare_id!("DUxkTsCrXHJKWzuPcT9xta1s3iZma6eXt7KaYvSSgDX1");
}
