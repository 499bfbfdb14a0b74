use pinocchio::pubkey::Pubkey;

pub mod signer;
pub mod transmutable;
pub mod tweet;

pub const U32_SIZE: usize = core::mem::size_of::<u32>();
pub const U64_SIZE: usize = core::mem::size_of::<u64>();
pub const PUBKEY_SIZE: usize = core::mem::size_of::<Pubkey>();

/// The system program's id, `11111111111111111111111111111111`.
pub const SYSTEM_PROGRAM_ID: Pubkey = [0; PUBKEY_SIZE];

pub type LeU32 = [u8; U32_SIZE];
pub type LeI64 = [u8; U64_SIZE];
