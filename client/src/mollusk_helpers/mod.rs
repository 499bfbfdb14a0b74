use std::{
    collections::HashMap,
    path::PathBuf,
};

use mollusk_svm::{
    Mollusk,
    MolluskContext,
};
use solana_account::Account;
use solana_address::Address;

use crate::TWEET_PROGRAM_ID;

pub mod checks;
pub mod helper_trait;
pub mod utils;

/// The unix timestamp the mollusk clock sysvar is set to, so tweet timestamps are nonzero.
pub const DEFAULT_UNIX_TIMESTAMP: i64 = 1_650_000_000;

/// Converts an input deploy file to a program name used by the [`Mollusk::new`] function.
///
/// Requires the full file name; for example, `tweet.so` would return the absolute path version of
/// `../target/deploy/tweet`, which is exactly what [`Mollusk::new`] expects.
fn deploy_file_to_program_name(program_name: &str) -> String {
    PathBuf::from(env!("CARGO_WORKSPACE_DIR"))
        .join("target/deploy/")
        .join(program_name)
        .canonicalize()
        .map(|p| {
            p.to_str()
                .expect("Path should convert to a &str")
                .strip_suffix(".so")
                .expect("Deploy file should have an `.so` suffix")
                .to_string()
        })
        .expect("Should create relative target/deploy/ path")
}

/// Creates and returns a [`MolluskContext`] with the following created and initialized:
/// - The `tweet` program
/// - The system program account
/// - The accounts passed
///
/// The clock sysvar's unix timestamp is set to [`DEFAULT_UNIX_TIMESTAMP`].
pub fn new_tweet_mollusk_context(
    accounts: Vec<(Address, Account)>,
) -> MolluskContext<HashMap<Address, Account>> {
    let mut mollusk = Mollusk::new(&TWEET_PROGRAM_ID, &deploy_file_to_program_name("tweet.so"));
    mollusk.sysvars.clock.unix_timestamp = DEFAULT_UNIX_TIMESTAMP;

    let context = mollusk.with_context(HashMap::new());

    let (system_program, system_program_account) =
        mollusk_svm::program::keyed_account_for_system_program();
    context
        .account_store
        .borrow_mut()
        .insert(system_program, system_program_account);

    for (address, account) in accounts {
        context.account_store.borrow_mut().insert(address, account);
    }

    context
}

#[cfg(all(test, feature = "sbf-tests"))]
mod tests {
    use super::*;

    #[test]
    fn tweet_program_path() {
        let tweet = deploy_file_to_program_name("tweet.so");
        assert!(tweet.ends_with("tweet"));

        // Ensure the program deploy path is a valid file.
        assert!(PathBuf::from([tweet.as_str(), ".so"].concat()).is_file());
    }
}
