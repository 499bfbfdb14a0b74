//! Read access to program-owned accounts, independent of where they live.
//!
//! The same trait is implemented by a plain account map, the offline [`crate::ledger::LocalLedger`],
//! a mollusk context and the RPC client, so the query layer in [`crate::query`] works against all of
//! them.

use std::collections::HashMap;

use mollusk_svm::MolluskContext;
use solana_account::Account;
use solana_address::Address;
use tweet_interface::filter::{
    matches_all,
    Memcmp,
};

use crate::error::StoreError;

pub trait TweetStore {
    /// Returns the account at `address`, or `None` if nothing is stored there.
    fn account(&self, address: &Address) -> Result<Option<Account>, StoreError>;

    /// Returns every account owned by `program_id` whose data matches all `filters`.
    fn program_accounts(
        &self,
        program_id: &Address,
        filters: &[Memcmp],
    ) -> Result<Vec<(Address, Account)>, StoreError>;
}

/// Linear scan over `accounts`, keeping the ones owned by `program_id` that match every filter.
pub fn scan_program_accounts<'a>(
    accounts: impl IntoIterator<Item = (&'a Address, &'a Account)>,
    program_id: &Address,
    filters: &[Memcmp],
) -> Vec<(Address, Account)> {
    accounts
        .into_iter()
        .filter(|(_, account)| account.owner == *program_id)
        .filter(|(_, account)| matches_all(&account.data, filters))
        .map(|(address, account)| (*address, account.clone()))
        .collect()
}

impl TweetStore for HashMap<Address, Account> {
    fn account(&self, address: &Address) -> Result<Option<Account>, StoreError> {
        Ok(self.get(address).cloned())
    }

    fn program_accounts(
        &self,
        program_id: &Address,
        filters: &[Memcmp],
    ) -> Result<Vec<(Address, Account)>, StoreError> {
        Ok(scan_program_accounts(self, program_id, filters))
    }
}

impl TweetStore for MolluskContext<HashMap<Address, Account>> {
    fn account(&self, address: &Address) -> Result<Option<Account>, StoreError> {
        Ok(self.account_store.borrow().get(address).cloned())
    }

    fn program_accounts(
        &self,
        program_id: &Address,
        filters: &[Memcmp],
    ) -> Result<Vec<(Address, Account)>, StoreError> {
        Ok(scan_program_accounts(
            self.account_store.borrow().iter(),
            program_id,
            filters,
        ))
    }
}
