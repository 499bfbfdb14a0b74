use pinocchio::{
    account_info::AccountInfo,
    pubkey::{
        pubkey_eq,
        Pubkey,
    },
};

#[inline(always)]
pub fn owned_by(info: &AccountInfo, potential_owner: &Pubkey) -> bool {
    info.is_owned_by(potential_owner)
}

#[inline(always)]
pub fn is_key(info: &AccountInfo, expected: &Pubkey) -> bool {
    pubkey_eq(info.key(), expected)
}
