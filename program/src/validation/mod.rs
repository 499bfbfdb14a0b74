pub mod author_info;
pub mod system_program_info;
pub mod uninitialized_account_info;
