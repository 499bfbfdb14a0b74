use pinocchio::account_info::AccountInfo;
use tweet_interface::{
    error::TweetError,
    state::SYSTEM_PROGRAM_ID,
    utils::is_key,
};

#[derive(Clone)]
pub struct SystemProgramInfo<'a> {
    pub _info: &'a AccountInfo,
}

impl<'a> SystemProgramInfo<'a> {
    #[inline(always)]
    pub fn new(info: &'a AccountInfo) -> Result<SystemProgramInfo<'a>, TweetError> {
        if !is_key(info, &SYSTEM_PROGRAM_ID) {
            return Err(TweetError::IncorrectSystemProgram);
        }
        Ok(SystemProgramInfo { _info: info })
    }
}
