use pinocchio::account_info::AccountInfo;
use tweet_interface::error::TweetError;

use crate::validation::{
    author_info::AuthorInfo,
    system_program_info::SystemProgramInfo,
    uninitialized_account_info::UninitializedAccountInfo,
};

#[derive(Clone)]
pub struct SendTweetContext<'a> {
    pub tweet_account: UninitializedAccountInfo<'a>,
    pub author: AuthorInfo<'a>,
    pub _system_program: SystemProgramInfo<'a>,
}

impl<'a> SendTweetContext<'a> {
    /// The author is checked first so an unsigned request always fails with
    /// [`TweetError::Unauthorized`].
    pub fn load(accounts: &'a [AccountInfo]) -> Result<SendTweetContext<'a>, TweetError> {
        let [tweet_account, author, system_program, ..] = accounts else {
            return Err(TweetError::NotEnoughAccountKeys);
        };

        let author = AuthorInfo::new(author)?;
        let tweet_account = UninitializedAccountInfo::new(tweet_account)?;
        let _system_program = SystemProgramInfo::new(system_program)?;

        Ok(Self {
            tweet_account,
            author,
            _system_program,
        })
    }
}
