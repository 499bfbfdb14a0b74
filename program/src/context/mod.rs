pub mod send_tweet_context;
