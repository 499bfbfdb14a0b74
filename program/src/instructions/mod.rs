pub mod send_tweet;

pub use send_tweet::process_send_tweet;
