pub mod activity;
pub mod docs;
pub mod init;
pub mod search;
pub mod trackers;
