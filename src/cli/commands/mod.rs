pub mod clear;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod punch;
pub mod waive;
