pub mod compute;
pub mod config;
pub mod init;
