pub mod add;
pub mod backup;
pub mod config;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod open;
pub mod remind;
