pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod generate;
pub mod init;
pub mod list;
pub mod log;
pub mod show;
