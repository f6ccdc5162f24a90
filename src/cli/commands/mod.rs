pub mod config;
pub mod elapsed;
pub mod init;
pub mod render;
