pub mod config;
pub mod http_client;
pub mod progress;
pub mod shell;
