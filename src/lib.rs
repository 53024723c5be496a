pub mod cli;
pub mod client;
pub mod config;
pub mod documents;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod navigation;
pub mod shell;
pub mod types;
