// Declare all modules
pub mod app;
pub mod config;
pub mod error;
pub mod security;
pub mod shell;
pub mod storage;
pub mod utils;
pub mod voters;
pub mod voting;

// No re-exports here as they're handled in lib.rs
