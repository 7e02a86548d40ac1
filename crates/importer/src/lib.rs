pub mod config;
pub mod reader;
