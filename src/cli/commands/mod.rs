pub mod add_slots;
pub mod book;
pub mod clear;
pub mod config;
pub mod cost;
pub mod export;
pub mod free;
pub mod init;
pub mod records;
pub mod slots;
