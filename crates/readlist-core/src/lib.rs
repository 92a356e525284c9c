pub mod config;
pub mod logging;

pub mod canonical;
pub mod checksum;
pub mod library;
pub mod store;
