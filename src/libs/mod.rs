pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod messages;
pub mod occurrence;
pub mod report;
pub mod storage;
pub mod task;
pub mod tracker;
pub mod view;
