pub mod audio;
pub mod engine;
pub mod observability;
pub mod storage;
