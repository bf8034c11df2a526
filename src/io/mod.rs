pub mod config_io;
pub mod data_dir;
pub mod persist;
pub mod state;
pub mod storage;
