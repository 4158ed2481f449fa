pub mod csv;
pub mod download;
pub mod lifecycle;
pub mod storage;
pub mod time;

pub use download::{trigger_csv_download, trigger_download};
