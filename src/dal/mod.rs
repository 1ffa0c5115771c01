pub mod dataset_file;

pub use dataset_file::*;
