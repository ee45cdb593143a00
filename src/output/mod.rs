pub mod paths;

pub use paths::{derive_output_path, output_file_name};
