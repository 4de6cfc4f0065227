mod error;
mod reader;
mod writer;

#[cfg(test)]
mod tests;

pub use error::DatasetError;
pub use reader::{load_csv, parse_line, read_points};
pub use writer::{save_csv, write_points};
