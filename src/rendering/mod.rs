pub mod report;

pub use report::{write_comparison, write_hashes};
