// Service exports
pub mod dataset;

pub use dataset::{CollegeDataset, DatasetError};
