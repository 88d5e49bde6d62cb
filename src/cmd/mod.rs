pub mod average;
pub mod batch;
pub mod process;
