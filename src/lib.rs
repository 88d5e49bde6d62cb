pub mod api;
pub mod average;
pub mod config;
pub mod error;
pub mod replay;
pub mod stats;
// cmd and reports are binary modules (see main.rs).
