pub mod config;
pub mod embed;
pub mod error;
pub mod favicon;
pub mod report;
pub mod rgb565;
