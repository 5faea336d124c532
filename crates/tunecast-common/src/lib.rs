pub mod config;
pub mod contact;
pub mod error;
pub mod footer;
pub mod navigation;
pub mod session;

pub use error::{Result, TunecastError};
