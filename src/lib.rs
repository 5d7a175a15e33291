pub mod boundary;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;
pub mod version;
pub mod walker;

pub use error::{Result, YamlBumpError};
