pub mod config;

pub use config::{ActionInputs, InputOverrides};
