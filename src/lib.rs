pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::GreeterConfig;
pub use crate::core::greeter::{compute_name, format_greeting, Greeter};
pub use domain::model::Greeting;
pub use utils::error::{GreeterError, Result};
