pub mod greeter;

pub use crate::domain::model::{Greeting, DEFAULT_NAME};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
