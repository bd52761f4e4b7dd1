use std::fmt;

/// Name used when none is supplied, or when the supplied one is empty.
pub const DEFAULT_NAME: &str = "World";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting(String);

impl Greeting {
    pub fn for_name(name: &str) -> Self {
        Self(format!("Hello, {}!", name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
