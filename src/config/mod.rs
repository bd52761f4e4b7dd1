use crate::core::ConfigProvider;
use std::env;

/// Environment variable holding the name to greet.
pub const NAME_ENV: &str = "NAME";

/// First-argument flag that turns on the greeting log line.
pub const VERBOSE_FLAG: &str = "--verbose";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreeterConfig {
    pub name: Option<String>,
    pub verbose: bool,
}

impl GreeterConfig {
    /// Builds a config from explicit inputs. `args` excludes the program name
    /// and only its first element is looked at.
    pub fn from_parts<I, S>(name: Option<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let verbose = args
            .into_iter()
            .next()
            .is_some_and(|first| first.as_ref() == VERBOSE_FLAG);

        Self { name, verbose }
    }

    pub fn from_env() -> Self {
        // Invalid Unicode is kept, with the bad bytes replaced by U+FFFD.
        let name = env::var_os(NAME_ENV).map(|value| value.to_string_lossy().into_owned());
        Self::from_parts(name, env::args().skip(1))
    }
}

impl ConfigProvider for GreeterConfig {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}
