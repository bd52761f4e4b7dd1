use crate::core::{ConfigProvider, Greeting, Result, DEFAULT_NAME};
use std::io::Write;

/// Picks the name to greet; empty counts as absent.
pub fn compute_name(name: Option<&str>) -> &str {
    match name {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_NAME,
    }
}

pub fn format_greeting(name: &str) -> Greeting {
    Greeting::for_name(name)
}

pub struct Greeter<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> Greeter<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn greeting(&self) -> Greeting {
        format_greeting(compute_name(self.config.name()))
    }

    /// Writes the greeting line to `out`, then logs it when verbose.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Greeting> {
        let greeting = self.greeting();
        tracing::debug!(verbose = self.config.verbose(), "Resolved greeting");

        writeln!(out, "{}", greeting)?;
        out.flush()?;

        if self.config.verbose() {
            tracing::info!("Greeting message: {}", greeting);
        }

        Ok(greeting)
    }
}
