//! Tracing subscriber setup.
//!
//! The environment tier picks the output format and default level:
//!
//! | Tier    | Format | Level   |
//! |---------|--------|---------|
//! | `local` | text   | `debug` |
//! | `dev`   | JSON   | `debug` |
//! | `prod`  | JSON   | `info`  |
//!
//! `RUST_LOG`, when set, replaces the default level.

use tracing_subscriber::EnvFilter;

use crate::config::Environment;

/// Default filter directive for a tier.
pub fn default_directive(env: Environment) -> &'static str {
    match env {
        Environment::Local | Environment::Dev => "debug",
        Environment::Prod => "info",
    }
}

/// Installs the global subscriber. Call once, before anything logs.
pub fn init(env: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(env)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match env {
        Environment::Local => builder.init(),
        Environment::Dev | Environment::Prod => builder.json().init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(Environment::Local), "debug");
        assert_eq!(default_directive(Environment::Dev), "debug");
        assert_eq!(default_directive(Environment::Prod), "info");
    }
}
