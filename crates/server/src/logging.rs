use tracing_subscriber::{EnvFilter, prelude::*};

/// Installs the global subscriber. `level` applies to this workspace's crates,
/// everything else logs at `warn`.
pub fn init_tracing(level: &str) -> Result<(), tracing_subscriber::filter::ParseError> {
    let env_filter = EnvFilter::try_new(filter_directives(level))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();
    Ok(())
}

fn filter_directives(level: &str) -> String {
    format!("warn,whoami_server={level},identity={level},utils={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives_parse() {
        let directives = filter_directives("debug");
        assert_eq!(directives, "warn,whoami_server=debug,identity=debug,utils=debug");
        assert!(EnvFilter::try_new(directives).is_ok());
    }
}
