use tracing_subscriber::EnvFilter;

/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &[
    "kala_cli",
    "kala_core",
    "kala_ephem",
    "kala_search",
    "kala_time",
    "kala_vedic_base",
];

/// Filter directive for a `-v` count.
///
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing on stderr. `RUST_LOG` overrides the CLI flag if set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert!(default_filter(0).contains("kala_search=warn"));
        assert!(default_filter(1).contains("kala_search=info"));
        assert!(default_filter(2).contains("kala_core=debug"));
        assert!(default_filter(7).contains("kala_ephem=trace"));
    }

    #[test]
    fn every_target_listed() {
        assert_eq!(default_filter(0).split(',').count(), CRATE_TARGETS.len());
    }
}
