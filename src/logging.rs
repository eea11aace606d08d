use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Filter from a `RUST_LOG`-style spec. Missing, blank or unparsable specs
/// fall back to `info`.
pub fn env_filter(spec: Option<&str>) -> EnvFilter {
    spec.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init() {
    let spec = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(spec.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info() {
        assert_eq!(env_filter(None).to_string(), "info");
        assert_eq!(env_filter(Some("  ")).to_string(), "info");
    }

    #[test]
    fn rust_log_level_is_kept() {
        assert_eq!(env_filter(Some("debug")).to_string(), "debug");
        assert_eq!(env_filter(Some("warn")).to_string(), "warn");
    }

    #[test]
    fn per_target_directives_survive() {
        let filter = env_filter(Some("decay_viewer::engine=trace")).to_string();
        assert!(filter.contains("decay_viewer::engine=trace"));
    }
}
