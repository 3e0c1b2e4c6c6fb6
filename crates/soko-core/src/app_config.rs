use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Optional YAML file overriding the built-in scoring rules.
    pub rules_path: Option<PathBuf>,
    /// Pretty-print JSON written to stdout.
    pub pretty_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            rules_path: None,
            pretty_json: true,
        }
    }
}
