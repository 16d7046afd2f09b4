use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "config/dashboard";
const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub source: SourceSettings,
    pub refresh: RefreshSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: SocketAddr,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceSettings {
    Http {
        url: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
    File {
        path: PathBuf,
    },
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshSettings {
    pub interval_secs: u64,
    pub recent_events: usize,
}

impl RefreshSettings {
    /// `None` when periodic refresh is disabled.
    pub fn interval(&self) -> Option<Duration> {
        (self.interval_secs > 0).then(|| Duration::from_secs(self.interval_secs))
    }
}

fn default_timeout_secs() -> u64 {
    10
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_dashboard_config_from(DEFAULT_CONFIG_FILE)
}

/// Read `name` (any format the `config` crate detects) and overlay
/// `DASHBOARD__SECTION__KEY` environment variables.
pub fn load_dashboard_config_from(name: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("refresh.interval_secs", 300)?
        .set_default("refresh.recent_events", 5)?
        .add_source(config::File::with_name(name))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_http_source_with_defaults() {
        let file = write_config(
            r#"
[source]
kind = "http"
url = "http://localhost:9000/battery/timeline"
"#,
        );
        let config = load_dashboard_config_from(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(
            config.source,
            SourceSettings::Http {
                url: "http://localhost:9000/battery/timeline".to_string(),
                timeout_secs: 10,
            }
        );
        assert_eq!(config.refresh.interval(), Some(Duration::from_secs(300)));
        assert_eq!(config.refresh.recent_events, 5);
    }

    #[test]
    fn test_file_source_without_refresh() {
        let file = write_config(
            r#"
[server]
bind = "127.0.0.1:3000"

[source]
kind = "file"
path = "data/timeline.json"

[refresh]
interval_secs = 0
recent_events = 3
"#,
        );
        let config = load_dashboard_config_from(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.server.bind.port(), 3000);
        assert_eq!(
            config.source,
            SourceSettings::File {
                path: PathBuf::from("data/timeline.json"),
            }
        );
        assert_eq!(config.refresh.interval(), None);
        assert_eq!(config.refresh.recent_events, 3);
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let file = write_config("[server]\nbind = \"127.0.0.1:3000\"\n");
        assert!(load_dashboard_config_from(file.path().to_str().unwrap()).is_err());
    }
}
