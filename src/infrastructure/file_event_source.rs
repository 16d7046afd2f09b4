// File-backed charging event source
use crate::application::event_source::ChargingEventSource;
use crate::domain::charging::ChargingEvent;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a JSON array of events on every load.
#[derive(Debug, Clone)]
pub struct FileEventSource {
    path: PathBuf,
}

impl FileEventSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ChargingEventSource for FileEventSource {
    async fn load_events(&self) -> Result<Vec<ChargingEvent>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        serde_json::from_slice(&bytes).with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_events() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"internalEventId": "a", "date": "2024-09-02T08:00:00Z", "chargingLevel": 33}}]"#
        )
        .unwrap();

        let events = FileEventSource::new(file.path().to_path_buf()).load_events().await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].charging_level.percent(), 33);
    }

    #[tokio::test]
    async fn test_empty_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let events = FileEventSource::new(file.path().to_path_buf()).load_events().await.unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileEventSource::new(dir.path().join("absent.json"));

        let err = source.load_events().await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
