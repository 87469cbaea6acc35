use crate::layout::ImpositionPlanner;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Persisted booklet generation settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct BookletOptions {
    pub reading_order: ReadingOrder,
    #[cfg_attr(feature = "serde", serde(rename = "signatures"))]
    pub num_signatures: usize,
    pub duplex_mode: DuplexMode,
    pub paper_size: PaperSize,
    /// Output base name; per-run, never persisted
    #[cfg_attr(feature = "serde", serde(skip))]
    pub output_name: String,
    /// Output directory; empty means next to the input file
    pub output_folder: String,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            reading_order: ReadingOrder::Western,
            num_signatures: 1,
            duplex_mode: DuplexMode::Auto,
            paper_size: PaperSize::Tabloid,
            output_name: String::new(),
            output_folder: String::new(),
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        ImpositionPlanner::default().check_signature_count(self.num_signatures)
    }
}

/// Location of the persisted [`BookletOptions`].
///
/// Loading and saving degrade gracefully: a missing or broken file yields the
/// defaults, and the application keeps working when it cannot be written.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: std::path::PathBuf,
}

#[cfg(feature = "serde")]
impl ConfigStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Stored options, or the defaults if the file is missing or invalid
    pub async fn load(&self) -> BookletOptions {
        if !tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return BookletOptions::default();
        }

        match BookletOptions::load(&self.path).await {
            Ok(options) => options,
            Err(e) => {
                log::warn!(
                    "Failed to load config from {}: {}; using defaults",
                    self.path.display(),
                    e
                );
                BookletOptions::default()
            }
        }
    }

    /// Write options, creating parent directories as needed
    pub async fn save(&self, options: &BookletOptions) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        options.save(&self.path).await?;
        log::debug!("Saved config to {}", self.path.display());
        Ok(())
    }

    /// Delete the stored config; returns whether a file was removed
    pub async fn reset(&self) -> Result<bool> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
