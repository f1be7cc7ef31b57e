//! Application configuration management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::{ProjectDirs, UserDirs};
use serde::Deserialize;

use super::tracker::DEFAULT_LOOKAHEAD;

/// Application configuration
///
/// The display theme is intentionally absent: every launch starts light.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window settings
    pub window: WindowConfig,
    /// Scroll tracking settings
    pub scroll: ScrollConfig,
    /// Page layout settings
    pub layout: LayoutConfig,
    /// Static asset settings
    pub assets: AssetConfig,
}

/// Native window settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

/// Scroll tracking settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Pixels added to the scroll offset before section detection
    pub lookahead: f32,
}

/// Page layout settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Maximum width of the content column
    pub content_max_width: f32,
}

/// Where static assets (profile image, résumé) live
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub dir: PathBuf,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 800.0,
            min_width: 640.0,
            min_height: 480.0,
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            content_max_width: 860.0,
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
        }
    }
}

impl AssetConfig {
    /// Resolve a content asset path (`/resume.pdf`) against the asset directory
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.dir.join(path.trim_start_matches('/'))
    }

    /// URI understood by the egui image loaders
    pub fn uri(&self, path: &str) -> String {
        format!("file://{}", self.resolve(path).display())
    }

    /// Copy an asset into `dest_dir`, saved as `download_name`
    pub fn save_copy(&self, path: &str, download_name: &str, dest_dir: &Path) -> Result<PathBuf> {
        let file_name = Path::new(download_name)
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("Invalid download name: {:?}", download_name))?;
        let source = self.resolve(path);
        let target = dest_dir.join(file_name);

        std::fs::create_dir_all(dest_dir)
            .with_context(|| format!("Failed to create {}", dest_dir.display()))?;
        std::fs::copy(&source, &target)
            .with_context(|| format!("Failed to copy {} to {}", source.display(), target.display()))?;

        tracing::info!("Saved {} to {}", source.display(), target.display());
        Ok(target)
    }
}

/// The user's download directory, if the platform defines one
pub fn download_dir() -> Option<PathBuf> {
    UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "portfolio", "Portfolio")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::load_from(&path)
    }

    /// Load configuration from a file, falling back to defaults if it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.scroll.lookahead, 100.0);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "scroll": { "lookahead": 64.0 }, "window": { "width": 1400.0 } }"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.scroll.lookahead, 64.0);
        assert_eq!(config.window.width, 1400.0);
        assert_eq!(config.window.height, 800.0);
        assert_eq!(config.assets.dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_asset_resolution_strips_root() {
        let assets = AssetConfig {
            dir: PathBuf::from("static"),
        };
        assert_eq!(assets.resolve("/Resume-02.pdf"), PathBuf::from("static/Resume-02.pdf"));
        assert_eq!(assets.resolve("me.jpg"), PathBuf::from("static/me.jpg"));
    }

    #[test]
    fn test_save_copy_uses_download_name() {
        let assets_dir = tempdir().unwrap();
        let downloads = tempdir().unwrap();
        std::fs::write(assets_dir.path().join("Resume-02.pdf"), b"%PDF-1.4").unwrap();
        let assets = AssetConfig {
            dir: assets_dir.path().to_path_buf(),
        };

        let saved = assets
            .save_copy("/Resume-02.pdf", "Jane_Doe_Resume.pdf", downloads.path())
            .unwrap();
        assert_eq!(saved, downloads.path().join("Jane_Doe_Resume.pdf"));
        assert_eq!(std::fs::read(&saved).unwrap(), b"%PDF-1.4");
    }

    #[test]
    fn test_save_copy_keeps_only_file_name() {
        let assets_dir = tempdir().unwrap();
        let downloads = tempdir().unwrap();
        std::fs::write(assets_dir.path().join("cv.pdf"), b"cv").unwrap();
        let assets = AssetConfig {
            dir: assets_dir.path().to_path_buf(),
        };

        let saved = assets.save_copy("cv.pdf", "../../escape.pdf", downloads.path()).unwrap();
        assert_eq!(saved, downloads.path().join("escape.pdf"));
    }

    #[test]
    fn test_save_copy_missing_asset_is_error() {
        let assets_dir = tempdir().unwrap();
        let downloads = tempdir().unwrap();
        let assets = AssetConfig {
            dir: assets_dir.path().to_path_buf(),
        };

        assert!(assets.save_copy("/missing.pdf", "cv.pdf", downloads.path()).is_err());
        assert!(!downloads.path().join("cv.pdf").exists());
    }
}
