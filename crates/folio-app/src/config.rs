//! Configuration file parsing
//!
//! An optional `folio.toml` next to the site assets tunes resolution and
//! output behavior. A missing file means defaults; a malformed file is
//! logged and also means defaults, so a bad edit never takes the site down.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use folio_core::resolver::DEFAULT_ASSET_DIR;

/// Configuration filename looked up in the site root
pub const CONFIG_FILE: &str = "folio.toml";

/// Asset resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Name of the asset subdirectory as authored on disk. The lower-case
    /// variant is always probed as well.
    pub dir_name: String,
    /// Extra candidate directories appended after the discovered roots
    pub extra_roots: Vec<PathBuf>,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            dir_name: DEFAULT_ASSET_DIR.to_string(),
            extra_roots: Vec::new(),
        }
    }
}

/// Remote fallback settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    /// Overrides the built-in remote image base URL
    pub image_base: Option<String>,
}

/// Output settings for the document save control
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory saved documents are copied into (default: working directory)
    pub save_dir: Option<PathBuf>,
}

/// All settings from `folio.toml`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub assets: AssetSettings,
    pub remote: RemoteSettings,
    pub output: OutputSettings,
}

impl Settings {
    /// Parse the remote base override into a URL.
    ///
    /// A trailing slash is appended if missing so joined image names extend
    /// the path instead of replacing its last segment. Invalid URLs are
    /// logged and ignored.
    pub fn remote_image_base(&self) -> Option<Url> {
        let raw = self.remote.image_base.as_deref()?;
        let normalized = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        };
        match Url::parse(&normalized) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("ignoring invalid remote.image_base {:?}: {}", raw, e);
                None
            }
        }
    }

    /// Directory saved documents land in
    pub fn save_dir(&self) -> PathBuf {
        self.output
            .save_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Load settings from `folio.toml` in the site root.
///
/// Missing file yields defaults silently; a parse failure is logged as a
/// warning and yields defaults.
pub fn load_settings(site_root: &Path) -> Settings {
    let path = site_root.join(CONFIG_FILE);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Settings::default(),
    };

    match toml::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("failed to parse {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.assets.dir_name, "Projects");
        assert!(settings.assets.extra_roots.is_empty());
        assert!(settings.remote.image_base.is_none());
        assert_eq!(settings.save_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[assets]\ndir_name = \"Assets\"\n",
        )
        .unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.assets.dir_name, "Assets");
        assert!(settings.remote.image_base.is_none());
    }

    #[test]
    fn test_malformed_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "assets = not toml [").unwrap();
        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_remote_base_gains_trailing_slash() {
        let settings = Settings {
            remote: RemoteSettings {
                image_base: Some("https://cdn.example.com/img".to_string()),
            },
            ..Settings::default()
        };
        assert_eq!(
            settings.remote_image_base().unwrap().as_str(),
            "https://cdn.example.com/img/"
        );
    }

    #[test]
    fn test_invalid_remote_base_is_ignored() {
        let settings = Settings {
            remote: RemoteSettings {
                image_base: Some("not a url".to_string()),
            },
            ..Settings::default()
        };
        assert!(settings.remote_image_base().is_none());
    }

    #[test]
    fn test_full_config_round_trip() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
[assets]
dir_name = "Projects"
extra_roots = ["/srv/assets"]

[remote]
image_base = "https://cdn.example.com/img/"

[output]
save_dir = "/tmp/saved"
"#,
        )
        .unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.assets.extra_roots, vec![PathBuf::from("/srv/assets")]);
        assert_eq!(settings.save_dir(), PathBuf::from("/tmp/saved"));
        assert!(settings.remote_image_base().is_some());
    }
}
