use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default manifest entry name looked up inside archives.
pub const DEFAULT_MANIFEST_NAME: &str = "dependencies.txt";

/// Default archive suffix matched during directory scans (case-sensitive).
pub const DEFAULT_ARCHIVE_SUFFIX: &str = ".jar";

/// HTTP transfer settings (optional `[http]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Total transfer timeout in seconds (None = no limit; a stalled server blocks the run).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Maximum number of redirects followed per download.
    pub max_redirections: u32,
    /// User-Agent header; None = `jardl/<version>`.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            timeout_secs: None,
            max_redirections: 10,
            user_agent: None,
        }
    }
}

impl HttpConfig {
    /// User-Agent to send, falling back to the crate version.
    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("jardl/{}", env!("CARGO_PKG_VERSION")))
    }
}

/// Global configuration loaded from `~/.config/jardl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JardlConfig {
    /// File name of the manifest, both as a top-level archive entry and as a nested suffix.
    pub manifest_name: String,
    /// Suffix an archive file name must end with to be inspected.
    pub archive_suffix: String,
    /// Optional HTTP settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for JardlConfig {
    fn default() -> Self {
        Self {
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            archive_suffix: DEFAULT_ARCHIVE_SUFFIX.to_string(),
            http: None,
        }
    }
}

impl JardlConfig {
    /// Effective HTTP settings (configured section or defaults).
    pub fn http(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("jardl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<JardlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = JardlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<JardlConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: JardlConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    if cfg.manifest_name.is_empty() {
        anyhow::bail!("manifest_name must not be empty ({})", path.display());
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = JardlConfig::default();
        assert_eq!(cfg.manifest_name, "dependencies.txt");
        assert_eq!(cfg.archive_suffix, ".jar");
        assert!(cfg.http.is_none());
        let http = cfg.http();
        assert_eq!(http.connect_timeout_secs, 30);
        assert_eq!(http.timeout_secs, None);
        assert_eq!(http.max_redirections, 10);
        assert!(http.user_agent().starts_with("jardl/"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = JardlConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: JardlConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.manifest_name, cfg.manifest_name);
        assert_eq!(parsed.archive_suffix, cfg.archive_suffix);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            manifest_name = "libs.txt"
            archive_suffix = ".zip"

            [http]
            connect_timeout_secs = 5
            timeout_secs = 120
            max_redirections = 3
            user_agent = "custom/1.0"
        "#;
        let cfg: JardlConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.manifest_name, "libs.txt");
        assert_eq!(cfg.archive_suffix, ".zip");
        let http = cfg.http();
        assert_eq!(http.connect_timeout_secs, 5);
        assert_eq!(http.timeout_secs, Some(120));
        assert_eq!(http.max_redirections, 3);
        assert_eq!(http.user_agent(), "custom/1.0");
    }

    #[test]
    fn load_from_rejects_empty_manifest_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "manifest_name = \"\"\narchive_suffix = \".jar\"\n").unwrap();
        assert!(load_from(&path).is_err());
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "manifest_name = \"deps.txt\"\narchive_suffix = \".war\"\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.manifest_name, "deps.txt");
        assert_eq!(cfg.archive_suffix, ".war");
    }
}
