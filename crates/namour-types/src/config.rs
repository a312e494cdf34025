//! Shell configuration.
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! yields the stock `namour@ubuntu-prod-01` session.

use std::path::Path;

use serde::Deserialize;

use crate::error::{NamourError, Result};

/// Identity, home directory, banner, and extra seed files for a shell session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Login name shown in the prompt, `whoami`, and `sudo`.
    pub user: String,
    /// Host name shown in the prompt and `neofetch`.
    pub host: String,
    /// Absolute home directory; target of `cd` with no argument and `~`.
    pub home: String,
    /// First transcript line of a fresh session.
    pub banner: String,
    /// Extra files written into the seeded tree before the session starts.
    pub files: Vec<SeedFile>,
}

/// A file added to the virtual tree from configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedFile {
    /// Absolute path of the file; missing parents are created.
    pub path: String,
    /// File content.
    #[serde(default)]
    pub content: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: "namour".to_string(),
            host: "ubuntu-prod-01".to_string(),
            home: "/home/namour".to_string(),
            banner: "Welcome to Namour System Monitor! Type `help` to see available commands."
                .to_string(),
            files: Vec::new(),
        }
    }
}

impl ShellConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded shell config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !is_normalized_abs(&self.home) {
            return Err(NamourError::Config(format!(
                "home must be an absolute path with no trailing `/`, `.` or `..`: {}",
                self.home
            )));
        }
        if self.user.is_empty() {
            return Err(NamourError::Config("user must not be empty".to_string()));
        }
        for file in &self.files {
            if !file.path.starts_with('/') {
                return Err(NamourError::Config(format!(
                    "seed file path must be absolute: {}",
                    file.path
                )));
            }
        }
        Ok(())
    }
}

/// `/` itself, or `/`-separated non-empty segments other than `.` and `..`.
fn is_normalized_abs(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    match path.strip_prefix('/') {
        Some(rest) => rest
            .split('/')
            .all(|seg| !seg.is_empty() && seg != "." && seg != ".."),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_session() {
        let c = ShellConfig::default();
        assert_eq!(c.user, "namour");
        assert_eq!(c.host, "ubuntu-prod-01");
        assert_eq!(c.home, "/home/namour");
        assert!(c.banner.starts_with("Welcome"));
        assert!(c.files.is_empty());
    }

    #[test]
    fn empty_toml_is_default() {
        let c = ShellConfig::from_toml_str("").unwrap();
        assert_eq!(c, ShellConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let c = ShellConfig::from_toml_str("user = \"randy\"\nhome = \"/home/randy\"").unwrap();
        assert_eq!(c.user, "randy");
        assert_eq!(c.home, "/home/randy");
        assert_eq!(c.host, "ubuntu-prod-01");
    }

    #[test]
    fn seed_files_parse() {
        let text = r#"
            [[files]]
            path = "/etc/motd"
            content = "hello"

            [[files]]
            path = "/tmp/empty"
        "#;
        let c = ShellConfig::from_toml_str(text).unwrap();
        assert_eq!(c.files.len(), 2);
        assert_eq!(c.files[0].path, "/etc/motd");
        assert_eq!(c.files[0].content, "hello");
        assert_eq!(c.files[1].content, "");
    }

    #[test]
    fn relative_home_is_rejected() {
        let err = ShellConfig::from_toml_str("home = \"home/namour\"").unwrap_err();
        assert!(matches!(err, NamourError::Config(_)));
    }

    #[test]
    fn home_must_be_in_normal_form() {
        for home in ["/srv/ops/", "/srv//ops", "/srv/./ops", "/srv/ops/..", "~/ops"] {
            let err = ShellConfig::from_toml_str(&format!("home = \"{home}\"")).unwrap_err();
            assert!(matches!(err, NamourError::Config(_)), "accepted {home}");
        }
    }

    #[test]
    fn root_and_plain_homes_are_accepted() {
        assert_eq!(ShellConfig::from_toml_str("home = \"/\"").unwrap().home, "/");
        assert_eq!(
            ShellConfig::from_toml_str("home = \"/srv/ops\"").unwrap().home,
            "/srv/ops"
        );
    }

    #[test]
    fn relative_seed_path_is_rejected() {
        let err = ShellConfig::from_toml_str("[[files]]\npath = \"etc/motd\"").unwrap_err();
        assert!(matches!(err, NamourError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = ShellConfig::from_toml_str("user = ").unwrap_err();
        assert!(matches!(err, NamourError::TomlParse(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.toml");
        std::fs::write(&path, "host = \"edge-02\"").unwrap();
        let c = ShellConfig::load(&path).unwrap();
        assert_eq!(c.host, "edge-02");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, NamourError::Io(_)));
    }
}
