//! Site configuration management for `ncsite.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `[base]`    | Site metadata (title, public url)            |
//! | `[build]`   | Output directory, minify, clean              |
//! | `[serve]`   | Preview server (port, interface)             |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Natural C"
//! url = "http://naturalc.googlecode.com"
//!
//! [build]
//! output = "public"
//! minify = true
//!
//! [serve]
//! port = 8077
//! ```
//!
//! The config file is optional: every page is embedded in the binary, so all
//! commands run with defaults when no `ncsite.toml` is present.

mod base;
mod build;
pub mod defaults;
mod error;
mod serve;

// Internal imports used in this module
use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;
use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing ncsite.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Preview server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = Self::normalize_path(&root);

        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.set_root(&root);

        match &cli.command {
            Commands::Build { build_args } => {
                Self::update_option(&mut self.build.minify, build_args.minify.as_ref());
                self.build.clean |= build_args.clean;
            }
            Commands::Serve { interface, port } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.base.url
            && !url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let config_str = r#"
            [base]
            title = "Natural C"
            url = "http://naturalc.googlecode.com"
        "#;
        let config = SiteConfig::from_str(config_str).unwrap();

        assert_eq!(config.base.title, "Natural C");
        assert_eq!(
            config.base.url,
            Some("http://naturalc.googlecode.com".to_string())
        );
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [base
            title = "Natural C"
        "#;
        let result = SiteConfig::from_str(invalid_config);

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_str("").unwrap();

        assert_eq!(config.base.title, "Natural C");
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.minify);
        assert!(!config.build.clean);
        assert_eq!(config.serve.interface, "127.0.0.1");
        assert_eq!(config.serve.port, 8077);
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_validate_rejects_bad_url_scheme() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            url = "ftp://naturalc.example"
        "#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_missing_url() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [base]
            title = "Test"

            [unknown_section]
            field = "value"
        "#;
        let result = SiteConfig::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_full_config_all_sections() {
        let config = r#"
            [base]
            title = "Natural C"
            url = "http://naturalc.googlecode.com"

            [build]
            output = "dist"
            minify = false
            clean = true

            [serve]
            interface = "0.0.0.0"
            port = 3000
        "#;
        let config = SiteConfig::from_str(config).unwrap();

        assert_eq!(config.base.title, "Natural C");
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.minify);
        assert!(config.build.clean);
        assert_eq!(config.serve.interface, "0.0.0.0");
        assert_eq!(config.serve.port, 3000);
    }
}
