//! `[build]` section configuration.
//!
//! Settings for writing the static output tree.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in ncsite.toml - static output settings.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"
/// minify = true
/// clean = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory. Set from the CLI, never from the file.
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Output directory for rendered pages (relative to root).
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Minify rendered HTML before writing it out.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Remove the output directory before building.
    #[serde(default)]
    pub clean: bool,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config() {
        let config = r#"
            [build]
            output = "dist"
            minify = false
            clean = true
        "#;
        let config = SiteConfig::from_str(config).unwrap();

        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.minify);
        assert!(config.build.clean);
    }

    #[test]
    fn test_build_config_defaults() {
        let config = SiteConfig::from_str("").unwrap();

        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.minify);
        assert!(!config.build.clean);
        assert!(config.build.root.is_none());
    }

    #[test]
    fn test_root_not_settable_from_file() {
        // `root` is serde(skip): a [build] table carrying it must be rejected
        let config = r#"
            [build]
            root = "/somewhere"
        "#;
        assert!(SiteConfig::from_str(config).is_err());
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [build]
            watch = true
        "#;
        assert!(SiteConfig::from_str(config).is_err());
    }
}
