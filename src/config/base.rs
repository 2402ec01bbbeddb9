//! `[base]` section configuration.
//!
//! Basic site metadata. Page content itself is embedded in the binary, so
//! this section only carries what the tool reports, not what it renders.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in ncsite.toml - site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Natural C"
/// url = "http://naturalc.googlecode.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, used in log output.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Public URL of the deployed site, reported after a build.
    /// Must start with http:// or https:// when set.
    #[serde(default)]
    pub url: Option<String>,
}
