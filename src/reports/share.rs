//! Messaging deep links for sharing a report
//!
//! Links have the shape `<base_url>/<destination>?text=<encoded report>`.
//! Opening the link is left to whoever displays it.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters left as-is, matching JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const DEFAULT_BASE_URL: &str = "https://wa.me";
pub const DEFAULT_DESTINATION: &str = "+254762634893";

/// Where shared reports are sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareTarget {
    pub base_url: String,
    /// Used whenever no destination override is given
    pub default_destination: String,
}

impl Default for ShareTarget {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_destination: DEFAULT_DESTINATION.to_string(),
        }
    }
}

impl ShareTarget {
    /// Pick the override when it has content, the default otherwise
    pub fn resolve_destination<'a>(&'a self, destination: Option<&'a str>) -> &'a str {
        match destination.map(str::trim) {
            Some(d) if !d.is_empty() => d,
            _ => self.default_destination.trim(),
        }
    }

    /// Build the deep link carrying `text`
    pub fn link(&self, text: &str, destination: Option<&str>) -> String {
        format!(
            "{}/{}?text={}",
            self.base_url.trim_end_matches('/'),
            self.resolve_destination(destination),
            encode_component(text)
        )
    }
}

/// Percent-encode a query component
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}
