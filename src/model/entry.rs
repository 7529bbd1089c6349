use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub text: String,
}

pub type LinkMap = BTreeMap<String, Link>;

/// One show listing, ready for rendering.
///
/// `date` is always present (entries without it never get built); every
/// other field is an empty string when the feed did not provide it.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ShowEntry {
    pub date: String,

    #[serde(default)]
    pub time: String,

    #[serde(default)]
    pub venue: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub price: String,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub links: LinkMap,
}

impl ShowEntry {
    /// Where the show happens: `location` when the feed gave one, else `address`.
    pub fn place(&self) -> &str {
        if self.location.is_empty() {
            &self.address
        } else {
            &self.location
        }
    }
}
