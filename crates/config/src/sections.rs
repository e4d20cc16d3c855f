use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use lectern_providers::{Endpoint, ProviderKind, TextCleaner};
use lectern_reference::{DEFAULT_MAX_VERSES_PER_RANGE, DEFAULT_VERSION, Rules};
use serde::{Deserialize, Serialize};

/// Public domain KJV text in the book-array snapshot layout.
pub const KJV_SNAPSHOT_URL: &str = "https://raw.githubusercontent.com/thiagobodruk/bible/master/json/en_kjv.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub primary: ProviderKind,
    /// Per-request timeout, in seconds.
    pub timeout: u64,
    pub bolls: Endpoint,
    pub bible_api: Endpoint,
    pub scripture_api: Endpoint,
}
impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            primary: ProviderKind::Bolls,
            timeout: 10,
            bolls: ProviderKind::Bolls.default_endpoint(),
            bible_api: ProviderKind::BibleApi.default_endpoint(),
            scripture_api: ProviderKind::ScriptureApi.default_endpoint(),
        }
    }
}
impl ProvidersConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn endpoint(&self, kind: ProviderKind) -> &Endpoint {
        match kind {
            ProviderKind::Bolls => &self.bolls,
            ProviderKind::BibleApi => &self.bible_api,
            ProviderKind::ScriptureApi => &self.scripture_api,
        }
    }

    /// Every endpoint, keyed by provider, in declared order.
    pub fn endpoints(&self) -> impl Iterator<Item = (ProviderKind, Endpoint)> + '_ {
        ProviderKind::ALL.into_iter().map(|kind| (kind, self.endpoint(kind).clone()))
    }
}

/// A translation offered to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub code: String,
    pub name: String,
}
impl Version {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self { code: code.into(), name: name.into() }
    }

    /// `"{code} - {name}"`, as shown in pickers.
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

pub(crate) fn default_versions() -> Vec<Version> {
    vec![
        Version::new("NKJV", "New King James Version"),
        Version::new("KJV", "King James Version"),
        Version::new("ESV", "English Standard Version"),
        Version::new("NIV", "New International Version"),
        Version::new("AMP", "Amplified Bible"),
        Version::new("WEB", "World English Bible"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding `{VERSION}.json` snapshots.
    pub path: PathBuf,
    pub use_local_json: bool,
}
impl Default for StorageConfig {
    fn default() -> Self {
        Self { path: crate::data_dir().join("snapshots"), use_local_json: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    /// Lifetime of a cached passage, in seconds.
    pub ttl: u64,
    /// SQLite database file.
    pub path: PathBuf,
}
impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: 30 * 24 * 60 * 60,
            path: crate::data_dir().join("cache.sqlite"),
        }
    }
}
impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    /// Prefix each verse with its number in passage text.
    pub include_verse_numbers: bool,
    pub strip_html: bool,
    pub trim_whitespace: bool,
}
impl Default for FormattingConfig {
    fn default() -> Self {
        Self { include_verse_numbers: true, strip_html: true, trim_whitespace: true }
    }
}
impl FormattingConfig {
    pub fn cleaner(&self) -> TextCleaner {
        TextCleaner { strip_html: self.strip_html, trim_whitespace: self.trim_whitespace }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub strict_mode: bool,
    pub allow_ranges: bool,
    pub max_verses_per_range: u16,
}
impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict_mode: true,
            allow_ranges: true,
            max_verses_per_range: DEFAULT_MAX_VERSES_PER_RANGE,
        }
    }
}
impl ValidationConfig {
    pub fn rules(&self) -> Rules {
        Rules {
            strict: self.strict_mode,
            allow_ranges: self.allow_ranges,
            max_verses_per_range: self.max_verses_per_range,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Version assumed when a reference doesn't name one.
    pub default_version: String,
}
impl Default for ParsingConfig {
    fn default() -> Self {
        Self { default_version: DEFAULT_VERSION.to_string() }
    }
}

pub(crate) fn default_download_sources() -> BTreeMap<String, String> {
    BTreeMap::from([("KJV".to_string(), KJV_SNAPSHOT_URL.to_string())])
}
