use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// The supported remote providers, in fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// bolls.life
    Bolls,
    /// bible-api.com
    #[serde(alias = "bible_api")]
    BibleApi,
    /// API.Bible (needs an API key)
    #[serde(alias = "scripture_api")]
    ScriptureApi,
}
impl ProviderKind {
    /// Every provider in declared fallback order.
    pub const ALL: [Self; 3] = [Self::Bolls, Self::BibleApi, Self::ScriptureApi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bolls => "bolls",
            Self::BibleApi => "bible-api",
            Self::ScriptureApi => "scripture-api",
        }
    }

    /// The public endpoint and version mapping each provider ships with.
    pub fn default_endpoint(&self) -> Endpoint {
        match self {
            Self::Bolls => Endpoint::new("https://bolls.life").with_versions([
                ("NKJV", "NKJV"),
                ("KJV", "KJV"),
                ("WEB", "WEB"),
            ]),
            Self::BibleApi => Endpoint::new("https://bible-api.com").with_versions([("KJV", "kjv"), ("WEB", "web")]),
            // Skipped by the chain until an API key is configured.
            Self::ScriptureApi => Endpoint::new("https://api.scripture.api.bible/v1").with_versions([
                ("KJV", "de4e12af7f28f599-02"),
                ("ESV", "06125adad2d5898a-01"),
                ("NIV", "78a9f6124f344018-01"),
                ("NKJV", "27979a461cf4e01b-01"),
            ]),
        }
    }
}
impl Display for ProviderKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sanitized = s.trim().to_lowercase().replace('_', "-");
        match Self::ALL.into_iter().find(|kind| kind.as_str() == sanitized) {
            Some(kind) => Ok(kind),
            None => exn::bail!(ErrorKind::UnknownProvider(s.to_string())),
        }
    }
}

/// Where and how to reach one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Canonical version code → the provider's own identifier.
    #[serde(default)]
    pub versions: BTreeMap<String, String>,
}
fn enabled_by_default() -> bool {
    true
}
impl Endpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            enabled: true,
            base_url: base_url.into(),
            api_key: None,
            versions: BTreeMap::new(),
        }
    }

    pub fn with_versions<'a>(mut self, versions: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        self.versions
            .extend(versions.into_iter().map(|(code, id)| (code.to_string(), id.to_string())));
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// `base_url` without trailing slashes.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// A non-blank API key, if one is configured.
    pub fn key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|key| !key.is_empty())
    }

    /// The provider's identifier for a canonical version code, if mapped.
    pub fn mapped_version(&self, version: &str) -> Option<&str> {
        let version = version.trim();
        self.versions
            .get(version)
            .or_else(|| self.versions.get(&version.to_uppercase()))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("bolls", ProviderKind::Bolls)]
    #[case("bible-api", ProviderKind::BibleApi)]
    #[case("bible_api", ProviderKind::BibleApi)]
    #[case(" Scripture-API ", ProviderKind::ScriptureApi)]
    fn test_from_str(#[case] input: &str, #[case] expected: ProviderKind) {
        assert_eq!(input.parse::<ProviderKind>().unwrap(), expected);
        assert_eq!(expected.to_string().parse::<ProviderKind>().unwrap(), expected);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "esv-api".parse::<ProviderKind>().unwrap_err();
        assert_eq!(*err, ErrorKind::UnknownProvider("esv-api".to_string()));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&ProviderKind::BibleApi).unwrap(), r#""bible-api""#);
        let kind: ProviderKind = serde_json::from_str(r#""scripture_api""#).unwrap();
        assert_eq!(kind, ProviderKind::ScriptureApi);
    }

    #[test]
    fn test_declared_order() {
        let mut kinds = vec![ProviderKind::ScriptureApi, ProviderKind::Bolls, ProviderKind::BibleApi];
        kinds.sort();
        assert_eq!(kinds, ProviderKind::ALL);
    }

    #[test]
    fn test_default_endpoints() {
        assert!(ProviderKind::Bolls.default_endpoint().enabled);
        assert_eq!(ProviderKind::ScriptureApi.default_endpoint().key(), None);
        let bible_api = ProviderKind::BibleApi.default_endpoint();
        assert_eq!(bible_api.mapped_version("kjv"), Some("kjv"));
        assert_eq!(bible_api.mapped_version("NKJV"), None);
    }

    #[test]
    fn test_endpoint_helpers() {
        let endpoint = Endpoint::new("https://example.test/v1/").with_api_key("  ");
        assert_eq!(endpoint.base(), "https://example.test/v1");
        assert_eq!(endpoint.key(), None);
        assert_eq!(endpoint.with_api_key("secret").key(), Some("secret"));
    }

    #[test]
    fn test_endpoint_deserialize_defaults() {
        let endpoint: Endpoint = serde_json::from_str(r#"{"base_url": "https://bolls.life"}"#).unwrap();
        assert_eq!(endpoint, Endpoint::new("https://bolls.life"));
    }
}
