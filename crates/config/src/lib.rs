//! Layered configuration.
//!
//! Later layers win:
//!
//! 1. built-in defaults;
//! 2. a TOML, YAML or JSON file (by extension), `lectern.toml` in the
//!    platform config directory unless another path is given;
//! 3. `LECTERN_`-prefixed environment variables, with `__` between nested
//!    keys (`LECTERN_PROVIDERS__PRIMARY=bible-api`);
//! 4. `SCRIPTURE_API_KEY` and `BIBLE_MAX_VERSES`.

pub mod error;
mod sections;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

pub use crate::sections::{
    CacheConfig, FormattingConfig, KJV_SNAPSHOT_URL, ParsingConfig, ProvidersConfig, StorageConfig, ValidationConfig,
    Version,
};
use crate::error::{ErrorKind, Result};

const FILE_NAME: &str = "lectern.toml";
const ENV_PREFIX: &str = "LECTERN_";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "lectern", "lectern")
}

/// Platform data directory, falling back to the system temp directory when
/// no home directory can be determined.
pub(crate) fn data_dir() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => std::env::temp_dir().join("lectern"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub providers: ProvidersConfig,
    /// Offered translations, in picker order.
    pub versions: Vec<Version>,
    pub storage: StorageConfig,
    pub cache: CacheConfig,
    pub formatting: FormattingConfig,
    pub validation: ValidationConfig,
    pub parsing: ParsingConfig,
    /// Version code → URL of a downloadable snapshot.
    pub download_sources: BTreeMap<String, String>,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            providers: ProvidersConfig::default(),
            versions: sections::default_versions(),
            storage: StorageConfig::default(),
            cache: CacheConfig::default(),
            formatting: FormattingConfig::default(),
            validation: ValidationConfig::default(),
            parsing: ParsingConfig::default(),
            download_sources: sections::default_download_sources(),
        }
    }
}
impl Config {
    /// `lectern.toml` in the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(FILE_NAME))
    }

    /// Loads and validates the layered configuration.
    ///
    /// An explicit `path` must exist; the default file is optional.
    #[tracing::instrument(level = "debug")]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) if !path.is_file() => exn::bail!(ErrorKind::NotFound(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path().filter(|path| path.is_file()),
        };
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(file) = &file {
            tracing::debug!(path = %file.display(), "reading config file");
            figment = figment.merge(Self::file_provider(file)?);
        }
        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Env::raw().only(&["SCRIPTURE_API_KEY"]).map(|_| "providers.scripture_api.api_key".into()))
            .merge(Env::raw().only(&["BIBLE_MAX_VERSES"]).map(|_| "validation.max_verses_per_range".into()))
            .extract()
            .or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        Ok(config)
    }

    fn file_provider(path: &Path) -> Result<Figment> {
        let extension = path.extension().and_then(|extension| extension.to_str()).unwrap_or_default();
        let provider = match extension.to_lowercase().as_str() {
            "toml" => Figment::from(Toml::file(path)),
            "yaml" | "yml" => Figment::from(Yaml::file(path)),
            "json" => Figment::from(Json::file(path)),
            _ => exn::bail!(ErrorKind::UnsupportedFormat(path.display().to_string())),
        };
        Ok(provider)
    }

    /// Rejects settings no request could succeed with.
    pub fn validate(&self) -> Result<()> {
        if self.providers.timeout == 0 {
            exn::bail!(ErrorKind::Invalid("providers.timeout must be at least one second".to_string()));
        }
        if self.validation.max_verses_per_range == 0 {
            exn::bail!(ErrorKind::Invalid("validation.max_verses_per_range must be at least 1".to_string()));
        }
        if self.parsing.default_version.trim().is_empty() {
            exn::bail!(ErrorKind::Invalid("parsing.default_version must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use lectern_providers::ProviderKind;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.providers.primary, ProviderKind::Bolls);
        assert_eq!(config.providers.timeout().as_secs(), 10);
        assert_eq!(config.cache.ttl().as_secs(), 2_592_000);
        assert_eq!(config.validation.rules().max_verses_per_range, 20);
        assert_eq!(config.parsing.default_version, "NKJV");
        assert_eq!(config.versions.len(), 6);
        assert_eq!(config.versions[0].label(), "NKJV - New King James Version");
        assert_eq!(config.download_sources.get("KJV").map(String::as_str), Some(KJV_SNAPSHOT_URL));
        assert!(!config.download_sources.contains_key("ESV"));
        assert!(config.storage.path.ends_with("snapshots"));
    }

    #[test]
    fn test_endpoints_in_declared_order() {
        let kinds: Vec<ProviderKind> = Config::default().providers.endpoints().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, ProviderKind::ALL);
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "lectern.toml",
                r#"
                [providers]
                primary = "bible-api"
                timeout = 3
                [providers.bolls]
                enabled = false
                [validation]
                max_verses_per_range = 50
                "#,
            )?;
            let config = Config::load(Some(Path::new("lectern.toml"))).unwrap();
            assert_eq!(config.providers.primary, ProviderKind::BibleApi);
            assert_eq!(config.providers.timeout, 3);
            assert!(!config.providers.bolls.enabled);
            // Partial tables keep the rest of their defaults.
            assert_eq!(config.providers.bolls.base_url, "https://bolls.life");
            assert_eq!(config.validation.max_verses_per_range, 50);
            assert!(config.validation.strict_mode);
            Ok(())
        });
    }

    #[rstest]
    #[case("lectern.yaml", "parsing:\n  default_version: KJV\n")]
    #[case("lectern.yml", "parsing:\n  default_version: KJV\n")]
    #[case("lectern.json", r#"{"parsing": {"default_version": "KJV"}}"#)]
    fn test_file_formats(#[case] name: &str, #[case] contents: &str) {
        Jail::expect_with(|jail| {
            jail.create_file(name, contents)?;
            let config = Config::load(Some(Path::new(name))).unwrap();
            assert_eq!(config.parsing.default_version, "KJV");
            Ok(())
        });
    }

    #[test]
    fn test_environment_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("lectern.toml", "[providers]\nprimary = \"bible-api\"\n")?;
            jail.set_env("LECTERN_PROVIDERS__PRIMARY", "scripture-api");
            jail.set_env("LECTERN_FORMATTING__INCLUDE_VERSE_NUMBERS", "false");
            jail.set_env("SCRIPTURE_API_KEY", "secret");
            jail.set_env("BIBLE_MAX_VERSES", "30");
            let config = Config::load(Some(Path::new("lectern.toml"))).unwrap();
            assert_eq!(config.providers.primary, ProviderKind::ScriptureApi);
            assert!(!config.formatting.include_verse_numbers);
            assert_eq!(config.providers.scripture_api.key(), Some("secret"));
            assert_eq!(config.validation.max_verses_per_range, 30);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(&*err, ErrorKind::NotFound(_)));
    }

    #[test]
    fn test_unsupported_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lectern.ini");
        std::fs::write(&path, "primary=bolls").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(&*err, ErrorKind::UnsupportedFormat(_)));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lectern.toml");
        std::fs::write(&path, "[providers]\nprimary = \"carrier-pigeon\"\n").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Load));
    }

    #[rstest]
    #[case("[providers]\ntimeout = 0\n")]
    #[case("[validation]\nmax_verses_per_range = 0\n")]
    #[case("[parsing]\ndefault_version = \" \"\n")]
    fn test_invalid_values(#[case] contents: &str) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lectern.toml");
        std::fs::write(&path, contents).unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Invalid(_)));
    }
}
