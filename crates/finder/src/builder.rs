use std::collections::BTreeMap;
use std::sync::Arc;

use exn::ResultExt;
use lectern_cache::{Database, Repository};
use lectern_config::{Config, Version};
use lectern_providers::{ProviderChain, ProviderKind, TextCleaner};
use lectern_reference::{DEFAULT_VERSION, Parser, Rules};
use lectern_storage::LocalStore;
use lectern_storage::backend::LocalBackend;
use reqwest::Client;

use crate::error::{ErrorKind, Result};
use crate::finder::{Finder, PassageCache};
use crate::snapshots::DOWNLOAD_TIMEOUT;

/// Assembles a [`Finder`] piece by piece.
///
/// Without a cache, local store or providers the finder still validates
/// references; fetches then fail with
/// [`ProviderUnavailable`](ErrorKind::ProviderUnavailable).
pub struct FinderBuilder {
    default_version: String,
    rules: Rules,
    include_verse_numbers: bool,
    cache: Option<PassageCache>,
    store: Option<LocalStore>,
    use_local_store: bool,
    chain: Option<ProviderChain>,
    versions: Vec<Version>,
    download_sources: BTreeMap<String, String>,
    http: Option<Client>,
}
impl Default for FinderBuilder {
    fn default() -> Self {
        Self {
            default_version: DEFAULT_VERSION.to_string(),
            rules: Rules::default(),
            include_verse_numbers: true,
            cache: None,
            store: None,
            use_local_store: true,
            chain: None,
            versions: Config::default().versions,
            download_sources: BTreeMap::new(),
            http: None,
        }
    }
}
impl FinderBuilder {
    /// Version assumed by [`Finder::parse`] and for blank versions.
    pub fn default_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = version.into();
        self
    }

    pub fn rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn include_verse_numbers(mut self, include: bool) -> Self {
        self.include_verse_numbers = include;
        self
    }

    /// Cache provider results for `ttl`.
    pub fn cache(mut self, repo: Repository, ttl: time::Duration) -> Self {
        self.cache = Some(PassageCache { repo, ttl });
        self
    }

    pub fn local_store(mut self, store: LocalStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Whether fetches consult the local store. Snapshot management works
    /// either way.
    pub fn use_local_store(mut self, enabled: bool) -> Self {
        self.use_local_store = enabled;
        self
    }

    pub fn providers(mut self, chain: ProviderChain) -> Self {
        self.chain = Some(chain);
        self
    }

    pub fn versions(mut self, versions: Vec<Version>) -> Self {
        self.versions = versions;
        self
    }

    pub fn download_sources(mut self, sources: BTreeMap<String, String>) -> Self {
        self.download_sources = sources;
        self
    }

    /// Client used for snapshot downloads.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    pub fn build(self) -> Finder {
        let chain = self.chain.unwrap_or_else(|| ProviderChain::new(ProviderKind::Bolls, [], TextCleaner::default()));
        Finder {
            parser: Parser::new(self.default_version),
            rules: self.rules,
            include_verse_numbers: self.include_verse_numbers,
            cache: self.cache,
            store: self.store,
            use_local_store: self.use_local_store,
            chain,
            versions: self.versions,
            download_sources: self.download_sources,
            http: self.http,
        }
    }
}

impl Finder {
    /// Wires up every source from a loaded configuration.
    ///
    /// Creates the snapshot directory and the cache database (with its parent
    /// directory) when they don't exist yet.
    #[tracing::instrument(skip_all)]
    pub async fn from_config(config: &Config) -> Result<Self> {
        let client = lectern_providers::client(config.providers.timeout()).or_raise(|| ErrorKind::Config)?;
        let chain = ProviderChain::from_endpoints(
            config.providers.primary,
            config.providers.endpoints(),
            &client,
            config.formatting.cleaner(),
        );
        if chain.is_empty() {
            tracing::warn!("no scripture provider is enabled");
        }
        let backend = LocalBackend::new("snapshots", &config.storage.path).or_raise(|| ErrorKind::Storage)?;
        let mut builder = Finder::builder()
            .default_version(config.parsing.default_version.trim())
            .rules(config.validation.rules())
            .include_verse_numbers(config.formatting.include_verse_numbers)
            .local_store(LocalStore::new(Arc::new(backend)))
            .use_local_store(config.storage.use_local_json)
            .providers(chain)
            .versions(config.versions.clone())
            .download_sources(config.download_sources.clone())
            .http_client(lectern_providers::client(DOWNLOAD_TIMEOUT).or_raise(|| ErrorKind::Config)?);
        if config.cache.enabled {
            if let Some(parent) = config.cache.path.parent()
                && !parent.as_os_str().is_empty()
            {
                tokio::fs::create_dir_all(parent).await.or_raise(|| ErrorKind::Cache)?;
            }
            let db = Database::connect(&config.cache.path).await.or_raise(|| ErrorKind::Cache)?;
            let ttl = time::Duration::try_from(config.cache.ttl()).or_raise(|| ErrorKind::Config)?;
            builder = builder.cache(Repository::from(&db), ttl);
        }
        let finder = builder.build();
        tracing::debug!(providers = ?finder.chain.kinds(), cache = config.cache.enabled, "finder ready");
        Ok(finder)
    }
}
