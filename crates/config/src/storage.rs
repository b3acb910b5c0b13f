use crate::JobConfig;

/// Prefix under which state stores are declared
pub const STORE_PREFIX: &str = "stores.";

/// Suffix of the key declaring a store's backing factory
pub const STORE_FACTORY_SUFFIX: &str = ".factory";

/// Typed view over the `stores.<name>.factory` key family.
///
/// A job is considered stateful when it declares at least one named store.
/// The grouping layer only consults [`StorageConfig::has_durable_stores`];
/// store instantiation itself belongs to the state engine.
#[derive(Debug, Clone, Copy)]
pub struct StorageConfig<'a> {
    config: &'a JobConfig,
}

impl<'a> StorageConfig<'a> {
    /// Create a storage view over a job configuration
    pub fn new(config: &'a JobConfig) -> Self {
        Self { config }
    }

    /// Names of all declared state stores
    pub fn store_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .config
            .iter()
            .filter_map(|(key, _)| {
                key.strip_prefix(STORE_PREFIX)?
                    .strip_suffix(STORE_FACTORY_SUFFIX)
            })
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();
        names.sort_unstable();
        names
    }

    /// The factory configured for a store, if the store is declared
    pub fn store_factory(&self, store_name: &str) -> Option<&'a str> {
        self.config
            .get(&format!("{STORE_PREFIX}{store_name}{STORE_FACTORY_SUFFIX}"))
    }

    /// Whether the job declares any state store
    pub fn has_durable_stores(&self) -> bool {
        self.config.iter().any(|(key, _)| {
            key.strip_prefix(STORE_PREFIX)
                .and_then(|rest| rest.strip_suffix(STORE_FACTORY_SUFFIX))
                .is_some_and(|name| !name.is_empty())
        })
    }
}
