//! Configuration-selected factory singletons
//!
//! A [`FactoryManager`] maps implementation keys to constructors registered
//! by the embedding application. Each key is instantiated at most once; the
//! instance is cached and shared. The default implementation key comes from
//! a [`FactoryConfig`]: an environment variable first, then a properties file.
//!
//! ```rust
//! use std::sync::Arc;
//! use geoapi::factory::{FactoryConfig, FactoryManager};
//!
//! trait Projector: Send + Sync {
//!     fn name(&self) -> &str;
//! }
//!
//! struct Proj4;
//! impl Projector for Proj4 {
//!     fn name(&self) -> &str { "proj4" }
//! }
//!
//! let manager: FactoryManager<dyn Projector> = FactoryManager::new(FactoryConfig::default());
//! manager.register("proj4", || Ok(Arc::new(Proj4) as Arc<dyn Projector>)).unwrap();
//! assert_eq!(manager.get("proj4").unwrap().name(), "proj4");
//! ```

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use indexmap::IndexMap;
use once_cell::sync::OnceCell;

use crate::error::{Error, Result};
use crate::names;

/// Environment variable naming the default factory
pub const DEFAULT_PROPERTY: &str = "GEOAPI_COMMON_FACTORY";

/// Properties file consulted when the environment variable is not set
pub const DEFAULT_PROPERTIES_RESOURCE: &str = "Common.properties";

/// Constructor of one factory implementation
pub type Constructor<F> = Arc<dyn Fn() -> Result<Arc<F>> + Send + Sync>;

/// Where the default factory key is read from
#[derive(Debug, Clone)]
pub struct FactoryConfig {
    /// Environment variable, also used as the key in the properties file
    pub property: String,

    /// Properties file to fall back on
    pub properties_resource: Option<PathBuf>,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            property: DEFAULT_PROPERTY.to_string(),
            properties_resource: Some(PathBuf::from(DEFAULT_PROPERTIES_RESOURCE)),
        }
    }
}

impl FactoryConfig {
    /// Create a configuration reading the given environment variable
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ..Default::default()
        }
    }

    /// Set the properties file to fall back on
    pub fn with_properties_resource(mut self, path: impl Into<PathBuf>) -> Self {
        self.properties_resource = Some(path.into());
        self
    }

    /// Only consult the environment
    pub fn without_properties_resource(mut self) -> Self {
        self.properties_resource = None;
        self
    }

    /// Resolve the default factory key
    ///
    /// A missing properties file is not an error by itself; the lookup just
    /// falls through to the final configuration error.
    pub fn resolve(&self) -> Result<String> {
        if let Ok(value) = std::env::var(&self.property) {
            if let Some(key) = names::normalize(&value) {
                return Ok(key.to_string());
            }
        }

        if let Some(path) = &self.properties_resource {
            if let Some(key) = read_property(path, &self.property)? {
                return Ok(key);
            }
        }

        let fallback = match &self.properties_resource {
            Some(path) => format!(" or the '{}' key in {}", self.property, path.display()),
            None => String::new(),
        };
        Err(Error::Configuration(format!(
            "no factory configured: set the {} environment variable{}",
            self.property, fallback
        )))
    }
}

fn read_property(path: &Path, key: &str) -> Result<Option<String>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(Error::Configuration(format!(
                "cannot read {}: {}",
                path.display(),
                err
            )))
        }
    };
    Ok(parse_properties(&text)
        .shift_remove(key)
        .filter(|value| !value.is_empty()))
}

/// Parse `key = value` lines of a properties file
///
/// Blank lines and lines starting with `#` or `!` are skipped. Keys and values
/// are separated by the first `=` or `:`; a later duplicate key wins.
pub fn parse_properties(text: &str) -> IndexMap<String, String> {
    let mut properties = IndexMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let (key, value) = match line.find(|c: char| c == '=' || c == ':') {
            Some(at) => (&line[..at], &line[at + 1..]),
            None => (line, ""),
        };
        properties.insert(key.trim().to_string(), value.trim().to_string());
    }
    properties
}

/// Key to constructor table with memoized instances
///
/// Constructors run under the instance lock, so each key is built exactly
/// once even under contention. A constructor must not call back into the
/// manager that owns it.
pub struct FactoryManager<F: ?Sized> {
    config: FactoryConfig,
    constructors: RwLock<IndexMap<String, Constructor<F>>>,
    instances: Mutex<IndexMap<String, Arc<F>>>,
    default_key: OnceCell<String>,
}

impl<F: ?Sized + Send + Sync + 'static> FactoryManager<F> {
    /// Create an empty manager
    pub fn new(config: FactoryConfig) -> Self {
        Self {
            config,
            constructors: RwLock::new(IndexMap::new()),
            instances: Mutex::new(IndexMap::new()),
            default_key: OnceCell::new(),
        }
    }

    /// Configuration used to select the default factory
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Register the constructor of an implementation
    pub fn register<C>(&self, key: impl Into<String>, constructor: C) -> Result<()>
    where
        C: Fn() -> Result<Arc<F>> + Send + Sync + 'static,
    {
        let key = key.into();
        let mut constructors = self
            .constructors
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if constructors.contains_key(&key) {
            return Err(Error::DuplicateFactory(key));
        }
        tracing::debug!(key = %key, "registered factory constructor");
        constructors.insert(key, Arc::new(constructor));
        Ok(())
    }

    /// Whether a constructor is registered for `key`
    pub fn is_registered(&self, key: &str) -> bool {
        self.constructors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    /// Registered keys, in registration order
    pub fn keys(&self) -> Vec<String> {
        self.constructors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// The instance for `key`, constructed on first request
    pub fn get(&self, key: &str) -> Result<Arc<F>> {
        let mut instances = self.instances.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(instance) = instances.get(key) {
            return Ok(Arc::clone(instance));
        }

        let constructor = self
            .constructors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .ok_or_else(|| Error::UnregisteredFactory(key.to_string()))?;

        let instance = constructor()?;
        tracing::info!(key, "instantiated factory");
        instances.insert(key.to_string(), Arc::clone(&instance));
        Ok(instance)
    }

    /// Key of the configured default factory
    ///
    /// Resolved on first success and remembered; a failed resolution is
    /// retried on the next call.
    pub fn default_key(&self) -> Result<&str> {
        if let Some(key) = self.default_key.get() {
            return Ok(key.as_str());
        }
        let key = self.config.resolve()?;
        Ok(self.default_key.get_or_init(|| key).as_str())
    }

    /// The configured default factory
    pub fn default_factory(&self) -> Result<Arc<F>> {
        let key = self.default_key()?;
        self.get(key)
    }
}

impl<F: ?Sized> fmt::Debug for FactoryManager<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<String> = self
            .constructors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        f.debug_struct("FactoryManager")
            .field("config", &self.config)
            .field("keys", &keys)
            .field("default_key", &self.default_key.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    struct English;

    impl Greeter for English {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    struct French;

    impl Greeter for French {
        fn greet(&self) -> String {
            "bonjour".to_string()
        }
    }

    fn manager(config: FactoryConfig) -> FactoryManager<dyn Greeter> {
        let manager: FactoryManager<dyn Greeter> = FactoryManager::new(config);
        manager
            .register("english", || Ok(Arc::new(English) as Arc<dyn Greeter>))
            .unwrap();
        manager
            .register("french", || Ok(Arc::new(French) as Arc<dyn Greeter>))
            .unwrap();
        manager
    }

    #[test]
    fn test_parse_properties() {
        let properties = parse_properties(
            "# comment\n! also comment\n\nGEOAPI_COMMON_FACTORY = french\nother:value\nflag\n",
        );
        assert_eq!(properties.get("GEOAPI_COMMON_FACTORY").map(String::as_str), Some("french"));
        assert_eq!(properties.get("other").map(String::as_str), Some("value"));
        assert_eq!(properties.get("flag").map(String::as_str), Some(""));
        assert_eq!(properties.len(), 3);
    }

    #[test]
    fn test_get_memoizes_instances() {
        let calls = Arc::new(AtomicUsize::new(0));
        let manager: FactoryManager<dyn Greeter> =
            FactoryManager::new(FactoryConfig::new("GEOAPI_TEST_MEMO_UNSET"));
        let counter = Arc::clone(&calls);
        manager
            .register("english", move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Arc::new(English) as Arc<dyn Greeter>)
            })
            .unwrap();

        let first = manager.get("english").unwrap();
        let second = manager.get("english").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unregistered_and_duplicate_keys() {
        let manager = manager(FactoryConfig::new("GEOAPI_TEST_KEYS_UNSET"));
        assert!(matches!(manager.get("german"), Err(Error::UnregisteredFactory(_))));
        assert!(matches!(
            manager.register("english", || Ok(Arc::new(English) as Arc<dyn Greeter>)),
            Err(Error::DuplicateFactory(_))
        ));
        assert_eq!(manager.keys(), vec!["english", "french"]);
        assert!(manager.is_registered("french"));
    }

    #[test]
    fn test_default_from_environment() {
        std::env::set_var("GEOAPI_TEST_FACTORY_ENV", "french");
        let config = FactoryConfig::new("GEOAPI_TEST_FACTORY_ENV").without_properties_resource();
        let manager = manager(config);
        assert_eq!(manager.default_factory().unwrap().greet(), "bonjour");
        std::env::remove_var("GEOAPI_TEST_FACTORY_ENV");
    }

    #[test]
    fn test_default_from_properties_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "GEOAPI_TEST_FACTORY_FILE=english").unwrap();

        let config =
            FactoryConfig::new("GEOAPI_TEST_FACTORY_FILE").with_properties_resource(file.path());
        let manager = manager(config);
        assert_eq!(manager.default_key().unwrap(), "english");
        assert_eq!(manager.default_factory().unwrap().greet(), "hello");
    }

    #[test]
    fn test_missing_configuration_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = FactoryConfig::new("GEOAPI_TEST_FACTORY_MISSING")
            .with_properties_resource(dir.path().join("absent.properties"));
        let manager = manager(config);

        let err = manager.default_factory().err().unwrap();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("GEOAPI_TEST_FACTORY_MISSING"));
    }

    #[test]
    fn test_configured_key_must_be_registered() {
        std::env::set_var("GEOAPI_TEST_FACTORY_UNKNOWN", "klingon");
        let manager = manager(FactoryConfig::new("GEOAPI_TEST_FACTORY_UNKNOWN"));
        assert!(matches!(
            manager.default_factory(),
            Err(Error::UnregisteredFactory(ref key)) if key == "klingon"
        ));
        std::env::remove_var("GEOAPI_TEST_FACTORY_UNKNOWN");
    }
}
