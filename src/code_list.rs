//! The code list contract
//!
//! A code list is an open-ended enumeration: its well-known values are fixed
//! by the standard being modelled, but any name looked up with
//! [`CodeList::value_of`] that is not known yet becomes a new value, visible
//! from then on to every holder of the type.
//!
//! Values are small `Copy` handles holding their ordinal. Two handles of the
//! same type are equal exactly when they denote the same registry entry, so
//! equality is identity.

use std::fmt;
use std::hash::Hash;

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::Serializer;

use crate::error::{Error, Result};
use crate::registry::{CodeEntry, CodeFilter, NewCode, Registry};

/// An extensible enumeration backed by a process-wide [`Registry`]
///
/// Implementations are normally generated by [`code_list!`](crate::code_list!).
pub trait CodeList:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Registry holding every value of this code list
    fn registry() -> &'static Registry;

    /// Handle for the entry at `ordinal`
    #[doc(hidden)]
    fn from_ordinal(ordinal: usize) -> Self;

    /// Position of this value in registration order
    fn ordinal(&self) -> usize;

    /// Value with the given name, created if absent
    ///
    /// Names are trimmed and compared against every name of every value,
    /// ignoring case. A blank name yields `None` without side effects.
    fn value_of(name: &str) -> Option<Self> {
        Self::registry()
            .value_of(name)
            .map(|entry| Self::from_ordinal(entry.ordinal()))
    }

    /// First value accepted by `filter`, created from its codename if absent
    fn value_matching(filter: &dyn CodeFilter) -> Option<Self> {
        Self::registry()
            .value_matching(filter)
            .map(|entry| Self::from_ordinal(entry.ordinal()))
    }

    /// Value with the given name, if it already exists
    fn lookup(name: &str) -> Option<Self> {
        Self::registry()
            .lookup(name)
            .map(|entry| Self::from_ordinal(entry.ordinal()))
    }

    /// Register a new value, failing if one of its names is taken
    fn register(code: NewCode) -> Result<Self> {
        Self::registry()
            .register(code)
            .map(|entry| Self::from_ordinal(entry.ordinal()))
    }

    /// Snapshot of all values, in registration order
    fn values() -> Vec<Self> {
        (0..Self::registry().len()).map(Self::from_ordinal).collect()
    }

    /// All values of the same code list as this one
    fn family(&self) -> Vec<Self> {
        Self::values()
    }

    /// Registry entry for this value
    fn entry(&self) -> &'static CodeEntry {
        Self::registry().entry(self.ordinal())
    }

    /// Canonical programmatic name
    fn name(&self) -> &'static str {
        self.entry().name()
    }

    /// ISO/UML identifier, if declared
    fn identifier(&self) -> Option<&'static str> {
        self.entry().identifier()
    }

    /// Name, identifier and aliases, without duplicates
    fn names(&self) -> Vec<&'static str> {
        self.entry().names()
    }

    /// Human-readable description, if declared
    fn description(&self) -> Option<&'static str> {
        self.entry().description()
    }

    /// Whether this value was declared by the code list itself
    fn is_well_known(&self) -> bool {
        self.entry().is_well_known()
    }

    /// Type-erased handle to this value
    fn erase(self) -> Code {
        Code::new(Self::registry(), self.entry())
    }
}

/// Type-erased handle to a value of any code list
#[derive(Clone, Copy)]
pub struct Code {
    registry: &'static Registry,
    entry: &'static CodeEntry,
}

impl Code {
    pub(crate) fn new(registry: &'static Registry, entry: &'static CodeEntry) -> Self {
        Self { registry, entry }.resolved()
    }

    // The same value in the registry that `registry` forwards to, once a
    // declared type has taken over a code list created at runtime.
    fn resolved(self) -> Self {
        let registry: &'static Registry = self.registry.current();
        if std::ptr::eq(registry, self.registry) {
            return self;
        }
        self.entry
            .names()
            .into_iter()
            .find_map(|name| registry.lookup(name))
            .map_or(self, |entry| Self { registry, entry })
    }

    /// Registry of the code list this value belongs to
    pub fn registry(&self) -> &'static Registry {
        self.resolved().registry
    }

    /// Registry entry for this value
    pub fn entry(&self) -> &'static CodeEntry {
        self.resolved().entry
    }

    /// Type name of the owning code list
    pub fn code_list(&self) -> &'static str {
        self.registry().code_list()
    }

    /// Canonical programmatic name
    pub fn name(&self) -> &'static str {
        self.entry().name()
    }

    /// ISO/UML identifier, if declared
    pub fn identifier(&self) -> Option<&'static str> {
        self.entry().identifier()
    }

    /// Position in registration order
    pub fn ordinal(&self) -> usize {
        self.entry().ordinal()
    }

    /// Whether this value was declared by the code list itself
    pub fn is_well_known(&self) -> bool {
        self.entry().is_well_known()
    }

    /// All values of the same code list, discovered without naming its type
    pub fn family(&self) -> Vec<Code> {
        let registry = self.registry();
        registry
            .entries()
            .into_iter()
            .map(|entry| Code { registry, entry })
            .collect()
    }

    /// Typed handle, if this value belongs to `T`
    pub fn downcast<T: CodeList>(&self) -> Option<T> {
        let this = self.resolved();
        if std::ptr::eq(this.registry, T::registry()) {
            Some(T::from_ordinal(this.entry.ordinal()))
        } else {
            None
        }
    }
}

impl PartialEq for Code {
    fn eq(&self, other: &Self) -> bool {
        let (this, other) = (self.resolved(), other.resolved());
        std::ptr::eq(this.registry, other.registry) && std::ptr::eq(this.entry, other.entry)
    }
}

impl Eq for Code {}

impl std::hash::Hash for Code {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code_list().hash(state);
        self.ordinal().hash(state);
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.entry(), f)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a code list value, creating it if absent
///
/// Only a blank name is rejected.
pub fn parse_code<T: CodeList>(name: &str) -> Result<T> {
    T::value_of(name).ok_or_else(|| {
        Error::Name(format!("blank name for code list {}", T::registry().code_list()))
    })
}

/// Serialize a code list value as its name
pub fn serialize_code<T: CodeList, S: Serializer>(
    code: &T,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(code.name())
}

/// Deserialize a code list value from its name, creating it if absent
pub fn deserialize_code<'de, T: CodeList, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<T, D::Error> {
    let name = String::deserialize(deserializer)?;
    parse_code(&name).map_err(D::Error::custom)
}
