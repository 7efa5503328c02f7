//! Per-type registry of code list values
//!
//! A [`Registry`] is the ordered, append-only, name-keyed collection backing
//! one code list. Well-known values are seeded when the registry is built;
//! every later value is created on demand by [`Registry::value_of`] and lives
//! for the rest of the process.
//!
//! # Locking
//!
//! Each registry owns its own lock, so unrelated code lists never contend.
//! Lookups scan under a shared lock; creation re-scans and appends under the
//! exclusive lock, which makes lookup-or-create atomic: threads racing on the
//! same absent name all receive the single entry created by the winner.
//!
//! Entries are leaked on creation. The registry never removes a value, so a
//! `&'static CodeEntry` handed out once stays valid and keeps its identity.
//!
//! A dynamic registry may later be superseded by the registry of a declared
//! type of the same name. Its codes are copied into the successor and every
//! later operation is forwarded there.

use std::borrow::Cow;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::OnceCell;

use crate::error::{Error, Result};
use crate::names;

/// Compile-time description of a well-known code
#[derive(Debug, Clone, Copy)]
pub struct WellKnown {
    /// Programmatic name (`CLOUD`)
    pub name: &'static str,
    /// ISO/UML identifier (`cloud`)
    pub identifier: Option<&'static str>,
    /// Additional names accepted by lookups
    pub aliases: &'static [&'static str],
    /// Human-readable description
    pub description: Option<&'static str>,
}

impl WellKnown {
    /// Create a well-known code with only a programmatic name
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            identifier: None,
            aliases: &[],
            description: None,
        }
    }

    /// Set the ISO/UML identifier
    pub const fn identifier(mut self, identifier: &'static str) -> Self {
        self.identifier = Some(identifier);
        self
    }

    /// Set the alias names
    pub const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Set the description
    pub const fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Position of the well-known code called `name` in `table`
///
/// Used by [`code_list!`](crate::code_list!) to turn constant declarations into
/// ordinals at compile time.
pub const fn well_known_index(table: &[WellKnown], name: &str) -> usize {
    let mut i = 0;
    while i < table.len() {
        if const_str_eq(table[i].name, name) {
            return i;
        }
        i += 1;
    }
    panic!("no well-known code of that name");
}

const fn const_str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Description of a code registered at runtime
#[derive(Debug, Clone, Default)]
pub struct NewCode {
    /// Programmatic name
    pub name: String,
    /// ISO/UML identifier
    pub identifier: Option<String>,
    /// Additional names accepted by lookups
    pub aliases: Vec<String>,
    /// Human-readable description
    pub description: Option<String>,
}

impl NewCode {
    /// Create a new code description
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the ISO/UML identifier
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Add an alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.identifier.as_deref())
            .chain(self.aliases.iter().map(String::as_str))
    }
}

impl From<&CodeEntry> for NewCode {
    fn from(entry: &CodeEntry) -> Self {
        Self {
            name: entry.name().to_string(),
            identifier: entry.identifier().map(str::to_string),
            aliases: entry.aliases().into_iter().map(str::to_string).collect(),
            description: entry.description().map(str::to_string),
        }
    }
}

/// One named member of a code list
#[derive(Debug)]
pub struct CodeEntry {
    code_list: &'static str,
    ordinal: usize,
    name: Cow<'static, str>,
    identifier: Option<Cow<'static, str>>,
    aliases: Vec<Cow<'static, str>>,
    description: Option<Cow<'static, str>>,
    well_known: bool,
}

impl CodeEntry {
    fn well_known(code_list: &'static str, ordinal: usize, code: &WellKnown) -> Self {
        Self {
            code_list,
            ordinal,
            name: Cow::Borrowed(code.name.trim()),
            identifier: code.identifier.map(Cow::Borrowed),
            aliases: code.aliases.iter().map(|alias| Cow::Borrowed(*alias)).collect(),
            description: code.description.map(Cow::Borrowed),
            well_known: true,
        }
    }

    fn dynamic(code_list: &'static str, ordinal: usize, code: NewCode) -> Self {
        Self {
            code_list,
            ordinal,
            name: Cow::Owned(code.name.trim().to_string()),
            identifier: code.identifier.map(Cow::Owned),
            aliases: code.aliases.into_iter().map(Cow::Owned).collect(),
            description: code.description.map(Cow::Owned),
            well_known: false,
        }
    }

    /// Type name of the owning code list
    pub fn code_list(&self) -> &'static str {
        self.code_list
    }

    /// Position in the owning registry
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Canonical programmatic name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISO/UML identifier, if declared
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Human-readable description, if declared
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Additional names accepted by lookups
    pub fn aliases(&self) -> Vec<&str> {
        self.aliases.iter().map(|alias| &**alias).collect()
    }

    /// All names of this code: name, identifier, then aliases, without duplicates
    pub fn names(&self) -> Vec<&str> {
        let mut all: Vec<&str> = Vec::with_capacity(2 + self.aliases.len());
        for name in self.all_names() {
            if !all.contains(&name) {
                all.push(name);
            }
        }
        all
    }

    /// Whether the code was declared by its code list rather than created at runtime
    pub fn is_well_known(&self) -> bool {
        self.well_known
    }

    /// Whether any name of this code matches `name`, ignoring case
    pub fn matches(&self, name: &str) -> bool {
        self.all_names().any(|candidate| names::names_match(candidate, name))
    }

    fn all_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(&*self.name)
            .chain(self.identifier.as_deref())
            .chain(self.aliases.iter().map(|alias| &**alias))
    }
}

impl fmt::Display for CodeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.code_list, self.name)
    }
}

/// Selection criterion for [`Registry::value_matching`]
///
/// The filter is only ever called on snapshots, outside the registry lock, so
/// it may itself look up or create codes in the same code list.
pub trait CodeFilter {
    /// Whether `code` is the one being looked for
    fn accept(&self, code: &CodeEntry) -> bool;

    /// Name of the code to create when nothing is accepted
    ///
    /// Returning `None` makes the lookup answer "no value" instead.
    fn codename(&self) -> Option<&str>;
}

struct NameFilter<'a>(&'a str);

impl CodeFilter for NameFilter<'_> {
    fn accept(&self, code: &CodeEntry) -> bool {
        code.matches(self.0)
    }

    fn codename(&self) -> Option<&str> {
        Some(self.0)
    }
}

/// Ordered, append-only collection of the values of one code list
pub struct Registry {
    code_list: &'static str,
    identifier: Option<&'static str>,
    well_known: usize,
    entries: RwLock<Vec<&'static CodeEntry>>,
    successor: OnceCell<&'static Registry>,
}

impl Registry {
    /// Create an empty registry
    pub fn new(code_list: &'static str, identifier: Option<&'static str>) -> Self {
        Self {
            code_list,
            identifier,
            well_known: 0,
            entries: RwLock::new(Vec::new()),
            successor: OnceCell::new(),
        }
    }

    /// Create a registry seeded with the given well-known codes, in order
    ///
    /// Fails if two codes share a name, identifier or alias (ignoring case).
    pub fn with_well_known(
        code_list: &'static str,
        identifier: Option<&'static str>,
        codes: &[WellKnown],
    ) -> Result<Self> {
        let mut seeded: Vec<CodeEntry> = Vec::with_capacity(codes.len());
        for code in codes {
            names::validate_code_name(code.name)?;
            let entry = CodeEntry::well_known(code_list, seeded.len(), code);
            if let Some(name) = first_clash(seeded.iter(), entry.all_names()) {
                return Err(Error::DuplicateCode {
                    code_list: code_list.to_string(),
                    name,
                });
            }
            seeded.push(entry);
        }

        let entries: Vec<&'static CodeEntry> = seeded
            .into_iter()
            .map(|entry| -> &'static CodeEntry { Box::leak(Box::new(entry)) })
            .collect();

        Ok(Self {
            code_list,
            identifier,
            well_known: entries.len(),
            entries: RwLock::new(entries),
            successor: OnceCell::new(),
        })
    }

    /// Type name of this code list
    pub fn code_list(&self) -> &'static str {
        self.code_list
    }

    /// ISO/UML identifier of this code list
    pub fn identifier(&self) -> Option<&'static str> {
        self.identifier
    }

    /// Number of well-known codes seeded at construction
    pub fn well_known_count(&self) -> usize {
        self.well_known
    }

    /// Registry now holding the codes of this one
    ///
    /// Returns `self` unless this registry was superseded.
    pub fn current(&self) -> &Registry {
        let mut current = self;
        while let Some(next) = current.successor.get() {
            current = next;
        }
        current
    }

    /// Whether the codes of this registry moved to another one
    pub fn is_superseded(&self) -> bool {
        self.successor.get().is_some()
    }

    /// Number of codes currently registered
    pub fn len(&self) -> usize {
        self.current().read().len()
    }

    /// Whether no code is registered
    pub fn is_empty(&self) -> bool {
        self.current().read().is_empty()
    }

    /// Code at the given ordinal
    pub fn get(&self, ordinal: usize) -> Option<&'static CodeEntry> {
        self.current().read().get(ordinal).copied()
    }

    /// Code at an ordinal handed out by this registry
    pub(crate) fn entry(&self, ordinal: usize) -> &'static CodeEntry {
        self.current().read()[ordinal]
    }

    /// Snapshot of all codes, in registration order
    pub fn entries(&self) -> Vec<&'static CodeEntry> {
        self.current().read().clone()
    }

    /// Find a code by any of its names without creating one
    pub fn lookup(&self, name: &str) -> Option<&'static CodeEntry> {
        let name = names::normalize(name)?;
        self.current()
            .read()
            .iter()
            .copied()
            .find(|entry| entry.matches(name))
    }

    /// Find a code by name, creating it if absent
    ///
    /// Returns `None` only for a blank name; the registry is left untouched.
    pub fn value_of(&self, name: &str) -> Option<&'static CodeEntry> {
        let name = names::normalize(name)?;
        self.value_matching(&NameFilter(name))
    }

    /// Find the first code accepted by `filter`, creating one if none is
    ///
    /// The new code is named by [`CodeFilter::codename`]. An existing code
    /// already carrying that name is returned rather than duplicated.
    pub fn value_matching(&self, filter: &dyn CodeFilter) -> Option<&'static CodeEntry> {
        let this = self.current();
        let mut seen = 0;
        loop {
            let snapshot = this.entries();
            let unseen = snapshot.get(seen..).unwrap_or_default();
            if let Some(found) = unseen.iter().copied().find(|entry| filter.accept(entry)) {
                return Some(found);
            }
            seen = snapshot.len();

            let name = names::normalize(filter.codename()?)?;
            let mut entries = this.write();
            if this.is_superseded() {
                drop(entries);
                return self.value_matching(filter);
            }
            // Codes were added since the snapshot: filter those first.
            if entries.len() != seen {
                continue;
            }
            if let Some(existing) = entries.iter().copied().find(|entry| entry.matches(name)) {
                return Some(existing);
            }
            return Some(this.push(&mut entries, NewCode::new(name)));
        }
    }

    /// Register a new code
    ///
    /// Unlike [`Registry::value_of`] this fails when any of the new code's
    /// names is already taken.
    pub fn register(&self, code: NewCode) -> Result<&'static CodeEntry> {
        names::validate_code_name(&code.name)?;
        let this = self.current();
        let mut entries = this.write();
        if this.is_superseded() {
            drop(entries);
            return self.register(code);
        }
        if let Some(name) = first_clash(entries.iter().copied(), code.names()) {
            return Err(Error::DuplicateCode {
                code_list: this.code_list.to_string(),
                name,
            });
        }
        Ok(this.push(&mut entries, code))
    }

    /// Return the code sharing a name with `code`, or register it
    ///
    /// The boolean is `true` when the code was created by this call.
    pub fn find_or_register(&self, code: NewCode) -> Result<(&'static CodeEntry, bool)> {
        names::validate_code_name(&code.name)?;
        let this = self.current();
        let mut entries = this.write();
        if this.is_superseded() {
            drop(entries);
            return self.find_or_register(code);
        }
        let existing = entries
            .iter()
            .copied()
            .find(|entry| code.names().any(|name| entry.matches(name)));
        match existing {
            Some(entry) => Ok((entry, false)),
            None => Ok((this.push(&mut entries, code), true)),
        }
    }

    /// Copy every code into `successor` and forward later operations to it
    ///
    /// Codes already present in the successor under any of their names are
    /// merged with them.
    pub(crate) fn supersede(&self, successor: &'static Registry) -> Result<()> {
        let entries = self.write();
        if self.is_superseded() {
            return Err(Error::DuplicateCodeList(self.code_list.to_string()));
        }
        for entry in entries.iter() {
            successor.find_or_register(NewCode::from(*entry))?;
        }
        self.successor
            .set(successor)
            .map_err(|_| Error::DuplicateCodeList(self.code_list.to_string()))
    }

    fn push(&self, entries: &mut Vec<&'static CodeEntry>, code: NewCode) -> &'static CodeEntry {
        let entry: &'static CodeEntry =
            Box::leak(Box::new(CodeEntry::dynamic(self.code_list, entries.len(), code)));
        entries.push(entry);
        tracing::debug!(
            code_list = self.code_list,
            name = entry.name(),
            ordinal = entry.ordinal(),
            "registered code"
        );
        entry
    }

    // A panic while holding the lock cannot leave the vector half-updated,
    // so a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Vec<&'static CodeEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<&'static CodeEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("code_list", &self.code_list)
            .field("identifier", &self.identifier)
            .field("len", &self.len())
            .field("superseded", &self.is_superseded())
            .finish()
    }
}

/// First candidate name already used by one of `entries`
fn first_clash<'e, 'n>(
    entries: impl IntoIterator<Item = &'e CodeEntry>,
    candidates: impl Iterator<Item = &'n str>,
) -> Option<String> {
    let entries: Vec<&CodeEntry> = entries.into_iter().collect();
    for candidate in candidates {
        if entries.iter().any(|entry| entry.matches(candidate)) {
            return Some(candidate.to_string());
        }
    }
    None
}
