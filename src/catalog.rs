//! Type-indexed catalogue of code list registries
//!
//! Every code list installs its registry here when first used, keyed by its
//! Rust type. Code lists created at runtime are keyed by their name.
//!
//! The catalogue resolves code lists from the names found in external encodings, either the Rust type name (`ImagingCondition`) or the
//! ISO/UML identifier (`MD_ImagingConditionCode`), and resolves ISO 19139
//! `codeList` / `codeListValue` attribute pairs:
//!
//! ```xml
//! <gmd:MD_ImagingConditionCode
//!     codeList="http://standards.iso.org/iso/19139/resources/gmxCodelists.xml#MD_ImagingConditionCode"
//!     codeListValue="cloud"/>
//! ```
//!
//! Lookups first make sure the built-in code lists of [`crate::codes`] are
//! installed, so they resolve even before any of their values is touched.

use std::any::TypeId;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::code_list::Code;
use crate::error::{Error, Result};
use crate::names;
use crate::registry::{Registry, WellKnown};

/// Catalogue key: the Rust type of a declared code list, or the name of a
/// code list created at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Key {
    Declared(TypeId),
    Dynamic(&'static str),
}

static CATALOG: Lazy<RwLock<IndexMap<Key, &'static Registry>>> =
    Lazy::new(|| RwLock::new(IndexMap::new()));

fn read() -> RwLockReadGuard<'static, IndexMap<Key, &'static Registry>> {
    CATALOG.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, IndexMap<Key, &'static Registry>> {
    CATALOG.write().unwrap_or_else(PoisonError::into_inner)
}

// Whether `name` is the type name or the identifier of `registry`, ignoring case.
fn answers_to(registry: &Registry, name: &str) -> bool {
    names::names_match(registry.code_list(), name)
        || registry
            .identifier()
            .is_some_and(|identifier| names::names_match(identifier, name))
}

fn shares_a_name(a: &Registry, b: &Registry) -> bool {
    answers_to(a, b.code_list()) || b.identifier().is_some_and(|identifier| answers_to(a, identifier))
}

/// Install a code list created at runtime
///
/// Fails if the type name or identifier of an installed code list matches
/// the name or identifier of `registry`, ignoring case.
pub fn install(registry: Registry) -> Result<&'static Registry> {
    let mut catalog = write();
    if let Some(taken) = catalog.values().find(|installed| shares_a_name(installed, &registry)) {
        return Err(Error::DuplicateCodeList(format!(
            "{} (clashes with {})",
            registry.code_list(),
            taken.code_list()
        )));
    }
    let registry: &'static Registry = Box::leak(Box::new(registry));
    catalog.insert(Key::Dynamic(registry.code_list()), registry);
    tracing::debug!(
        code_list = registry.code_list(),
        identifier = registry.identifier(),
        "installed dynamic code list"
    );
    Ok(registry)
}

/// Build and install the registry of a declared code list type
///
/// Called once per type by [`code_list!`](crate::code_list!). Code lists of
/// the same name or identifier created earlier at runtime are merged into the
/// new registry and forward to it from then on. Declared types sharing a name
/// are installed side by side; name lookups return the first one installed.
///
/// An invalid declaration is a programming error, so this panics instead of
/// returning it.
pub fn install_well_known(
    type_id: TypeId,
    code_list: &'static str,
    identifier: Option<&'static str>,
    codes: &[WellKnown],
) -> &'static Registry {
    let registry = match Registry::with_well_known(code_list, identifier, codes) {
        Ok(registry) => registry,
        Err(err) => panic!("cannot initialize code list {}: {}", code_list, err),
    };

    let mut catalog = write();
    if let Some(installed) = catalog.get(&Key::Declared(type_id)) {
        return *installed;
    }
    let registry: &'static Registry = Box::leak(Box::new(registry));

    let adopted: Vec<Key> = catalog
        .iter()
        .filter(|(key, installed)| {
            matches!(key, Key::Dynamic(_)) && shares_a_name(installed, registry)
        })
        .map(|(key, _)| *key)
        .collect();
    for key in adopted {
        let Some(dynamic) = catalog.shift_remove(&key) else {
            continue;
        };
        match dynamic.supersede(registry) {
            Ok(()) => tracing::debug!(
                code_list,
                merged = dynamic.code_list(),
                "merged dynamic code list into declared type"
            ),
            Err(err) => tracing::warn!(
                code_list,
                merged = dynamic.code_list(),
                error = %err,
                "cannot merge dynamic code list"
            ),
        }
    }

    catalog.insert(Key::Declared(type_id), registry);
    tracing::debug!(
        code_list,
        identifier,
        well_known = registry.well_known_count(),
        "installed code list"
    );
    registry
}

/// Registry of the code list with the given type name or identifier
///
/// Matching ignores case and surrounding whitespace.
pub fn registry(name: &str) -> Option<&'static Registry> {
    crate::codes::init();
    let name = names::normalize(name)?;
    read()
        .values()
        .copied()
        .find(|registry| answers_to(registry, name))
}

/// Registry of a declared code list type, if it is installed
pub fn registry_of<T: 'static>() -> Option<&'static Registry> {
    read().get(&Key::Declared(TypeId::of::<T>())).copied()
}

/// Registry for `name`, creating an empty dynamic code list if none exists
pub fn registry_or_create(name: &str) -> Result<&'static Registry> {
    let trimmed = names::normalize(name)
        .ok_or_else(|| Error::Name("code list name is blank".to_string()))?;
    if let Some(registry) = registry(trimmed) {
        return Ok(registry);
    }
    let code_list: &'static str = Box::leak(trimmed.to_string().into_boxed_str());
    match install(Registry::new(code_list, Some(code_list))) {
        Ok(registry) => Ok(registry),
        // Lost a race with another thread creating the same code list.
        Err(Error::DuplicateCodeList(_)) => {
            registry(trimmed).ok_or_else(|| Error::UnknownCodeList(trimmed.to_string()))
        }
        Err(err) => Err(err),
    }
}

/// All installed registries, in installation order
pub fn registries() -> Vec<&'static Registry> {
    crate::codes::init();
    read().values().copied().collect()
}

/// Value of a code list named at runtime, created if absent
///
/// `Ok(None)` stands for a blank value name.
pub fn value_of(code_list: &str, name: &str) -> Result<Option<Code>> {
    let registry = registry(code_list).ok_or_else(|| Error::UnknownCodeList(code_list.to_string()))?;
    Ok(registry.value_of(name).map(|entry| Code::new(registry, entry)))
}

/// Value of a code list named at runtime, if it already exists
pub fn lookup(code_list: &str, name: &str) -> Result<Option<Code>> {
    let registry = registry(code_list).ok_or_else(|| Error::UnknownCodeList(code_list.to_string()))?;
    Ok(registry.lookup(name).map(|entry| Code::new(registry, entry)))
}

/// Resolve an XML `codeList` / `codeListValue` attribute pair
///
/// The code list is taken from the URI fragment (`...#MD_ImagingConditionCode`),
/// or from the whole attribute when it has none.
pub fn resolve_reference(code_list: &str, code_list_value: &str) -> Result<Option<Code>> {
    let name = match code_list.rsplit_once('#') {
        Some((_, fragment)) => fragment,
        None => code_list,
    };
    value_of(name, code_list_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::metadata::ImagingCondition;
    use crate::CodeList;

    #[test]
    fn test_registry_by_type_name_and_identifier() {
        let by_type = registry("ImagingCondition").unwrap();
        let by_identifier = registry("md_imagingconditioncode").unwrap();
        assert!(std::ptr::eq(by_type, by_identifier));
        assert!(std::ptr::eq(by_type, ImagingCondition::registry()));
        assert!(registry("NoSuchCodeList").is_none());
        assert!(registry(" ").is_none());
    }

    #[test]
    fn test_builtins_are_installed() {
        let names: Vec<&str> = registries().iter().map(|r| r.code_list()).collect();
        assert!(names.contains(&"ImagingCondition"));
        assert!(names.contains(&"AxisDirection"));
        assert!(names.contains(&"ProjectionKey"));
    }

    #[test]
    fn test_value_of_by_names() {
        let cloud = value_of("MD_ImagingConditionCode", "cloud").unwrap().unwrap();
        assert_eq!(cloud.downcast::<ImagingCondition>(), Some(ImagingCondition::CLOUD));
        assert_eq!(cloud.code_list(), "ImagingCondition");

        assert!(value_of("ImagingCondition", "").unwrap().is_none());
        assert!(matches!(
            value_of("Nonexistent", "cloud"),
            Err(Error::UnknownCodeList(_))
        ));
    }

    #[test]
    fn test_resolve_reference() {
        let uri = format!("{}#CI_RoleCode", crate::GMX_CODELISTS);
        let code = resolve_reference(&uri, "pointOfContact").unwrap().unwrap();
        assert_eq!(code.name(), "POINT_OF_CONTACT");
        assert_eq!(code.code_list(), "Role");

        let code = resolve_reference("CI_RoleCode", "author").unwrap().unwrap();
        assert_eq!(code.name(), "AUTHOR");
    }

    #[test]
    fn test_install_rejects_clashing_names() {
        assert!(install(Registry::new("CatalogDuplicate", None)).is_ok());
        assert!(matches!(
            install(Registry::new("CatalogDuplicate", None)),
            Err(Error::DuplicateCodeList(_))
        ));
        assert!(matches!(
            install(Registry::new("catalogduplicate", None)),
            Err(Error::DuplicateCodeList(_))
        ));
        // A new identifier equal to an installed type name clashes too.
        assert!(matches!(
            install(Registry::new("CatalogOther", Some("CATALOGDUPLICATE"))),
            Err(Error::DuplicateCodeList(_))
        ));
        assert!(matches!(
            install(Registry::new("MD_ImagingConditionCode", None)),
            Err(Error::DuplicateCodeList(_))
        ));
    }

    #[test]
    fn test_registry_or_create() {
        let created = registry_or_create("XX_CatalogSampleCode").unwrap();
        assert!(created.is_empty());
        assert_eq!(created.identifier(), Some("XX_CatalogSampleCode"));

        let again = registry_or_create("xx_catalogsamplecode").unwrap();
        assert!(std::ptr::eq(created, again));
        assert!(registry_or_create("  ").is_err());
    }

    #[test]
    fn test_registry_or_create_converges_across_casings() {
        let barrier = std::sync::Barrier::new(8);
        let created: Vec<&'static Registry> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let barrier = &barrier;
                    scope.spawn(move || {
                        let name = if i % 2 == 0 { "XX_RaceCode" } else { "xx_racecode" };
                        barrier.wait();
                        registry_or_create(name).unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(created.iter().all(|r| std::ptr::eq(*r, created[0])));
    }

    mod elsewhere {
        crate::code_list! {
            pub struct Role("XX_WorkflowRoleCode") {
                OWNER = "owner";
                REVIEWER = "reviewer";
            }
        }
    }

    #[test]
    fn test_types_sharing_a_name_are_kept_apart() {
        use crate::codes::metadata::Role;

        let workflow = elsewhere::Role::registry();
        let citation = Role::registry();
        assert!(!std::ptr::eq(workflow, citation));
        assert_eq!(workflow.code_list(), "Role");
        assert!(std::ptr::eq(registry_of::<elsewhere::Role>().unwrap(), workflow));

        assert!(std::ptr::eq(registry("XX_WorkflowRoleCode").unwrap(), workflow));
        assert!(std::ptr::eq(registry("CI_RoleCode").unwrap(), citation));

        let owner = elsewhere::Role::OWNER.erase();
        assert_eq!(owner.downcast::<elsewhere::Role>(), Some(elsewhere::Role::OWNER));
        assert_eq!(owner.downcast::<Role>(), None);
        assert_ne!(owner, Role::AUTHOR.erase());
    }

    #[test]
    fn test_declared_type_adopts_dynamic_code_list() {
        mod declared {
            crate::code_list! {
                pub struct Vessel("XX_VesselCode") {
                    BARGE = "barge";
                }
            }
        }
        use declared::Vessel;

        let dynamic = registry_or_create("XX_VesselCode").unwrap();
        let early = value_of("XX_VesselCode", "Barge").unwrap().unwrap();
        let ferry = value_of("XX_VesselCode", "ferry").unwrap().unwrap();

        let adopted = Vessel::registry();
        assert!(dynamic.is_superseded());
        assert!(std::ptr::eq(registry("XX_VesselCode").unwrap(), adopted));
        assert_eq!(early.downcast::<Vessel>(), Some(Vessel::BARGE));
        assert_eq!(ferry.downcast::<Vessel>(), Vessel::lookup("ferry"));
        assert_eq!(Vessel::values().len(), 2);

        let kayak = dynamic.value_of("kayak").unwrap();
        assert!(std::ptr::eq(Vessel::lookup("kayak").unwrap().entry(), kayak));
    }
}
