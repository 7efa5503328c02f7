//! Consistency checks over code list registries
//!
//! A registry is consistent when:
//!
//! - every entry's ordinal equals its position,
//! - every entry belongs to the registry's code list,
//! - no two entries share a name, identifier or alias (ignoring case),
//! - well-known entries come before every dynamically created one,
//! - looking up any name of an entry finds that same entry.

use crate::catalog;
use crate::code_list::CodeList;
use crate::error::{Result, ValidationError};
use crate::names;
use crate::registry::Registry;

/// Check one registry, returning every problem found
pub fn check_registry(registry: &Registry) -> Vec<ValidationError> {
    let code_list = registry.code_list();
    let entries = registry.entries();
    let mut errors = Vec::new();

    for (position, entry) in entries.iter().enumerate() {
        let error = |message: &str| {
            ValidationError::new(message)
                .with_code_list(code_list)
                .with_code(entry.name())
        };

        if entry.ordinal() != position {
            errors.push(
                error("ordinal does not match position")
                    .with_reason(format!("expected {}, found {}", position, entry.ordinal())),
            );
        }
        if entry.code_list() != code_list {
            errors.push(
                error("entry belongs to another code list")
                    .with_reason(format!("entry claims {}", entry.code_list())),
            );
        }
        if names::normalize(entry.name()).is_none() {
            errors.push(error("blank code name"));
        }
        if entry.is_well_known() != (position < registry.well_known_count()) {
            errors.push(error("well-known codes must precede dynamic codes"));
        }

        for name in entry.names() {
            if let Some(other) = entries[..position].iter().find(|other| other.matches(name)) {
                errors.push(
                    error("duplicated code name")
                        .with_reason(format!("'{}' is also a name of {}", name, other.name())),
                );
            }
            match registry.lookup(name) {
                Some(found) if std::ptr::eq(found, *entry) => {}
                Some(found) => errors.push(
                    error("lookup returns another code")
                        .with_reason(format!("'{}' resolves to {}", name, found.name())),
                ),
                None => errors.push(
                    error("lookup does not find the code")
                        .with_reason(format!("'{}' resolves to nothing", name)),
                ),
            }
        }
    }

    errors
}

/// Check one registry, failing on the first problem
pub fn validate_registry(registry: &Registry) -> Result<()> {
    match check_registry(registry).into_iter().next() {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Check a typed code list, including its handle operations
pub fn validate_code_list<T: CodeList>() -> Result<()> {
    validate_registry(T::registry())?;

    let values = T::values();
    for (position, value) in values.iter().enumerate() {
        let fail = |message: &str| -> Result<()> {
            Err(ValidationError::new(message)
                .with_code_list(T::registry().code_list())
                .with_code(value.name())
                .into())
        };

        if value.ordinal() != position {
            return fail("handle ordinal does not match position");
        }
        // A snapshot may be shorter than a family taken later, never different.
        let family = value.family();
        if family.get(..values.len()) != Some(&values[..]) {
            return fail("family differs from values");
        }
        if T::lookup(value.name()) != Some(*value) {
            return fail("lookup by name returns another value");
        }
        if value.erase().downcast::<T>() != Some(*value) {
            return fail("erased handle does not downcast to itself");
        }
    }
    Ok(())
}

/// Check every code list installed in the catalogue
pub fn validate_catalog() -> Vec<ValidationError> {
    catalog::registries()
        .into_iter()
        .flat_map(check_registry)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::metadata::{CharacterSet, ImagingCondition, Restriction};
    use crate::codes::display::ProjectionKey;
    use crate::registry::{NewCode, WellKnown};

    #[test]
    fn test_builtins_are_consistent() {
        let errors = validate_catalog();
        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn test_validate_code_lists() {
        validate_code_list::<ImagingCondition>().unwrap();
        validate_code_list::<CharacterSet>().unwrap();
        validate_code_list::<Restriction>().unwrap();
        validate_code_list::<ProjectionKey>().unwrap();
    }

    #[test]
    fn test_dynamic_codes_stay_consistent() {
        let codes = [WellKnown::new("NORTH"), WellKnown::new("SOUTH")];
        let registry = Registry::with_well_known("ValidationSample", None, &codes).unwrap();
        registry.value_of("up").unwrap();
        registry
            .register(NewCode::new("DOWN").with_alias("nadir"))
            .unwrap();
        assert!(validate_registry(&registry).is_ok());
    }
}
