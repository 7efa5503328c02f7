//! # geoapi
//!
//! Extensible OGC/ISO code lists.
//!
//! A code list is an enumeration whose set of values is open: the standard
//! defines well-known values, and any other name met at runtime (in a
//! metadata record, a dictionary, user input) becomes a new value of the same
//! type, shared by every part of the process from then on.
//!
//! ## Features
//!
//! - Typed code lists declared with [`code_list!`], with well-known constants
//! - Case-insensitive lookup-or-create through [`CodeList::value_of`]
//! - Thread-safe, append-only, per-type registries
//! - Type-indexed [`catalog`] for lookups by type name or ISO identifier
//! - ISO 19139 code list dictionary loading and export
//! - Configuration-selected factory singletons
//!
//! ## Example
//!
//! ```rust
//! use geoapi::codes::metadata::ImagingCondition;
//! use geoapi::CodeList;
//!
//! assert_eq!(ImagingCondition::value_of("cloud"), Some(ImagingCondition::CLOUD));
//!
//! let ash = ImagingCondition::value_of("volcanic-ash").unwrap();
//! assert_eq!(ImagingCondition::values().last(), Some(&ash));
//! assert_eq!(ImagingCondition::value_of("VOLCANIC-ASH"), Some(ash));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod error;
pub mod limits;
pub mod names;

// Registry engine
pub mod catalog;
pub mod code_list;
mod macros;
pub mod registry;

// Built-in code lists
pub mod codes;

// Dictionaries and checks
pub mod exports;
pub mod loaders;
pub mod validation;

// Plug-in factories
pub mod factory;

// Re-exports for convenience
pub use code_list::{Code, CodeList};
pub use error::{Error, Result};
pub use registry::{CodeEntry, CodeFilter, NewCode, Registry};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
    pub use serde;
}

/// Version of the geoapi library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base URI of the ISO 19139 code list catalogue
pub const GMX_CODELISTS: &str = "http://standards.iso.org/iso/19139/resources/gmxCodelists.xml";
