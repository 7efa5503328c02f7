//! Built-in code lists
//!
//! Each submodule declares the code lists of one standard with
//! [`code_list!`](crate::code_list!). A code list installs itself in the
//! [catalogue](crate::catalog) the first time it is used; [`init`] installs
//! all of them at once so that catalogue lookups by name find them.

pub mod coverage;
pub mod display;
pub mod filter;
pub mod geometry;
pub mod metadata;
pub mod referencing;

use crate::code_list::CodeList;
use crate::registry::Registry;

lazy_static::lazy_static! {
    /// Registries of every built-in code list, in declaration order
    pub static ref BUILTIN: Vec<&'static Registry> = vec![
        metadata::ImagingCondition::registry(),
        metadata::AssociationType::registry(),
        metadata::Role::registry(),
        metadata::PresentationForm::registry(),
        metadata::Restriction::registry(),
        metadata::CharacterSet::registry(),
        metadata::ValueStructure::registry(),
        referencing::AxisDirection::registry(),
        referencing::PixelInCell::registry(),
        referencing::VerticalDatumType::registry(),
        referencing::ReferenceSystemType::registry(),
        coverage::SampleDimensionType::registry(),
        coverage::ColorInterpretation::registry(),
        coverage::SequenceType::registry(),
        geometry::CurveInterpolation::registry(),
        filter::SortOrder::registry(),
        display::ArcClosure::registry(),
        display::ProjectionKey::registry(),
    ];
}

/// Install every built-in code list in the catalogue
///
/// Cheap after the first call.
pub fn init() {
    lazy_static::initialize(&BUILTIN);
}
