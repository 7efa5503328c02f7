//! Consistency of the built-in code lists

use geoapi::codes::{coverage, display, filter, geometry, metadata, referencing, BUILTIN};
use geoapi::validation::{validate_catalog, validate_code_list};
use geoapi::{catalog, CodeList};

#[test]
fn test_catalogue_is_consistent() {
    let errors = validate_catalog();
    assert!(errors.is_empty(), "{:#?}", errors);
}

#[test]
fn test_every_builtin_validates() {
    validate_code_list::<metadata::ImagingCondition>().unwrap();
    validate_code_list::<metadata::AssociationType>().unwrap();
    validate_code_list::<metadata::Role>().unwrap();
    validate_code_list::<metadata::PresentationForm>().unwrap();
    validate_code_list::<metadata::Restriction>().unwrap();
    validate_code_list::<metadata::CharacterSet>().unwrap();
    validate_code_list::<metadata::ValueStructure>().unwrap();
    validate_code_list::<referencing::AxisDirection>().unwrap();
    validate_code_list::<referencing::PixelInCell>().unwrap();
    validate_code_list::<referencing::VerticalDatumType>().unwrap();
    validate_code_list::<referencing::ReferenceSystemType>().unwrap();
    validate_code_list::<coverage::SampleDimensionType>().unwrap();
    validate_code_list::<coverage::ColorInterpretation>().unwrap();
    validate_code_list::<coverage::SequenceType>().unwrap();
    validate_code_list::<geometry::CurveInterpolation>().unwrap();
    validate_code_list::<filter::SortOrder>().unwrap();
    validate_code_list::<display::ArcClosure>().unwrap();
    validate_code_list::<display::ProjectionKey>().unwrap();
}

#[test]
fn test_builtins_reachable_by_identifier() {
    for registry in BUILTIN.iter() {
        let by_name = catalog::registry(registry.code_list()).unwrap();
        assert!(std::ptr::eq(by_name, *registry));
        if let Some(identifier) = registry.identifier() {
            let by_identifier = catalog::registry(identifier).unwrap();
            assert!(std::ptr::eq(by_identifier, *registry), "{}", identifier);
        }
    }
}

#[test]
fn test_xml_references_resolve() {
    let code = catalog::resolve_reference(
        "http://standards.iso.org/iso/19139/resources/gmxCodelists.xml#MD_RestrictionCode",
        "license",
    )
    .unwrap()
    .unwrap();
    assert_eq!(
        code.downcast::<metadata::Restriction>(),
        Some(metadata::Restriction::LICENCE)
    );
    assert_eq!(code.downcast::<metadata::Role>(), None);
}
