//! Loading dictionaries from files and exporting them back

use std::fs;
use std::path::PathBuf;

use geoapi::codes::metadata::ImagingCondition;
use geoapi::exports::{CatalogueSnapshot, ExportFormat};
use geoapi::loaders::DictionaryLoader;
use geoapi::{catalog, code_list, CodeList, Error};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

#[test]
fn test_load_file_creates_missing_code_lists() {
    let report = DictionaryLoader::new()
        .with_create_missing(true)
        .load_file(fixture("codelists.xml"))
        .unwrap();

    assert_eq!(report.dictionaries.len(), 2);
    assert!(report.skipped().is_empty());
    assert_eq!(report.dictionaries[0].code_list, Some("ImagingCondition"));
    assert_eq!(
        report.dictionaries[1].code_list,
        Some("XX_SurveyPlatformCode")
    );

    let sand = ImagingCondition::lookup("sandStorm").unwrap();
    assert_eq!(sand.name(), "SAND_STORM");
    assert_eq!(ImagingCondition::value_of("cloud"), Some(ImagingCondition::CLOUD));

    let drone = catalog::lookup("XX_SurveyPlatformCode", "DRONE").unwrap().unwrap();
    assert_eq!(drone.ordinal(), 0);
    assert_eq!(drone.identifier(), Some("drone"));
}

code_list! {
    /// Platform declared after its dictionary was loaded.
    pub struct Platform("XX_PlatformCode") {
        DRONE = "drone";
    }
}

const PLATFORMS: &str = r#"<CT_CodelistCatalogue>
  <codelistItem>
    <CodeListDictionary>
      <identifier>XX_PlatformCode</identifier>
      <codeEntry><CodeDefinition><identifier>balloon</identifier></CodeDefinition></codeEntry>
      <codeEntry><CodeDefinition><identifier>drone</identifier></CodeDefinition></codeEntry>
    </CodeListDictionary>
  </codelistItem>
</CT_CodelistCatalogue>"#;

#[test]
fn test_declared_type_takes_over_loaded_code_list() {
    let report = DictionaryLoader::new()
        .with_create_missing(true)
        .load_str(PLATFORMS)
        .unwrap();
    assert_eq!(report.created(), 2);
    let balloon = catalog::lookup("XX_PlatformCode", "balloon").unwrap().unwrap();
    let loaded = catalog::registry("XX_PlatformCode").unwrap();

    // First use of the declared type merges the loaded codes into it.
    let declared = Platform::registry();
    assert!(std::ptr::eq(catalog::registry("XX_PlatformCode").unwrap(), declared));
    assert_eq!(Platform::values().len(), 2);
    assert_eq!(Platform::values()[0], Platform::DRONE);
    assert_eq!(balloon.downcast::<Platform>(), Platform::lookup("balloon"));
    assert_eq!(balloon.code_list(), "Platform");

    let kite = loaded.value_of("kite").unwrap();
    assert_eq!(Platform::lookup("kite").map(|p| p.ordinal()), Some(kite.ordinal()));
    assert_eq!(Platform::values().len(), 3);

    let again = DictionaryLoader::new().load_str(PLATFORMS).unwrap();
    assert_eq!(again.matched(), 2);
    assert_eq!(again.dictionaries[0].code_list, Some("Platform"));
}

#[test]
fn test_load_missing_file() {
    let err = DictionaryLoader::new()
        .load_file(fixture("no-such-file.xml"))
        .unwrap_err();
    assert!(matches!(err, Error::Resource(_)));
}

#[test]
fn test_export_round_trips_through_loader() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalogue.xml");

    let snapshot = CatalogueSnapshot::capture_registries([ImagingCondition::registry()]);
    snapshot.write_to(&path, ExportFormat::Xml).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("MD_ImagingConditionCode"));

    let dictionaries = DictionaryLoader::new().parse(&written).unwrap();
    assert_eq!(dictionaries.len(), 1);
    assert_eq!(dictionaries[0].identifier, "MD_ImagingConditionCode");
    assert_eq!(dictionaries[0].codes.len(), snapshot.code_count());
    assert_eq!(dictionaries[0].codes[1].identifier, "cloud");

    let report = DictionaryLoader::new().load_str(&written).unwrap();
    assert_eq!(report.created(), 0);
}

#[test]
fn test_export_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalogue.json");
    CatalogueSnapshot::capture().write_to(&path, ExportFormat::Json).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let parsed: CatalogueSnapshot = serde_json::from_str(&text).unwrap();
    assert!(parsed.code_lists.len() >= 18);
    assert!(parsed
        .code_lists
        .iter()
        .any(|list| list.code_list == "ProjectionKey"));
}
