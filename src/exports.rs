//! Catalogue export
//!
//! Snapshots the registered code lists and writes them either as JSON or as
//! an ISO 19139 `CT_CodelistCatalogue` document that
//! [`DictionaryLoader`](crate::loaders::DictionaryLoader) can read back.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::{Error, Result};
use crate::registry::{CodeEntry, Registry};

const GMX_NAMESPACE: &str = "http://www.isotc211.org/2005/gmx";
const GML_NAMESPACE: &str = "http://www.opengis.net/gml/3.2";
const CODE_SPACE: &str = "geoapi";

/// Output format of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// `CT_CodelistCatalogue` XML
    Xml,
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "xml" | "gmx" => Ok(ExportFormat::Xml),
            other => Err(Error::Other(format!(
                "unknown export format '{}', expected json or xml",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => f.write_str("json"),
            ExportFormat::Xml => f.write_str("xml"),
        }
    }
}

/// Snapshot of one code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnapshot {
    /// Position in the code list
    pub ordinal: usize,
    /// Programmatic name
    pub name: String,
    /// ISO/UML identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Additional lookup names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the code was declared by its code list
    pub well_known: bool,
}

impl From<&CodeEntry> for CodeSnapshot {
    fn from(entry: &CodeEntry) -> Self {
        Self {
            ordinal: entry.ordinal(),
            name: entry.name().to_string(),
            identifier: entry.identifier().map(str::to_string),
            aliases: entry.aliases().into_iter().map(str::to_string).collect(),
            description: entry.description().map(str::to_string),
            well_known: entry.is_well_known(),
        }
    }
}

/// Snapshot of one code list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeListSnapshot {
    /// Type name
    pub code_list: String,
    /// ISO/UML identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Codes, in registration order
    pub codes: Vec<CodeSnapshot>,
}

impl CodeListSnapshot {
    /// Take a snapshot of a registry
    pub fn capture(registry: &Registry) -> Self {
        Self {
            code_list: registry.code_list().to_string(),
            identifier: registry.identifier().map(str::to_string),
            codes: registry.entries().into_iter().map(CodeSnapshot::from).collect(),
        }
    }

    /// Name the dictionary is exported under
    pub fn dictionary_identifier(&self) -> &str {
        self.identifier.as_deref().unwrap_or(&self.code_list)
    }
}

/// Snapshot of a set of code lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueSnapshot {
    /// Code lists, in catalogue order
    pub code_lists: Vec<CodeListSnapshot>,
}

impl CatalogueSnapshot {
    /// Take a snapshot of every installed code list
    pub fn capture() -> Self {
        Self::capture_registries(catalog::registries())
    }

    /// Take a snapshot of the given registries
    pub fn capture_registries<'a>(registries: impl IntoIterator<Item = &'a Registry>) -> Self {
        Self {
            code_lists: registries.into_iter().map(CodeListSnapshot::capture).collect(),
        }
    }

    /// Number of codes across all code lists
    pub fn code_count(&self) -> usize {
        self.code_lists.iter().map(|list| list.codes.len()).sum()
    }

    /// Render in the given format
    pub fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Json => self.to_json(),
            ExportFormat::Xml => self.to_xml(),
        }
    }

    /// Render and write to a file
    pub fn write_to(&self, path: impl AsRef<Path>, format: ExportFormat) -> Result<()> {
        let path = path.as_ref();
        let text = self.render(format)?;
        fs::write(path, text).map_err(|e| {
            Error::Resource(format!("Failed to write file '{}': {}", path.display(), e))
        })
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as a `CT_CodelistCatalogue` document
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        self.write_catalogue(&mut writer)
            .map_err(|e| Error::Xml(format!("Failed to write XML: {}", e)))?;
        String::from_utf8(writer.into_inner())
            .map_err(|e| Error::Xml(format!("Invalid UTF-8 in XML output: {}", e)))
    }

    fn write_catalogue(&self, writer: &mut Writer<Vec<u8>>) -> quick_xml::Result<()> {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(
            BytesStart::new("gmx:CT_CodelistCatalogue")
                .with_attributes([("xmlns:gmx", GMX_NAMESPACE), ("xmlns:gml", GML_NAMESPACE)]),
        ))?;

        for list in &self.code_lists {
            let dictionary = list.dictionary_identifier();
            writer.write_event(Event::Start(BytesStart::new("gmx:codelistItem")))?;
            writer.write_event(Event::Start(
                BytesStart::new("gmx:CodeListDictionary")
                    .with_attributes([("gml:id", xml_id(dictionary).as_str())]),
            ))?;
            write_identifier(writer, dictionary)?;

            for code in &list.codes {
                let identifier = code.identifier.as_deref().unwrap_or(&code.name);
                let id = xml_id(&format!("{}_{}", dictionary, identifier));
                writer.write_event(Event::Start(BytesStart::new("gmx:codeEntry")))?;
                writer.write_event(Event::Start(
                    BytesStart::new("gmx:CodeDefinition").with_attributes([("gml:id", id.as_str())]),
                ))?;
                if let Some(description) = &code.description {
                    writer
                        .create_element("gml:description")
                        .write_text_content(BytesText::new(description))?;
                }
                write_identifier(writer, identifier)?;
                writer.write_event(Event::End(BytesEnd::new("gmx:CodeDefinition")))?;
                writer.write_event(Event::End(BytesEnd::new("gmx:codeEntry")))?;
            }

            writer.write_event(Event::End(BytesEnd::new("gmx:CodeListDictionary")))?;
            writer.write_event(Event::End(BytesEnd::new("gmx:codelistItem")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("gmx:CT_CodelistCatalogue")))?;
        Ok(())
    }
}

fn write_identifier(writer: &mut Writer<Vec<u8>>, identifier: &str) -> quick_xml::Result<()> {
    writer
        .create_element("gml:identifier")
        .with_attribute(("codeSpace", CODE_SPACE))
        .write_text_content(BytesText::new(identifier))?;
    Ok(())
}

// gml:id values must be XML names
fn xml_id(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_alphanumeric() || matches!(c, '_' | '-' | '.') { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::display::ArcClosure;
    use crate::codes::filter::SortOrder;
    use crate::codes::referencing::VerticalDatumType;
    use crate::loaders::DictionaryLoader;
    use crate::CodeList;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(" XML ".parse::<ExportFormat>().unwrap(), ExportFormat::Xml);
        assert!("yaml".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Xml.to_string(), "xml");
    }

    #[test]
    fn test_code_list_snapshot() {
        let snapshot = CodeListSnapshot::capture(ArcClosure::registry());
        assert_eq!(snapshot.code_list, "ArcClosure");
        assert_eq!(snapshot.dictionary_identifier(), "ArcClosure");
        assert_eq!(snapshot.codes[0].name, "OPEN");
        assert!(snapshot.codes[0].well_known);
        assert!(snapshot.codes[2].description.is_some());
    }

    #[test]
    fn test_json_skips_empty_fields() {
        let snapshot = CatalogueSnapshot::capture_registries([SortOrder::registry()]);
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"code_list\": \"SortOrder\""));
        assert!(json.contains("\"identifier\": \"ASC\""));
        assert!(!json.contains("aliases"));

        let back: CatalogueSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.code_lists[0].codes[..2], snapshot.code_lists[0].codes[..2]);
    }

    #[test]
    fn test_xml_reads_back() {
        let snapshot = CatalogueSnapshot::capture_registries([VerticalDatumType::registry()]);
        let xml = snapshot.to_xml().unwrap();
        assert!(xml.contains("<gmx:CodeListDictionary gml:id=\"CD_VerticalDatumType\">"));
        assert!(xml.contains("gml:id=\"CD_VerticalDatumType_other_surface\""));

        let dictionaries = DictionaryLoader::new().parse(&xml).unwrap();
        assert_eq!(dictionaries.len(), 1);
        assert_eq!(dictionaries[0].identifier, "CD_VerticalDatumType");
        assert_eq!(dictionaries[0].codes[3].identifier, "other surface");

        let report = DictionaryLoader::new().load_str(&xml).unwrap();
        assert_eq!(report.created(), 0);
        assert_eq!(report.dictionaries[0].code_list, Some("VerticalDatumType"));
    }

    #[test]
    fn test_xml_escapes_descriptions() {
        let snapshot = CatalogueSnapshot {
            code_lists: vec![CodeListSnapshot {
                code_list: "Sample".to_string(),
                identifier: None,
                codes: vec![CodeSnapshot {
                    ordinal: 0,
                    name: "A".to_string(),
                    identifier: None,
                    aliases: Vec::new(),
                    description: Some("a < b & c".to_string()),
                    well_known: true,
                }],
            }],
        };
        let xml = snapshot.to_xml().unwrap();
        assert!(xml.contains("a &lt; b &amp; c"));
        let parsed = DictionaryLoader::new().parse(&xml).unwrap();
        assert_eq!(parsed[0].codes[0].description.as_deref(), Some("a < b & c"));
    }
}
