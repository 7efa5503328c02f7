//! Code list dictionary loading
//!
//! Reads ISO 19139 code list catalogues (`CT_CodelistCatalogue`, as in
//! `gmxCodelists.xml`) and interns their code definitions into the matching
//! registries:
//!
//! ```xml
//! <gmx:CodeListDictionary gml:id="MD_ImagingConditionCode">
//!   <gml:identifier codeSpace="ISOTC211/19115">MD_ImagingConditionCode</gml:identifier>
//!   <gmx:codeEntry>
//!     <gmx:CodeDefinition gml:id="MD_ImagingConditionCode_cloud">
//!       <gml:description>portion of the image is partially obscured by cloud cover</gml:description>
//!       <gml:identifier codeSpace="ISOTC211/19115">cloud</gml:identifier>
//!     </gmx:CodeDefinition>
//!   </gmx:codeEntry>
//! </gmx:CodeListDictionary>
//! ```
//!
//! Elements are matched by local name, so any namespace prefix is accepted.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;

use crate::catalog;
use crate::error::{Error, ParseError, Result};
use crate::limits::Limits;
use crate::names;
use crate::registry::NewCode;

/// One `CodeListDictionary` read from a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    /// Code list identifier (`MD_ImagingConditionCode`)
    pub identifier: String,
    /// Description of the code list
    pub description: Option<String>,
    /// Code definitions, in document order
    pub codes: Vec<Definition>,
}

/// One `CodeDefinition` read from a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definition {
    /// Code identifier (`cloud`)
    pub identifier: String,
    /// Description of the code
    pub description: Option<String>,
}

/// Outcome of loading one dictionary
#[derive(Debug, Clone, Serialize)]
pub struct DictionaryReport {
    /// Identifier of the dictionary in the document
    pub identifier: String,
    /// Code list the dictionary was loaded into, `None` if skipped
    pub code_list: Option<&'static str>,
    /// Definitions that matched an existing code
    pub matched: usize,
    /// Definitions registered as new codes
    pub created: usize,
    /// Identifiers of definitions whose derived name belongs to another code
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<String>,
}

impl DictionaryReport {
    /// Whether the dictionary named no known code list and was ignored
    pub fn is_skipped(&self) -> bool {
        self.code_list.is_none()
    }
}

/// Outcome of loading a document
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    /// One report per dictionary, in document order
    pub dictionaries: Vec<DictionaryReport>,
}

impl LoadReport {
    /// Total number of codes matched to existing ones
    pub fn matched(&self) -> usize {
        self.dictionaries.iter().map(|d| d.matched).sum()
    }

    /// Total number of codes created
    pub fn created(&self) -> usize {
        self.dictionaries.iter().map(|d| d.created).sum()
    }

    /// Identifiers of the definitions that could not be interned
    pub fn conflicts(&self) -> Vec<&str> {
        self.dictionaries
            .iter()
            .flat_map(|d| d.conflicts.iter().map(String::as_str))
            .collect()
    }

    /// Identifiers of the skipped dictionaries
    pub fn skipped(&self) -> Vec<&str> {
        self.dictionaries
            .iter()
            .filter(|d| d.is_skipped())
            .map(|d| d.identifier.as_str())
            .collect()
    }
}

/// Loader of code list dictionaries
#[derive(Debug, Clone, Default)]
pub struct DictionaryLoader {
    /// Resource limits
    limits: Limits,
    /// Whether unknown dictionaries become new code lists
    create_missing: bool,
}

impl DictionaryLoader {
    /// Create a new loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set whether dictionaries of unknown code lists create new code lists
    pub fn with_create_missing(mut self, create: bool) -> Self {
        self.create_missing = create;
        self
    }

    /// Load a dictionary document from a file
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Resource(format!("Failed to read file '{}': {}", path.display(), e))
        })?;
        self.load_str(&content)
    }

    /// Load a dictionary document from a string
    pub fn load_str(&self, xml: &str) -> Result<LoadReport> {
        let dictionaries = self.parse(xml)?;
        let mut report = LoadReport::default();
        for dictionary in &dictionaries {
            report.dictionaries.push(self.intern(dictionary)?);
        }
        Ok(report)
    }

    /// Parse a dictionary document without touching any registry
    pub fn parse(&self, xml: &str) -> Result<Vec<Dictionary>> {
        self.limits.check_document_size(xml.len())?;

        let mut reader = Reader::from_reader(xml.as_bytes());
        reader.trim_text(true);

        let mut state = ParseState::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    state.open(&e)?;
                    self.limits.check_depth(state.stack.len())?;
                }
                Ok(Event::Empty(e)) => {
                    state.open(&e)?;
                    state.close(&self.limits)?;
                }
                Ok(Event::End(_)) => state.close(&self.limits)?,
                Ok(Event::Text(e)) => {
                    let text = e
                        .unescape()
                        .map_err(|e| Error::Xml(format!("Failed to unescape text: {}", e)))?;
                    state.text.push_str(&text);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::Xml(format!(
                        "Error parsing XML at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(state.dictionaries)
    }

    fn intern(&self, dictionary: &Dictionary) -> Result<DictionaryReport> {
        let registry = if self.create_missing {
            Some(catalog::registry_or_create(&dictionary.identifier)?)
        } else {
            catalog::registry(&dictionary.identifier)
        };

        let mut report = DictionaryReport {
            identifier: dictionary.identifier.clone(),
            code_list: registry.map(|r| r.code_list()),
            matched: 0,
            created: 0,
            conflicts: Vec::new(),
        };
        let Some(registry) = registry else {
            tracing::warn!(
                dictionary = %dictionary.identifier,
                "skipping dictionary of unknown code list"
            );
            return Ok(report);
        };

        for definition in &dictionary.codes {
            if registry.lookup(&definition.identifier).is_some() {
                report.matched += 1;
                continue;
            }
            let mut name = names::to_constant_name(&definition.identifier);
            if name.is_empty() {
                name = definition.identifier.clone();
            }
            let mut code = NewCode::new(name).with_identifier(definition.identifier.as_str());
            if let Some(description) = &definition.description {
                code = code.with_description(description.as_str());
            }
            match registry.register(code) {
                Ok(_) => report.created += 1,
                // Registered concurrently under the same identifier.
                Err(Error::DuplicateCode { .. })
                    if registry.lookup(&definition.identifier).is_some() =>
                {
                    report.matched += 1
                }
                Err(Error::DuplicateCode { name, .. }) => {
                    tracing::warn!(
                        code_list = registry.code_list(),
                        identifier = %definition.identifier,
                        taken = %name,
                        "code definition clashes with another code"
                    );
                    report.conflicts.push(definition.identifier.clone());
                }
                Err(err) => return Err(err),
            }
        }

        tracing::debug!(
            code_list = registry.code_list(),
            matched = report.matched,
            created = report.created,
            conflicts = report.conflicts.len(),
            "loaded dictionary"
        );
        Ok(report)
    }
}

#[derive(Default)]
struct ParseState {
    stack: Vec<String>,
    text: String,
    dictionary: Option<Dictionary>,
    definition: Option<Definition>,
    dictionaries: Vec<Dictionary>,
}

impl ParseState {
    fn open(&mut self, start: &BytesStart) -> Result<()> {
        let name = local_name(start.local_name().as_ref())?;
        match name.as_str() {
            "CodeListDictionary" => {
                self.dictionary = Some(Dictionary {
                    identifier: gml_id(start)?.unwrap_or_default(),
                    ..Default::default()
                });
            }
            "CodeDefinition" if self.dictionary.is_some() => {
                self.definition = Some(Definition {
                    identifier: gml_id(start)?.unwrap_or_default(),
                    ..Default::default()
                });
            }
            _ => {}
        }
        self.stack.push(name);
        self.text.clear();
        Ok(())
    }

    fn close(&mut self, limits: &Limits) -> Result<()> {
        let Some(name) = self.stack.pop() else {
            return Ok(());
        };
        let text = std::mem::take(&mut self.text);
        let text = text.trim();
        let parent = self.stack.last().map(String::as_str);

        match (name.as_str(), parent) {
            ("identifier", Some("CodeDefinition")) => {
                if let (Some(definition), Some(id)) = (&mut self.definition, names::normalize(text)) {
                    limits.check_name_length(id)?;
                    definition.identifier = id.to_string();
                }
            }
            ("description", Some("CodeDefinition")) => {
                if let Some(definition) = &mut self.definition {
                    definition.description = names::normalize(text).map(str::to_string);
                }
            }
            ("identifier", Some("CodeListDictionary")) => {
                if let (Some(dictionary), Some(id)) = (&mut self.dictionary, names::normalize(text)) {
                    limits.check_name_length(id)?;
                    dictionary.identifier = id.to_string();
                }
            }
            ("description", Some("CodeListDictionary")) => {
                if let Some(dictionary) = &mut self.dictionary {
                    dictionary.description = names::normalize(text).map(str::to_string);
                }
            }
            ("CodeDefinition", _) => {
                if let (Some(definition), Some(dictionary)) =
                    (self.definition.take(), &mut self.dictionary)
                {
                    if definition.identifier.is_empty() {
                        return Err(ParseError::new("code definition without identifier")
                            .with_location(format!("dictionary {}", dictionary.identifier))
                            .with_source(self.stack.join("/"))
                            .into());
                    }
                    dictionary.codes.push(definition);
                    limits.check_codes_per_list(&dictionary.identifier, dictionary.codes.len())?;
                }
            }
            ("CodeListDictionary", _) => {
                if let Some(dictionary) = self.dictionary.take() {
                    if dictionary.identifier.is_empty() {
                        return Err(ParseError::new("code list dictionary without identifier")
                            .with_location(format!("dictionary #{}", self.dictionaries.len() + 1))
                            .into());
                    }
                    self.dictionaries.push(dictionary);
                    limits.check_code_lists(self.dictionaries.len())?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}

fn local_name(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| Error::Xml(format!("Invalid element name: {}", e)))
}

// The `gml:id` attribute, used when no `identifier` element is present.
fn gml_id(start: &BytesStart) -> Result<Option<String>> {
    for attr_result in start.attributes() {
        let attr =
            attr_result.map_err(|e| Error::Xml(format!("Failed to parse attribute: {}", e)))?;
        if attr.key.local_name().as_ref() == b"id" {
            let value = attr
                .unescape_value()
                .map_err(|e| Error::Xml(format!("Failed to unescape attribute value: {}", e)))?;
            return Ok(names::normalize(&value).map(str::to_string));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::metadata::Role;
    use crate::CodeList;

    const ROLES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gmx:CT_CodelistCatalogue xmlns:gmx="http://www.isotc211.org/2005/gmx"
                          xmlns:gml="http://www.opengis.net/gml/3.2">
  <gmx:codelistItem>
    <gmx:CodeListDictionary gml:id="CI_RoleCode">
      <gml:description>function performed by the responsible party</gml:description>
      <gml:identifier codeSpace="ISOTC211/19115">CI_RoleCode</gml:identifier>
      <gmx:codeEntry>
        <gmx:CodeDefinition gml:id="CI_RoleCode_author">
          <gml:description>party who authored the resource</gml:description>
          <gml:identifier codeSpace="ISOTC211/19115">author</gml:identifier>
        </gmx:CodeDefinition>
      </gmx:codeEntry>
      <gmx:codeEntry>
        <gmx:CodeDefinition gml:id="CI_RoleCode_loaderReviewer">
          <gml:description>party who reviewed the resource &amp; its lineage</gml:description>
          <gml:identifier codeSpace="ISOTC211/19115">loaderReviewer</gml:identifier>
        </gmx:CodeDefinition>
      </gmx:codeEntry>
    </gmx:CodeListDictionary>
  </gmx:codelistItem>
  <gmx:codelistItem>
    <gmx:CodeListDictionary gml:id="XX_UnknownCode">
      <gmx:codeEntry>
        <gmx:CodeDefinition gml:id="XX_UnknownCode_first"/>
      </gmx:codeEntry>
    </gmx:CodeListDictionary>
  </gmx:codelistItem>
</gmx:CT_CodelistCatalogue>"#;

    #[test]
    fn test_parse_dictionaries() {
        let dictionaries = DictionaryLoader::new().parse(ROLES).unwrap();
        assert_eq!(dictionaries.len(), 2);

        let roles = &dictionaries[0];
        assert_eq!(roles.identifier, "CI_RoleCode");
        assert_eq!(
            roles.description.as_deref(),
            Some("function performed by the responsible party")
        );
        assert_eq!(roles.codes.len(), 2);
        assert_eq!(roles.codes[1].identifier, "loaderReviewer");
        assert_eq!(
            roles.codes[1].description.as_deref(),
            Some("party who reviewed the resource & its lineage")
        );

        // Falls back on gml:id when the identifier element is missing.
        assert_eq!(dictionaries[1].identifier, "XX_UnknownCode");
        assert_eq!(dictionaries[1].codes[0].identifier, "XX_UnknownCode_first");
    }

    #[test]
    fn test_load_interns_codes() {
        let report = DictionaryLoader::new().load_str(ROLES).unwrap();
        assert_eq!(report.dictionaries.len(), 2);

        // Another test may have loaded the same document first.
        let roles = &report.dictionaries[0];
        assert_eq!(roles.code_list, Some("Role"));
        assert!(roles.matched >= 1);
        assert_eq!(roles.matched + roles.created, 2);
        assert_eq!(report.skipped(), vec!["XX_UnknownCode"]);

        let reviewer = Role::lookup("loaderReviewer").unwrap();
        assert_eq!(reviewer.name(), "LOADER_REVIEWER");
        assert!(!reviewer.is_well_known());
        assert_eq!(
            reviewer.description(),
            Some("party who reviewed the resource & its lineage")
        );
    }

    #[test]
    fn test_loading_twice_matches_everything() {
        let loader = DictionaryLoader::new();
        loader.load_str(ROLES).unwrap();
        let report = loader.load_str(ROLES).unwrap();
        assert_eq!(report.dictionaries[0].matched, 2);
        assert_eq!(report.created(), 0);
    }

    #[test]
    fn test_identifier_clashing_with_another_code_is_reported() {
        let document = r#"<CT_CodelistCatalogue>
  <codelistItem>
    <CodeListDictionary>
      <identifier>CI_RoleCode</identifier>
      <codeEntry><CodeDefinition><identifier>Author-</identifier></CodeDefinition></codeEntry>
      <codeEntry><CodeDefinition><identifier>owner</identifier></CodeDefinition></codeEntry>
    </CodeListDictionary>
  </codelistItem>
</CT_CodelistCatalogue>"#;
        let report = DictionaryLoader::new().load_str(document).unwrap();

        let roles = &report.dictionaries[0];
        assert_eq!(roles.matched, 1);
        assert_eq!(roles.created, 0);
        assert_eq!(roles.conflicts, vec!["Author-".to_string()]);
        assert_eq!(report.conflicts(), vec!["Author-"]);

        assert_eq!(Role::lookup("Author-"), None);
        assert_eq!(Role::AUTHOR.identifier(), Some("author"));
    }

    #[test]
    fn test_limits_are_enforced() {
        let limits = Limits {
            max_codes_per_list: 1,
            ..Limits::default()
        };
        let err = DictionaryLoader::new().with_limits(limits).parse(ROLES).unwrap_err();
        assert!(matches!(err, Error::LimitExceeded(_)));

        let limits = Limits {
            max_document_size: 10,
            ..Limits::default()
        };
        assert!(DictionaryLoader::new().with_limits(limits).parse(ROLES).is_err());
    }

    #[test]
    fn test_missing_identifier() {
        let err = DictionaryLoader::new()
            .parse("<CodeListDictionary><codeEntry><CodeDefinition/></codeEntry></CodeListDictionary>")
            .unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_malformed_xml() {
        let err = DictionaryLoader::new()
            .parse("<CodeListDictionary><identifier>X</CodeListDictionary>")
            .unwrap_err();
        assert!(matches!(err, Error::Xml(_)));
    }
}
