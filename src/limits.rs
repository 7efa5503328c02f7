//! Limits applied when loading code list dictionaries
//!
//! Dictionaries may come from untrusted sources. Every value they introduce
//! lives for the rest of the process, so the loader bounds how much a single
//! document can add.

use crate::error::{Error, Result};

/// Loading limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum dictionary document size in bytes
    pub max_document_size: usize,

    /// Maximum XML element nesting depth
    pub max_depth: usize,

    /// Maximum number of code lists in one document
    pub max_code_lists: usize,

    /// Maximum number of code definitions per code list
    pub max_codes_per_list: usize,

    /// Maximum length of a code name or identifier, in characters
    pub max_name_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_document_size: 16 * 1024 * 1024, // 16 MB
            max_depth: 64,
            max_code_lists: 1000,
            max_codes_per_list: 10000,
            max_name_length: 256,
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict limits (more restrictive)
    pub fn strict() -> Self {
        Self {
            max_document_size: 1024 * 1024, // 1 MB
            max_depth: 16,
            max_code_lists: 100,
            max_codes_per_list: 500,
            max_name_length: 64,
        }
    }

    /// Create permissive limits (less restrictive, use with caution)
    pub fn permissive() -> Self {
        Self {
            max_document_size: 256 * 1024 * 1024, // 256 MB
            max_depth: 1024,
            max_code_lists: 100000,
            max_codes_per_list: 1000000,
            max_name_length: 4096,
        }
    }

    /// Check if the document size is within limits
    pub fn check_document_size(&self, size: usize) -> Result<()> {
        if size > self.max_document_size {
            Err(Error::LimitExceeded(format!(
                "document size {} bytes exceeds maximum {} bytes",
                size, self.max_document_size
            )))
        } else {
            Ok(())
        }
    }

    /// Check if the element depth is within limits
    pub fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            Err(Error::LimitExceeded(format!(
                "element depth {} exceeds maximum {}",
                depth, self.max_depth
            )))
        } else {
            Ok(())
        }
    }

    /// Check if the number of code lists is within limits
    pub fn check_code_lists(&self, count: usize) -> Result<()> {
        if count > self.max_code_lists {
            Err(Error::LimitExceeded(format!(
                "{} code lists exceeds maximum {}",
                count, self.max_code_lists
            )))
        } else {
            Ok(())
        }
    }

    /// Check if the number of codes in one list is within limits
    pub fn check_codes_per_list(&self, code_list: &str, count: usize) -> Result<()> {
        if count > self.max_codes_per_list {
            Err(Error::LimitExceeded(format!(
                "code list {} has {} codes, maximum is {}",
                code_list, count, self.max_codes_per_list
            )))
        } else {
            Ok(())
        }
    }

    /// Check if a name is within the length limit
    pub fn check_name_length(&self, name: &str) -> Result<()> {
        let length = name.chars().count();
        if length > self.max_name_length {
            Err(Error::LimitExceeded(format!(
                "name of {} characters exceeds maximum {}",
                length, self.max_name_length
            )))
        } else {
            Ok(())
        }
    }
}
