//! Code lists of the filter encoding standard

use crate::code_list;

code_list! {
    /// Sort order of a property in a query.
    ///
    /// Identifiers are the SQL keywords.
    pub struct SortOrder {
        /// Ascending order (`ASC`).
        ASCENDING = "ASC";
        /// Descending order (`DESC`).
        DESCENDING = "DESC";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodeList;

    #[test]
    fn test_sql_keywords() {
        assert_eq!(SortOrder::value_of("asc"), Some(SortOrder::ASCENDING));
        assert_eq!(SortOrder::value_of("Descending"), Some(SortOrder::DESCENDING));
        assert_eq!(SortOrder::DESCENDING.identifier(), Some("DESC"));
        assert!(SortOrder::registry().identifier().is_none());
    }
}
