//! PostgreSQL keywords that cannot always be used as bare identifiers.
//!
//! Unreserved keywords are omitted; they are valid identifiers everywhere.

use std::{collections::HashMap, sync::OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordCategory {
    Reserved,
    ColumnName,
    TypeFuncName,
}

use KeywordCategory::{ColumnName as C, Reserved as R, TypeFuncName as T};

const KEYWORDS: &[(&str, KeywordCategory)] = &[
    ("all", R),
    ("analyse", R),
    ("analyze", R),
    ("and", R),
    ("any", R),
    ("array", R),
    ("as", R),
    ("asc", R),
    ("asymmetric", R),
    ("authorization", T),
    ("between", C),
    ("bigint", C),
    ("binary", T),
    ("bit", C),
    ("boolean", C),
    ("both", R),
    ("case", R),
    ("cast", R),
    ("char", C),
    ("character", C),
    ("check", R),
    ("coalesce", C),
    ("collate", R),
    ("collation", T),
    ("column", R),
    ("concurrently", T),
    ("constraint", R),
    ("create", R),
    ("cross", T),
    ("current_catalog", R),
    ("current_date", R),
    ("current_role", R),
    ("current_schema", T),
    ("current_time", R),
    ("current_timestamp", R),
    ("current_user", R),
    ("dec", C),
    ("decimal", C),
    ("default", R),
    ("deferrable", R),
    ("desc", R),
    ("distinct", R),
    ("do", R),
    ("else", R),
    ("end", R),
    ("except", R),
    ("exists", C),
    ("extract", C),
    ("false", R),
    ("fetch", R),
    ("float", C),
    ("for", R),
    ("foreign", R),
    ("freeze", T),
    ("from", R),
    ("full", T),
    ("grant", R),
    ("greatest", C),
    ("group", R),
    ("grouping", C),
    ("having", R),
    ("ilike", T),
    ("in", R),
    ("initially", R),
    ("inner", T),
    ("inout", C),
    ("int", C),
    ("integer", C),
    ("intersect", R),
    ("interval", C),
    ("into", R),
    ("is", T),
    ("isnull", T),
    ("join", T),
    ("json", C),
    ("json_array", C),
    ("json_arrayagg", C),
    ("json_exists", C),
    ("json_object", C),
    ("json_objectagg", C),
    ("json_query", C),
    ("json_scalar", C),
    ("json_serialize", C),
    ("json_table", C),
    ("json_value", C),
    ("lateral", R),
    ("leading", R),
    ("least", C),
    ("left", T),
    ("like", T),
    ("limit", R),
    ("localtime", R),
    ("localtimestamp", R),
    ("merge_action", C),
    ("national", C),
    ("natural", T),
    ("nchar", C),
    ("none", C),
    ("normalize", C),
    ("not", R),
    ("notnull", T),
    ("null", R),
    ("nullif", C),
    ("numeric", C),
    ("offset", R),
    ("on", R),
    ("only", R),
    ("or", R),
    ("order", R),
    ("out", C),
    ("outer", T),
    ("overlaps", T),
    ("overlay", C),
    ("placing", R),
    ("position", C),
    ("precision", C),
    ("primary", R),
    ("real", C),
    ("references", R),
    ("returning", R),
    ("right", T),
    ("row", C),
    ("select", R),
    ("session_user", R),
    ("setof", C),
    ("similar", T),
    ("smallint", C),
    ("some", R),
    ("substring", C),
    ("symmetric", R),
    ("system_user", R),
    ("table", R),
    ("tablesample", T),
    ("then", R),
    ("time", C),
    ("timestamp", C),
    ("to", R),
    ("trailing", R),
    ("treat", C),
    ("trim", C),
    ("true", R),
    ("union", R),
    ("unique", R),
    ("user", R),
    ("using", R),
    ("values", C),
    ("varchar", C),
    ("variadic", R),
    ("verbose", T),
    ("when", R),
    ("where", R),
    ("window", R),
    ("with", R),
    ("xmlattributes", C),
    ("xmlconcat", C),
    ("xmlelement", C),
    ("xmlexists", C),
    ("xmlforest", C),
    ("xmlnamespaces", C),
    ("xmlparse", C),
    ("xmlpi", C),
    ("xmlroot", C),
    ("xmlserialize", C),
    ("xmltable", C),
];

static KEYWORD_TABLE: OnceLock<HashMap<&'static str, KeywordCategory>> = OnceLock::new();

fn table() -> &'static HashMap<&'static str, KeywordCategory> {
    KEYWORD_TABLE.get_or_init(|| KEYWORDS.iter().copied().collect())
}

/// Category of `word`, matched exactly (keywords are lowercase).
pub fn keyword_category(word: &str) -> Option<KeywordCategory> {
    table().get(word).copied()
}

pub fn is_keyword(word: &str) -> bool {
    keyword_category(word).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_reported() {
        assert_eq!(keyword_category("order"), Some(KeywordCategory::Reserved));
        assert_eq!(keyword_category("integer"), Some(KeywordCategory::ColumnName));
        assert_eq!(keyword_category("left"), Some(KeywordCategory::TypeFuncName));
        assert_eq!(keyword_category("name"), None);
        assert_eq!(keyword_category("system_user"), Some(KeywordCategory::Reserved));
        for word in ["json_array", "json_object", "json_table", "merge_action"] {
            assert_eq!(keyword_category(word), Some(KeywordCategory::ColumnName));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(is_keyword("select"));
        assert!(!is_keyword("SELECT"));
    }

    #[test]
    fn table_has_no_duplicates() {
        assert_eq!(table().len(), KEYWORDS.len());
        assert!(KEYWORDS.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }
}
