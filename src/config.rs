//! Run configuration and the built-in PostgreSQL type catalog.

use crate::{
    detect,
    enum_tracker::{DEFAULT_ENUM_COUNT, DEFAULT_ENUM_LENGTH, EnumLimits},
};

pub const DEFAULT_TABLE_NAME: &str = "my_table";
pub const ENUM_TYPE_NAME: &str = "enum";

/// How a configured type decides whether a field fits it.
#[derive(Debug, Clone)]
pub enum DetectionRule {
    Predicate(fn(&str) -> bool),
    /// Regular expression compiled when the catalog is finalized.
    Pattern(String),
    /// Stateful per-column tracking of short literal values.
    EnumLiteral,
    /// Accepts everything; must be the last active type.
    CatchAll,
}

#[derive(Debug, Clone)]
pub struct TypeSpec {
    pub name: String,
    pub rule: Option<DetectionRule>,
}

impl TypeSpec {
    pub fn predicate(name: &str, predicate: fn(&str) -> bool) -> Self {
        Self::with_rule(name, DetectionRule::Predicate(predicate))
    }

    pub fn pattern(name: &str, pattern: &str) -> Self {
        Self::with_rule(name, DetectionRule::Pattern(pattern.to_string()))
    }

    pub fn enum_literal(name: &str) -> Self {
        Self::with_rule(name, DetectionRule::EnumLiteral)
    }

    pub fn catch_all(name: &str) -> Self {
        Self::with_rule(name, DetectionRule::CatchAll)
    }

    fn with_rule(name: &str, rule: DetectionRule) -> Self {
        Self {
            name: name.to_string(),
            rule: Some(rule),
        }
    }
}

/// Candidate types in priority order; earlier entries win when still possible.
pub fn builtin_types() -> Vec<TypeSpec> {
    vec![
        TypeSpec::predicate("integer", detect::is_integer),
        TypeSpec::predicate("bigint", detect::is_bigint),
        TypeSpec::predicate("real", detect::is_real),
        TypeSpec::predicate("double", detect::is_double),
        TypeSpec::pattern(
            "numeric",
            r"^[+-]?[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?$",
        ),
        TypeSpec::pattern(
            "boolean",
            r"^(?i:t|tr|tru|true|y|ye|yes|on|1|f|fa|fal|fals|false|n|no|of|off|0)$",
        ),
        TypeSpec::pattern("bytea", r"^\\x(?i:[0-9a-f][0-9a-f])*$"),
        TypeSpec::pattern(
            "uuid",
            r"^(?i:[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}|\{[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\})$",
        ),
        TypeSpec::predicate("cidr", detect::is_cidr),
        TypeSpec::predicate("inet", detect::is_inet),
        TypeSpec::pattern(
            "macaddr",
            r"^(?i:(?:[0-9a-f]{2}:){5}[0-9a-f]{2}|(?:[0-9a-f]{2}-){5}[0-9a-f]{2})$",
        ),
        TypeSpec::predicate("date", detect::is_date),
        TypeSpec::predicate("timestamptz", detect::is_timestamptz),
        TypeSpec::enum_literal(ENUM_TYPE_NAME),
        TypeSpec::catch_all("text"),
    ]
}

/// Settings for a single inference run.
#[derive(Debug, Clone)]
pub struct InferConfig {
    /// Normalize header names to lowercase words joined by underscores.
    pub snake_case: bool,
    /// Maximum number of data rows to scan; the header is not counted. The
    /// first data row is always scanned.
    pub sample: Option<usize>,
    /// Names used when no header row is read.
    pub column_names: Vec<String>,
    /// Treat empty fields as nulls rather than as values.
    pub detect_nulls: bool,
    pub read_header: bool,
    pub enum_count: usize,
    pub enum_length: usize,
    pub types: Vec<TypeSpec>,
    pub exclude: Vec<String>,
    pub table_name: Option<String>,
}

impl Default for InferConfig {
    fn default() -> Self {
        Self {
            snake_case: true,
            sample: None,
            column_names: Vec::new(),
            detect_nulls: true,
            read_header: true,
            enum_count: 0,
            enum_length: DEFAULT_ENUM_LENGTH,
            types: builtin_types(),
            exclude: Vec::new(),
            table_name: None,
        }
    }
}

impl InferConfig {
    /// Turns on enum detection with the default cutoffs.
    pub fn enable_enums(mut self) -> Self {
        self.enum_count = DEFAULT_ENUM_COUNT;
        self.enum_length = DEFAULT_ENUM_LENGTH;
        self
    }

    pub fn with_types(mut self, types: Vec<TypeSpec>) -> Self {
        self.types = types;
        self
    }

    pub fn enums_enabled(&self) -> bool {
        self.enum_count > 0
    }

    pub fn enum_limits(&self) -> EnumLimits {
        EnumLimits {
            max_values: self.enum_count,
            max_length: self.enum_length,
        }
    }

    pub fn is_excluded(&self, type_name: &str) -> bool {
        if type_name == ENUM_TYPE_NAME && !self.enums_enabled() {
            return true;
        }
        self.exclude.iter().any(|name| name == type_name)
    }

    pub fn table_name(&self) -> &str {
        self.table_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_TABLE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_enums_and_enable_nulls() {
        let config = InferConfig::default();
        assert!(config.read_header);
        assert!(config.snake_case);
        assert!(config.detect_nulls);
        assert!(!config.enums_enabled());
        assert!(config.is_excluded("enum"));
        assert_eq!(config.table_name(), "my_table");
        assert_eq!(config.types.last().map(|t| t.name.as_str()), Some("text"));
    }

    #[test]
    fn enabling_enums_uses_default_cutoffs() {
        let config = InferConfig::default().enable_enums();
        assert_eq!(
            config.enum_limits(),
            EnumLimits {
                max_values: 20,
                max_length: 10
            }
        );
        assert!(!config.is_excluded("enum"));
    }

    #[test]
    fn explicit_exclusions_match_by_name() {
        let config = InferConfig {
            exclude: vec!["boolean".to_string()],
            table_name: Some(String::new()),
            ..InferConfig::default()
        };
        assert!(config.is_excluded("boolean"));
        assert!(!config.is_excluded("integer"));
        assert_eq!(config.table_name(), "my_table");
    }
}
