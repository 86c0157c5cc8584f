use std::{path::Path, sync::OnceLock};

use regex::Regex;

use crate::{config::DEFAULT_TABLE_NAME, io_utils::is_dash};

static NON_ALPHANUMERIC: OnceLock<Regex> = OnceLock::new();

/// Lowercases `name` and joins its alphanumeric runs with underscores.
///
/// Leading or trailing separators leave a leading or trailing underscore,
/// so ` Order ID ` becomes `_order_id_`.
pub fn snake_case(name: &str) -> String {
    let separators = NON_ALPHANUMERIC
        .get_or_init(|| Regex::new(r"[^a-zA-Z0-9]+").expect("separator pattern is valid"));
    separators
        .split(name)
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

pub fn positional_names(count: usize) -> Vec<String> {
    (0..count).map(|idx| format!("col{idx}")).collect()
}

/// Table name derived from an input path: the lowercased file stem.
pub fn table_name_for(path: &Path) -> String {
    if is_dash(path) {
        return DEFAULT_TABLE_NAME.to_string();
    }
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(|stem| stem.to_lowercase())
        .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_splits_on_symbol_runs() {
        assert_eq!(snake_case("Order ID"), "order_id");
        assert_eq!(snake_case("unit-price ($)"), "unit_price_");
        assert_eq!(snake_case(" Order ID "), "_order_id_");
        assert_eq!(snake_case("already_snake"), "already_snake");
        assert_eq!(snake_case("camelCase"), "camelcase");
    }

    #[test]
    fn positional_names_start_at_zero() {
        assert_eq!(positional_names(3), vec!["col0", "col1", "col2"]);
    }

    #[test]
    fn table_name_uses_lowercased_stem() {
        assert_eq!(table_name_for(Path::new("/data/Orders.csv")), "orders");
        assert_eq!(table_name_for(Path::new("archive.tar.csv")), "archive.tar");
        assert_eq!(table_name_for(Path::new("-")), "my_table");
    }
}
