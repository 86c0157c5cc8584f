//! Identifier and literal quoting for PostgreSQL output.
//!
//! All functions take the raw, unquoted text; passing an already quoted
//! name quotes it again.

use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

use crate::keywords::is_keyword;

static BARE_IDENTIFIER: OnceLock<Regex> = OnceLock::new();

fn bare_identifier() -> &'static Regex {
    BARE_IDENTIFIER.get_or_init(|| {
        Regex::new(r"^[a-z][a-z0-9_]*$").expect("identifier pattern is valid")
    })
}

/// Quotes an identifier unless it is a plain lowercase name.
pub fn quote_ident(name: &str) -> Cow<'_, str> {
    if bare_identifier().is_match(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(double_quoted(name))
    }
}

/// Like [`quote_ident`], but also quotes names that collide with keywords.
pub fn quote_name(name: &str) -> Cow<'_, str> {
    if !is_keyword(name) && bare_identifier().is_match(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(double_quoted(name))
    }
}

pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn double_quoted(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_stay_bare() {
        assert_eq!(quote_ident("order_id"), "order_id");
        assert_eq!(quote_name("customer"), "customer");
        assert!(matches!(quote_name("customer"), Cow::Borrowed(_)));
    }

    #[test]
    fn uppercase_and_symbols_are_quoted() {
        assert_eq!(quote_ident("Order"), "\"Order\"");
        assert_eq!(quote_ident("first name"), "\"first name\"");
        assert_eq!(quote_ident("9lives"), "\"9lives\"");
        assert_eq!(quote_ident("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn keywords_are_quoted_only_by_quote_name() {
        assert_eq!(quote_ident("order"), "order");
        assert_eq!(quote_name("order"), "\"order\"");
        assert_eq!(quote_name("user"), "\"user\"");
        assert_eq!(quote_name("system_user"), "\"system_user\"");
    }

    #[test]
    fn literals_double_single_quotes() {
        assert_eq!(quote_literal("abc"), "'abc'");
        assert_eq!(quote_literal("o'clock"), "'o''clock'");
    }
}
