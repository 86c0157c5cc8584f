use std::{collections::HashSet, sync::OnceLock};

use regex::Regex;

pub const DEFAULT_ENUM_COUNT: usize = 20;
pub const DEFAULT_ENUM_LENGTH: usize = 10;

static ENUM_LITERAL: OnceLock<Regex> = OnceLock::new();

fn enum_literal() -> &'static Regex {
    ENUM_LITERAL.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("enum literal pattern is valid")
    })
}

/// Cutoffs applied while collecting enum members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumLimits {
    pub max_values: usize,
    pub max_length: usize,
}

/// Distinct short literals seen in one column, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct EnumTracker {
    seen: HashSet<String>,
    order: Vec<String>,
}

impl EnumTracker {
    /// Records `value` and reports whether the column can still be an enum.
    ///
    /// The value that pushes the distinct count past `max_values` is itself
    /// rejected. Not idempotent: a rejected overflow value stays recorded.
    pub fn observe(&mut self, value: &str, limits: &EnumLimits) -> bool {
        if value.is_empty() || value.len() > limits.max_length {
            return false;
        }
        if !enum_literal().is_match(value) {
            return false;
        }
        if self.seen.contains(value) {
            return true;
        }
        self.seen.insert(value.to_string());
        self.order.push(value.to_string());
        self.order.len() <= limits.max_values
    }

    pub fn values(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
