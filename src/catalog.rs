//! The finalized, priority-ordered set of candidate types for a run.

use log::debug;
use regex::Regex;

use crate::{
    config::{DetectionRule, InferConfig},
    enum_tracker::{EnumLimits, EnumTracker},
    error::InferError,
    type_set::TypeSet,
};

/// Decision logic attached to a catalog entry.
///
/// `Enum` is the only stateful variant; it reads and updates the column's
/// tracker. Every other variant ignores the tracker.
#[derive(Debug, Clone)]
pub enum Detector {
    Predicate(fn(&str) -> bool),
    Matcher(Regex),
    Enum(EnumLimits),
    CatchAll,
}

impl Detector {
    pub fn accepts(&self, value: &str, tracker: &mut EnumTracker) -> bool {
        match self {
            Detector::Predicate(predicate) => predicate(value),
            Detector::Matcher(regex) => regex.is_match(value),
            Detector::Enum(limits) => tracker.observe(value, limits),
            Detector::CatchAll => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    pub name: String,
    pub detector: Detector,
}

impl TypeDescriptor {
    pub fn is_enum(&self) -> bool {
        matches!(self.detector, Detector::Enum(_))
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self.detector, Detector::CatchAll)
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    types: Vec<TypeDescriptor>,
}

impl Catalog {
    /// Builds the active catalog from the configured types.
    ///
    /// Every configured type must carry working detection logic, even ones
    /// that are later excluded. Excluded types are dropped, the remaining
    /// order is kept, and the last remaining type must be the only catch-all.
    pub fn finalize(config: &InferConfig) -> Result<Self, InferError> {
        let mut types = Vec::with_capacity(config.types.len());
        for spec in &config.types {
            let detector = match &spec.rule {
                Some(DetectionRule::Predicate(predicate)) => Detector::Predicate(*predicate),
                Some(DetectionRule::Pattern(pattern)) if !pattern.is_empty() => {
                    let regex = Regex::new(pattern).map_err(|err| {
                        InferError::configuration(&spec.name, format!("invalid pattern: {err}"))
                    })?;
                    Detector::Matcher(regex)
                }
                Some(DetectionRule::EnumLiteral) => Detector::Enum(config.enum_limits()),
                Some(DetectionRule::CatchAll) => Detector::CatchAll,
                Some(DetectionRule::Pattern(_)) | None => {
                    return Err(InferError::configuration(
                        &spec.name,
                        "no detection logic provided",
                    ));
                }
            };
            if config.is_excluded(&spec.name) {
                debug!("Excluding type '{}' from consideration", spec.name);
                continue;
            }
            types.push(TypeDescriptor {
                name: spec.name.clone(),
                detector,
            });
        }

        if types.len() > TypeSet::CAPACITY {
            return Err(InferError::configuration(
                &types[TypeSet::CAPACITY].name,
                format!("at most {} types can be active", TypeSet::CAPACITY),
            ));
        }
        let catch_alls = types.iter().filter(|t| t.is_catch_all()).count();
        match types.last() {
            Some(last) if last.is_catch_all() && catch_alls == 1 => {}
            Some(last) => {
                return Err(InferError::configuration(
                    &last.name,
                    "the last active type must be the only catch-all type",
                ));
            }
            None => {
                return Err(InferError::configuration(
                    "<none>",
                    "no types remain after exclusions",
                ));
            }
        }

        debug!(
            "Active types: {}",
            types
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(Self { types })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TypeDescriptor> {
        self.types.get(index)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.types.iter().position(|t| t.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }

    /// Every active type; the starting candidate set for each column.
    pub fn all(&self) -> TypeSet {
        (0..self.types.len()).collect()
    }

    /// Highest-priority type still present in `possible`.
    pub fn resolve(&self, possible: TypeSet) -> Option<(usize, &TypeDescriptor)> {
        possible.first().and_then(|idx| Some((idx, self.types.get(idx)?)))
    }
}
