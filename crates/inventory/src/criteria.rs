//! Search criteria: attribute-name/value pairs a part must match exactly.

use serde::Serialize;

use benchstock_core::{InventoryError, InventoryResult};
use benchstock_parts::{Attribute, AttributeValue, Part, PartKind};

/// Conjunction of exact attribute matches. Empty criteria match every part.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Criteria {
    terms: Vec<(Attribute, AttributeValue)>,
}

impl Criteria {
    /// Criteria that match every part of the searched kind.
    pub fn any() -> Self {
        Self::default()
    }

    /// Add one exact-match term.
    pub fn with(mut self, attribute: Attribute, value: AttributeValue) -> Self {
        self.terms.push((attribute, value));
        self
    }

    /// Parse `attr=value[, attr=value...]` for parts of `kind`.
    ///
    /// Blank input yields [`Criteria::any`]. Each value is parsed as its
    /// attribute's declared type; names the kind does not carry are rejected.
    pub fn parse(kind: PartKind, input: &str) -> InventoryResult<Self> {
        let mut criteria = Self::any();

        for term in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let (name, value) = term
                .split_once('=')
                .ok_or_else(|| InventoryError::invalid_attribute("criterion", term))?;

            let attribute = Attribute::from_name(name)?;
            if !kind.has_attribute(attribute) {
                return Err(InventoryError::invalid_attribute(
                    format!("{kind} attribute"),
                    name.trim(),
                ));
            }

            criteria = criteria.with(attribute, attribute.parse_value(value)?);
        }

        Ok(criteria)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[(Attribute, AttributeValue)] {
        &self.terms
    }

    /// `true` when every term equals the part's value for that attribute.
    pub fn matches(&self, part: &Part) -> bool {
        self.terms
            .iter()
            .all(|(attribute, expected)| part.attribute(*attribute).as_ref() == Some(expected))
    }
}
