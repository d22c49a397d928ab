//! Named, typed attributes of part variants.
//!
//! This is the single boundary where attribute names and free-form values
//! become typed data. Unknown names and out-of-domain values fail closed.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

use benchstock_core::{InventoryError, InventoryResult};

use crate::domain::{ConnectorGender, DisplayCableType, EthernetSpeed, SolderType, parse_categorical};

/// An attribute name that at least one part kind carries.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantArray,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Attribute {
    Resistance,
    Tolerance,
    SolderType,
    Length,
    Gauge,
    CableType,
    Color,
    AlphaType,
    BetaType,
    Speed,
}

/// A typed attribute value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Integer(u64),
    Number(f64),
    Text(String),
    SolderType(SolderType),
    CableType(DisplayCableType),
    Gender(ConnectorGender),
    Speed(EthernetSpeed),
}

impl core::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AttributeValue::Integer(v) => write!(f, "{v}"),
            AttributeValue::Number(v) => write!(f, "{v}"),
            AttributeValue::Text(v) => f.write_str(v),
            AttributeValue::SolderType(v) => write!(f, "{v}"),
            AttributeValue::CableType(v) => write!(f, "{v}"),
            AttributeValue::Gender(v) => write!(f, "{v}"),
            AttributeValue::Speed(v) => write!(f, "{v}"),
        }
    }
}

impl Attribute {
    /// Resolve an attribute name (`resistance`, `solder_type`, ...).
    pub fn from_name(name: &str) -> InventoryResult<Self> {
        name.trim()
            .parse()
            .map_err(|_| InventoryError::invalid_attribute("attribute name", name.trim()))
    }

    /// Parse free-form text into this attribute's declared type.
    ///
    /// Malformed numbers yield [`InventoryError::Parse`] so an interactive caller
    /// can re-prompt; categorical text outside its domain yields
    /// [`InventoryError::InvalidAttribute`].
    pub fn parse_value(self, text: &str) -> InventoryResult<AttributeValue> {
        let name = self.to_string();
        match self {
            Attribute::Resistance | Attribute::Tolerance => text
                .trim()
                .parse::<u64>()
                .map(AttributeValue::Integer)
                .map_err(|_| InventoryError::parse(name, text)),
            Attribute::Length | Attribute::Gauge => match text.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(AttributeValue::Number(v)),
                _ => Err(InventoryError::parse(name, text)),
            },
            Attribute::Color => Ok(AttributeValue::Text(text.trim().to_string())),
            Attribute::SolderType => parse_categorical(&name, text).map(AttributeValue::SolderType),
            Attribute::CableType => parse_categorical(&name, text).map(AttributeValue::CableType),
            Attribute::AlphaType | Attribute::BetaType => {
                parse_categorical(&name, text).map(AttributeValue::Gender)
            }
            Attribute::Speed => parse_categorical(&name, text).map(AttributeValue::Speed),
        }
    }
}

impl AttributeValue {
    pub(crate) fn as_integer(&self, attribute: Attribute) -> InventoryResult<u64> {
        match self {
            AttributeValue::Integer(v) => Ok(*v),
            other => Err(mismatch(attribute, other)),
        }
    }

    pub(crate) fn as_number(&self, attribute: Attribute) -> InventoryResult<f64> {
        match self {
            AttributeValue::Number(v) => Ok(*v),
            AttributeValue::Integer(v) => Ok(*v as f64),
            other => Err(mismatch(attribute, other)),
        }
    }

    pub(crate) fn as_text(&self, attribute: Attribute) -> InventoryResult<String> {
        match self {
            AttributeValue::Text(v) => Ok(v.clone()),
            other => Err(mismatch(attribute, other)),
        }
    }

    pub(crate) fn as_solder_type(&self, attribute: Attribute) -> InventoryResult<SolderType> {
        match self {
            AttributeValue::SolderType(v) => Ok(*v),
            other => Err(mismatch(attribute, other)),
        }
    }

    pub(crate) fn as_cable_type(&self, attribute: Attribute) -> InventoryResult<DisplayCableType> {
        match self {
            AttributeValue::CableType(v) => Ok(*v),
            other => Err(mismatch(attribute, other)),
        }
    }

    pub(crate) fn as_gender(&self, attribute: Attribute) -> InventoryResult<ConnectorGender> {
        match self {
            AttributeValue::Gender(v) => Ok(*v),
            other => Err(mismatch(attribute, other)),
        }
    }

    pub(crate) fn as_speed(&self, attribute: Attribute) -> InventoryResult<EthernetSpeed> {
        match self {
            AttributeValue::Speed(v) => Ok(*v),
            other => Err(mismatch(attribute, other)),
        }
    }
}

fn mismatch(attribute: Attribute, value: &AttributeValue) -> InventoryError {
    InventoryError::invalid_attribute(attribute.to_string(), value.to_string())
}
