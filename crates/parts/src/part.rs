//! Part variants and the stocked [`Part`] record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use benchstock_core::{Entity, InventoryError, InventoryResult, Sku};

use crate::attribute::{Attribute, AttributeValue};
use crate::domain::{ConnectorGender, DisplayCableType, EthernetSpeed, SolderType};
use crate::kind::PartKind;

/// Through-hole or SMD resistor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resistor {
    /// Ohms.
    pub resistance: u64,
    /// Percent.
    pub tolerance: u64,
}

/// Spool of solder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solder {
    pub solder_type: SolderType,
    /// Inches.
    pub length: f64,
}

/// Hookup wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    pub gauge: f64,
    /// Inches.
    pub length: f64,
}

/// Video cable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayCable {
    pub cable_type: DisplayCableType,
    /// Inches.
    pub length: f64,
    /// Hex string, e.g. `#RRGGBB`. Stored as entered.
    pub color: String,
}

/// Network patch cable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthernetCable {
    pub alpha_type: ConnectorGender,
    pub beta_type: ConnectorGender,
    pub speed: EthernetSpeed,
    /// Inches.
    pub length: f64,
}

/// Kind-specific attributes of a part (tagged by kind).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PartSpec {
    Resistor(Resistor),
    Solder(Solder),
    Wire(Wire),
    DisplayCable(DisplayCable),
    EthernetCable(EthernetCable),
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for PartSpec {
                fn from(value: $variant) -> Self {
                    PartSpec::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(Resistor, Solder, Wire, DisplayCable, EthernetCable);

impl PartSpec {
    pub fn kind(&self) -> PartKind {
        match self {
            PartSpec::Resistor(_) => PartKind::Resistor,
            PartSpec::Solder(_) => PartKind::Solder,
            PartSpec::Wire(_) => PartKind::Wire,
            PartSpec::DisplayCable(_) => PartKind::DisplayCable,
            PartSpec::EthernetCable(_) => PartKind::EthernetCable,
        }
    }

    /// Typed getter by attribute name; `None` when this kind lacks the attribute.
    pub fn attribute(&self, attribute: Attribute) -> Option<AttributeValue> {
        use AttributeValue as V;

        let value = match (self, attribute) {
            (PartSpec::Resistor(r), Attribute::Resistance) => V::Integer(r.resistance),
            (PartSpec::Resistor(r), Attribute::Tolerance) => V::Integer(r.tolerance),
            (PartSpec::Solder(s), Attribute::SolderType) => V::SolderType(s.solder_type),
            (PartSpec::Solder(s), Attribute::Length) => V::Number(s.length),
            (PartSpec::Wire(w), Attribute::Gauge) => V::Number(w.gauge),
            (PartSpec::Wire(w), Attribute::Length) => V::Number(w.length),
            (PartSpec::DisplayCable(d), Attribute::CableType) => V::CableType(d.cable_type),
            (PartSpec::DisplayCable(d), Attribute::Length) => V::Number(d.length),
            (PartSpec::DisplayCable(d), Attribute::Color) => V::Text(d.color.clone()),
            (PartSpec::EthernetCable(e), Attribute::AlphaType) => V::Gender(e.alpha_type),
            (PartSpec::EthernetCable(e), Attribute::BetaType) => V::Gender(e.beta_type),
            (PartSpec::EthernetCable(e), Attribute::Speed) => V::Speed(e.speed),
            (PartSpec::EthernetCable(e), Attribute::Length) => V::Number(e.length),
            _ => return None,
        };
        Some(value)
    }

    /// All attributes of this part, in the kind's declared order.
    pub fn attributes(&self) -> Vec<(Attribute, AttributeValue)> {
        self.kind()
            .attributes()
            .iter()
            .filter_map(|&attribute| self.attribute(attribute).map(|value| (attribute, value)))
            .collect()
    }

    /// Build a variant from typed `(attribute, value)` pairs.
    ///
    /// Every attribute of `kind` must be present exactly as its declared type;
    /// attributes foreign to `kind` are rejected.
    pub fn from_values(kind: PartKind, values: &[(Attribute, AttributeValue)]) -> InventoryResult<Self> {
        if let Some((foreign, value)) = values.iter().find(|(a, _)| !kind.has_attribute(*a)) {
            return Err(InventoryError::invalid_attribute(foreign.to_string(), value.to_string()));
        }

        let get = |attribute: Attribute| lookup(values, attribute);

        let spec = match kind {
            PartKind::Resistor => PartSpec::Resistor(Resistor {
                resistance: get(Attribute::Resistance)?.as_integer(Attribute::Resistance)?,
                tolerance: get(Attribute::Tolerance)?.as_integer(Attribute::Tolerance)?,
            }),
            PartKind::Solder => PartSpec::Solder(Solder {
                solder_type: get(Attribute::SolderType)?.as_solder_type(Attribute::SolderType)?,
                length: get(Attribute::Length)?.as_number(Attribute::Length)?,
            }),
            PartKind::Wire => PartSpec::Wire(Wire {
                gauge: get(Attribute::Gauge)?.as_number(Attribute::Gauge)?,
                length: get(Attribute::Length)?.as_number(Attribute::Length)?,
            }),
            PartKind::DisplayCable => PartSpec::DisplayCable(DisplayCable {
                cable_type: get(Attribute::CableType)?.as_cable_type(Attribute::CableType)?,
                length: get(Attribute::Length)?.as_number(Attribute::Length)?,
                color: get(Attribute::Color)?.as_text(Attribute::Color)?,
            }),
            PartKind::EthernetCable => PartSpec::EthernetCable(EthernetCable {
                alpha_type: get(Attribute::AlphaType)?.as_gender(Attribute::AlphaType)?,
                beta_type: get(Attribute::BetaType)?.as_gender(Attribute::BetaType)?,
                speed: get(Attribute::Speed)?.as_speed(Attribute::Speed)?,
                length: get(Attribute::Length)?.as_number(Attribute::Length)?,
            }),
        };
        Ok(spec)
    }
}

fn lookup(values: &[(Attribute, AttributeValue)], attribute: Attribute) -> InventoryResult<&AttributeValue> {
    values
        .iter()
        .find(|(a, _)| *a == attribute)
        .map(|(_, v)| v)
        .ok_or_else(|| InventoryError::invalid_attribute(attribute.to_string(), "<missing>"))
}

/// A stocked part: shared identity plus its kind-specific attributes.
///
/// The kind is fixed at construction; only the stock quantity (and with it the
/// `last_updated` stamp) changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PartRecord")]
pub struct Part {
    sku: Sku,
    last_updated: DateTime<Utc>,
    quantity: i64,
    #[serde(flatten)]
    spec: PartSpec,
}

/// Unchecked wire shape of [`Part`]; validated by `TryFrom`.
#[derive(Deserialize)]
struct PartRecord {
    sku: Sku,
    last_updated: DateTime<Utc>,
    quantity: i64,
    #[serde(flatten)]
    spec: PartSpec,
}

impl TryFrom<PartRecord> for Part {
    type Error = InventoryError;

    fn try_from(record: PartRecord) -> Result<Self, Self::Error> {
        if record.quantity < 0 {
            return Err(InventoryError::invalid_attribute(
                "quantity",
                record.quantity.to_string(),
            ));
        }

        Ok(Self {
            sku: record.sku,
            last_updated: record.last_updated,
            quantity: record.quantity,
            spec: record.spec,
        })
    }
}

impl Part {
    /// New part with zero stock, stamped now.
    pub fn new(sku: Sku, spec: impl Into<PartSpec>) -> Self {
        Self::with_timestamp(sku, spec, Utc::now())
    }

    pub fn with_timestamp(sku: Sku, spec: impl Into<PartSpec>, last_updated: DateTime<Utc>) -> Self {
        Self {
            sku,
            last_updated,
            quantity: 0,
            spec: spec.into(),
        }
    }

    pub fn sku(&self) -> Sku {
        self.sku
    }

    pub fn kind(&self) -> PartKind {
        self.spec.kind()
    }

    pub fn spec(&self) -> &PartSpec {
        &self.spec
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn attribute(&self, attribute: Attribute) -> Option<AttributeValue> {
        self.spec.attribute(attribute)
    }

    /// Apply a stock delta, returning the new quantity.
    ///
    /// Negative deltas remove stock. The quantity never drops below zero and
    /// never overflows; a rejected delta leaves the part untouched.
    pub fn adjust_stock(&mut self, delta: i64, at: DateTime<Utc>) -> InventoryResult<i64> {
        let new_quantity = self
            .quantity
            .checked_add(delta)
            .filter(|q| *q >= 0)
            .ok_or(InventoryError::InvalidQuantity {
                sku: self.sku,
                on_hand: self.quantity,
                delta,
            })?;

        self.quantity = new_quantity;
        self.last_updated = at;
        Ok(new_quantity)
    }
}

impl Entity for Part {
    type Id = Sku;

    fn id(&self) -> Sku {
        self.sku
    }
}

impl core::fmt::Display for Part {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}(sku={}", self.kind(), self.sku)?;
        for (attribute, value) in self.spec.attributes() {
            write!(f, ", {attribute}={value}")?;
        }
        write!(
            f,
            ", quantity={}, last_updated={})",
            self.quantity,
            self.last_updated.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
    }

    fn resistor(sku: u64) -> Part {
        Part::with_timestamp(
            Sku::new(sku),
            Resistor {
                resistance: 100,
                tolerance: 5,
            },
            test_time(),
        )
    }

    fn ethernet_cable() -> EthernetCable {
        EthernetCable {
            alpha_type: ConnectorGender::Male,
            beta_type: ConnectorGender::Female,
            speed: EthernetSpeed::Gbps1,
            length: 72.0,
        }
    }

    #[test]
    fn new_part_starts_with_zero_stock() {
        let part = resistor(1);
        assert_eq!(part.quantity(), 0);
        assert_eq!(part.kind(), PartKind::Resistor);
        assert_eq!(part.id(), Sku::new(1));
    }

    #[test]
    fn attribute_getters_follow_the_variant() {
        let part = Part::new(Sku::new(2), ethernet_cable());
        assert_eq!(
            part.attribute(Attribute::Speed),
            Some(AttributeValue::Speed(EthernetSpeed::Gbps1))
        );
        assert_eq!(part.attribute(Attribute::Length), Some(AttributeValue::Number(72.0)));
        assert_eq!(part.attribute(Attribute::Resistance), None);
    }

    #[test]
    fn attributes_are_listed_in_declared_order() {
        let names: Vec<Attribute> = PartSpec::from(ethernet_cable())
            .attributes()
            .into_iter()
            .map(|(a, _)| a)
            .collect();
        assert_eq!(names, PartKind::EthernetCable.attributes());
    }

    #[test]
    fn from_values_builds_the_requested_variant() {
        let spec = PartSpec::from_values(
            PartKind::DisplayCable,
            &[
                (Attribute::CableType, AttributeValue::CableType(DisplayCableType::Hdmi)),
                (Attribute::Length, AttributeValue::Number(36.0)),
                (Attribute::Color, AttributeValue::Text("#000000".to_string())),
            ],
        )
        .unwrap();

        assert_eq!(
            spec,
            PartSpec::DisplayCable(DisplayCable {
                cable_type: DisplayCableType::Hdmi,
                length: 36.0,
                color: "#000000".to_string(),
            })
        );
    }

    #[test]
    fn from_values_rejects_missing_foreign_and_mistyped_attributes() {
        let missing = PartSpec::from_values(
            PartKind::Resistor,
            &[(Attribute::Resistance, AttributeValue::Integer(10))],
        )
        .unwrap_err();
        assert_eq!(missing, InventoryError::invalid_attribute("tolerance", "<missing>"));

        let foreign = PartSpec::from_values(
            PartKind::Wire,
            &[
                (Attribute::Gauge, AttributeValue::Number(22.0)),
                (Attribute::Length, AttributeValue::Number(10.0)),
                (Attribute::Color, AttributeValue::Text("#FFFFFF".to_string())),
            ],
        )
        .unwrap_err();
        assert!(matches!(foreign, InventoryError::InvalidAttribute { ref attribute, .. } if attribute == "color"));

        let mistyped = PartSpec::from_values(
            PartKind::Solder,
            &[
                (Attribute::SolderType, AttributeValue::Text("LEAD".to_string())),
                (Attribute::Length, AttributeValue::Number(10.0)),
            ],
        )
        .unwrap_err();
        assert!(matches!(mistyped, InventoryError::InvalidAttribute { .. }));
    }

    #[test]
    fn adjust_stock_accumulates_and_stamps() {
        let mut part = resistor(1);
        let later = test_time() + chrono::Duration::minutes(5);

        assert_eq!(part.adjust_stock(10, later).unwrap(), 10);
        assert_eq!(part.adjust_stock(-4, later).unwrap(), 6);
        assert_eq!(part.last_updated(), later);
    }

    #[test]
    fn adjust_stock_rejects_going_negative() {
        let mut part = resistor(1);
        part.adjust_stock(3, test_time()).unwrap();

        let err = part.adjust_stock(-4, test_time()).unwrap_err();
        match err {
            InventoryError::InvalidQuantity { on_hand, delta, .. } => {
                assert_eq!(on_hand, 3);
                assert_eq!(delta, -4);
            }
            _ => panic!("Expected InvalidQuantity error"),
        }
        assert_eq!(part.quantity(), 3);
    }

    #[test]
    fn display_renders_every_attribute() {
        let mut part = resistor(1);
        part.adjust_stock(10, test_time()).unwrap();
        assert_eq!(
            part.to_string(),
            "Resistor(sku=1, resistance=100, tolerance=5, quantity=10, last_updated=2026-10-19 09:30:00 UTC)"
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(resistor(7)).unwrap();
        assert_eq!(json["kind"], "Resistor");
        assert_eq!(json["sku"], 7);
        assert_eq!(json["resistance"], 100);
        assert_eq!(json["quantity"], 0);
    }

    #[test]
    fn deserializes_stocked_part() {
        let json = r#"{"sku":1,"last_updated":"2026-10-19T09:30:00Z","quantity":7,"kind":"Resistor","resistance":100,"tolerance":5}"#;

        let part: Part = serde_json::from_str(json).unwrap();
        assert_eq!(part.quantity(), 7);
        assert_eq!(part.kind(), PartKind::Resistor);
        assert_eq!(part.last_updated(), test_time());
    }

    #[test]
    fn deserialize_rejects_negative_stock() {
        let json = r#"{"sku":1,"last_updated":"2026-10-19T09:30:00Z","quantity":-7,"kind":"Resistor","resistance":100,"tolerance":5}"#;

        let err = serde_json::from_str::<Part>(json).unwrap_err();
        assert!(err.to_string().contains("quantity"), "unexpected error: {err}");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: accepted deltas accumulate; the quantity never goes negative.
        #[test]
        fn stock_never_goes_negative(deltas in prop::collection::vec(-50i64..50i64, 0..40)) {
            let mut part = resistor(1);
            let mut expected = 0i64;

            for delta in deltas {
                match part.adjust_stock(delta, test_time()) {
                    Ok(q) => {
                        expected += delta;
                        prop_assert_eq!(q, expected);
                    }
                    Err(_) => prop_assert!(expected + delta < 0),
                }
                prop_assert!(part.quantity() >= 0);
            }
        }
    }
}
