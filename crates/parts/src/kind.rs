//! Part kind registry: the closed set of trackable item kinds.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

use benchstock_core::{InventoryError, InventoryResult};

use crate::attribute::Attribute;

/// Discriminator of a [`crate::PartSpec`] variant.
///
/// Names resolve through a static table (case-insensitive, with or without the
/// space the menu prompt shows), never through reflection.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum PartKind {
    Resistor,
    Solder,
    Wire,
    #[strum(to_string = "DisplayCable", serialize = "Display Cable", serialize = "display_cable")]
    DisplayCable,
    #[strum(to_string = "EthernetCable", serialize = "Ethernet Cable", serialize = "ethernet_cable")]
    EthernetCable,
}

impl PartKind {
    /// Resolve a kind name typed by an operator.
    pub fn from_name(name: &str) -> InventoryResult<Self> {
        name.trim()
            .parse()
            .map_err(|_| InventoryError::invalid_kind(name.trim()))
    }

    /// Kind-specific attributes, in construction/display order.
    pub fn attributes(self) -> &'static [Attribute] {
        match self {
            PartKind::Resistor => &[Attribute::Resistance, Attribute::Tolerance],
            PartKind::Solder => &[Attribute::SolderType, Attribute::Length],
            PartKind::Wire => &[Attribute::Gauge, Attribute::Length],
            PartKind::DisplayCable => &[Attribute::CableType, Attribute::Length, Attribute::Color],
            PartKind::EthernetCable => &[
                Attribute::AlphaType,
                Attribute::BetaType,
                Attribute::Speed,
                Attribute::Length,
            ],
        }
    }

    pub fn has_attribute(self, attribute: Attribute) -> bool {
        self.attributes().contains(&attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_names_in_any_case_and_spacing() {
        assert_eq!(PartKind::from_name("resistor").unwrap(), PartKind::Resistor);
        assert_eq!(PartKind::from_name("Display Cable").unwrap(), PartKind::DisplayCable);
        assert_eq!(PartKind::from_name(" ethernetcable ").unwrap(), PartKind::EthernetCable);
        assert_eq!(PartKind::from_name("ETHERNET CABLE").unwrap(), PartKind::EthernetCable);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = PartKind::from_name("Capacitor").unwrap_err();
        assert_eq!(err, InventoryError::invalid_kind("Capacitor"));
    }

    #[test]
    fn every_kind_declares_attributes() {
        for kind in PartKind::VARIANTS {
            assert!(!kind.attributes().is_empty(), "{kind} has no attributes");
        }
        assert!(PartKind::Wire.has_attribute(Attribute::Gauge));
        assert!(!PartKind::Resistor.has_attribute(Attribute::Length));
    }
}
