//! Enumerated domains for categorical part attributes.
//!
//! Parsing is case-insensitive and accepts both the canonical upper-snake names
//! and the spellings operators actually type (`Lead-Free`, `MICRO HDMI`, `10MBPS`).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

use benchstock_core::{InventoryError, InventoryResult};

/// Solder composition.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum SolderType {
    #[strum(to_string = "LEAD")]
    Lead,
    #[strum(to_string = "LEAD_FREE", serialize = "LEAD-FREE", serialize = "LEAD FREE")]
    LeadFree,
    #[strum(to_string = "ROSIN_CORE", serialize = "ROSIN-CORE", serialize = "ROSIN CORE")]
    RosinCore,
    #[strum(to_string = "ACID_CORE", serialize = "ACID-CORE", serialize = "ACID CORE")]
    AcidCore,
}

/// Video connector standard of a display cable.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum DisplayCableType {
    #[strum(to_string = "HDMI")]
    Hdmi,
    #[strum(to_string = "VGA")]
    Vga,
    #[serde(rename = "DISPLAYPORT")]
    #[strum(to_string = "DISPLAYPORT", serialize = "DISPLAY_PORT", serialize = "DISPLAY PORT")]
    DisplayPort,
    #[strum(to_string = "MICRO_HDMI", serialize = "MICRO HDMI", serialize = "MICRO-HDMI")]
    MicroHdmi,
}

/// Gender of one end of an ethernet cable.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum ConnectorGender {
    #[strum(to_string = "MALE")]
    Male,
    #[strum(to_string = "FEMALE")]
    Female,
}

/// Rated link speed of an ethernet cable.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum EthernetSpeed {
    #[serde(rename = "MBPS_10")]
    #[strum(to_string = "MBPS_10", serialize = "10MBPS", serialize = "10 MBPS")]
    Mbps10,
    #[serde(rename = "MBPS_100")]
    #[strum(to_string = "MBPS_100", serialize = "100MBPS", serialize = "100 MBPS")]
    Mbps100,
    #[serde(rename = "GBPS_1")]
    #[strum(to_string = "GBPS_1", serialize = "1GBPS", serialize = "1 GBPS")]
    Gbps1,
    #[serde(rename = "GBPS_10")]
    #[strum(to_string = "GBPS_10", serialize = "10GBPS", serialize = "10 GBPS")]
    Gbps10,
}

/// Resolve `text` against a categorical domain, failing closed with
/// [`InventoryError::InvalidAttribute`] naming `attribute`.
pub fn parse_categorical<T>(attribute: &str, text: &str) -> InventoryResult<T>
where
    T: core::str::FromStr,
{
    text.trim()
        .parse::<T>()
        .map_err(|_| InventoryError::invalid_attribute(attribute, text))
}
