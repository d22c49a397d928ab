//! Part model for the workshop inventory.
//!
//! A closed set of part variants, the enumerated domains of their categorical
//! attributes, and the name tables that turn operator text into typed values.
//! Pure domain logic: no IO, no logging.

pub mod attribute;
pub mod domain;
pub mod kind;
pub mod part;

pub use attribute::{Attribute, AttributeValue};
pub use domain::{ConnectorGender, DisplayCableType, EthernetSpeed, SolderType};
pub use kind::PartKind;
pub use part::{DisplayCable, EthernetCable, Part, PartSpec, Resistor, Solder, Wire};
