//! Plain-text rendering of listings and search results.

use std::io::{self, Write};

use benchstock_inventory::InventoryManager;
use benchstock_parts::Part;

/// One line per entry: SKU, kind name and quantity.
pub fn write_inventory(out: &mut impl Write, manager: &InventoryManager) -> io::Result<()> {
    if manager.is_empty() {
        return writeln!(out, "Inventory is empty.");
    }

    writeln!(out, "\nCurrent Inventory:")?;
    for (sku, part) in manager.get_inventory() {
        writeln!(out, "SKU: {sku}, Part: {}, Quantity: {}", part.kind(), part.quantity())?;
    }
    Ok(())
}

/// Every attribute of each matching part.
pub fn write_search_results(out: &mut impl Write, results: &[&Part]) -> io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "No matching parts found.");
    }

    writeln!(out, "\nSearch Results:")?;
    for part in results {
        writeln!(out, "{part}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchstock_core::Sku;
    use benchstock_parts::{DisplayCable, DisplayCableType, Resistor};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_inventory_says_so() {
        let manager = InventoryManager::new();
        assert_eq!(render(|out| write_inventory(out, &manager)), "Inventory is empty.\n");
    }

    #[test]
    fn listing_shows_sku_kind_and_quantity() {
        let mut manager = InventoryManager::new();
        manager.add_part(Part::new(
            Sku::new(12),
            DisplayCable {
                cable_type: DisplayCableType::Vga,
                length: 48.0,
                color: "#333333".to_string(),
            },
        ));
        manager.add_inventory(Sku::new(12), 3).unwrap();

        let text = render(|out| write_inventory(out, &manager));
        assert_eq!(text, "\nCurrent Inventory:\nSKU: 12, Part: DisplayCable, Quantity: 3\n");
    }

    #[test]
    fn search_results_render_attributes() {
        let part = Part::new(
            Sku::new(1),
            Resistor {
                resistance: 470,
                tolerance: 1,
            },
        );

        let text = render(|out| write_search_results(out, &[&part]));
        assert!(text.starts_with("\nSearch Results:\nResistor(sku=1, resistance=470, tolerance=1, quantity=0"));

        let none = render(|out| write_search_results(out, &[]));
        assert_eq!(none, "No matching parts found.\n");
    }
}
