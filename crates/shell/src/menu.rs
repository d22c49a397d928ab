use std::io::{self, Write};

use strum::VariantArray;

/// Top-level menu actions, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, VariantArray)]
pub enum MenuChoice {
    AddPart,
    AddInventory,
    ViewInventory,
    SearchParts,
    DeletePart,
    Exit,
}

impl MenuChoice {
    /// Number the operator types to select this action.
    pub fn key(self) -> usize {
        Self::VARIANTS
            .iter()
            .position(|c| *c == self)
            .map_or(0, |i| i + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddPart => "Add Part",
            MenuChoice::AddInventory => "Add Inventory",
            MenuChoice::ViewInventory => "View Inventory",
            MenuChoice::SearchParts => "Search Parts",
            MenuChoice::DeletePart => "Delete Part",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn from_input(text: &str) -> Option<Self> {
        let key: usize = text.trim().parse().ok()?;
        Self::VARIANTS.iter().copied().find(|c| c.key() == key)
    }
}

pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nInventory Management System")?;
    for choice in MenuChoice::VARIANTS {
        writeln!(out, "{}. {}", choice.key(), choice.label())?;
    }
    Ok(())
}
