use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use benchstock_core::{InventoryError, InventoryResult, Sku};
use benchstock_inventory::{Criteria, InventoryManager};
use benchstock_parts::{Attribute, Part, PartKind, PartSpec};

use crate::errors::{ShellError, error_message};
use crate::menu::{MenuChoice, write_menu};
use crate::render;

const KIND_PROMPT: &str = "Enter Part Type (Resistor/Solder/Wire/Display Cable/Ethernet Cable): ";
const CRITERIA_PROMPT: &str = "Enter Search Criteria (e.g., resistance=100 for resistors): ";

type ActionResult = Result<(), ShellError>;

/// Menu-driven session over one in-memory inventory.
///
/// Every recovered error is reported and the loop continues; only end of input,
/// the Exit choice, or a failing terminal end the session.
pub struct Shell<R, W> {
    manager: InventoryManager,
    input: R,
    output: W,
}

impl<R, W> Shell<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self::with_manager(InventoryManager::new(), input, output)
    }

    pub fn with_manager(manager: InventoryManager, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
        }
    }

    pub fn manager(&self) -> &InventoryManager {
        &self.manager
    }

    pub fn into_parts(self) -> (InventoryManager, W) {
        (self.manager, self.output)
    }

    /// Run until Exit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write_menu(&mut self.output)?;

            let Some(text) = self.prompt("Enter your choice: ")? else {
                break;
            };
            let Some(choice) = MenuChoice::from_input(&text) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };
            debug!(?choice, "menu choice");

            let outcome = match choice {
                MenuChoice::AddPart => self.add_part(),
                MenuChoice::AddInventory => self.add_inventory(),
                MenuChoice::ViewInventory => self.view_inventory(),
                MenuChoice::SearchParts => self.search_parts(),
                MenuChoice::DeletePart => self.delete_part(),
                MenuChoice::Exit => break,
            };

            match outcome {
                Ok(()) => {}
                Err(ShellError::Domain(err)) => {
                    warn!(error = %err, ?choice, "action failed");
                    writeln!(self.output, "{}", error_message(&err))?;
                }
                Err(ShellError::EndOfInput) => break,
                Err(ShellError::Io(err)) => return Err(err),
            }
        }

        writeln!(self.output, "Exiting...")?;
        self.output.flush()
    }

    fn add_part(&mut self) -> ActionResult {
        let sku = self.prompt_parsed("Enter SKU: ", parse_sku)?;
        let kind = PartKind::from_name(&self.require(KIND_PROMPT)?)?;

        let mut values = Vec::with_capacity(kind.attributes().len());
        for &attribute in kind.attributes() {
            let label = format!("Enter {}: ", attribute_prompt(attribute));
            let value = self.prompt_parsed(&label, |text| attribute.parse_value(text))?;
            values.push((attribute, value));
        }

        let spec = PartSpec::from_values(kind, &values)?;
        let replaced = self.manager.add_part(Part::new(sku, spec));
        info!(%sku, %kind, replaced = replaced.is_some(), "part added");

        writeln!(self.output, "Part added successfully.")?;
        Ok(())
    }

    fn add_inventory(&mut self) -> ActionResult {
        let sku = self.prompt_parsed("Enter SKU of the part: ", parse_sku)?;
        let quantity = self.prompt_parsed("Enter quantity to add: ", parse_quantity)?;

        let total = self.manager.add_inventory(sku, quantity)?;
        info!(%sku, quantity, total, "inventory updated");

        writeln!(self.output, "Inventory updated successfully.")?;
        Ok(())
    }

    fn view_inventory(&mut self) -> ActionResult {
        render::write_inventory(&mut self.output, &self.manager)?;
        Ok(())
    }

    fn search_parts(&mut self) -> ActionResult {
        let kind = PartKind::from_name(&self.require(KIND_PROMPT)?)?;
        let criteria = Criteria::parse(kind, &self.require(CRITERIA_PROMPT)?)?;

        let results = self.manager.search(kind, &criteria);
        info!(%kind, terms = criteria.terms().len(), matches = results.len(), "search");

        render::write_search_results(&mut self.output, &results)?;
        Ok(())
    }

    fn delete_part(&mut self) -> ActionResult {
        let sku = self.prompt_parsed("Enter SKU of the part to delete: ", parse_sku)?;

        let removed = self.manager.delete_part(sku)?;
        info!(%sku, kind = %removed.kind(), "part deleted");

        writeln!(self.output, "Part deleted successfully.")?;
        Ok(())
    }

    /// Write `label`, read one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn require(&mut self, label: &str) -> Result<String, ShellError> {
        self.prompt(label)?.ok_or(ShellError::EndOfInput)
    }

    /// Prompt until `parse` succeeds; malformed numbers re-prompt, any other
    /// error aborts the action.
    fn prompt_parsed<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> InventoryResult<T>,
    ) -> Result<T, ShellError> {
        loop {
            let text = self.require(label)?;
            match parse(&text) {
                Ok(value) => return Ok(value),
                Err(err @ InventoryError::Parse { .. }) => {
                    debug!(error = %err, "re-prompting");
                    writeln!(self.output, "{} Please try again.", error_message(&err))?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

fn parse_sku(text: &str) -> InventoryResult<Sku> {
    text.parse()
}

fn parse_quantity(text: &str) -> InventoryResult<i64> {
    text.trim()
        .parse()
        .map_err(|_| InventoryError::parse("quantity", text))
}

fn attribute_prompt(attribute: Attribute) -> &'static str {
    match attribute {
        Attribute::Resistance => "Resistance (Ohms)",
        Attribute::Tolerance => "Tolerance (%)",
        Attribute::SolderType => "Solder Type (Lead/Lead-Free/Rosin-Core/Acid-Core)",
        Attribute::Length => "Length (inches)",
        Attribute::Gauge => "Gauge",
        Attribute::CableType => "Cable Type (HDMI/VGA/DISPLAYPORT/MICRO HDMI)",
        Attribute::Color => "Color (Hexadecimal format, e.g., #RRGGBB)",
        Attribute::AlphaType => "Alpha Type (MALE/FEMALE)",
        Attribute::BetaType => "Beta Type (MALE/FEMALE)",
        Attribute::Speed => "Speed (10MBPS/100MBPS/1GBPS/10GBPS)",
    }
}
