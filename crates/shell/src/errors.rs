use std::io;

use thiserror::Error;

use benchstock_core::InventoryError;

/// Why a menu action stopped early.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Domain failure; reported to the operator, the loop continues.
    #[error(transparent)]
    Domain(#[from] InventoryError),

    /// Input closed mid-action; treated like Exit.
    #[error("end of input")]
    EndOfInput,

    /// Terminal IO failed; ends the session.
    #[error("terminal io failed: {0}")]
    Io(#[from] io::Error),
}

/// Operator-facing message for a recovered domain error.
pub fn error_message(err: &InventoryError) -> String {
    match err {
        InventoryError::NotFound(_) => "Part not found.".to_string(),
        InventoryError::InvalidKind(_) => "Invalid part type.".to_string(),
        InventoryError::InvalidAttribute { attribute, value } => {
            format!("Invalid {attribute}: {value:?}.")
        }
        InventoryError::InvalidQuantity { sku, on_hand, delta } => {
            format!("Cannot adjust stock of SKU {sku} by {delta}: only {on_hand} on hand.")
        }
        InventoryError::Parse { field, input } => {
            format!("Could not read {field} from {input:?}.")
        }
    }
}
