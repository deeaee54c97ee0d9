//! Line-item records for CSV input.

use crate::amount::Amount;
use crate::element::ComboElement;
use serde::Deserialize;

/// Raw line-item record as read from CSV.
///
/// An empty amount field reads as `None`. An amount that is not a valid
/// decimal fails deserialization of its own row only.
#[derive(Debug, Deserialize)]
pub struct ElementRecord {
    /// Caller-side identifier, e.g. an invoice line number.
    pub id: String,

    /// Open amount of the line.
    pub amount: Option<Amount>,
}

impl ElementRecord {
    /// Parses the raw CSV record into a typed line item.
    ///
    /// Returns `None` if the id is blank or the amount is missing.
    pub fn parse(&self) -> Option<LineItem> {
        let id = self.id.trim();
        if id.is_empty() {
            return None;
        }
        Some(LineItem {
            id: id.to_string(),
            amount: self.amount?,
        })
    }
}

/// A parsed line item that can take part in a combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Identifier as given in the input.
    pub id: String,

    /// Open amount of the line.
    pub amount: Amount,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(id: impl Into<String>, amount: Amount) -> Self {
        LineItem {
            id: id.into(),
            amount,
        }
    }
}

impl ComboElement for LineItem {
    fn combo_amount(&self) -> Amount {
        self.amount
    }
}
