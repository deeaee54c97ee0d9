//! Reconciliation of a target amount against a set of open line items.
//!
//! Line items are read from CSV, searched with [`ComboFinder`], and every
//! matching combination is written back out as CSV.

use crate::amount::Amount;
use crate::combination::FoundCombination;
use crate::error::{ComboError, Result};
use crate::finder::ComboFinder;
use crate::record::{ElementRecord, LineItem};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashSet;
use std::io::{Read, Write};

/// Row counts from one [`Reconciler::load_csv`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Rows that became line items.
    pub loaded: usize,

    /// Rows dropped as unreadable, incomplete or duplicate.
    pub skipped: usize,
}

/// One output row: a line item tagged with its combination number.
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    combination: usize,
    id: &'a str,
    amount: Amount,
}

/// Holds loaded line items and runs searches over them.
///
/// # Output
///
/// Combinations are numbered from 1 in the order the finder returns them,
/// with one output row per line item.
pub struct Reconciler {
    /// Line items in input order.
    items: Vec<LineItem>,

    /// IDs already loaded, for duplicate detection.
    seen_ids: HashSet<String>,
}

impl Reconciler {
    /// Creates a reconciler with no line items.
    pub fn new() -> Self {
        Reconciler {
            items: Vec::new(),
            seen_ids: HashSet::new(),
        }
    }

    /// Reads line items from a CSV reader with an `id,amount` header.
    ///
    /// Invalid records and duplicate IDs are logged at warn level and
    /// skipped; the returned summary counts both outcomes.
    pub fn load_csv<R: Read>(&mut self, reader: R) -> Result<LoadSummary> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);
        let mut summary = LoadSummary::default();

        for (row_idx, result) in csv_reader.deserialize::<ElementRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let loaded = match result {
                Ok(record) => self.load_record(&record, row_num),
                Err(e) => Err(ComboError::Csv(e)),
            };

            match loaded {
                Ok(()) => summary.loaded += 1,
                Err(e) => {
                    warn!("Row {}: {}", row_num, e);
                    summary.skipped += 1;
                }
            }
        }

        if summary.skipped > 0 {
            warn!(
                "Skipped {} of {} rows, loaded {} line items",
                summary.skipped,
                summary.loaded + summary.skipped,
                summary.loaded
            );
        } else {
            debug!("Loaded {} line items", summary.loaded);
        }
        Ok(summary)
    }

    fn load_record(&mut self, record: &ElementRecord, row: usize) -> Result<()> {
        let item = record.parse().ok_or_else(|| ComboError::InvalidRecord {
            row,
            message: format!("unusable id or amount for '{}'", record.id.trim()),
        })?;

        if !self.seen_ids.insert(item.id.clone()) {
            return Err(ComboError::DuplicateId { id: item.id, row });
        }

        debug!("Row {}: Loaded {} = {}", row, item.id, item.amount);
        self.items.push(item);
        Ok(())
    }

    /// Adds a line item directly, bypassing CSV.
    ///
    /// Returns `false` and leaves the items unchanged if the ID is taken.
    pub fn add_item(&mut self, item: LineItem) -> bool {
        if !self.seen_ids.insert(item.id.clone()) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Loaded line items, in input order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Finds every combination of line items summing exactly to `target`.
    pub fn find(&self, target: Amount) -> Vec<FoundCombination<'_, LineItem>> {
        ComboFinder::new(&self.items, target).find_combinations()
    }

    /// Searches for `target` and writes the matches as CSV.
    ///
    /// Writes only the header when nothing matches.
    pub fn write_output<W: Write>(&self, target: Amount, writer: W) -> Result<()> {
        // Header written by hand so it appears even with no rows.
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

        csv_writer.write_record(["combination", "id", "amount"])?;

        for (idx, combo) in self.find(target).iter().enumerate() {
            for item in combo {
                csv_writer.serialize(OutputRow {
                    combination: idx + 1,
                    id: &item.id,
                    amount: item.amount,
                })?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}
