//! # Combo Finder
//!
//! Finds every combination of elements whose decimal amounts add up exactly
//! to a target amount, e.g. which open invoice lines a deposit pays off.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: Amounts are `rust_decimal` values, never floats;
//!   running totals widen to `bigdecimal` so they cannot overflow or round
//! - **Exhaustive search**: Every non-empty subset is considered
//! - **Early abort**: Candidates are dropped once their running total overshoots
//! - **Borrowed results**: Matches reference the caller's own elements
//!
//! The search is exponential in the number of usable elements. Callers
//! should bound their input size for interactive use.
//!
//! ## Example
//!
//! ```
//! use combo_finder::{Amount, ComboElement, ComboFinder};
//! use std::str::FromStr;
//!
//! struct Invoice {
//!     number: u32,
//!     open: Amount,
//! }
//!
//! impl ComboElement for Invoice {
//!     fn combo_amount(&self) -> Amount {
//!         self.open
//!     }
//! }
//!
//! let invoices = vec![
//!     Invoice { number: 1, open: Amount::from_str("9.00").unwrap() },
//!     Invoice { number: 2, open: Amount::from_str("1.00").unwrap() },
//!     Invoice { number: 3, open: Amount::from_str("4.00").unwrap() },
//! ];
//!
//! let deposit = Amount::from_str("10.00").unwrap();
//! let found = ComboFinder::new(&invoices, deposit).find_combinations();
//!
//! assert_eq!(found.len(), 1);
//! let numbers: Vec<u32> = found[0].iter().map(|inv| inv.number).collect();
//! assert_eq!(numbers, vec![1, 2]);
//! ```

pub mod amount;
pub mod combination;
pub mod element;
pub mod error;
pub mod finder;
pub mod reconcile;
pub mod record;

pub use amount::Amount;
pub use combination::FoundCombination;
pub use element::ComboElement;
pub use error::{ComboError, Result};
pub use finder::{ComboFinder, LARGE_SEARCH_WARN_THRESHOLD};
pub use reconcile::{LoadSummary, Reconciler};
pub use record::{ElementRecord, LineItem};
