//! The element capability consumed by the finder.

use crate::amount::Amount;
use rust_decimal::Decimal;

/// Anything that can report an exact amount to the combination finder.
///
/// Implement this on your own domain types (invoice lines, ledger entries)
/// to search over them directly. The finder only ever reads the amount.
///
/// ```
/// use combo_finder::{Amount, ComboElement};
///
/// struct InvoiceLine {
///     number: u32,
///     open_balance: Amount,
/// }
///
/// impl ComboElement for InvoiceLine {
///     fn combo_amount(&self) -> Amount {
///         self.open_balance
///     }
/// }
/// ```
pub trait ComboElement {
    /// The amount this element contributes to a combination.
    fn combo_amount(&self) -> Amount;
}

impl ComboElement for Amount {
    fn combo_amount(&self) -> Amount {
        *self
    }
}

impl ComboElement for Decimal {
    fn combo_amount(&self) -> Amount {
        Amount::new(*self)
    }
}

impl<T: ComboElement + ?Sized> ComboElement for &T {
    fn combo_amount(&self) -> Amount {
        (**self).combo_amount()
    }
}
