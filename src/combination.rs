//! Match record returned by the finder.

use crate::amount::Amount;
use crate::element::ComboElement;
use std::slice;

/// A set of elements whose amounts add up exactly to the searched target.
///
/// Elements are held by reference, so callers get back the very objects
/// they passed in. Order follows the finder's descending-amount order, not
/// the caller's input order.
#[derive(Debug)]
pub struct FoundCombination<'a, E> {
    elements: Vec<&'a E>,
}

impl<'a, E> FoundCombination<'a, E> {
    pub(crate) fn from_elements(elements: Vec<&'a E>) -> Self {
        FoundCombination { elements }
    }

    /// The matched elements. Always a valid slice, empty after [`clear`].
    ///
    /// [`clear`]: FoundCombination::clear
    pub fn elements(&self) -> &[&'a E] {
        &self.elements
    }

    /// Number of elements in the combination.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the combination holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the matched elements in order.
    pub fn iter(&self) -> slice::Iter<'_, &'a E> {
        self.elements.iter()
    }

    /// Drops all contained elements, leaving an empty combination.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Consumes the combination, returning the element references.
    pub fn into_elements(self) -> Vec<&'a E> {
        self.elements
    }
}

impl<'a, E: ComboElement> FoundCombination<'a, E> {
    /// Sum of the contained amounts.
    pub fn total(&self) -> Amount {
        self.elements.iter().map(|e| e.combo_amount()).sum()
    }

    /// The contained amounts, in order.
    pub fn amounts(&self) -> Vec<Amount> {
        self.elements.iter().map(|e| e.combo_amount()).collect()
    }
}

impl<E> Default for FoundCombination<'_, E> {
    fn default() -> Self {
        FoundCombination {
            elements: Vec::new(),
        }
    }
}

impl<E> Clone for FoundCombination<'_, E> {
    fn clone(&self) -> Self {
        FoundCombination {
            elements: self.elements.clone(),
        }
    }
}

/// Two combinations are equal when they reference the same elements, in
/// the same order.
impl<E> PartialEq for FoundCombination<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        self.elements.len() == other.elements.len()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| std::ptr::eq(*a, *b))
    }
}

impl<E> Eq for FoundCombination<'_, E> {}

impl<'c, 'a, E> IntoIterator for &'c FoundCombination<'a, E> {
    type Item = &'c &'a E;
    type IntoIter = slice::Iter<'c, &'a E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
