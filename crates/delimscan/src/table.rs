use alloc::vec::Vec;

use crate::error::TableError;

/// An ordered table of delimiter values driving a [`Scanner`].
///
/// Slot 0 holds the *escape element*. The remaining slots are *delimiter
/// slots*, grouped in consecutive pairs: each odd slot carries an opening
/// role and the even slot that follows it carries the closing role of the
/// same pair. A pair whose opening and closing values are equal is
/// *self-pairing* (a quote character, for instance); this is detected
/// structurally, never via a flag.
///
/// Shape is validated once, at construction: after the escape element there
/// must be at least one pair, and delimiter slots must be complete pairs.
/// Violations are configuration errors ([`TableError`]), never scan errors.
///
/// Delimiter values — excluding the two halves of a self-pairing pair — must
/// be distinct within the table. The scanner resolves a value that would
/// match several slots by first match in ascending slot order, so duplicate
/// values silently shadow later slots.
///
/// # Examples
///
/// ```rust
/// use delimscan::DelimiterTable;
///
/// // Escape `\`, pair `(`/`)`, pair `[`/`]`.
/// let table = DelimiterTable::new(vec!['\\', '(', ')', '[', ']']).unwrap();
/// assert_eq!(table.pair_count(), 2);
/// assert!(!table.is_self_pairing(1));
/// ```
///
/// [`Scanner`]: crate::Scanner
// Deserialize is omitted: `new` is the only path that establishes the
// pairing shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DelimiterTable<T> {
    slots: Vec<T>,
}

impl<T> DelimiterTable<T> {
    /// Builds a table from its slots, validating the shape.
    ///
    /// # Errors
    ///
    /// [`TableError::MissingPairs`] if `slots` does not contain an escape
    /// element followed by at least one pair; [`TableError::UnpairedSlot`]
    /// if the delimiter slots after the escape element do not form complete
    /// pairs.
    pub fn new(slots: Vec<T>) -> Result<Self, TableError> {
        if slots.len() < 3 {
            return Err(TableError::MissingPairs);
        }
        let delimiter_slots = slots.len() - 1;
        if delimiter_slots % 2 != 0 {
            return Err(TableError::UnpairedSlot(delimiter_slots));
        }
        Ok(Self { slots })
    }

    /// The escape element (slot 0).
    #[must_use]
    pub fn escape(&self) -> &T {
        &self.slots[0]
    }

    /// The value stored at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= self.slot_count()`.
    #[must_use]
    pub fn value(&self, slot: usize) -> &T {
        &self.slots[slot]
    }

    /// Total number of slots, the escape slot included.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of delimiter pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        (self.slots.len() - 1) / 2
    }

    /// Whether `slot` carries an opening role.
    ///
    /// Slot 0 (the escape element) is neither opening nor closing.
    #[must_use]
    pub fn is_opening(&self, slot: usize) -> bool {
        slot % 2 == 1 && slot < self.slots.len()
    }
}

impl<T: PartialEq> DelimiterTable<T> {
    /// Whether the pair opened by `open_slot` closes with the same value.
    ///
    /// # Panics
    ///
    /// Panics if `open_slot` is not an opening slot of this table.
    #[must_use]
    pub fn is_self_pairing(&self, open_slot: usize) -> bool {
        assert!(self.is_opening(open_slot), "not an opening slot");
        self.slots[open_slot] == self.slots[open_slot + 1]
    }
}
