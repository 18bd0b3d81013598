//! Insertion-ordered category → amount mapping.
//!
//! Backend breakdowns arrive as JSON objects whose key order is meaningful to
//! the views (pie slices, breakdown lists), so this map keeps keys in the
//! order they were first inserted. A missing category reads as zero.
//! Accumulation saturates at the `Decimal` bounds instead of panicking.

use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::CategoryId;

/// Amounts keyed by category, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryAmounts {
    entries: Vec<(CategoryId, Decimal)>,
}

impl CategoryAmounts {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Amount for `category`, zero when absent.
    #[must_use]
    pub fn get(&self, category: CategoryId) -> Decimal {
        self.position(category)
            .map_or(Decimal::ZERO, |i| self.entries[i].1)
    }

    /// Whether `category` has an explicit entry.
    #[must_use]
    pub fn contains(&self, category: CategoryId) -> bool {
        self.position(category).is_some()
    }

    /// Sets the amount for `category`, keeping its original position if present.
    pub fn insert(&mut self, category: CategoryId, amount: Decimal) {
        match self.position(category) {
            Some(i) => self.entries[i].1 = amount,
            None => self.entries.push((category, amount)),
        }
    }

    /// Adds `amount` to the running total for `category`, saturating.
    pub fn add(&mut self, category: CategoryId, amount: Decimal) {
        match self.position(category) {
            Some(i) => self.entries[i].1 = self.entries[i].1.saturating_add(amount),
            None => self.entries.push((category, amount)),
        }
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, Decimal)> + '_ {
        self.entries.iter().copied()
    }

    /// Categories in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    /// Sum of all amounts, saturating.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.entries
            .iter()
            .fold(Decimal::ZERO, |sum, (_, amount)| sum.saturating_add(*amount))
    }

    /// Number of categories present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no category is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category with the largest amount; the earliest inserted wins ties.
    #[must_use]
    pub fn largest(&self) -> Option<(CategoryId, Decimal)> {
        self.entries
            .iter()
            .copied()
            .fold(None, |best: Option<(CategoryId, Decimal)>, entry| match best {
                Some(b) if b.1 >= entry.1 => Some(b),
                _ => Some(entry),
            })
    }

    fn position(&self, category: CategoryId) -> Option<usize> {
        self.entries.iter().position(|(c, _)| *c == category)
    }
}

impl FromIterator<(CategoryId, Decimal)> for CategoryAmounts {
    fn from_iter<I: IntoIterator<Item = (CategoryId, Decimal)>>(iter: I) -> Self {
        let mut amounts = Self::new();
        for (category, amount) in iter {
            amounts.insert(category, amount);
        }
        amounts
    }
}

impl Serialize for CategoryAmounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, amount) in &self.entries {
            map.serialize_entry(category, amount)?;
        }
        map.end()
    }
}

struct CategoryAmountsVisitor;

impl<'de> Visitor<'de> for CategoryAmountsVisitor {
    type Value = CategoryAmounts;

    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("a map of category to amount")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut amounts = CategoryAmounts::new();
        while let Some((category, amount)) = access.next_entry::<CategoryId, Decimal>()? {
            amounts.insert(category, amount);
        }
        Ok(amounts)
    }
}

impl<'de> Deserialize<'de> for CategoryAmounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CategoryAmountsVisitor)
    }
}
