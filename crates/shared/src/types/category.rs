//! Expense categories.

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Closed set of expense categories known to the backend.
///
/// Serialized by identifier (`"Food"`, `"Rent"`, ...), which is also the key
/// used in report breakdowns and budget lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryId {
    /// Groceries, restaurants, coffee.
    Food,
    /// Housing rent.
    Rent,
    /// General shopping.
    Shopping,
    /// Commute and vehicle costs.
    Transport,
    /// Power, water, internet, phone.
    Utilities,
    /// Movies, games, subscriptions.
    Entertainment,
    /// Medical and fitness.
    Health,
    /// Courses, books, tuition.
    Education,
    /// Trips and lodging.
    Travel,
    /// Anything else.
    Miscellaneous,
}

impl CategoryId {
    /// Every category in canonical display order.
    pub const ALL: [Self; 10] = [
        Self::Food,
        Self::Rent,
        Self::Shopping,
        Self::Transport,
        Self::Utilities,
        Self::Entertainment,
        Self::Health,
        Self::Education,
        Self::Travel,
        Self::Miscellaneous,
    ];

    /// Wire identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Shopping => "Shopping",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Travel => "Travel",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// Human-readable name used for chart labels.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Food => "Food & Dining",
            other => other.as_str(),
        }
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CategoryId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_all_is_canonical_order() {
        assert_eq!(CategoryId::ALL.len(), 10);
        assert_eq!(CategoryId::ALL[0], CategoryId::Food);
        assert_eq!(CategoryId::ALL[9], CategoryId::Miscellaneous);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(CategoryId::Food.display_name(), "Food & Dining");
        assert_eq!(CategoryId::Rent.display_name(), "Rent");
        assert_eq!(CategoryId::Miscellaneous.display_name(), "Miscellaneous");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(CategoryId::from_str("Food").unwrap(), CategoryId::Food);
        assert_eq!(CategoryId::from_str("travel").unwrap(), CategoryId::Travel);
        assert_eq!(CategoryId::from_str(" Health ").unwrap(), CategoryId::Health);
        assert!(matches!(
            CategoryId::from_str("Groceries"),
            Err(ParseError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for category in CategoryId::ALL {
            assert_eq!(CategoryId::from_str(&category.to_string()).unwrap(), category);
        }
    }

    #[test]
    fn test_serde_uses_identifier() {
        let json = serde_json::to_string(&CategoryId::Entertainment).unwrap();
        assert_eq!(json, "\"Entertainment\"");

        let parsed: CategoryId = serde_json::from_str("\"Utilities\"").unwrap();
        assert_eq!(parsed, CategoryId::Utilities);
    }
}
