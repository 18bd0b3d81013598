//! Month selection for the report picker.

use spendtrack_shared::types::Month;

use super::export::export_file_name;

/// Months the user has picked, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthSelection {
    months: Vec<Month>,
}

impl MonthSelection {
    /// Starts with a single selected month.
    #[must_use]
    pub fn new(initial: Month) -> Self {
        Self {
            months: vec![initial],
        }
    }

    /// Adds `month` if absent, removes it if present. Returns whether it is
    /// selected afterwards.
    pub fn toggle(&mut self, month: Month) -> bool {
        if let Some(i) = self.months.iter().position(|m| *m == month) {
            self.months.remove(i);
            false
        } else {
            self.months.push(month);
            true
        }
    }

    /// Whether `month` is selected.
    #[must_use]
    pub fn contains(&self, month: Month) -> bool {
        self.months.contains(&month)
    }

    /// Selected months in pick order.
    #[must_use]
    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// Reports are only requested while something is selected.
    #[must_use]
    pub fn should_fetch(&self) -> bool {
        !self.months.is_empty()
    }

    /// Download name for an export of this selection.
    #[must_use]
    pub fn export_file_name(&self) -> String {
        export_file_name(&self.months)
    }

    /// Months offered by the picker: the `count` months ending at `end`.
    #[must_use]
    pub fn options(end: Month, count: usize) -> Vec<Month> {
        Month::trailing(end, count)
    }
}
