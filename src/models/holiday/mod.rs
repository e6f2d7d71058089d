// Holiday module
// Set of public holiday dates in display format

use std::collections::BTreeSet;

use serde_json::Value;

/// Built-in holiday list, used when no valid override is stored.
pub const DEFAULT_HOLIDAYS: [&str; 12] = [
    "08/01/2026", "29/01/2026", "19/03/2026", "26/03/2026",
    "16/04/2026", "30/04/2026", "28/05/2026", "18/06/2026",
    "02/07/2026", "23/07/2026", "27/08/2026", "08/10/2026",
];

/// Holiday dates as `dd/mm/yyyy` strings. Membership is exact string match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    dates: BTreeSet<String>,
}

impl HolidaySet {
    pub fn from_dates<I, S>(dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dates: dates.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve an override value as found in the store.
    ///
    /// Any JSON array is honoured; its string elements become the set and
    /// other elements are skipped. A missing value, blank text, invalid JSON
    /// or a non-array value yields the default list.
    pub fn from_override(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) => {
                let dates: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                if dates.len() != items.len() {
                    log::warn!(
                        "Skipping {} non-string holiday override entries",
                        items.len() - dates.len()
                    );
                }
                Self::from_dates(dates)
            }
            Ok(other) => {
                log::warn!("Ignoring holiday override that is not an array: {}", other);
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring malformed holiday override: {}", e);
                Self::default()
            }
        }
    }

    pub fn contains(&self, date: &str) -> bool {
        self.dates.contains(date)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dates.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// JSON array form, as written back to the store.
    pub fn to_json(&self) -> String {
        Value::from(self.dates.iter().cloned().collect::<Vec<_>>()).to_string()
    }
}

impl Default for HolidaySet {
    fn default() -> Self {
        Self::from_dates(DEFAULT_HOLIDAYS)
    }
}

/// Exact membership test.
pub fn is_holiday(date: &str, holidays: &HolidaySet) -> bool {
    holidays.contains(date)
}
