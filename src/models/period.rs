use serde::{Deserialize, Serialize};
use std::fmt;

/// One competence month of SIH data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Period {
    pub year: u16,
    pub month: u8,
}

impl Period {
    /// `YYYYMM`, as used in the output filenames.
    pub fn yyyymm(&self) -> String {
        format!("{:04}{:02}", self.year, self.month)
    }

    /// `YYMM`, as used in the DataSUS DBC filenames (`RDSP2504.dbc`).
    pub fn yymm(&self) -> String {
        format!("{:02}{:02}", self.year % 100, self.month)
    }

    /// Returns the configured periods in chronological order (oldest first),
    /// whatever order they were listed in.
    pub fn chronological(periods: &[Period]) -> Vec<Period> {
        let mut ordered = periods.to_vec();
        ordered.sort_unstable();
        ordered
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}
