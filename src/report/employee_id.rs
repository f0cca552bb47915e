/// Validated employee identifier.
use std::fmt;
use std::str::FromStr;

use super::errors::ReportError;

/// A non-negative employee ID, held as canonical decimal digits.
///
/// There is no magnitude limit, so the value is never converted to an
/// integer. Leading zeros are stripped so that `"007"` and `"7"` name the
/// same URLs and output files.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Canonical digit string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EmployeeId {
    type Err = ReportError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ReportError::InvalidEmployeeId {
                input: raw.to_owned(),
            });
        }
        let trimmed = raw.trim_start_matches('0');
        let canonical = if trimmed.is_empty() { "0" } else { trimmed };
        Ok(Self(canonical.to_owned()))
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
