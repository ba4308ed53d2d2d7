use std::{fmt, str::FromStr};

/// A canonical question identifier of the form `P<number>`.
///
/// The numeric value and the original digit width are both retained, so a
/// source header of `::P07::` round-trips as `P07` rather than collapsing to
/// `P7`. Parsing is case-insensitive; display is always uppercase.
///
/// Examples: `P1`, `P07`, `P123`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label {
    number: usize,
    width: usize,
}

impl Label {
    /// Create a label from a bare number, using its natural digit width.
    #[must_use]
    pub fn new(number: usize) -> Self {
        let width = number.to_string().len();
        Self { number, width }
    }

    /// Returns the numeric component.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Parse the digit string following the `P` marker.
    ///
    /// Retains leading zeros via the stored width.
    pub(crate) fn from_digits(digits: &str) -> Result<Self, Error> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error(digits.to_string()));
        }
        let number = digits
            .parse()
            .map_err(|_| Error(digits.to_string()))?;
        Ok(Self {
            number,
            width: digits.len(),
        })
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "P{:0width$}", self.number, width = self.width)
    }
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(['P', 'p'])
            .ok_or_else(|| Error(s.to_string()))?;
        Self::from_digits(digits).map_err(|_| Error(s.to_string()))
    }
}

impl TryFrom<&str> for Label {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl serde::Serialize for Label {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Error returned when a string is not a valid `P<number>` label.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid question label '{0}': expected the form P<number>")]
pub struct Error(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_uppercase() {
        let label: Label = "P7".parse().unwrap();
        assert_eq!(label.number(), 7);
        assert_eq!(label.to_string(), "P7");
    }

    #[test]
    fn parses_lowercase_to_canonical_form() {
        let label: Label = "p12".parse().unwrap();
        assert_eq!(label.to_string(), "P12");
    }

    #[test]
    fn preserves_leading_zeros() {
        let label: Label = "P07".parse().unwrap();
        assert_eq!(label.number(), 7);
        assert_eq!(label.to_string(), "P07");
    }

    #[test]
    fn new_uses_natural_width() {
        assert_eq!(Label::new(3).to_string(), "P3");
        assert_eq!(Label::new(42).to_string(), "P42");
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!("7".parse::<Label>().is_err());
    }

    #[test]
    fn rejects_empty_digits() {
        assert!("P".parse::<Label>().is_err());
    }

    #[test]
    fn rejects_non_numeric() {
        assert!("Px".parse::<Label>().is_err());
        assert!("P1a".parse::<Label>().is_err());
    }

    #[test]
    fn serializes_as_string() {
        let label: Label = "P07".parse().unwrap();
        assert_eq!(serde_json::to_string(&label).unwrap(), "\"P07\"");
    }
}
