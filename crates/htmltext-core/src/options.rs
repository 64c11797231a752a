//! Configuration options for stripping and entity decoding

use std::str::FromStr;

use crate::OptionError;

/// Numeric character reference handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericEntities {
    /// Leave `&#N;` references untouched
    Off,
    /// Decode decimal `&#N;` for `N` in `0..=511` only
    #[default]
    Legacy,
    /// Decode decimal and hexadecimal references for any Unicode scalar value
    Unicode,
}

impl NumericEntities {
    /// Highest code point decoded in legacy mode
    pub const LEGACY_MAX: u32 = 511;

    pub fn is_enabled(self) -> bool {
        !matches!(self, NumericEntities::Off)
    }
}

impl FromStr for NumericEntities {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(NumericEntities::Off),
            "legacy" => Ok(NumericEntities::Legacy),
            "unicode" => Ok(NumericEntities::Unicode),
            _ => Err(OptionError::UnknownNumericEntities(s.to_string())),
        }
    }
}

/// Options for [`strip_with`](crate::strip_with) and [`decode`](crate::decode)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripOptions {
    /// Replace named references such as `&copy;`
    pub named_entities: bool,

    /// Numeric reference handling
    pub numeric_entities: NumericEntities,
}

impl StripOptions {
    /// Options equivalent to the two boolean flags of [`strip`](crate::strip)
    pub fn from_flags(replace_named: bool, replace_numbered: bool) -> Self {
        Self {
            named_entities: replace_named,
            numeric_entities: if replace_numbered {
                NumericEntities::Legacy
            } else {
                NumericEntities::Off
            },
        }
    }

    /// Leave every entity as written
    pub fn raw() -> Self {
        Self::from_flags(false, false)
    }
}

impl Default for StripOptions {
    fn default() -> Self {
        Self::from_flags(true, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_entities() {
        assert_eq!("legacy".parse::<NumericEntities>().unwrap(), NumericEntities::Legacy);
        assert_eq!(" Unicode ".parse::<NumericEntities>().unwrap(), NumericEntities::Unicode);
        assert_eq!("OFF".parse::<NumericEntities>().unwrap(), NumericEntities::Off);
        assert!("hex".parse::<NumericEntities>().is_err());
    }

    #[test]
    fn test_from_flags() {
        let options = StripOptions::from_flags(true, false);
        assert!(options.named_entities);
        assert!(!options.numeric_entities.is_enabled());
        assert_eq!(StripOptions::default().numeric_entities, NumericEntities::Legacy);
    }
}
