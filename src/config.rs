//! Output width budget.

use crate::error::{Error, Result};

/// Default maximum output width, in characters.
pub const DEFAULT_MAX_CHARS: u32 = 160;

/// Conversion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum output width in characters (each character is 2 pixels wide)
    pub max_chars: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl Config {
    /// Build a config from the optional width argument.
    ///
    /// An unparsable or non-positive width falls back to [`DEFAULT_MAX_CHARS`];
    /// the recovered error is returned alongside so the caller can warn about it.
    pub fn from_width_arg(arg: Option<&str>) -> (Self, Option<Error>) {
        match arg.map(parse_max_chars) {
            None => (Self::default(), None),
            Some(Ok(max_chars)) => (Self { max_chars }, None),
            Some(Err(e)) => {
                log::warn!("{}, using {}", e, DEFAULT_MAX_CHARS);
                (Self::default(), Some(e))
            }
        }
    }
}

/// Parse a width argument as a strictly positive character count.
pub fn parse_max_chars(arg: &str) -> Result<u32> {
    match arg.trim().parse::<i64>() {
        Ok(n) if n > 0 => u32::try_from(n).map_err(|_| Error::InvalidWidth(arg.to_string())),
        _ => Err(Error::InvalidWidth(arg.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_width() {
        assert_eq!(Config::default().max_chars, 160);
    }

    #[test]
    fn test_parse_valid_width() {
        assert_eq!(parse_max_chars("80").unwrap(), 80);
        assert_eq!(parse_max_chars(" 12 ").unwrap(), 12);
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert!(matches!(parse_max_chars("0"), Err(Error::InvalidWidth(_))));
        assert!(matches!(parse_max_chars("-5"), Err(Error::InvalidWidth(_))));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_max_chars("abc"), Err(Error::InvalidWidth(_))));
        assert!(matches!(parse_max_chars(""), Err(Error::InvalidWidth(_))));
        assert!(matches!(parse_max_chars("12abc"), Err(Error::InvalidWidth(_))));
        assert!(matches!(parse_max_chars("99999999999"), Err(Error::InvalidWidth(_))));
    }

    #[test]
    fn test_from_width_arg_falls_back() {
        let (config, err) = Config::from_width_arg(Some("abc"));
        assert_eq!(config, Config::default());
        assert!(err.is_some());

        let (config, err) = Config::from_width_arg(Some("40"));
        assert_eq!(config.max_chars, 40);
        assert!(err.is_none());

        let (config, err) = Config::from_width_arg(None);
        assert_eq!(config, Config::default());
        assert!(err.is_none());
    }
}
