use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexError {
    #[error("odd number of hex digits ({0})")]
    OddLength(usize),
    #[error("invalid hex digit '{0}'")]
    InvalidDigit(char),
}

/// Parse a hex string such as `00 7C 02`, `00:7c:02` or `0x007C02`.
///
/// Whitespace, `:` and `-` between digits are ignored.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, HexError> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits = body
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(HexError::InvalidDigit(c)))
        .collect::<Result<Vec<_>, _>>()?;
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength(digits.len()));
    }
    Ok(digits.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
}

/// Render bytes as uppercase pairs separated by spaces.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{parse_hex, to_hex, HexError};

    #[test]
    fn parses_separated_and_contiguous_forms() {
        let expected = vec![0x00, 0x7C, 0x02, 0x1D];
        assert_eq!(parse_hex("00 7C 02 1D").unwrap(), expected);
        assert_eq!(parse_hex("00:7c:02:1d").unwrap(), expected);
        assert_eq!(parse_hex("0x007C021D").unwrap(), expected);
        assert_eq!(parse_hex(" 00-7C-02-1D\n").unwrap(), expected);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_hex("0").unwrap_err(), HexError::OddLength(1));
        assert_eq!(parse_hex("0g").unwrap_err(), HexError::InvalidDigit('g'));
        assert!(parse_hex("").unwrap().is_empty());
    }

    #[test]
    fn renders_uppercase_pairs() {
        assert_eq!(to_hex(&[0x00, 0x7c, 0xff]), "00 7C FF");
        assert_eq!(to_hex(&[]), "");
    }
}
