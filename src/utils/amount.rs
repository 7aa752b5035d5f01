//! Mint amount validation and wei encoding
//!
//! Field input that is empty, non-numeric, or below the floor price is
//! silently clamped to the floor rather than rejected; the form field is
//! rewritten with the corrected value. The wei encoding works on the decimal
//! string directly so currency amounts keep full precision.

use crate::utils::constants::{FLOOR_AMOUNT, FLOOR_WEI};

/// A normalized mint price: the display string plus its exact wei value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintAmount {
    pub raw: String,
    pub wei: u128,
}

impl MintAmount {
    /// The minimum acceptable price (0.05 ETH).
    pub fn floor() -> Self {
        Self {
            raw: FLOOR_AMOUNT.to_string(),
            wei: FLOOR_WEI,
        }
    }
}

/// Normalize raw field input.
///
/// The f64 parse is only the validity and floor test; the accepted string is
/// re-encoded to wei digit by digit. Input that passes the numeric test but
/// is not wei-representable (scientific notation, more than 18 fractional
/// digits) also clamps to the floor, keeping the silent-correction policy.
pub fn normalize(raw: &str) -> MintAmount {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.05 => match parse_ether(trimmed) {
            Some(wei) => MintAmount {
                raw: trimmed.to_string(),
                wei,
            },
            None => MintAmount::floor(),
        },
        _ => MintAmount::floor(),
    }
}

/// Parse a plain base-10 decimal ETH string into wei (18 decimals), exactly.
///
/// Returns `None` for anything that is not `digits[.digits]` or that carries
/// more than 18 fractional digits.
pub fn parse_ether(s: &str) -> Option<u128> {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.chars().all(|c| c.is_ascii_digit()) || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    if frac_part.len() > 18 {
        return None;
    }

    let int_wei = if int_part.is_empty() {
        0
    } else {
        int_part.parse::<u128>().ok()?.checked_mul(10u128.pow(18))?
    };
    let frac_wei = if frac_part.is_empty() {
        0
    } else {
        frac_part.parse::<u128>().ok()? * 10u128.pow(18 - frac_part.len() as u32)
    };
    int_wei.checked_add(frac_wei)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ether_whole_units() {
        assert_eq!(parse_ether("1"), Some(1_000_000_000_000_000_000));
        assert_eq!(parse_ether("2"), Some(2_000_000_000_000_000_000));
        assert_eq!(parse_ether("0"), Some(0));
    }

    #[test]
    fn test_parse_ether_fractions() {
        assert_eq!(parse_ether("0.05"), Some(50_000_000_000_000_000));
        assert_eq!(parse_ether("0.1"), Some(100_000_000_000_000_000));
        assert_eq!(parse_ether(".5"), Some(500_000_000_000_000_000));
        assert_eq!(parse_ether("1.000000000000000001"), Some(1_000_000_000_000_000_001));
    }

    #[test]
    fn test_parse_ether_rejects_non_decimal() {
        assert_eq!(parse_ether(""), None);
        assert_eq!(parse_ether("."), None);
        assert_eq!(parse_ether("1e2"), None);
        assert_eq!(parse_ether("-1"), None);
        assert_eq!(parse_ether("0x10"), None);
        // 19 fractional digits cannot be represented in wei
        assert_eq!(parse_ether("0.0000000000000000001"), None);
    }

    #[test]
    fn test_normalize_clamps_invalid_input_to_floor() {
        for raw in ["", "   ", "abc", "NaN", "inf", "0.1.2"] {
            assert_eq!(normalize(raw), MintAmount::floor(), "input {:?}", raw);
        }
    }

    #[test]
    fn test_normalize_clamps_below_floor() {
        for raw in ["0", "0.04", "0.049999", "-1"] {
            assert_eq!(normalize(raw), MintAmount::floor(), "input {:?}", raw);
        }
    }

    #[test]
    fn test_normalize_keeps_valid_amounts() {
        let amount = normalize("0.1");
        assert_eq!(amount.raw, "0.1");
        assert_eq!(amount.wei, 100_000_000_000_000_000);

        let amount = normalize("0.05");
        assert_eq!(amount.wei, FLOOR_WEI);

        let amount = normalize("2.5");
        assert_eq!(amount.raw, "2.5");
        assert_eq!(amount.wei, 2_500_000_000_000_000_000);
    }

    #[test]
    fn test_normalize_clamps_unrepresentable_amounts() {
        // numeric by the f64 test but not a plain decimal
        assert_eq!(normalize("1e2"), MintAmount::floor());
        assert_eq!(normalize("1.0000000000000000001"), MintAmount::floor());
    }
}
