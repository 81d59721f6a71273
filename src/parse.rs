use crate::Error;

/// Parses a count that may use `_` separators, `2^e` power notation, or
/// `1<<s` shift notation. Powers and shifts past the `u64` ceiling saturate
/// to `u64::MAX`, so `"2^256"` is a valid way to say "effectively forever".
///
/// # Errors
///
/// Returns an error if the digits do not parse as a `u64`.
pub fn parse_count(input: &str) -> Result<u64, Error> {
    let cleaned = input.replace('_', "");

    if let Some(exponent_digits) = cleaned.strip_prefix("2^") {
        let exponent = exponent_digits.parse::<u32>()?;
        return Ok(2u64.saturating_pow(exponent));
    }
    if let Some(shift_digits) = cleaned.strip_prefix("1<<") {
        let shift = shift_digits.parse::<u32>()?;
        return Ok(1u64.checked_shl(shift).unwrap_or(u64::MAX));
    }

    Ok(cleaned.parse::<u64>()?)
}
