use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses a Discord snowflake typed by a user, accepting `<#id>` channel mentions.
///
/// # Returns
/// - `Some(u64)` - The id contained in the input
/// - `None` - Input is not an id or a channel mention
pub fn parse_snowflake(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    let id = trimmed
        .strip_prefix("<#")
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(trimmed);

    id.parse::<u64>().ok().filter(|id| *id != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_id() {
        assert_eq!(parse_u64_from_string("1234".to_string()).unwrap(), 1234);
    }

    #[test]
    fn rejects_invalid_stored_id() {
        let result = parse_u64_from_string("abc".to_string());

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::ParseStringId { .. }))
        ));
    }

    #[test]
    fn parses_plain_ids_and_mentions() {
        assert_eq!(parse_snowflake("790967581396828190"), Some(790967581396828190));
        assert_eq!(parse_snowflake("<#790967581396828190>"), Some(790967581396828190));
        assert_eq!(parse_snowflake(" 42 "), Some(42));
    }

    #[test]
    fn rejects_names_and_zero() {
        assert_eq!(parse_snowflake("general"), None);
        assert_eq!(parse_snowflake("0"), None);
        assert_eq!(parse_snowflake("<@123>"), None);
    }
}
