//! Validation of user supplied scoreboard options.
//!
//! Shared by the creation wizard and the `set` command. Every validator returns the
//! normalized value or an `AppError::BadRequest` whose message is shown to the user.

use url::Url;

use crate::error::AppError;

pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_URL_LENGTH: usize = 200;
pub const MAX_CREDENTIAL_LENGTH: usize = 64;

const GAMESCOREBOARD_FRAGMENT: &str = "#/gamescoreboard";

fn validate_length(value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let length = value.chars().count();
    if length < min || length > max {
        return Err(AppError::BadRequest(format!(
            "Invalid length! {} characters max, you have {}.",
            max, length
        )));
    }

    Ok(())
}

pub fn validate_name(value: &str) -> Result<String, AppError> {
    validate_length(value, 1, MAX_NAME_LENGTH)?;
    Ok(value.to_string())
}

pub fn validate_api_user(value: &str) -> Result<String, AppError> {
    validate_length(value, 1, MAX_CREDENTIAL_LENGTH)?;
    Ok(value.to_string())
}

pub fn validate_api_password(value: &str) -> Result<String, AppError> {
    validate_length(value, 1, MAX_CREDENTIAL_LENGTH)?;
    Ok(value.to_string())
}

/// Normalizes an RCON API base URL.
///
/// Appends the trailing `/` endpoints are joined onto, then checks the length and that
/// the result is an absolute http(s) URL. Reachability is checked separately by
/// `RconClient::check_public_info`.
///
/// # Arguments
/// - `value` - URL as typed by the user
///
/// # Returns
/// - `Ok(String)` - URL ending with `/`
/// - `Err(AppError::BadRequest)` - Length out of range or not an http(s) URL
pub fn validate_api_url(value: &str) -> Result<String, AppError> {
    let mut api_url = value.trim().to_string();
    if !api_url.ends_with('/') {
        api_url.push('/');
    }

    validate_length(&api_url, 1, MAX_URL_LENGTH)?;

    let parsed = Url::parse(&api_url)
        .map_err(|e| AppError::BadRequest(format!("Invalid URL: {}", e)))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::BadRequest(
            "URL must start with http:// or https://".to_string(),
        ));
    }

    Ok(api_url)
}

/// Validates the optional extended-view link.
///
/// # Returns
/// - `Ok(None)` - Input was `none` (any case) or empty
/// - `Ok(Some(String))` - URL pointing at a gamescoreboard page
/// - `Err(AppError::BadRequest)` - Too long or missing `#/gamescoreboard`
pub fn validate_scoreboard_url(value: &str) -> Result<Option<String>, AppError> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    validate_length(value, 0, MAX_URL_LENGTH)?;

    if !value.contains(GAMESCOREBOARD_FRAGMENT) {
        return Err(AppError::BadRequest(format!(
            "URL doesn't contain \"{}\"",
            GAMESCOREBOARD_FRAGMENT
        )));
    }

    Ok(Some(value.to_string()))
}

pub fn validate_server_id(value: &str) -> Result<i32, AppError> {
    let server_id = value
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest("Value is not a number".to_string()))?;

    if server_id < 1 || server_id > i32::MAX as i64 {
        return Err(AppError::BadRequest(
            "Number out of range! Must be greater than 0.".to_string(),
        ));
    }

    Ok(server_id as i32)
}
