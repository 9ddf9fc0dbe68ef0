//! Admin form validation.
use crate::error::ValidationError;
use crate::types::LocalizedText;

pub const MIN_PASSWORD_LEN: usize = 6;
const MAX_EMAIL_LEN: usize = 254;

/// A required bilingual field: both variants must be filled.
pub fn required_text(field: &'static str, ar: &str, en: &str) -> Result<LocalizedText, ValidationError> {
    match LocalizedText::parse(ar, en) {
        Ok(Some(text)) => Ok(text),
        Ok(None) => Err(ValidationError::MissingField { field }),
        Err(_) => Err(ValidationError::IncompleteTranslation { field }),
    }
}

/// An optional bilingual field: both variants or neither.
pub fn optional_text(field: &'static str, ar: &str, en: &str) -> Result<LocalizedText, ValidationError> {
    LocalizedText::parse(ar, en)
        .map(Option::unwrap_or_default)
        .map_err(|_| ValidationError::IncompleteTranslation { field })
}

pub fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(value.to_string())
}

/// Basic structural check: non-empty local part and domain around a single `@`.
pub fn email(value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() || value.len() > MAX_EMAIL_LEN || value.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }
    let (local, domain) = value.split_once('@').ok_or(ValidationError::InvalidEmail)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err(ValidationError::InvalidEmail);
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(value.to_string())
}

/// Image or link URL: blank means none; otherwise `http(s)://host...` or an embedded image.
pub fn optional_url(field: &'static str, value: &str) -> Result<Option<String>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if value.starts_with("data:image/") {
        return Ok(Some(value.to_string()));
    }
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .ok_or(ValidationError::InvalidUrl { field })?;
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    if host.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidUrl { field });
    }
    Ok(Some(value.to_string()))
}

pub fn password(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}
