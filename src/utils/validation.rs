use crate::utils::error::{Result, UiError};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"))
}

pub fn validate_required(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UiError::validation(format!("{} is required", field_name)));
    }
    Ok(())
}

pub fn validate_length(field_name: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(UiError::validation(format!(
            "{} must be between {} and {} characters",
            field_name, min, max
        )));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !email_regex().is_match(value) {
        return Err(UiError::validation(format!(
            "{} is not a valid email address",
            field_name
        )));
    }
    Ok(())
}

/// At least 8 characters with an uppercase letter, a lowercase letter and a
/// digit, matching the registration page's strength rule.
pub fn validate_password_strength(value: &str) -> Result<()> {
    let has_length = value.chars().count() >= 8;
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());

    if !(has_length && has_upper && has_lower && has_digit) {
        return Err(UiError::validation(
            "Password must be at least 8 characters and include uppercase, lowercase, and numbers",
        ));
    }
    Ok(())
}

pub fn validate_passwords_match(password: &str, confirm: &str) -> Result<()> {
    if password != confirm {
        return Err(UiError::validation("Passwords do not match"));
    }
    Ok(())
}

/// A donation amount must parse and be strictly positive.
pub fn validate_amount(field_name: &str, value: &str) -> Result<f64> {
    let amount: f64 = value.trim().parse().map_err(|_| {
        UiError::validation(format!("{} must be a number", field_name))
    })?;
    if amount <= 0.0 {
        return Err(UiError::validation(format!(
            "{} must be greater than zero",
            field_name
        )));
    }
    Ok(amount)
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed.iter().copied().collect();
    let extension = std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension {
        Some(ext) if allowed_set.contains(ext.as_str()) => Ok(()),
        _ => Err(UiError::validation(format!(
            "{}: '{}' must be one of: {}",
            field_name,
            file,
            allowed.join(", ")
        ))),
    }
}

pub fn validate_non_empty_config(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(UiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_millis(field_name: &str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(UiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "duration must be at least 1 ms".to_string(),
        });
    }
    Ok(())
}

/// Account registration fields and the rules the page enforces before submit.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Validate for RegistrationForm {
    fn validate(&self) -> Result<()> {
        validate_required("username", &self.username)?;
        validate_length("username", &self.username, 3, 64)?;
        validate_required("email", &self.email)?;
        validate_email("email", &self.email)?;
        validate_password_strength(&self.password)?;
        validate_passwords_match(&self.password, &self.confirm_password)?;
        Ok(())
    }
}

/// Pet intake fields; the image is optional but restricted to image files.
#[derive(Debug, Clone, Default)]
pub struct PetIntakeForm {
    pub name: String,
    pub species: String,
    pub description: String,
    pub image_file: Option<String>,
}

impl Validate for PetIntakeForm {
    fn validate(&self) -> Result<()> {
        validate_required("name", &self.name)?;
        validate_length("name", &self.name, 1, 100)?;
        validate_required("species", &self.species)?;
        if !self.description.is_empty() {
            validate_length("description", &self.description, 1, 500)?;
        }
        if let Some(file) = &self.image_file {
            validate_file_extension("image", file, &["jpg", "jpeg", "png"])?;
        }
        Ok(())
    }
}
