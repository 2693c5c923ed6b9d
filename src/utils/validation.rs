use crate::utils::error::{Result, SchoolError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SchoolError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // Written as a negated containment so incomparable values (NaN) fail too.
    if !(value >= min && value <= max) {
        return Err(SchoolError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Splits `"<last> <first>"` into its two tokens.
pub fn split_full_name(value: &str) -> Result<(&str, &str)> {
    let mut tokens = value.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(last), Some(first), None) => Ok((last, first)),
        _ => Err(SchoolError::InvalidFullName {
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("area.name", "Programming").is_ok());
        assert!(validate_non_empty_string("area.name", "").is_err());
        assert!(validate_non_empty_string("area.name", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("birth_year", 2001, 1900, 2026).is_ok());
        assert!(validate_range("birth_year", 2030, 1900, 2026).is_err());
        assert!(validate_range("birth_year", 1899, 1900, 2026).is_err());
        assert!(validate_range("experience", f64::NAN, 0.0, f64::MAX).is_err());
    }

    #[test]
    fn test_split_full_name() {
        assert_eq!(split_full_name("Smith John").unwrap(), ("Smith", "John"));
        assert_eq!(split_full_name("  Smith \t John ").unwrap(), ("Smith", "John"));
        assert!(split_full_name("Smith").is_err());
        assert!(split_full_name("").is_err());
        assert!(split_full_name("Smith John Paul").is_err());
    }
}
