// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates volunteer registration fields.
///
/// This checks field-level constraints only; phone uniqueness is enforced
/// by the persistence layer.
///
/// # Errors
///
/// Returns an error if:
/// - The phone number is empty or contains no digits
/// - The name is empty
pub fn validate_volunteer_fields(phone: &str, name: &str) -> Result<(), DomainError> {
    // Rule: phone must contain at least one digit
    if phone.trim().is_empty() {
        return Err(DomainError::InvalidPhone(String::from(
            "Phone cannot be empty",
        )));
    }
    if !phone.chars().any(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvalidPhone(String::from(
            "Phone must contain digits",
        )));
    }

    // Rule: name must not be empty
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from("Name cannot be empty")));
    }

    Ok(())
}

/// Validates a shift capacity.
///
/// # Errors
///
/// Returns `DomainError::InvalidCapacity` if the capacity is below 1.
pub const fn validate_shift_capacity(capacity: i64) -> Result<(), DomainError> {
    if capacity < 1 {
        return Err(DomainError::InvalidCapacity { capacity });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fields_pass() {
        assert!(validate_volunteer_fields("1111111111", "Sonia").is_ok());
    }

    #[test]
    fn test_empty_phone_rejected() {
        let result = validate_volunteer_fields("", "Sonia");
        assert!(matches!(result, Err(DomainError::InvalidPhone(_))));
    }

    #[test]
    fn test_digitless_phone_rejected() {
        let result = validate_volunteer_fields("call-me", "Sonia");
        assert!(matches!(result, Err(DomainError::InvalidPhone(_))));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = validate_volunteer_fields("1111111111", "  ");
        assert!(matches!(result, Err(DomainError::InvalidName(_))));
    }

    #[test]
    fn test_capacity_must_be_positive() {
        assert!(validate_shift_capacity(1).is_ok());
        assert!(validate_shift_capacity(4).is_ok());
        assert_eq!(
            validate_shift_capacity(0),
            Err(DomainError::InvalidCapacity { capacity: 0 })
        );
    }
}
