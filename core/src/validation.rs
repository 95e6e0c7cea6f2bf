//! Name validation for lists and todos.
//!
//! Validators never trim or normalize their input. Callers strip
//! surrounding whitespace before validating, and pass the same string on
//! to the store.

use crate::error::NameError;

/// Shortest accepted name, in characters
pub const MIN_NAME_LEN: usize = 1;

/// Longest accepted name, in characters
pub const MAX_NAME_LEN: usize = 100;

fn check_length(name: &str) -> Result<(), NameError> {
    let len = name.chars().count();
    if (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        Ok(())
    } else {
        Err(NameError::Length)
    }
}

/// Validates a list name against the names already in the store.
///
/// Length is checked first; a name of the wrong length is reported as
/// [`NameError::Length`] even if it also collides with an existing name.
/// The duplicate check is exact and case-sensitive.
///
/// # Errors
///
/// Returns [`NameError::Length`] if `name` is not 1-100 characters, or
/// [`NameError::Duplicate`] if `existing_names` contains `name`.
///
/// # Example
///
/// ```
/// use todo_lists_core::error::NameError;
/// use todo_lists_core::validation::validate_list_name;
///
/// assert_eq!(validate_list_name("Groceries", ["Work"]), Ok(()));
/// assert_eq!(validate_list_name("Work", ["Work"]), Err(NameError::Duplicate));
/// assert_eq!(validate_list_name("", ["Work"]), Err(NameError::Length));
/// ```
pub fn validate_list_name<'a>(
    name: &str,
    existing_names: impl IntoIterator<Item = &'a str>,
) -> Result<(), NameError> {
    check_length(name)?;

    if existing_names.into_iter().any(|existing| existing == name) {
        return Err(NameError::Duplicate);
    }

    Ok(())
}

/// Validates a todo name. Todo names need not be unique.
///
/// # Errors
///
/// Returns [`NameError::Length`] if `name` is not 1-100 characters.
pub fn validate_todo_name(name: &str) -> Result<(), NameError> {
    check_length(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_name_empty_is_length_error() {
        assert_eq!(validate_list_name("", []), Err(NameError::Length));
    }

    #[test]
    fn list_name_too_long_is_length_error() {
        let name = "a".repeat(101);
        assert_eq!(validate_list_name(&name, []), Err(NameError::Length));
    }

    #[test]
    fn list_name_bounds_are_inclusive() {
        assert_eq!(validate_list_name("a", []), Ok(()));
        assert_eq!(validate_list_name(&"a".repeat(100), []), Ok(()));
    }

    #[test]
    fn list_name_duplicate() {
        assert_eq!(
            validate_list_name("Groceries", ["Work", "Groceries"]),
            Err(NameError::Duplicate)
        );
    }

    #[test]
    fn list_name_duplicate_is_case_sensitive() {
        assert_eq!(validate_list_name("groceries", ["Groceries"]), Ok(()));
    }

    #[test]
    fn list_name_not_trimmed() {
        assert_eq!(validate_list_name(" Work", ["Work"]), Ok(()));
    }

    #[test]
    fn length_checked_before_duplicate() {
        assert_eq!(validate_list_name("", [""]), Err(NameError::Length));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 100 two-byte characters
        let name = "é".repeat(100);
        assert_eq!(validate_list_name(&name, []), Ok(()));
        assert_eq!(validate_todo_name(&name), Ok(()));
    }

    #[test]
    fn todo_name_rules() {
        assert_eq!(validate_todo_name(""), Err(NameError::Length));
        assert_eq!(validate_todo_name(&"x".repeat(101)), Err(NameError::Length));
        assert_eq!(validate_todo_name("Buy milk"), Ok(()));
    }
}
