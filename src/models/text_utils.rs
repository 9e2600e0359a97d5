//! Text helpers for display formatting.

/// Extract the first name from a full name.
///
/// Returns the token before the first space of the trimmed input, the
/// whole trimmed string when there is no space, and an empty string for
/// blank input. Used by the users panel, which only has room for a
/// short label per row.
pub fn first_name(full_name: &str) -> &str {
    let trimmed = full_name.trim();
    match trimmed.split_once(' ') {
        Some((first, _)) => first,
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_two_tokens() {
        assert_eq!(first_name("John Doe"), "John");
    }

    #[test]
    fn test_first_name_three_tokens() {
        assert_eq!(first_name("Jane Smith Johnson"), "Jane");
    }

    #[test]
    fn test_first_name_single_token() {
        assert_eq!(first_name("John"), "John");
    }

    #[test]
    fn test_first_name_empty() {
        assert_eq!(first_name(""), "");
    }

    #[test]
    fn test_first_name_whitespace_only() {
        assert_eq!(first_name("   "), "");
    }

    #[test]
    fn test_first_name_leading_whitespace() {
        assert_eq!(first_name("  Ervin Howell"), "Ervin");
    }
}
