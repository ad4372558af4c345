//! Email syntax check and the best-effort duplicate scan.

use crate::domain::customer::Customer;

/// Syntactic email check: a non-empty local part, a single `@`, and a domain
/// containing a dot that is neither its first nor its last character.  No
/// whitespace anywhere.
///
/// This is deliberately shallow — `"a@b.com"` passes, `"a@b"` does not —
/// and makes no attempt at full RFC 5322 parsing.  The server validates
/// again on its side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The dot may not open or close the domain.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

/// Case-sensitive linear scan of the loaded list for an exact email match.
///
/// Best effort only: the list is a snapshot, so a record created elsewhere
/// since the last reload is invisible here.  The server remains the final
/// authority on uniqueness.
pub fn email_exists(customers: &[Customer], email: &str) -> bool {
    customers.iter().any(|customer| customer.email == email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str, email: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: "Maria Silva".to_string(),
            telephone: "(11) 98765-4321".to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_plain_addresses_are_valid() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("maria.silva@empresa.com.br"));
    }

    #[test]
    fn test_missing_parts_are_invalid() {
        assert!(!is_valid_email("a@b")); // no dot in the domain
        assert!(!is_valid_email("a@.com")); // dot opens the domain
        assert!(!is_valid_email("a@b.")); // dot closes the domain
        assert!(!is_valid_email("@b.com")); // empty local part
        assert!(!is_valid_email("ab.com")); // no @ at all
        assert!(!is_valid_email("a@b@c.com")); // two @
        assert!(!is_valid_email("a b@c.com")); // whitespace
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_duplicate_scan_is_exact_and_case_sensitive() {
        let list = vec![customer("1", "ana@mail.com"), customer("2", "bia@mail.com")];
        assert!(email_exists(&list, "ana@mail.com"));
        assert!(!email_exists(&list, "Ana@mail.com"));
        assert!(!email_exists(&list, "carla@mail.com"));
        assert!(!email_exists(&[], "ana@mail.com"));
    }
}
