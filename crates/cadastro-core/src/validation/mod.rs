//! Pure validation and formatting rules.
//!
//! Everything in this module is a side-effect-free function over plain
//! strings and slices.  All of these rules run *before* any network call;
//! a submission that fails here never reaches the API client.
//!
//! | Rule                       | Where it is applied                     |
//! |----------------------------|-----------------------------------------|
//! | [`phone::format_phone_number`] | every keystroke in a phone field    |
//! | [`phone::is_valid_phone`]  | submit time (create and update forms)   |
//! | [`is_valid_name`]          | submit time (create and update forms)   |
//! | [`email::is_valid_email`]  | submit time, form and store             |
//! | [`email::email_exists`]    | store, against the loaded customer list |

pub mod email;
pub mod phone;

/// Name rule: ASCII letters and whitespace only, at least one character.
///
/// Mirrors the form's letters-only pattern.  Accented characters are
/// rejected; the per-field message tells the user to use letters only.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}
