//! Brazilian mobile phone mask and length rule.
//!
//! The target shape is `(XX) XXXXX-XXXX`: a 2-digit area code and a 9-digit
//! mobile number.  Formatting is *progressive*: it is re-applied on every
//! keystroke over whatever digits are present, so partial input yields a
//! partial mask and no padding is ever inserted.
//!
//! # Mask rules (for beginners)
//!
//! Working over the digits only (everything else is stripped first):
//!
//! 1. With fewer than three digits, nothing happens — typing `11` shows `11`.
//! 2. From the third digit on, the first two become the area code:
//!    `119` → `(11) 9`.
//! 3. Once at least five digits follow the area code, a hyphen is placed
//!    before the last four: `1198765432` → `(11) 8765-5432` style splits,
//!    and the full 11 digits settle into `(11) 98765-4321`.
//!
//! Because the function starts by stripping non-digits, feeding it its own
//! output reproduces the same string — editing in the middle of a masked
//! field cannot corrupt the mask.

/// Returns only the ASCII digits of `input`, in order.
pub fn phone_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Applies the progressive `(XX) XXXXX-XXXX` mask to `input`.
///
/// Accepts anything — raw digits, an already-masked value, or a mid-edit
/// mixture — and produces the mask for the digit sequence it contains.
pub fn format_phone_number(input: &str) -> String {
    let digits = phone_digits(input);

    // The area code only closes once a third digit exists.
    if digits.len() < 3 {
        return digits;
    }
    let (area, rest) = digits.split_at(2);

    // The hyphen goes before the last four digits, and only once there is
    // at least one digit to put in front of it.
    if rest.len() >= 5 {
        let split = rest.len() - 4;
        format!("({area}) {}-{}", &rest[..split], &rest[split..])
    } else {
        format!("({area}) {rest}")
    }
}

/// Submit-time phone rule: exactly 11 digits (2-digit area code plus the
/// 9-digit mobile number).  Applied to the masked input as typed.
pub fn is_valid_phone(input: &str) -> bool {
    phone_digits(input).len() == 11
}
