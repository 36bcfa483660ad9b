//! Phone input mask
//!
//! Progressive `+7 (XXX) XXX-XX-XX` formatting for the contact step.
//! Formatting only applies while the user is typing; on deletion the
//! raw value passes through so characters can be removed naturally.

use shared::util::digits_only;

/// Maximum significant digits (country digit + 10-digit number).
const MAX_DIGITS: usize = 11;

/// Format raw phone input against the previous field value length.
///
/// `prev_len` is the length of the field before this input event; a
/// shorter raw value means the user is deleting and the input is
/// returned untouched.
///
/// # Examples
///
/// ```
/// use smoky_loft_lib::utils::phone::format_phone_input;
///
/// assert_eq!(format_phone_input("9991234567", 0), "+7 (999) 123-45-67");
/// assert_eq!(format_phone_input("999", 0), "+7 (999");
/// assert_eq!(format_phone_input("", 0), "");
/// // Deletion passes through unformatted
/// assert_eq!(format_phone_input("+7 (999) 123-45-6", 18), "+7 (999) 123-45-6");
/// ```
pub fn format_phone_input(raw: &str, prev_len: usize) -> String {
    if raw.len() < prev_len {
        return raw.to_string();
    }

    let digits = digits_only(raw);
    if digits.is_empty() {
        return String::new();
    }

    let mut digits: Vec<char> = digits.chars().take(MAX_DIGITS).collect();

    // Leading 7/8 is the trunk prefix, the mask renders it as +7
    let local: &[char] = match digits.first().copied() {
        Some('7') | Some('8') => &digits[1..],
        _ => {
            digits.truncate(MAX_DIGITS - 1);
            &digits[..]
        }
    };

    let mut out = String::from("+7");
    let take = |from: usize, to: usize| local[from..to.min(local.len())].iter().collect::<String>();

    if !local.is_empty() {
        out.push_str(" (");
        out.push_str(&take(0, 3));
    }
    if local.len() > 3 {
        out.push_str(") ");
        out.push_str(&take(3, 6));
    }
    if local.len() > 6 {
        out.push('-');
        out.push_str(&take(6, 8));
    }
    if local.len() > 8 {
        out.push('-');
        out.push_str(&take(8, 10));
    }

    out
}
