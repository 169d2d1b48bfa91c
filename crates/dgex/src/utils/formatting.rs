//! Formatting utilities for display values.

/// Formats an integer with a space between thousands groups.
///
/// # Examples
///
/// ```ignore
/// use dgex::utils::formatting::format_grouped;
///
/// assert_eq!(format_grouped(13534), "13 534");
/// assert_eq!(format_grouped(72), "72");
/// ```
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
