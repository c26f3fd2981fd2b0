//! Permissive numeric parsing for form fields.

/// Parse a raw form field into an optional number.
///
/// Empty or whitespace-only input means "not filled in" and resolves to
/// `None`, as does anything that fails to parse or is not finite. This is
/// the single coercion point for all form adapters; users routinely leave
/// fields blank mid-edit, so parse failure is never an error.
pub fn parse_optional_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
