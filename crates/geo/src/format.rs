//! Display formatting for measured magnitudes.

/// Formats a magnitude the way the measurement popups display it:
/// rounded half-up to 2 decimal places, integer part grouped in
/// thousands, trailing zero decimals dropped.
///
/// # Example
/// ```
/// use basinview_geo::format_magnitude;
///
/// assert_eq!(format_magnitude(1234567.891), "1,234,567.89");
/// assert_eq!(format_magnitude(1234.5), "1,234.5");
/// assert_eq!(format_magnitude(1000.0), "1,000");
/// ```
pub fn format_magnitude(value: f64) -> String {
    // Round half-up on the value itself before any grouping.
    let scaled = (value * 100.0 + 0.5).floor() as i64;
    let negative = scaled < 0;
    let scaled = scaled.abs();

    let int_part = scaled / 100;
    let frac = scaled % 100;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));

    if frac != 0 {
        if frac % 10 == 0 {
            out.push_str(&format!(".{}", frac / 10));
        } else {
            out.push_str(&format!(".{frac:02}"));
        }
    }
    out
}

/// Groups a non-negative integer into comma-separated thousands.
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
