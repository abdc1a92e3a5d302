//! Text helpers shared by renderers.

use alloc::string::String;

/// Marker appended to names cut short by [`trim_name`].
pub const ELLIPSIS: &str = "...";

/// Fits `name` into `max_width` characters.
///
/// A name that fits is returned unchanged. A longer one is cut and ends in
/// [`ELLIPSIS`]; if even the marker does not fit, the result is empty.
///
/// # Example
///
/// ```
/// use cartamayor::trim_name;
///
/// assert_eq!(trim_name("Ana", 10), "Ana");
/// assert_eq!(trim_name("Bartholomew", 8), "Barth...");
/// assert_eq!(trim_name("Bartholomew", 2), "");
/// ```
#[must_use]
pub fn trim_name(name: &str, max_width: usize) -> String {
    let width = ELLIPSIS.chars().count();
    if name.chars().count() <= max_width {
        return String::from(name);
    }
    if max_width < width {
        return String::new();
    }

    let mut trimmed: String = name.chars().take(max_width - width).collect();
    trimmed.push_str(ELLIPSIS);
    trimmed
}
