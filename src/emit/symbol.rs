//! Constant names for message keys.

/// Convert a dotted, camel-cased key into an upper snake case constant name.
///
/// Single left-to-right pass remembering only whether the previous
/// character was an ASCII lowercase letter:
///
/// - `.` becomes `_`
/// - an uppercase letter right after a lowercase one gets a `_` in front
/// - lowercase letters are upper-cased
/// - anything else is copied unchanged
///
/// ```
/// use resgen::emit::symbol::to_constant_name;
///
/// assert_eq!(to_constant_name("error.notFound"), "ERROR_NOT_FOUND");
/// assert_eq!(to_constant_name("error.404Code"), "ERROR_404CODE");
/// ```
pub fn to_constant_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + 4);
    let mut prev_is_lower = false;

    for c in key.chars() {
        if c == '.' {
            name.push('_');
            prev_is_lower = false;
        } else if c.is_ascii_uppercase() {
            if prev_is_lower {
                name.push('_');
            }
            name.push(c);
            prev_is_lower = false;
        } else if c.is_ascii_lowercase() {
            name.push(c.to_ascii_uppercase());
            prev_is_lower = true;
        } else {
            name.push(c);
            prev_is_lower = false;
        }
    }

    name
}
