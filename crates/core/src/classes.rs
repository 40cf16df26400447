//! Class list composition.

/// Join a fixed base class with an optional caller-supplied class.
///
/// Absent or empty extras add nothing; anything else is appended verbatim.
pub fn class_names(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}
