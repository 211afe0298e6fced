//! Selection of the catalog versions that are looked up
//!
//! Versions are compared by their leading float, the way the documentation
//! build has always compared them. A two-digit minor such as `1.10` therefore
//! ranks as `1.1`; downstream data depends on that ranking, so it is kept.

/// Removes one leading marker character such as the `v` in `v2.7`
pub fn strip_marker(tag: &str) -> &str {
    match tag.chars().next() {
        Some(c) if !c.is_ascii_digit() => &tag[c.len_utf8()..],
        _ => tag,
    }
}

/// Parses the longest `<digits>[.<digits>]` prefix of a version as a float
///
/// Examples:
/// - "1.8" -> 1.8
/// - "2.7.1" -> 2.7
/// - "1.10" -> 1.1
/// - "nightly" -> None
pub fn leading_float(version: &str) -> Option<f64> {
    let integer_len = version.bytes().take_while(u8::is_ascii_digit).count();
    if integer_len == 0 {
        return None;
    }

    let rest = &version[integer_len..];
    let fraction_len = match rest.strip_prefix('.') {
        Some(fraction) => {
            let digits = fraction.bytes().take_while(u8::is_ascii_digit).count();
            if digits > 0 { digits + 1 } else { 0 }
        }
        None => 0,
    };

    version[..integer_len + fraction_len].parse().ok()
}

/// Returns the stripped versions at or above `floor`, newest catalog entry first
pub fn eligible_versions(tags: &[String], floor: f64) -> Vec<String> {
    let mut versions: Vec<String> = tags
        .iter()
        .map(|tag| strip_marker(tag))
        .filter(|version| leading_float(version).is_some_and(|value| value >= floor))
        .map(str::to_string)
        .collect();
    versions.reverse();
    versions
}
