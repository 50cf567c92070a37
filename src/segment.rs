use smallvec::SmallVec;

pub(crate) const COLON: char = ':';
pub(crate) const SLASH: char = '/';

pub(crate) type Parts<'a> = SmallVec<[&'a str; 8]>;

/// Returns the parameter name if `segment` is a `:name` marker.
#[inline]
pub fn param_name(segment: &str) -> Option<&str> {
    if segment.starts_with(COLON) {
        Some(&segment[1..])
    } else {
        None
    }
}

#[inline]
pub fn is_param(segment: &str) -> bool {
    segment.starts_with(COLON)
}

/// Splits a path on `/` after stripping one leading slash.
///
/// An empty path yields a single empty segment, so `""` and `"/"` both
/// describe the root.
pub(crate) fn split_pattern(path: &str) -> Parts<'_> {
    trim_first_slash(path).split(SLASH).collect()
}

/// Splits a location path on `/` as-is.
pub(crate) fn split_location(path: &str) -> Parts<'_> {
    path.split(SLASH).collect()
}

#[inline(always)]
pub(crate) fn trim_first_slash(s: &str) -> &str {
    if s.starts_with(SLASH) {
        &s[1..]
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_splitting() {
        assert_eq!(&*split_pattern("/users/:id"), &["users", ":id"]);
        assert_eq!(&*split_pattern("users/:id"), &["users", ":id"]);
        assert_eq!(&*split_pattern("//users"), &["", "users"]);
        assert_eq!(&*split_pattern(""), &[""]);
        assert_eq!(&*split_pattern("/"), &[""]);
    }

    #[test]
    fn params() {
        assert_eq!(param_name(":id"), Some("id"));
        assert_eq!(param_name(":"), Some(""));
        assert_eq!(param_name("id"), None);
        assert!(is_param(":x"));
        assert!(!is_param("x:"));
    }
}
