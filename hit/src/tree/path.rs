//! Hit path helpers.
//!
//! Hit paths are slash-delimited chains of section names. The helpers here
//! canonicalize user-supplied paths by removing empty and `.` segments so
//! that lookups and flat-map keys agree on a single spelling.

/// Return the canonical, normalized version of the given hit path.
///
/// Removes consecutive slashes, leading `./`, and `.` segments. The empty
/// path (the root) normalizes to itself.
///
/// # Examples
///
/// ```
/// use hit::tree::path_norm;
///
/// assert_eq!(path_norm("./a//b/./c"), "a/b/c");
/// assert_eq!(path_norm(""), "");
/// assert_eq!(path_norm("a/"), "a");
/// ```
#[must_use]
pub fn path_norm(path: &str) -> String {
    path.split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Join the given hit (relative) paths into a single normalized hit path.
///
/// # Examples
///
/// ```
/// use hit::tree::path_join;
///
/// assert_eq!(path_join(&["a", "b/c"]), "a/b/c");
/// assert_eq!(path_join(&["", "x"]), "x");
/// ```
#[must_use]
pub fn path_join(paths: &[&str]) -> String {
    path_norm(&paths.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_norm_basic() {
        assert_eq!(path_norm("a/b/c"), "a/b/c");
        assert_eq!(path_norm("./a"), "a");
        assert_eq!(path_norm("a//b"), "a/b");
        assert_eq!(path_norm("/a/b/"), "a/b");
    }

    #[test]
    fn test_path_norm_root() {
        assert_eq!(path_norm(""), "");
        assert_eq!(path_norm("."), "");
        assert_eq!(path_norm("./"), "");
    }

    #[test]
    fn test_path_join() {
        assert_eq!(path_join(&["a", "b"]), "a/b");
        assert_eq!(path_join(&["", ""]), "");
        assert_eq!(path_join(&["a/", "/b"]), "a/b");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec("[a-z0-9_.]{0,6}", 0..=6).prop_map(|parts| parts.join("/"))
        }

        proptest! {
            /// Normalization is idempotent.
            #[test]
            fn norm_idempotent(p in path_strategy()) {
                let once = path_norm(&p);
                prop_assert_eq!(path_norm(&once), once);
            }

            /// Normalized paths contain no empty or `.` segments.
            #[test]
            fn norm_no_degenerate_segments(p in path_strategy()) {
                let normed = path_norm(&p);
                if !normed.is_empty() {
                    for seg in normed.split('/') {
                        prop_assert!(!seg.is_empty());
                        prop_assert_ne!(seg, ".");
                    }
                }
            }

            /// Joining then normalizing equals normalizing the joined text.
            #[test]
            fn join_matches_norm(a in path_strategy(), b in path_strategy()) {
                prop_assert_eq!(
                    path_join(&[a.as_str(), b.as_str()]),
                    path_norm(&format!("{a}/{b}"))
                );
            }
        }
    }
}
