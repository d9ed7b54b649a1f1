//! Joining the configured base URL with request paths.

/// Join `base` and `path` with exactly one `/` between them, however either
/// side is terminated.
pub fn build_url(base: &str, path: &str) -> String {
    match (base.ends_with('/'), path.starts_with('/')) {
        (true, true) => format!("{}{path}", &base[..base.len() - 1]),
        (false, false) => format!("{base}/{path}"),
        _ => format!("{base}{path}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_placement_does_not_matter() {
        const EXPECTED: &str = "http://localhost:8080/v1/foo";
        for base in ["http://localhost:8080/v1", "http://localhost:8080/v1/"] {
            for path in ["foo", "/foo"] {
                assert_eq!(build_url(base, path), EXPECTED, "base={base} path={path}");
            }
        }
    }

    #[test]
    fn query_strings_pass_through() {
        assert_eq!(
            build_url("http://h/v1/", "/organisation/accounts/abc?version=2"),
            "http://h/v1/organisation/accounts/abc?version=2"
        );
    }
}
