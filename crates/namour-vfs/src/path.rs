//! Path resolution helpers.

/// Resolve a user-typed path against the current working directory.
///
/// The result is always absolute and normalized: no `.` or `..` components,
/// no repeated or trailing `/` (except the root itself). `..` at the root is
/// a no-op, so `../../../etc` from `/` is `/etc`. Resolution never fails;
/// whether the path exists is the tree's business.
///
/// - empty input is the cwd
/// - `~` is `home`, and `~/rest` is `rest` under `home`
/// - a leading `/` makes the input absolute, anything else is cwd-relative
pub fn resolve_path(cwd: &str, home: &str, input: &str) -> String {
    if input.is_empty() {
        return cwd.to_string();
    }
    if input == "~" {
        return normalize(home);
    }
    let raw = if let Some(rest) = input.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if input.starts_with('/') {
        input.to_string()
    } else {
        format!("{cwd}/{input}")
    };
    normalize(&raw)
}

/// Collapse `.`, `..`, and empty components of an absolute path.
fn normalize(raw: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for component in raw.split('/') {
        match component {
            "" | "." => {},
            ".." => {
                parts.pop();
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

/// Shorten `cwd` for the prompt: `home` itself becomes `~`, and anything
/// below it becomes `~/...`.
pub fn abbreviate_home(cwd: &str, home: &str) -> String {
    if cwd == home {
        return "~".to_string();
    }
    match cwd.strip_prefix(home) {
        Some(rest) if rest.starts_with('/') && home != "/" => format!("~{rest}"),
        _ => cwd.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: &str = "/home/namour";

    #[test]
    fn empty_input_is_cwd() {
        assert_eq!(resolve_path("/var/log", HOME, ""), "/var/log");
    }

    #[test]
    fn tilde_is_home() {
        assert_eq!(resolve_path("/var/log", HOME, "~"), HOME);
    }

    #[test]
    fn tilde_slash_is_under_home() {
        assert_eq!(
            resolve_path("/", HOME, "~/projects"),
            "/home/namour/projects"
        );
    }

    #[test]
    fn tilde_inside_name_is_literal() {
        assert_eq!(resolve_path("/tmp", HOME, "a~b"), "/tmp/a~b");
    }

    #[test]
    fn relative_joins_cwd() {
        assert_eq!(
            resolve_path(HOME, HOME, "projects"),
            "/home/namour/projects"
        );
    }

    #[test]
    fn relative_from_root() {
        assert_eq!(resolve_path("/", HOME, "var"), "/var");
    }

    #[test]
    fn absolute_ignores_cwd() {
        assert_eq!(resolve_path(HOME, HOME, "/var/log"), "/var/log");
    }

    #[test]
    fn absolute_is_normalized() {
        assert_eq!(resolve_path(HOME, HOME, "/var/./log/../log/"), "/var/log");
    }

    #[test]
    fn dot_is_cwd() {
        assert_eq!(resolve_path(HOME, HOME, "."), HOME);
    }

    #[test]
    fn dotdot_pops() {
        assert_eq!(resolve_path(HOME, HOME, ".."), "/home");
        assert_eq!(resolve_path(HOME, HOME, "../.."), "/");
    }

    #[test]
    fn dotdot_cannot_escape_root() {
        assert_eq!(resolve_path("/", HOME, "../../../etc"), "/etc");
        assert_eq!(resolve_path("/", HOME, "/../.."), "/");
    }

    #[test]
    fn repeated_slashes_collapse() {
        assert_eq!(resolve_path("/", HOME, "//var///log//"), "/var/log");
    }

    #[test]
    fn abbreviate_home_cases() {
        assert_eq!(abbreviate_home(HOME, HOME), "~");
        assert_eq!(abbreviate_home("/home/namour/projects", HOME), "~/projects");
        assert_eq!(abbreviate_home("/home/namourx", HOME), "/home/namourx");
        assert_eq!(abbreviate_home("/var/log", HOME), "/var/log");
        assert_eq!(abbreviate_home("/var", "/"), "/var");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn cwd_strategy() -> impl Strategy<Value = String> {
            proptest::collection::vec("[a-z]{1,6}", 0..4)
                .prop_map(|segs| format!("/{}", segs.join("/")))
        }

        proptest! {
            #[test]
            fn resolve_is_idempotent(
                cwd in cwd_strategy(),
                input in "[a-z./~]{0,30}",
            ) {
                let once = resolve_path(&cwd, HOME, &input);
                let twice = resolve_path(&cwd, HOME, &once);
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn resolve_is_absolute_and_normal(
                cwd in cwd_strategy(),
                input in "[a-z./]{1,30}",
            ) {
                let out = resolve_path(&cwd, HOME, &input);
                prop_assert!(out.starts_with('/'));
                prop_assert!(!out.contains("//"), "double slash in {}", out);
                if out != "/" {
                    prop_assert!(!out.ends_with('/'), "trailing slash in {}", out);
                }
                for seg in out.split('/') {
                    prop_assert!(seg != "." && seg != "..", "dot segment in {}", out);
                }
            }

            #[test]
            fn excess_dotdot_stays_at_root(depth in 1usize..12, name in "[a-z]{1,8}") {
                let input = format!("{}{name}", "../".repeat(depth));
                prop_assert_eq!(resolve_path("/", HOME, &input), format!("/{name}"));
            }
        }
    }
}
