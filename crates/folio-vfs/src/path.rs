//! Absolute path helpers.
//!
//! Every path stored in the VFS is absolute, `/`-rooted and normalized: no
//! empty, `.` or `..` segments and no trailing slash except for the root.

/// Normalize a path, folding `.` and `..` left to right.
///
/// `..` above the root is dropped silently, so the result never escapes `/`.
pub fn normalize(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for component in path.split('/') {
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

/// Resolve user input against a working directory.
///
/// `~` and `~/...` are rooted at `/`; absolute input ignores `cwd`.
pub fn resolve(cwd: &str, input: &str) -> String {
    if input == "~" {
        return "/".to_string();
    }
    if let Some(rest) = input.strip_prefix("~/") {
        return normalize(rest);
    }
    if input.starts_with('/') {
        normalize(input)
    } else {
        normalize(&format!("{cwd}/{input}"))
    }
}

/// Parent of a normalized path. The root is its own parent.
pub fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => "/",
        Some(i) => &path[..i],
    }
}

/// Final segment of a normalized path; empty for the root.
pub fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

/// Join a normalized directory and a child name.
pub fn join(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// Prefix shared by every descendant of `dir`.
pub(crate) fn child_prefix(dir: &str) -> String {
    if dir == "/" {
        "/".to_string()
    } else {
        format!("{dir}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_dot_dot() {
        assert_eq!(normalize("/a/b/../c"), "/a/c");
        assert_eq!(normalize("/a/./b/"), "/a/b");
        assert_eq!(normalize("//a//b"), "/a/b");
    }

    #[test]
    fn normalize_clamps_at_root() {
        assert_eq!(normalize("/../.."), "/");
        assert_eq!(normalize("/a/../../../b"), "/b");
        assert_eq!(normalize(""), "/");
    }

    #[test]
    fn resolve_relative() {
        assert_eq!(resolve("/", "blog"), "/blog");
        assert_eq!(resolve("/blog", "posts"), "/blog/posts");
        assert_eq!(resolve("/a/b/c", "../../d"), "/a/d");
        assert_eq!(resolve("/blog", "."), "/blog");
        assert_eq!(resolve("/blog", ".."), "/");
    }

    #[test]
    fn resolve_absolute_ignores_cwd() {
        assert_eq!(resolve("/somewhere", "/etc/hosts"), "/etc/hosts");
    }

    #[test]
    fn resolve_tilde_is_root() {
        assert_eq!(resolve("/anywhere", "~"), "/");
        assert_eq!(resolve("/anywhere", "~/blog"), "/blog");
    }

    #[test]
    fn parent_and_file_name() {
        assert_eq!(parent("/home/user"), "/home");
        assert_eq!(parent("/home"), "/");
        assert_eq!(parent("/"), "/");
        assert_eq!(file_name("/home/user"), "user");
        assert_eq!(file_name("/"), "");
    }

    #[test]
    fn join_handles_root() {
        assert_eq!(join("/", "etc"), "/etc");
        assert_eq!(join("/etc", "hosts"), "/etc/hosts");
    }

    mod prop {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn normalize_is_idempotent(path in "[/a-z0-9_.]{0,50}") {
                let once = normalize(&path);
                let twice = normalize(&once);
                prop_assert_eq!(&once, &twice, "normalize must be idempotent");
            }

            #[test]
            fn normalize_is_rooted_and_clean(path in "[/a-z.]{0,50}") {
                let normed = normalize(&path);
                prop_assert!(normed.starts_with('/'));
                prop_assert!(!normed.contains("//"));
                prop_assert!(normed == "/" || !normed.ends_with('/'));
                prop_assert!(!normed.split('/').any(|s| s == "." || s == ".."));
            }

            #[test]
            fn join_then_parent_round_trips(
                segments in proptest::collection::vec("[a-z]{1,6}", 0..5),
                name in "[a-z]{1,6}",
            ) {
                let dir = normalize(&segments.join("/"));
                let child = join(&dir, &name);
                prop_assert_eq!(parent(&child), dir.as_str());
                prop_assert_eq!(file_name(&child), name.as_str());
            }
        }
    }
}
