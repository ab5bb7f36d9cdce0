use crate::compat::{String, ToString};
use crate::url::Url;

/// Relative reference from the `base` segments to the `target` segments.
///
/// Both are compared directory by directory: the last segment of each is the
/// resource itself. One `../` is emitted for every base directory that is not
/// shared with the target, then the rest of the target follows.
pub fn relative_path<B: AsRef<str>, T: AsRef<str>>(base: &[B], target: &[T]) -> String {
    let base_dirs = base.split_last().map_or(&[][..], |(_, dirs)| dirs);
    let (target_dirs, target_file) = match target.split_last() {
        Some((file, dirs)) => (dirs, file.as_ref()),
        None => (&[][..], ""),
    };

    let common = base_dirs
        .iter()
        .zip(target_dirs)
        .take_while(|(b, t)| b.as_ref() == t.as_ref())
        .count();
    let ups = base_dirs.len() - common;

    let mut remainder = String::new();
    for segment in &target_dirs[common..] {
        remainder.push_str(segment.as_ref());
        remainder.push('/');
    }
    remainder.push_str(target_file);

    let mut path = if base.is_empty() {
        // Nothing to climb out of; stay in the current directory
        String::from("./")
    } else if ups == 0 {
        if remainder.is_empty() {
            return String::from(".");
        }
        String::from("./")
    } else {
        "../".repeat(ups)
    };
    path.push_str(&remainder);

    // Some containers mishandle a path ending in a bare ".."
    if path == ".." || path.ends_with("/..") {
        path.push('/');
    }
    path
}

/// Append the query string and fragment of `url` to a rendered path
pub fn push_query_and_fragment(out: &mut String, url: &Url) {
    for (i, param) in url.query_parameters().iter().enumerate() {
        out.push(if i == 0 { '?' } else { '&' });
        out.push_str(&param.to_string());
    }
    if let Some(fragment) = url.fragment() {
        out.push('#');
        out.push_str(fragment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::Vec;

    fn split(path: &str) -> Vec<&str> {
        if path.is_empty() {
            Vec::new()
        } else {
            path.split('/').collect()
        }
    }

    fn relative(base: &str, target: &str) -> String {
        relative_path(&split(base), &split(target))
    }

    #[test]
    fn test_sibling() {
        assert_eq!(relative("a/b", "a/c"), "./c");
        assert_eq!(relative("some/path", "some/path"), "./path");
        assert_eq!(relative("a", "b"), "./b");
    }

    #[test]
    fn test_climb() {
        assert_eq!(relative("a/b/q/d/e", "a/q/c/d/e"), "../../../q/c/d/e");
        assert_eq!(
            relative("MyTestPage/indexed1/indexed2/indexed3", "MyTestPage"),
            "../../../MyTestPage"
        );
        assert_eq!(relative("private/AdminPage", "signIn"), "../signIn");
    }

    #[test]
    fn test_descend() {
        assert_eq!(
            relative("en/first-test-page", "en/first-test-page/indexed1/indexed2/indexed3"),
            "./first-test-page/indexed1/indexed2/indexed3"
        );
    }

    #[test]
    fn test_current_directory() {
        assert_eq!(relative("a", ""), ".");
        assert_eq!(relative("a/b", "a/"), ".");
        assert_eq!(relative("", ""), "./");
        assert_eq!(relative("", "x/y"), "./x/y");
    }

    #[test]
    fn test_up_count_matches_unshared_directories() {
        let ups = |base: &str, target: &str| relative(base, target).matches("../").count();
        assert_eq!(ups("a/b/c/d", "a/x"), 2);
        assert_eq!(ups("a/b/c/d", "a/b/c/x"), 0);
        assert_eq!(ups("x/y/z", "a/b/c"), 2);
    }

    #[test]
    fn test_never_ends_in_bare_dot_dot() {
        assert_eq!(relative("foo/bar", ""), "../");
        assert_eq!(relative("a", ".."), "./../");
        assert_eq!(relative("a/b", "a/.."), "./../");
    }
}
