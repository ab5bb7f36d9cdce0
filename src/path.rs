//! Segment-list path algebra: dot-segment removal and base/reference merge.
//!
//! Paths are lists of segments split on `/`. An empty first segment is the
//! root marker (the path starts with `/`), an empty last segment a trailing `/`.

use crate::compat::{String, ToOwned, Vec};

/// True when the sequence starts with the root marker
pub fn is_rooted<S: AsRef<str>>(segments: &[S]) -> bool {
    segments.first().is_some_and(|s| s.as_ref().is_empty())
}

/// Segments after a leading root marker, if any
pub fn without_root_marker<S: AsRef<str>>(segments: &[S]) -> &[S] {
    match segments.split_first() {
        Some((first, rest)) if first.as_ref().is_empty() => rest,
        _ => segments,
    }
}

/// Remove `.` and `..` segments (RFC 3986, section 5.2.4, on segment lists).
///
/// `..` never removes the root marker, so it is dropped once the root is
/// reached. A trailing dot segment leaves a trailing `/` behind.
pub fn remove_dot_segments<S: AsRef<str>>(segments: &[S]) -> Vec<String> {
    let rooted = is_rooted(segments);
    let (floor, rest) = if rooted {
        (1, &segments[1..])
    } else {
        (0, segments)
    };

    let mut output: Vec<String> = Vec::with_capacity(segments.len());
    if rooted {
        output.push(String::new());
    }

    for (i, segment) in rest.iter().enumerate() {
        let segment = segment.as_ref();
        let is_last = i + 1 == rest.len();
        match segment {
            "." => {}
            ".." => {
                if output.len() > floor {
                    output.pop();
                }
            }
            _ => {
                output.push(segment.to_owned());
                continue;
            }
        }
        if is_last {
            output.push(String::new());
        }
    }

    output
}

/// Merge a reference path onto the directory of a base path, then remove
/// dot segments. A rooted reference replaces the base path entirely.
pub fn merge<B: AsRef<str>, R: AsRef<str>>(base: &[B], reference: &[R]) -> Vec<String> {
    if is_rooted(reference) {
        return remove_dot_segments(reference);
    }

    let directory = match base.split_last() {
        Some((_, directory)) if !directory.is_empty() => directory,
        _ => &[],
    };

    let mut merged: Vec<&str> = Vec::with_capacity(directory.len() + reference.len() + 1);
    if directory.is_empty() {
        merged.push("");
    }
    merged.extend(directory.iter().map(AsRef::as_ref));
    merged.extend(reference.iter().map(AsRef::as_ref));
    remove_dot_segments(&merged)
}

/// Serialize a rooted path, rendering a bare root as `/`
pub fn rooted_path<S: AsRef<str>>(segments: &[S]) -> String {
    if segments.len() <= 1 {
        return String::from("/");
    }
    join(segments)
}

/// Join segments with `/`
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
    let mut path = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            path.push('/');
        }
        path.push_str(segment.as_ref());
    }
    path
}
