// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key segment rules and the key tokenizer.
//!
//! A key is a dotted path such as `multi_backend.backend1.storage_backend`. Each
//! piece between unescaped dots is a *segment*. A segment whose first character is
//! the [`SIGIL`] is a variable placeholder in a template key.
//!
//! Concrete keys may carry a literal dot inside a segment by escaping it as `\.`.
//! Only [`tokenize`] understands that escape; [`split_plain`] splits on every dot
//! and is what template keys are split with.

/// The character that marks a segment as a variable placeholder.
pub const SIGIL: char = '$';

/// The segment delimiter.
pub const DELIMITER: char = '.';

/// The escape character. Only recognised directly in front of [`DELIMITER`].
pub const ESCAPE: char = '\\';

/// Returns `true` if the segment is a variable placeholder.
///
/// # Examples
///
/// ```
/// use cfgvars::domain::segment::is_variable;
///
/// assert!(is_variable("$name"));
/// assert!(is_variable("$"));
/// assert!(!is_variable("name"));
/// assert!(!is_variable(""));
/// ```
pub fn is_variable(segment: &str) -> bool {
    segment.starts_with(SIGIL)
}

/// Splits a key into segments, honouring the `\.` escape.
///
/// An escaped dot becomes a literal `.` inside the current segment. A backslash
/// that is not followed by a dot, including a trailing one, is kept as an
/// ordinary character. A trailing dot yields a trailing empty segment and the
/// empty string yields a single empty segment.
///
/// # Examples
///
/// ```
/// use cfgvars::domain::segment::tokenize;
///
/// assert_eq!(tokenize("a.b\\.c.d"), vec!["a", "b.c", "d"]);
/// assert_eq!(tokenize("a."), vec!["a", ""]);
/// assert_eq!(tokenize(""), vec![""]);
/// ```
pub fn tokenize(key: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = key.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            ESCAPE if chars.peek() == Some(&DELIMITER) => {
                chars.next();
                current.push(DELIMITER);
            }
            DELIMITER => segments.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    segments.push(current);
    segments
}

/// Splits a key on every dot, ignoring escapes.
///
/// Template keys are split this way: placeholders and the literal segments around
/// them are written without escapes.
///
/// # Examples
///
/// ```
/// use cfgvars::domain::segment::split_plain;
///
/// assert_eq!(split_plain("a.$b.c"), vec!["a", "$b", "c"]);
/// assert_eq!(split_plain("a\\.b"), vec!["a\\", "b"]);
/// ```
pub fn split_plain(key: &str) -> Vec<&str> {
    key.split(DELIMITER).collect()
}

/// Joins segments with the delimiter as they are, without escaping.
pub(crate) fn join_plain<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut key = String::new();
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            key.push(DELIMITER);
        }
        key.push_str(segment.as_ref());
    }
    key
}

/// Joins segments into a key, escaping dots inside segments.
///
/// This is the inverse of [`tokenize`] for segments that contain no backslash.
///
/// # Examples
///
/// ```
/// use cfgvars::domain::segment::{join, tokenize};
///
/// let key = join(["multi_backend", "backend.3", "storage_backend"]);
/// assert_eq!(key, "multi_backend.backend\\.3.storage_backend");
/// assert_eq!(tokenize(&key), vec!["multi_backend", "backend.3", "storage_backend"]);
/// ```
pub fn join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut key = String::new();
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            key.push(DELIMITER);
        }
        for ch in segment.as_ref().chars() {
            if ch == DELIMITER {
                key.push(ESCAPE);
            }
            key.push(ch);
        }
    }
    key
}
