//! Field paths: dotted and bracketed strings such as `a.b[0].c`.

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// One step of a [`Path`].
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Segment {
    /// A map key, or an out-of-band property when applied to a list.
    Key(String),
    /// A list position. Against a map it addresses the key with the same
    /// decimal text.
    Index(usize),
}

impl Segment {
    /// Build a segment from unquoted text, recognising canonical integers.
    pub fn from_text(text: &str) -> Self {
        match parse_index(text) {
            Some(index) => Segment::Index(index),
            None => Segment::Key(text.to_string()),
        }
    }

    /// The list index, if this is an index segment.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Index(index) => Some(*index),
            Segment::Key(_) => None,
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }

    /// The text used when this segment addresses a map entry.
    pub fn to_key(&self) -> Cow<'_, str> {
        match self {
            Segment::Key(key) => Cow::Borrowed(key),
            Segment::Index(index) => Cow::Owned(index.to_string()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{}", key),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

/// Largest list index plus one; larger numbers address keys instead.
pub const MAX_INDEX: usize = 4_294_967_295;

/// Unsigned base-10 integers below [`MAX_INDEX`]. Leading zeros are
/// allowed (`007` is index 7); signs are not.
fn parse_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<usize>().ok().filter(|index| *index < MAX_INDEX)
}

/// A parsed field path.
///
/// Parsing never fails. The grammar is `segment(.segment | [index])*`:
///
/// - `.` separates named segments; `a..b` yields an empty-string key.
/// - `[digits]` is a list index when the number is below [`MAX_INDEX`];
///   leading zeros are ignored.
/// - Any other bracket content is a literal key, so `a[b]` addresses the
///   same location as `a.b`.
/// - Quoted bracket content (`a["x.y"]`, `a['x']`) is always a key, with `\`
///   escaping the next character.
/// - A dotted segment that is an index by the same rule (`items.0`) is an
///   index.
///
/// # Examples
///
/// ```rust
/// use structedit_core::{Path, Segment};
///
/// let path = Path::parse("a.b[2].c");
/// assert_eq!(path.len(), 4);
/// assert_eq!(path[2], Segment::Index(2));
///
/// // Non-numeric bracket content is a nested key, not an index.
/// assert_eq!(Path::parse("a[b]"), Path::parse("a.b"));
/// ```
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    pub segments: Vec<Segment>,
}

impl Path {
    /// The root path.
    pub fn root() -> Self {
        Path::default()
    }

    /// Parse a path string.
    pub fn parse(s: &str) -> Self {
        let mut segments = Vec::new();
        if s.is_empty() {
            return Path { segments };
        }

        let mut chars = s.chars().peekable();
        let mut name = String::new();
        // Set after `]` so that `a[0].b` does not produce an empty key.
        let mut after_bracket = false;

        while let Some(c) = chars.next() {
            match c {
                '.' => {
                    if !(after_bracket && name.is_empty()) {
                        segments.push(Segment::from_text(&name));
                    }
                    name.clear();
                    after_bracket = false;
                }
                '[' => {
                    if !name.is_empty() {
                        segments.push(Segment::from_text(&name));
                        name.clear();
                    }
                    let mut ahead = chars.clone();
                    match read_bracket(&mut ahead) {
                        Some(segment) => {
                            chars = ahead;
                            segments.push(segment);
                            after_bracket = true;
                        }
                        None => {
                            // Unterminated bracket: keep the rest as literal text.
                            name.push('[');
                            name.extend(chars.by_ref());
                            after_bracket = false;
                        }
                    }
                }
                _ => {
                    name.push(c);
                    after_bracket = false;
                }
            }
        }

        if !(after_bracket && name.is_empty()) {
            segments.push(Segment::from_text(&name));
        }

        Path { segments }
    }

    /// Check if this is the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// The final segment, if any.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// The path without its final segment. The root is its own parent.
    #[must_use]
    pub fn parent(&self) -> Path {
        let end = self.segments.len().saturating_sub(1);
        Path {
            segments: self.segments[..end].to_vec(),
        }
    }

    /// Append one segment.
    #[must_use]
    pub fn child(&self, segment: impl Into<Segment>) -> Path {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Path { segments }
    }

    /// Join this path with another.
    #[must_use]
    pub fn join(&self, other: &Path) -> Path {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Path { segments }
    }

    /// Check if this path has the given prefix.
    pub fn has_prefix(&self, prefix: &Path) -> bool {
        prefix.segments.len() <= self.segments.len()
            && prefix.segments == self.segments[..prefix.segments.len()]
    }
}

/// Read the inside of `[...]`, consuming the closing bracket.
///
/// Returns `None` when the bracket is never closed.
fn read_bracket(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<Segment> {
    let quote = match chars.peek() {
        Some(&q @ ('"' | '\'')) => {
            chars.next();
            Some(q)
        }
        _ => None,
    };

    let mut text = String::new();
    match quote {
        Some(q) => {
            loop {
                match chars.next()? {
                    '\\' => text.push(chars.next()?),
                    c if c == q => break,
                    c => text.push(c),
                }
            }
            if chars.next()? != ']' {
                return None;
            }
            Some(Segment::Key(text))
        }
        None => {
            loop {
                match chars.next()? {
                    ']' => break,
                    c => text.push(c),
                }
            }
            Some(Segment::from_text(&text))
        }
    }
}

fn needs_quoting(key: &str) -> bool {
    key.is_empty() || parse_index(key).is_some() || key.contains(['.', '[', ']'])
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Index(index) => write!(f, "[{}]", index)?,
                Segment::Key(key) if needs_quoting(key) => {
                    write!(f, "[\"")?;
                    for c in key.chars() {
                        if c == '"' || c == '\\' {
                            write!(f, "\\")?;
                        }
                        write!(f, "{}", c)?;
                    }
                    write!(f, "\"]")?;
                }
                Segment::Key(key) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", key)?;
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::parse(s))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

impl From<&String> for Path {
    fn from(s: &String) -> Self {
        Path::parse(s)
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Path { segments }
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Path {
            segments: iter.into_iter().collect(),
        }
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Segment;

    fn index(&self, i: usize) -> &Self::Output {
        &self.segments[i]
    }
}

/// Macro for creating paths from literals.
///
/// # Example
///
/// ```rust
/// use structedit_core::path;
///
/// let p = path!("users[3].name");
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! path {
    ($s:expr) => {
        $crate::Path::parse($s)
    };
}
