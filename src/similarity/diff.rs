use serde::{Deserialize, Serialize};

use crate::similarity::sequence::{Opcode, SequenceMatcher};

/// How a line relates the first text to the second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineTag {
    /// Present in both texts, aligned
    Unchanged,
    /// Present only in the first text
    Removed,
    /// Present only in the second text
    Added,
}

impl LineTag {
    /// Two-character prefix used when rendering a diff
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Unchanged => "  ",
            Self::Removed => "- ",
            Self::Added => "+ ",
        }
    }
}

/// One tagged line of a diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub tag: LineTag,
    pub text: String,
}

impl DiffLine {
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            tag: LineTag::Unchanged,
            text: text.into(),
        }
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self {
            tag: LineTag::Removed,
            text: text.into(),
        }
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self {
            tag: LineTag::Added,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for DiffLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.tag.prefix(), self.text)
    }
}

/// Line diff of `a` against `b`.
///
/// Lines are aligned on their longest common runs; a replaced region is emitted
/// as all of its removed lines followed by all of its added lines.
pub fn diff(a: &str, b: &str) -> Vec<DiffLine> {
    let a_lines = split_lines(a);
    let b_lines = split_lines(b);
    let matcher = SequenceMatcher::new(&a_lines, &b_lines);

    let mut lines = Vec::with_capacity(a_lines.len().max(b_lines.len()));
    for opcode in matcher.opcodes() {
        match opcode {
            Opcode::Equal { a, .. } => {
                lines.extend(tagged(&a_lines[a.0..a.1], LineTag::Unchanged));
            }
            Opcode::Delete { a, .. } => lines.extend(tagged(&a_lines[a.0..a.1], LineTag::Removed)),
            Opcode::Insert { b, .. } => lines.extend(tagged(&b_lines[b.0..b.1], LineTag::Added)),
            Opcode::Replace { a, b } => {
                lines.extend(tagged(&a_lines[a.0..a.1], LineTag::Removed));
                lines.extend(tagged(&b_lines[b.0..b.1], LineTag::Added));
            }
        }
    }
    lines
}

/// Split text into lines on every Unicode line boundary.
///
/// `\r\n` counts as one boundary, and a trailing boundary does not start an
/// empty final line. Besides `\n` and `\r`, vertical tab, form feed, the
/// information separators `\x1c`-`\x1e`, NEL, and the Unicode line and paragraph
/// separators all end a line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && matches!(chars.peek(), Some(&(_, '\n'))) {
            chars.next();
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn tagged<'a>(lines: &'a [&'a str], tag: LineTag) -> impl Iterator<Item = DiffLine> + 'a {
    lines.iter().map(move |line| DiffLine {
        tag,
        text: (*line).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_single_replacement() {
        let lines = diff("a\nb\nc", "a\nx\nc");
        assert_eq!(
            lines,
            vec![
                DiffLine::unchanged("a"),
                DiffLine::removed("b"),
                DiffLine::added("x"),
                DiffLine::unchanged("c"),
            ]
        );
    }

    #[test]
    fn test_diff_identical_and_empty() {
        let lines = diff("x\ny", "x\ny");
        assert!(lines.iter().all(|l| l.tag == LineTag::Unchanged));
        assert_eq!(lines.len(), 2);

        assert!(diff("", "").is_empty());
        assert_eq!(diff("", "one"), vec![DiffLine::added("one")]);
        assert_eq!(diff("one", ""), vec![DiffLine::removed("one")]);
    }

    #[test]
    fn test_diff_groups_blocks_contiguously() {
        let a = "def f():\n    x = 1\n    y = 2\n    return x\n";
        let b = "def f():\n    a = 1\n    b = 2\n    return x\n";
        let tags: Vec<LineTag> = diff(a, b).into_iter().map(|l| l.tag).collect();
        assert_eq!(
            tags,
            vec![
                LineTag::Unchanged,
                LineTag::Removed,
                LineTag::Removed,
                LineTag::Added,
                LineTag::Added,
                LineTag::Unchanged,
            ]
        );
    }

    #[test]
    fn test_diff_handles_crlf_and_insertions() {
        let lines = diff("a\r\nc\r\n", "a\nb\nc\n");
        assert_eq!(
            lines,
            vec![
                DiffLine::unchanged("a"),
                DiffLine::added("b"),
                DiffLine::unchanged("c"),
            ]
        );
    }

    #[test]
    fn test_split_lines_boundaries() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\rb\rc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\r\rb"), vec!["a", "", "b"]);
        assert_eq!(
            split_lines("a\x0bb\x0cc\u{2028}d\u{85}e"),
            vec!["a", "b", "c", "d", "e"]
        );
        assert_eq!(split_lines("tab\tstays"), vec!["tab\tstays"]);
    }

    #[test]
    fn test_diff_lone_carriage_returns() {
        assert_eq!(
            diff("a\rb\rc", "a\rx\rc"),
            vec![
                DiffLine::unchanged("a"),
                DiffLine::removed("b"),
                DiffLine::added("x"),
                DiffLine::unchanged("c"),
            ]
        );
    }

    #[test]
    fn test_diff_line_display() {
        assert_eq!(DiffLine::unchanged("a").to_string(), "  a");
        assert_eq!(DiffLine::removed("b").to_string(), "- b");
        assert_eq!(DiffLine::added("x").to_string(), "+ x");
    }
}
