//! `$NAME` / `${NAME}` references inside an environment file.
//!
//! The dotenv parser expands references against the live process
//! environment before anything else. To expand them from another source,
//! every `$` the parser would treat as a reference is swapped for a marker
//! before parsing, and the markers are expanded afterwards.

/// Stand-in for an expandable `$`, from the Unicode private use area
const REFERENCE_MARKER: char = '\u{E000}';

/// Lexical state, following the dotenv parser's line grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Unquoted,
    Whitespace,
    Escape,
    Strong,
    StrongEscape,
    Weak,
    WeakEscape,
    Comment,
}

impl Scan {
    const fn between_entries(self) -> bool {
        matches!(self, Self::Unquoted | Self::Whitespace)
    }

    const fn expands_dollar(self) -> bool {
        matches!(self, Self::Unquoted | Self::Whitespace | Self::Weak)
    }
}

/// Replace every `$` that would start a reference with a marker
///
/// Single-quoted text, escaped `\$` and comments are left alone.
pub fn mark_references(contents: &str) -> String {
    let mut marked = String::with_capacity(contents.len());
    let mut state = Scan::Unquoted;

    for line in contents.split_inclusive('\n') {
        if state.between_entries() && line.trim_start().starts_with('#') {
            marked.push_str(line);
            continue;
        }

        for c in line.chars() {
            if state == Scan::Comment {
                marked.push(c);
                continue;
            }

            if c == '$' && state.expands_dollar() {
                marked.push(REFERENCE_MARKER);
            } else {
                marked.push(c);
            }

            state = match (state, c) {
                (Scan::Whitespace, '#') => Scan::Comment,
                (Scan::Unquoted | Scan::Whitespace, '\\') => Scan::Escape,
                (Scan::Unquoted | Scan::Whitespace, '"') => Scan::Weak,
                (Scan::Unquoted | Scan::Whitespace, '\'') => Scan::Strong,
                (Scan::Unquoted, c) if c.is_whitespace() && c != '\n' && c != '\r' => {
                    Scan::Whitespace
                }
                (Scan::Unquoted | Scan::Whitespace | Scan::Escape, _) => Scan::Unquoted,
                (Scan::Weak, '\\') => Scan::WeakEscape,
                (Scan::Weak, '"') => Scan::Unquoted,
                (Scan::Weak | Scan::WeakEscape, _) => Scan::Weak,
                (Scan::Strong, '\\') => Scan::StrongEscape,
                (Scan::Strong, '\'') => Scan::Unquoted,
                (Scan::Strong | Scan::StrongEscape, _) => Scan::Strong,
                (Scan::Comment, _) => Scan::Comment,
            };
        }

        if state == Scan::Comment {
            state = Scan::Unquoted;
        }
    }

    marked
}

/// Expand markers left by [`mark_references`] using `lookup`
///
/// `${NAME}` takes everything up to the closing brace; bare `$NAME` takes
/// alphanumeric characters only, as the dotenv parser does. Unknown names
/// expand to nothing.
pub fn expand_references<'a, F>(value: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut expanded = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c != REFERENCE_MARKER {
            expanded.push(c);
            continue;
        }

        let mut name = String::new();
        if chars.next_if_eq(&'{').is_some() {
            for c in chars.by_ref() {
                if c == '}' {
                    break;
                }
                name.push(c);
            }
        } else {
            while let Some(c) = chars.next_if(|c| c.is_alphanumeric()) {
                name.push(c);
            }
        }

        if !name.is_empty() {
            expanded.push_str(lookup(&name).unwrap_or_default());
        }
    }

    expanded
}
