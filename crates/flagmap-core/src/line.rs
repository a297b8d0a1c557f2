//! Per-line classification of enum declaration text.
//!
//! Classification is purely textual: the token is whatever precedes the first
//! `=` on the line, trimmed. Nothing here understands C/C++ syntax.

/// How a single input line is treated when building a name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Token starts with `//`
    Comment,
    /// Token is empty after trimming
    Blank,
    /// Token starts with `{`
    OpenBrace,
    /// Token starts with `}`
    CloseBrace,
    /// Token starts with `enum `, e.g. `enum Flags {`
    EnumDecl(&'a str),
    /// Anything else is taken as an enumerator name
    Entry(&'a str),
}

impl<'a> LineKind<'a> {
    /// The output line for this kind, without a trailing newline.
    ///
    /// Enum declarations are commented out so the generated table still
    /// compiles; enumerators become `{ "NAME", NAME },` initializers.
    pub fn render(&self) -> Option<String> {
        match self {
            LineKind::EnumDecl(decl) => Some(format!("//{}", decl)),
            LineKind::Entry(name) => Some(format!("{{ \"{}\", {} }},", name, name)),
            LineKind::Comment | LineKind::Blank | LineKind::OpenBrace | LineKind::CloseBrace => None,
        }
    }
}

/// Unicode whitespace plus the ASCII information separators `\x1c`..=`\x1f`.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Text before the first `=`, trimmed.
///
/// A line without `=` yields the whole line, trimmed.
pub fn token(line: &str) -> &str {
    line.split_once('=')
        .map_or(line, |(head, _)| head)
        .trim_matches(is_space)
}

/// Classify a line by its token.
///
/// Order matters: `// enum Foo` is a comment, not a declaration.
pub fn classify(line: &str) -> LineKind<'_> {
    let token = token(line);

    if token.starts_with("//") {
        LineKind::Comment
    } else if token.is_empty() {
        LineKind::Blank
    } else if token.starts_with('{') {
        LineKind::OpenBrace
    } else if token.starts_with('}') {
        LineKind::CloseBrace
    } else if token.starts_with("enum ") {
        LineKind::EnumDecl(token)
    } else {
        LineKind::Entry(token)
    }
}
