//! Minifier Scanner
//!
//! Single left-to-right scan over the source with a tagged state machine.
//! Comments are removed, whitespace runs are collapsed, and string/regex
//! literals are copied through verbatim.

// == Scanner State ==
/// Lexical state of the scanner at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Plain code outside any literal or comment
    Normal,
    /// Inside a `//` comment, consuming up to the next newline
    LineComment,
    /// Inside a `/* ... */` comment
    BlockComment,
    /// Inside a single-quoted string literal
    SingleQuote,
    /// Inside a double-quoted string literal
    DoubleQuote,
    /// Inside a regex literal, consuming up to the next unescaped `/`
    Regex,
}

// == Pending Whitespace ==
/// Accumulates a run of skipped whitespace (and removed comments) until the
/// next significant character decides what the run collapses to.
#[derive(Debug, Clone, Copy, Default)]
struct PendingWs {
    any: bool,
    newline: bool,
}

impl PendingWs {
    fn absorb(&mut self, newline: bool) {
        self.any = true;
        self.newline |= newline;
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// == Character Classes ==
/// Identifier-ish characters: a whitespace run between two of these must
/// keep a separator or the tokens would fuse.
fn is_ident(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Characters that can end a statement, so a following newline may be
/// significant for automatic semicolon insertion.
fn ends_statement(c: char) -> bool {
    is_ident(c) || matches!(c, ')' | ']' | '}' | '"' | '\'' | '`')
}

/// Characters that can begin a statement after a significant newline.
fn starts_statement(c: char) -> bool {
    is_ident(c) || matches!(c, '(' | '[' | '{' | '+' | '-' | '!' | '~' | '/' | '"' | '\'' | '`')
}

/// Adjacent character pairs that would form a new token (`++`, `--`, `//`,
/// `/*`, `*/`) if the whitespace between them were removed.
fn fuses(prev: char, next: char) -> bool {
    matches!(
        (prev, next),
        ('+', '+') | ('-', '-') | ('/', '/') | ('/', '*') | ('*', '/')
    )
}

/// A `/` opens a regex literal unless the previous significant character is
/// an identifier character or a closing paren/bracket, in which case it is a
/// division operator.
fn opens_regex(prev: Option<char>) -> bool {
    match prev {
        Some(c) => !(is_ident(c) || c == ')' || c == ']'),
        None => true,
    }
}

// == Whitespace Flush ==
/// Collapses the pending whitespace run given the character that follows it.
fn flush_ws(out: &mut String, pending: &mut PendingWs, next: char) {
    if !pending.any {
        return;
    }
    let had_newline = pending.newline;
    pending.clear();

    // Leading whitespace is dropped outright.
    let prev = match out.chars().last() {
        Some(c) => c,
        None => return,
    };

    if is_ident(prev) && is_ident(next) {
        out.push(if had_newline { '\n' } else { ' ' });
    } else if fuses(prev, next) {
        out.push(' ');
    } else if had_newline && ends_statement(prev) && starts_statement(next) {
        out.push('\n');
    }
    // Otherwise the run is insignificant and vanishes.
}

// == Minify ==
/// Removes comments and insignificant whitespace from script source.
///
/// String and regex literal contents pass through byte-for-byte, escaped
/// quotes do not close their string, and an unterminated block comment
/// silently consumes the rest of the input. The function is idempotent:
/// a second pass leaves the output unchanged.
pub fn minify(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut pending = PendingWs::default();
    let mut state = ScanState::Normal;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match state {
            ScanState::Normal => {
                if c.is_whitespace() {
                    pending.absorb(c == '\n' || c == '\r');
                    i += 1;
                } else if c == '/' && chars.get(i + 1) == Some(&'/') {
                    state = ScanState::LineComment;
                    i += 2;
                } else if c == '/' && chars.get(i + 1) == Some(&'*') {
                    state = ScanState::BlockComment;
                    i += 2;
                } else {
                    flush_ws(&mut out, &mut pending, c);
                    out.push(c);
                    state = match c {
                        '\'' => ScanState::SingleQuote,
                        '"' => ScanState::DoubleQuote,
                        // `out` ends with the `/` we just pushed; classify by
                        // the character before it.
                        '/' if opens_regex(chars_before_last(&out)) => ScanState::Regex,
                        _ => ScanState::Normal,
                    };
                    i += 1;
                }
            }
            ScanState::LineComment => {
                if c == '\n' {
                    // The newline is ordinary whitespace, not comment text.
                    state = ScanState::Normal;
                } else {
                    i += 1;
                }
            }
            ScanState::BlockComment => {
                if c == '*' && chars.get(i + 1) == Some(&'/') {
                    // First close marker wins; nesting is not supported.
                    pending.absorb(false);
                    state = ScanState::Normal;
                    i += 2;
                } else {
                    i += 1;
                }
            }
            ScanState::SingleQuote | ScanState::DoubleQuote => {
                let quote = if state == ScanState::SingleQuote { '\'' } else { '"' };
                if c == '\\' {
                    out.push(c);
                    if let Some(&escaped) = chars.get(i + 1) {
                        out.push(escaped);
                    }
                    i += 2;
                } else {
                    out.push(c);
                    if c == quote {
                        state = ScanState::Normal;
                    }
                    i += 1;
                }
            }
            ScanState::Regex => {
                if c == '\\' {
                    out.push(c);
                    if let Some(&escaped) = chars.get(i + 1) {
                        out.push(escaped);
                    }
                    i += 2;
                } else {
                    out.push(c);
                    if c == '/' {
                        state = ScanState::Normal;
                    }
                    i += 1;
                }
            }
        }
    }
    // A pending run at end of input is trailing whitespace and is dropped.
    out
}

/// Last significant character emitted before the `/` currently at the end of
/// the output buffer.
fn chars_before_last(out: &str) -> Option<char> {
    let mut it = out.chars().rev();
    it.next();
    it.next()
}
