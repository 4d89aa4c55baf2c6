//! Ordered markup rewrite rules applied over the extracted document body.
//!
//! Each rule is a single pass over the full text. Order matters: heading
//! rewrites run before punctuation so the punctuation passes also cover
//! heading text, and the brace-argument accent form runs before the bare
//! letter form so the bare pass never sees a consumed brace argument.
//!
//! Math delimiters (`$...$`, `\(...\)`, `$$...$$`, `\[...\]`) are never
//! touched by any pass; they flow through byte-identical for the external
//! math renderer to consume.

use std::borrow::Cow;

/// Combining acute accent appended after an accented letter.
const COMBINING_ACUTE: char = '\u{0301}';

/// A single text rewrite pass.
pub trait Rewrite {
    /// Apply the pass, borrowing the input when nothing matched.
    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str>;
}

impl<F> Rewrite for F
where
    F: for<'a> Fn(&'a str) -> Cow<'a, str>,
{
    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        (self)(input)
    }
}

/// Ordered rewrite passes applied left-to-right over an immutable string.
#[derive(Default)]
pub struct RewritePipeline {
    passes: Vec<Box<dyn Rewrite>>,
}

impl RewritePipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rewrite pass.
    pub fn push<R: Rewrite + 'static>(&mut self, pass: R) {
        self.passes.push(Box::new(pass));
    }

    /// The standard markup rule set: headings, dashes, quotes, ellipsis,
    /// and acute accents, in that order.
    pub fn markup() -> Self {
        let mut pipeline = Self::new();
        pipeline.push(rewrite_sections);
        pipeline.push(rewrite_subsections);
        pipeline.push(rewrite_em_dashes);
        pipeline.push(rewrite_double_backticks);
        pipeline.push(rewrite_double_apostrophes);
        pipeline.push(rewrite_ellipses);
        pipeline.push(rewrite_braced_accents);
        pipeline.push(rewrite_bare_accents);
        pipeline
    }

    /// Runs every pass in order over the input.
    pub fn apply(&self, input: &str) -> String {
        let mut current = Cow::Borrowed(input);
        for pass in &self.passes {
            let next = pass.apply(current.as_ref());
            current = Cow::Owned(next.into_owned());
        }
        current.into_owned()
    }
}

/// Rewrites `\section*{...}` headings into `<h3>` tags.
pub fn rewrite_sections(input: &str) -> Cow<'_, str> {
    rewrite_headings(input, "\\section*{", "h3")
}

/// Rewrites `\subsection*{...}` headings into `<h4>` tags.
pub fn rewrite_subsections(input: &str) -> Cow<'_, str> {
    rewrite_headings(input, "\\subsection*{", "h4")
}

/// Rewrites `---` into an em dash.
pub fn rewrite_em_dashes(input: &str) -> Cow<'_, str> {
    replace_literal(input, "---", "\u{2014}")
}

/// Rewrites `` `` `` into a plain double quote.
pub fn rewrite_double_backticks(input: &str) -> Cow<'_, str> {
    replace_literal(input, "``", "\"")
}

/// Rewrites `''` into a plain double quote.
pub fn rewrite_double_apostrophes(input: &str) -> Cow<'_, str> {
    replace_literal(input, "''", "\"")
}

/// Rewrites `\ldots` into a horizontal ellipsis.
pub fn rewrite_ellipses(input: &str) -> Cow<'_, str> {
    replace_literal(input, "\\ldots", "\u{2026}")
}

/// Rewrites `\'{c}` into the letter followed by a combining acute accent.
///
/// The brace argument is a single character; anything longer (or an empty
/// pair of braces) is not an accent command and passes through unchanged.
pub fn rewrite_braced_accents(input: &str) -> Cow<'_, str> {
    const COMMAND: &str = "\\'{";
    if !input.contains(COMMAND) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find(COMMAND) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + COMMAND.len()..];
        let mut chars = after.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), Some('}')) if letter != '}' => {
                out.push(letter);
                out.push(COMBINING_ACUTE);
                rest = &after[letter.len_utf8() + 1..];
            }
            _ => {
                out.push_str(COMMAND);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Rewrites `\'c` (one ASCII letter, no braces) into the letter followed by
/// a combining acute accent.
pub fn rewrite_bare_accents(input: &str) -> Cow<'_, str> {
    const COMMAND: &str = "\\'";
    if !input.contains(COMMAND) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find(COMMAND) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + COMMAND.len()..];
        match after.chars().next() {
            Some(letter) if letter.is_ascii_alphabetic() => {
                out.push(letter);
                out.push(COMBINING_ACUTE);
                rest = &after[1..];
            }
            _ => {
                out.push_str(COMMAND);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Rewrites `<command>name}` occurrences into `<tag>name</tag>`.
///
/// The heading name is everything up to the next closing brace and must be
/// non-empty. A command with no closing brace (or an empty name) is left
/// untouched.
fn rewrite_headings<'a>(input: &'a str, command: &str, tag: &str) -> Cow<'a, str> {
    if !input.contains(command) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find(command) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + command.len()..];
        match after.find('}') {
            Some(close) if close > 0 => {
                out.push('<');
                out.push_str(tag);
                out.push('>');
                out.push_str(&after[..close]);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                rest = &after[close + 1..];
            }
            _ => {
                out.push_str(command);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Replaces every occurrence of a literal pattern, borrowing when absent.
fn replace_literal<'a>(input: &'a str, pattern: &str, replacement: &str) -> Cow<'a, str> {
    if !input.contains(pattern) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.replace(pattern, replacement))
}
