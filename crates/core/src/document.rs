//! Document region extraction and skip-section elision.

use std::borrow::Cow;

const BEGIN_DOCUMENT: &str = "\\begin{document}";
const END_DOCUMENT: &str = "\\end{document}";

/// Extracts the convertible region between `\begin{document}` and the first
/// `\end{document}` that follows it.
///
/// Preamble text before the opening marker and anything after the closing
/// marker are ignored. Returns `None` when either marker is missing.
pub fn extract_document_body(source: &str) -> Option<&str> {
    let start = source.find(BEGIN_DOCUMENT)? + BEGIN_DOCUMENT.len();
    let len = source[start..].find(END_DOCUMENT)?;
    Some(&source[start..start + len])
}

/// Removes the first `\section*{...}` heading whose name matches `name`
/// exactly, together with any immediately trailing whitespace.
///
/// Matching is literal text. Names are not treated as patterns, so a name
/// containing brace characters will simply never match. When no heading
/// matches, the body is returned unchanged.
pub fn elide_section<'a>(body: &'a str, name: &str) -> Cow<'a, str> {
    let marker = format!("\\section*{{{name}}}");
    let Some(pos) = body.find(&marker) else {
        return Cow::Borrowed(body);
    };

    let after = &body[pos + marker.len()..];
    let mut out = String::with_capacity(body.len() - marker.len());
    out.push_str(&body[..pos]);
    out.push_str(after.trim_start());
    Cow::Owned(out)
}
