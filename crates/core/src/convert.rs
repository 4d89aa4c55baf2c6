//! Top-level LaTeX-to-HTML conversion.

use std::borrow::Cow;

use crate::document::{elide_section, extract_document_body};
use crate::paragraph::wrap_paragraphs;
use crate::rewrite::RewritePipeline;

/// Converts a LaTeX source document into an HTML fragment.
///
/// The convertible region between `\begin{document}` and `\end{document}`
/// is extracted, the optional skip-section is elided, the standard markup
/// rule set is applied, and the result is segmented into `<p>`-wrapped
/// paragraphs joined by newlines. Math delimiters pass through verbatim for
/// the external renderer.
///
/// Returns `None` when the source has no document region. The conversion is
/// a pure function of its inputs: no side effects, and re-running it on the
/// same input yields the same output. Note that source text is not HTML
/// escaped; literal `<` and `>` flow into the output unchanged.
pub fn convert(source: &str, skip_section: Option<&str>) -> Option<String> {
    let body = extract_document_body(source)?;
    let body = match skip_section {
        Some(name) => elide_section(body, name),
        None => Cow::Borrowed(body),
    };
    let rewritten = RewritePipeline::markup().apply(&body);
    Some(wrap_paragraphs(&rewritten))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_headings_quotes_and_math() {
        let source =
            "\\begin{document}\\section*{Intro}\nHello ``world''\\ldots\n\n$x^2$\n\\end{document}";
        let html = convert(source, None).unwrap();
        assert_eq!(
            html,
            "<p><h3>Intro</h3>\nHello \"world\"\u{2026}</p>\n<p>$x^2$</p>"
        );
    }

    #[test]
    fn missing_document_region_yields_none() {
        assert_eq!(convert("\\section*{Intro}\nHello", None), None);
        assert_eq!(convert("", None), None);
    }

    #[test]
    fn empty_body_yields_empty_fragment() {
        // An extracted but empty body converts to an empty fragment; callers
        // treat that the same as a failed extraction.
        assert_eq!(
            convert("\\begin{document}\\end{document}", None),
            Some(String::new())
        );
    }

    #[test]
    fn skip_section_removes_heading_and_trailing_whitespace() {
        let source = "\\begin{document}\\section*{Bio}\n\nShort bio.\n\\end{document}";
        let html = convert(source, Some("Bio")).unwrap();
        assert_eq!(html, "<p>Short bio.</p>");
    }

    #[test]
    fn skip_section_leaves_other_headings_converted() {
        let source =
            "\\begin{document}\\section*{Bio}\nText.\n\n\\section*{Work}\nMore.\n\\end{document}";
        let html = convert(source, Some("Bio")).unwrap();
        assert_eq!(html, "<p>Text.</p>\n<p><h3>Work</h3>\nMore.</p>");
    }

    #[test]
    fn unknown_skip_section_changes_nothing() {
        let source = "\\begin{document}\\section*{Bio}\nText.\n\\end{document}";
        assert_eq!(convert(source, Some("Missing")), convert(source, None));
    }

    #[test]
    fn paragraph_order_is_preserved() {
        let source = "\\begin{document}one\n\ntwo\n\nthree\\end{document}";
        let html = convert(source, None).unwrap();
        assert_eq!(html, "<p>one</p>\n<p>two</p>\n<p>three</p>");
    }

    #[test]
    fn display_math_paragraph_is_byte_identical() {
        let source = "\\begin{document}text\n\n\\[\nE = mc^2\n\\]\n\\end{document}";
        let html = convert(source, None).unwrap();
        assert_eq!(html, "<p>text</p>\n<p>\\[\nE = mc^2\n\\]</p>");
    }

    #[test]
    fn conversion_is_deterministic() {
        let source = "\\begin{document}a --- b\n\nc\\ldots\\end{document}";
        assert_eq!(convert(source, None), convert(source, None));
    }
}
