//! Paragraph segmentation over blank-line boundaries.

/// Splits text into paragraphs on blank-line boundaries.
///
/// A paragraph is a maximal run of non-blank text; one or more fully blank
/// lines separate paragraphs. Segments are trimmed, and empty or
/// whitespace-only segments are dropped. Original order is preserved, and
/// single newlines inside a paragraph are kept.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Wraps each paragraph in a `<p>` tag and joins them with newlines.
pub fn wrap_paragraphs(text: &str) -> String {
    split_paragraphs(text)
        .iter()
        .map(|paragraph| format!("<p>{paragraph}</p>"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_blank_lines() {
        assert_eq!(split_paragraphs("a\n\nb\n\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn runs_of_blank_lines_are_one_boundary() {
        assert_eq!(split_paragraphs("a\n\n\n\nb"), vec!["a", "b"]);
    }

    #[test]
    fn single_newlines_stay_inside_a_paragraph() {
        assert_eq!(split_paragraphs("line one\nline two"), vec![
            "line one\nline two"
        ]);
    }

    #[test]
    fn whitespace_only_segments_are_dropped() {
        assert_eq!(split_paragraphs("a\n\n   \n\nb"), vec!["a", "b"]);
        assert_eq!(split_paragraphs("   "), Vec::<&str>::new());
    }

    #[test]
    fn segments_are_trimmed() {
        assert_eq!(split_paragraphs("  a  \n\n  b  "), vec!["a", "b"]);
    }

    #[test]
    fn wraps_each_paragraph_in_p_tags() {
        assert_eq!(wrap_paragraphs("a\n\nb"), "<p>a</p>\n<p>b</p>");
    }

    #[test]
    fn empty_input_wraps_to_empty_output() {
        assert_eq!(wrap_paragraphs(""), "");
        assert_eq!(wrap_paragraphs("\n\n\n"), "");
    }

    #[test]
    fn paragraph_count_matches_input() {
        let text = "one\n\ntwo\nstill two\n\nthree";
        let wrapped = wrap_paragraphs(text);
        assert_eq!(wrapped.matches("<p>").count(), 3);
        assert_eq!(wrapped.matches("</p>").count(), 3);
    }
}
