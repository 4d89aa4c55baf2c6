//! Conversion of the on-disk fixture document, pinned with snapshots.

use std::path::PathBuf;

use once_cell::sync::Lazy;
use texflow_core::convert;
use texflow_page::{ContentSource, FileSource};

static FIXTURE_DIR: Lazy<PathBuf> =
    Lazy::new(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"));

static ABOUT_TEX: Lazy<String> =
    Lazy::new(|| std::fs::read_to_string(FIXTURE_DIR.join("about.tex")).unwrap());

#[test]
fn about_page_converts_to_expected_fragment() {
    let html = convert(&ABOUT_TEX, None).unwrap();
    insta::assert_snapshot!(html, @r###"
    <p><h3>About</h3></p>
    <p>I work on spectral methods — mostly on the operator $L = -\Delta$.
    Colleagues call it "the usual suspect"…</p>
    <p><h4>Contact</h4></p>
    <p>Office hours are listed on the department page.</p>
    <p>Display math survives conversion:</p>
    <p>\[
      \int_0^1 f(x) \, dx
    \]</p>
    "###);
}

#[test]
fn skipping_the_about_section_drops_only_that_heading() {
    let html = convert(&ABOUT_TEX, Some("About")).unwrap();
    assert!(!html.contains("<h3>About</h3>"));
    assert!(html.contains("<h4>Contact</h4>"));
    assert!(html.starts_with("<p>I work on spectral methods"));
}

#[tokio::test]
async fn file_source_serves_the_fixture() {
    let source = FileSource::new(FIXTURE_DIR.as_path());
    let text = source.fetch("about.tex").await.unwrap();
    assert_eq!(text, *ABOUT_TEX);
}
