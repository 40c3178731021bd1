//! Snapshot checks of rendered output strings.

use apidoc_core::{QualifiedName, UrlBuilder};
use apidoc_render::DocumentRenderer;
use insta::assert_snapshot;

struct TestLinks;

impl UrlBuilder for TestLinks {
    fn build_href(&self, qualified: &str) -> Option<String> {
        Some(format!("/apps/#type-{}", QualifiedName::parse(qualified).name))
    }
}

fn render(document: &str, render_title: bool) -> String {
    let links = TestLinks;
    DocumentRenderer::new(&links)
        .render(document, "doc.html", render_title)
        .text
}

#[test]
fn test_ref_anchor_shape() {
    assert_snapshot!(
        render("$(ref:baz.baz_e1)", false),
        @"<a href=/apps/#type-baz_e1>baz.baz_e1</a>"
    );
}

#[test]
fn test_mixed_directives() {
    assert_snapshot!(
        render("<h1>Storage</h1> $(title): $(table_of_contents) see $(ref:tester.TypeA here)", true),
        @"<h1>Storage</h1> Storage: <table-of-contents> see <a href=/apps/#type-TypeA>here</a>"
    );
}
