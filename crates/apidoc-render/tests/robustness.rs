//! Robustness properties of the document renderer.
//!
//! The renderer has no failure path: arbitrary input must come back
//! byte-for-byte where no directive matches, and malformed ref tags of
//! any length must degrade without a scan past the lookahead window.

use apidoc_core::{QualifiedName, UrlBuilder};
use apidoc_render::{DocumentRenderer, Rendered};
use proptest::prelude::*;

struct TestLinks;

impl UrlBuilder for TestLinks {
    fn build_href(&self, qualified: &str) -> Option<String> {
        Some(format!("/apps/#type-{}", QualifiedName::parse(qualified).name))
    }
}

fn render(document: &str, render_title: bool) -> Rendered {
    let links = TestLinks;
    DocumentRenderer::new(&links).render(document, "doc.html", render_title)
}

proptest! {
    /// Documents with no `$` cannot contain a directive and pass through
    /// unchanged, with no warnings.
    #[test]
    fn directive_free_text_is_untouched(document in "[a-zA-Z0-9 .,!?<>/\n-]{0,300}") {
        let rendered = render(&document, false);
        prop_assert_eq!(rendered.text, document);
        prop_assert!(rendered.warnings.is_empty());
    }

    /// An unterminated ref followed by filler of any length, shorter or
    /// longer than the lookahead window, is emitted verbatim, and a
    /// valid ref after it still renders. The filler carries no dot, so a
    /// window-spanning scan can never mistake it for a qualified symbol.
    #[test]
    fn malformed_ref_prefix_is_emitted_byte_for_byte(filler in "[a-zA-Z \n]{0,1500}") {
        let document = format!("$(ref:{}$(ref:baz.baz_e1)", filler);
        let rendered = render(&document, false);

        let expected = format!("$(ref:{}<a href=/apps/#type-baz_e1>baz.baz_e1</a>", filler);
        prop_assert_eq!(rendered.text, expected);
        prop_assert!(rendered.warnings.is_empty());
    }

    /// Rendering arbitrary (including non-ASCII) input never panics, in
    /// either title mode.
    #[test]
    fn arbitrary_input_never_panics(document in any::<String>(), render_title in any::<bool>()) {
        let _ = render(&document, render_title);
    }
}
