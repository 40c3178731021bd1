//! Single-pass directive substitution.

use apidoc_core::UrlBuilder;

use crate::scan;

const TITLE_TAG: &str = "$(title)";
const TOC_TAG: &str = "$(table_of_contents)";
const REF_OPEN: &str = "$(ref:";

/// Replacement text for the table-of-contents placeholder.
const TOC_MARKER: &str = "<table-of-contents>";

/// A rendered document and its warnings, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub warnings: Vec<String>,
}

/// Substitutes inline directives in documentation text.
///
/// Rendering never fails: malformed directives are left in place and
/// anomalies are reported through [`Rendered::warnings`].
pub struct DocumentRenderer<'a> {
    links: &'a dyn UrlBuilder,
}

impl<'a> DocumentRenderer<'a> {
    pub fn new(links: &'a dyn UrlBuilder) -> Self {
        Self { links }
    }

    /// Render one document.
    ///
    /// Pure: a fresh warning list every call, no state kept between
    /// calls. `path` only attributes warnings. When `render_title` is
    /// set, the first `$(title)` placeholder is replaced with the text of
    /// the document's first `<h1>` heading (the heading markup itself
    /// stays in place).
    pub fn render(&self, document: &str, path: &str, render_title: bool) -> Rendered {
        let title = scan::extract_title(document);
        let mut warnings = Vec::new();
        if render_title && title.is_none() {
            warnings.push("Expected a title".to_string());
        }

        let mut out = String::with_capacity(document.len());
        let mut pos = 0;
        let mut title_seen = false;
        let mut toc_seen = false;

        while let Some(offset) = document[pos..].find("$(") {
            let start = pos + offset;
            out.push_str(&document[pos..start]);
            let tail = &document[start..];

            if !title_seen && tail.starts_with(TITLE_TAG) {
                title_seen = true;
                match title {
                    Some(text) if render_title => out.push_str(text),
                    Some(text) => {
                        warnings.push(format!("Found unexpected title \"{}\"", text));
                        out.push_str(TITLE_TAG);
                    }
                    None => out.push_str(TITLE_TAG),
                }
                pos = start + TITLE_TAG.len();
            } else if !toc_seen && tail.starts_with(TOC_TAG) {
                toc_seen = true;
                out.push_str(TOC_MARKER);
                pos = start + TOC_TAG.len();
            } else if tail.starts_with(REF_OPEN) {
                pos = start + self.render_ref(tail, path, &mut out, &mut warnings);
            } else {
                // A lone `$(` is plain text.
                out.push_str("$(");
                pos = start + 2;
            }
        }
        out.push_str(&document[pos..]);

        Rendered { text: out, warnings }
    }

    /// Render one `$(ref:...)` tag at the start of `tail`, appending to
    /// `out`. Returns how many bytes of `tail` were consumed.
    ///
    /// An unclosed or ill-formed tag degrades to its literal `$(ref:`
    /// prefix, so the scan resumes just past it and a later valid tag
    /// still renders.
    fn render_ref(
        &self,
        tail: &str,
        path: &str,
        out: &mut String,
        warnings: &mut Vec<String>,
    ) -> usize {
        let body = &tail[REF_OPEN.len()..];
        let parsed = scan::find_close(body)
            .and_then(|close| scan::ref_body(&body[..close]).map(|tag| (tag, close)));

        match parsed {
            Some((tag, close)) => {
                let consumed = REF_OPEN.len() + close + 1;
                match self.links.build_href(tag.symbol) {
                    Some(href) => {
                        let text = tag.text.unwrap_or(tag.symbol);
                        out.push_str(&format!("<a href={}>{}</a>", href, text));
                    }
                    None => {
                        warnings
                            .push(format!("Could not resolve $(ref:{}) in {}", tag.symbol, path));
                        out.push_str(&tail[..consumed]);
                    }
                }
                consumed
            }
            None => {
                out.push_str(REF_OPEN);
                REF_OPEN.len()
            }
        }
    }
}
