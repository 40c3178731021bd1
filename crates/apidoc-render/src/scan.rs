//! Text scanning primitives for the document renderer.

use nom::{
    bytes::complete::take_while1,
    character::complete::multispace1,
    combinator::{all_consuming, opt, rest, verify},
    sequence::{pair, preceded},
    IResult,
};

/// Maximum distance scanned for a ref tag's closing paren. An unclosed
/// tag past this window is left untouched instead of dragging the scan
/// to the end of the document.
pub const MAX_REF_LOOKAHEAD: usize = 1000;

/// A parsed ref-tag body: the qualified symbol and optional display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefTag<'a> {
    pub symbol: &'a str,
    pub text: Option<&'a str>,
}

/// Parse a qualified symbol: identifier characters and dots, with at
/// least one dot separating namespace and symbol.
pub fn symbol(input: &str) -> IResult<&str, &str> {
    verify(
        take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '.'),
        |sym: &str| sym.contains('.'),
    )(input)
}

/// Parse the body of a `$(ref:...)` tag: a qualified symbol, optionally
/// followed by display text. The separating whitespace may include a
/// newline. Returns `None` for anything that is not a whole, well-formed
/// body.
pub fn ref_body(input: &str) -> Option<RefTag<'_>> {
    let parse = pair(symbol, opt(preceded(multispace1, rest)));
    let (_, (sym, display)) = all_consuming(parse)(input).ok()?;
    let text = display.map(str::trim).filter(|text| !text.is_empty());
    Some(RefTag { symbol: sym, text })
}

/// Find the closing paren of a directive body within the lookahead
/// window. `input` starts immediately after the opening delimiter; the
/// returned offset indexes the `)` itself.
pub fn find_close(input: &str) -> Option<usize> {
    match input.find(')') {
        Some(offset) if offset <= MAX_REF_LOOKAHEAD => Some(offset),
        _ => None,
    }
}

/// Extract the text of the first `<h1>` heading, tolerating attributes
/// on the opening tag. Later headings are ignored.
pub fn extract_title(document: &str) -> Option<&str> {
    let mut from = 0;
    while let Some(offset) = document[from..].find("<h1") {
        let tag = from + offset;
        let after = &document[tag + 3..];
        let next = after.chars().next();
        if next != Some('>') && !next.map_or(false, char::is_whitespace) {
            from = tag + 3;
            continue;
        }
        let gt = after.find('>')?;
        let body = &after[gt + 1..];
        let close = body.find("</h1>")?;
        return Some(&body[..close]);
    }
    None
}
