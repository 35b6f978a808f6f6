// src/render/escape.rs
// =============================================================================
// Sanitization for README text before it is turned into markup.
//
// README files are written by whoever owns the repository, so they are
// untrusted input. Two things are done here:
// - escape_text(): escapes & < > " so raw text can never open a tag or
//   break out of an attribute value
// - safe_url(): only lets http, https, mailto and relative URLs through,
//   everything else (javascript:, data:, vbscript:, ...) becomes "#"
// - attribute_text(): drops markup an earlier rule generated, so it can be
//   placed inside alt="..."
//
// After escape_text() runs, a literal < > or " can only come from markup the
// renderer itself generated. Such text is never put into an attribute as is:
// a URL containing it becomes "#", attribute text loses the tags.
//
// The markdown rules only look for characters that are NOT escaped
// (# * ` [ ] ( ) ! - digits), so escaping first does not change which
// rules match.
// =============================================================================

use pulldown_cmark::escape::escape_html;

// Schemes a rendered link or image may point at
const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// HTML-escapes raw text.
///
/// Example:
///   "<b>\"x\" & y</b>" -> "&lt;b&gt;&quot;x&quot; &amp; y&lt;/b&gt;"
pub fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    // Writing into a String never fails
    let _ = escape_html(&mut escaped, raw);
    escaped
}

/// Returns `url` if it is safe to put in href/src, otherwise "#".
///
/// `url` is expected to be already escaped by escape_text().
pub fn safe_url(url: &str) -> &str {
    if is_safe_url(url) {
        url
    } else {
        "#"
    }
}

/// Strips generated tags from text headed for an attribute value.
///
/// Example:
///   "<strong>Logo</strong>" -> "Logo"
pub fn attribute_text(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            '"' => {}
            _ if !in_tag => plain.push(c),
            _ => {}
        }
    }
    plain
}

// Browsers drop tabs/newlines inside URLs ("java\tscript:" still runs),
// so those are removed before looking at the scheme.
fn is_safe_url(url: &str) -> bool {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();

    if compact.is_empty() {
        return false;
    }

    // Generated markup captured by a later rule
    if compact.contains(|c: char| matches!(c, '<' | '>' | '"')) {
        return false;
    }

    // A scheme is whatever comes before the first ':' as long as no
    // '/', '?' or '#' shows up earlier. Without one, the URL is relative.
    let scheme_end = compact.find(':');
    let path_start = compact.find(|c: char| matches!(c, '/' | '?' | '#'));

    match (scheme_end, path_start) {
        (Some(colon), Some(slash)) if slash < colon => true,
        (Some(colon), _) => {
            let scheme = compact[..colon].to_ascii_lowercase();
            ALLOWED_SCHEMES.contains(&scheme.as_str())
        }
        (None, _) => true,
    }
}
