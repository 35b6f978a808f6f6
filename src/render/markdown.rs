// src/render/markdown.rs
// =============================================================================
// This module turns a small subset of Markdown into HTML markup.
//
// It is NOT a CommonMark parser. The text goes through a fixed list of
// regex substitutions, each one working on the output of the previous one:
//
//   1. headings  (### before ## before #)
//   2. **bold**
//   3. *italic*          (after bold, or "**" would be eaten as two "*")
//   4. ```fenced code```
//   5. `inline code`
//   6. [text](url)
//   7. ![alt](url)
//   8. list items: "* ", "- ", "1. "
//   9. blank lines -> paragraphs, single newlines -> <br />
//  10. text that does not start with a block element is wrapped in <p>
//
// Anything that doesn't match a rule (an unclosed ``` for example) is left
// as literal text. There is no error path.
//
// Rust concepts:
// - OnceLock: compile the regexes once, on first use
// - Closures in replace_all: for rules that need to inspect what matched
// - Cow<str>: replace_all only allocates when something actually changed
// =============================================================================

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::escape::{attribute_text, escape_text, safe_url};

// All compiled patterns, in the order they are applied
struct Rules {
    h3: Regex,
    h2: Regex,
    h1: Regex,
    bold: Regex,
    italic: Regex,
    fenced: Regex,
    inline_code: Regex,
    link: Regex,
    image: Regex,
    star_item: Regex,
    dash_item: Regex,
    ordered_item: Regex,
    pre_block: Regex,
}

static RULES: OnceLock<Rules> = OnceLock::new();

fn rules() -> &'static Rules {
    RULES.get_or_init(|| {
        // The patterns are constants, so a failure here is a programming
        // error caught by the tests, not something to recover from
        let re = |pattern: &str| Regex::new(pattern).expect("invalid built-in pattern");
        Rules {
            // `#` runs must be followed by a space, so "## x" never
            // matches the single-# rule
            h3: re(r"(?m)^### (.*)$"),
            h2: re(r"(?m)^## (.*)$"),
            h1: re(r"(?m)^# (.*)$"),
            bold: re(r"\*\*(.*?)\*\*"),
            italic: re(r"\*(.*?)\*"),
            fenced: re(r"(?s)```(.*?)```"),
            inline_code: re(r"`([^`]+)`"),
            // The optional "!" lets the link rule see (and skip) images
            link: re(r"!?\[([^\]]+)\]\(([^)]+)\)"),
            image: re(r"!\[([^\]]*)\]\(([^)]+)\)"),
            star_item: re(r"(?m)^\* (.*)$"),
            dash_item: re(r"(?m)^- (.*)$"),
            ordered_item: re(r"(?m)^\d+\. (.*)$"),
            pre_block: re(r"(?s)<pre><code[^>]*>.*?</code></pre>"),
        }
    })
}

/// Renders Markdown text as HTML.
///
/// The input is treated as untrusted: it is HTML-escaped before any rule
/// runs, and link/image targets with unsafe schemes become "#".
///
/// Example:
///   "# Title\n\nSome **bold** text."
///   -> "<h1>Title</h1><p>Some <strong>bold</strong> text.</p>"
pub fn render_markdown(text: &str) -> String {
    let rules = rules();

    let normalized = text.replace("\r\n", "\n");
    let html = escape_text(&normalized);

    // 1. Headings, longest marker first
    let html = rules.h3.replace_all(&html, "<h3>${1}</h3>");
    let html = rules.h2.replace_all(&html, "<h2>${1}</h2>");
    let html = rules.h1.replace_all(&html, "<h1>${1}</h1>");

    // 2-3. Emphasis
    let html = rules.bold.replace_all(&html, "<strong>${1}</strong>");
    let html = rules.italic.replace_all(&html, "<em>${1}</em>");

    // 4-5. Code
    let html = rules.fenced.replace_all(&html, |caps: &Captures<'_>| fenced_block(&caps[1]));
    let html = rules.inline_code.replace_all(&html, "<code>${1}</code>");

    // 6-7. Links, then images
    let html = rules.link.replace_all(&html, |caps: &Captures<'_>| {
        if caps[0].starts_with('!') {
            // Image syntax, rule 7 handles it
            caps[0].to_string()
        } else {
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                safe_url(&caps[2]),
                &caps[1]
            )
        }
    });
    let html = rules.image.replace_all(&html, |caps: &Captures<'_>| {
        format!(
            "<img src=\"{}\" alt=\"{}\" />",
            safe_url(&caps[2]),
            attribute_text(&caps[1])
        )
    });

    // 8. Flat list items, no <ul>/<ol> around them
    let html = rules.star_item.replace_all(&html, "<li>• ${1}</li>");
    let html = rules.dash_item.replace_all(&html, "<li>• ${1}</li>");
    let html = rules.ordered_item.replace_all(&html, "<li class=\"ordered\">${1}</li>");

    // 9-10. Paragraphs and line breaks
    into_blocks(&html)
}

// Builds the <pre> element for the inside of a ``` fence.
// A bare word right after the opening fence is the language tag.
fn fenced_block(inner: &str) -> String {
    let (first_line, rest) = inner.split_once('\n').unwrap_or(("", inner));
    let is_language_tag = !first_line.is_empty()
        && first_line
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+' | '#' | '.'));

    let (class, code) = if is_language_tag {
        (format!(" class=\"language-{}\"", first_line), rest)
    } else if first_line.trim().is_empty() {
        (String::new(), rest)
    } else {
        (String::new(), inner)
    };

    format!(
        "<pre><code{}>{}</code></pre>",
        class,
        code.strip_suffix('\n').unwrap_or(code)
    )
}

// Splits the markup into blocks on blank lines. <pre> blocks are kept
// whole (their newlines are meaningful). Every other block becomes a
// paragraph unless it already starts with a block element.
fn into_blocks(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + 16);
    let mut last = 0;

    for pre in rules().pre_block.find_iter(html) {
        push_text_blocks(&mut out, &html[last..pre.start()]);
        out.push_str(pre.as_str());
        last = pre.end();
    }
    push_text_blocks(&mut out, &html[last..]);

    out
}

fn push_text_blocks(out: &mut String, text: &str) {
    for block in text.split("\n\n") {
        let block = block.trim_matches('\n');
        if block.is_empty() {
            continue;
        }

        let block = block.replace('\n', "<br />");
        if starts_with_block_element(&block) {
            out.push_str(&block);
        } else {
            out.push_str("<p>");
            out.push_str(&block);
            out.push_str("</p>");
        }
    }
}

fn starts_with_block_element(block: &str) -> bool {
    ["<h1>", "<h2>", "<h3>", "<pre>", "<li"]
        .iter()
        .any(|tag| block.starts_with(tag))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does the order of the rules matter?
//    - Each replace_all() sees the output of the one before it
//    - If *italic* ran before **bold**, "**x**" would turn into
//      "<em></em>x<em></em>"
//
// 2. What is ${1}?
//    - The text captured by the first (...) group of the pattern
//    - The braces stop Rust's regex from reading "$1abc" as a group
//      called "1abc"
//
// 3. Why escape before matching instead of after?
//    - After the rules run, the text is full of our own tags
//    - Escaping first means only the tags WE generate are real markup
// -----------------------------------------------------------------------------
