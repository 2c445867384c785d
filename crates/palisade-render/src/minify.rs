//! Conservative, dependency-light minification passes.
//!
//! These intentionally favor safety over compression ratio: whitespace and
//! comments are removed, but nothing is parsed or rewritten structurally.
//! Each pass is pure; the driver decides per-artifact whether to apply it
//! and logs the byte reduction.

use once_cell::sync::Lazy;
use regex::Regex;

static CSS_COMMENTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*[\s\S]*?\*/").unwrap());
static ANY_WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static CSS_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*([{}:;,>+~])\s*").unwrap());
static CSS_QUOTED_NAME: Lazy<Regex> = Lazy::new(|| Regex::new("\"([^\"]+)\"").unwrap());
static CSS_EMPTY_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^{}]+\{\s*\}").unwrap());

/// Minify a stylesheet: strip comments, collapse whitespace, drop
/// redundant punctuation spacing, unquote simple font names, and remove
/// empty rules.
#[must_use]
pub fn minify_css(css: &str) -> String {
    let stripped = CSS_COMMENTS.replace_all(css, "");
    let collapsed = ANY_WHITESPACE_RUN.replace_all(&stripped, " ");
    let tight = CSS_PUNCTUATION.replace_all(&collapsed, "$1");
    let tight = tight.replace(";}", "}");
    let unquoted = CSS_QUOTED_NAME.replace_all(&tight, |caps: &regex::Captures<'_>| {
        let inner = &caps[1];
        let simple = !inner.contains(' ')
            && inner
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-');
        if simple {
            inner.to_owned()
        } else {
            caps[0].to_owned()
        }
    });
    let pruned = CSS_EMPTY_RULE.replace_all(&unquoted, "");
    pruned.trim().to_owned()
}

static JS_LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)([^"'`]|^)//.*$"#).unwrap());
static JS_BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*[\s\S]*?\*/").unwrap());
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*\n").unwrap());
static TRAILING_LINE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());
static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Minify a script very conservatively: comments, blank lines, and
/// trailing whitespace only. Statements and identifiers are untouched.
#[must_use]
pub fn minify_js(js: &str) -> String {
    let no_line_comments = JS_LINE_COMMENT.replace_all(js, "$1");
    let no_comments = JS_BLOCK_COMMENT.replace_all(&no_line_comments, "");
    let no_blanks = BLANK_LINES.replace_all(&no_comments, "");
    let no_trailing = TRAILING_LINE_WS.replace_all(&no_blanks, "");
    let squeezed = EXCESS_NEWLINES.replace_all(&no_trailing, "\n\n");
    squeezed.trim().to_owned()
}

static INTER_TAG_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r">\s+<").unwrap());
static BLOCK_TAG_WS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\s*(</?(?:div|p|h[1-6]|section|article|header|footer|main|nav|aside|ul|ol|li|table|thead|tbody|tfoot|tr|td|th|form|fieldset|blockquote|pre|hr|br)[^>]*>)\s*",
    )
    .unwrap()
});
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());
static HEAD_OPEN_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(<head[^>]*>)\s+").unwrap());
static HEAD_CLOSE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+(</head>)").unwrap());
static VOID_TAG_WS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*(<(?:meta|link|script|style)[^>]*>)\s*").unwrap());

/// Minify the generated page: drop comments (IE conditional comments are
/// preserved), collapse whitespace between and around tags.
#[must_use]
pub fn minify_html(html: &str) -> String {
    let no_comments = strip_html_comments(html);
    let no_gaps = INTER_TAG_WS.replace_all(&no_comments, "><");
    let tight_blocks = BLOCK_TAG_WS.replace_all(&no_gaps, "$1");
    let single_spaced = MULTI_SPACE.replace_all(&tight_blocks, " ");
    let no_blanks = BLANK_LINES.replace_all(&single_spaced, "");
    let head_open = HEAD_OPEN_WS.replace_all(&no_blanks, "$1");
    let head_close = HEAD_CLOSE_WS.replace_all(&head_open, "$1");
    let tight_void = VOID_TAG_WS.replace_all(&head_close, "$1");
    tight_void.trim().to_owned()
}

/// Remove `<!-- ... -->` comments, keeping `<!--[if ...]>` conditionals.
fn strip_html_comments(html: &str) -> String {
    let mut output = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find("<!--") {
        output.push_str(&rest[..open]);
        let comment = &rest[open..];
        if comment[4..].starts_with("[if") {
            // IE conditional comment: keep the opener and move past it.
            output.push_str("<!--");
            rest = &comment[4..];
            continue;
        }
        match comment.find("-->") {
            Some(close) => rest = &comment[close + 3..],
            None => {
                // Unterminated comment: drop the remainder, as a parser would.
                rest = "";
            }
        }
    }

    output.push_str(rest);
    output
}
