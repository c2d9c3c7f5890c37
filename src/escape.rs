//! Character-level escaping utilities for inline markdown text.
//!
//! These functions operate on raw strings and have no tree knowledge. None
//! of them fail: malformed or unterminated HTML tags degrade to literal-text
//! treatment rather than erroring, since lossy-but-available output beats a
//! hard failure in this lexical layer.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that always have inline meaning in markdown.
static INLINE_ESCAPES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\\`*_\[\]~|<]").unwrap());
static HEADING_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(#{1,6})(\s)").unwrap());
static ORDERED_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(\d+)([.)]\s)").unwrap());
static BULLET_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^([-+>])\s").unwrap());

/// Escape text that could have an ambiguous meaning in markdown.
///
/// Inline-significant characters are escaped globally first; characters that
/// are only significant at the start of a line (heading markers, ordered
/// list markers, bullets, blockquote markers) are then escaped with anchored
/// patterns. The inline pass must run first so the backslashes it introduces
/// are not escaped again by the line-start pass.
pub fn escape_text(s: &str) -> String {
    let escaped = INLINE_ESCAPES.replace_all(s, r"\$0");
    // Line-start patterns replace the first occurrence only.
    let escaped = HEADING_START.replace(&escaped, r"\$1$2");
    let escaped = ORDERED_START.replace(&escaped, r"$1\$2");
    let escaped = BULLET_START.replace(&escaped, r"\$1 ");
    escaped.into_owned()
}

/// Remove a single backslash before any of `* _ ~ ` [ | <`, and reduce a
/// doubled backslash to one. Backslashes before any other character are left
/// untouched, so Windows paths and `\n` sequences survive.
pub fn unescape_markdown(text: &str) -> String {
    const TARGETS: &[char] = &['*', '_', '~', '`', '[', '|', '<', '\\'];
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if TARGETS.contains(&next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Restore forward slashes previously escaped by [`escape_url_slashes`].
/// Used when presenting raw markdown in a plain-text view.
pub fn unescape_url_slashes(text: &str) -> String {
    text.replace("\\/", "/")
}

static MARKDOWN_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static BARE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s]+").unwrap());

const PLACEHOLDER_DELIM: char = '\u{0007}';
const LINK_PREFIX: &str = "\u{0007}TREEMARK_LINK_";
const HTML_PREFIX: &str = "\u{0007}TREEMARK_HTML_";

/// Escape forward slashes in bare URLs, leaving markdown links and HTML tag
/// spans untouched.
///
/// The grammar engine mishandles unescaped slashes in bare URLs, but slashes
/// inside links and HTML are semantically safe and must not be mangled.
/// Links are masked into placeholders first, then HTML spans found by the
/// tag scanner; remaining `https?://` runs get their slashes escaped, and
/// the placeholders are restored in reverse masking order so link
/// placeholders nested inside HTML spans resolve correctly.
pub fn escape_url_slashes(text: &str) -> String {
    let mut links: Vec<String> = Vec::new();
    let mut result = MARKDOWN_LINK
        .replace_all(text, |caps: &regex::Captures| {
            links.push(caps[0].to_string());
            format!("{LINK_PREFIX}{}{PLACEHOLDER_DELIM}", links.len() - 1)
        })
        .into_owned();

    let mut html_blocks: Vec<String> = Vec::new();
    result = mask_html_blocks(&result, &mut html_blocks);

    result = BARE_URL
        .replace_all(&result, |caps: &regex::Captures| {
            caps[0].replace('/', "\\/")
        })
        .into_owned();

    for (i, block) in html_blocks.iter().enumerate() {
        result = result.replacen(&format!("{HTML_PREFIX}{i}{PLACEHOLDER_DELIM}"), block, 1);
    }
    for (i, link) in links.iter().enumerate() {
        result = result.replacen(&format!("{LINK_PREFIX}{i}{PLACEHOLDER_DELIM}"), link, 1);
    }

    result
}

/// Elements whose content is raw text: never scanned for inner tags.
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

struct TagInfo {
    name: Option<String>,
    end_index: usize,
    is_closing: bool,
    is_self_closing: bool,
}

fn push_placeholder(output: &mut String, html_blocks: &mut Vec<String>, block: &str) {
    html_blocks.push(block.to_string());
    output.push_str(&format!(
        "{HTML_PREFIX}{}{PLACEHOLDER_DELIM}",
        html_blocks.len() - 1
    ));
}

/// Replace HTML tag spans with placeholders. Comments, CDATA sections,
/// self-closing/processing tags and closing tags mask as single spans;
/// paired tags mask through their depth-matched closing tag; raw-text
/// elements mask through their literal closing tag without scanning their
/// content. An unmatched `<` stays literal text.
fn mask_html_blocks(text: &str, html_blocks: &mut Vec<String>) -> String {
    let mut output = String::new();
    let mut index = 0;

    while index < text.len() {
        let Some(rel) = text[index..].find('<') else {
            output.push_str(&text[index..]);
            break;
        };
        let lt = index + rel;
        output.push_str(&text[index..lt]);

        if text[lt..].starts_with("<!--") {
            match text[lt + 4..].find("-->") {
                Some(rel_end) => {
                    let end = lt + 4 + rel_end + 3;
                    push_placeholder(&mut output, html_blocks, &text[lt..end]);
                    index = end;
                }
                None => {
                    output.push_str(&text[lt..]);
                    index = text.len();
                }
            }
            continue;
        }

        if text[lt..].starts_with("<![CDATA[") {
            match text[lt + 9..].find("]]>") {
                Some(rel_end) => {
                    let end = lt + 9 + rel_end + 3;
                    push_placeholder(&mut output, html_blocks, &text[lt..end]);
                    index = end;
                }
                None => {
                    output.push_str(&text[lt..]);
                    index = text.len();
                }
            }
            continue;
        }

        let Some(tag) = parse_tag(text, lt) else {
            output.push('<');
            index = lt + 1;
            continue;
        };

        let Some(name) = &tag.name else {
            // Declarations and processing instructions mask as-is.
            push_placeholder(&mut output, html_blocks, &text[lt..=tag.end_index]);
            index = tag.end_index + 1;
            continue;
        };
        let tag_name = name.to_ascii_lowercase();

        if tag.is_closing || tag.is_self_closing {
            push_placeholder(&mut output, html_blocks, &text[lt..=tag.end_index]);
            index = tag.end_index + 1;
            continue;
        }

        if RAW_TEXT_TAGS.contains(&tag_name.as_str()) {
            let close_pattern = format!("</{tag_name}");
            let search_from = tag.end_index + 1;
            if let Some(rel_close) = text[search_from..]
                .to_ascii_lowercase()
                .find(&close_pattern)
            {
                let close_start = search_from + rel_close;
                if let Some(close_tag) = parse_tag(text, close_start) {
                    push_placeholder(&mut output, html_blocks, &text[lt..=close_tag.end_index]);
                    index = close_tag.end_index + 1;
                    continue;
                }
            }
        }

        if let Some(closing_end) = find_closing_tag_end(text, &tag_name, tag.end_index + 1) {
            push_placeholder(&mut output, html_blocks, &text[lt..=closing_end]);
            index = closing_end + 1;
            continue;
        }

        // No closing tag found: mask only the opening tag.
        push_placeholder(&mut output, html_blocks, &text[lt..=tag.end_index]);
        index = tag.end_index + 1;
    }

    output
}

static TAG_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]*").unwrap());
static SELF_CLOSING_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\s*>$").unwrap());

fn parse_tag(text: &str, start: usize) -> Option<TagInfo> {
    if !text[start..].starts_with('<') {
        return None;
    }
    let end_index = find_tag_end(text, start)?;

    let mut cursor = start + 1;
    if cursor >= text.len() {
        return None;
    }

    let first = text.as_bytes()[cursor];
    if first == b'!' || first == b'?' {
        return Some(TagInfo {
            name: None,
            end_index,
            is_closing: false,
            is_self_closing: true,
        });
    }

    let mut is_closing = false;
    if first == b'/' {
        is_closing = true;
        cursor += 1;
    }

    let name = TAG_NAME.find(&text[cursor..])?.as_str().to_string();
    let is_self_closing = SELF_CLOSING_END.is_match(&text[start..=end_index]);

    Some(TagInfo {
        name: Some(name),
        end_index,
        is_closing,
        is_self_closing,
    })
}

/// Byte index of the `>` terminating the tag opened at `start`, honoring
/// quoted attribute values.
fn find_tag_end(text: &str, start: usize) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (offset, ch) in text[start + 1..].char_indices() {
        let pos = start + 1 + offset;
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                }
            }
            None => match ch {
                '\'' | '"' => quote = Some(ch),
                '>' => return Some(pos),
                _ => {}
            },
        }
    }
    None
}

/// Byte index of the `>` of the closing tag matching `tag_name`, tracking
/// nesting depth of same-named tags.
fn find_closing_tag_end(text: &str, tag_name: &str, start: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut cursor = start;
    let lower = tag_name.to_ascii_lowercase();

    while cursor < text.len() {
        let lt = cursor + text[cursor..].find('<')?;

        let Some(tag) = parse_tag(text, lt) else {
            cursor = lt + 1;
            continue;
        };
        let Some(name) = &tag.name else {
            cursor = lt + 1;
            continue;
        };

        if name.to_ascii_lowercase() == lower {
            if tag.is_closing {
                depth -= 1;
            } else if !tag.is_self_closing {
                depth += 1;
            }
            if depth == 0 {
                return Some(tag.end_index);
            }
        }

        cursor = tag.end_index + 1;
    }

    None
}
