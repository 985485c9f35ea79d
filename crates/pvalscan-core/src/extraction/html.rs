use crate::error::PvalError;
use crate::extraction::TextExtractor;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static HIDDEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b.*?</script\s*>|<style\b.*?</style\s*>")
        .expect("hidden-content pattern is valid")
});

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)<br\s*/?>|</(?:p|div|li|tr|h[1-6]|table|section|article|blockquote|pre|caption|figcaption|dd|dt)\s*>",
    )
    .expect("line-break pattern is valid")
});

static CELL_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</t[dh]\s*>").expect("cell pattern is valid"));

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").expect("entity pattern is valid")
});

/// HTML backend: strips markup so `p &lt; 0.05` reads as `p < 0.05`.
///
/// Block-level closing tags and `<br>` become line breaks so that table
/// legends and body text land on separate lines.
pub struct HtmlExtractor;

impl TextExtractor for HtmlExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, PvalError> {
        Ok(html_to_text(&String::from_utf8_lossy(bytes)))
    }

    fn backend_name(&self) -> &str {
        "html"
    }
}

pub fn html_to_text(html: &str) -> String {
    let s = HIDDEN.replace_all(html, "");
    let s = LINE_BREAK.replace_all(&s, "\n");
    let s = CELL_END.replace_all(&s, " ");
    let s = TAG.replace_all(&s, "");
    decode_entities(&s)
}

fn decode_entities(s: &str) -> String {
    ENTITY
        .replace_all(s, |caps: &Captures| {
            decode_entity(&caps[1]).map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code);
    }

    match name {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        "ensp" => Some('\u{2002}'),
        "emsp" => Some('\u{2003}'),
        "thinsp" => Some('\u{2009}'),
        "equals" => Some('='),
        "dagger" => Some('\u{2020}'),
        "Dagger" => Some('\u{2021}'),
        "minus" => Some('\u{2212}'),
        "times" => Some('\u{00D7}'),
        _ => None,
    }
}
