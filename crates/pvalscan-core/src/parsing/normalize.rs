/// Glyphs that PDF decoders emit in place of comparison operators.
///
/// TeX's OT1 text fonts place `<` and `>` where Latin-1 has the inverted
/// punctuation marks, so papers typeset with them decode `p < .05` as
/// `p ¡ .05`. Fullwidth and small-form variants come from CJK-aware layouts.
const GLYPH_REPAIRS: &[(char, char)] = &[
    ('\u{00A1}', '<'), // ¡
    ('\u{00BF}', '>'), // ¿
    ('\u{FF1C}', '<'), // ＜
    ('\u{FF1E}', '>'), // ＞
    ('\u{FF1D}', '='), // ＝
    ('\u{FE64}', '<'), // ﹤
    ('\u{FE65}', '>'), // ﹥
    ('\u{FE66}', '='), // ﹦
];

/// Rewrite corrupted comparison glyphs to their ASCII operator.
///
/// Every other character passes through untouched, so the result stays
/// faithful to the source for provenance. Idempotent: the replacements are
/// ASCII and never appear in the repair table.
pub fn normalize_text(raw: &str) -> String {
    raw.chars().map(repair_glyph).collect()
}

fn repair_glyph(c: char) -> char {
    GLYPH_REPAIRS
        .iter()
        .find(|(glyph, _)| *glyph == c)
        .map(|(_, ascii)| *ascii)
        .unwrap_or(c)
}
