/// One line of normalized text, borrowed from the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based position in the document.
    pub number: usize,
    pub text: &'a str,
}

/// Split text on line feeds, keeping empty lines and all whitespace.
///
/// Unlike `str::lines`, a trailing `\r` stays part of the line and a
/// trailing newline yields a final empty line.
pub fn scan_lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(i, text)| Line { number: i + 1, text })
}
