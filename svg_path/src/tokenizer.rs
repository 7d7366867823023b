///
/// A single token read from a path string
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathToken<'a> {
    /// A command letter (any ASCII letter that isn't part of a number)
    Command(char),

    /// A numeric literal, exactly as it appeared in the source string
    Number(&'a str),
}

///
/// Splits the contents of a path `d` attribute into command letters and numbers
///
/// Whitespace and commas both separate tokens, and command letters are always tokens on their own, so
/// `M10,20L30 40` produces `M`, `10`, `20`, `L`, `30`, `40`. An `e` or `E` directly after a digit is read
/// as the exponent of a number. A sign in the middle of a number does not start a new token, so `1-2` is
/// read as the single (invalid) number `1-2` rather than `1` followed by `-2`.
///
#[derive(Clone, Debug)]
pub struct PathTokenizer<'a> {
    source: &'a str,
    pos:    usize,
}

impl<'a> PathTokenizer<'a> {
    ///
    /// Creates a tokenizer for a path string
    ///
    pub fn new(source: &'a str) -> PathTokenizer<'a> {
        PathTokenizer {
            source: source,
            pos:    0,
        }
    }

    ///
    /// True if `chr` separates two tokens
    ///
    #[inline]
    fn is_separator(chr: char) -> bool {
        chr == ',' || chr.is_whitespace()
    }

    ///
    /// True if the letter at `idx` in the source is the exponent of a number (ie, it directly follows a digit)
    ///
    #[inline]
    fn is_exponent(&self, start: usize, idx: usize, chr: char) -> bool {
        if (chr != 'e' && chr != 'E') || idx == start {
            return false;
        }

        self.source[start..idx].chars().last().map(|last| last.is_ascii_digit() || last == '.').unwrap_or(false)
    }
}

impl<'a> Iterator for PathTokenizer<'a> {
    type Item = PathToken<'a>;

    fn next(&mut self) -> Option<PathToken<'a>> {
        // Skip any separators before the token
        let remaining   = &self.source[self.pos..];
        let skipped     = remaining.find(|chr: char| !Self::is_separator(chr))?;
        let start       = self.pos + skipped;

        let mut chars   = self.source[start..].char_indices();
        let (_, first)  = chars.next()?;

        // Letters are always commands on their own
        if first.is_ascii_alphabetic() {
            self.pos = start + first.len_utf8();
            return Some(PathToken::Command(first));
        }

        // Everything else up to the next separator or letter is part of a number
        let mut end = self.source.len();
        for (offset, chr) in chars {
            let idx = start + offset;

            if Self::is_separator(chr) || (chr.is_ascii_alphabetic() && !self.is_exponent(start, idx, chr)) {
                end = idx;
                break;
            }
        }

        self.pos = end;
        Some(PathToken::Number(&self.source[start..end]))
    }
}

///
/// Splits a path string into tokens
///
#[inline]
pub fn tokenize_path<'a>(path: &'a str) -> PathTokenizer<'a> {
    PathTokenizer::new(path)
}
