use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Cleans raw commentary into the lowercase token stream the classifier
/// was trained on.
pub struct TextNormalizer {
    url_regex: Regex,
    mention_regex: Regex,
    symbol_regex: Regex,
    whitespace_regex: Regex,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            url_regex: Regex::new(r"http\S+|www\.\S+").unwrap(),
            mention_regex: Regex::new(r"@\w+").unwrap(),
            symbol_regex: Regex::new(r"[^\w\s]").unwrap(),
            whitespace_regex: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Normalize one input. Total and deterministic; empty maps to empty.
    ///
    /// Output contains only lowercase word characters separated by single
    /// spaces. Runs of three or more identical characters are capped at two,
    /// so doubled letters survive while emphatic elongation does not.
    /// Step order matters: `#` is stripped before punctuation removal so the
    /// hashtag word itself is kept, and run capping happens while punctuation
    /// is still present so "!!!" collapses like "uuu" does.
    pub fn normalize(&self, text: &str) -> String {
        let text: String = text.nfkc().collect();
        let text = text.to_lowercase();
        let text = self.url_regex.replace_all(&text, " ");
        let text = text.replace("[username]", " ");
        let text = text.replace("[url]", " ");
        let text = text.replace("[hashtag]", " ");
        let text = self.mention_regex.replace_all(&text, " ");
        let text = text.replace('#', " ");
        let text = collapse_repeats(&text);
        let text = self.symbol_regex.replace_all(&text, " ");
        let text = self.whitespace_regex.replace_all(&text, " ");
        text.trim().to_string()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

// The regex crate has no backreferences, so run capping walks chars directly.
fn collapse_repeats(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = None;
    let mut run = 0usize;

    for ch in text.chars() {
        if last == Some(ch) {
            run += 1;
        } else {
            last = Some(ch);
            run = 1;
        }
        if run <= 2 {
            out.push(ch);
        }
    }

    out
}
