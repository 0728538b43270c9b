//! Regex-based output minification.
//!
//! The transforms are purely textual and have no awareness of language
//! syntax: content containing comment-like sequences inside string literals
//! can be corrupted. Known limitation, kept for compatibility.

use regex::Regex;

pub struct Minifier {
    line_breaks: Regex,
    comments: Regex,
    spaces: Regex,
    after_colon: Regex,
    before_semi: Regex,
    around_brace: Regex,
}

impl Minifier {
    pub fn new() -> Self {
        Self {
            line_breaks: Regex::new(r"[\n\r]+").unwrap(),
            comments: Regex::new(r"/\*.*?\*/").unwrap(),
            spaces: Regex::new(r" +").unwrap(),
            after_colon: Regex::new(r": ").unwrap(),
            before_semi: Regex::new(r" ;").unwrap(),
            around_brace: Regex::new(r" ?\{ ?").unwrap(),
        }
    }

    /// Strip line breaks, block comments and redundant spaces, and collapse
    /// spaces after `:`, before `;` and around `{`. Idempotent.
    pub fn minify(&self, input: &str) -> String {
        let out = self.line_breaks.replace_all(input, "");
        let out = self.comments.replace_all(&out, " ");
        let out = self.spaces.replace_all(&out, " ");
        let out = self.after_colon.replace_all(&out, ":");
        let out = self.before_semi.replace_all(&out, ";");
        let out = self.around_brace.replace_all(&out, "{");
        out.into_owned()
    }
}

impl Default for Minifier {
    fn default() -> Self {
        Self::new()
    }
}
