//! Markup-aware word wrapping.
//!
//! Wrapping happens on markup, before tags are applied, so line widths only
//! count visible text. Each output line is balanced: tags still open at a
//! break are closed at the end of the line and reopened on the next one,
//! which lets every line be parsed (and padded) on its own.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::parser::BBParser;
use crate::token::{escape, tokenize, unescape, Token};

impl BBParser {
    /// Wraps markup to `width` display columns.
    ///
    /// Breaks at whitespace; words wider than a line are split by character.
    /// Explicit newlines always break. Whitespace at a break is dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use console::Color;
    /// use richwx_bbparser::{BBParser, TagStyle, TagTransform};
    ///
    /// let mut styles = HashMap::new();
    /// styles.insert("red".to_string(), TagStyle::new().fg(Color::Red));
    /// let parser = BBParser::new(styles, TagTransform::Apply);
    ///
    /// assert_eq!(
    ///     parser.wrap("[red]Tornado Warning[/]", 8),
    ///     vec!["[red]Tornado[/]", "[red]Warning[/]"]
    /// );
    /// ```
    pub fn wrap(&self, input: &str, width: usize) -> Vec<String> {
        let mut wrapper = LineWrapper::new(width.max(1));
        for token in tokenize(input) {
            match token {
                Token::Text(raw) => wrapper.text(&unescape(raw)),
                _ if !self.is_live_tag(&token) => wrapper.text(&token.raw()),
                Token::Open(body) => wrapper.open(body),
                Token::Close(name) => wrapper.close(name),
            }
        }
        wrapper.finish()
    }
}

struct LineWrapper {
    width: usize,
    lines: Vec<String>,
    line: String,
    line_width: usize,
    pending: String,
    open: Vec<String>,
}

impl LineWrapper {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
            line: String::new(),
            line_width: 0,
            pending: String::new(),
            open: Vec::new(),
        }
    }

    fn open(&mut self, body: &str) {
        self.line.push('[');
        self.line.push_str(body);
        self.line.push(']');
        self.open.push(body.to_string());
    }

    fn close(&mut self, name: Option<&str>) {
        match name {
            None => {
                self.line.push_str("[/]");
                self.open.pop();
            }
            Some(name) => {
                self.line.push_str("[/");
                self.line.push_str(name);
                self.line.push(']');
                if let Some(position) = self.open.iter().rposition(|body| body == name) {
                    self.open.truncate(position);
                }
            }
        }
    }

    fn text(&mut self, mut rest: &str) {
        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix('\n') {
                self.break_line();
                rest = after;
                continue;
            }
            let space_end = rest
                .find(|c: char| !c.is_whitespace() || c == '\n')
                .unwrap_or(rest.len());
            if space_end > 0 {
                self.pending.push_str(&rest[..space_end]);
                rest = &rest[space_end..];
                continue;
            }
            let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            self.word(&rest[..word_end]);
            rest = &rest[word_end..];
        }
    }

    fn word(&mut self, word: &str) {
        let word_width = word.width();
        if self.line_width > 0 {
            let pending_width = self.pending.width();
            if self.line_width + pending_width + word_width <= self.width {
                self.line.push_str(&self.pending);
                self.line_width += pending_width;
            } else {
                self.break_line();
            }
        }
        self.pending.clear();

        if self.line_width + word_width <= self.width {
            self.line.push_str(&escape(word));
            self.line_width += word_width;
            return;
        }

        for c in word.chars() {
            let char_width = c.width().unwrap_or(0);
            if self.line_width > 0 && self.line_width + char_width > self.width {
                self.break_line();
            }
            if c == '[' {
                self.line.push_str("\\[");
            } else {
                self.line.push(c);
            }
            self.line_width += char_width;
        }
    }

    fn break_line(&mut self) {
        let mut line = std::mem::take(&mut self.line);
        for _ in &self.open {
            line.push_str("[/]");
        }
        self.lines.push(line);
        for body in &self.open {
            self.line.push('[');
            self.line.push_str(body);
            self.line.push(']');
        }
        self.line_width = 0;
        self.pending.clear();
    }

    fn finish(mut self) -> Vec<String> {
        self.break_line();
        self.lines
    }
}


#[cfg(test)]
mod proptests {
    use crate::{BBParser, TagStyle, TagTransform};
    use console::Color;
    use proptest::prelude::*;
    use std::collections::HashMap;
    use unicode_width::UnicodeWidthStr;

    fn parser() -> BBParser {
        let mut styles = HashMap::new();
        styles.insert("red".to_string(), TagStyle::new().fg(Color::Red));
        BBParser::new(styles, TagTransform::Remove)
    }

    proptest! {
        #[test]
        fn wrapped_lines_fit_and_keep_words(
            words in prop::collection::vec("[a-z]{1,8}", 1..20),
            width in 8usize..40,
            styled in prop::bool::ANY,
        ) {
            let text = words.join(" ");
            let input = if styled { format!("[red]{}[/]", text) } else { text.clone() };
            let parser = parser();
            let lines = parser.wrap(&input, width);

            for line in &lines {
                let (plain, errors) = parser.parse_with_diagnostics(line);
                prop_assert!(plain.width() <= width, "line {:?} wider than {}", plain, width);
                prop_assert!(errors.is_empty(), "line {:?} unbalanced: {}", line, errors);
            }

            let rejoined: Vec<String> = lines.iter().map(|l| parser.plain(l)).collect();
            prop_assert_eq!(rejoined.join(" "), text);
        }
    }
}
