//! Markup tokenizer.
//!
//! Splits input into text and tag tokens. Tag recognition is purely
//! syntactic: `[` followed by a word that starts with a letter or `#`, made of
//! letters, digits, spaces and `_-#.`, then `]`. Closing tags are `[/]` or
//! `[/name]`. Anything else in brackets (`[1]`, `[ x ]`, `[]`) is text.
//! `\[` escapes a bracket.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Raw source text; may contain `\[` escapes.
    Text(&'a str),
    /// Opening tag body, e.g. `red bold` for `[red bold]`.
    Open(&'a str),
    /// Closing tag: `None` for `[/]`, the name for `[/red]`.
    Close(Option<&'a str>),
}

impl Token<'_> {
    /// The token's source text.
    pub(crate) fn raw(&self) -> String {
        match self {
            Token::Text(text) => (*text).to_string(),
            Token::Open(body) => format!("[{}]", body),
            Token::Close(None) => "[/]".to_string(),
            Token::Close(Some(name)) => format!("[/{}]", name),
        }
    }
}

pub(crate) fn tokenize(input: &str) -> Vec<Token<'_>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if bytes.get(i + 1) == Some(&b'[') => i += 2,
            b'[' => match parse_tag(&input[i..]) {
                Some((token, len)) => {
                    if text_start < i {
                        tokens.push(Token::Text(&input[text_start..i]));
                    }
                    tokens.push(token);
                    i += len;
                    text_start = i;
                }
                None => i += 1,
            },
            _ => i += 1,
        }
    }

    if text_start < input.len() {
        tokens.push(Token::Text(&input[text_start..]));
    }
    tokens
}

/// Parses a tag at the start of `s`, returning it and its byte length.
fn parse_tag(s: &str) -> Option<(Token<'_>, usize)> {
    let end = s.find(']')?;
    let body = &s[1..end];

    if body == "/" {
        return Some((Token::Close(None), end + 1));
    }
    if let Some(name) = body.strip_prefix('/') {
        return is_tag_name(name).then_some((Token::Close(Some(name)), end + 1));
    }
    is_tag_name(body).then_some((Token::Open(body), end + 1))
}

fn is_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '#');
    starts_well
        && !name.ends_with(' ')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-' | '#' | '.'))
}

/// Replaces `\[` escapes with `[`.
pub fn unescape(text: &str) -> String {
    text.replace("\\[", "[")
}

/// Escapes every `[` so the text can't be read as a tag.
///
/// # Example
///
/// ```rust
/// use richwx_bbparser::escape;
///
/// assert_eq!(escape("[NWS] Boston"), "\\[NWS] Boston");
/// ```
pub fn escape(text: &str) -> String {
    text.replace('[', "\\[")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(tokenize("hello"), vec![Token::Text("hello")]);
    }

    #[test]
    fn test_open_and_close() {
        assert_eq!(
            tokenize("[red bold]hi[/]"),
            vec![Token::Open("red bold"), Token::Text("hi"), Token::Close(None)]
        );
    }

    #[test]
    fn test_named_close() {
        assert_eq!(
            tokenize("[red]hi[/red]!"),
            vec![
                Token::Open("red"),
                Token::Text("hi"),
                Token::Close(Some("red")),
                Token::Text("!")
            ]
        );
    }

    #[test]
    fn test_non_tags_are_text() {
        assert_eq!(tokenize("[1] [ x ] []"), vec![Token::Text("[1] [ x ] []")]);
        assert_eq!(tokenize("[red"), vec![Token::Text("[red")]);
    }

    #[test]
    fn test_escaped_bracket_is_text() {
        assert_eq!(tokenize("\\[red]x"), vec![Token::Text("\\[red]x")]);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            tokenize("❄ [cyan]Frost[/] 🌊"),
            vec![
                Token::Text("❄ "),
                Token::Open("cyan"),
                Token::Text("Frost"),
                Token::Close(None),
                Token::Text(" 🌊")
            ]
        );
    }

    #[test]
    fn test_raw_round_trip() {
        let input = "a[red bold]b[/red bold]c[/]";
        let raw: String = tokenize(input).iter().map(Token::raw).collect();
        assert_eq!(raw, input);
    }

    #[test]
    fn test_escape_unescape() {
        assert_eq!(unescape(&escape("[x] [y]")), "[x] [y]");
    }
}
