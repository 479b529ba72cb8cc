use console::{Attribute, Color};
use richwx_bbparser::{BBParser, TagStyle, TagTransform};
use std::collections::HashMap;

fn test_styles() -> HashMap<String, TagStyle> {
    let mut styles = HashMap::new();
    styles.insert("red".to_string(), TagStyle::new().fg(Color::Red));
    styles.insert("bold".to_string(), TagStyle::new().attr(Attribute::Bold));
    styles.insert(
        "orange_red1".to_string(),
        TagStyle::new().fg(Color::Color256(202)),
    );
    styles
}

#[test]
fn test_output_modes() {
    let styles = test_styles();
    let input = "[red]hello[/red] [bold]world[/bold]";

    let parser = BBParser::new(styles.clone(), TagTransform::Keep);
    assert_eq!(parser.parse(input), input);

    let parser = BBParser::new(styles.clone(), TagTransform::Remove);
    assert_eq!(parser.parse(input), "hello world");

    let parser = BBParser::new(styles, TagTransform::Apply);
    let output = parser.parse(input);
    assert!(output.contains("\x1b[31m"));
    assert!(output.contains("\x1b[1m"));
    assert!(output.contains("hello"));
    assert!(output.contains("world"));
}

#[test]
fn test_nested_tags_are_merged() {
    let parser = BBParser::new(test_styles(), TagTransform::Apply);
    let output = parser.parse("[bold][red]text[/red][/bold]");

    // one styled run: red, bold, reset
    let escape_count = output.matches("\x1b[").count();
    assert!(
        escape_count <= 3,
        "Output too bloated! Found {} escapes. Output: {:?}",
        escape_count,
        output
    );
}

#[test]
fn test_compound_tag_matches_nested_tags() {
    let parser = BBParser::new(test_styles(), TagTransform::Apply);
    assert_eq!(
        parser.parse("[red bold]x[/]"),
        parser.parse("[red][bold]x[/][/]")
    );
}

#[test]
fn test_palette_color() {
    let parser = BBParser::new(test_styles(), TagTransform::Apply);
    let output = parser.parse("[orange_red1]Tsunami Warning[/]");
    assert!(output.contains("\x1b[38;5;202m"));
}

#[test]
fn test_unbalanced_tag_raises_error() {
    let parser = BBParser::new(test_styles(), TagTransform::Apply);
    let (output, errors) = parser.parse_with_diagnostics("[bold]unfinished");
    assert!(output.contains("unfinished"));
    assert!(
        !errors.is_empty(),
        "Expected errors for unbalanced tag '[bold]unfinished'"
    );
    let error_str = errors.to_string();
    assert!(
        error_str.contains("unbalanced") || error_str.contains("unexpected"),
        "Error message should mention unbalanced/unexpected tag. Got: {}",
        error_str
    );
}

#[test]
fn test_unexpected_close_raises_error() {
    let parser = BBParser::new(test_styles(), TagTransform::Apply);
    let (output, errors) = parser.parse_with_diagnostics("text[/bold]");
    assert_eq!(output, "text");
    assert!(
        !errors.is_empty(),
        "Expected errors for unexpected close tag 'text[/bold]'"
    );
}

#[test]
fn test_wrapped_lines_apply_independently() {
    let parser = BBParser::new(test_styles(), TagTransform::Apply);
    for line in parser.wrap("[red]a long red sentence[/]", 6) {
        let (output, errors) = parser.parse_with_diagnostics(&line);
        assert!(errors.is_empty(), "{}: {}", line, errors);
        assert!(output.starts_with("\x1b[31m"), "{:?}", output);
        assert!(output.ends_with("\x1b[0m"), "{:?}", output);
    }
}
