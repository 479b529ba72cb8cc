//! Output modes.

use std::fmt;
use std::str::FromStr;

use richwx_bbparser::TagTransform;

use crate::error::UnknownOutputMode;

/// How rendered markup reaches the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// ANSI styling when the terminal supports it, plain text otherwise.
    #[default]
    Auto,
    /// Always emit ANSI escape codes.
    Term,
    /// Never style; tags are stripped.
    Text,
    /// Leave markup tags and icon shortcodes in the output.
    TermDebug,
    /// Serialize command data as JSON instead of rendering it.
    Json,
}

impl OutputMode {
    pub const ALL: [OutputMode; 5] = [
        OutputMode::Auto,
        OutputMode::Term,
        OutputMode::Text,
        OutputMode::TermDebug,
        OutputMode::Json,
    ];

    /// Returns true if output should carry ANSI codes.
    ///
    /// `Auto` defers to console's detection, which honors `NO_COLOR`,
    /// `CLICOLOR_FORCE` and whether stdout is a terminal.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::TermDebug | OutputMode::Json => false,
        }
    }

    /// True for `TermDebug`, which shows tags instead of applying them.
    pub fn is_debug(&self) -> bool {
        matches!(self, OutputMode::TermDebug)
    }

    /// Returns true if commands should emit data rather than text.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }

    /// What the markup parser does with tags in this mode.
    pub fn transform(&self) -> TagTransform {
        if self.is_debug() {
            TagTransform::Keep
        } else if self.should_use_color() {
            TagTransform::Apply
        } else {
            TagTransform::Remove
        }
    }

    /// The flag value, e.g. `term-debug`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::TermDebug => "term-debug",
            OutputMode::Json => "json",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = UnknownOutputMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownOutputMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_all_modes() {
        for mode in OutputMode::ALL {
            assert_eq!(mode.as_str().parse::<OutputMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_parse_unknown_mode() {
        assert!("yaml".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_fixed_modes_ignore_terminal() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
        assert!(!OutputMode::Json.should_use_color());
        assert_eq!(OutputMode::TermDebug.transform(), TagTransform::Keep);
        assert_eq!(OutputMode::Text.transform(), TagTransform::Remove);
        assert_eq!(OutputMode::Term.transform(), TagTransform::Apply);
    }

    #[test]
    #[serial]
    fn test_auto_follows_console_detection() {
        let before = console::colors_enabled();

        console::set_colors_enabled(true);
        assert_eq!(OutputMode::Auto.transform(), TagTransform::Apply);
        console::set_colors_enabled(false);
        assert_eq!(OutputMode::Auto.transform(), TagTransform::Remove);

        console::set_colors_enabled(before);
    }

    #[test]
    fn test_structured() {
        assert!(OutputMode::Json.is_structured());
        assert!(!OutputMode::Auto.is_structured());
    }
}
