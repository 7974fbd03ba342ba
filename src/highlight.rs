use inksac::prelude::*;

use crate::core::commands::BUILTINS;

/// Colors the line being edited. Only escape codes are added; the visible
/// text and its spacing stay exactly as typed.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    pub fn highlight_command(&self, input: &str) -> String {
        if !self.enabled() {
            return input.to_string();
        }

        let mut result = String::with_capacity(input.len());
        let mut seen_command = false;
        for (is_word, segment) in segments(input) {
            if !is_word {
                result.push_str(segment);
            } else if !seen_command {
                seen_command = true;
                let color = if BUILTINS.iter().any(|b| *b == segment) {
                    Color::Cyan
                } else {
                    Color::Green
                };
                let style = Style::builder().foreground(color).bold().build();
                result.push_str(&segment.style(style).to_string());
            } else if segment.starts_with('-') {
                let style = Style::builder().foreground(Color::Yellow).build();
                result.push_str(&segment.style(style).to_string());
            } else {
                result.push_str(segment);
            }
        }
        result
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if !self.enabled() {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();

        hint.style(hint_style).to_string()
    }
}

/// Splits `input` into alternating runs of whitespace and non-whitespace,
/// flagging the non-whitespace runs.
fn segments(input: &str) -> Vec<(bool, &str)> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_word = None;

    for (i, c) in input.char_indices() {
        let is_word = !c.is_whitespace();
        match in_word {
            Some(current) if current != is_word => {
                out.push((current, &input[start..i]));
                start = i;
                in_word = Some(is_word);
            }
            None => in_word = Some(is_word),
            _ => {}
        }
    }
    if let Some(current) = in_word {
        out.push((current, &input[start..]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_keep_spacing() {
        let parts = segments("  ls  -la x");
        assert_eq!(
            parts,
            vec![
                (false, "  "),
                (true, "ls"),
                (false, "  "),
                (true, "-la"),
                (false, " "),
                (true, "x"),
            ]
        );
        let joined: String = parts.iter().map(|(_, s)| *s).collect();
        assert_eq!(joined, "  ls  -la x");
    }

    #[test]
    fn test_plain_highlighter_is_identity() {
        let highlighter = SyntaxHighlighter::plain();
        assert_eq!(highlighter.highlight_command("echo  -n hi"), "echo  -n hi");
        assert_eq!(highlighter.highlight_hint("hint"), "hint");
    }

    #[test]
    fn test_segments_of_empty_line() {
        assert!(segments("").is_empty());
    }
}
