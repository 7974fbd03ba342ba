/// Splits raw input lines into argument vectors.
///
/// Quoting is a single toggle shared by `"` and `'`, so either kind closes a
/// region opened by the other. A backslash makes the next character literal,
/// inside or outside quotes. Unbalanced quotes and a trailing backslash are
/// accepted and whatever was collected is kept.
#[derive(Debug, Default)]
pub struct Tokenizer {
    tokens: Vec<String>,
    current: String,
    in_quotes: bool,
    escape_next: bool,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, c: char) {
        if self.escape_next {
            self.current.push(c);
            self.escape_next = false;
        } else if c == '\\' {
            self.escape_next = true;
        } else if c == '"' || c == '\'' {
            self.in_quotes = !self.in_quotes;
        } else if is_separator(c) && !self.in_quotes {
            self.flush();
        } else {
            self.current.push(c);
        }
    }

    pub fn finish(mut self) -> Vec<String> {
        self.flush();
        self.tokens
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.tokens.push(std::mem::take(&mut self.current));
        }
    }
}

// Same set as C's isspace in the default locale.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokenizer = Tokenizer::new();
    for c in line.chars() {
        tokenizer.feed(c);
    }
    tokenizer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        assert_eq!(tokenize("echo hello world"), vec!["echo", "hello", "world"]);
    }

    #[test]
    fn test_double_quotes_keep_spaces() {
        assert_eq!(
            tokenize("echo \"hello world\" foo"),
            vec!["echo", "hello world", "foo"]
        );
    }

    #[test]
    fn test_escaped_space() {
        assert_eq!(tokenize("echo a\\ b"), vec!["echo", "a b"]);
    }

    #[test]
    fn test_blank_lines() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
        assert!(tokenize("\x0B\x0C\r\n").is_empty());
    }

    #[test]
    fn test_runs_of_whitespace_collapse() {
        assert_eq!(tokenize("  ls\t -la   /tmp  "), vec!["ls", "-la", "/tmp"]);
    }

    #[test]
    fn test_quote_kinds_are_interchangeable() {
        assert_eq!(tokenize("echo 'a b\" c"), vec!["echo", "a b", "c"]);
        assert_eq!(tokenize("echo \"it's\""), vec!["echo", "its"]);
    }

    #[test]
    fn test_adjacent_quotes_produce_nothing() {
        assert_eq!(tokenize("a\"\"b"), vec!["ab"]);
        assert_eq!(tokenize("echo \"\" ''"), vec!["echo"]);
    }

    #[test]
    fn test_escape_inside_quotes() {
        assert_eq!(tokenize("echo \"say \\\"hi\\\"\""), vec!["echo", "say \"hi\""]);
        assert_eq!(tokenize("echo \\\\"), vec!["echo", "\\"]);
    }

    #[test]
    fn test_unterminated_input_is_tolerated() {
        assert_eq!(tokenize("echo \"a b"), vec!["echo", "a b"]);
        assert_eq!(tokenize("echo abc\\"), vec!["echo", "abc"]);
        assert_eq!(tokenize("echo \\"), vec!["echo"]);
    }

    #[test]
    fn test_unicode_passes_through() {
        assert_eq!(tokenize("echo 값 \"🦀 crab\""), vec!["echo", "값", "🦀 crab"]);
    }
}
