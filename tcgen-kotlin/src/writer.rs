//! Indenting writer for Kotlin source

use std::fmt::Display;

const INDENT: &str = "    ";

/// Accumulates Kotlin source line by line, tracking block indentation
#[derive(Debug, Default)]
pub struct KotlinWriter {
    buf: String,
    depth: usize,
}

impl KotlinWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current indentation
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    pub fn blank(&mut self) {
        self.line("");
    }

    /// `header {` ... `}`
    pub fn block(&mut self, header: &str, body: impl FnOnce(&mut Self)) {
        self.delimited(&format!("{} {{", header), "}", body);
    }

    /// Write `open`, the indented body, then `close`
    pub fn delimited(&mut self, open: &str, close: &str, body: impl FnOnce(&mut Self)) {
        self.line(open);
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.line(close);
    }

    /// `key = "value"`
    pub fn assign_str(&mut self, key: &str, value: &str) {
        self.line(format!("{} = {}", key, string_literal(value)));
    }

    /// `key = value` for non-string values
    pub fn assign(&mut self, key: &str, value: impl Display) {
        self.line(format!("{} = {}", key, value));
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Quote and escape a value as a Kotlin string literal
///
/// `$` is escaped so TeamCity scripts such as `$(goenv local)` are not read
/// as Kotlin string templates. TeamCity `%param%` references pass through.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("plain"), "\"plain\"");
        assert_eq!(string_literal("a \"b\""), r#""a \"b\"""#);
        assert_eq!(string_literal("$(goenv local)"), r#""\$(goenv local)""#);
        assert_eq!(string_literal("back\\slash"), r#""back\\slash""#);
        assert_eq!(string_literal("line\nbreak"), r#""line\nbreak""#);
        assert_eq!(string_literal("%env.TF_ACC%"), "\"%env.TF_ACC%\"");
    }

    #[test]
    fn test_nested_blocks() {
        let mut w = KotlinWriter::new();
        w.block("vcs", |w| {
            w.assign_str("name", "x");
            w.blank();
            w.assign("cleanCheckout", true);
        });

        assert_eq!(
            w.finish(),
            "vcs {\n    name = \"x\"\n\n    cleanCheckout = true\n}\n"
        );
    }
}
