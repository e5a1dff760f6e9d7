use std::io::{self, Write};

use polyglot_translator::Notifier;
use polyglot_types::TranslationResult;

/// Prints notifications to stderr, the CLI's equivalent of inline alerts
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn error(&self, message: &str) {
        eprintln!("error: {}", message);
    }

    fn warning(&self, message: &str) {
        eprintln!("warning: {}", message);
    }
}

/// One block per provider, in dispatch order
pub fn render_result(out: &mut impl Write, result: &TranslationResult) -> io::Result<()> {
    for (index, (label, text)) in result.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "[{}]", label)?;
        writeln!(out, "{}", text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_result() {
        let mut result = TranslationResult::new();
        result.insert("DeepL Ver.", "안녕 세상");
        result.insert("GPT (gpt-4o) Ver.", "안녕, 세상");

        let mut out = Vec::new();
        render_result(&mut out, &result).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[DeepL Ver.]\n안녕 세상\n\n[GPT (gpt-4o) Ver.]\n안녕, 세상\n"
        );
    }
}
