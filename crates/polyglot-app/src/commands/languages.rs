use std::io::Write;

use polyglot_types::LanguageCatalog;

use super::Outcome;

pub fn handle_languages(out: &mut impl Write) -> anyhow::Result<Outcome> {
    writeln!(out, "Source languages:")?;
    for lang in LanguageCatalog::source_languages() {
        writeln!(out, "  {:<6} {}", lang.code, lang.name)?;
    }

    writeln!(out)?;
    writeln!(out, "Target languages:")?;
    for lang in LanguageCatalog::target_languages() {
        writeln!(out, "  {:<6} {}", lang.code, lang.name)?;
    }

    Ok(Outcome::Done)
}
