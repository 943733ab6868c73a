use autotranslate::TranslationBatch;
use colored::Colorize;
use std::fmt::Write;

/// Plain output: one translation per line, in input order
pub fn format_plain(batch: &TranslationBatch) -> String {
    let mut output = String::new();
    for text in batch.texts() {
        writeln!(output, "{}", text).ok();
    }
    output
}

/// Side-by-side output for interactive use
pub fn format_pretty(batch: &TranslationBatch) -> String {
    let mut output = String::new();
    writeln!(
        output,
        "{} {}",
        format!("{} → {}", batch.source_language, batch.target_language).cyan(),
        format!("[{}]", batch.service).dimmed()
    )
    .ok();

    for (i, item) in batch.translations.iter().enumerate() {
        writeln!(
            output,
            "  {}. {}  {}",
            (i + 1).to_string().yellow(),
            item.source,
            item.translated.green()
        )
        .ok();
    }
    output
}
