//! Extraction of per-language blocks from bilingual source documents.
//!
//! Each source document carries one region per language, delimited by
//! HTML-comment markers:
//!
//! ```text
//! <!-- BEGIN:FR -->
//! ...contenu français...
//! <!-- END:FR -->
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::errors::DomainError;
use crate::domain::model::Language;

static FR_BLOCK: Lazy<Regex> = Lazy::new(|| block_pattern(Language::Fr));
static EN_BLOCK: Lazy<Regex> = Lazy::new(|| block_pattern(Language::En));

fn block_pattern(lang: Language) -> Regex {
    let tag = lang.tag();
    Regex::new(&format!(
        r"(?s)<!--\s*BEGIN:{tag}\s*-->(.*?)<!--\s*END:{tag}\s*-->"
    ))
    .expect("block marker pattern is valid")
}

/// Return the contents of `lang`'s marker pair within `document`.
///
/// Only the first `BEGIN`..`END` pair is considered; a stray second `BEGIN`
/// before the first `END` is kept verbatim inside the capture. The result is
/// trimmed of surrounding whitespace and always ends with exactly one
/// newline, so fragments concatenate predictably.
///
/// `source` names the document in the error when the marker pair is absent.
pub fn language_block(
    document: &str,
    lang: Language,
    source: &str,
) -> Result<String, DomainError> {
    let pattern = match lang {
        Language::Fr => &FR_BLOCK,
        Language::En => &EN_BLOCK,
    };

    let captures = pattern
        .captures(document)
        .ok_or_else(|| DomainError::MissingBlock {
            language: lang,
            document: source.to_owned(),
        })?;

    let interior = captures.get(1).map_or("", |m| m.as_str());
    Ok(format!("{}\n", interior.trim()))
}
