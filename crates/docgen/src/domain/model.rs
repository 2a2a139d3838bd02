//! Domain models for languages and generated pages.

use std::fmt;
use std::path::PathBuf;

/// Languages embedded in the bilingual source documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Fr,
    En,
}

impl Language {
    /// Both supported languages, in the order their fragments appear on a page.
    pub const ALL: [Language; 2] = [Language::Fr, Language::En];

    /// Marker tag as it appears in the `BEGIN:<TAG>` / `END:<TAG>` comments.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Fr => "FR",
            Language::En => "EN",
        }
    }

    /// Lowercase suffix used by the page chrome (`lang-fr`, `toc-en`, ...).
    pub fn css_suffix(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The fixed set of generated pages, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPage {
    Readme,
    References,
}

impl NavPage {
    pub const ALL: [NavPage; 2] = [NavPage::Readme, NavPage::References];

    /// Source document name inside the docs directory.
    pub fn source_file(&self) -> &'static str {
        match self {
            NavPage::Readme => "README.md",
            NavPage::References => "REFERENCES.md",
        }
    }

    /// Output file name, also the relative link target in the sidebar nav.
    pub fn html_file(&self) -> &'static str {
        match self {
            NavPage::Readme => "README.html",
            NavPage::References => "REFERENCES.html",
        }
    }

    /// Human-readable name used in the nav and page titles.
    pub fn label(&self) -> &'static str {
        match self {
            NavPage::Readme => "README",
            NavPage::References => "References",
        }
    }
}

/// One documentation page to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpec {
    pub title: String,
    pub nav: NavPage,
    pub source: PathBuf,
    pub destination: PathBuf,
}
