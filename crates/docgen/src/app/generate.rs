//! Site generation driver: output directory, icon copy, then each page.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::app::page::PageRenderer;
use crate::domain::model::{NavPage, PageSpec};
use crate::infra::config::Config;

/// Generates the full documentation set for one project root.
///
/// Steps run strictly in order and the first failure aborts the remainder;
/// re-running the generator is the recovery mechanism, and unchanged inputs
/// produce byte-identical outputs.
pub struct Generator {
    root: PathBuf,
    config: Config,
}

impl Generator {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Run the whole generation: output directory, icon, then both pages.
    pub fn run(&self) -> Result<()> {
        let out_dir = self.root.join(self.config.site.docs_dir());
        fs::create_dir_all(&out_dir).with_context(|| {
            format!("failed to create output directory {}", out_dir.display())
        })?;

        let icon = self.copy_icon(&out_dir)?;

        let renderer = PageRenderer::new(&self.config, icon)?;
        for page in self.pages(&out_dir) {
            tracing::debug!(source = %page.source.display(), "rendering page");
            renderer.render_page(&page)?;
        }

        tracing::info!(out_dir = %out_dir.display(), "documentation generated");
        Ok(())
    }

    /// Copy the icon byte-for-byte into the docs directory and return the
    /// file name it was published under.
    fn copy_icon(&self, out_dir: &Path) -> Result<String> {
        let source = self.root.join(self.config.site.icon());
        let name = source
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_owned)
            .ok_or_else(|| anyhow!("icon path has no file name: {}", source.display()))?;

        let destination = out_dir.join(&name);
        fs::copy(&source, &destination).with_context(|| {
            format!(
                "failed to copy icon from {} to {}",
                source.display(),
                destination.display()
            )
        })?;
        Ok(name)
    }

    fn pages(&self, out_dir: &Path) -> Vec<PageSpec> {
        NavPage::ALL
            .iter()
            .map(|nav| PageSpec {
                title: format!("{} — {}", self.config.site.name(), nav.label()),
                nav: *nav,
                source: out_dir.join(nav.source_file()),
                destination: out_dir.join(nav.html_file()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_cover_both_documents_in_order() {
        let generator = Generator::new("/project", Config::default());
        let pages = generator.pages(Path::new("/project/docs"));

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].nav, NavPage::Readme);
        assert_eq!(pages[0].title, "Battery Manager — README");
        assert_eq!(pages[0].source, Path::new("/project/docs/README.md"));
        assert_eq!(pages[0].destination, Path::new("/project/docs/README.html"));
        assert_eq!(pages[1].nav, NavPage::References);
        assert_eq!(pages[1].source, Path::new("/project/docs/REFERENCES.md"));
    }

    #[test]
    fn missing_icon_fails_before_any_page_write() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::write(
            root.join("docs/README.md"),
            "<!-- BEGIN:FR -->a<!-- END:FR --><!-- BEGIN:EN -->b<!-- END:EN -->",
        )
        .unwrap();

        let generator = Generator::new(root, Config::default());
        let err = generator.run().unwrap_err();
        assert!(err.to_string().contains("icon"));
        assert!(!root.join("docs/README.html").exists());
    }
}
