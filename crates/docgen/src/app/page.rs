//! Page assembly: the fixed HTML chrome around rendered language fragments.

use std::fs;

use anyhow::{Context, Result};
use minijinja::Environment;
use serde::Serialize;

use crate::app::extract;
use crate::app::markdown;
use crate::domain::model::{Language, NavPage, PageSpec};
use crate::infra::config::Config;

const PAGE_TEMPLATE_NAME: &str = "page.html";

/// Renders one source document into its self-contained HTML page.
///
/// The chrome is identical across pages: sidebar with branding, FR/EN and
/// theme pills, the two-entry page nav, and per-language table-of-contents
/// slots. Only the title, the `aria-current` nav entry, and the fragments
/// vary.
pub struct PageRenderer {
    env: Environment<'static>,
    brand_name: String,
    brand_subtitle: String,
    stylesheet: String,
    icon: String,
}

impl PageRenderer {
    /// Create a renderer with the shell template registered.
    ///
    /// `icon` is the file name the icon is published under inside the docs
    /// directory; the template references it relatively.
    pub fn new(config: &Config, icon: String) -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
            .context("failed to register page template")?;

        Ok(Self {
            env,
            brand_name: config.site.name().to_owned(),
            brand_subtitle: config.site.subtitle().to_owned(),
            stylesheet: config.site.stylesheet().to_owned(),
            icon,
        })
    }

    /// Read, extract, convert, and template `page`, then write its output.
    ///
    /// Any failure aborts before the destination file is touched; the write
    /// itself is a straight overwrite.
    pub fn render_page(&self, page: &PageSpec) -> Result<()> {
        let text = fs::read_to_string(&page.source).with_context(|| {
            format!("failed to read source document {}", page.source.display())
        })?;

        let document = self.render_document(&text, page)?;

        fs::write(&page.destination, document).with_context(|| {
            format!("failed to write page to {}", page.destination.display())
        })?;
        tracing::info!(page = %page.destination.display(), "wrote page");
        Ok(())
    }

    /// Produce the full HTML document for `text` without touching the
    /// destination.
    fn render_document(&self, text: &str, page: &PageSpec) -> Result<String> {
        let source_name = page
            .source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| page.source.display().to_string());

        let mut fragments = Vec::with_capacity(Language::ALL.len());
        for lang in Language::ALL {
            let block = extract::language_block(text, lang, &source_name)?;
            let rendered = markdown::render(&block);
            tracing::debug!(
                document = %source_name,
                language = %lang,
                bytes = rendered.html.len(),
                "converted language block"
            );
            fragments.push(FragmentContext {
                lang: lang.css_suffix(),
                html: rendered.html,
                toc: rendered.toc,
            });
        }

        let nav = NavPage::ALL
            .iter()
            .map(|entry| NavEntry {
                href: entry.html_file(),
                label: entry.label(),
                current: *entry == page.nav,
            })
            .collect();

        let context = PageContext {
            title: &page.title,
            brand_name: &self.brand_name,
            brand_subtitle: &self.brand_subtitle,
            stylesheet: &self.stylesheet,
            icon: &self.icon,
            nav,
            fragments,
        };

        self.env
            .get_template(PAGE_TEMPLATE_NAME)
            .context("page template missing from environment")?
            .render(&context)
            .context("failed to render page template")
    }
}

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    brand_name: &'a str,
    brand_subtitle: &'a str,
    stylesheet: &'a str,
    icon: &'a str,
    nav: Vec<NavEntry>,
    fragments: Vec<FragmentContext>,
}

#[derive(Serialize)]
struct NavEntry {
    href: &'static str,
    label: &'static str,
    current: bool,
}

#[derive(Serialize)]
struct FragmentContext {
    lang: &'static str,
    html: String,
    toc: String,
}

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="fr">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{{ title }}</title>
  <link rel="stylesheet" href="{{ stylesheet }}" />
</head>
<body>
  <input class="docs-toggle" type="radio" name="lang" id="lang-fr" checked />
  <input class="docs-toggle" type="radio" name="lang" id="lang-en" />

  <input class="docs-toggle" type="radio" name="theme" id="theme-auto" checked />
  <input class="docs-toggle" type="radio" name="theme" id="theme-light" />
  <input class="docs-toggle" type="radio" name="theme" id="theme-dark" />

  <div class="app">
    <div class="layout">
      <aside class="sidebar" aria-label="Documentation navigation">
        <div class="brand">
          <img src="{{ icon }}" alt="{{ brand_name }}" />
          <div>
            <div class="title">{{ brand_name }}</div>
            <div class="subtitle">{{ brand_subtitle }}</div>
          </div>
        </div>

        <div class="controls">
          <div class="control-group">
            <div class="label">Langue / Language</div>
            <div class="pills" role="group" aria-label="Language">
              <label class="pill" for="lang-fr">FR</label>
              <label class="pill" for="lang-en">EN</label>
            </div>
          </div>

          <div class="control-group">
            <div class="label">Thème / Theme</div>
            <div class="pills" role="group" aria-label="Theme">
              <label class="pill" for="theme-auto">Auto</label>
              <label class="pill" for="theme-light">Clair</label>
              <label class="pill" for="theme-dark">Sombre</label>
            </div>
          </div>
        </div>

        <nav class="nav" aria-label="Pages">
          <div class="nav-title">Pages</div>
          {% for entry in nav %}
          <a href="{{ entry.href }}"{% if entry.current %} aria-current="page"{% endif %}>{{ entry.label }}</a>
          {% endfor %}
          <div class="nav-title">Sommaire</div>
          {% for fragment in fragments %}
          <div class="toc-{{ fragment.lang }}">{{ fragment.toc | safe }}</div>
          {% endfor %}
        </nav>
      </aside>

      <main class="content">
        {% for fragment in fragments %}
        <div class="lang lang-{{ fragment.lang }}">{{ fragment.html | safe }}</div>
        {% endfor %}
      </main>
    </div>
  </div>
</body>
</html>
"#;
