//! Markdown to HTML conversion with heading anchors and a table of contents.
//!
//! pulldown-cmark handles the CommonMark core (including fenced code blocks
//! and consistent list parsing); tables are enabled on top. Heading ids and
//! the nested table-of-contents list are assembled from the event stream
//! before the HTML is pushed.

use std::collections::HashMap;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

/// Rendered output of one language block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// HTML fragment for the block's content.
    pub html: String,
    /// Nested list of links to the heading anchors; empty when the block has
    /// no headings.
    pub toc: String,
}

/// Convert a Markdown fragment to HTML plus its table-of-contents fragment.
pub fn render(markdown: &str) -> Rendered {
    let events: Vec<Event<'_>> = Parser::new_ext(markdown, Options::ENABLE_TABLES).collect();

    let mut slugs = SlugCounter::default();
    let mut headings = Vec::new();
    let mut output: Vec<Event<'_>> = Vec::with_capacity(events.len() + 8);

    let mut index = 0;
    while index < events.len() {
        match &events[index] {
            Event::Start(Tag::Heading {
                level,
                id: _,
                classes,
                attrs,
            }) => {
                let end = events[index + 1..]
                    .iter()
                    .position(|event| matches!(event, Event::End(TagEnd::Heading(_))))
                    .map(|offset| index + 1 + offset)
                    .unwrap_or(events.len() - 1);

                let text = heading_text(&events[index + 1..end]);
                let slug = slugs.assign(&text);
                headings.push(TocEntry {
                    level: *level,
                    slug: slug.clone(),
                    text,
                });

                output.push(Event::Start(Tag::Heading {
                    level: *level,
                    id: Some(slug.clone().into()),
                    classes: classes.clone(),
                    attrs: attrs.clone(),
                }));
                output.extend(events[index + 1..end].iter().cloned());
                output.push(Event::InlineHtml(permalink(&slug).into()));
                output.push(events[end].clone());
                index = end + 1;
            }
            event => {
                output.push(event.clone());
                index += 1;
            }
        }
    }

    let mut html_out = String::new();
    html::push_html(&mut html_out, output.into_iter());

    Rendered {
        html: html_out,
        toc: toc_fragment(&headings),
    }
}

/// Escape `&`, `<`, `>`, and `"` for embedding text in HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

struct TocEntry {
    level: HeadingLevel,
    slug: String,
    text: String,
}

/// Assigns unique anchor slugs, deduplicating repeats with `_1`, `_2`, ...
#[derive(Default)]
struct SlugCounter {
    seen: HashMap<String, usize>,
}

impl SlugCounter {
    fn assign(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.seen.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 {
            base.clone()
        } else {
            format!("{base}_{count}")
        };
        *count += 1;
        slug
    }
}

fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else if ch.is_whitespace() || ch == '-' {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("section");
    }
    slug
}

fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(chunk) | Event::Code(chunk) => text.push_str(chunk),
            _ => {}
        }
    }
    text
}

fn permalink(slug: &str) -> String {
    format!(r##"<a class="headerlink" href="#{slug}" title="Permanent link">&para;</a>"##)
}

fn toc_fragment(entries: &[TocEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let base = entries
        .iter()
        .map(|entry| entry.level as u8)
        .min()
        .unwrap_or(1);

    let mut out = String::from("<div class=\"toc\">\n<ul>\n");
    let mut prev = 0u8;
    for entry in entries {
        // Relative rank, clamped so the list never skips a nesting level.
        let mut rank = (entry.level as u8).saturating_sub(base) + 1;
        if prev > 0 {
            rank = rank.min(prev + 1);
        } else {
            rank = 1;
        }

        if prev == 0 {
            // First entry opens nothing extra.
        } else if rank > prev {
            out.push_str("\n<ul>\n");
        } else if rank < prev {
            for _ in rank..prev {
                out.push_str("</li>\n</ul>\n");
            }
            out.push_str("</li>\n");
        } else {
            out.push_str("</li>\n");
        }

        out.push_str(&format!(
            "<li><a href=\"#{}\">{}</a>",
            entry.slug,
            escape_html(&entry.text)
        ));
        prev = rank;
    }

    for _ in 1..prev {
        out.push_str("</li>\n</ul>\n");
    }
    out.push_str("</li>\n</ul>\n</div>");
    out
}
