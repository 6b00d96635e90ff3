//! Markdown rendering for assistant answers.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// Render GitHub-flavoured markdown (tables, strikethrough, task lists) to HTML.
///
/// Raw HTML in the input is dropped and link or image targets outside
/// `http`, `https`, `mailto` and relative URLs are blanked: answers come from
/// a model and are injected with `inner_html`.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let events = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Link { link_type, dest_url: safe_destination(dest_url), title, id }))
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Image { link_type, dest_url: safe_destination(dest_url), title, id }))
        }
        other => Some(other),
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

fn safe_destination(url: CowStr<'_>) -> CowStr<'_> {
    if is_allowed_url(&url) { url } else { CowStr::Borrowed("") }
}

/// True for relative URLs and for `http`, `https` and `mailto` targets.
///
/// Whitespace and control characters are ignored when reading the scheme,
/// as browsers do (`java\tscript:` is still `javascript:`).
fn is_allowed_url(url: &str) -> bool {
    let cleaned: String = url.chars().filter(|c| !c.is_whitespace() && !c.is_control()).collect();
    let Some(colon) = cleaned.find(':') else {
        return true;
    };
    let scheme = &cleaned[..colon];
    if scheme.contains(['/', '?', '#']) {
        return true;
    }
    matches!(scheme.to_ascii_lowercase().as_str(), "http" | "https" | "mailto")
}
