//! Markdown Preview Renderer
//!
//! pulldown-cmark with:
//! - Tables, strikethrough and task lists
//! - Syntax highlighting for fenced code blocks (syntect)
//! - Images constrained to the preview pane

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

const THEME_NAME: &str = "InspiredGitHub";

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Result<&'static Theme, MarkdownError> {
    THEME_SET
        .get_or_init(ThemeSet::load_defaults)
        .themes
        .get(THEME_NAME)
        .ok_or_else(|| MarkdownError::MissingTheme(THEME_NAME.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownError {
    MissingTheme(String),
}

impl std::fmt::Display for MarkdownError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkdownError::MissingTheme(name) => write!(f, "Highlight theme not found: {}", name),
        }
    }
}

impl std::error::Error for MarkdownError {}

/// Convert a memo body to preview HTML
pub fn render_markdown(text: &str) -> Result<String, MarkdownError> {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser)?;
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    Ok(html_output)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
}

// State for the event transformer
enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
    InImage { dropped_depth: usize },
}

fn transform_events(parser: Parser<'_>) -> Result<Vec<Event<'_>>, MarkdownError> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) => Some(l.to_string()),
                        CodeBlockKind::Indented => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }

                Event::Start(Tag::Image { dest_url, .. }) => {
                    let html = format!(
                        r#"<img src="{}" style="max-width: 100%; display: block; border-radius: 4px;" />"#,
                        escape_html(&dest_url)
                    );
                    events.push(Event::Html(CowStr::from(html)));
                    // Drop the alt text events
                    state = State::InImage { dropped_depth: 0 };
                }

                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref())?;
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },

            State::InImage { ref mut dropped_depth } => match event {
                Event::Start(_) => *dropped_depth += 1,
                Event::End(_) => {
                    if *dropped_depth == 0 {
                        state = State::Normal;
                    } else {
                        *dropped_depth -= 1;
                    }
                }
                _ => {}
            },
        }
    }

    Ok(events)
}

fn highlight_code(code: &str, lang: Option<&str>) -> Result<String, MarkdownError> {
    let ss = get_syntax_set();
    let theme = get_theme()?;

    // Info strings like "rust,ignore" or "python title" name the language first
    let token = lang.and_then(|l| l.split(|c: char| c == ',' || c.is_whitespace()).next());
    let syntax = token
        .filter(|t| !t.is_empty())
        .and_then(|t| ss.find_syntax_by_token(t))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    Ok(highlighted_html_for_string(code, ss, syntax, theme).unwrap_or_else(|e| {
        log::warn!("[Markdown] Highlighting failed, showing plain code: {}", e);
        plain_code_block(code)
    }))
}

fn plain_code_block(code: &str) -> String {
    format!("<pre><code>{}</code></pre>", escape_html(code))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
