//! Page Templates
//!
//! Every page is a handlebars template that defines an inline `page` partial
//! and then pulls in the shared `base` layout, which renders it. Sources are
//! compiled into the binary and registered once at startup.

use handlebars::{Handlebars, RenderError, TemplateError};
use serde_json::json;

const BASE: &str = include_str!("../../templates/base.html");
const HOME: &str = include_str!("../../templates/home.html");
const EXAMPLE: &str = include_str!("../../templates/example.html");
const READ: &str = include_str!("../../templates/read.html");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Example,
    Read,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Example, Page::Read];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Reading Room",
            Page::Example => "Example",
            Page::Read => "Read",
        }
    }

    fn template_name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Example => "example",
            Page::Read => "read",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Page::Home => HOME,
            Page::Example => EXAMPLE,
            Page::Read => READ,
        }
    }
}

/// Registered page templates, shared by all handlers.
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string("base", BASE)?;
        for page in Page::ALL {
            handlebars.register_template_string(page.template_name(), page.source())?;
        }

        Ok(Self { handlebars })
    }

    /// Renders a page that needs no data beyond its title.
    pub fn render(&self, page: Page) -> Result<String, RenderError> {
        self.render_with_documents(page, "{}")
    }

    /// Renders the reader page with the serialized registry embedded for the
    /// client-side script.
    pub fn render_read(&self, documents_json: &str) -> Result<String, RenderError> {
        self.render_with_documents(Page::Read, documents_json)
    }

    fn render_with_documents(&self, page: Page, documents_json: &str) -> Result<String, RenderError> {
        let data = json!({
            "title": page.title(),
            "documents_data": escape_script_json(documents_json),
        });
        self.handlebars.render(page.template_name(), &data)
    }
}

/// Makes JSON safe to inline in a `<script>` element.
///
/// The escapes are valid inside JSON strings, so the payload still parses to
/// the same value.
pub fn escape_script_json(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            _ => escaped.push(c),
        }
    }
    escaped
}
