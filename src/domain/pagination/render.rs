//! HTML rendering for the pagination control

use std::fmt;

use maud::{html, Markup, PreEscaped, Render};

use super::paginator::Paginator;

/// Labels for the fixed navigation links. Inserted as markup, unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkLabels {
    pub first: String,
    pub previous: String,
    pub next: String,
    pub last: String,
}

impl Default for LinkLabels {
    fn default() -> Self {
        Self {
            first: "First".to_string(),
            previous: r#"<i class="material-icons">chevron_left</i>"#.to_string(),
            next: r#"<i class="material-icons">chevron_right</i>"#.to_string(),
            last: "Last".to_string(),
        }
    }
}

/// Rendered `<ul class="pagination">` fragment, ready to embed in a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationHtml(String);

impl PaginationHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PaginationHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PaginationHtml> for String {
    fn from(html: PaginationHtml) -> Self {
        html.0
    }
}

impl Render for PaginationHtml {
    fn render(&self) -> Markup {
        PreEscaped(self.0.clone())
    }
}

fn nav_item(url: &str, label: &str) -> Markup {
    html! { li { a href=(url) { (PreEscaped(label)) } } }
}

fn page_item(url: &str, number: u64, is_current: bool) -> Markup {
    html! {
        @if is_current {
            li class="active" { a href=(url) { (number) } }
        } @else {
            li { a href=(url) { (number) } }
        }
    }
}

impl Paginator {
    /// Render the pagination control with the default labels.
    pub fn render_html(&self) -> PaginationHtml {
        self.render_html_with(&LinkLabels::default())
    }

    /// Render the pagination control.
    ///
    /// An empty window renders nothing and a one-page window renders only
    /// the current page. Otherwise the window is framed by first/previous
    /// and next/last links. Hrefs are escaped; labels are not.
    pub fn render_html_with(&self, labels: &LinkLabels) -> PaginationHtml {
        let links = self.page_links();

        let markup = match links.as_slice() {
            [] => return PaginationHtml::default(),
            [only] => html! {
                ul class="pagination" {
                    "\n" (page_item(only.url(), only.number(), true)) "\n"
                }
            },
            _ => html! {
                ul class="pagination" {
                    "\n" (nav_item(&self.first_url(), &labels.first))
                    "\n" (nav_item(&self.previous_url(), &labels.previous))
                    "\n"
                    @for link in &links {
                        (page_item(link.url(), link.number(), link.is_current()))
                    }
                    "\n" (nav_item(&self.next_url(), &labels.next))
                    "\n" (nav_item(&self.last_url(), &labels.last))
                    "\n"
                }
                "\n"
            },
        };

        PaginationHtml(markup.into_string())
    }
}
