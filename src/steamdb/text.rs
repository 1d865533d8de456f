//! Browser-like text rendering of table cells
//!
//! `ElementRef::text` concatenates text nodes, which glues an achievement's
//! title to its description. Cells are instead rendered with `<br>` and block
//! elements as line breaks, whitespace collapsed within each line, and blank
//! lines dropped.

use scraper::ElementRef;

/// Elements that start and end a line when rendered
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "blockquote", "div", "dl", "dt", "dd", "footer", "h1", "h2", "h3",
    "h4", "h5", "h6", "header", "hr", "li", "ol", "p", "pre", "section", "table", "tr", "ul",
];

/// Renders `element` to trimmed lines joined with `\n`
pub fn rendered_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(element, &mut raw);

    raw.split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            // Source newlines are layout, not content
            out.extend(text.chars().map(|c| if c.is_whitespace() { ' ' } else { c }));
        } else if let Some(child) = ElementRef::wrap(child) {
            let name = child.value().name();
            if name == "br" {
                out.push('\n');
                continue;
            }

            let block = BLOCK_ELEMENTS.contains(&name);
            if block {
                out.push('\n');
            }
            collect_text(child, out);
            if block {
                out.push('\n');
            }
        }
    }
}
