//! Text cleanup shared by the page parsers.

use scraper::{ElementRef, Node};

/// Collapses runs of whitespace (including `\u{a0}`) into single spaces and trims.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Rendered lines of an element: only `<br>` breaks a line, source
/// newlines inside text count as whitespace. Each line is cleaned and empty
/// lines are dropped.
pub fn element_lines(element: ElementRef<'_>) -> Vec<String> {
    let mut raw = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => raw.extend(
                text.chars()
                    .map(|c| if c.is_whitespace() { ' ' } else { c }),
            ),
            Node::Element(el) if el.name() == "br" => raw.push('\n'),
            _ => {}
        }
    }

    raw.lines()
        .map(clean_text)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Single-line text of an element.
pub fn element_text(element: ElementRef<'_>) -> String {
    element_lines(element).join(" ")
}

/// Cell text for the tableau matrix; line breaks become `" / "`.
pub fn cell_text(element: ElementRef<'_>) -> String {
    element_lines(element).join(" / ")
}
