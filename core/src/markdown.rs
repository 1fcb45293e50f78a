//! Plain-text rendering of markdown document content.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Renders markdown to plain text suitable for a terminal.
///
/// Headings and paragraphs become lines, list items are bulleted, inline
/// and block code is kept verbatim. Formatting-only markup (emphasis,
/// links) is dropped, leaving the text itself.
pub fn to_plain_text(markdown: &str) -> String {
    let options: Options = [Options::ENABLE_GFM].into_iter().collect();
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::new();
    for event in parser {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Start(Tag::Item) => out.push_str("- "),
            Event::End(TagEnd::Heading(_))
            | Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::Item)
            | Event::End(TagEnd::CodeBlock) => out.push('\n'),
            _ => {}
        }
    }
    out.trim_end().to_string()
}
