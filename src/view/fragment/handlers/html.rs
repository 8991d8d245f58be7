// HTML fragment handler
//
// Fragments are trusted to be self-contained markup. The corpus carries no
// HTML parser, so presentation is a best-effort flattening into headings,
// paragraphs, bullets and links; the verbatim markup itself lives in the
// region state, not here.

use crate::style;
use crate::view::fragment::handler::{FragmentContext, FragmentHandler};
use eframe::egui;

pub struct HtmlFragmentHandler;

impl HtmlFragmentHandler {
    pub fn new() -> Self {
        Self
    }
}

/// A flattened piece of fragment content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: usize, text: String },
    Paragraph(String),
    Bullet(String),
    Link { href: String, text: String },
}

#[derive(Clone, Copy, PartialEq)]
enum Container {
    Paragraph,
    Heading(usize),
    Bullet,
}

struct Flattener {
    blocks: Vec<Block>,
    text: String,
    container: Container,
    link: Option<(String, String)>,
    skip_until: Option<&'static str>,
}

impl Flattener {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            text: String::new(),
            container: Container::Paragraph,
            link: None,
            skip_until: None,
        }
    }

    fn push_text(&mut self, raw: &str) {
        if self.skip_until.is_some() {
            return;
        }
        let unescaped = unescape(raw);
        let target = match self.link.as_mut() {
            Some((_, label)) => label,
            None => &mut self.text,
        };
        // Collapse runs of whitespace the way rendered HTML does
        for word in unescaped.split_whitespace() {
            if !target.is_empty() && !target.ends_with('\n') {
                target.push(' ');
            }
            target.push_str(word);
        }
    }

    fn flush(&mut self) {
        let text = std::mem::take(&mut self.text);
        if text.trim().is_empty() {
            return;
        }
        let text = text.trim().to_string();
        let block = match self.container {
            Container::Heading(level) => Block::Heading { level, text },
            Container::Bullet => Block::Bullet(text),
            Container::Paragraph => Block::Paragraph(text),
        };
        self.blocks.push(block);
    }

    fn handle_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        let closing = tag.starts_with('/');
        let body = tag.trim_start_matches('/');
        let name: String = body
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        if let Some(until) = self.skip_until {
            if closing && name == until {
                self.skip_until = None;
            }
            return;
        }

        match name.as_str() {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.flush();
                if closing {
                    self.container = Container::Paragraph;
                } else {
                    let level = name[1..].parse().unwrap_or(1);
                    self.container = Container::Heading(level);
                }
            }
            "p" | "div" | "section" | "article" | "ul" | "ol" | "table" | "tr" => {
                self.flush();
                self.container = Container::Paragraph;
            }
            "li" => {
                self.flush();
                self.container = if closing {
                    Container::Paragraph
                } else {
                    Container::Bullet
                };
            }
            "br" => {
                self.text.push('\n');
            }
            "a" => {
                if closing {
                    if let Some((href, text)) = self.link.take() {
                        self.flush();
                        self.blocks.push(Block::Link { href, text });
                    }
                } else {
                    self.flush();
                    let href = attr_value(body, "href").unwrap_or_default();
                    self.link = Some((href, String::new()));
                }
            }
            "script" | "style" => {
                if !closing {
                    self.skip_until = Some(if name == "script" { "script" } else { "style" });
                }
            }
            _ => {}
        }
    }
}

/// Flatten fragment markup into renderable blocks.
pub fn flatten(markup: &str) -> Vec<Block> {
    let mut flattener = Flattener::new();
    let mut rest = markup;

    while let Some(lt) = rest.find('<') {
        flattener.push_text(&rest[..lt]);
        match rest[lt..].find('>') {
            Some(gt) => {
                flattener.handle_tag(&rest[lt + 1..lt + gt]);
                rest = &rest[lt + gt + 1..];
            }
            None => {
                // Unterminated tag: treat the remainder as text
                flattener.push_text(&rest[lt..]);
                rest = "";
                break;
            }
        }
    }
    flattener.push_text(rest);
    flattener.flush();
    flattener.blocks
}

fn attr_value(tag_body: &str, attr: &str) -> Option<String> {
    let lower = tag_body.to_ascii_lowercase();
    let at = lower.find(&format!("{}=", attr))?;
    let rest = &tag_body[at + attr.len() + 1..];
    let (quote, rest) = match rest.chars().next() {
        Some(q @ ('"' | '\'')) => (q, &rest[1..]),
        _ => (' ', rest),
    };
    let end = rest.find(quote).unwrap_or(rest.len());
    Some(rest[..end].to_string())
}

fn unescape(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

impl FragmentHandler for HtmlFragmentHandler {
    fn name(&self) -> &str {
        "html"
    }

    fn can_render(&self, resource: &str, markup: &str) -> bool {
        let resource = resource.to_lowercase();
        resource.ends_with(".html")
            || resource.ends_with(".htm")
            || markup.trim_start().starts_with('<')
    }

    fn priority(&self) -> i32 {
        20
    }

    fn render(
        &self,
        ui: &mut egui::Ui,
        markup: &str,
        context: &FragmentContext,
    ) -> Result<(), String> {
        for block in flatten(markup) {
            match block {
                Block::Heading { level, text } => {
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(text)
                            .size(style::heading_size(level))
                            .strong(),
                    );
                    ui.add_space(2.0);
                }
                Block::Paragraph(text) => {
                    ui.label(text);
                    ui.add_space(2.0);
                }
                Block::Bullet(text) => {
                    ui.label(format!("• {}", text));
                }
                Block::Link { href, text } => {
                    let label = if text.is_empty() { href.clone() } else { text };
                    if ui.link(label).clicked() {
                        context.follow_link(&href);
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_headings_and_paragraphs() {
        let blocks = flatten("<section><h2>Blog</h2><p>Primera entrada</p></section>");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 2,
                    text: "Blog".to_string()
                },
                Block::Paragraph("Primera entrada".to_string()),
            ]
        );
    }

    #[test]
    fn test_flatten_unescapes_entities() {
        let blocks = flatten("<p>Fish &amp; chips &lt;hoy&gt;</p>");
        assert_eq!(
            blocks,
            vec![Block::Paragraph("Fish & chips <hoy>".to_string())]
        );
    }

    #[test]
    fn test_flatten_collapses_whitespace() {
        let blocks = flatten("<p>uno\n   dos\t tres</p>");
        assert_eq!(blocks, vec![Block::Paragraph("uno dos tres".to_string())]);
    }

    #[test]
    fn test_flatten_extracts_links() {
        let blocks = flatten(r#"<p>Ver <a href="?view=blog">el blog</a></p>"#);
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph("Ver".to_string()),
                Block::Link {
                    href: "?view=blog".to_string(),
                    text: "el blog".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_flatten_list_items() {
        let blocks = flatten("<ul><li>uno</li><li>dos</li></ul>");
        assert_eq!(
            blocks,
            vec![
                Block::Bullet("uno".to_string()),
                Block::Bullet("dos".to_string()),
            ]
        );
    }

    #[test]
    fn test_flatten_skips_script_and_style() {
        let blocks = flatten("<p>antes</p><script>var x = 1;</script><p>después</p>");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph("antes".to_string()),
                Block::Paragraph("después".to_string()),
            ]
        );
    }

    #[test]
    fn test_flatten_plain_text_without_tags() {
        let blocks = flatten("solo texto");
        assert_eq!(blocks, vec![Block::Paragraph("solo texto".to_string())]);
    }

    #[test]
    fn test_attr_value_quoting_styles() {
        assert_eq!(
            attr_value(r#"a href="x.html" class="q""#, "href"),
            Some("x.html".to_string())
        );
        assert_eq!(
            attr_value("a href='y.html'", "href"),
            Some("y.html".to_string())
        );
        assert_eq!(attr_value("a class='q'", "href"), None);
    }
}
