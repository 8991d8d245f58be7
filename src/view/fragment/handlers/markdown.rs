// Markdown fragment handler

use crate::style;
use crate::view::fragment::handler::{FragmentContext, FragmentHandler};
use eframe::egui;
use pulldown_cmark::{Event as MarkdownEvent, HeadingLevel, Parser, Tag, TagEnd};

pub struct MarkdownFragmentHandler;

impl MarkdownFragmentHandler {
    pub fn new() -> Self {
        Self
    }
}

fn flush_text(ui: &mut egui::Ui, buf: &mut String) {
    if !buf.trim().is_empty() {
        ui.label(buf.trim_end().to_string());
    }
    buf.clear();
}

impl FragmentHandler for MarkdownFragmentHandler {
    fn name(&self) -> &str {
        "markdown"
    }

    fn can_render(&self, resource: &str, _markup: &str) -> bool {
        let resource = resource.to_lowercase();
        resource.ends_with(".md") || resource.ends_with(".markdown")
    }

    fn priority(&self) -> i32 {
        10
    }

    fn render(
        &self,
        ui: &mut egui::Ui,
        markup: &str,
        context: &FragmentContext,
    ) -> Result<(), String> {
        let parser = Parser::new(markup);
        let mut text_buf = String::new();
        let mut code_buf = String::new();
        let mut in_code_block = false;
        let mut heading_level = 1usize;
        let mut in_heading = false;
        // (destination, accumulated label) of the link being walked
        let mut link: Option<(String, String)> = None;

        for event in parser {
            match event {
                MarkdownEvent::Start(tag) => match tag {
                    Tag::Heading { level, .. } => {
                        flush_text(ui, &mut text_buf);
                        in_heading = true;
                        heading_level = match level {
                            HeadingLevel::H1 => 1,
                            HeadingLevel::H2 => 2,
                            HeadingLevel::H3 => 3,
                            HeadingLevel::H4 => 4,
                            HeadingLevel::H5 => 5,
                            HeadingLevel::H6 => 6,
                        };
                    }
                    Tag::CodeBlock(_) => {
                        flush_text(ui, &mut text_buf);
                        in_code_block = true;
                    }
                    Tag::Link { dest_url, .. } => {
                        flush_text(ui, &mut text_buf);
                        link = Some((dest_url.to_string(), String::new()));
                    }
                    Tag::Item => {
                        flush_text(ui, &mut text_buf);
                        text_buf.push_str("• ");
                    }
                    _ => {}
                },
                MarkdownEvent::End(tag) => match tag {
                    TagEnd::Heading(_) => {
                        if in_heading {
                            ui.add_space(6.0);
                            ui.label(
                                egui::RichText::new(text_buf.trim())
                                    .size(style::heading_size(heading_level))
                                    .strong(),
                            );
                            ui.add_space(2.0);
                            text_buf.clear();
                            in_heading = false;
                        }
                    }
                    TagEnd::CodeBlock => {
                        if !code_buf.is_empty() {
                            ui.add_space(4.0);
                            ui.label(
                                egui::RichText::new(code_buf.trim_end()).monospace(),
                            );
                            ui.add_space(4.0);
                            code_buf.clear();
                        }
                        in_code_block = false;
                    }
                    TagEnd::Link => {
                        if let Some((dest, label)) = link.take() {
                            if ui.link(label).clicked() {
                                context.follow_link(&dest);
                            }
                        }
                    }
                    TagEnd::Paragraph | TagEnd::Item => {
                        flush_text(ui, &mut text_buf);
                        ui.add_space(2.0);
                    }
                    _ => {}
                },
                MarkdownEvent::Text(t) => {
                    if in_code_block {
                        code_buf.push_str(&t);
                    } else if let Some((_, label)) = link.as_mut() {
                        label.push_str(&t);
                    } else {
                        text_buf.push_str(&t);
                    }
                }
                MarkdownEvent::Code(t) => {
                    if let Some((_, label)) = link.as_mut() {
                        label.push_str(&t);
                    } else {
                        text_buf.push_str(&t);
                    }
                }
                MarkdownEvent::SoftBreak => text_buf.push(' '),
                MarkdownEvent::HardBreak => text_buf.push('\n'),
                MarkdownEvent::Rule => {
                    flush_text(ui, &mut text_buf);
                    ui.separator();
                }
                _ => {}
            }
        }
        flush_text(ui, &mut text_buf);
        Ok(())
    }
}
