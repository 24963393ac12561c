// HTML → slide content model.
//
// html5ever parses the document into an RcDom; a single walk over the tree
// collects paragraphs and styled runs. Only document structure is read:
// headings, paragraphs, lists, emphasis, line breaks. CSS and visual layout
// are never interpreted.

use html5ever::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::model::{Paragraph, ParagraphKind, Run, Slide};

/// Deepest list level PresentationML can express (`lvl` runs 0..=8).
const MAX_LIST_LEVEL: u8 = 8;

/// Extract the slide content of one HTML document.
pub fn to_slide(html: &str) -> Slide {
    let dom = parse_html(html);
    let mut walker = Walker::new();
    walker.walk(&dom.document);
    let slide = walker.into_slide();
    log::debug!("extracted {} paragraph(s)", slide.paragraphs.len());
    slide
}

fn parse_html(html: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };
    parse_document(RcDom::default(), opts)
        .from_utf8()
        .one(html.as_bytes())
}

fn get_attr(handle: &Handle, name: &str) -> Option<String> {
    if let NodeData::Element { ref attrs, .. } = handle.data {
        for attr in attrs.borrow().iter() {
            if attr.name.local.as_ref() == name {
                return Some(attr.value.to_string());
            }
        }
    }
    None
}

enum ListKind {
    Unordered,
    Ordered,
}

struct Walker {
    paragraphs: Vec<Paragraph>,
    /// Runs of the paragraph currently being assembled.
    runs: Vec<Run>,
    kind: ParagraphKind,
    bold: u32,
    italic: u32,
    pre: u32,
    lists: Vec<ListKind>,
}

impl Walker {
    fn new() -> Self {
        Walker {
            paragraphs: Vec::new(),
            runs: Vec::new(),
            kind: ParagraphKind::Body,
            bold: 0,
            italic: 0,
            pre: 0,
            lists: Vec::new(),
        }
    }

    fn into_slide(mut self) -> Slide {
        self.flush();
        Slide {
            paragraphs: self.paragraphs,
        }
    }

    fn walk(&mut self, handle: &Handle) {
        match &handle.data {
            NodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                self.append_text(&text);
            }
            NodeData::Element { name, .. } => {
                let tag = name.local.as_ref();
                self.element(handle, tag);
            }
            NodeData::Document => self.walk_children(handle),
            // Comments, doctypes, processing instructions.
            _ => {}
        }
    }

    fn walk_children(&mut self, handle: &Handle) {
        let children = handle.children.borrow();
        for child in children.iter() {
            self.walk(child);
        }
    }

    fn element(&mut self, handle: &Handle, tag: &str) {
        match tag {
            // Never contribute slide content.
            "script" | "style" | "head" | "title" | "meta" | "link" | "template" | "input"
            | "textarea" | "select" | "iframe" | "object" | "embed" | "svg" | "math" => {}

            "h1" => self.block(handle, ParagraphKind::Title),
            "h2" | "h3" | "h4" | "h5" | "h6" => self.block(handle, ParagraphKind::Heading),

            "p" => {
                // A <p> inside a list item stays part of the item (loose lists).
                let kind = match self.kind {
                    k @ (ParagraphKind::Bullet { .. } | ParagraphKind::Numbered { .. }) => k,
                    _ => ParagraphKind::Body,
                };
                self.block(handle, kind);
            }

            "ul" | "dir" => self.list(handle, ListKind::Unordered),
            "ol" => self.list(handle, ListKind::Ordered),
            "li" | "dt" | "dd" => {
                let kind = self.item_kind();
                self.block(handle, kind);
            }

            "pre" => {
                self.pre += 1;
                self.block(handle, ParagraphKind::Body);
                self.pre -= 1;
            }

            // Paragraph break, current role unchanged.
            "div" | "section" | "article" | "header" | "footer" | "main" | "nav" | "aside"
            | "figure" | "figcaption" | "blockquote" | "address" | "hgroup" | "details"
            | "summary" | "table" | "thead" | "tbody" | "tfoot" | "tr" | "dl" => {
                self.flush();
                self.walk_children(handle);
                self.flush();
            }

            // Table cells flow into the row's paragraph, space-separated.
            "td" | "th" => {
                self.push_separator();
                self.walk_children(handle);
            }

            "b" | "strong" => {
                self.bold += 1;
                self.walk_children(handle);
                self.bold -= 1;
            }
            "i" | "em" => {
                self.italic += 1;
                self.walk_children(handle);
                self.italic -= 1;
            }

            "br" => self.append_break(),
            "hr" => self.flush(),

            "img" | "image" => match get_attr(handle, "src") {
                Some(src) => log::warn!("image not converted: {src}"),
                None => log::warn!("image without src skipped"),
            },

            // Everything else (span, a, code, u, sub, sup, ...) is
            // transparent inline content.
            _ => self.walk_children(handle),
        }
    }

    /// Emit all children of `handle` as one paragraph of the given kind.
    fn block(&mut self, handle: &Handle, kind: ParagraphKind) {
        self.flush();
        let saved = std::mem::replace(&mut self.kind, kind);
        self.walk_children(handle);
        self.flush();
        self.kind = saved;
    }

    fn list(&mut self, handle: &Handle, kind: ListKind) {
        self.flush();
        self.lists.push(kind);
        self.walk_children(handle);
        self.lists.pop();
        self.flush();
    }

    fn item_kind(&self) -> ParagraphKind {
        let level = self
            .lists
            .len()
            .saturating_sub(1)
            .min(MAX_LIST_LEVEL as usize) as u8;
        match self.lists.last() {
            Some(ListKind::Ordered) => ParagraphKind::Numbered { level },
            // A stray <li> outside any list still renders as a bullet.
            _ => ParagraphKind::Bullet { level },
        }
    }

    /// True at a point where leading whitespace would be invisible.
    fn at_boundary(&self) -> bool {
        match self.runs.last() {
            None => true,
            Some(run) => run.text.ends_with([' ', '\n']),
        }
    }

    fn append_text(&mut self, raw: &str) {
        if self.pre > 0 {
            self.append_verbatim(raw);
            return;
        }
        let mut out = String::new();
        let mut prev_space = self.at_boundary();
        for ch in raw.chars() {
            // Only ASCII whitespace collapses; U+00A0 and friends are content.
            if ch.is_ascii_whitespace() {
                if !prev_space {
                    out.push(' ');
                    prev_space = true;
                }
            } else {
                out.push(ch);
                prev_space = false;
            }
        }
        self.push_run(out);
    }

    fn append_verbatim(&mut self, raw: &str) {
        // The newline right after <pre> is presentational, not content.
        let raw = if self.runs.is_empty() {
            raw.trim_start_matches('\n')
        } else {
            raw
        };
        let out: String = raw
            .chars()
            .filter(|&c| c == '\n' || c == '\t' || !c.is_control())
            .collect();
        self.push_run(out);
    }

    fn push_run(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        let bold = self.bold > 0;
        let italic = self.italic > 0;
        if let Some(last) = self.runs.last_mut()
            && last.bold == bold
            && last.italic == italic
        {
            last.text.push_str(&text);
        } else {
            self.runs.push(Run { text, bold, italic });
        }
    }

    /// Explicit line break (`<br>`) within the current paragraph.
    fn append_break(&mut self) {
        if let Some(last) = self.runs.last_mut() {
            last.text.push('\n');
        }
    }

    fn push_separator(&mut self) {
        if !self.at_boundary()
            && let Some(last) = self.runs.last_mut()
        {
            last.text.push(' ');
        }
    }

    /// Close the open paragraph, dropping it if nothing visible accumulated.
    fn flush(&mut self) {
        loop {
            let Some(last) = self.runs.last_mut() else {
                break;
            };
            let trimmed = last
                .text
                .trim_end_matches(|c: char| c.is_ascii_whitespace())
                .len();
            if trimmed == 0 {
                self.runs.pop();
            } else {
                last.text.truncate(trimmed);
                break;
            }
        }
        if self.runs.is_empty() {
            return;
        }
        let runs = std::mem::take(&mut self.runs);
        self.paragraphs.push(Paragraph {
            kind: self.kind,
            runs,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(para: &Paragraph) -> String {
        para.runs.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn empty_document_has_no_paragraphs() {
        let slide = to_slide("");
        assert!(slide.paragraphs.is_empty());
    }

    #[test]
    fn paragraphs_and_title() {
        let slide = to_slide("<h1>My Talk</h1><p>First point.</p><p>Second point.</p>");
        assert_eq!(slide.paragraphs.len(), 3);
        assert_eq!(slide.paragraphs[0].kind, ParagraphKind::Title);
        assert_eq!(text_of(&slide.paragraphs[0]), "My Talk");
        assert_eq!(slide.paragraphs[1].kind, ParagraphKind::Body);
        assert_eq!(text_of(&slide.paragraphs[2]), "Second point.");
        assert_eq!(slide.title_text().as_deref(), Some("My Talk"));
    }

    #[test]
    fn subheadings_are_headings() {
        let slide = to_slide("<h2>Agenda</h2><h3>Details</h3>");
        assert!(
            slide
                .paragraphs
                .iter()
                .all(|p| p.kind == ParagraphKind::Heading)
        );
    }

    #[test]
    fn whitespace_collapses() {
        let slide = to_slide("<p>  Hello\n\t  world  </p>");
        assert_eq!(text_of(&slide.paragraphs[0]), "Hello world");
    }

    #[test]
    fn nbsp_is_content_not_collapsible_whitespace() {
        let slide = to_slide("<p>a&nbsp;&nbsp;b</p>");
        assert_eq!(text_of(&slide.paragraphs[0]), "a\u{a0}\u{a0}b");
    }

    #[test]
    fn nbsp_only_paragraph_survives() {
        let slide = to_slide("<p>one</p><p>&nbsp;</p><p>two</p>");
        assert_eq!(slide.paragraphs.len(), 3);
        assert_eq!(text_of(&slide.paragraphs[1]), "\u{a0}");
    }

    #[test]
    fn comments_are_ignored() {
        let slide = to_slide("<p>a<!-- hidden -->b</p>");
        assert_eq!(slide.paragraphs.len(), 1);
        assert_eq!(text_of(&slide.paragraphs[0]), "ab");
    }

    #[test]
    fn bold_and_italic_set_run_flags() {
        let slide = to_slide("<p>plain <b>bold</b> and <em>italic</em></p>");
        let runs = &slide.paragraphs[0].runs;
        assert_eq!(runs.len(), 4);
        assert!(!runs[0].bold && !runs[0].italic);
        assert!(runs[1].bold && runs[1].text == "bold");
        assert!(runs[3].italic && runs[3].text == "italic");
    }

    #[test]
    fn nested_emphasis_merges_adjacent_runs() {
        let slide = to_slide("<p><b>one</b><strong>two</strong></p>");
        let runs = &slide.paragraphs[0].runs;
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "onetwo");
        assert!(runs[0].bold);
    }

    #[test]
    fn unordered_list_levels() {
        let slide = to_slide("<ul><li>a</li><li>b<ul><li>b1</li></ul></li></ul>");
        let kinds: Vec<_> = slide.paragraphs.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ParagraphKind::Bullet { level: 0 },
                ParagraphKind::Bullet { level: 0 },
                ParagraphKind::Bullet { level: 1 },
            ]
        );
        assert_eq!(text_of(&slide.paragraphs[2]), "b1");
    }

    #[test]
    fn ordered_list_is_numbered() {
        let slide = to_slide("<ol><li>first</li><li>second</li></ol>");
        assert_eq!(
            slide.paragraphs[0].kind,
            ParagraphKind::Numbered { level: 0 }
        );
        assert_eq!(slide.paragraphs.len(), 2);
    }

    #[test]
    fn paragraph_inside_list_item_keeps_bullet_kind() {
        let slide = to_slide("<ul><li><p>loose item</p></li></ul>");
        assert_eq!(slide.paragraphs.len(), 1);
        assert_eq!(slide.paragraphs[0].kind, ParagraphKind::Bullet { level: 0 });
    }

    #[test]
    fn br_becomes_embedded_newline() {
        let slide = to_slide("<p>line one<br>line two</p>");
        assert_eq!(text_of(&slide.paragraphs[0]), "line one\nline two");
    }

    #[test]
    fn pre_preserves_line_structure() {
        let slide = to_slide("<pre>fn main() {\n    run();\n}</pre>");
        assert_eq!(text_of(&slide.paragraphs[0]), "fn main() {\n    run();\n}");
    }

    #[test]
    fn script_and_style_are_ignored() {
        let slide = to_slide(
            "<style>p { color: red }</style><p>visible</p><script>alert('x')</script>",
        );
        assert_eq!(slide.paragraphs.len(), 1);
        assert_eq!(text_of(&slide.paragraphs[0]), "visible");
    }

    #[test]
    fn images_contribute_nothing() {
        let slide = to_slide("<p>before <img src=\"a.png\" alt=\"pic\"> after</p>");
        assert_eq!(text_of(&slide.paragraphs[0]), "before after");
    }

    #[test]
    fn table_rows_become_paragraphs() {
        let slide = to_slide("<table><tr><td>a</td><td>b</td></tr><tr><td>c</td></tr></table>");
        assert_eq!(slide.paragraphs.len(), 2);
        assert_eq!(text_of(&slide.paragraphs[0]), "a b");
        assert_eq!(text_of(&slide.paragraphs[1]), "c");
    }

    #[test]
    fn deep_nesting_caps_at_max_level() {
        let mut html = String::new();
        for _ in 0..12 {
            html.push_str("<ul><li>x");
        }
        for _ in 0..12 {
            html.push_str("</li></ul>");
        }
        let slide = to_slide(&html);
        let max = slide
            .paragraphs
            .iter()
            .filter_map(|p| match p.kind {
                ParagraphKind::Bullet { level } => Some(level),
                _ => None,
            })
            .max();
        assert_eq!(max, Some(MAX_LIST_LEVEL));
    }

    #[test]
    fn stray_text_is_body_content() {
        let slide = to_slide("just text, no markup");
        assert_eq!(slide.paragraphs.len(), 1);
        assert_eq!(slide.paragraphs[0].kind, ParagraphKind::Body);
        assert_eq!(text_of(&slide.paragraphs[0]), "just text, no markup");
    }
}
