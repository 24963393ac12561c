#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParagraphKind {
    /// Slide title, from `<h1>`.
    Title,
    /// Section heading, from `<h2>`..`<h6>`.
    Heading,
    /// Plain paragraph text.
    Body,
    /// Unordered list item. `level` is the nesting depth, zero-based.
    Bullet { level: u8 },
    /// Ordered list item. `level` is the nesting depth, zero-based.
    Numbered { level: u8 },
}

/// Content extracted from one HTML document, in document order.
#[derive(Debug, Default)]
pub struct Slide {
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug)]
pub struct Paragraph {
    pub kind: ParagraphKind,
    pub runs: Vec<Run>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Run {
    /// Run text. Embedded `\n` marks an explicit line break within the
    /// paragraph (`<br>` or preformatted text).
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl Slide {
    /// Text of the first title paragraph, if the document has one.
    pub fn title_text(&self) -> Option<String> {
        let para = self
            .paragraphs
            .iter()
            .find(|p| p.kind == ParagraphKind::Title)?;
        let mut text = String::new();
        for run in &para.runs {
            text.push_str(&run.text);
        }
        Some(text.replace('\n', " "))
    }
}
