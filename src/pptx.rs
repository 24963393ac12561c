// PresentationML package writer.
//
// A Presentation owns slide content and a layout preset and serializes
// itself as a minimal Office Open XML package: content types, package
// relationships, document properties, one blank slide master/layout pair,
// the default theme, and one slide part per slide. All XML is emitted
// directly; nothing here parses XML back.

use std::io::{Cursor, Write};
use std::path::Path;

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::Error;
use crate::model::{Paragraph, ParagraphKind, Slide};

const A_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const P_NS: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const CT_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

// Page geometry in EMU (914400 per inch).
const MARGIN: u32 = 457_200;
const TITLE_HEIGHT: u32 = 914_400;
const TITLE_GAP: u32 = 114_300;
const LIST_INDENT: u32 = 342_900;

// Font sizes in hundredths of a point.
const TITLE_SZ: u32 = 3200;
const HEADING_SZ: u32 = 2400;
const BODY_SZ: u32 = 1800;

/// Slide size preset. The four values PptxGenJS-style generators accept,
/// with their exact EMU dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// 10 x 7.5 in.
    Screen4x3,
    /// 10 x 5.625 in. The widescreen default.
    #[default]
    Screen16x9,
    /// 10 x 6.25 in.
    Screen16x10,
    /// 13.33 x 7.5 in.
    Wide,
}

impl Layout {
    /// Slide size as (cx, cy) in EMU.
    pub fn emu(self) -> (u32, u32) {
        match self {
            Layout::Screen4x3 => (9_144_000, 6_858_000),
            Layout::Screen16x9 => (9_144_000, 5_143_500),
            Layout::Screen16x10 => (9_144_000, 5_715_000),
            Layout::Wide => (12_192_000, 6_858_000),
        }
    }

    /// Value of the `p:sldSz` type attribute; `Wide` is a custom size.
    fn size_type(self) -> Option<&'static str> {
        match self {
            Layout::Screen4x3 => Some("screen4x3"),
            Layout::Screen16x9 => Some("screen16x9"),
            Layout::Screen16x10 => Some("screen16x10"),
            Layout::Wide => None,
        }
    }

    fn format_name(self) -> &'static str {
        match self {
            Layout::Screen4x3 => "On-screen Show (4:3)",
            Layout::Screen16x9 => "On-screen Show (16:9)",
            Layout::Screen16x10 => "On-screen Show (16:10)",
            Layout::Wide => "Widescreen",
        }
    }
}

/// An in-memory presentation. Append slides with [`add_slide`], then
/// serialize with [`to_bytes`] or [`write_file`].
///
/// [`add_slide`]: Presentation::add_slide
/// [`to_bytes`]: Presentation::to_bytes
/// [`write_file`]: Presentation::write_file
pub struct Presentation {
    layout: Layout,
    slides: Vec<Slide>,
}

impl Presentation {
    pub fn new(layout: Layout) -> Self {
        Presentation {
            layout,
            slides: Vec::new(),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Render the complete `.pptx` package in memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let n = self.slides.len();

        put(&mut zip, "[Content_Types].xml", &content_types(n))?;
        put(&mut zip, "_rels/.rels", &package_rels())?;
        put(&mut zip, "docProps/core.xml", &core_props(self.deck_title().as_deref()))?;
        put(&mut zip, "docProps/app.xml", &app_props(self.layout, n))?;
        put(&mut zip, "ppt/presentation.xml", &presentation_xml(self.layout, n))?;
        put(&mut zip, "ppt/_rels/presentation.xml.rels", &presentation_rels(n))?;
        put(&mut zip, "ppt/slideMasters/slideMaster1.xml", &slide_master_xml())?;
        put(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            &slide_master_rels(),
        )?;
        put(&mut zip, "ppt/slideLayouts/slideLayout1.xml", &slide_layout_xml())?;
        put(
            &mut zip,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            &slide_layout_rels(),
        )?;
        put(&mut zip, "ppt/theme/theme1.xml", &theme_xml())?;

        for (i, slide) in self.slides.iter().enumerate() {
            let part = format!("ppt/slides/slide{}.xml", i + 1);
            put(&mut zip, &part, &slide_xml(slide, self.layout))?;
            let rels = format!("ppt/slides/_rels/slide{}.xml.rels", i + 1);
            put(&mut zip, &rels, &slide_rels())?;
        }

        let bytes = zip.finish()?.into_inner();
        log::debug!("rendered {} slide(s), {} bytes", n, bytes.len());
        Ok(bytes)
    }

    /// Serialize to `path`. The parent directory must already exist.
    pub fn write_file(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.is_dir()
        {
            return Err(Error::OutputDir(parent.to_path_buf()));
        }
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes).map_err(Error::Io)
    }

    /// Presentation title for the core properties: the first slide's title.
    fn deck_title(&self) -> Option<String> {
        self.slides.first().and_then(|s| s.title_text())
    }
}

fn put(zip: &mut ZipWriter<Cursor<Vec<u8>>>, name: &str, xml: &str) -> Result<(), Error> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(name, options)?;
    zip.write_all(xml.as_bytes())?;
    Ok(())
}

fn xmlns() -> String {
    format!("xmlns:a=\"{A_NS}\" xmlns:r=\"{R_NS}\" xmlns:p=\"{P_NS}\"")
}

fn content_types(slide_count: usize) -> String {
    let mut out = String::from(XML_DECL);
    out.push_str(&format!("<Types xmlns=\"{CT_NS}\">"));
    out.push_str(
        "<Default Extension=\"rels\" \
         ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
         <Default Extension=\"xml\" ContentType=\"application/xml\"/>\
         <Override PartName=\"/ppt/presentation.xml\" \
         ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml\"/>\
         <Override PartName=\"/ppt/slideMasters/slideMaster1.xml\" \
         ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml\"/>\
         <Override PartName=\"/ppt/slideLayouts/slideLayout1.xml\" \
         ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml\"/>\
         <Override PartName=\"/ppt/theme/theme1.xml\" \
         ContentType=\"application/vnd.openxmlformats-officedocument.theme+xml\"/>",
    );
    for i in 1..=slide_count {
        out.push_str(&format!(
            "<Override PartName=\"/ppt/slides/slide{i}.xml\" \
             ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>"
        ));
    }
    out.push_str(
        "<Override PartName=\"/docProps/core.xml\" \
         ContentType=\"application/vnd.openxmlformats-package.core-properties+xml\"/>\
         <Override PartName=\"/docProps/app.xml\" \
         ContentType=\"application/vnd.openxmlformats-officedocument.extended-properties+xml\"/>\
         </Types>",
    );
    out
}

fn package_rels() -> String {
    format!(
        "{XML_DECL}<Relationships xmlns=\"{REL_NS}\">\
         <Relationship Id=\"rId1\" Type=\"{R_NS}/officeDocument\" Target=\"ppt/presentation.xml\"/>\
         <Relationship Id=\"rId2\" \
         Type=\"{REL_NS}/metadata/core-properties\" Target=\"docProps/core.xml\"/>\
         <Relationship Id=\"rId3\" Type=\"{R_NS}/extended-properties\" Target=\"docProps/app.xml\"/>\
         </Relationships>"
    )
}

fn core_props(title: Option<&str>) -> String {
    let title_el = match title {
        Some(t) => format!("<dc:title>{}</dc:title>", xml_escape(t)),
        None => String::new(),
    };
    format!(
        "{XML_DECL}<cp:coreProperties \
         xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
         xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\
         {title_el}<dc:creator>html2pptx</dc:creator>\
         <cp:lastModifiedBy>html2pptx</cp:lastModifiedBy>\
         </cp:coreProperties>"
    )
}

fn app_props(layout: Layout, slide_count: usize) -> String {
    format!(
        "{XML_DECL}<Properties \
         xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\">\
         <PresentationFormat>{}</PresentationFormat>\
         <Slides>{slide_count}</Slides>\
         <Application>html2pptx</Application>\
         </Properties>",
        layout.format_name()
    )
}

fn presentation_xml(layout: Layout, slide_count: usize) -> String {
    let (cx, cy) = layout.emu();
    let size_type = match layout.size_type() {
        Some(t) => format!(" type=\"{t}\""),
        None => String::new(),
    };
    let mut slide_ids = String::new();
    for i in 0..slide_count {
        // Slide ids are arbitrary but must be unique and >= 256.
        slide_ids.push_str(&format!("<p:sldId id=\"{}\" r:id=\"rId{}\"/>", 256 + i, 2 + i));
    }
    format!(
        "{XML_DECL}<p:presentation {}>\
         <p:sldMasterIdLst><p:sldMasterId id=\"2147483648\" r:id=\"rId1\"/></p:sldMasterIdLst>\
         <p:sldIdLst>{slide_ids}</p:sldIdLst>\
         <p:sldSz cx=\"{cx}\" cy=\"{cy}\"{size_type}/>\
         <p:notesSz cx=\"6858000\" cy=\"9144000\"/>\
         </p:presentation>",
        xmlns()
    )
}

fn presentation_rels(slide_count: usize) -> String {
    let mut out = String::from(XML_DECL);
    out.push_str(&format!("<Relationships xmlns=\"{REL_NS}\">"));
    out.push_str(&format!(
        "<Relationship Id=\"rId1\" Type=\"{R_NS}/slideMaster\" \
         Target=\"slideMasters/slideMaster1.xml\"/>"
    ));
    for i in 0..slide_count {
        out.push_str(&format!(
            "<Relationship Id=\"rId{}\" Type=\"{R_NS}/slide\" Target=\"slides/slide{}.xml\"/>",
            2 + i,
            1 + i
        ));
    }
    out.push_str("</Relationships>");
    out
}

fn slide_master_xml() -> String {
    format!(
        "{XML_DECL}<p:sldMaster {}>\
         <p:cSld><p:spTree>\
         <p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
         <p:grpSpPr/>\
         </p:spTree></p:cSld>\
         <p:clrMap bg1=\"lt1\" tx1=\"dk1\" bg2=\"lt2\" tx2=\"dk2\" \
         accent1=\"accent1\" accent2=\"accent2\" accent3=\"accent3\" accent4=\"accent4\" \
         accent5=\"accent5\" accent6=\"accent6\" hlink=\"hlink\" folHlink=\"folHlink\"/>\
         <p:sldLayoutIdLst><p:sldLayoutId id=\"2147483649\" r:id=\"rId1\"/></p:sldLayoutIdLst>\
         </p:sldMaster>",
        xmlns()
    )
}

fn slide_master_rels() -> String {
    format!(
        "{XML_DECL}<Relationships xmlns=\"{REL_NS}\">\
         <Relationship Id=\"rId1\" Type=\"{R_NS}/slideLayout\" \
         Target=\"../slideLayouts/slideLayout1.xml\"/>\
         <Relationship Id=\"rId2\" Type=\"{R_NS}/theme\" Target=\"../theme/theme1.xml\"/>\
         </Relationships>"
    )
}

fn slide_layout_xml() -> String {
    format!(
        "{XML_DECL}<p:sldLayout {} type=\"blank\">\
         <p:cSld name=\"Blank\"><p:spTree>\
         <p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
         <p:grpSpPr/>\
         </p:spTree></p:cSld>\
         <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
         </p:sldLayout>",
        xmlns()
    )
}

fn slide_layout_rels() -> String {
    format!(
        "{XML_DECL}<Relationships xmlns=\"{REL_NS}\">\
         <Relationship Id=\"rId1\" Type=\"{R_NS}/slideMaster\" \
         Target=\"../slideMasters/slideMaster1.xml\"/>\
         </Relationships>"
    )
}

/// Minimal Office default theme: color scheme, font scheme and the three
/// mandatory format-scheme style lists.
fn theme_xml() -> String {
    let mut out = String::from(XML_DECL);
    out.push_str(&format!("<a:theme xmlns:a=\"{A_NS}\" name=\"Office Theme\"><a:themeElements>"));
    out.push_str(
        "<a:clrScheme name=\"Office\">\
         <a:dk1><a:sysClr val=\"windowText\" lastClr=\"000000\"/></a:dk1>\
         <a:lt1><a:sysClr val=\"window\" lastClr=\"FFFFFF\"/></a:lt1>\
         <a:dk2><a:srgbClr val=\"44546A\"/></a:dk2>\
         <a:lt2><a:srgbClr val=\"E7E6E6\"/></a:lt2>\
         <a:accent1><a:srgbClr val=\"4472C4\"/></a:accent1>\
         <a:accent2><a:srgbClr val=\"ED7D31\"/></a:accent2>\
         <a:accent3><a:srgbClr val=\"A5A5A5\"/></a:accent3>\
         <a:accent4><a:srgbClr val=\"FFC000\"/></a:accent4>\
         <a:accent5><a:srgbClr val=\"5B9BD5\"/></a:accent5>\
         <a:accent6><a:srgbClr val=\"70AD47\"/></a:accent6>\
         <a:hlink><a:srgbClr val=\"0563C1\"/></a:hlink>\
         <a:folHlink><a:srgbClr val=\"954F72\"/></a:folHlink>\
         </a:clrScheme>",
    );
    out.push_str(
        "<a:fontScheme name=\"Office\">\
         <a:majorFont><a:latin typeface=\"Calibri Light\"/><a:ea typeface=\"\"/>\
         <a:cs typeface=\"\"/></a:majorFont>\
         <a:minorFont><a:latin typeface=\"Calibri\"/><a:ea typeface=\"\"/>\
         <a:cs typeface=\"\"/></a:minorFont>\
         </a:fontScheme>",
    );
    out.push_str(
        "<a:fmtScheme name=\"Office\">\
         <a:fillStyleLst>\
         <a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
         <a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
         <a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
         </a:fillStyleLst>\
         <a:lnStyleLst>\
         <a:ln w=\"6350\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>\
         <a:ln w=\"12700\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>\
         <a:ln w=\"19050\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>\
         </a:lnStyleLst>\
         <a:effectStyleLst>\
         <a:effectStyle><a:effectLst/></a:effectStyle>\
         <a:effectStyle><a:effectLst/></a:effectStyle>\
         <a:effectStyle><a:effectLst/></a:effectStyle>\
         </a:effectStyleLst>\
         <a:bgFillStyleLst>\
         <a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
         <a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
         <a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
         </a:bgFillStyleLst>\
         </a:fmtScheme>",
    );
    out.push_str("</a:themeElements></a:theme>");
    out
}

fn slide_rels() -> String {
    format!(
        "{XML_DECL}<Relationships xmlns=\"{REL_NS}\">\
         <Relationship Id=\"rId1\" Type=\"{R_NS}/slideLayout\" \
         Target=\"../slideLayouts/slideLayout1.xml\"/>\
         </Relationships>"
    )
}

fn slide_xml(slide: &Slide, layout: Layout) -> String {
    let (page_w, page_h) = layout.emu();
    let box_w = page_w - 2 * MARGIN;

    let title_idx = slide
        .paragraphs
        .iter()
        .position(|p| p.kind == ParagraphKind::Title);

    let mut shapes = String::new();
    let mut body_top = MARGIN;

    if let Some(idx) = title_idx {
        let mut text = String::new();
        push_paragraph(&mut text, &slide.paragraphs[idx], TITLE_SZ);
        push_text_box(&mut shapes, 2, "Title 1", MARGIN, MARGIN, box_w, TITLE_HEIGHT, &text);
        body_top = MARGIN + TITLE_HEIGHT + TITLE_GAP;
    }

    let mut body = String::new();
    for (i, para) in slide.paragraphs.iter().enumerate() {
        if Some(i) == title_idx {
            continue;
        }
        let sz = match para.kind {
            // Later titles and headings share the heading size.
            ParagraphKind::Title | ParagraphKind::Heading => HEADING_SZ,
            _ => BODY_SZ,
        };
        push_paragraph(&mut body, para, sz);
    }
    if !body.is_empty() {
        let body_h = page_h.saturating_sub(body_top + MARGIN);
        push_text_box(&mut shapes, 3, "Content 2", MARGIN, body_top, box_w, body_h, &body);
    }

    format!(
        "{XML_DECL}<p:sld {}>\
         <p:cSld><p:spTree>\
         <p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
         <p:grpSpPr/>\
         {shapes}\
         </p:spTree></p:cSld>\
         <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
         </p:sld>",
        xmlns()
    )
}

fn push_text_box(
    out: &mut String,
    id: u32,
    name: &str,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    paragraphs: &str,
) {
    out.push_str(&format!(
        "<p:sp><p:nvSpPr>\
         <p:cNvPr id=\"{id}\" name=\"{name}\"/>\
         <p:cNvSpPr txBox=\"1\"/><p:nvPr/>\
         </p:nvSpPr>\
         <p:spPr>\
         <a:xfrm><a:off x=\"{x}\" y=\"{y}\"/><a:ext cx=\"{w}\" cy=\"{h}\"/></a:xfrm>\
         <a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom>\
         </p:spPr>\
         <p:txBody><a:bodyPr wrap=\"square\"><a:normAutofit/></a:bodyPr><a:lstStyle/>\
         {paragraphs}\
         </p:txBody></p:sp>"
    ));
}

fn push_paragraph(out: &mut String, para: &Paragraph, sz: u32) {
    out.push_str("<a:p>");
    match para.kind {
        ParagraphKind::Bullet { level } => {
            push_list_ppr(out, level, "<a:buChar char=\"\u{2022}\"/>");
        }
        ParagraphKind::Numbered { level } => {
            push_list_ppr(out, level, "<a:buAutoNum type=\"arabicPeriod\"/>");
        }
        _ => out.push_str("<a:pPr><a:buNone/></a:pPr>"),
    }
    for run in &para.runs {
        let b = if run.bold { " b=\"1\"" } else { "" };
        let i = if run.italic { " i=\"1\"" } else { "" };
        let mut first = true;
        for segment in run.text.split('\n') {
            if !first {
                out.push_str("<a:br/>");
            }
            first = false;
            if segment.is_empty() {
                continue;
            }
            out.push_str(&format!(
                "<a:r><a:rPr lang=\"en-US\" sz=\"{sz}\"{b}{i} dirty=\"0\"/>\
                 <a:t>{}</a:t></a:r>",
                xml_escape(segment)
            ));
        }
    }
    out.push_str("</a:p>");
}

fn push_list_ppr(out: &mut String, level: u8, bullet: &str) {
    let mar_l = LIST_INDENT * (u32::from(level) + 1);
    let lvl = if level > 0 {
        format!(" lvl=\"{level}\"")
    } else {
        String::new()
    };
    out.push_str(&format!(
        "<a:pPr marL=\"{mar_l}\" indent=\"-{LIST_INDENT}\"{lvl}>{bullet}</a:pPr>"
    ));
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            // Control characters are not representable in XML 1.0.
            c if c.is_control() && c != '\t' && c != '\n' => {}
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Run;

    fn run(text: &str) -> Run {
        Run {
            text: text.to_string(),
            bold: false,
            italic: false,
        }
    }

    fn para(kind: ParagraphKind, text: &str) -> Paragraph {
        Paragraph {
            kind,
            runs: vec![run(text)],
        }
    }

    #[test]
    fn layout_dimensions_match_presets() {
        assert_eq!(Layout::Screen4x3.emu(), (9_144_000, 6_858_000));
        assert_eq!(Layout::Screen16x9.emu(), (9_144_000, 5_143_500));
        assert_eq!(Layout::Screen16x10.emu(), (9_144_000, 5_715_000));
        assert_eq!(Layout::Wide.emu(), (12_192_000, 6_858_000));
        assert_eq!(Layout::default(), Layout::Screen16x9);
    }

    #[test]
    fn wide_layout_has_no_size_type() {
        assert_eq!(Layout::Screen16x9.size_type(), Some("screen16x9"));
        assert_eq!(Layout::Wide.size_type(), None);
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(xml_escape("a < b & c > \"d\""), "a &lt; b &amp; c &gt; &quot;d&quot;");
        assert_eq!(xml_escape("control\u{7}char"), "controlchar");
    }

    #[test]
    fn title_paragraph_gets_its_own_shape() {
        let slide = Slide {
            paragraphs: vec![
                para(ParagraphKind::Title, "Heading"),
                para(ParagraphKind::Body, "Body text"),
            ],
        };
        let xml = slide_xml(&slide, Layout::Screen16x9);
        assert!(xml.contains("name=\"Title 1\""));
        assert!(xml.contains("name=\"Content 2\""));
        assert!(xml.contains("sz=\"3200\""));
        assert!(xml.contains("sz=\"1800\""));
        assert!(xml.contains("<a:t>Heading</a:t>"));
    }

    #[test]
    fn slide_without_title_has_single_body_box() {
        let slide = Slide {
            paragraphs: vec![para(ParagraphKind::Body, "only body")],
        };
        let xml = slide_xml(&slide, Layout::Screen16x9);
        assert!(!xml.contains("Title 1"));
        assert!(xml.contains("name=\"Content 2\""));
        // Body starts at the page margin when there is no title.
        assert!(xml.contains("<a:off x=\"457200\" y=\"457200\"/>"));
    }

    #[test]
    fn bullets_and_numbering() {
        let slide = Slide {
            paragraphs: vec![
                para(ParagraphKind::Bullet { level: 0 }, "point"),
                para(ParagraphKind::Bullet { level: 1 }, "subpoint"),
                para(ParagraphKind::Numbered { level: 0 }, "step"),
            ],
        };
        let xml = slide_xml(&slide, Layout::Screen16x9);
        assert!(xml.contains("<a:buChar char=\"\u{2022}\"/>"));
        assert!(xml.contains(" lvl=\"1\""));
        assert!(xml.contains("<a:buAutoNum type=\"arabicPeriod\"/>"));
    }

    #[test]
    fn embedded_newline_becomes_line_break() {
        let slide = Slide {
            paragraphs: vec![para(ParagraphKind::Body, "one\ntwo")],
        };
        let xml = slide_xml(&slide, Layout::Screen16x9);
        assert!(xml.contains("<a:t>one</a:t></a:r><a:br/><a:r>"));
    }

    #[test]
    fn bold_italic_run_properties() {
        let slide = Slide {
            paragraphs: vec![Paragraph {
                kind: ParagraphKind::Body,
                runs: vec![Run {
                    text: "emphasis".to_string(),
                    bold: true,
                    italic: true,
                }],
            }],
        };
        let xml = slide_xml(&slide, Layout::Screen16x9);
        assert!(xml.contains(" b=\"1\" i=\"1\""));
    }

    #[test]
    fn content_types_list_every_slide() {
        let ct = content_types(3);
        assert!(ct.contains("/ppt/slides/slide1.xml"));
        assert!(ct.contains("/ppt/slides/slide3.xml"));
        assert!(!ct.contains("/ppt/slides/slide4.xml"));
    }

    #[test]
    fn presentation_xml_carries_layout_size() {
        let xml = presentation_xml(Layout::Screen16x9, 1);
        assert!(xml.contains("<p:sldSz cx=\"9144000\" cy=\"5143500\" type=\"screen16x9\"/>"));
        let wide = presentation_xml(Layout::Wide, 1);
        assert!(wide.contains("<p:sldSz cx=\"12192000\" cy=\"6858000\"/>"));
    }

    #[test]
    fn empty_presentation_still_renders() {
        let pptx = Presentation::new(Layout::Screen16x9);
        let bytes = pptx.to_bytes().expect("render");
        assert!(!bytes.is_empty());
        // ZIP local file header magic.
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn deck_title_comes_from_first_slide() {
        let mut pptx = Presentation::new(Layout::Screen16x9);
        pptx.add_slide(Slide {
            paragraphs: vec![para(ParagraphKind::Title, "Quarterly Review")],
        });
        assert_eq!(pptx.deck_title().as_deref(), Some("Quarterly Review"));
        let props = core_props(pptx.deck_title().as_deref());
        assert!(props.contains("<dc:title>Quarterly Review</dc:title>"));
    }
}
