mod error;
mod html;
mod model;
mod pptx;

pub use error::Error;
pub use model::{Paragraph, ParagraphKind, Run, Slide};
pub use pptx::{Layout, Presentation};

use std::path::{Path, PathBuf};

/// Anything that can append slides to a presentation.
///
/// The pipeline only drives this trait, so other inputs (in-memory
/// strings, other markup formats) can plug in without changing it.
pub trait SlideSource {
    fn populate(&self, pptx: &mut Presentation) -> Result<(), Error>;
}

/// An HTML file on disk. Each file contributes exactly one slide, so
/// populating one presentation from several files builds a deck.
pub struct HtmlFile {
    path: PathBuf,
}

impl HtmlFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HtmlFile { path: path.into() }
    }
}

impl SlideSource for HtmlFile {
    fn populate(&self, pptx: &mut Presentation) -> Result<(), Error> {
        let html = std::fs::read_to_string(&self.path).map_err(Error::Io)?;
        pptx.add_slide(html_to_slide(&html));
        Ok(())
    }
}

/// Parse one HTML document into slide paragraphs.
pub fn html_to_slide(html: &str) -> Slide {
    html::to_slide(html)
}

/// Resolve an output path the way the CLI does: absolute paths are used
/// verbatim, relative ones are joined onto the current working directory.
pub fn resolve_output_path(path: &Path) -> Result<PathBuf, Error> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().map_err(Error::Io)?;
        Ok(cwd.join(path))
    }
}

/// Convert one HTML file into a single-slide widescreen presentation.
pub fn convert_html_to_pptx(input: &Path, output: &Path) -> Result<(), Error> {
    let mut pptx = Presentation::new(Layout::Screen16x9);
    HtmlFile::new(input).populate(&mut pptx)?;
    let resolved = resolve_output_path(output)?;
    log::debug!("writing {}", resolved.display());
    pptx.write_file(&resolved)
}
