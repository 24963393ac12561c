//! Print the text content of each slide in a PPTX file, one line per
//! paragraph, with bullet and numbering markers.
//!
//! Usage:
//!   pptx-text <file.pptx>

use std::fs;
use std::io::Read;
use zip::ZipArchive;

const A_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: pptx-text <file.pptx>");
        std::process::exit(1);
    }

    let file = fs::File::open(&args[1]).unwrap_or_else(|e| {
        eprintln!("Cannot open '{}': {e}", args[1]);
        std::process::exit(1);
    });
    let mut archive = ZipArchive::new(file).unwrap_or_else(|e| {
        eprintln!("Not a valid ZIP/PPTX: {e}");
        std::process::exit(1);
    });

    for n in 1.. {
        let part = format!("ppt/slides/slide{n}.xml");
        let mut xml = String::new();
        match archive.by_name(&part) {
            Ok(mut entry) => {
                entry.read_to_string(&mut xml).unwrap();
            }
            Err(_) => break,
        }
        println!("── slide {n} ──");
        print_slide(&xml);
    }
}

fn print_slide(xml: &str) {
    let doc = match roxmltree::Document::parse(xml) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("  (unparseable: {e})");
            return;
        }
    };
    for para in doc.descendants().filter(|n| n.has_tag_name((A_NS, "p"))) {
        let mut line = String::new();
        for node in para.descendants() {
            if node.has_tag_name((A_NS, "t")) {
                line.push_str(node.text().unwrap_or(""));
            } else if node.has_tag_name((A_NS, "br")) {
                line.push_str(" ⏎ ");
            }
        }
        let marker = if para.descendants().any(|n| n.has_tag_name((A_NS, "buChar"))) {
            "• "
        } else if para
            .descendants()
            .any(|n| n.has_tag_name((A_NS, "buAutoNum")))
        {
            "#. "
        } else {
            ""
        };
        println!("  {marker}{line}");
    }
}
