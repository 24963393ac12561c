//! Inspect the contents of a PPTX package.
//!
//! Usage:
//!   pptx-inspect <file.pptx>                    list parts and slide count
//!   pptx-inspect <file.pptx> <part|N>           dump a part; a bare number N means slide N
//!   pptx-inspect <file.pptx> --rels [part]      show a part's relationships (default: package)
//!   pptx-inspect <file.pptx> --grep <pattern>   find matching elements across XML parts

use std::fs;
use std::io::{self, Read, Write};
use zip::ZipArchive;

type Archive = ZipArchive<fs::File>;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage:");
        eprintln!("  pptx-inspect <file.pptx>                    list parts");
        eprintln!("  pptx-inspect <file.pptx> <part|N>           dump a part (N = slide number)");
        eprintln!("  pptx-inspect <file.pptx> --rels [part]      show a part's relationships");
        eprintln!("  pptx-inspect <file.pptx> --grep <pattern>   find elements across XML parts");
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

    match args.get(2).map(String::as_str) {
        None => list_parts(&mut archive),
        Some("--rels") => show_rels(&mut archive, args.get(3).map(String::as_str)),
        Some("--grep") => {
            let pattern = args.get(3).unwrap_or_else(|| {
                eprintln!("--grep requires a pattern");
                std::process::exit(1);
            });
            grep_parts(&mut archive, pattern);
        }
        Some(part) => dump_part(&mut archive, part),
    }
}

fn list_parts(archive: &mut Archive) {
    println!("{:>9}  {}", "bytes", "path");
    println!("{}", "─".repeat(55));
    let mut slides = 0;
    for i in 0..archive.len() {
        let entry = archive.by_index(i).unwrap();
        if !entry.is_dir() {
            let name = entry.name().to_owned();
            if name.starts_with("ppt/slides/slide") && name.ends_with(".xml") {
                slides += 1;
            }
            println!("{:>9}  {}", entry.size(), name);
        }
    }
    println!("{}", "─".repeat(55));
    println!("{slides} slide(s)");
}

fn dump_part(archive: &mut Archive, part: &str) {
    // A bare number means that slide's XML part.
    let name = match part.parse::<u32>() {
        Ok(n) => format!("ppt/slides/slide{n}.xml"),
        Err(_) => part.to_string(),
    };
    let mut entry = archive.by_name(&name).unwrap_or_else(|_| {
        eprintln!("'{name}' not found in package");
        eprintln!("Run without a part argument to list available parts.");
        std::process::exit(1);
    });
    let mut content = Vec::new();
    entry.read_to_end(&mut content).unwrap();

    if name.ends_with(".xml") || name.ends_with(".rels") {
        print!("{}", indent_xml(&String::from_utf8_lossy(&content)));
    } else {
        io::stdout().write_all(&content).unwrap();
    }
}

/// Re-indent a part for reading. Parts are written as a single line with
/// no text outside elements, so splitting on tag boundaries is enough.
fn indent_xml(xml: &str) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    for piece in xml.split('<').filter(|p| !p.is_empty()) {
        let closing = piece.starts_with('/');
        let opens = !closing && !piece.starts_with('?') && !piece.contains("/>");
        if closing {
            depth = depth.saturating_sub(1);
        }
        out.push_str(&"  ".repeat(depth));
        out.push('<');
        out.push_str(piece.trim_end_matches('\n'));
        out.push('\n');
        if opens {
            depth += 1;
        }
    }
    out
}

fn show_rels(archive: &mut Archive, part: Option<&str>) {
    // Relationships of ppt/slides/slide1.xml live in
    // ppt/slides/_rels/slide1.xml.rels; the package's own live in _rels/.rels.
    let rels_name = match part {
        None => "_rels/.rels".to_string(),
        Some(p) => match p.rsplit_once('/') {
            Some((dir, file)) => format!("{dir}/_rels/{file}.rels"),
            None => format!("_rels/{p}.rels"),
        },
    };
    let mut entry = archive.by_name(&rels_name).unwrap_or_else(|_| {
        eprintln!("'{rels_name}' not found in package");
        std::process::exit(1);
    });
    let mut xml = String::new();
    entry.read_to_string(&mut xml).unwrap();

    let doc = roxmltree::Document::parse(&xml).unwrap_or_else(|e| {
        eprintln!("'{rels_name}' is not well-formed XML: {e}");
        std::process::exit(1);
    });
    println!("{rels_name}:");
    for rel in doc
        .descendants()
        .filter(|n| n.tag_name().name() == "Relationship")
    {
        let id = rel.attribute("Id").unwrap_or("?");
        let target = rel.attribute("Target").unwrap_or("?");
        let kind = rel
            .attribute("Type")
            .and_then(|t| t.rsplit('/').next())
            .unwrap_or("?");
        println!("{id:>6}  {kind:<22}  {target}");
    }
}

fn grep_parts(archive: &mut Archive, pattern: &str) {
    let names: Vec<String> = archive.file_names().map(String::from).collect();
    let mut found = 0;
    for name in names {
        if !(name.ends_with(".xml") || name.ends_with(".rels")) {
            continue;
        }
        let mut entry = archive.by_name(&name).unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap_or(0);
        // Parts are single-line, so report matching elements, not lines.
        for piece in content.split('<') {
            if piece.contains(pattern) {
                println!("{name}: <{piece}");
                found += 1;
            }
        }
    }
    if found == 0 {
        eprintln!("No matches for '{pattern}'");
    }
}
