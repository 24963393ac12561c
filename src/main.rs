use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "html2pptx", about = "Convert an HTML file to a PowerPoint slide")]
struct Args {
    /// Input HTML file
    #[arg(value_parser = non_empty_path)]
    input: PathBuf,
    /// Output PPTX file
    #[arg(value_parser = non_empty_path)]
    output: PathBuf,
}

// Empty strings are usage errors, same as missing arguments.
fn non_empty_path(s: &str) -> Result<PathBuf, String> {
    if s.is_empty() {
        Err(String::from("a file path is required"))
    } else {
        Ok(PathBuf::from(s))
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if !args.input.exists() {
        eprintln!("Error: file not found: {}", args.input.display());
        std::process::exit(1);
    }
    if !args.input.is_file() {
        eprintln!("Error: not a file: {}", args.input.display());
        std::process::exit(1);
    }

    if let Err(e) = html2pptx::convert_html_to_pptx(&args.input, &args.output) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
