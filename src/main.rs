//! lecturemark CLI - render lecture notes to HTML or a JSON block listing

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lecturemark::{Options, VideoRecord};

#[derive(Parser)]
#[command(name = "lecturemark")]
#[command(about = "Render course lecture notes to HTML")]
struct Cli {
    /// Notes file, or `-` for stdin (default)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Treat the input as a JSON video record and render its notes
    #[arg(long)]
    record: bool,

    /// Escape HTML in paragraph text
    #[arg(long)]
    escape_html: bool,

    /// Add id attributes to headings
    #[arg(long)]
    heading_ids: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// HTML fragment
    Html,
    /// Block sequence as JSON
    Blocks,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let input = read_input(cli.input.as_ref())?;
    let notes = if cli.record {
        let record = VideoRecord::from_json(&input).context("invalid video record")?;
        log::info!("rendering notes for {:?}", record.title);
        record.markdown
    } else {
        Some(input)
    };

    let options = Options {
        escape_html: cli.escape_html,
        heading_ids: cli.heading_ids,
    };
    let blocks = lecturemark::parse_with_options(notes.as_deref().unwrap_or_default(), &options);

    let output = match cli.format {
        Format::Html => lecturemark::blocks_to_html(&blocks, &options),
        Format::Blocks => {
            let mut json = serde_json::to_string_pretty(&blocks)?;
            json.push('\n');
            json
        }
    };
    io::stdout().write_all(output.as_bytes())?;

    Ok(())
}
