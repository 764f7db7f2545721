//! synmark - annotate code regions with syntax categories

use std::env;
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;
use std::process;

use tracing::warn;

use synmark::render::{render_html, write_ansi};
use synmark::{logging, Config, Document, HighlightError, Highlighter, Region, Result};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Html,
    Ansi,
}

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    language: Option<String>,
    format: Option<Format>,
    list_languages: bool,
    path: Option<String>,
}

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("synmark {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--list-languages" => options.list_languages = true,
            "--language" | "-l" => options.language = Some(value_of(arg, iter.next())?),
            "--format" | "-f" => {
                options.format = Some(match value_of(arg, iter.next())?.as_str() {
                    "html" => Format::Html,
                    "ansi" => Format::Ansi,
                    other => return Err(message(format!("Unknown format: {}", other))),
                });
            }
            "-" => options.path = Some(arg.clone()),
            other if other.starts_with('-') => {
                return Err(message(format!("Unknown option: {}", other)));
            }
            other => options.path = Some(other.to_string()),
        }
    }

    let config = Config::load();
    let highlighter = Highlighter::from_config(&config)?;

    if options.list_languages {
        for name in highlighter.registry().list_languages() {
            println!("{}", name);
        }
        return Ok(());
    }

    let Some(path) = options.path.as_deref() else {
        print_usage();
        return Err(message("No input file".to_string()));
    };
    let source = read_input(path)?;

    let mut document = Document::parse(source.as_str());
    if document.is_empty() {
        highlight_file(&highlighter, &options, path, source)
    } else {
        highlight_document(&highlighter, &options, &mut document)
    }
}

/// Treat the whole input as one region
fn highlight_file(
    highlighter: &Highlighter,
    options: &Options,
    path: &str,
    source: String,
) -> Result<()> {
    let language = options
        .language
        .as_deref()
        .or_else(|| highlighter.registry().detect_language(Path::new(path)));
    let mut region = Region::new(language, source);

    // A failed region is still printed, just without annotation
    if let Err(e) = highlighter.highlight(&mut region) {
        warn!("{}: {}", path, e);
    }

    let format = options.format.unwrap_or_else(|| {
        if io::stdout().is_terminal() {
            Format::Ansi
        } else {
            Format::Html
        }
    });

    let mut stdout = io::stdout().lock();
    match format {
        Format::Ansi => write_ansi(&mut stdout, &region)?,
        Format::Html => {
            stdout.write_all(render_html(&region).as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Highlight every marked region of an HTML document
fn highlight_document(
    highlighter: &Highlighter,
    options: &Options,
    document: &mut Document,
) -> Result<()> {
    if let Some(language) = &options.language {
        for region in document.regions_mut() {
            if region.language.is_none() {
                region.language = Some(language.clone());
            }
        }
    }

    for (i, result) in highlighter
        .highlight_all(document.regions_mut())
        .into_iter()
        .enumerate()
    {
        if let Err(e) = result {
            warn!("region {}: {}", i + 1, e);
        }
    }

    let mut stdout = io::stdout().lock();
    match options.format.unwrap_or(Format::Html) {
        Format::Html => {
            stdout.write_all(document.render().as_bytes())?;
            stdout.flush()?;
        }
        Format::Ansi => {
            for region in document.regions() {
                write_ansi(&mut stdout, region)?;
                writeln!(stdout)?;
            }
        }
    }
    Ok(())
}

/// Read a file, or stdin for `-`
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn value_of(flag: &str, value: Option<&String>) -> Result<String> {
    value
        .cloned()
        .ok_or_else(|| message(format!("{} needs a value", flag)))
}

fn message(msg: String) -> HighlightError {
    HighlightError::Message(msg)
}

fn print_usage() {
    println!("synmark {} - syntax annotation for code regions", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: synmark [OPTIONS] FILE");
    println!();
    println!("FILE may be '-' to read stdin. If it contains elements marked");
    println!("class=\"highlight\", each one is annotated and the document is");
    println!("written back; otherwise the whole file is one region.");
    println!();
    println!("Options:");
    println!("  -l, --language LANG  Language for regions that do not name one");
    println!("  -f, --format FMT     Output format: html or ansi");
    println!("      --list-languages List known languages");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Settings are read from ~/.synmark.conf; RUST_LOG controls diagnostics.");
}
