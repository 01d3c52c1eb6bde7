// ABOUTME: CLI for building the documentation page from renderer HTML output.
// ABOUTME: Reads an HTML file (or stdin), runs the tidy pipeline, and writes the page with front matter.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use docsite_tidy::{CleanedPage, Document, Options, Pipeline};
use serde_json::json;

/// Clean markdown-rendered HTML into a publishable docs page.
#[derive(Parser, Debug)]
#[command(name = "docsite")]
#[command(about = "Clean rendered documentation HTML and emit a page with front matter", long_about = None)]
struct Args {
    /// Rendered HTML file. Use "-" to read from stdin.
    input: String,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output", conflicts_with = "out_dir")]
    output: Option<PathBuf>,

    /// Directory to write `<version>.html` into
    #[arg(long = "out-dir")]
    out_dir: Option<PathBuf>,

    /// Use this version instead of the one found in the first heading
    #[arg(long = "doc-version")]
    doc_version: Option<String>,

    /// JSON options file (container classes, anchor rename, highlight whitelists)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print {version, output} as JSON instead of the raw page
    #[arg(long = "json")]
    json_output: bool,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn run(args: &Args) -> Result<()> {
    let opts = load_options(args.config.as_deref())?;
    let pipeline = Pipeline::new(opts);

    let html = read_input(&args.input)?;
    let start = Instant::now();
    let page = clean(&pipeline, &html, args.doc_version.clone())?;
    let elapsed = start.elapsed();

    let rendered = if args.json_output {
        serde_json::to_string_pretty(&json!({
            "version": page.version,
            "output": page.output,
        }))?
    } else {
        page.output.clone()
    };

    if let Some(path) = &args.output {
        write_page(path, &rendered)?;
    } else if let Some(dir) = &args.out_dir {
        let name = format!("{}.html", page.version.as_deref().unwrap_or("null"));
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        write_page(&dir.join(name), &rendered)?;
    } else {
        print!("{}", rendered);
    }

    if args.timing {
        eprintln!("elapsed: {}ms", elapsed.as_millis());
    }
    Ok(())
}

fn clean(pipeline: &Pipeline, html: &str, version: Option<String>) -> Result<CleanedPage> {
    let page = match version {
        Some(v) => pipeline.clean(Document::parse_fragment(html), Some(v))?,
        None => pipeline.clean_html(html)?,
    };
    log::debug!("cleaned page for version {:?}", page.version);
    Ok(page)
}

fn load_options(path: Option<&Path>) -> Result<Options> {
    let Some(path) = path else {
        return Ok(Options::default());
    };
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let opts = Options::from_json(&raw).with_context(|| format!("loading {}", path.display()))?;
    Ok(opts)
}

fn read_input(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        bail!("file not found: {}", target);
    }
    fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
}

fn write_page(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}
