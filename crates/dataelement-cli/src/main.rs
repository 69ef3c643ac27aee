use anyhow::{Context, Result};
use clap::Parser;
use dataelement_codegen::{generate_artifacts, normalize_document, parse_document, Artifact};

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "dataelement")]
#[command(about = "Generates data element source files from schema documents")]
#[command(version)]
struct Cli {
    /// Schema documents to render; reads standard input when none are given
    schemas: Vec<PathBuf>,

    /// Directory the generated packages are written under
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Validate the schemas and print them in normalized form instead of
    /// writing source files
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", console::style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut sources = vec![];

    if cli.schemas.is_empty() {
        let mut src = String::new();
        std::io::stdin()
            .read_to_string(&mut src)
            .context("failed to read standard input")?;
        sources.push(("standard input".to_string(), src));
    }

    for path in &cli.schemas {
        let src = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        sources.push((path.display().to_string(), src));
    }

    if cli.check {
        for (origin, src) in &sources {
            let doc = parse_document(src).with_context(|| format!("invalid schema from {origin}"))?;
            let normalized = normalize_document(&doc)
                .with_context(|| format!("invalid schema from {origin}"))?;
            println!("{}", serde_json::to_string_pretty(&normalized)?);
        }
        return Ok(());
    }

    // Render every document before touching the filesystem so a bad schema
    // in the middle of the batch leaves nothing half-written.
    let mut pending = vec![];
    for (origin, src) in &sources {
        pending.push(render(src, origin)?);
    }

    for (package, artifacts) in pending {
        write_package(&cli.out_dir, &package, &artifacts)?;
    }

    Ok(())
}

fn render(src: &str, origin: &str) -> Result<(String, Vec<Artifact>)> {
    let doc = parse_document(src).with_context(|| format!("invalid schema from {origin}"))?;
    let artifacts =
        generate_artifacts(&doc).with_context(|| format!("failed to generate `{}`", doc.element))?;

    Ok((doc.package, artifacts))
}

fn write_package(out_dir: &Path, package: &str, artifacts: &[Artifact]) -> Result<()> {
    // A dotted package name maps to a nested directory path.
    let mut dir = out_dir.to_path_buf();
    for part in package.split('.').filter(|part| !part.is_empty()) {
        dir.push(part);
    }

    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create `{}`", dir.display()))?;

    for artifact in artifacts {
        let path = dir.join(&artifact.file_name);
        fs::write(&path, &artifact.contents)
            .with_context(|| format!("failed to write `{}`", path.display()))?;

        println!(
            "{} {}",
            console::style("generated").green().bold(),
            path.display()
        );
    }

    Ok(())
}
