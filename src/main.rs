use clap::{Parser, Subcommand};
use postshelf::{assemble, config, generate, output, scan};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "postshelf")]
#[command(about = "Static blog generator with category listings")]
#[command(long_about = "\
Static blog generator with category listings

Posts are markdown files with a TOML frontmatter block. They are listed
newest first on the home page, and once more per category.

Content structure:

  content/
  ├── config.toml                  # Site metadata (title, author, site_url, ...)
  ├── static/                      # Copied verbatim to the output root
  └── posts/blog/
      ├── 001-hello/
      │   ├── index.md             # Slug /hello/ (ordering prefix is dropped)
      │   └── cover.png            # Thumbnail referenced from frontmatter
      └── notes.md                 # Slug /notes/

Frontmatter:

  +++
  title = \"Hello, world\"
  desc = \"First post\"
  createdAt = 2024-03-01
  category = \"backend-go\"
  thumbnail = \"cover.png\"
  alt = \"A cover image\"
  +++

Run 'postshelf gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "public", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (corpus manifest)
    #[arg(long, default_value = ".postshelf-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a corpus manifest
    Scan,
    /// Produce the HTML site from the corpus manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate content directory without building
    Check,
    /// Print the posts shown on a listing page
    List {
        /// Only posts whose category contains this text
        #[arg(long)]
        category: Option<String>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

const CORPUS_FILE: &str = "corpus.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let corpus = load_corpus(&cli.source)?;
            write_corpus(&corpus, &cli.temp_dir)?;
            output::print_scan_output(&corpus, &cli.source);
        }
        Command::Generate => {
            let corpus_path = cli.temp_dir.join(CORPUS_FILE);
            let summary = generate::generate(&corpus_path, &cli.source, &cli.output)?;
            output::print_generate_output(&summary);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let corpus = load_corpus(&cli.source)?;
            let corpus_path = write_corpus(&corpus, &cli.temp_dir)?;
            output::print_scan_output(&corpus, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let summary = generate::generate(&corpus_path, &cli.source, &cli.output)?;
            output::print_generate_output(&summary);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let corpus = load_corpus(&cli.source)?;
            output::print_scan_output(&corpus, &cli.source);
            println!("==> Content is valid");
        }
        Command::List { category } => {
            let corpus = load_corpus(&cli.source)?;
            let selector = category.as_deref();
            let posts = assemble::assemble(&corpus.edges, selector);
            let heading = assemble::resolve_title(selector, config::site_metadata());
            output::print_post_list(&heading, &posts);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Scan the content root and publish its site metadata process-wide.
fn load_corpus(source: &Path) -> Result<scan::Corpus, Box<dyn std::error::Error>> {
    let corpus = scan::scan(source)?;
    config::install(corpus.config.clone())?;
    Ok(corpus)
}

/// Write the corpus manifest into `temp_dir`, returning its path.
fn write_corpus(corpus: &scan::Corpus, temp_dir: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(temp_dir)?;
    let path = temp_dir.join(CORPUS_FILE);
    let json = serde_json::to_string_pretty(corpus)?;
    std::fs::write(&path, json)?;
    Ok(path)
}
