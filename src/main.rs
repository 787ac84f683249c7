use clap::{Parser, Subcommand};
use favkit::imaging::RustBackend;
use favkit::{config, icons, naming, output, rewrite};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "favkit")]
#[command(about = "Favicon asset pipeline for static sites")]
#[command(long_about = "\
Favicon asset pipeline for static sites

Keeps a site's raster favicons and the <head> markup that references them
in sync with one master image.

Managed files (relative to --root):

  favicon-512.png                  # Master image (input, 512x512)
  favicon-16.png … favicon-512.png # Resized copies (generated)
  favicon.ico                      # Multi-resolution container (generated)
  index.html, about.html, …        # Registered pages (block rewritten)
  past-papers/past-papers.html     # Nested page (hrefs prefixed with ../)

The favicon block in each page is delimited by the <!-- Favicon --> comment
and regenerated in full on every run; surrounding markup is preserved byte
for byte.

Run 'favkit check' to validate the master image and page markers without
writing anything.")]
#[command(version)]
struct Cli {
    /// Site root directory (where the master image and pages live)
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate PNG and ICO favicons from the master image
    Icons,
    /// Rewrite the favicon block in every registered page
    Rewrite,
    /// Run the full pipeline: icons then rewrite
    Build,
    /// Validate the master image and page markers without writing
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let backend = RustBackend::new();

    match cli.command {
        Command::Icons => run_icons(&backend, &cli.root)?,
        Command::Rewrite => {
            let pages = rewrite::rewrite_all(&cli.root)?;
            output::print_rewrite_output(&pages);
        }
        Command::Build => {
            println!("==> Stage 1: Generating icons in {}", cli.root.display());
            run_icons(&backend, &cli.root)?;

            println!("==> Stage 2: Rewriting favicon blocks");
            let pages = rewrite::rewrite_all(&cli.root)?;
            output::print_rewrite_output(&pages);

            println!("==> Build complete");
        }
        Command::Check => {
            println!("==> Checking {}", cli.root.display());
            let dims = icons::check_master(&backend, &cli.root)?;
            println!("{}: {}x{}", naming::MASTER_FILENAME, dims.width, dims.height);
            rewrite::validate_all(&cli.root)?;
            println!(
                "{} pages have a locatable favicon block",
                config::PAGES.len()
            );
            println!("==> Site is valid");
        }
    }

    Ok(())
}

/// Run the icon stage and print its summary plus the confirmation line.
fn run_icons(backend: &RustBackend, root: &Path) -> Result<(), icons::IconError> {
    let set = icons::generate(backend, root)?;
    output::print_icons_output(&set);
    println!(
        "Generated PNG and ICO favicons from {}.",
        naming::MASTER_FILENAME
    );
    Ok(())
}
