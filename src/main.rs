use clap::{Parser, Subcommand};
use lintel::{build, config, output, scan};
use std::path::PathBuf;

fn version_string() -> &'static str {
    if env!("ON_RELEASE_TAG") == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "lintel")]
#[command(about = "Static page composer for markdown sites")]
#[command(long_about = "\
Static page composer for markdown sites

Markdown files under content/ become pages. config.toml declares the site
chrome: navigation, footer links, and optional features (feed link, math,
diagrams, comments, sidebar, framed layout). Every page is composed from
the same declarations, so the chrome stays consistent across the site.

Content structure:

  content/
  ├── config.toml            # Site config (optional)
  ├── index.md               # Page → /index.html, nav name \"index\"
  ├── about.md               # Page → /about.html, nav name \"about\"
  └── posts/
      └── hello.md           # Page → /posts/hello.html, nav name \"posts/hello\"

Front matter (TOML between +++ fences):
  title, lang, layout (\"page\" | \"post\"), math, diagrams, sitemap

Run 'lintel gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (scan manifest)
    #[arg(long, default_value = ".lintel-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory into a manifest
    Scan,
    /// Compose every page and write the full site
    Build,
    /// Validate content and config without writing
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let site = scan::scan(&cli.source)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let json = serde_json::to_string_pretty(&site)?;
            std::fs::write(cli.temp_dir.join("manifest.json"), json)?;
            output::print_scan(&site);
        }
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let summary = build::build(&cli.source, &cli.output)?;
            output::print_build(&summary);
            println!("==> Site written to {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site = build::check(&cli.source)?;
            output::print_scan(&site);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
