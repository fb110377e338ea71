use clap::{Parser, Subcommand};
use margin::{EnhanceConfig, OfflinePage, RunError, SlugStyle, slugify};
use std::fs;
use std::path::{Path, PathBuf};

/// Run the page enhancements against well-formed XHTML, outside a browser.
#[derive(Parser, Debug)]
#[command(name = "margin", version, about, long_about = None)]
struct Cli {
    /// JSON configuration file (element ids, threshold, class sets)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the generated in-page navigation for a page
    Nav {
        /// Path to an XHTML page
        page: PathBuf,

        /// Print the navigation entries as JSON instead of HTML
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the identifier each heading text would receive
    Slug {
        /// Use the strict ASCII slug style
        #[arg(long, default_value_t = false)]
        ascii: bool,

        /// Heading texts
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Simulate page load, scrolling and clicks, then print the resulting page
    Page {
        /// Path to an XHTML page
        page: PathBuf,

        /// Scroll offset to simulate after load
        #[arg(long)]
        scroll: Option<f64>,

        /// Full height of the page content, for the progress bar
        #[arg(long, default_value_t = 0.0)]
        content_height: f64,

        /// Height of the visible viewport, for the progress bar
        #[arg(long, default_value_t = 0.0)]
        viewport_height: f64,

        /// Ids of elements to click, in order
        #[arg(long = "click")]
        clicks: Vec<String>,
    },
}

fn load_config(path: Option<&Path>) -> Result<EnhanceConfig, RunError> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            Ok(EnhanceConfig::from_json(&json)?)
        }
        None => Ok(EnhanceConfig::default()),
    }
}

fn run(cli: Cli) -> Result<(), RunError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Nav { page, json } => {
            let output = OfflinePage::from_file(&page, config)?.nav_output()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&output.entries)?);
            } else {
                println!("{}", output.html);
            }
        }
        Commands::Slug { ascii, texts } => {
            let style = if ascii {
                SlugStyle::Ascii
            } else {
                config.slug_style
            };
            for text in texts {
                println!("{}", slugify(&text, style));
            }
        }
        Commands::Page {
            page,
            scroll,
            content_height,
            viewport_height,
            clicks,
        } => {
            let mut page = OfflinePage::from_file(&page, config)?;
            page.set_page_size(content_height, viewport_height);
            page.ready();
            if let Some(offset) = scroll {
                page.scroll_to(offset);
            }
            for id in &clicks {
                page.click(id)?;
            }
            println!("{}", page.to_html());
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("margin=warn"))
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
