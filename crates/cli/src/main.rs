// ABOUTME: CLI exposing the dreamy utility libraries as small subcommands.
// ABOUTME: Each subcommand calls one helper and prints its result to stdout.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use dreamy_core::{
    dimensions_to_fit, escape_html_entities, find_files, format_pretty, get_sanitized_file_name,
    levenshtein_distance, parse_flexible_date, prettify_date, read_element_text, truncate,
    unescape_html_entities, Dimensions, DEFAULT_DATE_FORMAT,
};
use dreamy_web::WebSession;

mod logging;

/// Small text, filesystem and web helpers.
#[derive(Parser, Debug)]
#[command(name = "dreamy", version)]
#[command(about = "Text, filesystem and web helpers from the dreamy utilities", long_about = None)]
struct Cli {
    /// Show debug logs.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the edit distance between two strings.
    Distance { a: String, b: String },

    /// Shorten text to at most LENGTH characters, ending with an ellipsis.
    Truncate { text: String, length: usize },

    /// Escape HTML special characters.
    Escape { text: String },

    /// Decode HTML entities.
    Unescape { text: String },

    /// Scale INNER (WxH) to fit inside CONTAINER (WxH).
    Fit {
        inner: Dimensions,
        container: Dimensions,
    },

    /// Strip characters that are unsafe in file names.
    Sanitize { name: String },

    /// List files below a directory.
    Find {
        /// Directory to search (defaults to the current directory).
        dir: Option<PathBuf>,

        /// Do not descend into subdirectories.
        #[arg(long, default_value_t = false)]
        flat: bool,

        /// Only list files with this extension, e.g. ".txt". Repeatable.
        #[arg(long = "suffix")]
        suffixes: Vec<String>,
    },

    /// Print a date as "Mon D, YYYY".
    Date {
        date: String,

        /// chrono format string of the input. Without it, common shapes are guessed.
        #[arg(long)]
        format: Option<String>,
    },

    /// Fetch a page and print its text.
    Fetch {
        url: String,

        /// Print only the text of the first element matching this CSS selector.
        #[arg(long)]
        select: Option<String>,

        /// User-Agent header to send.
        #[arg(long, env = "DREAMY_USER_AGENT")]
        user_agent: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize_logging(cli.verbose, cli.quiet)?;

    match cli.command {
        Command::Distance { a, b } => println!("{}", levenshtein_distance(&a, &b)),
        Command::Truncate { text, length } => println!("{}", truncate(&text, length)),
        Command::Escape { text } => println!("{}", escape_html_entities(&text)),
        Command::Unescape { text } => println!("{}", unescape_html_entities(&text)),
        Command::Fit { inner, container } => {
            println!("{}", dimensions_to_fit(inner, container))
        }
        Command::Sanitize { name } => println!("{}", get_sanitized_file_name(&name)),
        Command::Find {
            dir,
            flat,
            suffixes,
        } => {
            let suffixes: Vec<&str> = suffixes.iter().map(String::as_str).collect();
            let filter = (!suffixes.is_empty()).then_some(suffixes.as_slice());
            for path in find_files(dir.as_deref(), !flat, filter)? {
                println!("{}", path.display());
            }
        }
        Command::Date { date, format } => println!("{}", pretty_date(&date, format.as_deref())?),
        Command::Fetch {
            url,
            select,
            user_agent,
        } => println!("{}", fetch(&url, select.as_deref(), user_agent)?),
    }

    Ok(())
}

fn pretty_date(date: &str, format: Option<&str>) -> Result<String> {
    if let Some(format) = format {
        return Ok(prettify_date(date, format)?);
    }
    match prettify_date(date, DEFAULT_DATE_FORMAT) {
        Ok(pretty) => Ok(pretty),
        Err(err) => parse_flexible_date(date)
            .map(format_pretty)
            .ok_or_else(|| err.into()),
    }
}

fn fetch(url: &str, select: Option<&str>, user_agent: Option<String>) -> Result<String> {
    let mut builder = WebSession::builder();
    if let Some(user_agent) = user_agent {
        builder = builder.user_agent(user_agent);
    }
    let session = builder.build()?;
    let doc = session
        .get_document(url)
        .with_context(|| format!("failed to fetch {url}"))?;

    match select {
        Some(selector) => read_element_text(&doc, selector)
            .ok_or_else(|| anyhow!("no element matches selector {selector:?}")),
        None => {
            let lines: Vec<&str> = doc
                .root_element()
                .text()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
