// ABOUTME: Command-line front end for the magpie extraction engine.
// ABOUTME: Fetches pages or reads local HTML and prints extracted rows as text, JSON, or CSV.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use magpie_engine::{formats, Client, ScrapeReport};

#[derive(Parser, Debug)]
#[command(name = "magpie")]
#[command(about = "Extract data fields from web pages based on a free-text prompt")]
struct Args {
    /// What to extract, e.g. "names and email addresses" (empty collects paragraphs)
    #[arg(short = 'p', long = "prompt", default_value = "")]
    prompt: String,

    /// Output format: text (default), json, csv
    #[arg(short = 'f', long = "format", default_value = "text")]
    format: String,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// HTML file to extract from (requires --url)
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// URL context for HTML file mode (required with --html)
    #[arg(long = "url")]
    url: Option<String>,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,

    /// Allow fetching from private/local networks
    #[arg(long = "allow-private-networks")]
    allow_private_networks: bool,

    /// URLs to scrape (fetch mode)
    #[arg()]
    urls: Vec<String>,
}

/// Render the collected reports in the requested format.
fn format_output(reports: &[ScrapeReport], format: &str) -> String {
    match format.to_lowercase().as_str() {
        "json" => {
            if reports.len() == 1 {
                serde_json::to_string_pretty(&reports[0]).unwrap()
            } else {
                serde_json::to_string_pretty(reports).unwrap()
            }
        }
        "csv" => {
            // One CSV document regardless of how many pages were scraped.
            let rows: Vec<&String> = reports.iter().flat_map(|r| r.rows.iter()).collect();
            formats::rows_to_csv(&rows)
        }
        _ => reports
            .iter()
            .map(|r| r.format_text())
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Validate args
    if args.html.is_some() && args.url.is_none() {
        eprintln!("error: --url is required when using --html");
        return ExitCode::from(1);
    }

    if args.html.is_none() && args.urls.is_empty() {
        eprintln!("error: at least one URL is required, or use --html with --url");
        return ExitCode::from(1);
    }

    if args.html.is_some() && !args.urls.is_empty() {
        eprintln!("error: cannot use both --html and positional URLs");
        return ExitCode::from(1);
    }

    let client = Client::builder()
        .allow_private_networks(args.allow_private_networks)
        .build();

    let start = Instant::now();
    let mut reports: Vec<ScrapeReport> = Vec::new();
    let mut had_error = false;

    if let Some(html_path) = &args.html {
        // Local HTML mode
        let url = args.url.as_ref().unwrap();
        match fs::read_to_string(html_path) {
            Ok(html_content) => {
                reports.push(client.scrape_html(&html_content, url, &args.prompt));
            }
            Err(e) => {
                eprintln!("error reading file {:?}: {}", html_path, e);
                had_error = true;
            }
        }
    } else {
        // URL fetch mode
        for url in &args.urls {
            match client.scrape(url, &args.prompt).await {
                Ok(report) => {
                    reports.push(report);
                }
                Err(e) => {
                    eprintln!("error scraping {}: {}", url, e);
                    had_error = true;
                }
            }
        }
    }

    let elapsed = start.elapsed();

    // Output results
    if !reports.is_empty() {
        let output_str = format_output(&reports, &args.format);

        if let Some(output_path) = &args.output {
            // Write to file
            if let Err(e) = fs::write(output_path, &output_str) {
                eprintln!("error writing to {:?}: {}", output_path, e);
                had_error = true;
            }
        } else {
            // Print to stdout
            println!("{}", output_str);
        }
    }

    // Print timing if requested
    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }

    if had_error {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
