// ABOUTME: The Client facade: fetches pages and runs the extraction policy over them.
// ABOUTME: scrape() is fallible at the fetch boundary only; scrape_html() cannot fail.

use chrono::Utc;
use url::Url;

use crate::document::HtmlDocument;
use crate::error::ScrapeError;
use crate::extract::patterns::PatternSet;
use crate::extract::policy;
use crate::options::{ClientBuilder, Options};
use crate::report::ScrapeReport;
use crate::resource::{fetch, FetchOptions};

/// Client for fetching pages and extracting fields from them.
pub struct Client {
    opts: Options,
    http: reqwest::Client,
    patterns: PatternSet,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self {
            opts,
            http,
            patterns: PatternSet::standard(),
        }
    }

    /// Fetch `url` and extract rows according to the free-text `request`.
    ///
    /// Only fetch-boundary failures surface as errors; once a page body is
    /// in hand, extraction always produces a report.
    pub async fn scrape(&self, url: &str, request: &str) -> Result<ScrapeReport, ScrapeError> {
        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
            allow_private_networks: self.opts.allow_private_networks,
        };
        let fetched = fetch(&self.http, url, &fetch_opts).await?;
        let html = fetched.text();
        Ok(self.report_for(&fetched.final_url, request, &HtmlDocument::parse(&html)))
    }

    /// Extract rows from an already-fetched HTML string.
    ///
    /// `url` is context only (report metadata); no network access happens.
    pub fn scrape_html(&self, html: &str, url: &str, request: &str) -> ScrapeReport {
        self.report_for(url, request, &HtmlDocument::parse(html))
    }

    fn report_for(&self, url: &str, request: &str, doc: &HtmlDocument) -> ScrapeReport {
        let rows = policy::extract(doc, request, &self.patterns);
        ScrapeReport {
            url: url.to_string(),
            domain: domain_of(url),
            request: request.to_string(),
            rows,
            retrieved_at: Utc::now(),
        }
    }
}

/// Host portion of a URL, or empty when the URL does not parse.
fn domain_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}
