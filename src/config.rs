// src/config.rs
use crate::constants::{API_MAX_PAGE_SIZE, LISTING_PAGE_SIZE, POSTS_DOCUMENT_TYPE};
use crate::error::AppError;
use crate::types::{AccessToken, ApiEndpoint, DocumentType, ValidationError};
use clap::Parser;
use std::path::PathBuf;

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Prismic repository API endpoint (e.g., "https://<repo>.cdn.prismic.io/api/v2").
    /// Falls back to the PRISMIC_API_ENDPOINT environment variable.
    pub endpoint: Option<String>,

    /// Directory the rendered site is written to
    #[arg(short, long, default_value = "public")]
    pub output_dir: String,

    /// Directory with template overrides (<name>.hbs replaces a built-in)
    #[arg(long)]
    pub template_dir: Option<String>,

    /// Posts per listing page
    #[arg(long, default_value_t = LISTING_PAGE_SIZE)]
    pub page_size: u32,

    /// Listing pages to accumulate eagerly beyond the first
    /// (0 renders exactly the initial load)
    #[arg(long, default_value_t = 0)]
    pub max_pages: u32,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved build configuration — validated and ready to drive all
/// three pipeline stages.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub endpoint: ApiEndpoint,
    pub access_token: Option<AccessToken>,
    pub document_type: DocumentType,
    pub output_dir: PathBuf,
    pub template_dir: Option<PathBuf>,
    pub page_size: u32,
    pub max_pages: u32,
    #[allow(dead_code)] // Used by bin crate
    pub verbose: bool,
}

impl SiteConfig {
    /// Resolves a complete build configuration from CLI input and
    /// environment. Credentials come from the environment only; they
    /// never appear on the command line.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let endpoint_str = match cli.endpoint {
            Some(endpoint) => endpoint,
            None => std::env::var("PRISMIC_API_ENDPOINT").map_err(|_| {
                AppError::MissingConfiguration(
                    "No endpoint argument and PRISMIC_API_ENDPOINT environment variable not set"
                        .to_string(),
                )
            })?,
        };
        let endpoint = ApiEndpoint::parse(&endpoint_str)?;

        let access_token = match std::env::var("PRISMIC_ACCESS_TOKEN") {
            Ok(token) => Some(AccessToken::new(token)?),
            Err(_) => None,
        };

        if cli.page_size == 0 || cli.page_size > API_MAX_PAGE_SIZE {
            return Err(ValidationError::PageSizeOutOfBounds {
                value: cli.page_size,
                min: 1,
                max: API_MAX_PAGE_SIZE,
            }
            .into());
        }

        Ok(SiteConfig {
            endpoint,
            access_token,
            document_type: DocumentType::new(POSTS_DOCUMENT_TYPE)?,
            output_dir: PathBuf::from(cli.output_dir),
            template_dir: cli.template_dir.map(PathBuf::from),
            page_size: cli.page_size,
            max_pages: cli.max_pages,
            verbose: cli.verbose,
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            endpoint: ApiEndpoint::parse("https://example-repo.cdn.prismic.io/api/v2")
                .expect("Default endpoint should be valid"),
            access_token: None,
            document_type: DocumentType::new(POSTS_DOCUMENT_TYPE)
                .expect("Default document type should be valid"),
            output_dir: PathBuf::from("public"),
            template_dir: None,
            page_size: LISTING_PAGE_SIZE,
            max_pages: 0,
            verbose: false,
        }
    }
}
