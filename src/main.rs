// src/main.rs

// Modules defined in the crate
mod api;
mod config;
mod constants;
mod error;
mod formatting;
mod model;
mod output;
mod pipeline;
mod types;
mod view;

// Specific imports
use crate::api::{ContentRepository, PageRequest, PrismicHttpClient};
use crate::config::{CommandLineInput, SiteConfig};
use crate::error::AppError;
use crate::formatting::PageTemplates;
use crate::output::{deliver, DeliveryTarget, OutputPlan, OutputReport, Route};
use crate::pipeline::{
    ComposedPage, PageComposer, PostEntry, SiteContent, SiteDelivery, SiteSource,
};
use crate::view::{ListingState, Remote};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("prismic2site.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes the three-stage build pipeline: fetch → compose → deliver.
async fn execute_pipeline(config: &SiteConfig) -> Result<(), AppError> {
    let builder = SiteBuilder::new(config)?;

    let content = builder.fetch().await?;
    let pages = builder.compose(&content)?;
    let report = builder.deliver(pages)?;
    builder.report_completion(&content, &report);

    Ok(())
}

/// Orchestrates the retrieval, rendering, and delivery of the site.
struct SiteBuilder<'a> {
    config: &'a SiteConfig,
    templates: PageTemplates,
}

impl<'a> SiteBuilder<'a> {
    fn new(config: &'a SiteConfig) -> Result<Self, AppError> {
        let templates = PageTemplates::load(config.template_dir.as_deref())?;
        Ok(Self { config, templates })
    }

    /// Builds the listing state: the initial page-1 load plus any eager
    /// load-mores the configuration asked for.
    async fn fetch_listing(
        &self,
        repository: &dyn ContentRepository,
    ) -> Result<ListingState, AppError> {
        let first_page = repository
            .fetch_by_type(
                &self.config.document_type,
                &PageRequest::first(self.config.page_size),
            )
            .await?;
        let mut listing = ListingState::from_page(&first_page);

        for _ in 0..self.config.max_pages {
            if !view::load_more(repository, &mut listing).await? {
                break;
            }
        }

        log::info!(
            "Listing holds {} post(s); load-more {}",
            listing.items().len(),
            if listing.has_more() {
                "visible"
            } else {
                "hidden"
            }
        );
        Ok(listing)
    }

    /// Enumerates every post route and fetches its record.
    async fn fetch_posts(
        &self,
        repository: &dyn ContentRepository,
    ) -> Result<Vec<PostEntry>, AppError> {
        let routes =
            api::enumerate_document_uids(repository, &self.config.document_type, None).await?;

        let mut posts = Vec::with_capacity(routes.uids.len());
        for uid in routes.uids {
            let document = repository
                .fetch_by_uid(&self.config.document_type, &uid)
                .await?;
            let detail = model::PostDetail::from_document(&document)?;
            posts.push(PostEntry {
                uid,
                detail: Remote::Ready(detail),
            });
        }
        Ok(posts)
    }

    /// Reports completion to the user with stats and delivery confirmations.
    fn report_completion(&self, content: &SiteContent, report: &OutputReport) {
        println!(
            "📄 Fetched {} post(s) from {}.",
            content.posts.len(),
            self.config.endpoint
        );

        for completed in &report.completed {
            if let DeliveryTarget::WriteFile { path, .. } = &completed.operation {
                println!("✓ Page saved to {}", path.display());
            }
        }

        println!(
            "✓ Site generated in {} ({} bytes).",
            self.config.output_dir.display(),
            report.stats.bytes_written
        );
    }
}

#[async_trait::async_trait]
impl SiteSource for SiteBuilder<'_> {
    async fn fetch(&self) -> Result<SiteContent, AppError> {
        log::info!("Retrieving content from {}", self.config.endpoint);

        // The one client instance of the process; every flow borrows it.
        let client = PrismicHttpClient::connect(
            self.config.endpoint.clone(),
            self.config.access_token.clone(),
        )
        .await?;

        let listing = self.fetch_listing(&client).await?;
        let posts = self.fetch_posts(&client).await?;

        Ok(SiteContent { listing, posts })
    }
}

impl PageComposer for SiteBuilder<'_> {
    fn compose(&self, content: &SiteContent) -> Result<Vec<ComposedPage>, AppError> {
        let mut pages = Vec::with_capacity(content.posts.len() + 2);

        pages.push(ComposedPage {
            route: Route::Listing,
            page: self.templates.render_listing(&content.listing)?,
        });

        for entry in &content.posts {
            pages.push(ComposedPage {
                route: Route::Post(entry.uid.clone()),
                page: self.templates.render_post_state(&entry.detail)?,
            });
        }

        // Placeholder for routes served on demand after this build
        pages.push(ComposedPage {
            route: Route::LoadingFallback,
            page: self.templates.render_loading()?,
        });

        Ok(pages)
    }
}

impl SiteDelivery for SiteBuilder<'_> {
    fn deliver(&self, pages: Vec<ComposedPage>) -> Result<OutputReport, AppError> {
        let mut plan = OutputPlan::new();
        for composed in pages {
            plan = plan.with_operation(DeliveryTarget::WriteFile {
                path: composed.route.output_path(&self.config.output_dir),
                content: composed.page.into_string(),
            });
        }

        let report = deliver(plan)?;

        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report.failed.iter().map(|f| f.error.clone()).collect(),
            });
        }

        Ok(report)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = SiteConfig::resolve(cli)?;

    execute_pipeline(&config).await?;

    Ok(())
}
