// src/formatting/templates.rs
//! Assembles whole pages from view state via Handlebars templates.
//!
//! Default templates ship embedded in the binary; a template directory
//! can override any of them by name. Template data is built here — the
//! templates themselves stay logic-free apart from the load-more
//! conditional, which renders if and only if a next page exists.

use crate::constants::{LOADING_LABEL, LOAD_MORE_LABEL, READING_TIME_PLACEHOLDER, SITE_TITLE};
use crate::error::AppError;
use crate::formatting::{format_publication_date, rich_text_to_html};
use crate::model::PostDetail;
use crate::types::{RenderedPage, TemplateName};
use crate::view::{ListingState, Remote};
use handlebars::Handlebars;
use serde_json::json;
use std::path::Path;

const LISTING_TEMPLATE: &str = "listing";
const POST_TEMPLATE: &str = "post";
const LOADING_TEMPLATE: &str = "loading";

const DEFAULT_LISTING: &str = include_str!("../../templates/listing.hbs");
const DEFAULT_POST: &str = include_str!("../../templates/post.hbs");
const DEFAULT_LOADING: &str = include_str!("../../templates/loading.hbs");

/// The registered template set used to render every page of the site.
pub struct PageTemplates {
    handlebars: Handlebars<'static>,
}

impl PageTemplates {
    /// Registers the built-in templates, then any overrides found in the
    /// given directory (`<name>.hbs` replaces the template of that name).
    pub fn load(template_dir: Option<&Path>) -> Result<Self, AppError> {
        let mut handlebars = Handlebars::new();

        let defaults = [
            (LISTING_TEMPLATE, DEFAULT_LISTING),
            (POST_TEMPLATE, DEFAULT_POST),
            (LOADING_TEMPLATE, DEFAULT_LOADING),
        ];
        for (name, source) in defaults {
            register(&mut handlebars, name, source)?;
        }

        if let Some(dir) = template_dir {
            for (name, _) in defaults {
                let path = dir.join(format!("{}.hbs", TemplateName::new(name)?.as_str()));
                if path.exists() {
                    let source =
                        std::fs::read_to_string(&path).map_err(|e| AppError::TemplateNotFound {
                            path: path.display().to_string(),
                            source: e,
                        })?;
                    register(&mut handlebars, name, &source)?;
                    log::info!("Using template override: {}", path.display());
                }
            }
        }

        Ok(Self { handlebars })
    }

    /// Renders the listing page from its pagination state.
    pub fn render_listing(&self, state: &ListingState) -> Result<RenderedPage, AppError> {
        let posts = state
            .items()
            .iter()
            .map(|post| {
                json!({
                    "uid": post.uid,
                    "href": format!("/post/{}", post.uid.as_deref().unwrap_or_default()),
                    "title": post.title,
                    "subtitle": post.subtitle,
                    "date": format_publication_date(post.published_at.as_ref()),
                    "author": post.author,
                })
            })
            .collect::<Vec<_>>();

        self.render(
            LISTING_TEMPLATE,
            &json!({
                "site_title": SITE_TITLE,
                "posts": posts,
                "next_page": state.next_page(),
                "load_more_label": LOAD_MORE_LABEL,
            }),
        )
    }

    /// Renders a detail page from its resolution state: the loading
    /// placeholder while unresolved, the full post once ready — never
    /// both. A failed state is not renderable and surfaces as an error.
    pub fn render_post_state(&self, state: &Remote<PostDetail>) -> Result<RenderedPage, AppError> {
        match state {
            Remote::Loading => self.render_loading(),
            Remote::Ready(post) => self.render_post(post),
            Remote::Failed(message) => Err(AppError::InternalError {
                message: format!("Refusing to render a failed post fetch: {}", message),
                source: None,
            }),
        }
    }

    /// Renders a resolved post page.
    pub fn render_post(&self, post: &PostDetail) -> Result<RenderedPage, AppError> {
        let sections = post
            .sections
            .iter()
            .map(|section| {
                json!({
                    "heading": section.heading,
                    "body_html": rich_text_to_html(&section.body),
                })
            })
            .collect::<Vec<_>>();

        self.render(
            POST_TEMPLATE,
            &json!({
                "site_title": SITE_TITLE,
                "title": post.title,
                "banner_url": post.banner_url,
                "date": format_publication_date(post.published_at.as_ref()),
                "author": post.author,
                "reading_time": READING_TIME_PLACEHOLDER,
                "sections": sections,
            }),
        )
    }

    /// Renders the loading placeholder page.
    pub fn render_loading(&self) -> Result<RenderedPage, AppError> {
        self.render(
            LOADING_TEMPLATE,
            &json!({
                "site_title": SITE_TITLE,
                "loading_label": LOADING_LABEL,
            }),
        )
    }

    fn render(&self, name: &str, data: &serde_json::Value) -> Result<RenderedPage, AppError> {
        let html = self
            .handlebars
            .render(name, data)
            .map_err(|e| AppError::TemplateRenderError {
                name: name.to_string(),
                message: e.to_string(),
            })?;
        Ok(RenderedPage::new(html))
    }
}

fn register(
    handlebars: &mut Handlebars<'static>,
    name: &str,
    source: &str,
) -> Result<(), AppError> {
    handlebars
        .register_template_string(name, source)
        .map_err(|e| AppError::TemplateRenderError {
            name: name.to_string(),
            message: e.to_string(),
        })
}
