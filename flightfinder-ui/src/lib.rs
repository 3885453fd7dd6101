pub mod autocomplete;
pub mod dom;
pub mod error;
pub mod orchestrator;
pub mod telemetry;

use anyhow::Context;
use flightfinder_store::{Config, HttpSuggestionSource};
use std::sync::Arc;

pub use autocomplete::{AutocompleteBinding, AutocompleteController, FieldPair, LookupOutcome};
pub use dom::{ClickEvent, Document, Element, ElementRef, MemoryElement, PageShowEvent};
pub use error::{UiError, ValidationError};
pub use orchestrator::{FormLayout, FormOrchestrator, FormPayload, SubmissionState, SubmitOutcome};

/// Wire the search page with the default layout and the HTTP suggestion
/// endpoint from `config`.
pub fn page(document: &Document, config: &Config) -> anyhow::Result<FormOrchestrator> {
    let source = HttpSuggestionSource::new(&config.suggestions)
        .context("Failed to build suggestion client")?;
    let form = FormOrchestrator::initialize(document, &FormLayout::default(), Arc::new(source), config)?;
    tracing::info!("Search form ready, suggestions from {}", config.suggestions.endpoint);
    Ok(form)
}

/// [`page`] with settings from [`Config::load`]: the `config/` files next to
/// the working directory, then `FLIGHTFINDER__*` overrides.
pub fn page_from_env(document: &Document) -> anyhow::Result<FormOrchestrator> {
    let config = Config::load().context("Failed to load configuration")?;
    page(document, &config)
}
