use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, info_span};

use tailor_cli::report::{CheckSettings, DraftReport, check_draft, check_session};
use tailor_core::DraftCommand;
use tailor_model::{Draft, TagCatalog};
use tailor_validate::{ValidationOptions, Validator};

use crate::cli::{CatalogArgs, CheckArgs, ReplayArgs, ValidateArgs};

pub fn run_validate(args: &ValidateArgs) -> Result<DraftReport> {
    let source = args.draft.display().to_string();
    let span = info_span!("validate", draft = %source);
    let _guard = span.enter();

    let draft: Draft = read_json(&args.draft).context("load draft")?;
    let catalog = load_catalog(&args.check.catalog)?;
    let validator = build_validator(&args.check);
    let settings = CheckSettings {
        catalog: &catalog,
        validator: &validator,
        include_payload: args.check.payload,
    };
    Ok(check_draft(&source, &draft, &settings))
}

pub fn run_replay(args: &ReplayArgs) -> Result<DraftReport> {
    let source = args.session.display().to_string();
    let span = info_span!("replay", session = %source);
    let _guard = span.enter();

    let commands: Vec<DraftCommand> = read_json(&args.session).context("load session")?;
    let catalog = load_catalog(&args.check.catalog)?;
    let validator = build_validator(&args.check);
    let settings = CheckSettings {
        catalog: &catalog,
        validator: &validator,
        include_payload: args.check.payload,
    };
    Ok(check_session(&source, commands, &settings))
}

pub fn run_tags(args: &CatalogArgs) -> Result<TagCatalog> {
    load_catalog(args)
}

pub fn load_catalog(args: &CatalogArgs) -> Result<TagCatalog> {
    let catalog = match &args.catalog {
        Some(path) => TagCatalog::load(path).context("load tag catalog")?,
        None => TagCatalog::builtin().context("load built-in tag catalog")?,
    };
    debug!(
        categories = catalog.categories().len(),
        tags = catalog.tag_count(),
        "loaded tag catalog"
    );
    Ok(catalog)
}

fn build_validator(args: &CheckArgs) -> Validator {
    let mut options = ValidationOptions::default();
    if let Some(min_tags) = args.min_tags {
        options = options.with_min_tags(min_tags);
    }
    Validator::new().with_options(options)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))
}
