use crate::setting::{self, ContentSettings};
use crate::{loader, EdgeError, Result};
use clap::{builder::ValueHint, Parser, Subcommand};
use compose::brands::BrandTable;
use compose::PreviewSource;
use domain::kind::SectionKind;
use domain::schema;
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};
use tracing::{error, info};

/// Vitrina CLI — content pipeline over a site directory
#[tokio::main(flavor = "multi_thread")]
#[tracing::instrument(skip_all)]
pub async fn start() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(cmd) => do_check(cmd).await,
        Commands::Compose(cmd) => do_compose(cmd).await,
    };

    result.map_or_else(
        |e| {
            error!("vitrina failed: {}", e);
            ExitCode::FAILURE
        },
        |_| ExitCode::SUCCESS,
    )
}

#[derive(Parser, Debug)]
#[command(name = "vitrina", version, about = "Vitrina content pipeline tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate every content document under the specified directory
    Check(DirCmd),
    /// Compose the landing page and print it as JSON
    Compose(DirCmd),
}

#[derive(Parser, Debug)]
pub struct DirCmd {
    /// Target directory (or set VITRINA_DIR)
    ///
    /// Must exist, be a directory, and be readable.
    #[arg(
        value_name = "DIR",
        env = "VITRINA_DIR",
        required = true,
        value_hint = ValueHint::DirPath,
        value_parser = dir_must_exist
    )]
    pub dir: PathBuf,
}

fn dir_must_exist(s: &str) -> std::result::Result<PathBuf, String> {
    let p = PathBuf::from(s);
    if !p.exists() {
        return Err(format!("Not found: {}", p.display()));
    }
    if !p.is_dir() {
        return Err(format!("Not a directory: {}", p.display()));
    }
    Ok(p)
}

fn content_settings(dir: &Path) -> Result<(ContentSettings, PathBuf)> {
    let settings = setting::load(dir)?;
    let content = settings.content.unwrap_or_default();
    let root = dir.join(&content.dir);
    Ok((content, root))
}

#[tracing::instrument(skip_all)]
async fn do_compose(cmd: DirCmd) -> Result<()> {
    let then = Instant::now();
    let (content, root) = content_settings(&cmd.dir)?;
    info!(
        "Settings parsed in {} milliseconds",
        then.elapsed().as_millis()
    );

    let then = Instant::now();
    let page_doc = loader::load_json(&content.pages_path(&root).join("home.json")).await?;
    let page = schema::page::parse(&page_doc)?;
    let store = loader::load_sections(&content.sections_path(&root)).await?;
    info!(
        "Content loaded in {} milliseconds",
        then.elapsed().as_millis()
    );

    let then = Instant::now();
    let source = load_preview_source(&content, &root).await?;
    info!(
        "Catalog loaded in {} milliseconds",
        then.elapsed().as_millis()
    );

    let sections = compose::compose(&page, &store, &source)?;
    info!(sections = sections.len(), "landing page composed");

    println!("{}", serde_json::to_string_pretty(&sections)?);
    Ok(())
}

/// Raw product documents per category, for preview tab resolution. A
/// site without a catalog composes with empty tabs.
async fn load_preview_source(content: &ContentSettings, root: &Path) -> Result<PreviewSource> {
    let mut source = PreviewSource::new();
    let catalog_root = content.catalog_path(root);
    if let Some(doc) = loader::load_optional_json(&catalog_root.join("categories.json")).await? {
        let categories = domain::catalog::parse_categories(&doc)?;
        for category in &categories {
            let dir = catalog_root.join("products").join(&category.key);
            source.insert(category.key.clone(), loader::load_products(&dir).await?);
        }
    }
    Ok(source)
}

#[tracing::instrument(skip_all)]
async fn do_check(cmd: DirCmd) -> Result<()> {
    let then = Instant::now();
    let (content, root) = content_settings(&cmd.dir)?;
    info!(
        "Settings parsed in {} milliseconds",
        then.elapsed().as_millis()
    );

    let mut failures = 0usize;

    // ── page document ────────────────────────────────────────────────────
    let page_path = content.pages_path(&root).join("home.json");
    let page_doc = loader::load_json(&page_path).await?;
    match schema::page::parse(&page_doc) {
        Ok(page) => info!(sections = page.sections.len(), "page document valid"),
        Err(err) => {
            error!("page document invalid: {}", err);
            failures += 1;
        }
    }

    // ── section documents ────────────────────────────────────────────────
    let store = loader::load_sections(&content.sections_path(&root)).await?;
    for kind in SectionKind::ALL {
        let Some(doc) = store.get(kind) else { continue };
        match schema::validate(kind, doc) {
            Ok(()) => info!(%kind, "section document valid"),
            Err(err) => {
                error!(%kind, "section document invalid: {}", err);
                failures += 1;
            }
        }
    }

    // ── brand table ──────────────────────────────────────────────────────
    if let Some(doc) = loader::load_optional_json(&root.join("brands.json")).await? {
        match serde_json::from_value::<BrandTable>(doc) {
            Ok(_) => info!("brand table valid"),
            Err(err) => {
                error!("brand table invalid: {}", err);
                failures += 1;
            }
        }
    }

    // ── catalog ──────────────────────────────────────────────────────────
    let catalog_root = content.catalog_path(&root);
    if let Some(doc) = loader::load_optional_json(&catalog_root.join("categories.json")).await? {
        match domain::catalog::parse_categories(&doc) {
            Ok(categories) => {
                for category in &categories {
                    let dir = catalog_root.join("products").join(&category.key);
                    let products = loader::load_products(&dir).await?;
                    let mut valid = 0usize;
                    for (slug, product_doc) in &products {
                        match domain::catalog::parse_product_in_category(product_doc, &category.key)
                        {
                            Ok(_) => valid += 1,
                            Err(err) => {
                                error!(category = %category.key, %slug, "product invalid: {}", err);
                                failures += 1;
                            }
                        }
                    }
                    info!(
                        category = %category.key,
                        products = products.len(),
                        valid,
                        "category checked"
                    );
                }
            }
            Err(err) => {
                error!("categories document invalid: {}", err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(EdgeError::CheckFailed(failures));
    }
    info!("all content documents valid");
    Ok(())
}
