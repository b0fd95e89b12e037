//! Terminal front end for the boutique storefront and admin area.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use boutique_catalog::{Facet, ProductDraft};
use boutique_core::ProductId;
use boutique_storefront::views::{self, AddProductView, DashboardView, ShopView};
use boutique_storefront::{
    Credentials, FileTokenStore, HttpDirectory, ImageUpload, ProductDirectory, Session,
    StorefrontConfig, ViewError, render,
};

#[derive(Debug, Parser)]
#[command(name = "boutique", version, about = "Boutique storefront and admin console")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Browse the collection.
    Shop {
        #[arg(long, default_value = "All")]
        category: String,
        #[arg(long, default_value = "All")]
        audience: String,
    },
    /// Inventory stats and table (admin).
    Dashboard,
    /// Add a product (admin).
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        sub_category: String,
        #[arg(long)]
        audience: String,
        /// Comma-separated sizes, clothing only.
        #[arg(long, default_value = "")]
        sizes: String,
        /// Image file; repeat for up to five images.
        #[arg(long = "image", required = true)]
        images: Vec<PathBuf>,
    },
    /// Delete a product (admin).
    Delete {
        id: ProductId,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Log in to the admin area.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "BOUTIQUE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log out of the admin area.
    Logout,
}

#[tokio::main]
async fn main() -> ExitCode {
    boutique_observability::init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = StorefrontConfig::from_env();
    tracing::debug!(api_url = %config.api_url, "configuration loaded");

    let store = Arc::new(FileTokenStore::new(&config.session_file));
    let (writer, session) = Session::open(store).context("failed to open session")?;
    let directory: Arc<dyn ProductDirectory> = Arc::new(
        HttpDirectory::new(&config, session.clone()).context("failed to build HTTP client")?,
    );

    match cli.command {
        Command::Shop { category, audience } => {
            let mut view = ShopView::new(directory);
            let source = view.load().await;
            view.select_category(Facet::parse(&category));
            view.select_audience(Facet::parse(&audience));

            if let Some(banner) = render::source_banner(source) {
                println!("{banner}");
            }
            println!("{}", view.result_label());
            let visible = view.visible();
            if visible.is_empty() {
                println!("No products found matching your filters");
            } else {
                print!("{}", render::product_grid(&visible));
            }
        }
        Command::Dashboard => {
            let view = DashboardView::open(directory, &session)
                .await
                .map_err(|e| view_failure(e, "load dashboard"))?;
            if let Some(banner) = render::source_banner(view.source()) {
                println!("{banner}");
            }
            print!("{}", render::stats(&view.stats()));
            println!();
            print!("{}", render::inventory_table(view.products()));
        }
        Command::Add {
            name,
            description,
            price,
            category,
            sub_category,
            audience,
            sizes,
            images,
        } => {
            let mut view = AddProductView::open(directory, session)
                .map_err(|e| view_failure(e, "add product"))?;

            let mut uploads = Vec::with_capacity(images.len());
            for path in &images {
                let upload = ImageUpload::from_path(path)
                    .await
                    .with_context(|| format!("failed to read image {}", path.display()))?;
                uploads.push(upload);
            }

            let draft = ProductDraft {
                name,
                description,
                price,
                category,
                sub_category,
                target_audience: audience,
                sizes,
            };
            let created = view
                .submit(&draft, uploads)
                .await
                .map_err(|e| view_failure(e, "add product"))?;
            println!("Product Added Successfully! (id {})", created.id_typed());
        }
        Command::Delete { id, yes } => {
            let mut view = DashboardView::open(directory, &session)
                .await
                .map_err(|e| view_failure(e, "delete product"))?;
            if !yes && !confirm("Are you sure you want to delete this product?")? {
                println!("Cancelled");
                return Ok(());
            }
            view.delete(id)
                .await
                .map_err(|e| view_failure(e, "delete product"))?;
            println!("Deleted product {id}");
            print!("{}", render::stats(&view.stats()));
        }
        Command::Login { username, password } => {
            let credentials = Credentials { username, password };
            if let Err(e) = views::login(directory.as_ref(), &writer, &credentials).await {
                bail!(views::login_notice(&e));
            }
            println!("Logged in");
        }
        Command::Logout => {
            views::logout(&writer).map_err(|e| view_failure(e, "log out"))?;
            println!("Logged out");
        }
    }

    Ok(())
}

fn view_failure(err: ViewError, action: &str) -> anyhow::Error {
    match err {
        ViewError::LoginRequired => {
            anyhow::anyhow!("Please log in first: boutique login --username <name>")
        }
        other => anyhow::anyhow!(other.notice(action)),
    }
}

fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{question} [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
