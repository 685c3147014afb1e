//! CLI administration tool for the Yggrasoft Labs site.
//!
//! Database commands talk to PostgreSQL directly; content management goes
//! through the HTTP API with an admin token, the same way a browser panel would.
//!
//! # Usage
//!
//! ```bash
//! # Load the stock domains and site settings
//! cargo run --bin admin -- seed
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Print a bearer token for curl
//! cargo run --bin admin -- login
//!
//! # Manage blog posts interactively
//! cargo run --bin admin -- manage blogs
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (`seed`, `db`)
//! - `BASE_URL`: API base URL (`login`, `manage`), default `http://localhost:5000`
//! - `ADMIN_USERNAME` / `ADMIN_PASSWORD`: prompted for when unset

use yggrasoft_site::admin::seed::{stock_domains, stock_settings};
use yggrasoft_site::admin::{
    ApiClient, Blogs, FormTarget, Manager, ManagerState, Projects, Resource, ResourceBackend,
    Reviews,
};
use yggrasoft_site::api::dto::blog::CreateBlogRequest;
use yggrasoft_site::api::dto::project::CreateProjectRequest;
use yggrasoft_site::api::dto::review::CreateReviewRequest;
use yggrasoft_site::application::services::{DomainService, SettingsService};
use yggrasoft_site::config::Config;
use yggrasoft_site::infrastructure::persistence::{PgDomainRepository, PgSettingsRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::{Confirm, Input, Password, Select};
use sqlx::PgPool;
use std::sync::Arc;

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// CLI tool for managing the Yggrasoft Labs site.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace all domains and the settings document with the stock content
    Seed {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Log in and print a bearer token
    Login,

    /// Manage content through the API
    Manage {
        #[arg(value_enum)]
        collection: Collection,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[derive(Clone, Copy, ValueEnum)]
enum Collection {
    Blogs,
    Projects,
    Reviews,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { yes } => seed(&connect().await?, yes).await?,
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
        Commands::Login => {
            login().await?;
        }
        Commands::Manage { collection } => {
            let client = login().await?;
            match collection {
                Collection::Blogs => manage::<Blogs>(client, prompt_blog).await?,
                Collection::Projects => manage::<Projects>(client, prompt_project).await?,
                Collection::Reviews => manage::<Reviews>(client, prompt_review).await?,
            }
        }
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = Config::load_database_url()?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Replaces every domain and the settings document with the stock content.
async fn seed(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed stock content".bright_blue().bold());
    println!();

    let domains = stock_domains();
    for domain in &domains {
        println!("  {:<2} {}", domain.order.to_string().bright_black(), domain.name.cyan());
    }
    println!();
    println!(
        "{}",
        "⚠️  Existing domains will be deleted and settings overwritten.".yellow()
    );

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Seed the database?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let pool = Arc::new(pool.clone());
    let domain_service = DomainService::new(Arc::new(PgDomainRepository::new(pool.clone())));
    let settings_service = SettingsService::new(Arc::new(PgSettingsRepository::new(pool)));

    let created = domain_service
        .replace_all(domains)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to seed domains: {}", e))?;
    let settings = settings_service
        .update(stock_settings())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to seed settings: {}", e))?;

    println!();
    println!(
        "{} {} domains, settings for {}",
        "✅ Seeded".green().bold(),
        created.len().to_string().bright_white().bold(),
        settings.site_name.cyan()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let blogs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
                .fetch_one(pool)
                .await?;
            let subscribers: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM newsletter_subscribers WHERE is_active")
                    .fetch_one(pool)
                    .await?;

            println!("  PostgreSQL:  {}", version.bright_white());
            println!("  Blog posts:  {}", blogs.to_string().bright_green().bold());
            println!(
                "  Subscribers: {}",
                subscribers.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Logs in against `BASE_URL`, prompting for credentials that are not in the environment.
async fn login() -> Result<ApiClient> {
    let base_url = std::env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let username = match std::env::var("ADMIN_USERNAME") {
        Ok(u) => u,
        Err(_) => Input::new().with_prompt("Username").interact_text()?,
    };
    let password = match std::env::var("ADMIN_PASSWORD") {
        Ok(p) => p,
        Err(_) => Password::new().with_prompt("Password").interact()?,
    };

    let mut client = ApiClient::new(base_url.as_str())?;
    let session = client
        .login(&username, &password)
        .await
        .context("Login failed")?;

    println!(
        "{} {} (expires {})",
        "🔑 Logged in to".green(),
        base_url.cyan(),
        session.expires_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!("  Token: {}", session.token.bright_yellow());
    println!();

    Ok(client)
}

/// Interactive list/create/edit/delete loop for one collection.
async fn manage<R>(client: ApiClient, edit_form: fn(&mut R::Form) -> Result<()>) -> Result<()>
where
    R: Resource,
    ApiClient: ResourceBackend<R>,
{
    let mut manager = Manager::<R, ApiClient>::new(client);

    if let Err(e) = manager.load().await {
        println!("{} {}", "❌ Could not load list:".red(), e);
        return Ok(());
    }

    loop {
        print_list(&manager);

        let actions = ["Create", "Edit", "Delete", "Reload", "Quit"];
        let choice = Select::new()
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()?;

        match actions[choice] {
            "Create" => {
                manager.open_create()?;
                fill_and_submit(&mut manager, edit_form).await?;
            }
            "Edit" => {
                let Some(id) = pick(&manager)? else { continue };
                manager.open_edit(id)?;
                fill_and_submit(&mut manager, edit_form).await?;
            }
            "Delete" => {
                let Some(id) = pick(&manager)? else { continue };
                manager.request_delete(id)?;

                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete {} #{id}?", R::LABEL))
                    .default(false)
                    .interact()?;

                if confirmed {
                    match manager.confirm_delete().await {
                        Ok(()) => println!("{}", "✅ Deleted".green().bold()),
                        Err(e) => {
                            println!("{} {}", "❌ Delete failed:".red(), e);
                            manager.cancel();
                        }
                    }
                } else {
                    manager.cancel();
                }
            }
            "Reload" => {
                if let Err(e) = manager.load().await {
                    println!("{} {}", "❌ Reload failed:".red(), e);
                }
            }
            _ => return Ok(()),
        }
    }
}

fn print_list<R, B>(manager: &Manager<R, B>)
where
    R: Resource,
    B: ResourceBackend<R>,
{
    println!();
    if let ManagerState::ListLoaded { items, .. } = manager.state() {
        if items.is_empty() {
            println!("  {}", format!("No {}s yet", R::LABEL).yellow());
        }
        for item in items {
            println!("  {}", R::summary(item));
        }
    }
    println!();
}

fn pick<R, B>(manager: &Manager<R, B>) -> Result<Option<i64>>
where
    R: Resource,
    B: ResourceBackend<R>,
{
    let items = manager.items();
    if items.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = items.iter().map(R::summary).collect();
    let choice = Select::new()
        .with_prompt(format!("Select {}", R::LABEL))
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(choice.map(|i| R::id(&items[i])))
}

/// Prompts for every field, then submits. A failed save keeps the form open
/// so the operator can correct it and retry.
async fn fill_and_submit<R, B>(
    manager: &mut Manager<R, B>,
    edit_form: fn(&mut R::Form) -> Result<()>,
) -> Result<()>
where
    R: Resource,
    B: ResourceBackend<R>,
{
    let verb = match manager.form_target() {
        Some(FormTarget::Edit(id)) => format!("Edit {} #{id}", R::LABEL),
        _ => format!("New {}", R::LABEL),
    };
    println!("{}", verb.bright_blue().bold());

    loop {
        if let Some(form) = manager.form_mut() {
            edit_form(form)?;
        }

        match manager.submit().await {
            Ok(saved) => {
                println!("{} {}", "✅ Saved".green().bold(), R::summary(&saved));
                return Ok(());
            }
            Err(e) => {
                println!("{} {}", "❌ Save failed:".red(), e);
                let retry = Confirm::new()
                    .with_prompt("Edit and retry?")
                    .default(true)
                    .interact()?;
                if !retry {
                    manager.cancel();
                    return Ok(());
                }
            }
        }
    }
}

fn text(prompt: &str, current: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?)
}

/// Empty input clears the field.
fn optional(prompt: &str, current: Option<&str>) -> Result<Option<String>> {
    let value = text(prompt, current.unwrap_or_default())?;
    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

fn list(prompt: &str, current: &[String]) -> Result<Vec<String>> {
    let value = text(&format!("{prompt} (comma separated)"), &current.join(", "))?;
    Ok(value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect())
}

fn flag(prompt: &str, current: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(current)
        .interact()?)
}

fn number<T>(prompt: &str, current: T) -> Result<T>
where
    T: Clone + ToString + std::str::FromStr,
    <T as std::str::FromStr>::Err: ToString,
{
    Ok(Input::new()
        .with_prompt(prompt)
        .default(current)
        .interact_text()?)
}

fn prompt_blog(form: &mut CreateBlogRequest) -> Result<()> {
    form.title = text("Title", &form.title)?;
    form.slug = optional("Slug (blank to derive from title)", form.slug.as_deref())?;
    form.excerpt = text("Excerpt", &form.excerpt)?;
    form.content = text("Content", &form.content)?;
    form.cover_image = optional("Cover image URL", form.cover_image.as_deref())?;
    form.author = optional("Author", form.author.as_deref())?;
    form.tags = list("Tags", &form.tags)?;
    form.is_published = flag("Published?", form.is_published)?;
    Ok(())
}

fn prompt_project(form: &mut CreateProjectRequest) -> Result<()> {
    form.title = text("Title", &form.title)?;
    form.description = text("Description", &form.description)?;
    form.technologies = list("Technologies", &form.technologies)?;
    form.image_url = optional("Image URL", form.image_url.as_deref())?;
    form.github_url = optional("GitHub URL", form.github_url.as_deref())?;
    form.live_url = optional("Live URL", form.live_url.as_deref())?;
    form.featured = flag("Featured?", form.featured)?;
    form.order = number("Order", form.order)?;
    form.is_active = flag("Active?", form.is_active)?;
    Ok(())
}

fn prompt_review(form: &mut CreateReviewRequest) -> Result<()> {
    form.name = text("Name", &form.name)?;
    form.role = text("Role", &form.role)?;
    form.company = optional("Company", form.company.as_deref())?;
    form.rating = number("Rating (1-5)", form.rating)?;
    form.review = text("Review", &form.review)?;
    form.avatar = optional("Avatar URL", form.avatar.as_deref())?;
    let project = optional(
        "Project id (blank for none)",
        form.project_id.map(|id| id.to_string()).as_deref(),
    )?;
    form.project_id = project
        .map(|id| id.parse::<i64>())
        .transpose()
        .context("Project id must be a number")?;
    form.order = number("Order", form.order)?;
    form.is_active = flag("Active?", form.is_active)?;
    Ok(())
}
