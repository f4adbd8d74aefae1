//! CLI administration tool for course-api.
//!
//! Inspects and maintains courses directly in the database, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all courses
//! cargo run --bin admin -- course list
//!
//! # Show one course with its review links
//! cargo run --bin admin -- course show 3
//!
//! # Delete a course (asks for confirmation unless -y)
//! cargo run --bin admin -- course delete 3
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use course_api::api::links::{course_uri, review_uri};
use course_api::application::services::CourseService;
use course_api::infrastructure::persistence::PgCourseRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing course-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and maintain courses
    Course {
        #[command(subcommand)]
        action: CourseAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Course subcommands.
#[derive(Subcommand)]
enum CourseAction {
    /// List all courses
    List,

    /// Show one course
    Show {
        /// Course ID
        id: i64,
    },

    /// Delete a course
    Delete {
        /// Course ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Course { action } => handle_course_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches course commands.
async fn handle_course_action(action: CourseAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgCourseRepository::new(Arc::new(pool.clone())));
    let service = CourseService::new(repo);

    match action {
        CourseAction::List => list_courses(&service).await?,
        CourseAction::Show { id } => show_course(&service, id).await?,
        CourseAction::Delete { id, yes } => delete_course(&service, id, yes).await?,
    }

    Ok(())
}

/// Lists all courses as a table.
///
/// ```text
/// 📚 Courses
///
///   ID   Title                          Reviews  URL
///   ───────────────────────────────────────────────────────────────────────────
///   1    Python Basics                  2        https://example.com/python
/// ```
async fn list_courses(service: &CourseService) -> Result<()> {
    println!("{}", "📚 Courses".bright_blue().bold());
    println!();

    let courses = service
        .list_courses()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list courses: {}", e))?;

    if courses.is_empty() {
        println!("{}", "  No courses found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<8} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Reviews".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for details in &courses {
        println!(
            "  {:<4} {:<30} {:<8} {}",
            details.course.id.to_string().bright_black(),
            details.course.title.cyan(),
            details.review_ids.len(),
            details.course.url
        );
    }

    println!();
    println!(
        "  Total: {}",
        courses.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints one course with its URI and review links.
async fn show_course(service: &CourseService, id: i64) -> Result<()> {
    let details = service
        .get_course(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "📘 Course".bright_blue().bold());
    println!();
    println!("  ID:      {}", details.course.id.to_string().bright_black());
    println!("  Title:   {}", details.course.title.cyan());
    println!("  URL:     {}", details.course.url);
    println!("  URI:     {}", course_uri(details.course.id));
    println!(
        "  Created: {}",
        details
            .course
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );

    if details.review_ids.is_empty() {
        println!("  Reviews: {}", "none".bright_black());
    } else {
        println!("  Reviews:");
        for review_id in details.review_ids {
            println!("    - {}", review_uri(review_id));
        }
    }
    println!();

    Ok(())
}

/// Deletes a course after confirmation.
///
/// Reviews attached to the course are removed with it.
async fn delete_course(service: &CourseService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Course".bright_blue().bold());
    println!();

    let details = service
        .get_course(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Course:  {}", details.course.title.cyan());
    println!("  ID:      {}", details.course.id.to_string().bright_black());
    println!("  Reviews: {}", details.review_ids.len());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this course and its reviews?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_course(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete course: {}", e))?;

    println!();
    println!("{}", "✅ Course deleted".green().bold());
    println!();

    Ok(())
}

/// Displays course and review counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let courses_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
        .fetch_one(pool)
        .await?;

    let reviews_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
        .fetch_one(pool)
        .await?;

    println!(
        "  Courses: {}",
        courses_count.to_string().bright_green().bold()
    );
    println!(
        "  Reviews: {}",
        reviews_count.to_string().bright_green().bold()
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

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
