//! Seed the database with sample data for local development.
//!
//! Creates a couple of members, two categories, and a handful of books
//! linked to them. Members and categories that already exist (unique
//! email/name) are skipped, so re-running is harmless; books are inserted
//! every run.

use rust_decimal::Decimal;
use secrecy::SecretString;
use tracing::{info, warn};

use bookshop_core::{CategoryId, Email};
use bookshop_server::db::{
    self, CategoryRepository, ItemRepository, MemberRepository, RepositoryError,
};
use bookshop_server::models::CreateBookInput;

/// Seed the database with sample members, categories, and books.
///
/// # Errors
///
/// Returns an error if the database URL is missing or an insert fails for
/// a reason other than a uniqueness conflict.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("BOOKSHOP_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| "Missing environment variable: BOOKSHOP_DATABASE_URL")?;

    let pool = db::create_pool(&SecretString::from(database_url)).await?;

    let members = MemberRepository::new(&pool);
    for (name, email) in [
        ("alice", "alice@example.com"),
        ("bob", "bob@example.com"),
    ] {
        let email = Email::parse(email)?;
        match members.create(name, &email).await {
            Ok(member) => info!("Created member {} (id={})", member.name, member.id),
            Err(RepositoryError::Conflict(_)) => warn!("Member {email} already exists, skipping"),
            Err(e) => return Err(e.into()),
        }
    }

    let categories = CategoryRepository::new(&pool);
    let mut category_ids: Vec<CategoryId> = Vec::new();
    for name in ["Fiction", "Science"] {
        match categories.create(name).await {
            Ok(category) => {
                info!("Created category {} (id={})", category.name, category.id);
                category_ids.push(category.id);
            }
            Err(RepositoryError::Conflict(_)) => warn!("Category {name} already exists, skipping"),
            Err(e) => return Err(e.into()),
        }
    }

    let items = ItemRepository::new(&pool);
    for (name, price, stock, author, isbn) in [
        ("The Left Hand of Darkness", 15000, 10, "Ursula K. Le Guin", "9780441478125"),
        ("A Brief History of Time", 18000, 5, "Stephen Hawking", "9780553380163"),
        ("Snow Crash", 12000, 7, "Neal Stephenson", "9780553380958"),
    ] {
        let book = items
            .create_book(&CreateBookInput {
                name: name.to_owned(),
                price: Decimal::new(price, 0),
                stock_quantity: stock,
                author: Some(author.to_owned()),
                isbn: Some(isbn.to_owned()),
                category_ids: category_ids.clone(),
            })
            .await?;
        info!("Created book {} (id={})", book.name, book.id);
    }

    info!("Seeding complete!");
    Ok(())
}
