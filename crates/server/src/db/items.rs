//! Item repository for database operations.
//!
//! Items use single-table inheritance: the `item_type` column discriminates
//! subtypes, with book-only columns nullable. The book operations below are
//! restricted to rows with `item_type = 'book'`.

use rust_decimal::Decimal;
use sqlx::PgPool;

use bookshop_core::ItemId;

use super::RepositoryError;
use crate::models::{CreateBookInput, Item, ItemDetails};

/// Internal row type for item queries.
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: i32,
    name: String,
    price: Decimal,
    stock_quantity: i32,
    item_type: String,
    author: Option<String>,
    isbn: Option<String>,
}

impl TryFrom<ItemRow> for Item {
    type Error = RepositoryError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        let details = match row.item_type.as_str() {
            "item" => ItemDetails::Item,
            "book" => ItemDetails::Book {
                author: row.author,
                isbn: row.isbn,
            },
            other => {
                return Err(RepositoryError::DataCorruption(format!(
                    "unknown item_type in database: {other}"
                )));
            }
        };

        Ok(Self {
            id: ItemId::new(row.id),
            name: row.name,
            price: row.price,
            stock_quantity: row.stock_quantity,
            details,
        })
    }
}

/// Repository for item database operations.
pub struct ItemRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ItemRepository<'a> {
    /// Create a new item repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new book, linking any requested categories.
    ///
    /// Category IDs that do not exist are skipped silently.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a statement fails.
    /// Returns `RepositoryError::DataCorruption` if the returned row is invalid.
    pub async fn create_book(&self, input: &CreateBookInput) -> Result<Item, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ItemRow>(
            r"
            INSERT INTO items (name, price, stock_quantity, item_type, author, isbn)
            VALUES ($1, $2, $3, 'book', $4, $5)
            RETURNING id, name, price, stock_quantity, item_type, author, isbn
            ",
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock_quantity)
        .bind(input.author.as_deref())
        .bind(input.isbn.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        if !input.category_ids.is_empty() {
            let ids: Vec<i32> = input.category_ids.iter().map(|id| id.as_i32()).collect();
            sqlx::query(
                r"
                INSERT INTO item_categories (item_id, category_id)
                SELECT $1, id FROM categories WHERE id = ANY($2)
                ",
            )
            .bind(row.id)
            .bind(&ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        row.try_into()
    }

    /// Get a book by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_book(&self, id: ItemId) -> Result<Option<Item>, RepositoryError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r"
            SELECT id, name, price, stock_quantity, item_type, author, isbn
            FROM items
            WHERE id = $1 AND item_type = 'book'
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// List books with offset/limit pagination, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if any row is invalid.
    pub async fn list_books(&self, skip: i64, limit: i64) -> Result<Vec<Item>, RepositoryError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r"
            SELECT id, name, price, stock_quantity, item_type, author, isbn
            FROM items
            WHERE item_type = 'book'
            ORDER BY id
            OFFSET $1 LIMIT $2
            ",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
