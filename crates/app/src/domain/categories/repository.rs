//! Categories Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::categories::{
    data::CategoryUpdate,
    records::{CategoryId, CategoryRecord},
};

const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");
const GET_CATEGORY_SQL: &str = include_str!("sql/get_category.sql");
const CREATE_CATEGORY_SQL: &str = include_str!("sql/create_category.sql");
const INSERT_CATEGORY_SQL: &str = include_str!("sql/insert_category.sql");
const UPDATE_CATEGORY_SQL: &str = include_str!("sql/update_category.sql");
const SET_CATEGORY_ORDER_SQL: &str = include_str!("sql/set_category_order.sql");
const DELETE_CATEGORY_SQL: &str = include_str!("sql/delete_category.sql");
const COUNT_CATEGORIES_SQL: &str = include_str!("sql/count_categories.sql");
const DELETE_ALL_CATEGORIES_SQL: &str = include_str!("sql/delete_all_categories.sql");

/// Safety cap on a single category listing.
pub(crate) const LIST_CATEGORIES_LIMIT: i64 = 100;

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCategoriesRepository;

impl PgCategoriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(LIST_CATEGORIES_SQL)
            .bind(LIST_CATEGORIES_LIMIT)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: &CategoryId,
    ) -> Result<Option<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(GET_CATEGORY_SQL)
            .bind(category.as_str())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Insert a category positioned after the current highest `order`.
    pub(crate) async fn create_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: &CategoryId,
        name: &str,
        slug: &str,
    ) -> Result<CategoryRecord, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(CREATE_CATEGORY_SQL)
            .bind(category.as_str())
            .bind(name)
            .bind(slug)
            .fetch_one(&mut **tx)
            .await
    }

    /// Insert a category with a caller-chosen id and order.
    pub(crate) async fn insert_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: &CategoryRecord,
    ) -> Result<(), sqlx::Error> {
        query(INSERT_CATEGORY_SQL)
            .bind(category.id.as_str())
            .bind(category.name.as_str())
            .bind(category.slug.as_str())
            .bind(category.order)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn update_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: &CategoryId,
        update: &CategoryUpdate,
    ) -> Result<Option<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(UPDATE_CATEGORY_SQL)
            .bind(category.as_str())
            .bind(update.name.as_str())
            .bind(update.slug.as_str())
            .bind(update.order)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn set_category_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: &CategoryId,
        order: i32,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(SET_CATEGORY_ORDER_SQL)
            .bind(category.as_str())
            .bind(order)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: &CategoryId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CATEGORY_SQL)
            .bind(category.as_str())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn count_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(COUNT_CATEGORIES_SQL)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_all_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ALL_CATEGORIES_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CategoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CategoryId::from_string(row.try_get::<String, _>("id")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            order: row.try_get("sort_order")?,
        })
    }
}
