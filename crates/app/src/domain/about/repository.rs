//! About Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, types::Json};

use crate::domain::about::records::{ABOUT_KEY, AboutFeature, AboutRecord};

const GET_ABOUT_SQL: &str = include_str!("sql/get_about.sql");
const INSERT_ABOUT_SQL: &str = include_str!("sql/insert_about.sql");
const UPSERT_ABOUT_SQL: &str = include_str!("sql/upsert_about.sql");
const DELETE_ALL_ABOUT_SQL: &str = include_str!("sql/delete_all_about.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAboutRepository;

impl PgAboutRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_about(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Option<AboutRecord>, sqlx::Error> {
        query_as::<Postgres, AboutRecord>(GET_ABOUT_SQL)
            .bind(ABOUT_KEY)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Store `about` unless a row already exists.
    pub(crate) async fn insert_about(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        about: &AboutRecord,
    ) -> Result<(), sqlx::Error> {
        query(INSERT_ABOUT_SQL)
            .bind(ABOUT_KEY)
            .bind(about.title.as_str())
            .bind(about.description.as_str())
            .bind(Json(&about.features))
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn upsert_about(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        about: &AboutRecord,
    ) -> Result<AboutRecord, sqlx::Error> {
        query_as::<Postgres, AboutRecord>(UPSERT_ABOUT_SQL)
            .bind(ABOUT_KEY)
            .bind(about.title.as_str())
            .bind(about.description.as_str())
            .bind(Json(&about.features))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_all_about(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ALL_ABOUT_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for AboutRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            features: row.try_get::<Json<Vec<AboutFeature>>, _>("features")?.0,
        })
    }
}
