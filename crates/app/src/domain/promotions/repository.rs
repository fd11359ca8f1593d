//! Promotions Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::promotions::{
    data::NewPromotion,
    records::{PromotionRecord, PromotionUuid},
};

const LIST_PROMOTIONS_SQL: &str = include_str!("sql/list_promotions.sql");
const GET_PROMOTION_SQL: &str = include_str!("sql/get_promotion.sql");
const CREATE_PROMOTION_SQL: &str = include_str!("sql/create_promotion.sql");
const UPDATE_PROMOTION_SQL: &str = include_str!("sql/update_promotion.sql");
const DELETE_PROMOTION_SQL: &str = include_str!("sql/delete_promotion.sql");

/// PostgreSQL-backed promotions repository.
#[derive(Debug, Clone)]
pub(crate) struct PgPromotionsRepository {
    pool: PgPool,
}

impl PgPromotionsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn list_promotions(&self) -> Result<Vec<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(LIST_PROMOTIONS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    pub(crate) async fn get_promotion(
        &self,
        promotion: PromotionUuid,
    ) -> Result<PromotionRecord, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(GET_PROMOTION_SQL)
            .bind(promotion.into_uuid())
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn create_promotion(
        &self,
        promotion: PromotionUuid,
        data: &NewPromotion,
    ) -> Result<PromotionRecord, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(CREATE_PROMOTION_SQL)
            .bind(promotion.into_uuid())
            .bind(&data.name)
            .bind(SqlxTimestamp::from(data.start_date))
            .bind(SqlxTimestamp::from(data.end_date))
            .bind(data.budget)
            .bind(data.expected_sales_impact)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn update_promotion(
        &self,
        promotion: PromotionUuid,
        data: &NewPromotion,
    ) -> Result<PromotionRecord, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(UPDATE_PROMOTION_SQL)
            .bind(promotion.into_uuid())
            .bind(&data.name)
            .bind(SqlxTimestamp::from(data.start_date))
            .bind(SqlxTimestamp::from(data.end_date))
            .bind(data.budget)
            .bind(data.expected_sales_impact)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn delete_promotion(
        &self,
        promotion: PromotionUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PROMOTION_SQL)
            .bind(promotion.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for PromotionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: PromotionUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            start_date: row.try_get::<SqlxTimestamp, _>("start_date")?.to_jiff(),
            end_date: row.try_get::<SqlxTimestamp, _>("end_date")?.to_jiff(),
            budget: row.try_get("budget")?,
            expected_sales_impact: row.try_get("expected_sales_impact")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
