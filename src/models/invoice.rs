use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::models::item::LineItem;

/// A stored invoice. `id` carries the day-scoped sequence (`INV-YYYYMMDD-NNN`)
/// and never changes after creation; totals are persisted as computed at
/// creation time and are not recomputed on read.
#[derive(Serialize, Deserialize, FromRow, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub customer_name: String,
    pub customer_contact: String,
    pub customer_address: Option<String>,
    pub vehicle_name: Option<String>,
    pub vehicle_number: Option<String>,
    pub items: Json<Vec<LineItem>>,
    pub subtotal: f64,
    pub tax: f64,
    pub discount: f64,
    pub total: f64,
    pub date: NaiveDate,
}

/// One row of the dashboard grouping: invoices raised and revenue per day.
#[derive(Serialize, FromRow, Debug)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub count: i64,
    pub revenue: f64,
}

impl Invoice {
    pub async fn create(
        db: &sqlx::PgPool,
        id: &str,
        customer_name: &str,
        customer_contact: &str,
        customer_address: &Option<String>,
        vehicle_name: &Option<String>,
        vehicle_number: &Option<String>,
        items: &[LineItem],
        subtotal: &f64,
        tax: &f64,
        discount: &f64,
        total: &f64,
        date: &NaiveDate,
    ) -> Result<Invoice, sqlx::Error> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (id, customer_name, customer_contact, customer_address, vehicle_name, vehicle_number, items, subtotal, tax, discount, total, date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(customer_name)
        .bind(customer_contact)
        .bind(customer_address)
        .bind(vehicle_name)
        .bind(vehicle_number)
        .bind(Json(items.to_vec()))
        .bind(subtotal)
        .bind(tax)
        .bind(discount)
        .bind(total)
        .bind(date)
        .fetch_one(db)
        .await?;

        Ok(invoice)
    }

    pub async fn get_all(db: &sqlx::PgPool) -> Result<Vec<Invoice>, sqlx::Error> {
        let invoices = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT *
            FROM invoices
            ORDER BY date DESC, id DESC
            "#,
        )
        .fetch_all(db)
        .await?;

        Ok(invoices)
    }

    pub async fn search(db: &sqlx::PgPool, term: &str) -> Result<Vec<Invoice>, sqlx::Error> {
        let pattern = format!("%{}%", term);

        let invoices = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT *
            FROM invoices
            WHERE id ILIKE $1
                OR customer_contact ILIKE $1
                OR COALESCE(vehicle_number, '') ILIKE $1
            ORDER BY date DESC, id DESC
            "#,
        )
        .bind(pattern)
        .fetch_all(db)
        .await?;

        Ok(invoices)
    }

    pub async fn get_by_id(db: &sqlx::PgPool, id: &str) -> Result<Invoice, sqlx::Error> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT *
            FROM invoices
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(db)
        .await?;

        Ok(invoice)
    }

    /// Ids already assigned for one day, matched by the `INV-<YYYYMMDD>`
    /// prefix. Input to the sequence-number derivation.
    pub async fn get_ids_for_day(
        db: &sqlx::PgPool,
        day_part: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        let prefix = format!("INV-{}%", day_part);

        let ids = sqlx::query_scalar::<_, String>(
            r#"
            SELECT id
            FROM invoices
            WHERE id LIKE $1
            "#,
        )
        .bind(prefix)
        .fetch_all(db)
        .await?;

        Ok(ids)
    }

    /// Row count is ignored so deleting an id that no longer exists succeeds.
    pub async fn delete_by_id(db: &sqlx::PgPool, id: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            DELETE FROM invoices
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(db)
        .await?;

        Ok(())
    }

    pub async fn daily_summary(db: &sqlx::PgPool) -> Result<Vec<DailySummary>, sqlx::Error> {
        let rows = sqlx::query_as::<_, DailySummary>(
            r#"
            SELECT date, COUNT(*) AS count, COALESCE(SUM(total), 0) AS revenue
            FROM invoices
            GROUP BY date
            ORDER BY date
            "#,
        )
        .fetch_all(db)
        .await?;

        Ok(rows)
    }
}
