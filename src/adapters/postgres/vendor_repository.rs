//! PostgreSQL implementation of VendorRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, VendorId};
use crate::domain::vendor::{ContactInfo, PriceRange, Vendor, VendorCategory};
use crate::ports::{VendorFilter, VendorPage, VendorRepository};

/// PostgreSQL implementation of VendorRepository.
#[derive(Clone)]
pub struct PostgresVendorRepository {
    pool: PgPool,
}

impl PostgresVendorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const FILTER_CLAUSE: &str = r#"
    WHERE ($1::text IS NULL OR category = $1)
      AND ($2::text IS NULL OR location ILIKE '%' || $2 || '%' ESCAPE '\')
      AND (NOT $3 OR active)
"#;

#[async_trait]
impl VendorRepository for PostgresVendorRepository {
    async fn save(&self, vendor: &Vendor) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO vendors (
                id, name, category, location, email, phone, website,
                specialties, rating, price_range, active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(vendor.id().as_uuid())
        .bind(vendor.name())
        .bind(vendor.category().as_str())
        .bind(vendor.location())
        .bind(vendor.contact().email.as_deref())
        .bind(vendor.contact().phone.as_deref())
        .bind(vendor.contact().website.as_deref())
        .bind(vendor.specialties())
        .bind(vendor.rating())
        .bind(vendor.price_range().as_str())
        .bind(vendor.is_active())
        .bind(vendor.created_at().as_datetime())
        .bind(vendor.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert vendor", e))?;

        Ok(())
    }

    async fn update(&self, vendor: &Vendor) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE vendors SET
                name = $2,
                category = $3,
                location = $4,
                email = $5,
                phone = $6,
                website = $7,
                specialties = $8,
                rating = $9,
                price_range = $10,
                active = $11,
                updated_at = $12
            WHERE id = $1
            "#,
        )
        .bind(vendor.id().as_uuid())
        .bind(vendor.name())
        .bind(vendor.category().as_str())
        .bind(vendor.location())
        .bind(vendor.contact().email.as_deref())
        .bind(vendor.contact().phone.as_deref())
        .bind(vendor.contact().website.as_deref())
        .bind(vendor.specialties())
        .bind(vendor.rating())
        .bind(vendor.price_range().as_str())
        .bind(vendor.is_active())
        .bind(vendor.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update vendor", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(vendor.id()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &VendorId) -> Result<Option<Vendor>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, category, location, email, phone, website,
                   specialties, rating, price_range, active, created_at, updated_at
            FROM vendors
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch vendor", e))?;

        row.map(row_to_vendor).transpose()
    }

    async fn list(&self, filter: &VendorFilter) -> Result<VendorPage, DomainError> {
        let category = filter.category.map(|c| c.as_str());
        let location = filter
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(escape_like);
        let limit = filter.effective_limit();
        let offset = filter.effective_offset();

        let (total,): (i64,) =
            sqlx::query_as(&format!("SELECT COUNT(*) FROM vendors {}", FILTER_CLAUSE))
                .bind(category)
                .bind(location.as_deref())
                .bind(filter.active_only)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to count vendors", e))?;

        let rows = sqlx::query(&format!(
            r#"
            SELECT id, name, category, location, email, phone, website,
                   specialties, rating, price_range, active, created_at, updated_at
            FROM vendors
            {}
            ORDER BY lower(name), id
            LIMIT $4 OFFSET $5
            "#,
            FILTER_CLAUSE
        ))
        .bind(category)
        .bind(location.as_deref())
        .bind(filter.active_only)
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list vendors", e))?;

        let items = rows
            .into_iter()
            .map(row_to_vendor)
            .collect::<Result<Vec<_>, _>>()?;
        let total = u64::try_from(total).unwrap_or(0);

        Ok(VendorPage {
            has_more: u64::from(offset) + (items.len() as u64) < total,
            total,
            items,
        })
    }

    async fn delete(&self, id: &VendorId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM vendors WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete vendor", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn not_found(id: &VendorId) -> DomainError {
    DomainError::new(ErrorCode::VendorNotFound, format!("Vendor not found: {}", id))
}

fn escape_like(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn column<'r, T>(row: &'r sqlx::postgres::PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

fn row_to_vendor(row: sqlx::postgres::PgRow) -> Result<Vendor, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let category: String = column(&row, "category")?;
    let price_range: String = column(&row, "price_range")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    Ok(Vendor::reconstitute(
        VendorId::from_uuid(id),
        column(&row, "name")?,
        VendorCategory::parse(&category),
        column(&row, "location")?,
        ContactInfo {
            email: column(&row, "email")?,
            phone: column(&row, "phone")?,
            website: column(&row, "website")?,
        },
        column(&row, "specialties")?,
        column(&row, "rating")?,
        PriceRange::parse(&price_range),
        column(&row, "active")?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
