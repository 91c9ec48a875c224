//! Vendor repository port.
//!
//! Defines the contract for persisting and querying Vendor aggregates.
//! The in-memory adapter backs development; PostgreSQL backs production.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, VendorId};
use crate::domain::vendor::{Vendor, VendorCategory};

/// Default page size for vendor listings.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Repository port for Vendor persistence.
#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// Save a new vendor.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, vendor: &Vendor) -> Result<(), DomainError>;

    /// Update an existing vendor.
    ///
    /// # Errors
    ///
    /// - `VendorNotFound` if the vendor doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, vendor: &Vendor) -> Result<(), DomainError>;

    /// Find a vendor by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &VendorId) -> Result<Option<Vendor>, DomainError>;

    /// List vendors matching a filter, ordered by name.
    async fn list(&self, filter: &VendorFilter) -> Result<VendorPage, DomainError>;

    /// Delete a vendor.
    ///
    /// # Errors
    ///
    /// - `VendorNotFound` if the vendor doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &VendorId) -> Result<(), DomainError>;
}

/// Filter and pagination for vendor listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorFilter {
    pub category: Option<VendorCategory>,
    /// Case-insensitive substring of the vendor's location.
    pub location: Option<String>,
    pub active_only: bool,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl VendorFilter {
    /// Create a filter for a 1-based page.
    ///
    /// The page size is clamped before the offset is derived, so the offset
    /// always lands on a boundary of the pages actually returned.
    pub fn paginated(page: u32, per_page: u32) -> Self {
        let per_page = per_page.clamp(1, MAX_PAGE_SIZE);
        Self {
            limit: Some(per_page),
            offset: Some(page.saturating_sub(1).saturating_mul(per_page)),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: VendorCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn active(mut self) -> Self {
        self.active_only = true;
        self
    }

    /// Effective page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    pub fn effective_offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }

    /// Whether a vendor passes the non-pagination criteria.
    pub fn matches(&self, vendor: &Vendor) -> bool {
        if self.active_only && !vendor.is_active() {
            return false;
        }
        if let Some(category) = self.category {
            if vendor.category() != category {
                return false;
            }
        }
        match &self.location {
            Some(needle) => vendor
                .location()
                .to_lowercase()
                .contains(&needle.trim().to_lowercase()),
            None => true,
        }
    }
}

/// One page of vendors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorPage {
    pub items: Vec<Vendor>,
    /// Total number of matching vendors.
    pub total: u64,
    pub has_more: bool,
}
