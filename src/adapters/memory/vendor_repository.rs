//! In-memory vendor repository.
//!
//! Default store when no database is configured. Contents are lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, VendorId};
use crate::domain::vendor::Vendor;
use crate::ports::{VendorFilter, VendorPage, VendorRepository};

/// In-memory storage for vendors.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVendorRepository {
    vendors: Arc<RwLock<HashMap<VendorId, Vendor>>>,
}

impl InMemoryVendorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored vendors.
    pub async fn len(&self) -> usize {
        self.vendors.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.vendors.read().await.is_empty()
    }
}

#[async_trait]
impl VendorRepository for InMemoryVendorRepository {
    async fn save(&self, vendor: &Vendor) -> Result<(), DomainError> {
        self.vendors
            .write()
            .await
            .insert(*vendor.id(), vendor.clone());
        Ok(())
    }

    async fn update(&self, vendor: &Vendor) -> Result<(), DomainError> {
        let mut vendors = self.vendors.write().await;
        match vendors.get_mut(vendor.id()) {
            Some(existing) => {
                *existing = vendor.clone();
                Ok(())
            }
            None => Err(not_found(vendor.id())),
        }
    }

    async fn find_by_id(&self, id: &VendorId) -> Result<Option<Vendor>, DomainError> {
        Ok(self.vendors.read().await.get(id).cloned())
    }

    async fn list(&self, filter: &VendorFilter) -> Result<VendorPage, DomainError> {
        let vendors = self.vendors.read().await;
        let mut matching: Vec<&Vendor> = vendors.values().filter(|v| filter.matches(v)).collect();
        matching.sort_by(|a, b| {
            a.name()
                .to_lowercase()
                .cmp(&b.name().to_lowercase())
                .then_with(|| a.id().cmp(b.id()))
        });

        let total = matching.len();
        let offset = filter.effective_offset() as usize;
        let limit = filter.effective_limit() as usize;
        let items: Vec<Vendor> = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(VendorPage {
            has_more: offset + items.len() < total,
            total: total as u64,
            items,
        })
    }

    async fn delete(&self, id: &VendorId) -> Result<(), DomainError> {
        match self.vendors.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(not_found(id)),
        }
    }
}

fn not_found(id: &VendorId) -> DomainError {
    DomainError::new(ErrorCode::VendorNotFound, format!("Vendor not found: {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vendor::{ContactInfo, NewVendor, PriceRange, VendorCategory};

    fn vendor(name: &str, category: VendorCategory, location: &str) -> Vendor {
        Vendor::create(
            VendorId::new(),
            NewVendor {
                name: name.to_string(),
                category,
                location: location.to_string(),
                contact: ContactInfo::default(),
                specialties: vec![],
                rating: 4.0,
                price_range: PriceRange::MidRange,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_and_find() {
        let repo = InMemoryVendorRepository::new();
        let v = vendor("Apex", VendorCategory::Printing, "Mumbai");
        repo.save(&v).await.unwrap();

        let found = repo.find_by_id(v.id()).await.unwrap();
        assert_eq!(found, Some(v));
    }

    #[tokio::test]
    async fn update_missing_vendor_fails() {
        let repo = InMemoryVendorRepository::new();
        let v = vendor("Apex", VendorCategory::Printing, "Mumbai");

        let err = repo.update(&v).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::VendorNotFound);
    }

    #[tokio::test]
    async fn list_filters_and_sorts_by_name() {
        let repo = InMemoryVendorRepository::new();
        repo.save(&vendor("Zeta Prints", VendorCategory::Printing, "Navi Mumbai"))
            .await
            .unwrap();
        repo.save(&vendor("alpha prints", VendorCategory::Printing, "Mumbai"))
            .await
            .unwrap();
        repo.save(&vendor("Beta AV", VendorCategory::AvEquipment, "Mumbai"))
            .await
            .unwrap();
        repo.save(&vendor("Delhi Prints", VendorCategory::Printing, "Delhi"))
            .await
            .unwrap();

        let filter = VendorFilter::default()
            .with_category(VendorCategory::Printing)
            .with_location("mumbai");
        let page = repo.list(&filter).await.unwrap();

        let names: Vec<&str> = page.items.iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["alpha prints", "Zeta Prints"]);
        assert_eq!(page.total, 2);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn list_excludes_inactive_when_requested() {
        let repo = InMemoryVendorRepository::new();
        let mut inactive = vendor("Gone", VendorCategory::Other, "Pune");
        inactive.deactivate();
        repo.save(&inactive).await.unwrap();
        repo.save(&vendor("Here", VendorCategory::Other, "Pune"))
            .await
            .unwrap();

        let all = repo.list(&VendorFilter::default()).await.unwrap();
        let active = repo.list(&VendorFilter::default().active()).await.unwrap();

        assert_eq!(all.total, 2);
        assert_eq!(active.total, 1);
        assert_eq!(active.items[0].name(), "Here");
    }

    #[tokio::test]
    async fn list_paginates() {
        let repo = InMemoryVendorRepository::new();
        for i in 0..5 {
            repo.save(&vendor(&format!("Vendor {}", i), VendorCategory::Other, "Goa"))
                .await
                .unwrap();
        }

        let page = repo.list(&VendorFilter::paginated(2, 2)).await.unwrap();
        let names: Vec<&str> = page.items.iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["Vendor 2", "Vendor 3"]);
        assert_eq!(page.total, 5);
        assert!(page.has_more);
    }

    #[tokio::test]
    async fn delete_removes_vendor() {
        let repo = InMemoryVendorRepository::new();
        let v = vendor("Apex", VendorCategory::Printing, "Mumbai");
        repo.save(&v).await.unwrap();

        repo.delete(v.id()).await.unwrap();
        assert!(repo.is_empty().await);
        assert!(repo.delete(v.id()).await.is_err());
    }
}
