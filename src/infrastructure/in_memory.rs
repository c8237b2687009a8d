use crate::domain::merchant::Merchant;
use crate::domain::ports::MerchantStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for merchants, keyed by organization id.
///
/// Uses `Arc<RwLock<HashMap<String, Merchant>>>` so clones share the same map.
#[derive(Default, Clone)]
pub struct InMemoryMerchantStore {
    merchants: Arc<RwLock<HashMap<String, Merchant>>>,
}

impl InMemoryMerchantStore {
    /// Creates a new, empty in-memory merchant store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MerchantStore for InMemoryMerchantStore {
    async fn store(&self, merchant: Merchant) -> Result<()> {
        let mut merchants = self.merchants.write().await;
        merchants.insert(merchant.organization_id.clone(), merchant);
        Ok(())
    }

    async fn get(&self, organization_id: &str) -> Result<Option<Merchant>> {
        let merchants = self.merchants.read().await;
        Ok(merchants.get(organization_id).cloned())
    }

    async fn all(&self) -> Result<Vec<Merchant>> {
        let merchants = self.merchants.read().await;
        let mut all: Vec<Merchant> = merchants.values().cloned().collect();
        all.sort_by(|a, b| a.organization_id.cmp(&b.organization_id));
        Ok(all)
    }
}
