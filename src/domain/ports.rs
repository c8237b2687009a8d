use super::merchant::Merchant;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait MerchantStore: Send + Sync {
    async fn store(&self, merchant: Merchant) -> Result<()>;
    async fn get(&self, organization_id: &str) -> Result<Option<Merchant>>;
    async fn all(&self) -> Result<Vec<Merchant>>;
}

pub type MerchantStoreBox = Box<dyn MerchantStore>;
