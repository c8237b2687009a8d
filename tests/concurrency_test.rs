use rust_decimal_macros::dec;
use std::sync::Arc;
use trendpix::application::service::{PixRequest, PixService};
use trendpix::config::PixSettings;
use trendpix::domain::merchant::Merchant;
use trendpix::domain::ports::{MerchantStore, MerchantStoreBox};
use trendpix::infrastructure::in_memory::InMemoryMerchantStore;

#[tokio::test]
async fn test_store_as_trait_object_across_tasks() {
    let store: MerchantStoreBox = Box::new(InMemoryMerchantStore::new());

    // Verify Send + Sync by moving the boxed store into a task
    let handle = tokio::spawn(async move {
        store
            .store(Merchant::new("org-1", "Loja").with_pix_key("loja@bank.com"))
            .await
            .unwrap();
        store.get("org-1").await.unwrap().unwrap()
    });

    let merchant = handle.await.unwrap();
    assert_eq!(merchant.pix_key(), Some("loja@bank.com"));
}

#[tokio::test]
async fn test_concurrent_generation_is_consistent() {
    let store = InMemoryMerchantStore::new();
    for i in 0..10 {
        store
            .store(
                Merchant::new(format!("org-{i}"), format!("Loja {i}"))
                    .with_pix_key(format!("loja{i}@bank.com")),
            )
            .await
            .unwrap();
    }
    let service = Arc::new(PixService::new(Box::new(store), PixSettings::default()));

    let mut handles = Vec::new();
    for round in 0..5 {
        for i in 0..10 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                let response = service
                    .generate(&PixRequest::new(format!("org-{i}"), dec!(19.90)))
                    .await
                    .unwrap();
                (round, i, response.payload)
            }));
        }
    }

    let mut by_org: Vec<Option<String>> = vec![None; 10];
    for handle in handles {
        let (_, i, payload) = handle.await.unwrap();
        match &by_org[i] {
            Some(first) => assert_eq!(first, &payload),
            None => by_org[i] = Some(payload),
        }
    }

    let distinct: std::collections::HashSet<_> = by_org.into_iter().flatten().collect();
    assert_eq!(distinct.len(), 10);
}
