use crate::client::api::{ApiClient, ApiConfig, MemoryTokenStore, TokenStore};

/// Expect the client to read whatever the injected store holds
#[test]
fn client_uses_injected_token_store() {
    let tokens = MemoryTokenStore::default();
    tokens.set("abc123");

    let client = ApiClient::new(
        ApiConfig {
            base_url: "http://localhost:5000".to_string(),
        },
        tokens.clone(),
    );

    assert_eq!(client.tokens().get().as_deref(), Some("abc123"));

    // The store is shared, not copied; clearing through the client is
    // visible to the original handle, which is what the 401 path relies on.
    client.tokens().clear();
    assert_eq!(tokens.get(), None);
}

/// Expect set to overwrite and clear to empty the slot
#[test]
fn memory_store_round_trips() {
    let tokens = MemoryTokenStore::default();
    assert_eq!(tokens.get(), None);

    tokens.set("first");
    tokens.set("second");
    assert_eq!(tokens.get().as_deref(), Some("second"));

    tokens.clear();
    assert_eq!(tokens.get(), None);
}
