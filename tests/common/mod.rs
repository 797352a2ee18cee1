use platter::config::cors::CorsConfig;
use platter::config::jwt::JwtConfig;
use platter::modules::items::service::ItemStore;
use platter::router::init_router;
use platter::state::AppState;
use platter::utils::jwt::create_access_token;
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

/// Build a router backed by a fresh store, returning the store handle so
/// tests can assert on storage contents independently of the HTTP surface.
#[allow(dead_code)]
pub fn setup_test_app() -> (axum::Router, ItemStore) {
    let store = ItemStore::new();
    let state = AppState {
        items: store.clone(),
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    };
    (init_router(state), store)
}

/// Mint a token carrying exactly the given permissions.
#[allow(dead_code)]
pub fn auth_token(permissions: &[&str]) -> String {
    create_access_token(
        Uuid::new_v4(),
        "test@example.com",
        permissions.iter().map(|p| p.to_string()).collect(),
        &test_jwt_config(),
    )
    .unwrap()
}
