use crate::config::cors::CorsConfig;
use crate::config::jwt::JwtConfig;
use crate::modules::items::service::ItemStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub items: ItemStore,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub fn init_app_state() -> AppState {
    AppState {
        items: ItemStore::new(),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
