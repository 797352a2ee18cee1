use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::items::model::{CreateItemDto, Item};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::items::controller::get_items,
        crate::modules::items::controller::get_item_by_id,
        crate::modules::items::controller::create_item,
        crate::modules::items::controller::upsert_item,
        crate::modules::items::controller::delete_item,
    ),
    components(
        schemas(
            Item,
            CreateItemDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Items", description = "Menu item catalog endpoints")
    ),
    info(
        title = "Platter API",
        version = "0.1.0",
        description = "A menu item catalog REST API built with Rust and Axum featuring JWT-based authentication and permission-guarded writes.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
