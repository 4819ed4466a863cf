use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ticklist API",
        version = "0.1.0",
        description = "Token-gated CRUD over todo items."
    ),
    paths(
        crate::routes::list_todos,
        crate::routes::create_item,
        crate::routes::read_items,
        crate::routes::update_item,
        crate::routes::delete_item,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::CreateItemRequest,
        crate::dto::UpdateItemRequest,
        crate::dto::ItemIdResponse,
        crate::dto::TodoItemResponse,
        crate::dto::TodoListResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "todos", description = "Per-user todo listing"),
        (name = "items", description = "Todo item CRUD"),
        (name = "system", description = "Health and system status"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Adds Bearer token security scheme to the OpenAPI spec.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "HS256 token signed with the TICKLIST_JWT_SECRET shared secret.",
                        ))
                        .build(),
                ),
            );
        }
    }
}
