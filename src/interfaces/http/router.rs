//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BookingService, CatalogService, PetService, SlotService, UserService};
use crate::auth::JwtConfig;
use crate::infrastructure::DatabaseStorage;
use crate::interfaces::http::common::{ApiResponse, EmptyData};
use crate::interfaces::http::middleware::{auth_middleware, AuthState};

use super::modules::{auth, bookings, health, pets, services, slots};

/// Security scheme modifier for OpenAPI
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
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        auth::register_owner,
        auth::register_provider,
        auth::get_current_user,
        auth::delete_current_user,
        auth::submit_document,
        auth::verify_provider,
        // Catalog
        services::list_services,
        services::get_service,
        services::create_service,
        services::delete_service,
        services::list_provider_services,
        services::update_provider_service,
        // Slots
        slots::create_slot,
        slots::list_slots,
        slots::delete_slot,
        // Bookings
        bookings::create_booking,
        bookings::list_bookings,
        bookings::get_booking,
        bookings::delete_booking,
        bookings::update_booking_status,
        // Pets
        pets::list_pets,
        pets::create_pet,
        pets::get_pet,
        pets::update_pet,
        pets::delete_pet,
        pets::add_medical_record,
        pets::update_medical_record,
        pets::delete_medical_record,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            EmptyData,
            health::HealthResponse,
            health::ComponentHealth,
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            auth::RegisterOwnerRequest,
            auth::RegisterProviderRequest,
            auth::OwnerInfo,
            auth::ProviderInfo,
            auth::ProviderRegistrationResponse,
            auth::SubmitDocumentRequest,
            auth::DocumentDto,
            auth::ProfileResponse,
            // Catalog
            services::ServiceDetailsDto,
            services::ServiceDto,
            services::CreateServiceRequest,
            services::CreatedServiceResponse,
            services::ProviderServiceDto,
            services::CatalogEntryDto,
            services::UpdateProviderServiceRequest,
            // Slots
            slots::SlotDto,
            slots::CreateSlotRequest,
            // Bookings
            bookings::BookingDto,
            bookings::CreateBookingRequest,
            bookings::UpdateBookingStatusRequest,
            // Pets
            pets::PetDto,
            pets::PetProfileDto,
            pets::MedicalRecordDto,
            pets::CreatePetRequest,
            pets::UpdatePetRequest,
            pets::CreateMedicalRecordRequest,
            pets::UpdateMedicalRecordRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "Registration, login (JWT), profile, provider documents and verification"),
        (name = "Catalog", description = "Service catalog and per-provider service terms"),
        (name = "Slots", description = "Provider availability slots"),
        (name = "Bookings", description = "Booking of a provider slot for a pet"),
        (name = "Pets", description = "Owners' pets and medical records"),
    ),
    info(
        title = "PetCare Marketplace API",
        version = "1.0.0",
        description = "REST API connecting pet owners with vets, groomers and sitters",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    storage: DatabaseStorage,
    users: UserService,
    jwt_config: JwtConfig,
) -> Router {
    let middleware_state = AuthState {
        jwt_config,
        users: users.clone(),
    };

    let health_state = health::HealthState {
        db: storage.connection().clone(),
        started_at: Arc::new(Instant::now()),
    };
    let auth_state = auth::AuthHandlerState { users };
    let catalog_state = services::CatalogHandlerState {
        catalog: CatalogService::new(storage.clone()),
    };
    let slot_state = slots::SlotHandlerState {
        slots: SlotService::new(storage.clone()),
    };
    let booking_state = bookings::BookingHandlerState {
        bookings: BookingService::new(storage.clone()),
    };
    let pet_state = pets::PetHandlerState {
        pets: PetService::new(storage),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/register/owner", post(auth::register_owner))
        .route(
            "/api/v1/auth/register/provider",
            post(auth::register_provider),
        )
        .with_state(auth_state.clone());

    // Auth routes (protected)
    let account_routes = Router::new()
        .route(
            "/api/v1/auth/me",
            get(auth::get_current_user).delete(auth::delete_current_user),
        )
        .route("/api/v1/auth/documents", post(auth::submit_document))
        .route("/api/v1/providers/{id}/verify", post(auth::verify_provider))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_state);

    // Catalog routes (protected)
    let catalog_routes = Router::new()
        .route(
            "/api/v1/services",
            get(services::list_services).post(services::create_service),
        )
        .route(
            "/api/v1/services/{id}",
            get(services::get_service).delete(services::delete_service),
        )
        .route(
            "/api/v1/providers/{id}/services",
            get(services::list_provider_services),
        )
        .route(
            "/api/v1/provider-services/{id}",
            patch(services::update_provider_service),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(catalog_state);

    // Slot routes (protected)
    let slot_routes = Router::new()
        .route("/api/v1/slots", post(slots::create_slot))
        .route("/api/v1/slots/{id}", delete(slots::delete_slot))
        .route("/api/v1/providers/{id}/slots", get(slots::list_slots))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(slot_state);

    // Booking routes (protected)
    let booking_routes = Router::new()
        .route(
            "/api/v1/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route(
            "/api/v1/bookings/{id}",
            get(bookings::get_booking).delete(bookings::delete_booking),
        )
        .route(
            "/api/v1/bookings/{id}/status",
            patch(bookings::update_booking_status),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(booking_state);

    // Pet routes (protected)
    let pet_routes = Router::new()
        .route("/api/v1/pets", get(pets::list_pets).post(pets::create_pet))
        .route(
            "/api/v1/pets/{id}",
            get(pets::get_pet)
                .patch(pets::update_pet)
                .delete(pets::delete_pet),
        )
        .route("/api/v1/pets/{id}/records", post(pets::add_medical_record))
        .route(
            "/api/v1/medical-records/{id}",
            patch(pets::update_medical_record).delete(pets::delete_medical_record),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(pet_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(auth_routes)
        .merge(account_routes)
        .merge(catalog_routes)
        .merge(slot_routes)
        .merge(booking_routes)
        .merge(pet_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::application::AccountInput;
    use crate::infrastructure::database::storage::testing::in_memory_storage;

    async fn app() -> Router {
        let storage = in_memory_storage().await;
        let jwt = JwtConfig::default();
        let users = UserService::new(storage.clone(), jwt.clone(), crate::auth::password::MIN_COST);
        users
            .ensure_admin(AccountInput {
                email: "admin@petcare.local".into(),
                password: "admin-password".into(),
                first_name: "Admin".into(),
                surname: "Petcare".into(),
                patronymic: None,
            })
            .await
            .unwrap();
        create_api_router(storage, users, jwt)
    }

    async fn call(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn login(app: &Router, email: &str, password: &str) -> String {
        let (status, body) = call(
            app,
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": email, "password": password })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["data"]["token"].as_str().unwrap().to_string()
    }

    async fn register_owner(app: &Router, email: &str) -> String {
        let (status, body) = call(
            app,
            Method::POST,
            "/api/v1/auth/register/owner",
            None,
            Some(json!({
                "email": email,
                "password": "password123",
                "first_name": "Jane",
                "surname": "Doe",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        login(app, email, "password123").await
    }

    async fn register_groomer(app: &Router, email: &str) -> (i32, String) {
        let (status, body) = call(
            app,
            Method::POST,
            "/api/v1/auth/register/provider",
            None,
            Some(json!({
                "email": email,
                "password": "password123",
                "first_name": "Sam",
                "surname": "Brush",
                "company_name": "Brush & Co",
                "kind": "groomer",
                "hourly_rate_cents": 2500,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        let provider_id = body["data"]["provider"]["id"].as_i64().unwrap() as i32;
        (provider_id, login(app, email, "password123").await)
    }

    #[tokio::test]
    async fn health_reports_database() {
        let app = app().await;
        let (status, body) = call(&app, Method::GET, "/health", None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"]["status"], "ok");
    }

    #[tokio::test]
    async fn registered_owner_can_read_profile() {
        let app = app().await;
        let token = register_owner(&app, "Jane@Example.com").await;

        let (status, body) = call(&app, Method::GET, "/api/v1/auth/me", Some(&token), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["user"]["email"], "jane@example.com");
        assert_eq!(body["data"]["user"]["role"], "owner");
    }

    #[tokio::test]
    async fn protected_routes_require_token() {
        let app = app().await;

        let (status, body) = call(&app, Method::GET, "/api/v1/pets", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);

        let (status, _) = call(&app, Method::GET, "/api/v1/pets", Some("garbage"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let app = app().await;
        register_owner(&app, "owner@example.com").await;

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "owner@example.com", "password": "nope-nope" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn catalog_management_is_admin_only() {
        let app = app().await;
        let owner = register_owner(&app, "owner@example.com").await;

        let (status, _) = call(
            &app,
            Method::POST,
            "/api/v1/services",
            Some(&owner),
            Some(json!({
                "name": "Bath",
                "base_price_cents": 1500,
                "duration_min": 60,
                "details": { "kind": "groomer", "tools_required": "brush", "coat_type": "long" },
            })),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn booking_flow_end_to_end() {
        let app = app().await;
        let admin = login(&app, "admin@petcare.local", "admin-password").await;
        let (provider_id, groomer) = register_groomer(&app, "groomer@example.com").await;
        let owner = register_owner(&app, "owner@example.com").await;

        // A new groomer service fans out to the existing groomer.
        let (status, body) = call(
            &app,
            Method::POST,
            "/api/v1/services",
            Some(&admin),
            Some(json!({
                "name": "Bath",
                "base_price_cents": 1500,
                "duration_min": 60,
                "details": { "kind": "groomer", "tools_required": "brush", "coat_type": "long" },
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        assert_eq!(body["data"]["assigned_providers"], 1);
        let service_id = body["data"]["service"]["id"].as_i64().unwrap();

        let (status, body) = call(
            &app,
            Method::GET,
            &format!("/api/v1/providers/{provider_id}/services"),
            Some(&owner),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["assignment"]["custom_price_cents"], 1500);

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/v1/slots",
            Some(&groomer),
            Some(json!({ "date": "2026-05-04", "start_time": "09:00:00", "end_time": "10:00:00" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        let slot_id = body["data"]["id"].as_i64().unwrap();

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/v1/pets",
            Some(&owner),
            Some(json!({ "name": "Rex", "animal_type": "dog" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        let pet_id = body["data"]["id"].as_i64().unwrap();

        let booking = json!({ "pet_id": pet_id, "slot_id": slot_id, "service_id": service_id });
        let (status, body) = call(
            &app,
            Method::POST,
            "/api/v1/bookings",
            Some(&owner),
            Some(booking.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        assert_eq!(body["data"]["status"], "pending");
        let booking_id = body["data"]["id"].as_i64().unwrap();

        let (status, _) = call(&app, Method::POST, "/api/v1/bookings", Some(&owner), Some(booking)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = call(&app, Method::GET, "/api/v1/bookings", Some(&groomer), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

        let status_uri = format!("/api/v1/bookings/{booking_id}/status");
        let (status, _) = call(
            &app,
            Method::PATCH,
            &status_uri,
            Some(&owner),
            Some(json!({ "status": "completed" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        for target in ["confirmed", "completed"] {
            let (status, body) = call(
                &app,
                Method::PATCH,
                &status_uri,
                Some(&groomer),
                Some(json!({ "status": target })),
            )
            .await;
            assert_eq!(status, StatusCode::OK, "{body}");
            assert_eq!(body["data"]["status"], target);
        }

        let (status, _) = call(
            &app,
            Method::DELETE,
            &format!("/api/v1/bookings/{booking_id}"),
            Some(&owner),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_pet_is_not_found() {
        let app = app().await;
        let owner = register_owner(&app, "owner@example.com").await;

        let (status, body) = call(&app, Method::GET, "/api/v1/pets/999", Some(&owner), None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn openapi_lists_booking_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/bookings/{id}/status"));
        assert!(doc.paths.paths.contains_key("/api/v1/providers/{id}/services"));
    }
}
