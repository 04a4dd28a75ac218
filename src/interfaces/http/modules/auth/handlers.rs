//! Authentication & account API handlers
//!
//! Thin wrappers over `UserService`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{
    DocumentDto, LoginRequest, LoginResponse, ProfileResponse, ProviderInfo,
    ProviderRegistrationResponse, RegisterOwnerRequest, RegisterProviderRequest,
    SubmitDocumentRequest, UserInfo,
};
use crate::application::{RegisterOwner, RegisterProvider, UserService};
use crate::auth::Caller;
use crate::domain::{DocumentType, ProviderKind};
use crate::interfaces::http::common::{
    api_error, require_admin, ApiError, ApiResponse, ApiResult, EmptyData, ValidatedJson,
};

#[derive(Clone)]
pub struct AuthHandlerState {
    pub users: UserService,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let result = state
        .users
        .login(&request.email, &request.password)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(result.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register/owner",
    tag = "Authentication",
    request_body = RegisterOwnerRequest,
    responses(
        (status = 201, description = "Owner registered", body = ApiResponse<UserInfo>),
        (status = 400, description = "Validation error or email taken")
    )
)]
pub async fn register_owner(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterOwnerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserInfo>>), ApiError> {
    let user = state
        .users
        .register_owner(RegisterOwner {
            account: request.account(),
            phone: request.phone,
            address: request.address,
        })
        .await
        .map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(user.into()))))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register/provider",
    tag = "Authentication",
    request_body = RegisterProviderRequest,
    responses(
        (status = 201, description = "Provider registered and catalog assigned", body = ApiResponse<ProviderRegistrationResponse>),
        (status = 400, description = "Validation error or email taken")
    )
)]
pub async fn register_provider(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterProviderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProviderRegistrationResponse>>), ApiError> {
    let kind: ProviderKind = request.kind.parse().map_err(api_error)?;
    let registration = state
        .users
        .register_provider(RegisterProvider {
            account: request.account(),
            company_name: request.company_name,
            kind,
            service_radius_km: request.service_radius_km,
            hourly_rate_cents: request.hourly_rate_cents,
        })
        .await
        .map_err(api_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(registration.into())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = ApiResponse<ProfileResponse>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_current_user(
    State(state): State<AuthHandlerState>,
    Extension(caller): Extension<Caller>,
) -> ApiResult<ProfileResponse> {
    let profile = state
        .users
        .profile(caller.user_id)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(profile.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Account and dependent data removed", body = ApiResponse<EmptyData>),
        (status = 400, description = "A pet holds a completed booking")
    )
)]
pub async fn delete_current_user(
    State(state): State<AuthHandlerState>,
    Extension(caller): Extension<Caller>,
) -> ApiResult<EmptyData> {
    state
        .users
        .delete_account(caller.user_id)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/documents",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    request_body = SubmitDocumentRequest,
    responses(
        (status = 201, description = "Document submitted for review", body = ApiResponse<DocumentDto>),
        (status = 400, description = "Document of this type already submitted"),
        (status = 403, description = "Caller is not a provider")
    )
)]
pub async fn submit_document(
    State(state): State<AuthHandlerState>,
    Extension(caller): Extension<Caller>,
    ValidatedJson(request): ValidatedJson<SubmitDocumentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DocumentDto>>), ApiError> {
    let document_type: DocumentType = request.document_type.parse().map_err(api_error)?;
    let document = state
        .users
        .submit_document(&caller, document_type, &request.file_url)
        .await
        .map_err(api_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(document.into())),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/providers/{id}/verify",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Provider (user) ID")),
    responses(
        (status = 200, description = "Provider verified", body = ApiResponse<ProviderInfo>),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Provider not found")
    )
)]
pub async fn verify_provider(
    State(state): State<AuthHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
) -> ApiResult<ProviderInfo> {
    require_admin(&caller)?;
    let provider = state.users.verify_provider(id).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(provider.into())))
}
