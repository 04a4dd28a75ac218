//! Catalog API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{
    CatalogEntryDto, CreateServiceRequest, CreatedServiceResponse, ListServicesParams,
    ProviderServiceDto, ServiceDto, UpdateProviderServiceRequest,
};
use crate::application::CatalogService;
use crate::auth::Caller;
use crate::domain::ProviderKind;
use crate::interfaces::http::common::{
    api_error, require_admin, ApiError, ApiResponse, ApiResult, EmptyData, ValidatedJson,
};

#[derive(Clone)]
pub struct CatalogHandlerState {
    pub catalog: CatalogService,
}

#[utoipa::path(
    get,
    path = "/api/v1/services",
    tag = "Catalog",
    security(("bearer_auth" = [])),
    params(ListServicesParams),
    responses(
        (status = 200, description = "Service list", body = ApiResponse<Vec<ServiceDto>>),
        (status = 400, description = "Unknown kind")
    )
)]
pub async fn list_services(
    State(state): State<CatalogHandlerState>,
    Query(params): Query<ListServicesParams>,
) -> ApiResult<Vec<ServiceDto>> {
    let kind = params
        .kind
        .as_deref()
        .map(str::parse::<ProviderKind>)
        .transpose()
        .map_err(api_error)?;
    let services = state.catalog.list_services(kind).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(
        services.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/services/{id}",
    tag = "Catalog",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service details", body = ApiResponse<ServiceDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_service(
    State(state): State<CatalogHandlerState>,
    Path(id): Path<i32>,
) -> ApiResult<ServiceDto> {
    let service = state.catalog.get_service(id).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(service.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/services",
    tag = "Catalog",
    security(("bearer_auth" = [])),
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Service created and assigned to matching providers", body = ApiResponse<CreatedServiceResponse>),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn create_service(
    State(state): State<CatalogHandlerState>,
    Extension(caller): Extension<Caller>,
    ValidatedJson(request): ValidatedJson<CreateServiceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedServiceResponse>>), ApiError> {
    require_admin(&caller)?;
    let created = state
        .catalog
        .create_service(request.into())
        .await
        .map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created.into()))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/services/{id}",
    tag = "Catalog",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service and its assignments removed", body = ApiResponse<EmptyData>),
        (status = 400, description = "Service is still booked"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_service(
    State(state): State<CatalogHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
) -> ApiResult<EmptyData> {
    require_admin(&caller)?;
    state.catalog.delete_service(id).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}

#[utoipa::path(
    get,
    path = "/api/v1/providers/{id}/services",
    tag = "Catalog",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Provider (user) ID")),
    responses(
        (status = 200, description = "Provider's catalog", body = ApiResponse<Vec<CatalogEntryDto>>),
        (status = 404, description = "Provider not found")
    )
)]
pub async fn list_provider_services(
    State(state): State<CatalogHandlerState>,
    Path(id): Path<i32>,
) -> ApiResult<Vec<CatalogEntryDto>> {
    let entries = state
        .catalog
        .list_provider_services(id)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(
        entries.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    patch,
    path = "/api/v1/provider-services/{id}",
    tag = "Catalog",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "ProviderService ID")),
    request_body = UpdateProviderServiceRequest,
    responses(
        (status = 200, description = "Assignment updated", body = ApiResponse<ProviderServiceDto>),
        (status = 400, description = "Empty or invalid patch"),
        (status = 403, description = "Not the caller's assignment or wrong service group"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_provider_service(
    State(state): State<CatalogHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateProviderServiceRequest>,
) -> ApiResult<ProviderServiceDto> {
    let updated = state
        .catalog
        .update_provider_service(&caller, id, request.into())
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(updated.into())))
}
