//! Slot API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateSlotRequest, SlotDto};
use crate::application::SlotService;
use crate::auth::Caller;
use crate::interfaces::http::common::{
    api_error, ApiError, ApiResponse, ApiResult, EmptyData, ValidatedJson,
};

#[derive(Clone)]
pub struct SlotHandlerState {
    pub slots: SlotService,
}

#[utoipa::path(
    post,
    path = "/api/v1/slots",
    tag = "Slots",
    security(("bearer_auth" = [])),
    request_body = CreateSlotRequest,
    responses(
        (status = 201, description = "Slot published", body = ApiResponse<SlotDto>),
        (status = 400, description = "Invalid range or a slot already starts at this time"),
        (status = 403, description = "Caller is not an active provider")
    )
)]
pub async fn create_slot(
    State(state): State<SlotHandlerState>,
    Extension(caller): Extension<Caller>,
    ValidatedJson(request): ValidatedJson<CreateSlotRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SlotDto>>), ApiError> {
    let slot = state
        .slots
        .create_slot(
            &caller,
            request.date,
            request.start_time,
            request.end_time,
            request.is_available,
        )
        .await
        .map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(slot.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/providers/{id}/slots",
    tag = "Slots",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Provider (user) ID")),
    responses(
        (status = 200, description = "All slots of the provider", body = ApiResponse<Vec<SlotDto>>),
        (status = 404, description = "Provider not found")
    )
)]
pub async fn list_slots(
    State(state): State<SlotHandlerState>,
    Path(id): Path<i32>,
) -> ApiResult<Vec<SlotDto>> {
    let slots = state.slots.list_slots(id).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(
        slots.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/slots/{id}",
    tag = "Slots",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Slot ID")),
    responses(
        (status = 200, description = "Slot withdrawn; bookings keep their history", body = ApiResponse<EmptyData>),
        (status = 403, description = "Not the caller's slot"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_slot(
    State(state): State<SlotHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
) -> ApiResult<EmptyData> {
    state
        .slots
        .delete_slot(&caller, id)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
