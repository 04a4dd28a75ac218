//! Booking API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{BookingDto, CreateBookingRequest, UpdateBookingStatusRequest};
use crate::application::BookingService;
use crate::auth::Caller;
use crate::domain::{BookingStatus, UserRole};
use crate::interfaces::http::common::{
    api_error, forbidden, ApiError, ApiResponse, ApiResult, EmptyData, ValidatedJson,
};

#[derive(Clone)]
pub struct BookingHandlerState {
    pub bookings: BookingService,
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created as pending", body = ApiResponse<BookingDto>),
        (status = 400, description = "Slot already booked or service already reserved"),
        (status = 403, description = "Pet does not belong to the caller"),
        (status = 404, description = "Pet, slot or service not found")
    )
)]
pub async fn create_booking(
    State(state): State<BookingHandlerState>,
    Extension(caller): Extension<Caller>,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingDto>>), ApiError> {
    let details = state
        .bookings
        .create_booking(
            &caller,
            request.pet_id,
            request.slot_id,
            request.service_id,
            request.notes,
        )
        .await
        .map_err(api_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(details.into())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Owner: bookings of their pets. Provider: bookings on their slots", body = ApiResponse<Vec<BookingDto>>),
        (status = 403, description = "Role cannot hold bookings")
    )
)]
pub async fn list_bookings(
    State(state): State<BookingHandlerState>,
    Extension(caller): Extension<Caller>,
) -> ApiResult<Vec<BookingDto>> {
    let bookings = match caller.role {
        UserRole::Owner => state.bookings.list_for_owner(caller.user_id).await,
        UserRole::Provider => state.bookings.list_for_provider(caller.user_id).await,
        _ => return Err(forbidden("Only owners and providers have bookings")),
    }
    .map_err(api_error)?;
    Ok(Json(ApiResponse::success(
        bookings.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<BookingDto>),
        (status = 403, description = "Caller is neither the pet's owner nor the slot's provider"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_booking(
    State(state): State<BookingHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
) -> ApiResult<BookingDto> {
    let details = state
        .bookings
        .get_booking(&caller, id)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(details.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted", body = ApiResponse<EmptyData>),
        (status = 400, description = "Booking is completed"),
        (status = 403, description = "Caller is neither the pet's owner nor the slot's provider"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_booking(
    State(state): State<BookingHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
) -> ApiResult<EmptyData> {
    state
        .bookings
        .delete_booking(&caller, id)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}

#[utoipa::path(
    patch,
    path = "/api/v1/bookings/{id}/status",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingStatusRequest,
    responses(
        (status = 200, description = "Status advanced", body = ApiResponse<BookingDto>),
        (status = 400, description = "Not the next status, or booking completed"),
        (status = 403, description = "Caller may not make this transition")
    )
)]
pub async fn update_booking_status(
    State(state): State<BookingHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateBookingStatusRequest>,
) -> ApiResult<BookingDto> {
    let target: BookingStatus = request.status.parse().map_err(api_error)?;
    let details = state
        .bookings
        .advance_status(&caller, id, target)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(details.into())))
}
