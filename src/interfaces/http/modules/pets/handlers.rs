//! Pet & medical record API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{
    CreateMedicalRecordRequest, CreatePetRequest, MedicalRecordDto, PetDto, PetProfileDto,
    UpdateMedicalRecordRequest, UpdatePetRequest,
};
use crate::application::{PetInput, PetService, RecordInput};
use crate::auth::Caller;
use crate::domain::{AnimalType, RecordType};
use crate::interfaces::http::common::{
    api_error, ApiError, ApiResponse, ApiResult, EmptyData, ValidatedJson,
};

#[derive(Clone)]
pub struct PetHandlerState {
    pub pets: PetService,
}

#[utoipa::path(
    get,
    path = "/api/v1/pets",
    tag = "Pets",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's pets", body = ApiResponse<Vec<PetDto>>),
        (status = 403, description = "Caller is not an owner")
    )
)]
pub async fn list_pets(
    State(state): State<PetHandlerState>,
    Extension(caller): Extension<Caller>,
) -> ApiResult<Vec<PetDto>> {
    let pets = state.pets.list_pets(&caller).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(
        pets.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/pets",
    tag = "Pets",
    security(("bearer_auth" = [])),
    request_body = CreatePetRequest,
    responses(
        (status = 201, description = "Pet registered", body = ApiResponse<PetDto>),
        (status = 403, description = "Caller is not an owner")
    )
)]
pub async fn create_pet(
    State(state): State<PetHandlerState>,
    Extension(caller): Extension<Caller>,
    ValidatedJson(request): ValidatedJson<CreatePetRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PetDto>>), ApiError> {
    let animal_type: AnimalType = request.animal_type.parse().map_err(api_error)?;
    let pet = state
        .pets
        .create_pet(
            &caller,
            PetInput {
                name: request.name,
                animal_type,
                breed: request.breed,
                birth_date: request.birth_date,
                medical_notes: request.medical_notes,
            },
        )
        .await
        .map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(pet.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/pets/{id}",
    tag = "Pets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Pet with medical history", body = ApiResponse<PetProfileDto>),
        (status = 403, description = "Pet belongs to another owner"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_pet(
    State(state): State<PetHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
) -> ApiResult<PetProfileDto> {
    let profile = state.pets.get_pet(&caller, id).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(profile.into())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/pets/{id}",
    tag = "Pets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Pet ID")),
    request_body = UpdatePetRequest,
    responses(
        (status = 200, description = "Pet updated", body = ApiResponse<PetDto>),
        (status = 403, description = "Pet belongs to another owner"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_pet(
    State(state): State<PetHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdatePetRequest>,
) -> ApiResult<PetDto> {
    let pet = state
        .pets
        .update_pet(&caller, id, request.into())
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(pet.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/pets/{id}",
    tag = "Pets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Pet removed with its bookings and records", body = ApiResponse<EmptyData>),
        (status = 400, description = "Pet holds a completed booking"),
        (status = 403, description = "Pet belongs to another owner"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_pet(
    State(state): State<PetHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
) -> ApiResult<EmptyData> {
    state.pets.delete_pet(&caller, id).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}

#[utoipa::path(
    post,
    path = "/api/v1/pets/{id}/records",
    tag = "Pets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Pet ID")),
    request_body = CreateMedicalRecordRequest,
    responses(
        (status = 201, description = "Record added", body = ApiResponse<MedicalRecordDto>),
        (status = 403, description = "Pet belongs to another owner"),
        (status = 404, description = "Pet not found")
    )
)]
pub async fn add_medical_record(
    State(state): State<PetHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<CreateMedicalRecordRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MedicalRecordDto>>), ApiError> {
    let record_type: RecordType = request.record_type.parse().map_err(api_error)?;
    let record = state
        .pets
        .add_record(
            &caller,
            id,
            RecordInput {
                record_type,
                description: request.description,
                document_url: request.document_url,
            },
        )
        .await
        .map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(record.into()))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/medical-records/{id}",
    tag = "Pets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Medical record ID")),
    request_body = UpdateMedicalRecordRequest,
    responses(
        (status = 200, description = "Record updated", body = ApiResponse<MedicalRecordDto>),
        (status = 403, description = "Record belongs to another owner's pet"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_medical_record(
    State(state): State<PetHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateMedicalRecordRequest>,
) -> ApiResult<MedicalRecordDto> {
    let update = request.into_update().map_err(api_error)?;
    let record = state
        .pets
        .update_record(&caller, id, update)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(record.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/medical-records/{id}",
    tag = "Pets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Medical record ID")),
    responses(
        (status = 200, description = "Record deleted", body = ApiResponse<EmptyData>),
        (status = 403, description = "Record belongs to another owner's pet"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_medical_record(
    State(state): State<PetHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
) -> ApiResult<EmptyData> {
    state
        .pets
        .delete_record(&caller, id)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
