use poem_openapi::{payload::Json, types::MaybeUndefined, ApiResponse, Object};
use serde::Deserialize;

use super::common::{
    BadRequestResponse, ConflictResponse, InternalServerErrorResponse, MessageResponse,
    NotFoundResponse, PaginateResponse,
};
use crate::{
    core::{pagination::Page, utils::datetime_to_string},
    model::profile::Profile,
    service::profile::{ProfileInput, ProfileUpdate},
};

#[derive(Object, Deserialize, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub channel: String,
    pub tags: Option<Vec<String>>,
    pub job: Option<String>,
    pub age: Option<i32>,
    pub image_url: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Profile> for ProfileResponse {
    fn from(value: Profile) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            channel: value.channel,
            tags: value.tags,
            job: value.job,
            age: value.age,
            image_url: value.image_url,
            created_at: datetime_to_string(value.created_date),
            updated_at: datetime_to_string(value.updated_date),
        }
    }
}

impl From<Page<Profile>> for PaginateResponse<ProfileResponse> {
    fn from(value: Page<Profile>) -> Self {
        Self {
            counts: value.counts,
            page: value.page,
            page_count: value.page_count,
            page_size: value.page_size,
            results: value.results.into_iter().map(ProfileResponse::from).collect(),
        }
    }
}

#[derive(ApiResponse)]
pub enum GetAllProfileResponses {
    #[oai(status = 200)]
    Ok(Json<Vec<ProfileResponse>>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum PaginateProfileResponses {
    #[oai(status = 200)]
    Ok(Json<PaginateResponse<ProfileResponse>>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct ProfileCreateRequest {
    pub name: String,
    pub channel: String,
    pub tags: Option<Vec<String>>,
    pub job: Option<String>,
    pub age: Option<i32>,
}

impl From<ProfileCreateRequest> for ProfileInput {
    fn from(value: ProfileCreateRequest) -> Self {
        Self {
            name: value.name,
            channel: value.channel,
            tags: value.tags,
            job: value.job,
            age: value.age,
        }
    }
}

#[derive(ApiResponse)]
pub enum ProfileCreateResponses {
    #[oai(status = 201)]
    Created(Json<ProfileResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 409)]
    Conflict(Json<ConflictResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

/// Absent optional fields keep their stored value, `null` clears them.
#[derive(Object)]
pub struct ProfileUpdateRequest {
    pub name: String,
    pub channel: String,
    pub tags: MaybeUndefined<Vec<String>>,
    pub job: MaybeUndefined<String>,
    pub age: MaybeUndefined<i32>,
}

fn field_update<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(val) => Some(Some(val)),
    }
}

impl From<ProfileUpdateRequest> for ProfileUpdate {
    fn from(value: ProfileUpdateRequest) -> Self {
        Self {
            name: value.name,
            channel: value.channel,
            tags: field_update(value.tags),
            job: field_update(value.job),
            age: field_update(value.age),
        }
    }
}

#[derive(ApiResponse)]
pub enum ProfileUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 409)]
    Conflict(Json<ConflictResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ProfileDeleteResponses {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
