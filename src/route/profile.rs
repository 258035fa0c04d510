use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};
use uuid::Uuid;

use crate::{
    core::error::ServiceError,
    schema::{
        common::{
            BadRequestResponse, ConflictResponse, InternalServerErrorResponse, MessageResponse,
            NotFoundResponse,
        },
        profile::{
            GetAllProfileResponses, PaginateProfileResponses, ProfileCreateRequest,
            ProfileCreateResponses, ProfileDeleteResponses, ProfileResponse,
            ProfileUpdateRequest, ProfileUpdateResponses,
        },
    },
    service::profile,
    AppState,
};

pub const DEFAULT_PAGE_SIZE: u32 = 5;

#[derive(Tags)]
enum ApiProfileTags {
    Profile,
}

fn not_found_message(id: &str) -> NotFoundResponse {
    NotFoundResponse {
        message: format!("profile with id = {} not found", id),
    }
}

fn conflict_message() -> ConflictResponse {
    ConflictResponse {
        message: "Error: Duplicate key. channel is already used by another profile".to_string(),
    }
}

pub struct ApiProfile;

#[OpenApi]
impl ApiProfile {
    #[oai(path = "/users", method = "get", tag = "ApiProfileTags::Profile")]
    async fn get_all_profile_api(&self, state: Data<&Arc<AppState>>) -> GetAllProfileResponses {
        match profile::list_profiles(&state).await {
            Ok(data) => GetAllProfileResponses::Ok(Json(
                data.into_iter().map(ProfileResponse::from).collect(),
            )),
            Err(_) => GetAllProfileResponses::InternalServerError(Json(
                InternalServerErrorResponse::default(),
            )),
        }
    }

    #[oai(path = "/users/page", method = "get", tag = "ApiProfileTags::Profile")]
    async fn paginate_profile_api(
        &self,
        Query(page): Query<Option<u32>>,
        Query(page_size): Query<Option<u32>>,
        state: Data<&Arc<AppState>>,
    ) -> PaginateProfileResponses {
        let page = page.unwrap_or(1);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        match profile::paginate_profiles(&state, page, page_size).await {
            Ok(data) => PaginateProfileResponses::Ok(Json(data.into())),
            Err(_) => PaginateProfileResponses::InternalServerError(Json(
                InternalServerErrorResponse::default(),
            )),
        }
    }

    #[oai(path = "/users", method = "post", tag = "ApiProfileTags::Profile")]
    async fn profile_create_api(
        &self,
        Json(json): Json<ProfileCreateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> ProfileCreateResponses {
        match profile::create(&state, json.into()).await {
            Ok(data) => ProfileCreateResponses::Created(Json(data.into())),
            Err(ServiceError::Validation(message)) => {
                ProfileCreateResponses::BadRequest(Json(BadRequestResponse { message }))
            }
            Err(ServiceError::DuplicateChannel) => {
                ProfileCreateResponses::Conflict(Json(conflict_message()))
            }
            Err(_) => ProfileCreateResponses::InternalServerError(Json(
                InternalServerErrorResponse::default(),
            )),
        }
    }

    #[oai(path = "/users/:id", method = "put", tag = "ApiProfileTags::Profile")]
    async fn profile_update_api(
        &self,
        Path(id): Path<String>,
        Json(json): Json<ProfileUpdateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> ProfileUpdateResponses {
        let Ok(profile_id) = Uuid::parse_str(&id) else {
            return ProfileUpdateResponses::NotFound(Json(not_found_message(&id)));
        };
        match profile::update(&state, &profile_id, json.into()).await {
            Ok(data) => ProfileUpdateResponses::Ok(Json(data.into())),
            Err(ServiceError::Validation(message)) => {
                ProfileUpdateResponses::BadRequest(Json(BadRequestResponse { message }))
            }
            Err(ServiceError::NotFound) => {
                ProfileUpdateResponses::NotFound(Json(not_found_message(&id)))
            }
            Err(ServiceError::DuplicateChannel) => {
                ProfileUpdateResponses::Conflict(Json(conflict_message()))
            }
            Err(ServiceError::Internal(_)) => ProfileUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::default(),
            )),
        }
    }

    #[oai(path = "/users/:id", method = "delete", tag = "ApiProfileTags::Profile")]
    async fn profile_delete_api(
        &self,
        Path(id): Path<String>,
        state: Data<&Arc<AppState>>,
    ) -> ProfileDeleteResponses {
        let Ok(profile_id) = Uuid::parse_str(&id) else {
            return ProfileDeleteResponses::NotFound(Json(not_found_message(&id)));
        };
        match profile::remove(&state, &profile_id).await {
            Ok(()) => ProfileDeleteResponses::Ok(Json(MessageResponse {
                message: format!("profile with id = {} deleted", id),
            })),
            Err(ServiceError::NotFound) => {
                ProfileDeleteResponses::NotFound(Json(not_found_message(&id)))
            }
            Err(_) => ProfileDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::default(),
            )),
        }
    }
}
