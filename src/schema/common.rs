use poem_openapi::{
    types::{ParseFromJSON, ToJSON},
    Object,
};
use serde::{Deserialize, Serialize};

#[derive(Object, Serialize, Deserialize)]
pub struct BadRequestResponse {
    pub message: String,
}

#[derive(Object, Serialize, Deserialize)]
pub struct NotFoundResponse {
    pub message: String,
}

#[derive(Object, Serialize, Deserialize)]
pub struct ConflictResponse {
    pub message: String,
}

#[derive(Object, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Object, Serialize, Deserialize)]
pub struct InternalServerErrorResponse {
    pub message: String,
}

impl Default for InternalServerErrorResponse {
    fn default() -> Self {
        Self {
            message: "internal server error".to_string(),
        }
    }
}

#[derive(Object)]
pub struct PaginateResponse<T: ParseFromJSON + ToJSON> {
    pub counts: u32,
    pub page: u32,
    pub page_count: u32,
    pub page_size: u32,
    pub results: Vec<T>,
}
