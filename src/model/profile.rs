use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use sqlx::FromRow;
use uuid::Uuid;

pub const TABLE_NAME: &str = "public.profile";

#[derive(Clone, Debug, Deserialize, FromRow, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub channel: String,
    pub tags: Option<Vec<String>>,
    pub job: Option<String>,
    pub age: Option<i32>,
    pub image_url: String,
    pub created_date: DateTime<FixedOffset>,
    pub updated_date: DateTime<FixedOffset>,
}
