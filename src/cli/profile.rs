use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    core::image_search::ImageSearch,
    model::profile::Profile,
    repository::profile::get_all_profile,
    service::profile::{self, ProfileInput},
    AppState,
};

pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_string())
        .collect()
}

pub async fn create_profile(
    pool: &PgPool,
    image_search: Arc<dyn ImageSearch>,
    input: ProfileInput,
) -> anyhow::Result<Profile> {
    let state = AppState::new(pool.clone(), image_search);
    Ok(profile::create(&state, input).await?)
}

pub async fn list_profiles(pool: &PgPool) -> anyhow::Result<Vec<Profile>> {
    let mut tx = pool.begin().await?;
    let data = get_all_profile(&mut tx).await?;
    tx.commit().await?;
    Ok(data)
}
