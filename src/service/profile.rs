use tracing::{error, info};
use uuid::Uuid;

use crate::{
    core::{
        error::ServiceError,
        pagination::Page,
    },
    model::profile::Profile,
    repository::profile::{
        create_profile, delete_profile, get_all_profile, get_profile_by_id, paginate_profile,
        update_profile, ProfileDraft,
    },
    AppState,
};

#[derive(Clone, Debug, Default)]
pub struct ProfileInput {
    pub name: String,
    pub channel: String,
    pub tags: Option<Vec<String>>,
    pub job: Option<String>,
    pub age: Option<i32>,
}

// optional fields: None keeps the stored value, Some(None) clears it
#[derive(Clone, Debug, Default)]
pub struct ProfileUpdate {
    pub name: String,
    pub channel: String,
    pub tags: Option<Option<Vec<String>>>,
    pub job: Option<Option<String>>,
    pub age: Option<Option<i32>>,
}

fn validate_required(name: &str, channel: &str) -> Result<(), ServiceError> {
    if name.trim().is_empty() {
        return Err(ServiceError::Validation("name is required".to_string()));
    }
    if channel.trim().is_empty() {
        return Err(ServiceError::Validation("channel is required".to_string()));
    }
    Ok(())
}

fn log_internal(operation: &str, err: &ServiceError) {
    if let ServiceError::Internal(cause) = err {
        error!("service.profile {} failed: {}", operation, cause);
    }
}

pub async fn list_profiles(state: &AppState) -> Result<Vec<Profile>, ServiceError> {
    let res = async {
        let mut tx = state.db.begin().await?;
        let data = get_all_profile(&mut tx).await?;
        tx.commit().await?;
        Ok::<_, ServiceError>(data)
    }
    .await;
    if let Err(err) = &res {
        log_internal("list", err);
    }
    res
}

pub async fn paginate_profiles(
    state: &AppState,
    page: u32,
    page_size: u32,
) -> Result<Page<Profile>, ServiceError> {
    let res = async {
        let mut tx = state.db.begin().await?;
        let data = paginate_profile(&mut tx, page, page_size).await?;
        tx.commit().await?;
        Ok::<_, ServiceError>(data)
    }
    .await;
    if let Err(err) = &res {
        log_internal("paginate", err);
    }
    res
}

pub async fn create(state: &AppState, input: ProfileInput) -> Result<Profile, ServiceError> {
    validate_required(&input.name, &input.channel)?;

    let image_url = state
        .image_search
        .search_image(&input.name)
        .await
        .into_image_url();
    let draft = ProfileDraft {
        name: input.name,
        channel: input.channel,
        tags: input.tags,
        job: input.job,
        age: input.age,
        image_url,
    };

    let res = async {
        let mut tx = state.db.begin().await?;
        let profile = create_profile(&mut tx, &draft, None).await?;
        tx.commit().await?;
        Ok::<_, ServiceError>(profile)
    }
    .await;
    match &res {
        Ok(profile) => info!("created profile {} for channel {}", profile.id, profile.channel),
        Err(err) => log_internal("create", err),
    }
    res
}

pub async fn update(
    state: &AppState,
    id: &Uuid,
    input: ProfileUpdate,
) -> Result<Profile, ServiceError> {
    validate_required(&input.name, &input.channel)?;

    let current = async {
        let mut tx = state.db.begin().await?;
        let profile = get_profile_by_id(&mut tx, id).await?;
        tx.commit().await?;
        Ok::<_, ServiceError>(profile)
    }
    .await
    .inspect_err(|err| log_internal("update", err))?
    .ok_or(ServiceError::NotFound)?;

    // A new name always replaces the image, even with an empty one.
    let image_url = if input.name != current.name {
        state
            .image_search
            .search_image(&input.name)
            .await
            .into_image_url()
    } else {
        current.image_url
    };
    let draft = ProfileDraft {
        name: input.name,
        channel: input.channel,
        tags: input.tags.unwrap_or(current.tags),
        job: input.job.unwrap_or(current.job),
        age: input.age.unwrap_or(current.age),
        image_url,
    };

    let res = async {
        let mut tx = state.db.begin().await?;
        let profile = update_profile(&mut tx, id, &draft, None).await?;
        tx.commit().await?;
        Ok::<_, ServiceError>(profile)
    }
    .await;
    match &res {
        Ok(profile) => info!("updated profile {}", profile.id),
        Err(err) => log_internal("update", err),
    }
    res
}

pub async fn remove(state: &AppState, id: &Uuid) -> Result<(), ServiceError> {
    let res = async {
        let mut tx = state.db.begin().await?;
        delete_profile(&mut tx, id).await?;
        tx.commit().await?;
        Ok::<_, ServiceError>(())
    }
    .await;
    match &res {
        Ok(()) => info!("deleted profile {}", id),
        Err(err) => log_internal("remove", err),
    }
    res
}
