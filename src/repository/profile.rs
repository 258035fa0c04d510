use chrono::{DateTime, FixedOffset, Local};
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::{
    core::{
        error::StoreError,
        pagination::{page_count, page_window, Page},
        sqlx_utils::{binds_query_as, query_builder, SqlxBinds},
    },
    model::profile::{Profile, TABLE_NAME},
};

// image_url is resolved by the caller
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub channel: String,
    pub tags: Option<Vec<String>>,
    pub job: Option<String>,
    pub age: Option<i32>,
    pub image_url: String,
}

const NEWEST_FIRST: [&str; 2] = ["created_date DESC", "id DESC"];

pub async fn paginate_profile(
    tx: &mut Transaction<'_, Postgres>,
    page: u32,
    page_size: u32,
) -> Result<Page<Profile>, StoreError> {
    let (page, page_size, offset) = page_window(page, page_size);
    let stmt = query_builder(
        None,
        TABLE_NAME,
        &[],
        &NEWEST_FIRST,
        Some(page_size),
        Some(offset),
    );
    let stmt_count = query_builder(Some("count(id)"), TABLE_NAME, &[], &[], None, None);

    let data = binds_query_as::<Profile>(&stmt, vec![])
        .fetch_all(&mut **tx)
        .await?;
    let count = binds_query_as::<(i64,)>(&stmt_count, vec![])
        .fetch_one(&mut **tx)
        .await?;
    let counts = count.0 as u32;
    Ok(Page {
        counts,
        page,
        page_count: page_count(counts, page_size),
        page_size,
        results: data,
    })
}

pub async fn get_all_profile(
    tx: &mut Transaction<'_, Postgres>,
) -> Result<Vec<Profile>, StoreError> {
    let stmt = query_builder(None, TABLE_NAME, &[], &NEWEST_FIRST, None, None);
    let data = binds_query_as::<Profile>(&stmt, vec![])
        .fetch_all(&mut **tx)
        .await?;
    Ok(data)
}

pub async fn get_profile_by_id(
    tx: &mut Transaction<'_, Postgres>,
    id: &Uuid,
) -> Result<Option<Profile>, StoreError> {
    let stmt = query_builder(None, TABLE_NAME, &["id = $1".to_string()], &[], None, None);
    let data = binds_query_as::<Profile>(&stmt, vec![SqlxBinds::Uuid(*id)])
        .fetch_optional(&mut **tx)
        .await?;
    Ok(data)
}

pub async fn create_profile(
    tx: &mut Transaction<'_, Postgres>,
    draft: &ProfileDraft,
    now: Option<DateTime<FixedOffset>>,
) -> Result<Profile, StoreError> {
    let now = now.unwrap_or(Local::now().fixed_offset());
    let profile: Profile = sqlx::query_as(
        format!(
            r#"
        INSERT INTO {} (id, name, channel, tags, job, age, image_url, created_date, updated_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(Uuid::now_v7())
    .bind(&draft.name)
    .bind(&draft.channel)
    .bind(&draft.tags)
    .bind(&draft.job)
    .bind(draft.age)
    .bind(&draft.image_url)
    .bind(now)
    .bind(now)
    .fetch_one(&mut **tx)
    .await?;
    Ok(profile)
}

pub async fn update_profile(
    tx: &mut Transaction<'_, Postgres>,
    id: &Uuid,
    draft: &ProfileDraft,
    now: Option<DateTime<FixedOffset>>,
) -> Result<Profile, StoreError> {
    let now = now.unwrap_or(Local::now().fixed_offset());
    let profile: Option<Profile> = sqlx::query_as(
        format!(
            r#"
        UPDATE {}
        SET name = $1, channel = $2, tags = $3, job = $4, age = $5, image_url = $6,
        updated_date = $7
        WHERE id = $8
        RETURNING *"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&draft.name)
    .bind(&draft.channel)
    .bind(&draft.tags)
    .bind(&draft.job)
    .bind(draft.age)
    .bind(&draft.image_url)
    .bind(now)
    .bind(id)
    .fetch_optional(&mut **tx)
    .await?;
    profile.ok_or(StoreError::NotFound)
}

pub async fn delete_profile(
    tx: &mut Transaction<'_, Postgres>,
    id: &Uuid,
) -> Result<(), StoreError> {
    let res = sqlx::query(format!("DELETE FROM {} WHERE id = $1", TABLE_NAME).as_str())
        .bind(id)
        .execute(&mut **tx)
        .await?;
    if res.rows_affected() == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}
