use chrono::{DateTime, FixedOffset, SubsecRound};
use fake::{
    faker::{internet::en::DomainSuffix, job::en::Title, lorem::en::Words, name::en::Name},
    Dummy, Fake, Faker,
};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::model::profile::{Profile, TABLE_NAME};

pub struct ProfileFactory<T: Clone> {
    modifier_one: fn(x: &Profile, ext: T) -> Profile,
    modifier_many: fn(x: &Profile, idx: usize, ext: T) -> Profile,
}

impl<T: Clone> Default for ProfileFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ProfileFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &Profile, ext: T) -> Profile) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &Profile, idx: usize, ext: T) -> Profile) {
        self.modifier_many = modifier
    }

    pub async fn generate_one(&mut self, db: &PgPool, ext: T) -> anyhow::Result<Profile> {
        let data = (self.modifier_one)(&ProfileDummy::generate_one(), ext);
        let mut tx = db.begin().await?;
        insert(&mut tx, &data).await?;
        tx.commit().await?;
        Ok(data)
    }

    pub async fn generate_many(
        &mut self,
        db: &PgPool,
        num: u32,
        ext: T,
    ) -> anyhow::Result<Vec<Profile>> {
        let mut result: Vec<Profile> = vec![];
        for (idx, item) in ProfileDummy::generate_many(num).iter().enumerate() {
            result.push((self.modifier_many)(item, idx, ext.clone()));
        }
        let mut tx = db.begin().await?;
        for item in result.iter() {
            insert(&mut tx, item).await?;
        }
        tx.commit().await?;
        Ok(result)
    }
}

async fn insert(tx: &mut Transaction<'_, Postgres>, data: &Profile) -> anyhow::Result<()> {
    sqlx::query(
        format!(
            r#"
        INSERT INTO {} (id, name, channel, tags, job, age, image_url, created_date, updated_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(data.id)
    .bind(&data.name)
    .bind(&data.channel)
    .bind(&data.tags)
    .bind(&data.job)
    .bind(data.age)
    .bind(&data.image_url)
    .bind(data.created_date)
    .bind(data.updated_date)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

#[derive(Debug, Dummy, Clone)]
struct ProfileDummy {
    #[dummy(faker = "Name()")]
    pub name: String,
    #[dummy(faker = "DomainSuffix()")]
    pub domain: String,
    #[dummy(faker = "Words(0..4)")]
    pub tags: Vec<String>,
    #[dummy(faker = "Title()")]
    pub job: String,
    #[dummy(faker = "1..100")]
    pub age: i32,
    pub has_image: bool,
    pub created_date: DateTime<FixedOffset>,
}

impl ProfileDummy {
    fn into_profile(self) -> Profile {
        let id = Uuid::now_v7();
        // postgres keeps microseconds only
        let created_date = self.created_date.trunc_subsecs(6);
        Profile {
            id,
            channel: format!("https://channel.{}/{}", self.domain, id),
            image_url: if self.has_image {
                format!("https://images.{}/{}.jpg", self.domain, id)
            } else {
                "".to_string()
            },
            name: self.name,
            tags: Some(self.tags),
            job: Some(self.job),
            age: Some(self.age),
            created_date,
            updated_date: created_date,
        }
    }

    pub fn generate_one() -> Profile {
        Faker.fake::<ProfileDummy>().into_profile()
    }

    pub fn generate_many(num: u32) -> Vec<Profile> {
        (0..num)
            .map(|_| Faker.fake::<ProfileDummy>().into_profile())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset, Local, SubsecRound};
    use sqlx::PgPool;
    use uuid::Uuid;

    use crate::{factory::profile::ProfileFactory, model::profile::Profile};

    #[derive(Clone)]
    struct ExtData {
        pub channel: String,
        pub created_date: DateTime<FixedOffset>,
    }

    #[sqlx::test]
    async fn test_generate_one(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = ProfileFactory::new();
        let profile = factory.generate_one(&pool, ()).await?;

        // Expect
        let num_data: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM public.profile"#)
            .fetch_one(&pool)
            .await?;
        assert_eq!(num_data.0, 1);
        assert!(profile.channel.starts_with("https://"));
        Ok(())
    }

    #[sqlx::test]
    async fn test_generate_one_modified(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = ProfileFactory::<ExtData>::new();
        factory.modified_one(|data, ext| Profile {
            name: "Ada".to_string(),
            channel: ext.channel,
            tags: None,
            created_date: ext.created_date,
            updated_date: ext.created_date,
            ..data.clone()
        });
        let ext = ExtData {
            channel: "https://x.test/ada".to_string(),
            created_date: Local::now().fixed_offset().trunc_subsecs(6),
        };
        let profile = factory.generate_one(&pool, ext.clone()).await?;

        // Expect
        let res: (Uuid, String, String, Option<Vec<String>>, DateTime<FixedOffset>) =
            sqlx::query_as(
                r#"SELECT id, name, channel, tags, created_date FROM public.profile"#,
            )
            .fetch_one(&pool)
            .await?;
        assert_eq!(res.0, profile.id);
        assert_eq!(res.1, "Ada".to_string());
        assert_eq!(res.2, ext.channel);
        assert!(res.3.is_none());
        assert_eq!(res.4, ext.created_date);
        Ok(())
    }

    #[sqlx::test]
    async fn test_generate_many(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = ProfileFactory::new();
        factory.generate_many(&pool, 10, ()).await?;

        // Expect
        let num_data: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM public.profile"#)
            .fetch_one(&pool)
            .await?;
        assert_eq!(num_data.0, 10);
        Ok(())
    }

    #[sqlx::test]
    async fn test_generate_many_modified(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = ProfileFactory::<()>::new();
        factory.modified_many(|data, idx, _| Profile {
            image_url: if idx % 2 == 0 {
                "".to_string()
            } else {
                data.image_url.clone()
            },
            ..data.clone()
        });
        let profiles = factory.generate_many(&pool, 5, ()).await?;

        // Expect
        let res: Vec<(Uuid, String)> = sqlx::query_as(r#"SELECT id, image_url FROM public.profile"#)
            .fetch_all(&pool)
            .await?;
        assert_eq!(res.len(), 5);
        for (idx, item) in profiles.iter().enumerate() {
            let stored = res.iter().find(|x| x.0 == item.id).unwrap();
            assert_eq!(stored.1, item.image_url);
            if idx % 2 == 0 {
                assert!(stored.1.is_empty());
            }
        }
        Ok(())
    }
}
