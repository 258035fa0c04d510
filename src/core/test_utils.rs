use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fake::{Fake, Faker};
use sqlx::PgPool;

use crate::{
    core::image_search::{ImageSearch, ImageSearchResult},
    AppState,
};

pub fn generate_random<T: fake::Dummy<fake::Faker>>() -> T {
    Faker.fake()
}

/// Image search double returning a fixed result and recording every query.
pub struct StubImageSearch {
    result: ImageSearchResult,
    queries: Mutex<Vec<String>>,
}

impl StubImageSearch {
    pub fn found(url: &str) -> Self {
        Self {
            result: ImageSearchResult::Found(url.to_string()),
            queries: Mutex::new(vec![]),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: ImageSearchResult::NotFound,
            queries: Mutex::new(vec![]),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageSearch for StubImageSearch {
    async fn search_image(&self, query: &str) -> ImageSearchResult {
        self.queries.lock().unwrap().push(query.to_string());
        self.result.clone()
    }
}

pub fn generate_test_state(pool: PgPool, image_search: Arc<StubImageSearch>) -> Arc<AppState> {
    Arc::new(AppState::new(pool, image_search))
}
