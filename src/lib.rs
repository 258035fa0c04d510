use std::sync::Arc;

use crate::core::image_search::ImageSearch;
use poem::{
    middleware::{AddData, AddDataEndpoint, Cors, CorsEndpoint},
    EndpointExt, Route,
};
use poem_openapi::OpenApiService;
use route::{profile::ApiProfile, web::index_endpoint};
use settings::Config;
use sqlx::{Pool, Postgres};

pub mod cli;
pub mod core;
pub mod factory;
pub mod model;
pub mod repository;
pub mod route;
pub mod schema;
pub mod service;
pub mod settings;

pub struct AppState {
    pub db: Pool<Postgres>,
    pub image_search: Arc<dyn ImageSearch>,
}

impl AppState {
    pub fn new(db: Pool<Postgres>, image_search: Arc<dyn ImageSearch>) -> Self {
        Self { db, image_search }
    }
}

pub fn init_openapi_route(
    app_state: Arc<AppState>,
    config: &Config,
) -> CorsEndpoint<AddDataEndpoint<Route, Arc<AppState>>> {
    let prefix = config.prefix();
    let openapi_route =
        OpenApiService::new(ApiProfile, "Profile Directory", env!("CARGO_PKG_VERSION"))
            .server(prefix.clone());
    let openapi_json_endpoint = openapi_route.spec_endpoint();
    let ui = openapi_route.swagger_ui();
    Route::new()
        .at("/", index_endpoint(&prefix))
        .nest(prefix, openapi_route)
        .nest("/docs", ui)
        .at("openapi.json", openapi_json_endpoint)
        .with(AddData::new(app_state))
        .with(Cors::new())
}
