pub mod db;
pub mod error;
pub mod image_search;
pub mod pagination;
pub mod sqlx_utils;
pub mod test_utils;
pub mod utils;
