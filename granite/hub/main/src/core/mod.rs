pub mod cache_dir;
pub mod hub_api;
