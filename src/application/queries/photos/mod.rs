// src/application/queries/photos/mod.rs
mod gallery;
mod get_by_id;
mod list_all;
mod service;

pub use service::PhotoQueryService;
