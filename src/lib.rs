//! Ownership and access-control core for a small personal website:
//! per-user to-do lists, a photo gallery with accounts and an admin role,
//! and an anonymous contact form. The embedding request layer supplies an
//! [`application::dto::Actor`] with every call and renders the structured
//! outcomes; nothing here touches HTTP.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
