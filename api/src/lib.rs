//! HTTP navigation shell for the freelance marketplace client.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
