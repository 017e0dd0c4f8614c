//! HTTP layer: routes, handlers and middleware

pub mod middleware;
pub mod services;
