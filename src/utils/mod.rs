pub mod auth;
pub mod datetime;
pub mod jwt;
pub mod validation;
