pub mod appointment;
pub mod auth;
pub mod product;
pub mod report;
pub mod service;
pub mod user;
