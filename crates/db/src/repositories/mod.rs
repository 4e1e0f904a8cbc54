pub mod appointment;
pub mod product;
pub mod report;
pub mod service;
pub mod session;
pub mod user;
