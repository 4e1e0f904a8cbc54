pub mod appointments;
pub mod auth;
pub mod health;
pub mod products;
pub mod reports;
pub mod services;
pub mod users;
