mod appointments_test;
mod auth_test;
mod catalog_test;
mod health_test;
mod middleware_test;
mod state_test;
