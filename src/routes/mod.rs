// Axum handlers, one module per resource. Each handler takes the pool from
// router state and returns `Result<Json<_>, ApiError>`.
pub mod agents;
pub mod companies;
pub mod customers;
pub mod health;
pub mod say;
