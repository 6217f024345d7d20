pub mod actions;
pub mod check;
pub mod health;
pub mod routes;
