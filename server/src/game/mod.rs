pub mod geometry;
pub mod rules;
pub mod turn;
pub mod types;
