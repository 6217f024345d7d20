//! Wire DTOs for the plain action endpoint.
//!
//! The turn endpoint speaks [`GameState`](crate::game::types::GameState) in and
//! a list of [`Action`](crate::game::types::Action)s out.

use serde::{Deserialize, Serialize};

// ---------- client → server ----------
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: String,
}

// ---------- server → client ----------
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionResponse {
    pub message: String,
}

impl ActionResponse {
    pub fn received(action: &str) -> Self {
        ActionResponse {
            message: format!("Action received: {action}"),
        }
    }
}
