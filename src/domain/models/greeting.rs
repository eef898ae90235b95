use serde::{Deserialize, Serialize};

/// Response of `GET /api/hello`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}
