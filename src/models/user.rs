use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User — Identity held by the session store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}
