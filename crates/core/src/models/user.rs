//! User model
//!
//! Authentication is stubbed in this system: the user record exists for
//! display and for tagging reservations, with no credential verification.

use serde::{Deserialize, Serialize};

/// A buyer-side account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub company: String,
    pub role: String,
}
