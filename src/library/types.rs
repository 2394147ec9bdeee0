//! Library documents as they live in the store.
//!
//! Field names follow the `books` and `users` collections (camelCase, with
//! the two reading timestamps in snake_case).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::CatalogItem;

pub const MAX_RATING: u8 = 5;

/// A book on a user's reading list.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedBook {
    /// Document id. Empty until the store has assigned one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub photo_uri: String,
    #[serde(default)]
    pub published_date: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub google_book_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(rename = "started_reading_at", default)]
    pub started_reading: Option<DateTime<Utc>>,
    #[serde(rename = "finished_reading_at", default)]
    pub finished_reading: Option<DateTime<Utc>>,
}

impl SavedBook {
    /// A fresh, unstarted library entry for `item`, owned by `user_id`.
    pub fn from_catalog(item: &CatalogItem, user_id: &str) -> Self {
        Self {
            id: String::new(),
            title: item.title().to_string(),
            author: item.authors(),
            description: item.volume_info.description.clone(),
            notes: String::new(),
            page_count: item.volume_info.page_count,
            photo_uri: item.thumbnail().to_string(),
            published_date: item.volume_info.published_date.clone(),
            rating: 0.0,
            google_book_id: item.id.clone(),
            user_id: user_id.to_string(),
            started_reading: None,
            finished_reading: None,
        }
    }

    /// Rating as whole stars, clamped to 0..=5.
    pub fn stars(&self) -> u8 {
        self.rating.round().clamp(0.0, f64::from(MAX_RATING)) as u8
    }
}

/// Partial update of a saved book. `None` fields are left untouched.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct SavedBookPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(rename = "started_reading_at", skip_serializing_if = "Option::is_none")]
    pub started_reading: Option<DateTime<Utc>>,
    #[serde(rename = "finished_reading_at", skip_serializing_if = "Option::is_none")]
    pub finished_reading: Option<DateTime<Utc>>,
}

impl SavedBookPatch {
    pub fn is_empty(&self) -> bool {
        self == &SavedBookPatch::default()
    }

    /// The patch as store fields, ready for `DocumentStore::update`.
    pub fn to_fields(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// A `users` document, written once at sign-up.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub email: String,
}

impl UserProfile {
    /// Profile for a new account. The display name is the email's local part.
    pub fn for_email(email: &str) -> Self {
        let display_name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            id: String::new(),
            user_id: uuid::Uuid::new_v4().to_string(),
            display_name,
            avatar_url: String::new(),
            quote: String::new(),
            profession: String::new(),
            email: email.to_string(),
        }
    }
}

/// The signed-in identity, handed explicitly to anything that needs it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub display_name: String,
}

impl From<&UserProfile> for CurrentUser {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.user_id.clone(),
            email: profile.email.clone(),
            display_name: profile.display_name.clone(),
        }
    }
}
