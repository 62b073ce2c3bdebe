use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// `None` for institution-wide announcements
    #[serde(default)]
    pub course_id: Option<i64>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::timestamp::optional")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementForm {
    pub title: String,
    pub content: String,
    pub course_id: Option<i64>,
}
