use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaterialKind {
    #[default]
    Document,
    Video,
    Link,
    Other,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: MaterialKind,
    #[serde(default, deserialize_with = "crate::models::timestamp::optional")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MaterialForm {
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub file_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: MaterialKind,
}
