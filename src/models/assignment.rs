use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::models::timestamp::optional")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub max_score: Option<f64>,
    #[serde(default)]
    pub course_title: Option<String>,
}

impl Assignment {
    /// Past due at `now`; never overdue without a due date
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date.map_or(false, |due| due < now)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentForm {
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(serialize_with = "crate::models::timestamp::optional_local")]
    pub due_date: Option<DateTime<Utc>>,
    pub max_score: Option<f64>,
}
