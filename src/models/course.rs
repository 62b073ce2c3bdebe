use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub credits: Option<u32>,
    /// Assigned lecturer, if any
    #[serde(default)]
    pub lecturer_id: Option<i64>,
    #[serde(default)]
    pub lecturer_name: Option<String>,
    #[serde(default)]
    pub student_count: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CourseForm {
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub credits: Option<u32>,
    pub lecturer_id: Option<i64>,
}
