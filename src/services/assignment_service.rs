use crate::models::{Assignment, AssignmentForm};
use crate::services::error::ApiError;
use crate::services::resource::{Resource, ResourceService};
use crate::utils::ASSIGNMENTS_PATH;

impl Resource for Assignment {
    const PATH: &'static str = ASSIGNMENTS_PATH;
    type Form = AssignmentForm;
}

pub type AssignmentService = ResourceService<Assignment>;

impl ResourceService<Assignment> {
    pub async fn by_course(&self, course_id: i64) -> Result<Vec<Assignment>, ApiError> {
        self.list_at(&format!("/course/{}", course_id)).await
    }
}
