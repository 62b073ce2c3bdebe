use crate::models::{Course, Lecturer, LecturerForm};
use crate::services::error::ApiError;
use crate::services::resource::{Resource, ResourceService};
use crate::utils::LECTURERS_PATH;

impl Resource for Lecturer {
    const PATH: &'static str = LECTURERS_PATH;
    type Form = LecturerForm;
}

pub type LecturerService = ResourceService<Lecturer>;

impl ResourceService<Lecturer> {
    /// Courses taught by the lecturer
    pub async fn courses(&self, lecturer_id: i64) -> Result<Vec<Course>, ApiError> {
        self.list_at(&format!("/{}/courses", lecturer_id)).await
    }
}
