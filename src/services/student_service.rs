use crate::models::{Course, Student, StudentForm};
use crate::services::error::ApiError;
use crate::services::resource::{Resource, ResourceService};
use crate::utils::STUDENTS_PATH;

impl Resource for Student {
    const PATH: &'static str = STUDENTS_PATH;
    type Form = StudentForm;
}

pub type StudentService = ResourceService<Student>;

impl ResourceService<Student> {
    /// Courses the student is enrolled in
    pub async fn courses(&self, student_id: i64) -> Result<Vec<Course>, ApiError> {
        self.list_at(&format!("/{}/courses", student_id)).await
    }
}
