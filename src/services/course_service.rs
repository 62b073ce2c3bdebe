use crate::models::{Course, CourseForm, Student};
use crate::services::error::ApiError;
use crate::services::resource::{Resource, ResourceService};
use crate::utils::COURSES_PATH;

impl Resource for Course {
    const PATH: &'static str = COURSES_PATH;
    type Form = CourseForm;
}

pub type CourseService = ResourceService<Course>;

impl ResourceService<Course> {
    pub async fn enroll(&self, course_id: i64, student_id: i64) -> Result<(), ApiError> {
        let path = format!("/{}/enroll/{}", course_id, student_id);
        self.client()
            .post::<_, serde::de::IgnoredAny>(&path, &())
            .await?;
        log::info!("✅ Student {} enrolled in course {}", student_id, course_id);
        Ok(())
    }

    pub async fn unenroll(&self, course_id: i64, student_id: i64) -> Result<(), ApiError> {
        self.client()
            .delete(&format!("/{}/enroll/{}", course_id, student_id))
            .await
    }

    pub async fn students(&self, course_id: i64) -> Result<Vec<Student>, ApiError> {
        self.list_at(&format!("/{}/students", course_id)).await
    }
}
