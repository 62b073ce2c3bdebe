use crate::models::{GradeForm, Submission, SubmissionForm};
use crate::services::error::ApiError;
use crate::services::resource::{Resource, ResourceService};
use crate::utils::SUBMISSIONS_PATH;

impl Resource for Submission {
    const PATH: &'static str = SUBMISSIONS_PATH;
    type Form = SubmissionForm;
}

pub type SubmissionService = ResourceService<Submission>;

impl ResourceService<Submission> {
    pub async fn by_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>, ApiError> {
        self.list_at(&format!("/assignment/{}", assignment_id)).await
    }

    /// Everything a student handed in, used by the student submissions view
    pub async fn by_student(&self, student_id: i64) -> Result<Vec<Submission>, ApiError> {
        self.list_at(&format!("/student/{}", student_id)).await
    }

    pub async fn grade(&self, submission_id: i64, grade: &GradeForm) -> Result<Submission, ApiError> {
        let graded: Submission = self
            .client()
            .put(&format!("/{}/grade", submission_id), grade)
            .await?;
        log::info!("✅ Submission {} graded: {}", submission_id, grade.grade);
        Ok(graded)
    }
}
