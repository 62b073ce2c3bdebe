use crate::models::{Quiz, QuizAttempt, QuizForm, QuizResult};
use crate::services::error::ApiError;
use crate::services::resource::{Resource, ResourceService};
use crate::utils::QUIZZES_PATH;

impl Resource for Quiz {
    const PATH: &'static str = QUIZZES_PATH;
    type Form = QuizForm;
}

pub type QuizService = ResourceService<Quiz>;

impl ResourceService<Quiz> {
    pub async fn by_course(&self, course_id: i64) -> Result<Vec<Quiz>, ApiError> {
        self.list_at(&format!("/course/{}", course_id)).await
    }

    pub async fn submit_attempt(&self, quiz_id: i64, attempt: &QuizAttempt) -> Result<QuizResult, ApiError> {
        let result: QuizResult = self
            .client()
            .post(&format!("/{}/submit", quiz_id), attempt)
            .await?;
        log::info!(
            "✅ Quiz {} submitted: {}/{}",
            quiz_id,
            result.score,
            result.total
        );
        Ok(result)
    }
}
