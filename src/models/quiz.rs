use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    #[serde(default)]
    pub id: Option<i64>,
    pub text: String,
    pub options: Vec<String>,
    /// Only present for management roles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_option: Option<usize>,
    #[serde(default = "default_points")]
    pub points: u32,
}

fn default_points() -> u32 {
    1
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    pub fn total_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QuizForm {
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub duration_minutes: Option<u32>,
    pub questions: Vec<QuizQuestion>,
}

/// A student's answers, one selected option index per question
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub student_id: i64,
    pub answers: Vec<Option<usize>>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub quiz_id: i64,
    pub score: f64,
    pub total: f64,
    #[serde(default)]
    pub correct_answers: Option<u32>,
}

impl QuizResult {
    pub fn percentage(&self) -> f64 {
        if self.total <= 0.0 {
            0.0
        } else {
            self.score / self.total * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_default_to_one() {
        let quiz: Quiz = serde_json::from_str(
            r#"{"id":2,"courseId":1,"title":"Week 1","questions":[
                {"text":"2+2?","options":["3","4"]},
                {"text":"Capital of France?","options":["Paris","Lyon"],"points":3}
            ]}"#,
        )
        .unwrap();
        assert_eq!(quiz.total_points(), 4);
        assert!(quiz.questions[0].correct_option.is_none());
    }

    #[test]
    fn percentage_handles_zero_total() {
        let result = QuizResult { quiz_id: 1, score: 3.0, total: 0.0, correct_answers: None };
        assert_eq!(result.percentage(), 0.0);

        let result = QuizResult { quiz_id: 1, score: 3.0, total: 4.0, correct_answers: Some(3) };
        assert_eq!(result.percentage(), 75.0);
    }
}
