use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for listing a student's exams above a grade.
#[derive(Deserialize, IntoParams)]
pub struct MinScoreParam {
    /// Minimum grade, inclusive (default: 24)
    pub min_score: Option<i32>,
}
