use serde::Deserialize;
use serde_json::Value;

// 제출된 채점 요청을 해석하는 구조체
#[derive(Deserialize)]
pub struct FeedbackRequest {
    pub(crate) question: Question,
    #[serde(rename = "studentAnswer")]
    pub(crate) student_answer: String,
}

#[derive(Deserialize)]
pub struct Question {
    #[serde(rename = "questionText")]
    pub(crate) question_text: String,
    // 루브릭은 없거나 배열이 아닐 수도 있으므로 Value로 받는다
    #[serde(default)]
    pub(crate) rubric: Value,
}
