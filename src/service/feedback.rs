use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::gemini::GeminiClient;
use crate::prompt;
use crate::structs::feedback::FeedbackRequest;

// 채점 요청을 생성 API로 전달하고 결과를 그대로 돌려준다
pub(crate) async fn get_ai_feedback(
    req_body: web::Json<FeedbackRequest>,
    gemini: web::Data<GeminiClient>,
) -> HttpResponse {
    // post 요청 내용 가져오기
    let question = &req_body.question;
    let student_answer = &req_body.student_answer;

    let rubric_string = prompt::render_rubric(&question.rubric);
    let user_query = prompt::build_user_query(&question.question_text, student_answer, &rubric_string);
    let payload = GeminiClient::build_payload(&user_query);

    // 실패 원인과 무관하게 호출자에게는 항상 같은 오류 메시지를 보낸다
    match gemini.request_feedback(&payload).await {
        Ok(body) => HttpResponse::Ok()
            .content_type("application/json")
            .body(body),
        Err(e) => {
            log::error!("AI 피드백 생성 오류: {e}");
            HttpResponse::InternalServerError()
                .json(json!({"error": "AI 피드백 생성 중 오류가 발생했습니다."}))
        }
    }
}
