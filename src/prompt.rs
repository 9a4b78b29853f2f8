use serde_json::Value;

// 채점자 역할을 지정하는 고정 시스템 프롬프트
pub(crate) const SYSTEM_PROMPT: &str = "당신은 학생들의 서술형 답안을 채점하고 건설적인 피드백을 제공하는 유능하고 친절한 AI 선생님입니다. 제시된 채점 기준(루브릭)에 따라 학생의 답변을 엄격하고 객관적으로 평가해주세요. 학생이 더 발전할 수 있도록 긍정적이고 구체적인 조언을 담아 피드백을 작성해야 합니다.";

// 루브릭을 프롬프트에 넣을 문자열로 변환한다
// 배열이 아니면(없거나 null 포함) "채점 기준 없음"으로 대체한다
pub(crate) fn render_rubric(rubric: &Value) -> String {
    match rubric.as_array() {
        Some(lines) => lines
            .iter()
            .map(|line| {
                format!(
                    "- {} ({}점)",
                    line["criterion"].as_str().unwrap_or_default(),
                    line["maxScore"]
                )
            })
            .collect::<Vec<String>>()
            .join("\n"),
        None => "채점 기준 없음".to_string(),
    }
}

// 문제, 학생 답변, 루브릭을 묶어 사용자 질의문을 만든다
pub(crate) fn build_user_query(
    question_text: &str,
    student_answer: &str,
    rubric_string: &str,
) -> String {
    format!(
        "다음은 학생이 서술형 문제에 대해 제출한 답변입니다. 채점 기준에 따라 각 항목별 점수를 매기고, 종합 피드백을 작성해주세요.\n\n\
        ### 문제\n{question_text}\n\n\
        ### 학생 답변\n{student_answer}\n\n\
        ### 채점 기준 (루브릭)\n{rubric_string}\n\n\
        ### 출력 형식\n반드시 아래 JSON 형식에 맞춰서, 각 채점 기준 항목마다 점수를 할당하고, 종합 피드백을 한국어로 작성해주세요. 점수는 최대 점수를 초과할 수 없습니다."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rubric_lines_keep_input_order() {
        let rubric = json!([
            { "criterion": "정확성", "maxScore": 5 },
            { "criterion": "논리성", "maxScore": 3 }
        ]);
        assert_eq!(render_rubric(&rubric), "- 정확성 (5점)\n- 논리성 (3점)");
    }

    #[test]
    fn missing_or_non_array_rubric_renders_placeholder() {
        assert_eq!(render_rubric(&Value::Null), "채점 기준 없음");
        assert_eq!(render_rubric(&json!("정확성")), "채점 기준 없음");
        assert_eq!(render_rubric(&json!({ "criterion": "정확성" })), "채점 기준 없음");
    }

    #[test]
    fn empty_rubric_renders_empty_string() {
        assert_eq!(render_rubric(&json!([])), "");
    }

    #[test]
    fn user_query_embeds_question_answer_and_rubric() {
        let rubric_string = render_rubric(&Value::Null);
        let query = build_user_query("Q1", "A1", &rubric_string);
        assert!(query.contains("### 문제\nQ1"));
        assert!(query.contains("### 학생 답변\nA1"));
        assert!(query.contains("채점 기준 없음"));
        assert!(query.contains("점수는 최대 점수를 초과할 수 없습니다"));
    }
}
