use std::error::Error;

use serde_json::{json, Value};

use crate::config::Config;
use crate::error::UpstreamStatusError;
use crate::prompt;

// 생성 API 호출을 담당하는 클라이언트
// 핸들러 간에 공유되므로 reqwest 클라이언트는 하나만 만든다
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> GeminiClient {
        GeminiClient {
            client: reqwest::Client::new(),
            api_base: config.api_base.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    // 사용자 질의문과 응답 스키마를 담은 요청 본문을 구성한다
    // scores와 feedback은 입력과 무관하게 항상 필수 필드다
    pub fn build_payload(user_query: &str) -> Value {
        json!({
            "contents": [{ "parts": [{ "text": user_query }] }],
            "systemInstruction": { "parts": [{ "text": prompt::SYSTEM_PROMPT }] },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "scores": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "criterion": { "type": "STRING" },
                                    "score": { "type": "NUMBER" }
                                },
                                "required": ["criterion", "score"]
                            }
                        },
                        "feedback": { "type": "STRING" }
                    },
                    "required": ["scores", "feedback"]
                }
            }
        })
    }

    // 생성 API를 한 번 호출하고 응답 본문을 원문 그대로 돌려준다
    // 재시도는 하지 않는다
    pub async fn request_feedback(
        &self,
        payload: &Value,
    ) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_base, self.model, self.api_key
        );
        let response = self.client.post(&url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(Box::new(UpstreamStatusError(response.status().as_u16())));
        }
        let body = response.bytes().await?;
        // JSON인지 확인만 하고 다시 직렬화하지는 않는다
        serde_json::from_slice::<Value>(&body)?;
        Ok(body.to_vec())
    }
}
