use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

// config.toml에서 읽는 서버 설정
// API 키는 비밀값이므로 파일이 아닌 환경 변수에서만 읽는다
#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(skip)]
    pub api_key: String,
}

fn default_address() -> String {
    "127.0.0.1:8081".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash-preview-05-20".to_string()
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

impl Config {
    pub fn load() -> Result<Config, Box<dyn Error>> {
        // 설정 파일이 없으면 전부 기본값으로 동작한다
        let mut config: Config = if Path::new("config.toml").exists() {
            toml::from_str(&fs::read_to_string("config.toml")?)?
        } else {
            toml::from_str("")?
        };
        config.api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| "GEMINI_API_KEY 환경 변수가 설정되지 않았습니다")?;
        Ok(config)
    }
}
