mod config;
mod error;
mod gemini;
mod prompt;
mod service;
mod structs;
mod webserver;

use config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    // API 키가 없으면 서버를 띄울 이유가 없으므로 바로 종료한다
    match Config::load() {
        Ok(config) => webserver::run(config).await,
        Err(e) => panic!("설정을 읽지 못했습니다: {e}"),
    }
}
