use actix_web::{web, App, HttpServer};

use crate::config::Config;
use crate::gemini::GeminiClient;
use crate::service::feedback;

// actix 서비스 시작
pub(crate) async fn run(config: Config) -> std::io::Result<()> {
    let address = config.address.clone();
    let gemini = GeminiClient::new(&config);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(gemini.clone()))
            .service(
                web::scope("/api").route("/feedback", web::post().to(feedback::get_ai_feedback)),
            )
    })
    .bind(&address)?
    .run();
    log::info!("HTTP 서비스가 {address} 에서 시작되었습니다");
    server.await
}
