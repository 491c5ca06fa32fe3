use actix_files::Files;
use actix_web::{web, HttpResponse};
use log::{error, info};
use serde_json::Value;

use crate::classify::service::ClassifierService;
use crate::error::RelayError;

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    configure_api(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/classify").route(web::post().to(classify)));
}

/// Pulls a non-empty string `text` out of the raw body. Anything else,
/// malformed JSON included, counts as missing.
fn extract_text(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get("text")?
        .as_str()
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

async fn classify(
    classifier: web::Data<ClassifierService>,
    body: web::Bytes,
) -> Result<HttpResponse, RelayError> {
    let text = extract_text(&body).ok_or(RelayError::MissingText)?;
    info!("Classifying {} characters of ingredient text", text.chars().count());

    match classifier.classify(&text).await {
        Ok(result) => {
            info!("Classification result: {:?}", result.category.map(|c| c.number()));
            Ok(HttpResponse::Ok().json(result))
        }
        Err(e) => {
            error!("Classification failed: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::models::ChatRequest;
    use crate::classify::prompt::SYSTEM_INSTRUCTION;
    use crate::classify::service::ChatModel;
    use actix_web::http::StatusCode;
    use actix_web::App;
    use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    enum Reply {
        Text(&'static str),
        Status(u16, &'static str),
    }

    struct FakeModel {
        reply: Reply,
        seen: Mutex<Vec<(String, ChatRequest)>>,
    }

    impl FakeModel {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self { reply, seen: Mutex::new(Vec::new()) })
        }

        fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ChatModel for FakeModel {
        async fn complete(
            &self,
            api_key: &str,
            request: &ChatRequest,
        ) -> Result<String, RelayError> {
            self.seen.lock().unwrap().push((api_key.to_string(), request.clone()));
            match self.reply {
                Reply::Text(text) => Ok(text.to_string()),
                Reply::Status(status, body) => {
                    Err(RelayError::Upstream { status, body: body.to_string() })
                }
            }
        }
    }

    async fn post(
        model: Arc<FakeModel>,
        api_key: Option<&str>,
        body: &'static str,
    ) -> (StatusCode, Value) {
        let classifier =
            ClassifierService::new(api_key.map(str::to_owned), "gpt-4o-mini".into(), model);
        let app = init_service(
            App::new()
                .app_data(web::Data::new(classifier))
                .configure(configure_api),
        )
        .await;
        let req = TestRequest::post()
            .uri("/api/classify")
            .insert_header(("content-type", "application/json"))
            .set_payload(body)
            .to_request();
        let resp = call_service(&app, req).await;
        let status = resp.status();
        let json: Value = read_body_json(resp).await;
        (status, json)
    }

    #[actix_web::test]
    async fn classifies_and_embeds_text_in_prompt() {
        let model = FakeModel::new(Reply::Text(
            r#"{"category":3,"description":"Indeholder forarbejdet hvedemel og tilsat salt."}"#,
        ));
        let (status, body) =
            post(model.clone(), Some("sk-test"), r#"{"text":"sukker, salt, hvedemel"}"#).await;

        assert_eq!(status, StatusCode::OK);
        let expected = json!({
            "category": 3,
            "description": "Indeholder forarbejdet hvedemel og tilsat salt."
        });
        assert_eq!(body, expected);

        let seen = model.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (api_key, request) = &seen[0];
        assert_eq!(api_key, "sk-test");
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.messages[0].content, SYSTEM_INSTRUCTION);
        assert!(request.messages[1].content.contains("sukker, salt, hvedemel"));
    }

    #[actix_web::test]
    async fn plain_text_reply_yields_null_category() {
        let model = FakeModel::new(Reply::Text("Ikke nok information."));
        let (status, body) = post(model, Some("sk-test"), r#"{"text":"?"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "category": null, "description": "Ikke nok information." }));
    }

    #[actix_web::test]
    async fn missing_text_is_rejected_before_upstream() {
        let payloads = [
            "",
            "{}",
            r#"{"text":""}"#,
            r#"{"text":42}"#,
            r#"{"text":null}"#,
            "not json",
        ];
        for payload in payloads {
            let model = FakeModel::new(Reply::Text("{}"));
            let (status, body) = post(model.clone(), Some("sk-test"), payload).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {:?}", payload);
            assert_eq!(body, json!({ "error": "Missing text" }));
            assert_eq!(model.calls(), 0);
        }
    }

    #[actix_web::test]
    async fn missing_credential_fails_without_upstream_call() {
        let model = FakeModel::new(Reply::Text("{}"));
        let (status, body) = post(model.clone(), None, r#"{"text":"mel"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "API key not configured" }));
        assert_eq!(model.calls(), 0);
    }

    #[actix_web::test]
    async fn upstream_failure_is_passed_through() {
        let model = FakeModel::new(Reply::Status(401, "Incorrect API key provided"));
        let (status, body) = post(model.clone(), Some("sk-bad"), r#"{"text":"mel"}"#).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "Incorrect API key provided" }));
        assert_eq!(model.calls(), 1);
    }

    #[test]
    fn whitespace_text_is_still_text() {
        assert_eq!(extract_text(br#"{"text":" "}"#).as_deref(), Some(" "));
        assert_eq!(extract_text(br#"{"text":"a","other":1}"#).as_deref(), Some("a"));
    }
}
