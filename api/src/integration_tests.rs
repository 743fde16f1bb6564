//! Full router tests for the talent feed API
//!
//! Drives the real router through axum-test, covering content negotiation,
//! the obfuscated transport, localization, the encoding modes, and the
//! check endpoint.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::app::TalentService;
    use crate::encoding::EncodingMode;
    use crate::i18n::Lang;
    use crate::test_utils::{decode_obfuscated, sample_dataset};
    use crate::{router, AppState};

    fn server(encoding: EncodingMode) -> TestServer {
        let state = AppState {
            talents: Arc::new(TalentService::new(sample_dataset())),
            encoding,
        };
        TestServer::new(router(state)).expect("test server starts")
    }

    /// The canonical serialization the feed transmits for `lang`.
    fn expected_json(lang: Lang) -> String {
        let service = TalentService::new(sample_dataset());
        serde_json::to_string(&service.localized(lang)).expect("fixture serializes")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let server = server(EncodingMode::Obfuscated);

        let res = server.get("/health").await;

        res.assert_status_ok();
        assert_eq!(res.json::<Value>()["status"], "ok");
    }

    #[tokio::test]
    async fn raw_param_returns_plain_json() {
        let server = server(EncodingMode::Obfuscated);

        let res = server.get("/api/talents").add_query_param("raw", "1").await;

        res.assert_status_ok();
        let content_type = res.header(header::CONTENT_TYPE);
        assert!(content_type.to_str().unwrap().contains("application/json"));
        assert_eq!(res.header(header::CACHE_CONTROL), "public, max-age=3600");
        assert_eq!(res.text(), expected_json(Lang::De));
    }

    #[tokio::test]
    async fn accept_header_is_equivalent_to_raw() {
        let server = server(EncodingMode::Obfuscated);

        let res = server
            .get("/api/talents")
            .add_header(
                header::ACCEPT,
                HeaderValue::from_static("Application/JSON, text/plain"),
            )
            .await;

        res.assert_status_ok();
        let content_type = res.header(header::CONTENT_TYPE);
        assert!(content_type.to_str().unwrap().contains("application/json"));
        assert_eq!(res.text(), expected_json(Lang::De));
    }

    #[tokio::test]
    async fn default_request_is_obfuscated_and_decodable() {
        let server = server(EncodingMode::Obfuscated);

        let res = server.get("/api/talents").await;

        res.assert_status_ok();
        assert_eq!(res.header(header::CONTENT_TYPE), "text/plain; charset=utf-8");
        assert_eq!(res.header(header::CACHE_CONTROL), "public, max-age=3600");
        assert_eq!(res.header("x-content-encoded"), "base64");
        assert_eq!(
            decode_obfuscated(&res.text()).unwrap(),
            expected_json(Lang::De)
        );
    }

    #[tokio::test]
    async fn obfuscation_draws_stay_in_range() {
        let server = server(EncodingMode::Obfuscated);

        for _ in 0..50 {
            let body = server.get("/api/talents").await.text();
            let first: u32 = body[0..2].parse().unwrap();
            let second: u32 = body[2..3].parse().unwrap();
            assert!((10..=20).contains(&first), "first draw {first}");
            assert!((1..=3).contains(&second), "second draw {second}");
        }
    }

    #[tokio::test]
    async fn lang_en_resolves_english_names() {
        let server = server(EncodingMode::Obfuscated);

        let res = server
            .get("/api/talents")
            .add_query_param("lang", "en")
            .add_query_param("raw", "1")
            .await;

        res.assert_status_ok();
        let expected = json!({
            "talentGroups": [
                {
                    "groupId": "g1",
                    "groupName_de": "Gruppe",
                    "groupName_en": "Group",
                    "groupName": "Group",
                    "talents": [{
                        "id": "t1",
                        "name_de": "Stärke",
                        "name_en": "Strength",
                        "name": "Strength",
                        "baseTalentValue": 10,
                        "factors": { "strength": 1, "intellect": 0, "agility": 0, "will": 0, "power": 0 }
                    }]
                },
                {
                    "groupId": "g2",
                    "groupName_de": "Geist",
                    "groupName": "Geist",
                    "talents": [{
                        "id": "t2",
                        "name_de": "Rechnen",
                        "name": "Rechnen",
                        "baseTalentValue": 8,
                        "factors": { "strength": 0, "intellect": 2, "agility": 0, "will": 1, "power": 0 }
                    }]
                }
            ]
        });
        assert_eq!(res.json::<Value>(), expected);
    }

    #[tokio::test]
    async fn malformed_query_falls_back_to_the_encoded_path() {
        let server = server(EncodingMode::Obfuscated);

        let res = server.get("/api/talents?raw&lang==x&&=1").await;

        res.assert_status_ok();
        assert_eq!(res.header("x-content-encoded"), "base64");
        assert_eq!(
            decode_obfuscated(&res.text()).unwrap(),
            expected_json(Lang::De)
        );
    }

    #[tokio::test]
    async fn base64_mode_encodes_without_a_junk_prefix() {
        let server = server(EncodingMode::Base64);

        let res = server.get("/api/talents").await;

        res.assert_status_ok();
        assert_eq!(res.header(header::CONTENT_TYPE), "text/plain");
        assert_eq!(res.header("x-content-encoded"), "base64");
        assert_eq!(
            res.text(),
            crate::encoding::to_base64(&expected_json(Lang::De))
        );

        let raw = server.get("/api/talents").add_query_param("raw", "1").await;
        assert_eq!(raw.text(), expected_json(Lang::De));
    }

    #[tokio::test]
    async fn passthrough_mode_stays_plain_on_both_paths() {
        let server = server(EncodingMode::Passthrough);

        let res = server.get("/api/talents").await;

        res.assert_status_ok();
        assert!(res.maybe_header("x-content-encoded").is_none());
        assert_eq!(res.header(header::CACHE_CONTROL), "public, max-age=3600");
        assert_eq!(res.text(), expected_json(Lang::De));
    }

    #[tokio::test]
    async fn plain_mode_skips_the_cache_directive() {
        let server = server(EncodingMode::Plain);

        let res = server.get("/api/talents").await;

        res.assert_status_ok();
        assert!(res.maybe_header(header::CACHE_CONTROL).is_none());
        assert!(res.maybe_header("x-content-encoded").is_none());
        assert_eq!(res.text(), expected_json(Lang::De));
    }

    #[tokio::test]
    async fn check_computes_the_effective_value() {
        let server = server(EncodingMode::Plain);

        let res = server
            .post("/api/talents/t2/check")
            .json(&json!({
                "inputs": {
                    "strength": "0",
                    "intellect": "12",
                    "agility": 0,
                    "will": "1,5",
                    "power": "0"
                }
            }))
            .await;

        res.assert_status_ok();
        let body = res.json::<Value>();
        assert_eq!(body["talentId"], "t2");
        // 8 + 2*12 + 1*1.5
        assert_eq!(body["effectiveValue"], 33.5);
    }

    #[tokio::test]
    async fn check_rejects_an_unknown_talent() {
        let server = server(EncodingMode::Plain);

        let res = server
            .post("/api/talents/nope/check")
            .json(&json!({"inputs": {}}))
            .await;

        res.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn check_validation_messages_default_to_german() {
        let server = server(EncodingMode::Plain);

        let res = server
            .post("/api/talents/t1/check")
            .json(&json!({"inputs": {"strength": "viel"}}))
            .await;

        res.assert_status(StatusCode::BAD_REQUEST);
        let body = res.json::<Value>();
        let details = body["details"].as_array().unwrap();
        assert_eq!(details.len(), 5);
        assert!(details[0].as_str().unwrap().contains("muss eine Zahl sein"));
        assert!(details[1].as_str().unwrap().contains("ist erforderlich"));
    }

    #[tokio::test]
    async fn check_validation_messages_switch_to_english() {
        let server = server(EncodingMode::Plain);

        let res = server
            .post("/api/talents/t1/check")
            .add_query_param("lang", "en")
            .json(&json!({"inputs": {}}))
            .await;

        res.assert_status(StatusCode::BAD_REQUEST);
        let body = res.json::<Value>();
        let details = body["details"].as_array().unwrap();
        assert!(details
            .iter()
            .all(|d| d.as_str().unwrap().ends_with("is required.")));
    }
}
