//! Integration tests for contact lead submission.
//!
//! Covers validation before any network traffic, the wire body sent to the
//! management API, and how each failure becomes a visitor-facing notice.
//!
//! Run with: `cargo test --test contact_integration`

use std::sync::{Arc, Mutex};

use ramz::config::{ConfigFile, PLACEHOLDER_API_KEY};
use ramz::contact::{
    ContactLead, ContactSubmissionPipeline, Field, Notice, NoticeLevel, SubmissionError,
};
use ramz::http::{AsyncHttpClient, ByteRange, HttpError, HttpResponse};
use ramz::i18n::{Language, LanguageContext};

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Debug, Clone)]
struct Posted {
    url: String,
    headers: Vec<(String, String)>,
    body: serde_json::Value,
}

/// Management API stand-in answering every POST the same way.
struct MockManagementApi {
    reply: Result<HttpResponse, HttpError>,
    posted: Mutex<Vec<Posted>>,
}

impl MockManagementApi {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(HttpResponse::new(status, body.as_bytes().to_vec())),
            posted: Mutex::new(Vec::new()),
        }
    }

    fn unreachable() -> Self {
        Self {
            reply: Err(HttpError::Connect("connection refused".to_string())),
            posted: Mutex::new(Vec::new()),
        }
    }

    fn posted(&self) -> Vec<Posted> {
        self.posted.lock().unwrap().clone()
    }
}

impl AsyncHttpClient for MockManagementApi {
    async fn get(&self, _url: &str) -> Result<HttpResponse, HttpError> {
        Err(HttpError::Other("unexpected GET".to_string()))
    }

    async fn get_range(&self, _url: &str, _range: ByteRange) -> Result<HttpResponse, HttpError> {
        Err(HttpError::Other("unexpected ranged GET".to_string()))
    }

    async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        json_body: &str,
    ) -> Result<HttpResponse, HttpError> {
        self.posted.lock().unwrap().push(Posted {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: serde_json::from_str(json_body).unwrap(),
        });
        self.reply.clone()
    }
}

fn valid_lead() -> ContactLead {
    ContactLead::new(
        "Khalid Al-Harbi",
        "khalid@example.sa",
        "+966501234567",
        "video",
        "We need a 60 second product teaser.",
    )
}

fn pipeline(api: &Arc<MockManagementApi>) -> ContactSubmissionPipeline<MockManagementApi> {
    ContactSubmissionPipeline::new(Arc::clone(api), "https://crm.example.com", "live-key")
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_invalid_lead_never_reaches_network() {
    let api = Arc::new(MockManagementApi::replying(200, "{}"));
    let lead = ContactLead::new("A", "bad", "123", "", "short");

    let err = pipeline(&api).submit(&lead).await.unwrap_err();

    let SubmissionError::Validation(errors) = err else {
        panic!("expected a validation error");
    };
    for field in [
        Field::Email,
        Field::Phone,
        Field::ServiceCategory,
        Field::Message,
    ] {
        assert!(errors.contains(field), "{field} should be reported");
    }
    assert!(api.posted().is_empty());
}

#[tokio::test]
async fn test_server_error_message_surfaces() {
    let api = Arc::new(MockManagementApi::replying(500, r#"{"message":"db down"}"#));

    let err = pipeline(&api).submit(&valid_lead()).await.unwrap_err();

    assert_eq!(err.remote_message(), Some("db down"));
    let notice = Notice::error(&err, &LanguageContext::new(Language::En));
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "db down");
}

#[tokio::test]
async fn test_accepted_lead_wire_format() {
    let api = Arc::new(MockManagementApi::replying(
        200,
        r#"{"message":"Lead stored","id":42}"#,
    ));

    let confirmation = pipeline(&api).submit(&valid_lead()).await.unwrap();
    assert_eq!(confirmation.message.as_deref(), Some("Lead stored"));

    let posted = api.posted();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].url, "https://crm.example.com/api/clients/submit");
    assert!(posted[0]
        .headers
        .contains(&("x-api-key".to_string(), "live-key".to_string())));
    assert_eq!(
        posted[0].body,
        serde_json::json!({
            "name": "Khalid Al-Harbi",
            "email": "khalid@example.sa",
            "phone": "+966501234567",
            "mobile": "+966501234567",
            "company_name": "video",
            "message": "We need a 60 second product teaser.",
        })
    );
}

#[tokio::test]
async fn test_unreachable_service_is_distinct_from_rejection() {
    let api = Arc::new(MockManagementApi::unreachable());
    let i18n = LanguageContext::new(Language::Ar);

    let result = pipeline(&api).submit(&valid_lead()).await;
    let err = result.as_ref().unwrap_err();

    assert!(err.is_connectivity());
    assert_eq!(err.remote_message(), None);
    let notice = Notice::from_result(&result, &i18n);
    assert_eq!(notice.message, i18n.t("contact_error_connectivity"));
    assert_ne!(notice.message, i18n.t("contact_validation_error_send"));
}

#[tokio::test]
async fn test_no_retry_after_failure() {
    let api = Arc::new(MockManagementApi::replying(503, ""));
    let pipeline = pipeline(&api);

    let _ = pipeline.submit(&valid_lead()).await;

    assert_eq!(api.posted().len(), 1);
    assert_eq!(pipeline.stats().rejected, 1);
}

#[tokio::test]
async fn test_pipeline_from_default_config() {
    let api = Arc::new(MockManagementApi::replying(201, "{}"));
    let config = ConfigFile::default();
    let pipeline = ContactSubmissionPipeline::from_settings(Arc::clone(&api), &config.management);

    pipeline.submit(&valid_lead()).await.unwrap();

    let posted = api.posted();
    assert!(posted[0].url.starts_with("https://el-ramzz.vercel.app"));
    assert!(posted[0]
        .headers
        .contains(&("x-api-key".to_string(), PLACEHOLDER_API_KEY.to_string())));
}
