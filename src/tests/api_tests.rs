use super::*;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

use crate::controller::{Controller, ViewState};
use crate::domain::{CandidateDetails, InterviewerDetails};
use crate::error::ErrorCode;

async fn spawn_server(app: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn api_for(base_url: String) -> QuestionsApi {
    let cfg = ClientConfig {
        base_url,
        ..ClientConfig::default()
    };
    QuestionsApi::new(&cfg).expect("client")
}

fn jane() -> SubmissionInput {
    SubmissionInput {
        interviewer_details: InterviewerDetails {
            linkedin_url: "https://www.linkedin.com/in/jane".into(),
            about: "".into(),
            mock: false,
        },
        candidate_details: CandidateDetails {
            position: "Backend Engineer".into(),
            skills: "Go, Postgres".into(),
            experience: "5".into(),
        },
    }
}

fn error_route(status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        DEFAULT_PATH,
        post(move || async move { (status, body) }),
    )
}

const DEFAULT_PATH: &str = "/api/generate-questions";

#[tokio::test]
async fn one_record_with_follow_ups_reaches_results_in_order() {
    let app = Router::new().route(
        DEFAULT_PATH,
        post(|| async {
            (
                [("content-type", "application/json")],
                r#"[{"set_type":"technical","category":"Databases","difficulty":"medium",
                    "question":"How do you tune Postgres?","why_this_question":"Interviewer is a DBA",
                    "expected_depth":"Indexes and vacuum","follow_ups":["Why?","What else?"]}]"#,
            )
        }),
    );
    let api = api_for(spawn_server(app).await);
    let mut c = Controller::new();

    let state = c.submit(&api, jane()).await.unwrap();

    assert_eq!(state, ViewState::Results);
    assert_eq!(c.questions().len(), 1);
    assert_eq!(c.questions()[0].follow_ups, vec!["Why?".to_string(), "What else?".to_string()]);
    assert_eq!(c.questions()[0].category, "Databases");
}

#[derive(Clone)]
struct CaptureState {
    tx: Arc<Mutex<Option<oneshot::Sender<(HeaderMap, String)>>>>,
}

async fn capture(State(state): State<CaptureState>, headers: HeaderMap, body: String) -> &'static str {
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send((headers, body));
    }
    "[]"
}

#[tokio::test]
async fn request_body_round_trips_field_for_field() {
    let (tx, rx) = oneshot::channel();
    let state = CaptureState { tx: Arc::new(Mutex::new(Some(tx))) };
    let app = Router::new().route(DEFAULT_PATH, post(capture)).with_state(state);
    let api = api_for(spawn_server(app).await);

    let mut input = jane();
    input.interviewer_details.mock = true;
    let out = api.generate_questions(&input).await.expect("call succeeds");
    assert!(out.is_empty());

    let (headers, body) = rx.await.expect("captured request");
    assert_eq!(headers.get("content-type").unwrap(), "application/json");

    let decoded: SubmissionInput = serde_json::from_str(&body).expect("decode body");
    assert_eq!(decoded, input);

    let raw: serde_json::Value = serde_json::from_str(&body).unwrap();
    let obj = raw.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(raw["interviewer_details"]["mock"], serde_json::Value::Bool(true));
    assert_eq!(raw["interviewer_details"]["about"], serde_json::Value::String(String::new()));
    assert_eq!(raw["candidate_details"]["experience"], "5");
}

#[tokio::test]
async fn structured_error_body_is_classified_by_code() {
    let app = error_route(
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"detail":{"code":"SCRAPING_ERROR","message":"selector .pv-top-card missing"}}"#,
    );
    let api = api_for(spawn_server(app).await);
    let mut c = Controller::new();

    assert_eq!(c.submit(&api, jane()).await.unwrap(), ViewState::Error);
    let err = c.error().unwrap();
    assert_eq!(err.code, ErrorCode::ScrapingError);
    assert_eq!(Some(err.message.as_str()), ErrorCode::ScrapingError.user_message());
    assert_eq!(c.preserved_input(), Some(&jane()));
}

#[tokio::test]
async fn html_error_page_becomes_unknown_error_with_status() {
    let app = error_route(StatusCode::SERVICE_UNAVAILABLE, "<html><body>maintenance</body></html>");
    let api = api_for(spawn_server(app).await);
    let mut c = Controller::new();

    assert_eq!(c.submit(&api, jane()).await.unwrap(), ViewState::Error);
    let err = c.error().unwrap();
    assert_eq!(err.code, ErrorCode::UnknownError);
    assert_eq!(err.message, "HTTP 503: Service Unavailable");
}

#[tokio::test]
async fn garbage_success_body_becomes_unknown_error() {
    let app = error_route(StatusCode::OK, "not a json array");
    let api = api_for(spawn_server(app).await);

    match api.generate_questions(&jane()).await {
        Err(ApiError::Decode { status, .. }) => assert_eq!(status, 200),
        other => panic!("expected decode error, got {other:?}"),
    }

    let mut c = Controller::new();
    assert_eq!(c.submit(&api, jane()).await.unwrap(), ViewState::Error);
    let err = c.error().unwrap();
    assert_eq!(err.code, ErrorCode::UnknownError);
    assert!(err.message.contains("200"));
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = api_for(format!("http://{addr}"));
    assert!(matches!(api.generate_questions(&jane()).await, Err(ApiError::Transport(_))));

    let mut c = Controller::new();
    assert_eq!(c.submit(&api, jane()).await.unwrap(), ViewState::Error);
    assert_eq!(c.error().unwrap().code, ErrorCode::NetworkError);
    assert!(c.error().unwrap().retry_allowed);
}

#[tokio::test]
async fn configured_timeout_is_a_network_error() {
    let app = Router::new().route(
        DEFAULT_PATH,
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "[]"
        }),
    );
    let cfg = ClientConfig {
        base_url: spawn_server(app).await,
        request_timeout_secs: Some(1),
        ..ClientConfig::default()
    };
    let api = QuestionsApi::new(&cfg).unwrap();

    let mut c = Controller::new();
    assert_eq!(c.submit(&api, jane()).await.unwrap(), ViewState::Error);
    assert_eq!(c.error().unwrap().code, ErrorCode::NetworkError);
}

#[tokio::test]
async fn runs_against_the_development_stub() {
    let api = api_for(spawn_server(crate::devserver::build_router()).await);
    let mut c = Controller::new();

    assert_eq!(c.submit(&api, jane()).await.unwrap(), ViewState::Results);
    assert!(!c.questions().is_empty());
    assert!(c.questions().iter().any(|q| q.question.contains("Backend Engineer")));

    c.new_search();
    let mut bad = jane();
    bad.interviewer_details.linkedin_url = "https://example.com/jane".into();
    assert_eq!(c.submit(&api, bad).await.unwrap(), ViewState::Error);
    assert_eq!(c.error().unwrap().code, ErrorCode::InvalidUrl);
}
