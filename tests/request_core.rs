//! Clasificación de respuestas de `ApiClient::perform` contra un transporte guionizado.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Once;

use async_trait::async_trait;
use futures::executor::block_on;
use rstest::rstest;
use serde::Deserialize;
use serde_json::{json, Value};

use wid_timer_ui::services::{Credentials, FetchMode, OutgoingRequest, Transport, TransportResponse};
use wid_timer_ui::{ApiClient, Outcome, Payload, RequestError, TransportError};

// ---------------------------------------------------------------------------
// Logger que cuenta los registros de nivel error del hilo actual
// ---------------------------------------------------------------------------

struct CaptureLogger;

thread_local! {
    static ERROR_RECORDS: Cell<usize> = const { Cell::new(0) };
}

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if record.level() == log::Level::Error {
            ERROR_RECORDS.with(|count| count.set(count.get() + 1));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT_LOGGER: Once = Once::new();

fn capture_logs() {
    INIT_LOGGER.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
    ERROR_RECORDS.with(|count| count.set(0));
}

fn error_records() -> usize {
    ERROR_RECORDS.with(Cell::get)
}

// ---------------------------------------------------------------------------
// Transporte guionizado
// ---------------------------------------------------------------------------

enum Step {
    Respond { status: u16, body: &'static str },
    Unreachable(&'static str),
}

struct ScriptedResponse {
    status: u16,
    body: &'static str,
    body_reads: Rc<Cell<usize>>,
}

#[async_trait(?Send)]
impl TransportResponse for ScriptedResponse {
    fn status(&self) -> u16 {
        self.status
    }

    async fn text(self) -> Result<String, TransportError> {
        self.body_reads.set(self.body_reads.get() + 1);
        Ok(self.body.to_string())
    }
}

#[derive(Default)]
struct ScriptedTransport {
    steps: RefCell<VecDeque<Step>>,
    sent: RefCell<Vec<OutgoingRequest>>,
    body_reads: Rc<Cell<usize>>,
}

impl ScriptedTransport {
    fn with(steps: Vec<Step>) -> Self {
        Self {
            steps: RefCell::new(steps.into()),
            ..Self::default()
        }
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    type Response = ScriptedResponse;

    async fn post(&self, request: OutgoingRequest) -> Result<ScriptedResponse, TransportError> {
        self.sent.borrow_mut().push(request);
        match self.steps.borrow_mut().pop_front() {
            Some(Step::Respond { status, body }) => Ok(ScriptedResponse {
                status,
                body,
                body_reads: self.body_reads.clone(),
            }),
            Some(Step::Unreachable(reason)) => Err(TransportError::Network(reason.to_string())),
            None => Err(TransportError::Network("script exhausted".to_string())),
        }
    }
}

fn client(steps: Vec<Step>) -> ApiClient<ScriptedTransport> {
    ApiClient::with_transport("http://127.0.0.1:9000/signin", ScriptedTransport::with(steps))
}

fn respond(status: u16, body: &'static str) -> Vec<Step> {
    vec![Step::Respond { status, body }]
}

// ---------------------------------------------------------------------------

#[rstest]
#[case(r#"{"error":"expired"}"#)]
#[case("<html>login</html>")]
#[case("")]
fn unauthorized_ignores_the_body(#[case] body: &'static str) {
    capture_logs();
    let api = client(respond(401, body));

    let outcome: Outcome<Value> = block_on(api.perform("/day", &json!({})));

    assert!(matches!(outcome, Err(RequestError::Unauthorized { status: 401 })));
    assert_eq!(api.transport().body_reads.get(), 0);
    assert_eq!(error_records(), 0);
}

#[derive(Debug, Deserialize, PartialEq)]
struct Project {
    id: u32,
    name: String,
}

#[test]
fn no_content_resolves_without_reading_the_body() {
    capture_logs();
    let api = client(respond(204, "not json at all"));

    let outcome: Outcome<Project> = block_on(api.perform("/project/delete", &json!({ "id": 3 })));

    assert_eq!(outcome.unwrap(), Payload::NoContent);
    assert_eq!(api.transport().body_reads.get(), 0);
}

#[test]
fn ok_json_body_is_parsed() {
    let api = client(respond(200, r#"{"a":1}"#));

    let outcome: Outcome<Value> = block_on(api.perform("/day", &json!({ "date": "20240301" })));

    assert_eq!(outcome.unwrap(), Payload::Json(json!({ "a": 1 })));
    assert_eq!(api.transport().body_reads.get(), 1);
}

#[test]
fn ok_body_is_typed_at_the_call_site() {
    let api = client(respond(201, r#"{"id":7,"name":"WID"}"#));

    let outcome: Outcome<Project> = block_on(api.perform("/project/new", &json!({ "name": "WID" })));

    let project = outcome.unwrap().into_option().unwrap();
    assert_eq!(project, Project { id: 7, name: "WID".to_string() });
}

#[rstest]
#[case(500, "")]
#[case(500, "<h1>Internal Server Error</h1>")]
#[case(500, r#"{"error":"boom"}"#)]
#[case(404, r#"{"error":"no such day"}"#)]
#[case(403, "")]
fn non_success_status_is_a_failure(#[case] status: u16, #[case] body: &'static str) {
    capture_logs();
    let api = client(respond(status, body));

    let outcome: Outcome<Value> = block_on(api.perform("/day", &json!({})));

    match outcome {
        Err(RequestError::Failed { status: got }) => assert_eq!(got, status),
        other => panic!("expected Failed({}), got {:?}", status, other),
    }
    assert_eq!(error_records(), 0);
}

#[test]
fn unreachable_network_is_an_exception_logged_once() {
    capture_logs();
    let api = client(vec![Step::Unreachable("connection refused")]);

    let outcome: Outcome<Value> = block_on(api.perform("/day", &json!({})));

    match outcome {
        Err(RequestError::Exception(TransportError::Network(reason))) => {
            assert_eq!(reason, "connection refused")
        }
        other => panic!("expected network exception, got {:?}", other),
    }
    assert_eq!(error_records(), 1);
}

#[test]
fn malformed_success_body_is_an_exception() {
    capture_logs();
    let api = client(respond(200, "<html>maintenance</html>"));

    let outcome: Outcome<Value> = block_on(api.perform("/day", &json!({})));

    assert!(matches!(outcome, Err(RequestError::Exception(TransportError::Json(_)))));
    assert_eq!(error_records(), 1);
}

#[test]
fn empty_success_body_other_than_204_is_an_exception() {
    capture_logs();
    let api = client(respond(200, ""));

    let outcome: Outcome<Value> = block_on(api.perform("/day", &json!({})));

    assert!(matches!(outcome, Err(RequestError::Exception(_))));
    assert_eq!(error_records(), 1);
}

#[test]
fn unserializable_payload_never_reaches_the_network() {
    capture_logs();
    let api = client(respond(200, "{}"));
    let mut payload = HashMap::new();
    payload.insert((1, 2), "tuple keys are not valid JSON object keys");

    let outcome: Outcome<Value> = block_on(api.perform("/day", &payload));

    assert!(matches!(outcome, Err(RequestError::Exception(TransportError::Json(_)))));
    assert!(api.transport().sent.borrow().is_empty());
    assert_eq!(error_records(), 1);
}

#[test]
fn each_call_gets_its_own_outcome() {
    capture_logs();
    let api = client(vec![
        Step::Respond { status: 200, body: r#"{"n":1}"# },
        Step::Respond { status: 401, body: "" },
        Step::Unreachable("offline"),
        Step::Respond { status: 204, body: "" },
    ]);

    let outcomes: Vec<Outcome<Value>> = block_on(async {
        let mut outcomes = Vec::new();
        for _ in 0..4 {
            outcomes.push(api.perform("/day", &json!({})).await);
        }
        outcomes
    });

    assert!(matches!(outcomes[0], Ok(Payload::Json(_))));
    assert!(outcomes[1].as_ref().is_err_and(RequestError::requires_reauth));
    assert!(outcomes[2].as_ref().is_err_and(RequestError::is_retryable));
    assert!(matches!(outcomes[3], Ok(Payload::NoContent)));
    assert_eq!(api.transport().sent.borrow().len(), 4);
    assert_eq!(error_records(), 1);
}

#[test]
fn request_carries_endpoint_and_serialized_payload() {
    let api = client(respond(204, ""));

    let _: Outcome<Value> = block_on(api.perform("/project", &json!({ "name": "WID", "tags": ["a"] })));

    let sent = api.transport().sent.borrow();
    assert_eq!(sent[0].url, "http://127.0.0.1:9000/signin/project");
    assert_eq!(sent[0].mode, FetchMode::Cors);
    assert_eq!(sent[0].credentials, Credentials::Include);
    assert_eq!(sent[0].header("Accept"), Some("application/json"));
    assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
    let body: Value = serde_json::from_str(&sent[0].body).unwrap();
    assert_eq!(body, json!({ "name": "WID", "tags": ["a"] }));
}

#[test]
fn auth_failure_and_server_failure_reject_differently() {
    let api = client(vec![
        Step::Respond { status: 401, body: "" },
        Step::Respond { status: 500, body: "" },
    ]);

    let unauthorized = block_on(api.perform::<_, Value>("/day", &json!({}))).unwrap_err();
    let failed = block_on(api.perform::<_, Value>("/day", &json!({}))).unwrap_err();

    assert_eq!(unauthorized.rejection(), json!({ "kind": "auth", "status": 401 }));
    assert_eq!(failed.rejection(), json!({ "kind": "failure", "status": 500 }));
}
