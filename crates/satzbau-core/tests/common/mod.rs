#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::oneshot;

use satzbau_core::{ApiError, ExerciseApi, SentenceExercise};

pub const KAFKA: &str = "Als Gregor Samsa eines Morgens aus unruhigen Träumen erwachte, fand er sich in seinem Bett zu einem ungeheuren Ungeziefer verwandelt.";

/// Words of [`KAFKA`] without punctuation, in reading order.
pub fn answer_key() -> Vec<String> {
    KAFKA
        .replace([',', '.'], "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

pub fn words(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|w| w.to_string()).collect()
}

#[derive(Debug, Clone, Copy)]
pub enum BackendMode {
    Healthy,
    Failing,
    Malformed,
    /// Answers only after several seconds.
    Stalled,
}

#[derive(Debug, Deserialize)]
struct CheckBody {
    #[serde(default)]
    words: Vec<String>,
}

async fn scrambled_sentence() -> Json<Value> {
    let mut scrambled = answer_key();
    scrambled.reverse();
    Json(json!({ "sentence": KAFKA, "words": scrambled }))
}

async fn check_sentence(Json(body): Json<CheckBody>) -> Json<Value> {
    Json(json!({ "correct": body.words == answer_key() }))
}

async fn internal_error() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn not_json() -> &'static str {
    "<html>maintenance</html>"
}

async fn stalled_sentence() -> Json<Value> {
    tokio::time::sleep(std::time::Duration::from_secs(5)).await;
    scrambled_sentence().await
}

/// Starts a stand-in for the sentence backend on an ephemeral port and
/// returns its base url.
pub async fn spawn_backend(mode: BackendMode) -> String {
    let app = match mode {
        BackendMode::Healthy => Router::new()
            .route("/api/sentence", get(scrambled_sentence))
            .route("/api/check", post(check_sentence)),
        BackendMode::Failing => Router::new()
            .route("/api/sentence", get(internal_error))
            .route("/api/check", post(internal_error)),
        BackendMode::Malformed => Router::new()
            .route("/api/sentence", get(not_json))
            .route("/api/check", post(not_json)),
        BackendMode::Stalled => Router::new().route("/api/sentence", get(stalled_sentence)),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}")
}

/// A base url nothing listens on.
pub async fn unreachable_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}

pub fn unavailable() -> ApiError {
    ApiError::HttpStatus {
        status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
    }
}

type SentenceGate = oneshot::Receiver<Result<SentenceExercise, ApiError>>;
type CheckGate = oneshot::Receiver<Result<bool, ApiError>>;

/// Fake backend whose responses are released by the test, one gate per call,
/// so the order in which requests settle is under test control.
#[derive(Default)]
pub struct ScriptedApi {
    sentences: RefCell<VecDeque<SentenceGate>>,
    checks: RefCell<VecDeque<CheckGate>>,
    submitted: RefCell<Vec<Vec<String>>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate_sentence(&self) -> oneshot::Sender<Result<SentenceExercise, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.sentences.borrow_mut().push_back(rx);
        tx
    }

    pub fn gate_check(&self) -> oneshot::Sender<Result<bool, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.checks.borrow_mut().push_back(rx);
        tx
    }

    pub fn respond_sentence(&self, result: Result<SentenceExercise, ApiError>) {
        let _ = self.gate_sentence().send(result);
    }

    pub fn respond_check(&self, result: Result<bool, ApiError>) {
        let _ = self.gate_check().send(result);
    }

    pub fn submitted(&self) -> Vec<Vec<String>> {
        self.submitted.borrow().clone()
    }
}

impl ExerciseApi for ScriptedApi {
    async fn fetch_sentence(&self) -> Result<SentenceExercise, ApiError> {
        let gate = self.sentences.borrow_mut().pop_front();
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(unavailable())),
            None => Err(unavailable()),
        }
    }

    async fn check_sentence(&self, words: &[String]) -> Result<bool, ApiError> {
        self.submitted.borrow_mut().push(words.to_vec());
        let gate = self.checks.borrow_mut().pop_front();
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(unavailable())),
            None => Err(unavailable()),
        }
    }
}
