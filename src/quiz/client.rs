//! HTTP client for the external flashcard service.
//!
//! Fetches run on a background thread and deliver their outcome as a
//! [`FetchReply`] through an mpsc channel the frame loop drains at the top
//! of each tick. The background thread never touches game state.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use tracing::{debug, warn};

use crate::error::QuizError;
use crate::quiz::{CheckpointResponse, FetchOutcome, FetchReply, Flashcard};

/// Client for the quiz service's `/checkpoint` endpoint.
pub struct QuizClient {
    http: reqwest::blocking::Client,
    base_url: String,
    session_id: String,
    tx: Sender<FetchReply>,
}

impl QuizClient {
    /// Creates a client and the inbox the frame loop reads replies from.
    pub fn new(base_url: String, session_id: String) -> (Self, Receiver<FetchReply>) {
        let (tx, rx) = channel();
        (
            Self {
                http: reqwest::blocking::Client::new(),
                base_url,
                session_id,
                tx,
            },
            rx,
        )
    }

    /// Starts a background fetch for the given checkpoint. The reply lands
    /// in the inbox tagged with `seq`; whether it is still wanted is decided
    /// at delivery time, not here, so there is nothing to cancel.
    pub fn request(&self, seq: u64, lesson: u32, index: usize) {
        let http = self.http.clone();
        let url = format!("{}/checkpoint", self.base_url);
        let session_id = self.session_id.clone();
        let tx = self.tx.clone();

        thread::spawn(move || {
            let outcome = match fetch(&http, &url, &session_id, lesson, index) {
                Ok(cards) => {
                    debug!(seq, lesson, index, count = cards.len(), "Fetched flashcards");
                    FetchOutcome::Cards(cards)
                }
                Err(e) => {
                    warn!(seq, lesson, index, error = %e, "Flashcard fetch failed");
                    FetchOutcome::Failed
                }
            };
            // The receiver is gone once the game shuts down; nothing to do.
            let _ = tx.send(FetchReply { seq, outcome });
        });
    }
}

fn fetch(
    http: &reqwest::blocking::Client,
    url: &str,
    session_id: &str,
    lesson: u32,
    index: usize,
) -> Result<Vec<Flashcard>, QuizError> {
    let response = http
        .get(url)
        .query(&[
            ("session_id", session_id),
            ("lesson", &lesson.to_string()),
            ("checkpoint", &index.to_string()),
        ])
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(QuizError::Status(status.as_u16()));
    }

    let body: CheckpointResponse = response.json()?;
    Ok(body.flashcards)
}
