//! Flashcard checkpoint content: wire types and the overlay panel state.

pub mod client;

pub use client::QuizClient;

use serde::{Deserialize, Serialize};

/// One front/back flashcard pair, as returned by the quiz service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

/// Response body of the `/checkpoint` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckpointResponse {
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
}

/// Outcome of a checkpoint fetch, delivered through the tick inbox.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Cards(Vec<Flashcard>),
    Failed,
}

/// A fetch completion, tagged with the request it answers.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchReply {
    pub seq: u64,
    pub outcome: FetchOutcome,
}

/// What the pause overlay is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    /// The fetch is still in flight. There is no timeout; a hung fetch
    /// leaves the overlay loading until dismissal.
    Loading,
    Ready(Vec<Flashcard>),
    /// The service answered with an empty set.
    Empty,
    /// The fetch failed; shown inline, never fatal, never retried.
    Failed,
}

/// The checkpoint pause overlay.
///
/// Each trigger opens the panel under a fresh sequence number; replies are
/// matched against it so a late response for a dismissed or superseded
/// checkpoint is dropped instead of writing into stale UI.
#[derive(Debug, Default)]
pub struct QuizPanel {
    seq: u64,
    open: Option<OpenPanel>,
}

#[derive(Debug)]
struct OpenPanel {
    title: String,
    content: PanelContent,
}

impl QuizPanel {
    /// Opens the overlay for a freshly triggered checkpoint and returns the
    /// sequence number its fetch must answer to.
    pub fn open(&mut self, lesson: u32, index: usize) -> u64 {
        self.seq += 1;
        self.open = Some(OpenPanel {
            title: format!("Lesson {} - Checkpoint {}", lesson, index + 1),
            content: PanelContent::Loading,
        });
        self.seq
    }

    /// Closes the overlay. Any in-flight fetch keeps running; its reply
    /// will no longer match and is discarded on arrival.
    pub fn dismiss(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn title(&self) -> Option<&str> {
        self.open.as_ref().map(|p| p.title.as_str())
    }

    pub fn content(&self) -> Option<&PanelContent> {
        self.open.as_ref().map(|p| &p.content)
    }

    /// Delivers a fetch reply. Stale replies (dismissed overlay or an older
    /// sequence number) are a harmless no-op.
    pub fn deliver(&mut self, reply: FetchReply) {
        if reply.seq != self.seq {
            return;
        }
        if let Some(panel) = self.open.as_mut() {
            panel.content = match reply.outcome {
                FetchOutcome::Cards(cards) if cards.is_empty() => PanelContent::Empty,
                FetchOutcome::Cards(cards) => PanelContent::Ready(cards),
                FetchOutcome::Failed => PanelContent::Failed,
            };
        }
    }
}
