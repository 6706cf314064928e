//! Durable cross-page state shared with the surrounding page shell.
//!
//! The shell writes the session id (and optionally a chosen player sprite)
//! before launching the game; the game writes the end-of-game summary for
//! the separate summary view, or a redirect marker when launched without a
//! session. Stored as a small JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SessionError;
use crate::game::state::EndSummary;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct SessionData {
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    selected_sprite: Option<PathBuf>,
    #[serde(default)]
    redirect: Option<String>,
    #[serde(default)]
    final_score: Option<u32>,
    #[serde(default)]
    collected_family_count: Option<usize>,
    #[serde(default)]
    total_family_count: Option<usize>,
    #[serde(default)]
    end_reason: Option<String>,
}

/// File-backed handoff store.
pub struct SessionStore {
    path: PathBuf,
    data: SessionData,
}

impl SessionStore {
    /// Loads the store from `path`. A missing file is an empty store, not
    /// an error; the pre-game guard decides what that means.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => SessionData::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The opaque session identifier carried from page context, if any.
    pub fn session_id(&self) -> Option<&str> {
        self.data.session_id.as_deref()
    }

    /// The player sprite chosen on the character page, if any.
    pub fn selected_sprite(&self) -> Option<&Path> {
        self.data.selected_sprite.as_deref()
    }

    /// Records where the shell should navigate instead of running the game.
    pub fn record_redirect(&mut self, page: &str) -> Result<(), SessionError> {
        self.data.redirect = Some(page.to_string());
        self.save()
    }

    /// Writes the end-of-game summary for the summary view.
    pub fn record_summary(&mut self, summary: &EndSummary) -> Result<(), SessionError> {
        self.data.final_score = Some(summary.points);
        self.data.collected_family_count = Some(summary.collected_family);
        self.data.total_family_count = Some(summary.total_family);
        self.data.end_reason = Some(summary.reason.to_string());
        self.save()
    }

    fn save(&self) -> Result<(), SessionError> {
        let raw = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), "Saved session state");
        Ok(())
    }
}
