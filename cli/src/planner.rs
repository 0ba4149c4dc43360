// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use cursus_core::{EnrolledCourse, parse_snapshot};

use crate::config::Config;
use crate::session::DraftSession;

const SESSION_FILE: &str = "draft.json";

/// The CLI's view of the planning data: the enrolled-courses snapshot and
/// the persisted editing session.
#[derive(Debug, Clone)]
pub struct Planner {
    config: Config,
}

impl Planner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Reads the enrolled-courses snapshot fresh from disk.
    pub fn courses(&self) -> Result<Vec<EnrolledCourse>, Box<dyn Error>> {
        let path = &self.config.courses_path;
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read courses snapshot at {}: {e}", path.display()))?;

        parse_snapshot(&content)
            .map_err(|e| format!("Failed to parse courses snapshot at {}: {e}", path.display()).into())
    }

    /// The current editing session, if one is open.
    pub fn load_session(&self) -> Result<Option<DraftSession>, Box<dyn Error>> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read draft session at {}: {e}", path.display()))?;
        let session = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse draft session at {}: {e}", path.display()))?;
        Ok(Some(session))
    }

    /// The current editing session, or an actionable error when none is open.
    pub fn require_session(&self) -> Result<DraftSession, Box<dyn Error>> {
        self.load_session()?
            .ok_or_else(|| "No draft session open; start one with `cursus draft new`".into())
    }

    pub fn save_session(&self, session: &DraftSession) -> Result<(), Box<dyn Error>> {
        fs::create_dir_all(&self.config.state_dir)
            .map_err(|e| format!("Failed to create state directory: {e}"))?;

        let path = self.session_path();
        let content = serde_json::to_string_pretty(session)?;
        fs::write(&path, content)
            .map_err(|e| format!("Failed to write draft session at {}: {e}", path.display()))?;

        tracing::debug!("saved draft session to {}", path.display());
        Ok(())
    }

    /// Drops the session file, if any.
    pub fn clear_session(&self) -> Result<(), Box<dyn Error>> {
        let path = self.session_path();
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| format!("Failed to remove draft session at {}: {e}", path.display()))?;
        }
        Ok(())
    }

    fn session_path(&self) -> PathBuf {
        self.config.state_dir.join(SESSION_FILE)
    }
}
