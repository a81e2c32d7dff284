//! Time-limited notices surfaced to the HUD.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::constants::{NOTICE_DURATION_SECS, NOTICE_LOG_CAP};

/// One HUD message with its remaining display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub text: String,
    pub remaining_secs: f32,
}

/// Rolling log of the most recent notices. Old entries fall off the
/// front once the cap is reached; expired entries are dropped each
/// frame.
#[derive(Debug, Clone, Default)]
pub struct NoticeLog {
    notices: VecDeque<Notice>,
}

impl NoticeLog {
    pub fn push(&mut self, text: impl Into<String>) {
        self.notices.push_back(Notice {
            text: text.into(),
            remaining_secs: NOTICE_DURATION_SECS,
        });
        while self.notices.len() > NOTICE_LOG_CAP {
            self.notices.pop_front();
        }
    }

    /// Age every notice by `dt` and drop the expired ones.
    pub fn tick(&mut self, dt: f32) {
        for notice in &mut self.notices {
            notice.remaining_secs -= dt;
        }
        self.notices.retain(|n| n.remaining_secs > 0.0);
    }

    /// Visible notice texts, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.notices.iter().map(|n| n.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }
}
