//! Mock implementations for testing the verification service

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::services::verification::traits::{Clock, CodeGenerator, EmailNotifier};

/// Notifier that records every send instead of delivering anything
pub struct MockNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
    pub should_fail: bool,
}

impl MockNotifier {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            should_fail,
        }
    }

    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, code)| code.clone())
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailNotifier for MockNotifier {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("simulated delivery failure".to_string());
        }
        self.sent
            .lock()
            .unwrap()
            .push((email.to_string(), code.to_string()));
        Ok(format!("mock-msg-{}", self.sent_count()))
    }
}

/// Manually advanced clock for deterministic time-based tests
pub struct MockClock {
    now: Mutex<DateTime<Utc>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()),
        }
    }

    pub fn advance(&self, duration: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += duration;
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Code source that replays a scripted sequence
pub struct ScriptedCodes {
    queue: Mutex<VecDeque<String>>,
}

impl ScriptedCodes {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            queue: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
        }
    }
}

impl CodeGenerator for ScriptedCodes {
    fn generate(&self) -> String {
        self.queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "999999".to_string())
    }
}
