//! Shared test doubles for the creel-app integration tests.

use std::sync::Mutex;

use async_trait::async_trait;

use creel_core::draft::LogPayload;
use creel_core::log::FishingLog;
use creel_core::types::LogId;
use creel_gateway::{GatewayError, RecordGateway};

/// In-memory record gateway that remembers every call it receives.
///
/// Calls are recorded as `"fetch:7"`, `"list"`, `"create"`,
/// `"update:7"`, `"delete:7"`. A single failure can be armed per
/// operation name via [`MockGateway::fail_operation`]; it is consumed
/// by the next matching call.
pub struct MockGateway {
    stored: Mutex<Vec<FishingLog>>,
    calls: Mutex<Vec<String>>,
    fail_on: Mutex<Option<(String, GatewayError)>>,
    next_id: Mutex<LogId>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::with_logs(Vec::new())
    }

    pub fn with_logs(logs: Vec<FishingLog>) -> Self {
        Self {
            stored: Mutex::new(logs),
            calls: Mutex::new(Vec::new()),
            fail_on: Mutex::new(None),
            next_id: Mutex::new(100),
        }
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// How many calls started with `prefix` (e.g. `"create"`).
    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    /// Records currently "stored server-side".
    pub fn stored(&self) -> Vec<FishingLog> {
        self.stored.lock().unwrap().clone()
    }

    /// Arm a one-shot failure for the next call of `operation`.
    pub fn fail_operation(&self, operation: &str, error: GatewayError) {
        *self.fail_on.lock().unwrap() = Some((operation.to_string(), error));
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn take_failure(&self, operation: &str) -> Option<GatewayError> {
        let mut armed = self.fail_on.lock().unwrap();
        match &*armed {
            Some((op, _)) if op == operation => armed.take().map(|(_, err)| err),
            _ => None,
        }
    }
}

#[async_trait]
impl RecordGateway for MockGateway {
    async fn fetch_log(&self, id: LogId) -> Result<Option<FishingLog>, GatewayError> {
        self.record(format!("fetch:{id}"));
        if let Some(err) = self.take_failure("fetch") {
            return Err(err);
        }
        Ok(self
            .stored
            .lock()
            .unwrap()
            .iter()
            .find(|log| log.fish_id == id)
            .cloned())
    }

    async fn list_logs(&self) -> Result<Vec<FishingLog>, GatewayError> {
        self.record("list".to_string());
        if let Some(err) = self.take_failure("list") {
            return Err(err);
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn create_log(&self, payload: &LogPayload) -> Result<FishingLog, GatewayError> {
        self.record("create".to_string());
        if let Some(err) = self.take_failure("create") {
            return Err(err);
        }
        let mut next_id = self.next_id.lock().unwrap();
        let created = log_from_payload(*next_id, payload);
        *next_id += 1;
        self.stored.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_log(
        &self,
        id: LogId,
        payload: &LogPayload,
    ) -> Result<FishingLog, GatewayError> {
        self.record(format!("update:{id}"));
        if let Some(err) = self.take_failure("update") {
            return Err(err);
        }
        let mut stored = self.stored.lock().unwrap();
        match stored.iter_mut().find(|log| log.fish_id == id) {
            Some(slot) => {
                *slot = log_from_payload(id, payload);
                Ok(slot.clone())
            }
            None => Err(GatewayError::NotFound {
                entity: "FishingLog",
                id,
            }),
        }
    }

    async fn delete_log(&self, id: LogId) -> Result<(), GatewayError> {
        self.record(format!("delete:{id}"));
        if let Some(err) = self.take_failure("delete") {
            return Err(err);
        }
        let mut stored = self.stored.lock().unwrap();
        let before = stored.len();
        stored.retain(|log| log.fish_id != id);
        if stored.len() == before {
            return Err(GatewayError::NotFound {
                entity: "FishingLog",
                id,
            });
        }
        Ok(())
    }
}

fn log_from_payload(id: LogId, payload: &LogPayload) -> FishingLog {
    FishingLog {
        fish_id: id,
        user_id: payload.user_id,
        species: payload.species.clone(),
        fish_length: payload.fish_length,
        pounds: payload.pounds,
        ounces: payload.ounces,
        bait: payload.bait.clone(),
        fishing_method: payload.fishing_method.clone(),
        filename: None,
    }
}

/// A stored record owned by user 42, id 7.
pub fn carp_log() -> FishingLog {
    FishingLog {
        fish_id: 7,
        user_id: 42,
        species: "Carp".to_string(),
        fish_length: 22.0,
        pounds: Some(5.0),
        ounces: Some(3.0),
        bait: Some("Jigs".to_string()),
        fishing_method: Some("Shore".to_string()),
        filename: Some("carp.jpg".to_string()),
    }
}

/// A server-failure error for arming mock failures.
pub fn server_error() -> GatewayError {
    GatewayError::Api {
        status: 500,
        body: "internal error".to_string(),
    }
}
