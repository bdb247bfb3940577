use crate::application::ports::{ApiTransport, ConnectivityProbe};
use crate::domain::value_objects::HttpMethod;
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::sync::Semaphore;

/// Probe with a fixed, flippable answer.
pub struct StaticProbe {
    online: AtomicBool,
}

impl StaticProbe {
    pub fn online() -> Self {
        Self {
            online: AtomicBool::new(true),
        }
    }

    pub fn offline() -> Self {
        Self {
            online: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl ConnectivityProbe for StaticProbe {
    async fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}

/// Transport that records every call and answers from a canned script.
pub struct StubTransport {
    calls: Mutex<Vec<(String, String, Value)>>,
    response: Value,
    fail_all: AtomicBool,
    fail_endpoints: Mutex<HashSet<String>>,
}

impl StubTransport {
    pub fn succeeding(response: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response,
            fail_all: AtomicBool::new(false),
            fail_endpoints: Mutex::new(HashSet::new()),
        }
    }

    pub fn failing() -> Self {
        let transport = Self::succeeding(Value::Null);
        transport.fail_all.store(true, Ordering::SeqCst);
        transport
    }

    pub fn fail_endpoint(&self, endpoint: &str) {
        self.fail_endpoints
            .lock()
            .unwrap()
            .insert(endpoint.to_string());
    }

    pub fn calls(&self) -> Vec<(String, String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApiTransport for StubTransport {
    async fn send(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: &Value,
    ) -> Result<Value, AppError> {
        self.calls.lock().unwrap().push((
            endpoint.to_string(),
            method.as_str().to_string(),
            body.clone(),
        ));

        let should_fail = self.fail_all.load(Ordering::SeqCst)
            || self.fail_endpoints.lock().unwrap().contains(endpoint);
        if should_fail {
            return Err(AppError::Network(format!(
                "stub transport failure for {endpoint}"
            )));
        }
        Ok(self.response.clone())
    }
}

/// Transport whose calls block until the test releases them; lets tests hold
/// a sync pass open while poking at the service from another task.
pub struct GatedTransport {
    calls: Mutex<Vec<String>>,
    gate: Semaphore,
}

impl GatedTransport {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            gate: Semaphore::new(0),
        }
    }

    pub fn release(&self, count: usize) {
        self.gate.add_permits(count);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ApiTransport for GatedTransport {
    async fn send(
        &self,
        endpoint: &str,
        _method: HttpMethod,
        _body: &Value,
    ) -> Result<Value, AppError> {
        self.calls.lock().unwrap().push(endpoint.to_string());
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;
        permit.forget();
        Ok(Value::Null)
    }
}
