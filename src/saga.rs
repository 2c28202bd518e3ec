//! Compensation stack for workflows that write to more than one independently
//! failing system.
//!
//! Each forward step that succeeds registers the action that undoes it. The
//! remaining steps run inside [`Saga::guard`]: a failure (or panic) unwinds
//! the registered compensations in reverse order before the error is handed
//! back. Compensation failures are logged and never replace
//! that error.

use futures::future::BoxFuture;
use futures::FutureExt;
use std::fmt::Display;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tracing::{debug, error, info};

type Action = Box<dyn FnOnce() -> BoxFuture<'static, Result<(), String>> + Send>;

struct Compensation {
    label: String,
    action: Action,
}

pub struct Saga {
    name: &'static str,
    compensations: Vec<Compensation>,
}

impl Saga {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            compensations: Vec::new(),
        }
    }

    /// Registers the undo action for a step that has just succeeded.
    pub fn on_rollback<F, Fut, E>(&mut self, label: impl Into<String>, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Display,
    {
        let action: Action = Box::new(move || {
            async move { action().await.map_err(|e| e.to_string()) }.boxed()
        });
        self.compensations.push(Compensation {
            label: label.into(),
            action,
        });
    }

    pub fn pending(&self) -> usize {
        self.compensations.len()
    }

    /// Runs the rest of the workflow. On `Err` or panic every registered
    /// compensation runs, newest first; on `Ok` they are discarded.
    pub async fn guard<T, E, Fut>(self, rest: Fut) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        match AssertUnwindSafe(rest).catch_unwind().await {
            Ok(Ok(value)) => {
                self.complete();
                Ok(value)
            }
            Ok(Err(e)) => {
                self.rollback().await;
                Err(e)
            }
            Err(panic) => {
                error!(saga = self.name, "Unexpected panic, compensating");
                self.rollback().await;
                std::panic::resume_unwind(panic)
            }
        }
    }

    pub fn complete(self) {
        debug!(saga = self.name, steps = self.compensations.len(), "Saga completed");
    }

    /// Runs every compensation in reverse registration order and returns how
    /// many of them failed.
    pub async fn rollback(self) -> usize {
        let mut failed = 0;
        for compensation in self.compensations.into_iter().rev() {
            match (compensation.action)().await {
                Ok(()) => info!(saga = self.name, step = %compensation.label, "Compensated"),
                Err(e) => {
                    failed += 1;
                    error!(
                        saga = self.name,
                        step = %compensation.label,
                        "[CRITICAL] Compensation failed: {}",
                        e
                    );
                }
            }
        }
        failed
    }
}
