use crate::domain::events::Event;
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// A unit of logic invoked when a named event is dispatched.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Name used in dispatch reports and logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    async fn handle(&self, event: &Event) -> Result<()>;
}

pub type EventHandlerRef = Arc<dyn EventHandler>;

/// Result of running one handler during a dispatch.
#[derive(Debug)]
pub struct HandlerOutcome {
    pub handler: String,
    pub result: Result<()>,
}

impl HandlerOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-handler outcomes of a single dispatch, in invocation order.
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub event: String,
    pub outcomes: Vec<HandlerOutcome>,
}

impl DispatchReport {
    /// `true` when every handler succeeded (or none was registered).
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(HandlerOutcome::is_success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &HandlerOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn handlers_invoked(&self) -> usize {
        self.outcomes.len()
    }
}

/// Registry of event handlers keyed by event name.
///
/// Handlers are registered through `&mut self` during startup. Once the
/// dispatcher is shared (usually behind an `Arc`) it is read-only, so
/// concurrent dispatches need no locking.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<String, Vec<EventHandlerRef>>,
}

fn same_handler(a: &EventHandlerRef, b: &EventHandlerRef) -> bool {
    // Compare data pointers only; vtable pointers for one type may differ
    // between codegen units.
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `handler` to the handlers of `event_name`.
    ///
    /// Registering the same handler instance twice for one event fails with
    /// `OrderError::DuplicateHandler`, so each handler fires once per dispatch.
    pub fn register(
        &mut self,
        event_name: impl Into<String>,
        handler: EventHandlerRef,
    ) -> Result<()> {
        let event_name = event_name.into();
        let handlers = self.handlers.entry(event_name.clone()).or_default();

        if handlers.iter().any(|h| same_handler(h, &handler)) {
            return Err(OrderError::DuplicateHandler {
                event: event_name,
                handler: handler.name().to_string(),
            });
        }

        tracing::debug!(
            event = %event_name,
            handler = handler.name(),
            "Registered event handler"
        );
        handlers.push(handler);
        Ok(())
    }

    pub fn has(&self, event_name: &str, handler: &EventHandlerRef) -> bool {
        self.handlers
            .get(event_name)
            .is_some_and(|hs| hs.iter().any(|h| same_handler(h, handler)))
    }

    pub fn handler_count(&self, event_name: &str) -> usize {
        self.handlers.get(event_name).map_or(0, Vec::len)
    }

    /// Removes a single registration. Returns whether anything was removed.
    pub fn remove(&mut self, event_name: &str, handler: &EventHandlerRef) -> bool {
        let Some(handlers) = self.handlers.get_mut(event_name) else {
            return false;
        };
        let before = handlers.len();
        handlers.retain(|h| !same_handler(h, handler));
        let removed = handlers.len() != before;
        if handlers.is_empty() {
            self.handlers.remove(event_name);
        }
        removed
    }

    pub fn clear_event(&mut self, event_name: &str) {
        self.handlers.remove(event_name);
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Runs every handler registered for the event, in registration order.
    ///
    /// A failing handler does not stop the ones after it; its error is kept
    /// in the returned report. Nothing is retried or rolled back.
    pub async fn dispatch(&self, event: &Event) -> DispatchReport {
        let mut report = DispatchReport {
            event: event.name().to_string(),
            outcomes: Vec::new(),
        };

        let Some(handlers) = self.handlers.get(event.name()) else {
            tracing::debug!(event = %event.name(), "No handlers registered");
            return report;
        };

        for handler in handlers {
            let result = handler.handle(event).await;
            if let Err(e) = &result {
                tracing::warn!(
                    event = %event.name(),
                    handler = handler.name(),
                    error = %e,
                    "Event handler failed"
                );
            }
            report.outcomes.push(HandlerOutcome {
                handler: handler.name().to_string(),
                result,
            });
        }

        tracing::debug!(
            event = %event.name(),
            handlers = report.handlers_invoked(),
            "Dispatched event"
        );
        report
    }
}
