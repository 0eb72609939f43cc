//! Observable events
//!
//! Every log line the service emits names one of these events.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    BootStart,
    ConfigLoaded,
    StoreSeeded,
    Serving,
    ShutdownStart,
    ShutdownComplete,

    // Requests
    RequestComplete,
    /// Query string could not be parsed
    RequestRejected,

    // Store writes
    FoodCreated,
    FoodUpdated,
    FoodDeleted,
    /// `(name, venue)` collision on create or update
    WriteConflict,
    /// Store failed in a way the caller cannot recover from
    StoreFault,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "FOODS_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::Serving => "FOODS_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::RequestComplete => "REQUEST_COMPLETE",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::FoodCreated => "FOOD_CREATED",
            Event::FoodUpdated => "FOOD_UPDATED",
            Event::FoodDeleted => "FOOD_DELETED",
            Event::WriteConflict => "WRITE_CONFLICT",
            Event::StoreFault => "STORE_FAULT",
        }
    }

    /// Severity an event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RequestComplete => Severity::Trace,
            Event::WriteConflict | Event::RequestRejected => Severity::Warn,
            Event::StoreFault => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
