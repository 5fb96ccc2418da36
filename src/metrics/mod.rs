//! Runtime and browser counters, snapshotted into the structured log.

use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RuntimeMetrics {
    events: u64,
    renders: u64,
    dirty_zones: u64,
    zone_updates: u64,
    labs_rendered: u64,
    clipboard_copies: u64,
}

impl RuntimeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_event(&mut self) {
        self.events = self.events.saturating_add(1);
    }

    pub fn record_render(&mut self, dirty_count: usize) {
        self.renders = self.renders.saturating_add(1);
        self.dirty_zones = self.dirty_zones.saturating_add(dirty_count as u64);
    }

    pub fn record_zone_updates(&mut self, count: usize) {
        if count > 0 {
            self.zone_updates = self.zone_updates.saturating_add(count as u64);
        }
    }

    pub fn record_lab_render(&mut self) {
        self.labs_rendered = self.labs_rendered.saturating_add(1);
    }

    pub fn record_clipboard_copy(&mut self) {
        self.clipboard_copies = self.clipboard_copies.saturating_add(1);
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            events: self.events,
            renders: self.renders,
            dirty_zones: self.dirty_zones,
            zone_updates: self.zone_updates,
            labs_rendered: self.labs_rendered,
            clipboard_copies: self.clipboard_copies,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub events: u64,
    pub renders: u64,
    pub dirty_zones: u64,
    pub zone_updates: u64,
    pub labs_rendered: u64,
    pub clipboard_copies: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "runtime_metrics".to_string(),
            self.as_fields(),
        )
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        map.insert("events".to_string(), json!(self.events));
        map.insert("renders".to_string(), json!(self.renders));
        map.insert("dirty_zones".to_string(), json!(self.dirty_zones));
        map.insert("zone_updates".to_string(), json!(self.zone_updates));
        map.insert("labs_rendered".to_string(), json!(self.labs_rendered));
        map.insert(
            "clipboard_copies".to_string(),
            json!(self.clipboard_copies),
        );
        map
    }
}
