//! Render pass counters.

use serde_json::json;

use crate::logging::{LogEvent, LogFields, LogLevel};

/// Counters accumulated by a terminal formatter over its lifetime.
#[derive(Debug, Default, Clone)]
pub struct RenderMetrics {
    writes: u64,
    bytes: u64,
    visible_cells: u64,
    resets: u64,
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_write(&mut self, bytes: usize, visible_cells: usize) {
        self.writes = self.writes.saturating_add(1);
        self.bytes = self.bytes.saturating_add(bytes as u64);
        self.visible_cells = self.visible_cells.saturating_add(visible_cells as u64);
    }

    pub fn record_reset(&mut self) {
        self.resets = self.resets.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            writes: self.writes,
            bytes: self.bytes,
            visible_cells: self.visible_cells,
            resets: self.resets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub writes: u64,
    pub bytes: u64,
    pub visible_cells: u64,
    pub resets: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("writes".to_string(), json!(self.writes));
        map.insert("bytes".to_string(), json!(self.bytes));
        map.insert("visible_cells".to_string(), json!(self.visible_cells));
        map.insert("resets".to_string(), json!(self.resets));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "render_metrics", self.as_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut metrics = RenderMetrics::new();
        metrics.record_write(10, 4);
        metrics.record_write(6, 6);
        metrics.record_reset();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.writes, 2);
        assert_eq!(snapshot.bytes, 16);
        assert_eq!(snapshot.visible_cells, 10);
        assert_eq!(snapshot.resets, 1);
    }

    #[test]
    fn snapshot_converts_to_log_event() {
        let mut metrics = RenderMetrics::new();
        metrics.record_write(3, 3);
        let event = metrics.snapshot().to_log_event("flowterm.metrics");
        assert_eq!(event.message, "render_metrics");
        assert_eq!(event.fields.get("bytes").unwrap(), &serde_json::json!(3));
    }
}
