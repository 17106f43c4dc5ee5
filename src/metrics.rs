use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

use crate::errors::AppError;
use crate::stream::StreamSummary;

pub struct Metrics {
    pub lines_total: IntCounter,
    pub bypassed_total: IntCounter,
    pub invalid_json_total: IntCounter,
}

impl Metrics {
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let lines_total = IntCounter::new("phone_mask_lines_total", "Number of input lines processed")?;
        let bypassed_total = IntCounter::new(
            "phone_mask_bypassed_total",
            "Numbers returned unmasked because the visible window covered them",
        )?;
        let invalid_json_total = IntCounter::new(
            "phone_mask_invalid_json_total",
            "JSON-lines input that failed to parse",
        )?;
        registry.register(Box::new(lines_total.clone()))?;
        registry.register(Box::new(bypassed_total.clone()))?;
        registry.register(Box::new(invalid_json_total.clone()))?;
        Ok(Self {
            lines_total,
            bypassed_total,
            invalid_json_total,
        })
    }

    pub fn record(&self, summary: &StreamSummary) {
        self.lines_total.inc_by(summary.lines);
        self.bypassed_total.inc_by(summary.bypassed);
        self.invalid_json_total.inc_by(summary.invalid_json);
    }
}

/// Prometheus text exposition of everything in `registry`.
pub fn render(registry: &Registry) -> Result<String, AppError> {
    let mut buf = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buf)?;
    String::from_utf8(buf).map_err(|e| AppError::Other(e.to_string()))
}
