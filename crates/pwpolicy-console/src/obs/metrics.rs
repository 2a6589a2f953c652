//! Counter registry for the console.
//!
//! Labels are flattened into sorted key vectors so rendering order does not
//! depend on call-site argument order.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for one label set (0 if never touched).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        let mut lines: Vec<String> = self
            .map
            .iter()
            .map(|r| {
                let labels = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{k}=\"{}\"", escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{name}{{{labels}}} {}", r.value().load(Ordering::Relaxed))
            })
            .collect();
        lines.sort();
        for l in lines {
            let _ = writeln!(out, "{l}");
        }
    }
}

#[derive(Default)]
pub struct ConsoleMetrics {
    /// `op` = parse | serialize
    pub codec_calls: CounterVec,
    /// Segments dropped by `parse` because the catalog lacks their kind.
    pub unknown_segments: CounterVec,
    /// `realm`, `outcome` = ok | rejected
    pub policy_updates: CounterVec,
    /// `code` = stable client code
    pub api_errors: CounterVec,
}

impl ConsoleMetrics {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.codec_calls.render("pwpolicy_codec_calls_total", &mut out);
        self.unknown_segments.render("pwpolicy_unknown_segments_total", &mut out);
        self.policy_updates.render("pwpolicy_policy_updates_total", &mut out);
        self.api_errors.render("pwpolicy_api_errors_total", &mut out);
        out
    }
}
