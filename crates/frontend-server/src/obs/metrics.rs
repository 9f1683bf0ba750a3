//! Metrics registry for the frontend.
//!
//! Counter and histogram families with dynamic labels backed by `DashMap`.
//! Labels are flattened into sorted key vectors to keep deterministic ordering.
//! Histogram buckets are upper bounds in seconds; observations are accumulated
//! per bucket (non-cumulative) and summed into cumulative form at render time,
//! so a rendered series is always self-consistent.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Content type of the text exposition format rendered by [`FrontendMetrics::render`].
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

/// Latency bucket upper bounds, in seconds.
pub const LATENCY_BUCKETS_SECONDS: [f64; 9] = [0.1, 0.3, 0.5, 0.75, 1.0, 1.5, 2.0, 3.0, 5.0];

type LabelKey = Vec<(String, String)>;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn label_str(key: &LabelKey) -> String {
    key.iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

fn write_header(out: &mut String, name: &str, help: &str, kind: &str) {
    let _ = writeln!(out, "# HELP {} {}", name, help);
    let _ = writeln!(out, "# TYPE {} {}", name, kind);
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Current value for a label set (0 if never touched).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        write_header(out, name, help, "counter");

        let mut rows: Vec<(LabelKey, u64)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        for (key, val) in rows {
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str(&key), val);
        }
    }
}

struct AtomicHistogram {
    /// One slot per bound plus a trailing overflow (`+Inf`) slot.
    buckets: Vec<AtomicU64>,
    sum_nanos: AtomicU64,
}

impl AtomicHistogram {
    fn new(bounds: usize) -> Self {
        Self {
            buckets: (0..=bounds).map(|_| AtomicU64::new(0)).collect(),
            sum_nanos: AtomicU64::new(0),
        }
    }

    fn snapshot(&self, bounds: &[f64]) -> HistogramSnapshot {
        let mut cumulative = 0u64;
        let mut buckets = Vec::with_capacity(bounds.len());
        for (i, &le) in bounds.iter().enumerate() {
            cumulative += self.buckets[i].load(Ordering::Relaxed);
            buckets.push((le, cumulative));
        }
        cumulative += self.buckets[bounds.len()].load(Ordering::Relaxed);

        HistogramSnapshot {
            buckets,
            count: cumulative,
            sum: self.sum_nanos.load(Ordering::Relaxed) as f64 / 1e9,
        }
    }
}

/// Point-in-time view of one histogram series.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSnapshot {
    /// `(upper bound, cumulative count)` pairs, excluding `+Inf`.
    pub buckets: Vec<(f64, u64)>,
    pub count: u64,
    /// Sum of observations in seconds.
    pub sum: f64,
}

pub struct HistogramVec {
    bounds: Vec<f64>,
    map: DashMap<LabelKey, AtomicHistogram>,
}

impl Default for HistogramVec {
    fn default() -> Self {
        Self::new(&LATENCY_BUCKETS_SECONDS)
    }
}

impl HistogramVec {
    /// `bounds` must be ascending; an implicit `+Inf` bucket is always added.
    pub fn new(bounds: &[f64]) -> Self {
        Self {
            bounds: bounds.to_vec(),
            map: DashMap::new(),
        }
    }

    /// Observe a duration into the first bucket whose bound covers it.
    pub fn observe(&self, labels: &[(&str, &str)], duration: Duration) {
        let hist = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicHistogram::new(self.bounds.len()));

        let secs = duration.as_secs_f64();
        let slot = self
            .bounds
            .iter()
            .position(|&le| secs <= le)
            .unwrap_or(self.bounds.len());

        let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        hist.sum_nanos.fetch_add(nanos, Ordering::Relaxed);
        hist.buckets[slot].fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self, labels: &[(&str, &str)]) -> Option<HistogramSnapshot> {
        self.map
            .get(&label_key(labels))
            .map(|h| h.snapshot(&self.bounds))
    }

    /// Render in Prometheus text exposition format (unit: seconds).
    fn render(&self, name: &str, help: &str, out: &mut String) {
        write_header(out, name, help, "histogram");

        let mut rows: Vec<(LabelKey, HistogramSnapshot)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), r.value().snapshot(&self.bounds)))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        for (key, snap) in rows {
            let label_str = label_str(&key);
            let prefix = if label_str.is_empty() {
                String::new()
            } else {
                format!("{},", label_str)
            };

            for (le, count) in &snap.buckets {
                // `{:?}` keeps the trailing `.0` on whole bounds ("1.0").
                let _ = writeln!(out, "{}_bucket{{{}le=\"{:?}\"}} {}", name, prefix, le, count);
            }
            let _ = writeln!(out, "{}_bucket{{{}le=\"+Inf\"}} {}", name, prefix, snap.count);
            let _ = writeln!(out, "{}_sum{{{}}} {}", name, label_str, snap.sum);
            let _ = writeln!(out, "{}_count{{{}}} {}", name, label_str, snap.count);
        }
    }
}

/// The process-wide instruments, owned by `AppState`.
#[derive(Default)]
pub struct FrontendMetrics {
    pub http_requests: CounterVec,
    pub http_request_duration: HistogramVec,
}

impl FrontendMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one completed request.
    pub fn count_request(&self, method: &str, path: &str, status: u16) {
        let status = status.to_string();
        self.http_requests
            .inc(&[("method", method), ("path", path), ("status", &status)]);
    }

    /// Record the latency of one completed request.
    pub fn observe_latency(&self, method: &str, path: &str, elapsed: Duration) {
        self.http_request_duration
            .observe(&[("method", method), ("path", path)], elapsed);
    }

    pub fn requests(&self, method: &str, path: &str, status: u16) -> u64 {
        let status = status.to_string();
        self.http_requests
            .get(&[("method", method), ("path", path), ("status", &status)])
    }

    pub fn latency(&self, method: &str, path: &str) -> Option<HistogramSnapshot> {
        self.http_request_duration
            .snapshot(&[("method", method), ("path", path)])
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.http_requests
            .render(HTTP_REQUESTS_TOTAL, "Total HTTP requests", &mut out);
        self.http_request_duration.render(
            HTTP_REQUEST_DURATION_SECONDS,
            "HTTP request latency",
            &mut out,
        );
        out
    }
}
