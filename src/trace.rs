//! Per-call diagnostic trace log.
//!
//! A [`TraceLog`] collects the human-readable lines produced while one
//! search runs (composed URL, request headers, raw body). Each line is also
//! emitted as a `tracing` debug event. [`run_with_trace`] runs a search with
//! a fresh log and prints the collected lines once the call returns.

use crate::client::SearchClient;
use crate::error::Result;
use crate::transport::Transport;
use crate::types::Service;
use std::io::Write;

/// Ordered diagnostic lines for a single call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceLog {
    lines: Vec<String>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn record(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(target: "kakao_search::trace", "{line}");
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write every line to `out`, one per line, then clear the log.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`. Lines are kept on failure.
    pub fn flush_to<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        for line in &self.lines {
            writeln!(out, "INFO: {line}")?;
        }
        out.flush()?;
        self.lines.clear();
        Ok(())
    }
}

/// Run a search and print its trace lines to stdout.
///
/// Returns exactly what [`SearchClient::search`] would return for the same
/// inputs.
///
/// # Errors
///
/// Same as [`SearchClient::search`].
pub async fn run_with_trace<T: Transport>(
    client: &SearchClient<T>,
    service: Service,
    credential: &str,
    keyword: &str,
) -> Result<String> {
    let (result, mut trace) = traced(client, service, credential, keyword).await;
    write_trace(&mut trace, &mut std::io::stdout().lock());
    result
}

/// Run a search and write its trace lines to `out`.
///
/// The lines are written whether or not the search succeeds. A failure to
/// write the trace does not replace the search result, it is only logged.
///
/// # Errors
///
/// Same as [`SearchClient::search`].
pub async fn run_with_trace_to<T: Transport, W: Write>(
    client: &SearchClient<T>,
    service: Service,
    credential: &str,
    keyword: &str,
    out: &mut W,
) -> Result<String> {
    let (result, mut trace) = traced(client, service, credential, keyword).await;
    write_trace(&mut trace, out);
    result
}

async fn traced<T: Transport>(
    client: &SearchClient<T>,
    service: Service,
    credential: &str,
    keyword: &str,
) -> (Result<String>, TraceLog) {
    let mut trace = TraceLog::new();
    let result = client
        .search_traced(service, credential, keyword, &mut trace)
        .await;
    (result, trace)
}

fn write_trace<W: Write>(trace: &mut TraceLog, out: &mut W) {
    if let Err(e) = trace.flush_to(out) {
        tracing::warn!(error = %e, "failed to write trace output");
    }
}
