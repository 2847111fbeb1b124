//! Reachability probing.
//!
//! The pure URL operations never reach the network; this module is the
//! collaborator that does. [`CurlProber`] sends a HEAD request through
//! libcurl, follows redirects up to a bounded hop count, and reports the
//! outcome as a [`ReachabilityInfo`]. Failures become its `error` field and
//! are never returned as `Err`.

mod parse;

use std::str;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use serde::Serialize;

use crate::url_model;

/// Outcome of probing one URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReachabilityInfo {
    /// True when the final response status is 2xx or 3xx.
    pub reachable: bool,
    pub status_code: Option<u32>,
    /// URL after following redirects.
    pub final_url: Option<String>,
    pub content_type: Option<String>,
    pub error: Option<String>,
}

impl ReachabilityInfo {
    pub fn failed(err: impl ToString) -> Self {
        Self {
            error: Some(err.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("invalid URL: {0:?}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Curl(#[from] curl::Error),
}

pub trait Prober {
    /// Probes `url`, giving up after `timeout`. Blocks the calling thread.
    fn probe(&self, url: &str, timeout: Duration) -> ReachabilityInfo;
}

pub const DEFAULT_MAX_REDIRECTS: u32 = 10;

pub fn default_user_agent() -> String {
    format!("linkscrub/{}", env!("CARGO_PKG_VERSION"))
}

/// libcurl-backed prober.
#[derive(Debug, Clone)]
pub struct CurlProber {
    max_redirects: u32,
    user_agent: String,
}

impl Default for CurlProber {
    fn default() -> Self {
        Self {
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: default_user_agent(),
        }
    }
}

/// Raw result of one HEAD exchange.
struct HeadResponse {
    status: u32,
    effective_url: Option<String>,
    headers: Vec<String>,
}

impl CurlProber {
    pub fn new(max_redirects: u32, user_agent: impl Into<String>) -> Self {
        Self {
            max_redirects,
            user_agent: user_agent.into(),
        }
    }

    fn head(&self, url: &str, timeout: Duration) -> Result<HeadResponse, ProbeError> {
        let url = url.trim();
        if !url_model::is_valid(url) {
            return Err(ProbeError::InvalidUrl(url.to_string()));
        }

        let mut headers: Vec<String> = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.nobody(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.max_redirects)?;
        easy.connect_timeout(timeout)?;
        easy.timeout(timeout)?;
        easy.useragent(&self.user_agent)?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.perform()?;
        }

        Ok(HeadResponse {
            status: easy.response_code()?,
            effective_url: easy.effective_url()?.map(String::from),
            headers,
        })
    }
}

impl Prober for CurlProber {
    fn probe(&self, url: &str, timeout: Duration) -> ReachabilityInfo {
        match self.head(url, timeout) {
            Ok(resp) => {
                let info = ReachabilityInfo {
                    reachable: (200..400).contains(&resp.status),
                    status_code: Some(resp.status),
                    final_url: resp.effective_url,
                    content_type: parse::content_type(&resp.headers),
                    error: None,
                };
                tracing::debug!(url, status = resp.status, reachable = info.reachable, "probed");
                info
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "probe failed");
                ReachabilityInfo::failed(e)
            }
        }
    }
}

/// Probes every URL with at most `parallelism` requests in flight.
/// Results are in input order.
pub fn probe_multiple<P, S>(
    prober: &P,
    urls: &[S],
    timeout: Duration,
    parallelism: usize,
) -> Vec<ReachabilityInfo>
where
    P: Prober + Sync + ?Sized,
    S: AsRef<str> + Sync,
{
    let workers = parallelism.max(1).min(urls.len());
    if workers <= 1 {
        return urls
            .iter()
            .map(|u| prober.probe(u.as_ref(), timeout))
            .collect();
    }

    let next = &AtomicUsize::new(0);
    let mut done: Vec<(usize, ReachabilityInfo)> = thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(move |_| {
                s.spawn(move || {
                    let mut local = Vec::new();
                    loop {
                        let i = next.fetch_add(1, Ordering::Relaxed);
                        let Some(url) = urls.get(i) else { break };
                        local.push((i, prober.probe(url.as_ref(), timeout)));
                    }
                    local
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    });
    done.sort_by_key(|(i, _)| *i);
    done.into_iter().map(|(_, info)| info).collect()
}
