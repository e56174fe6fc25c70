//! Concert detail loader - fetches one concert or degrades to the
//! fallback record.

use std::sync::Mutex;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::model::ConcertRecord;
use crate::ports::ConcertApi;

/// Lifecycle of the concert detail screen.
///
/// A `load` always restarts at `Loading`; `Ready` holds until the next
/// `load`. There is no separate error state: a failed fetch lands in
/// `Ready` with the fallback record and `from_fallback` set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConcertDetail {
    Loading,
    Ready {
        record: ConcertRecord,
        from_fallback: bool,
    },
}

impl ConcertDetail {
    /// The record to render, if the screen has settled.
    pub fn record(&self) -> Option<&ConcertRecord> {
        match self {
            Self::Loading => None,
            Self::Ready { record, .. } => Some(record),
        }
    }
}

/// Drives the concert detail screen: one fetch per `load`, publishing
/// the lifecycle state through a watch channel the render layer
/// subscribes to.
///
/// Superseded requests never win: each `load` cancels the token of the
/// previous one, and a result is applied only while its own token is
/// still live.
pub struct ConcertDetailLoader<C> {
    api: C,
    state: watch::Sender<ConcertDetail>,
    inflight: Mutex<CancellationToken>,
}

impl<C: ConcertApi> ConcertDetailLoader<C> {
    pub fn new(api: C) -> Self {
        let (state, _) = watch::channel(ConcertDetail::Loading);
        Self {
            api,
            state,
            inflight: Mutex::new(CancellationToken::new()),
        }
    }

    /// Current lifecycle state.
    pub fn current(&self) -> ConcertDetail {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<ConcertDetail> {
        self.state.subscribe()
    }

    /// Loads the concert for `concert_id`.
    ///
    /// Without an identifier the fallback record is published
    /// immediately and no fetch is issued. With one, a fetch runs and
    /// any failure is absorbed into the fallback record; the error never
    /// reaches the caller.
    pub async fn load(&self, concert_id: Option<&str>) {
        let token = self.begin();

        let Some(id) = concert_id else {
            self.finish(&token, ConcertRecord::fallback(), true);
            return;
        };

        match self.api.get_concert(id).await {
            Ok(record) => self.finish(&token, record, false),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("concert fetch failed, using fallback: {}", _e);
                self.finish(&token, ConcertRecord::fallback(), true);
            }
        }
    }

    /// Supersedes any in-flight request and re-enters `Loading`.
    fn begin(&self) -> CancellationToken {
        let mut inflight = self.inflight.lock().unwrap();
        inflight.cancel();
        let token = CancellationToken::new();
        *inflight = token.clone();
        self.state.send_replace(ConcertDetail::Loading);
        token
    }

    /// Publishes a result unless its request has been superseded.
    ///
    /// Checked under the in-flight lock so a concurrent `begin` cannot
    /// slip between the staleness check and the publish.
    fn finish(&self, token: &CancellationToken, record: ConcertRecord, from_fallback: bool) {
        let _inflight = self.inflight.lock().unwrap();
        if token.is_cancelled() {
            return;
        }
        self.state
            .send_replace(ConcertDetail::Ready { record, from_fallback });
    }
}
