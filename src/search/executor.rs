use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use super::engine::{MatchEngine, ResultSet};

/// A finished background scan. `seq` orders completions by issue time, not
/// by arrival time.
#[derive(Debug)]
pub struct FilterCompletion {
    seq: u64,
    pub query: String,
    pub results: ResultSet,
}

/// Runs [`MatchEngine::filter`] on worker threads so scans stay off the
/// render path. Publication is last-write-wins by issue order: once a scan's
/// results are published, completions of earlier-issued scans are dropped.
pub struct FilterExecutor {
    engine: Arc<MatchEngine>,
    next_seq: u64,
    in_flight: usize,
    last_published: Option<u64>,
    completion_tx: Sender<FilterCompletion>,
    completion_rx: Receiver<FilterCompletion>,
}

impl FilterExecutor {
    pub fn new(engine: MatchEngine) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<FilterCompletion>();
        Self {
            engine: Arc::new(engine),
            next_seq: 0,
            in_flight: 0,
            last_published: None,
            completion_tx,
            completion_rx,
        }
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Issue a scan for `query` on a worker thread.
    pub fn spawn(&mut self, query: impl Into<String>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight += 1;

        let engine = Arc::clone(&self.engine);
        let completion_tx = self.completion_tx.clone();
        let query = query.into();
        thread::spawn(move || {
            let results = engine.filter(&query);
            let _ = completion_tx.send(FilterCompletion {
                seq,
                query,
                results,
            });
        });
    }

    /// Drain finished scans without blocking and return the newest one, if
    /// it supersedes everything published so far.
    pub fn poll(&mut self) -> Option<FilterCompletion> {
        let mut newest: Option<FilterCompletion> = None;
        loop {
            match self.completion_rx.try_recv() {
                Ok(completion) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    if newest
                        .as_ref()
                        .is_none_or(|kept| completion.seq > kept.seq)
                    {
                        newest = Some(completion);
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        self.publish(newest)
    }

    /// Block until every scan issued so far has completed, then return the
    /// winner. Test and shutdown convenience; interactive callers use
    /// [`FilterExecutor::poll`].
    pub fn wait_idle(&mut self) -> Option<FilterCompletion> {
        let mut newest: Option<FilterCompletion> = None;
        while self.in_flight > 0 {
            let Ok(completion) = self.completion_rx.recv() else {
                break;
            };
            self.in_flight -= 1;
            if newest
                .as_ref()
                .is_none_or(|kept| completion.seq > kept.seq)
            {
                newest = Some(completion);
            }
        }
        self.publish(newest)
    }

    fn publish(&mut self, newest: Option<FilterCompletion>) -> Option<FilterCompletion> {
        let completion = newest?;
        if self
            .last_published
            .is_some_and(|published| completion.seq <= published)
        {
            return None;
        }
        self.last_published = Some(completion.seq);
        Some(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterCompletion, FilterExecutor};
    use crate::search::engine::{MatchEngine, Origin, ResultSet};

    fn engine() -> MatchEngine {
        MatchEngine::new(
            vec!["apple pie".to_string()],
            vec!["apple".to_string(), "application".to_string()],
        )
    }

    #[test]
    fn idle_executor_publishes_nothing() {
        let mut executor = FilterExecutor::new(engine());
        assert!(executor.poll().is_none());
        assert!(executor.wait_idle().is_none());
    }

    #[test]
    fn latest_issued_query_wins() {
        let mut executor = FilterExecutor::new(engine());
        executor.spawn("a");
        executor.spawn("app");
        let completion = executor.wait_idle().expect("a scan should complete");
        assert_eq!(completion.query, "app");
        assert_eq!(completion.results.len(), 3);
        assert_eq!(completion.results.origin_of("apple pie"), Some(Origin::History));
    }

    #[test]
    fn stale_completion_is_never_published() {
        let mut executor = FilterExecutor::new(engine());
        executor.spawn("apple");
        executor.spawn("applic");
        let published = executor.wait_idle().expect("a scan should complete");
        assert_eq!(published.query, "applic");

        // A straggler from before the published scan arrives late.
        executor
            .completion_tx
            .send(FilterCompletion {
                seq: 0,
                query: "apple".to_string(),
                results: ResultSet::default(),
            })
            .expect("send");
        assert!(executor.poll().is_none());
    }

    #[test]
    fn publishing_twice_requires_a_newer_scan() {
        let mut executor = FilterExecutor::new(engine());
        executor.spawn("app");
        assert!(executor.wait_idle().is_some());
        assert!(executor.wait_idle().is_none());

        executor.spawn("apple");
        let completion = executor.wait_idle().expect("newer scan publishes");
        assert_eq!(completion.query, "apple");
    }
}
