//! Polls the health endpoints on a fixed cadence.
//!
//! The [`Poller`] owns the [`StatusBoard`]. Every tick of its interval starts
//! a new cycle in its own task:
//!
//! 1. The cancellation token of the previous cycle is cancelled. Its
//!    in-flight checks resolve as cancelled and its report is discarded.
//! 2. The three checks run concurrently, each one bounded by the timeout.
//! 3. When all of them resolve, the cycle sends its report to the poller,
//!    which applies it to the board and renders it.
//!
//! The next cycle starts one poll interval after the start of the current
//! one, no matter how long the current one takes.
use std::sync::Arc;
use std::time::Duration;

use service_health_primitives::endpoint::EndpointId;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use super::board::StatusBoard;
use super::checks::{Checker, Error, HealthCheckResult};
use super::config::Configuration;
use super::printer::Printer;
use super::render::{render, Format};

/// Reports waiting to be applied. A cycle only sends one report.
const CYCLE_REPORT_BUFFER: usize = 4;

/// The results of one cycle.
#[derive(Debug)]
struct CycleReport {
    cycle: u64,
    results: Vec<HealthCheckResult>,
}

/// Runs the checks of every endpoint concurrently.
///
/// Checks still running when `token` is cancelled resolve as
/// [`Error::Cancelled`].
async fn run_cycle(checker: Arc<dyn Checker>, timeout: Duration, token: CancellationToken) -> Vec<HealthCheckResult> {
    let mut checks = JoinSet::new();

    for endpoint_id in EndpointId::ALL {
        let check = checker.check(endpoint_id);
        let token = token.clone();

        checks.spawn(async move {
            let started = Instant::now();

            let outcome = tokio::select! {
                () = token.cancelled() => Err(Error::Cancelled),
                outcome = tokio::time::timeout(timeout, check) => outcome.unwrap_or(Err(Error::Timeout { timeout })),
            };

            HealthCheckResult::new(endpoint_id, outcome, started.elapsed())
        });
    }

    let mut results = Vec::with_capacity(EndpointId::ALL.len());

    while let Some(joined) = checks.join_next().await {
        match joined {
            Ok(result) => results.push(result),
            Err(err) => warn!("a check task failed: {err}"),
        }
    }

    results.sort_by_key(|result| result.endpoint_id);

    results
}

pub struct Poller<P: Printer> {
    checker: Arc<dyn Checker>,
    base_url: Url,
    poll_interval: Duration,
    timeout: Duration,
    format: Format,
    printer: P,
    board: StatusBoard,
    board_tx: watch::Sender<StatusBoard>,
    cycle: u64,
    current: Option<CancellationToken>,
}

impl<P: Printer + 'static> Poller<P> {
    #[must_use]
    pub fn new(config: &Configuration, checker: Arc<dyn Checker>, printer: P, format: Format) -> Self {
        let board = StatusBoard::new();
        let (board_tx, _) = watch::channel(board.clone());

        Self {
            checker,
            base_url: config.base_url.clone(),
            poll_interval: config.poll_interval,
            timeout: config.timeout,
            format,
            printer,
            board,
            board_tx,
            cycle: 0,
            current: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &StatusBoard {
        &self.board
    }

    #[must_use]
    pub fn printer(&self) -> &P {
        &self.printer
    }

    /// Receives a copy of the board every time it's rendered.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StatusBoard> {
        self.board_tx.subscribe()
    }

    /// Polls until `shutdown` is cancelled. The first cycle starts
    /// immediately.
    pub async fn run(&mut self, shutdown: CancellationToken) {
        let (tx, mut rx) = mpsc::channel::<CycleReport>(CYCLE_REPORT_BUFFER);

        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.publish();

        loop {
            tokio::select! {
                biased;

                () = shutdown.cancelled() => {
                    if let Some(current) = self.current.take() {
                        current.cancel();
                    }
                    debug!("dashboard polling stopped");
                    break;
                }
                Some(report) = rx.recv() => self.apply(report),
                _ = ticker.tick() => self.start_cycle(&tx, &shutdown),
            }
        }
    }

    /// Runs a single cycle and renders it.
    pub async fn run_once(&mut self) -> &StatusBoard {
        self.cycle += 1;

        let results = run_cycle(self.checker.clone(), self.timeout, CancellationToken::new()).await;

        self.apply(CycleReport {
            cycle: self.cycle,
            results,
        });

        &self.board
    }

    fn start_cycle(&mut self, tx: &mpsc::Sender<CycleReport>, shutdown: &CancellationToken) {
        if let Some(previous) = self.current.take() {
            if !previous.is_cancelled() {
                debug!(cycle = self.cycle, "cancelling the previous cycle");
            }
            previous.cancel();
        }

        self.cycle += 1;

        let cycle = self.cycle;
        let token = shutdown.child_token();

        let checker = self.checker.clone();
        let timeout = self.timeout;
        let tx = tx.clone();
        let cycle_token = token.clone();

        debug!(cycle, "starting cycle");

        tokio::spawn(async move {
            let results = run_cycle(checker, timeout, cycle_token.clone()).await;

            if cycle_token.is_cancelled() {
                debug!(cycle, "discarding the results of a cancelled cycle");
                return;
            }

            if tx.send(CycleReport { cycle, results }).await.is_err() {
                debug!(cycle, "the poller stopped before the cycle finished");
            }
        });

        self.current = Some(token);
    }

    fn apply(&mut self, report: CycleReport) {
        let is_current = report.cycle == self.cycle && self.current.as_ref().map_or(true, |token| !token.is_cancelled());

        if !is_current {
            debug!(cycle = report.cycle, current = self.cycle, "discarding a stale report");
            return;
        }

        for result in report.results {
            if result.ok {
                debug!(endpoint = %result.endpoint_id, latency = ?result.latency, "{}", result.message);
            } else {
                warn!(endpoint = %result.endpoint_id, latency = ?result.latency, "{}", result.message);
            }

            self.board.apply(result);
        }

        self.publish();
    }

    fn publish(&self) {
        self.board_tx.send_replace(self.board.clone());

        let output = render(&self.board, &self.base_url, self.format);

        match self.format {
            Format::Text => {
                self.printer.clear();
                self.printer.print(&output);
            }
            Format::Json => self.printer.println(&output),
        }
    }
}
