// tests/runtime_fake_executor.rs

use std::error::Error;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};

use gwatch::config::WatchConfig;
use gwatch::engine::{ChangeEvent, CoreRuntime, Runtime};
use gwatch::errors::{EXIT_COMMAND_FAILED, GwatchError};
use gwatch::types::MAX_DELAY_SECS;
use gwatch::watch::{CHANGE_CHANNEL_CAPACITY, ExcludeSet};
use gwatch_test_utils::builders::WatchConfigBuilder;
use gwatch_test_utils::fake_executor::FakeExecutor;
use gwatch_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

/// Channels and shared state around a runtime under test.
struct Harness {
    change_tx: mpsc::Sender<ChangeEvent>,
    shutdown_tx: mpsc::Sender<()>,
    executed: Arc<Mutex<Vec<String>>>,
    runtime: Option<Runtime<FakeExecutor>>,
}

impl Harness {
    fn new(cfg: &WatchConfig, failing: bool) -> Self {
        let (change_tx, change_rx) = mpsc::channel(CHANGE_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        let executed = Arc::new(Mutex::new(Vec::new()));

        let executor = if failing {
            FakeExecutor::failing(Arc::clone(&executed))
        } else {
            FakeExecutor::new(Arc::clone(&executed))
        };

        let core = CoreRuntime::new(ExcludeSet::from(cfg.excludes()), cfg.execute_at_ready());
        let runtime = Runtime::new(
            core,
            cfg.command(),
            cfg.tick(),
            change_rx,
            shutdown_rx,
            executor,
        );

        Self {
            change_tx,
            shutdown_tx,
            executed,
            runtime: Some(runtime),
        }
    }

    fn spawn(&mut self) -> JoinHandle<gwatch::errors::Result<()>> {
        let runtime = self.runtime.take().expect("runtime already spawned");
        tokio::spawn(runtime.run())
    }

    async fn change(&self, path: &str) {
        self.change_tx
            .send(ChangeEvent::new(path))
            .await
            .expect("runtime dropped the change channel");
    }

    fn executions(&self) -> usize {
        self.executed.lock().unwrap().len()
    }
}

#[tokio::test(start_paused = true)]
async fn burst_of_changes_runs_command_once_on_next_tick() -> TestResult {
    init_tracing();

    let cfg = WatchConfigBuilder::new("make test").delay(2).build();
    let mut h = Harness::new(&cfg, false);

    for i in 0..100 {
        h.change(&format!("/project/src/file_{i}.rs")).await;
    }
    let handle = h.spawn();

    sleep(Duration::from_millis(1900)).await;
    assert_eq!(h.executions(), 0, "no execution before the first tick");

    sleep(Duration::from_millis(200)).await;
    assert_eq!(h.executions(), 1);
    assert_eq!(h.executed.lock().unwrap()[0], "make test");

    // Clean again: later ticks do nothing.
    sleep(Duration::from_secs(5)).await;
    assert_eq!(h.executions(), 1);

    h.shutdown_tx.send(()).await?;
    handle.await??;
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn excluded_changes_never_execute() -> TestResult {
    init_tracing();

    let cfg = WatchConfigBuilder::new("make")
        .exclude("/project/target")
        .exclude("/project/.git")
        .build();
    let mut h = Harness::new(&cfg, false);

    h.change("/project/target/debug/app").await;
    h.change("/project/.git/index").await;
    h.change("/project/targets.txt").await; // literal prefix match
    let handle = h.spawn();

    sleep(Duration::from_secs(7)).await;
    assert_eq!(h.executions(), 0);

    h.shutdown_tx.send(()).await?;
    handle.await??;
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn changes_after_an_execution_trigger_another_one() -> TestResult {
    init_tracing();

    let cfg = WatchConfigBuilder::new("make").build();
    let mut h = Harness::new(&cfg, false);
    let handle = h.spawn();

    h.change("/project/a.rs").await;
    sleep(Duration::from_millis(2100)).await;
    assert_eq!(h.executions(), 1);

    h.change("/project/b.rs").await;
    sleep(Duration::from_secs(2)).await;
    assert_eq!(h.executions(), 2);

    h.shutdown_tx.send(()).await?;
    handle.await??;
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn non_positive_delay_ticks_every_two_seconds() -> TestResult {
    init_tracing();

    for delay in [0, -5] {
        let cfg = WatchConfigBuilder::new("make").delay(delay).build();
        assert_eq!(cfg.tick(), Duration::from_secs(2));

        let mut h = Harness::new(&cfg, false);
        h.change("/project/src/main.rs").await;
        let handle = h.spawn();

        sleep(Duration::from_millis(1900)).await;
        assert_eq!(h.executions(), 0, "delay {delay} ticked too early");

        sleep(Duration::from_millis(200)).await;
        assert_eq!(h.executions(), 1, "delay {delay} did not tick at 2s");

        h.shutdown_tx.send(()).await?;
        handle.await??;
    }
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn positive_delay_is_used_as_is() -> TestResult {
    init_tracing();

    let cfg = WatchConfigBuilder::new("make").delay(5).build();
    let mut h = Harness::new(&cfg, false);
    h.change("/project/src/main.rs").await;
    let handle = h.spawn();

    sleep(Duration::from_millis(4900)).await;
    assert_eq!(h.executions(), 0);

    sleep(Duration::from_millis(200)).await;
    assert_eq!(h.executions(), 1);

    h.shutdown_tx.send(()).await?;
    handle.await??;
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn huge_delay_does_not_overflow_the_ticker() -> TestResult {
    init_tracing();

    let cfg = WatchConfigBuilder::new("make").delay(i64::MAX).build();
    assert_eq!(cfg.tick(), Duration::from_secs(MAX_DELAY_SECS));

    let mut h = Harness::new(&cfg, false);
    h.change("/project/src/main.rs").await;
    let handle = h.spawn();

    sleep(Duration::from_secs(3600)).await;
    assert!(!handle.is_finished(), "runtime stopped early");
    assert_eq!(h.executions(), 0);

    h.shutdown_tx.send(()).await?;
    handle.await??;
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn execute_at_ready_runs_once_before_any_tick() -> TestResult {
    init_tracing();

    let cfg = WatchConfigBuilder::new("make").execute_at_ready(true).build();
    let mut h = Harness::new(&cfg, false);
    let handle = h.spawn();

    sleep(Duration::from_millis(10)).await;
    assert_eq!(h.executions(), 1, "startup execution missing");

    // No change yet: the tick stays quiet.
    sleep(Duration::from_millis(2500)).await;
    assert_eq!(h.executions(), 1);

    h.change("/project/src/main.rs").await;
    sleep(Duration::from_secs(2)).await;
    assert_eq!(h.executions(), 2);

    h.shutdown_tx.send(()).await?;
    handle.await??;
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn failing_execution_at_ready_is_fatal() -> TestResult {
    init_tracing();

    let cfg = WatchConfigBuilder::new("exit 1").execute_at_ready(true).build();
    let mut h = Harness::new(&cfg, true);
    let runtime = h.runtime.take().expect("runtime");

    let err = runtime.run().await.unwrap_err();
    assert!(matches!(err, GwatchError::CommandFailed(_)));
    assert_eq!(err.exit_code(), EXIT_COMMAND_FAILED);
    assert_eq!(h.executions(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn failing_execution_on_tick_stops_the_loop() -> TestResult {
    init_tracing();

    let cfg = WatchConfigBuilder::new("exit 1").build();
    let mut h = Harness::new(&cfg, true);
    h.change("/project/src/main.rs").await;
    let handle = h.spawn();

    let err = handle.await?.unwrap_err();
    assert_eq!(err.exit_code(), EXIT_COMMAND_FAILED);

    // Exactly one attempt: no retry.
    assert_eq!(h.executions(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn shutdown_wins_over_pending_changes() -> TestResult {
    init_tracing();

    let cfg = WatchConfigBuilder::new("make").build();
    let mut h = Harness::new(&cfg, false);
    let handle = h.spawn();

    h.change("/project/src/main.rs").await;
    sleep(Duration::from_millis(500)).await;
    h.shutdown_tx.send(()).await?;

    handle.await??;
    assert_eq!(h.executions(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn closed_change_channel_keeps_runtime_alive() -> TestResult {
    init_tracing();

    let cfg = WatchConfigBuilder::new("make").build();
    let mut h = Harness::new(&cfg, false);
    h.change("/project/src/main.rs").await;
    let handle = h.spawn();

    // Simulate the watcher going away.
    let (dead_tx, _) = mpsc::channel(1);
    drop(std::mem::replace(&mut h.change_tx, dead_tx));

    sleep(Duration::from_millis(2100)).await;
    assert_eq!(h.executions(), 1);
    assert!(!handle.is_finished());

    h.shutdown_tx.send(()).await?;
    handle.await??;
    Ok(())
}
