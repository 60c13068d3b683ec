use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use clap::Parser;

use facetrack_core::detection::domain::detection_feed::{DetectionFeed, MountError};
use facetrack_core::detection::domain::detector_config::DetectorConfig;
use facetrack_core::detection::infrastructure::channel_feed::{channel_feed, FeedPoll, FeedSender};
use facetrack_core::detection::infrastructure::scripted_feed::ScriptedFeed;
use facetrack_core::overlay::controller::OverlayController;
use facetrack_core::overlay::transform::OverlayTransform;
use facetrack_core::shared::constants::BOX_TIMING_MS;

/// Replays a face-detection scenario against the tracking overlay and
/// prints the interpolated render transform per tick.
#[derive(Parser)]
#[command(name = "facetrack")]
struct Cli {
    /// Scenario JSON file (timestamped detector/rotation events).
    scenario: PathBuf,

    /// Render tick interval in milliseconds (~60 fps by default).
    #[arg(long, default_value = "16.0")]
    tick_ms: f64,

    /// Box interpolation window in milliseconds.
    #[arg(long, default_value_t = BOX_TIMING_MS)]
    timing_ms: f64,

    /// Extra sampling time after the last event (ms).
    #[arg(long, default_value = "200.0")]
    settle_ms: f64,

    /// Window width forwarded to the detector configuration.
    #[arg(long, default_value = "1080.0")]
    window_width: f64,

    /// Window height forwarded to the detector configuration.
    #[arg(long, default_value = "1920.0")]
    window_height: f64,

    /// Replay on the wall clock through a channel instead of a virtual
    /// clock, as a live camera host would deliver callbacks.
    #[arg(long)]
    realtime: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The detector is external; its options are forwarded at mount time
    // and never interpreted on this side.
    let config = DetectorConfig::for_window(cli.window_width, cli.window_height);
    log::info!(
        "detector config: performance={} classification={} window={}x{} auto_scale={}",
        config.performance_mode,
        config.classification_mode,
        config.window_width,
        config.window_height,
        config.auto_scale
    );

    let feed = ScriptedFeed::from_path(&cli.scenario)?;
    log::info!(
        "loaded {} scenario entries from {}",
        feed.len(),
        cli.scenario.display()
    );
    let controller = OverlayController::with_duration(cli.timing_ms);

    if cli.realtime {
        run_realtime(feed, controller, cli.tick_ms, cli.settle_ms)
    } else {
        run_scripted(feed, controller, cli.tick_ms, cli.settle_ms)
    }
}

/// Virtual-clock replay: deterministic, runs as fast as it prints.
fn run_scripted(
    mut feed: ScriptedFeed,
    mut controller: OverlayController,
    tick_ms: f64,
    settle_ms: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut now_ms = 0.0;
    let mut last_event_ms = 0.0;

    loop {
        let next = match feed.next_event() {
            Ok(next) => next,
            Err(e) => {
                log::error!("camera mount error: {e}");
                return Err(e);
            }
        };
        let Some(timed) = next else {
            break;
        };

        while now_ms < timed.at_ms {
            print_transform(now_ms, &controller.transform_at(now_ms));
            now_ms += tick_ms;
        }
        controller.apply(&timed.event, timed.at_ms);
        last_event_ms = timed.at_ms;
    }

    while now_ms <= last_event_ms + settle_ms {
        print_transform(now_ms, &controller.transform_at(now_ms));
        now_ms += tick_ms;
    }
    Ok(())
}

/// Wall-clock replay: a producer thread plays the scenario through a
/// channel while the main loop polls and samples, mimicking a detector
/// that runs asynchronously from the render refresh.
fn run_realtime(
    feed: ScriptedFeed,
    mut controller: OverlayController,
    tick_ms: f64,
    settle_ms: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let (tx, rx) = channel_feed();
    let producer = std::thread::spawn(move || replay_events(feed, tx));

    let start = Instant::now();
    let tick = Duration::from_secs_f64(tick_ms / 1000.0);
    let mut closed_at_ms: Option<f64> = None;

    loop {
        let now_ms = start.elapsed().as_secs_f64() * 1000.0;

        loop {
            match rx.poll() {
                Ok(FeedPoll::Event(timed)) => controller.apply(&timed.event, now_ms),
                Ok(FeedPoll::Empty) => break,
                Ok(FeedPoll::Closed) => {
                    closed_at_ms.get_or_insert(now_ms);
                    break;
                }
                Err(e) => {
                    log::error!("camera mount error: {e}");
                    let _ = producer.join();
                    return Err(Box::new(e));
                }
            }
        }

        print_transform(now_ms, &controller.transform_at(now_ms));

        if closed_at_ms.is_some_and(|closed| now_ms >= closed + settle_ms) {
            break;
        }
        std::thread::sleep(tick);
    }

    let _ = producer.join();
    Ok(())
}

/// Drains the scenario into the channel on the wall clock, sleeping until
/// each event's timestamp comes due.
fn replay_events(mut feed: ScriptedFeed, tx: FeedSender) {
    let start = Instant::now();
    loop {
        match feed.next_event() {
            Ok(Some(timed)) => {
                let due = Duration::from_secs_f64(timed.at_ms.max(0.0) / 1000.0);
                if let Some(wait) = due.checked_sub(start.elapsed()) {
                    std::thread::sleep(wait);
                }
                if !tx.send_event(timed) {
                    return;
                }
            }
            Ok(None) => return,
            Err(e) => {
                tx.report_mount_error(MountError(e.to_string()));
                return;
            }
        }
    }
}

fn print_transform(now_ms: f64, t: &OverlayTransform) {
    println!(
        "t={now_ms:8.1}ms  x={:8.2}  y={:8.2}  w={:8.2}  h={:8.2}  rot={:6.1}",
        t.x, t.y, t.width, t.height, t.rotation
    );
}
