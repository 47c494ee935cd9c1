//! Render/loop driver: frame gating, the application context and the async
//! loop tying clock, input and game together.

pub mod clock;
pub mod context;
pub mod frame;
pub mod score;
pub mod shutdown;

pub use clock::{FrameClock, IntervalClock, SimulatedClock};
pub use context::GameContext;
pub use frame::{FrameDriver, FrameOutcome};
pub use score::{ScoreBoard, ScoreSink};
pub use shutdown::CtrlCListener;

use anyhow::Result;
use serde::Serialize;
use tokio::sync::watch;

use crate::input::{InputSource, KeyAction};
use crate::render::DisplaySurface;

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// The shutdown signal fired or its sender went away
    Shutdown,
    /// The player pressed a quit key
    Quit,
    /// The frame clock has no more frames
    ClockEnded,
    /// Stop-on-game-over was requested and the game ended
    GameOver,
}

/// Counters for one run of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub ticks: u64,
    pub games_over: u32,
    pub stop_reason: StopReason,
}

/// Loop behaviour switches
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Return as soon as a game ends instead of waiting for a restart key
    pub stop_on_game_over: bool,
}

/// Drive the game until shutdown, a quit key, or the end of the clock.
///
/// Paints once before the first frame. Shutdown is checked first, then
/// input, then frames, so keys that arrive together with a frame are applied
/// before that frame's tick.
pub async fn run<S, K, C, I>(
    ctx: &mut GameContext<S, K>,
    clock: &mut C,
    input: &mut I,
    shutdown: &mut watch::Receiver<bool>,
    options: RunOptions,
) -> Result<RunSummary>
where
    S: DisplaySurface,
    K: ScoreSink,
    C: FrameClock,
    I: InputSource,
{
    let mut driver = FrameDriver::new();
    let mut frames = 0u64;
    let mut ticks = 0u64;
    let mut games_over = 0u32;
    let mut input_open = true;
    let mut shutdown_open = true;

    ctx.repaint()?;

    let stop_reason = loop {
        if *shutdown.borrow() {
            break StopReason::Shutdown;
        }

        tokio::select! {
            biased;

            changed = shutdown.changed(), if shutdown_open => {
                // A dropped sender can no longer cancel; keep running.
                if changed.is_err() {
                    shutdown_open = false;
                }
            }

            key = input.next_key(), if input_open => match key {
                Some(KeyAction::Quit) => break StopReason::Quit,
                Some(action) => {
                    // A fresh game starts its own step period and is shown at once.
                    if ctx.handle_key(action) {
                        driver.reset();
                        ctx.repaint()?;
                    }
                }
                None => input_open = false,
            },

            frame = clock.next_frame() => {
                let Some(timestamp) = frame else {
                    break StopReason::ClockEnded;
                };
                frames += 1;

                if let FrameOutcome::Ticked(outcome) = driver.on_frame(timestamp, ctx)? {
                    ticks += 1;
                    if outcome.ended_game() {
                        games_over += 1;
                        if options.stop_on_game_over {
                            break StopReason::GameOver;
                        }
                    }
                }
            }
        }
    };

    tracing::debug!(frames, ticks, games_over, ?stop_reason, "loop stopped");
    Ok(RunSummary {
        frames,
        ticks,
        games_over,
        stop_reason,
    })
}
