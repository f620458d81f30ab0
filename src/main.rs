//! Terminal game runner.
//!
//! Owns the event loop: render the current snapshot, wait for input with a
//! timeout bounded by the next gravity deadline, apply actions, tick gravity.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::scoring::drop_interval_ms;
use gridfall::core::{Game, GameSnapshot};
use gridfall::input::{handle_key_event, should_quit};
use gridfall::runtime::GravityTimer;
use gridfall::term::{GameView, TerminalRenderer, Viewport};

/// Poll timeout while gravity is idle (menu, pause, game over).
const IDLE_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(clock_seed());
    let view = GameView::default();
    let mut gravity = GravityTimer::new();

    loop {
        let snap = game.snapshot();
        sync_gravity(&mut gravity, &snap);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snap, Viewport::new(w, h));
        term.draw(&fb)?;

        let timeout = gravity
            .time_until_due(Instant::now())
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if gravity.fire_if_due(Instant::now()) {
            game.descend();
        }
    }
}

/// Keep the gravity timer consistent with the session state: armed with the
/// current level's period while play is active, cancelled otherwise.
fn sync_gravity(timer: &mut GravityTimer, snap: &GameSnapshot) {
    if !snap.gravity_active() {
        timer.cancel();
        return;
    }
    let period = Duration::from_millis(drop_interval_ms(snap.level));
    if !timer.is_armed() || timer.period() != period {
        timer.arm(Instant::now(), period);
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
