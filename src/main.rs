//! Terminal runner (default binary).
//!
//! Fixed-timestep loop: poll keys until the next tick, feed commands to the
//! game, advance the drop clock, render. Set `RUST_LOG` and redirect stderr to
//! see engine logs while the terminal is in raw mode.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use stackfall::config::AppConfig;
use stackfall::core::{Game, GameEvent, GameSnapshot};
use stackfall::input::{map_key, should_quit, SoftDropLatch};
use stackfall::term::{GameView, TerminalRenderer};

fn main() -> Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    let rules = config.load_rules()?;
    log::info!("seed {} tick {}ms", config.seed, config.tick_ms);

    let mut game = Game::with_rules(config.seed, rules);
    log::debug!("rules: {:?}", game.rules());
    game.on_event(|event| match event {
        GameEvent::Settled {
            rows_cleared,
            points,
        } if *rows_cleared > 0 => log::debug!("cleared {} rows for {} points", rows_cleared, points),
        GameEvent::GameOver { status } => log::info!("game over: {:?}", status),
        _ => {}
    });

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, config.tick_ms);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game, tick_ms: u32) -> Result<()> {
    let view = GameView::default();
    let mut latch = SoftDropLatch::new();
    let mut snapshot = GameSnapshot::default();

    let tick_duration = Duration::from_millis(tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        game.snapshot_into(&mut snapshot);
        term.draw(&view.render(&snapshot))?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = map_key(key) {
                        latch.observe(command);
                        game.apply_command(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let Some(command) = latch.update(tick_ms) {
                game.apply_command(command);
            }
            game.tick(tick_ms);
        }
    }
}
