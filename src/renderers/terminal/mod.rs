// src/renderers/terminal/mod.rs
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
mod surface;
pub use surface::TermSurface;
use log::{error, info};
use std::io::{self, stdout, Stdout};
use std::panic;
use std::time::{Duration, Instant};

use crate::animation::Frame;
use crate::renderers::drive;
use crate::Metrics;

/// Shows frames on the real terminal until they run out or the user quits
pub struct TerminalRenderer {
    surface: TermSurface<Stdout>,
    interval: Duration,
    metrics: Metrics,
    restore: RestoreOnce,
}

impl TerminalRenderer {
    pub fn new(interval: Duration) -> io::Result<Self> {
        // Put the terminal back before the panic message is printed
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = Self::cleanup_terminal();
            eprintln!("\n=== Panic Occurred ===");
            original_hook(panic_info);
            error!("Panic occurred: {:?}", panic_info);
        }));

        let mut stdout = stdout();
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;

        Ok(Self {
            surface: TermSurface::raw(stdout),
            interval,
            metrics: Metrics::new(),
            restore: RestoreOnce::default(),
        })
    }

    fn cleanup_terminal() -> io::Result<()> {
        let mut stdout = stdout();
        disable_raw_mode()?;
        execute!(stdout, Show, LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Present every frame, pausing `interval` between them.
    /// `q`, `Esc` or `Ctrl-C` during a pause stops the loop.
    pub fn run<I>(&mut self, frames: I) -> io::Result<()>
    where
        I: Iterator<Item = Frame>,
    {
        let interval = self.interval;
        let shown = drive(frames, &mut self.surface, &mut self.metrics, || {
            quit_requested(interval)
        })?;
        info!("stopped after {} frames, {}", shown, self.metrics);
        self.restore.run(Self::cleanup_terminal)
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.restore.run(Self::cleanup_terminal);
    }
}

/// Leaves the alternate screen and raw mode once, whether `run` finishes or
/// the renderer is dropped early
#[derive(Debug, Default)]
struct RestoreOnce {
    done: bool,
}

impl RestoreOnce {
    fn run<F>(&mut self, cleanup: F) -> io::Result<()>
    where
        F: FnOnce() -> io::Result<()>,
    {
        if std::mem::replace(&mut self.done, true) {
            return Ok(());
        }
        cleanup()
    }
}

/// Waits out `interval` while watching for a quit key
fn quit_requested(interval: Duration) -> io::Result<bool> {
    let deadline = Instant::now() + interval;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !event::poll(remaining)? {
            return Ok(false);
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(true)
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_is_restored_only_once() {
        let mut restore = RestoreOnce::default();
        let mut calls = 0;
        restore
            .run(|| {
                calls += 1;
                Ok(())
            })
            .unwrap();
        restore
            .run(|| {
                calls += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(calls, 1);
    }

    #[test]
    fn failed_restore_is_not_retried() {
        let mut restore = RestoreOnce::default();
        let err = restore
            .run(|| Err(io::Error::new(io::ErrorKind::Other, "no tty")))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(restore.run(|| panic!("cleanup ran twice")).is_ok());
    }
}
