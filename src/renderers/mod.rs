pub mod terminal;

use std::time::Instant;

use log::debug;

use crate::animation::Frame;
use crate::pipeline::CharBuffer;
use crate::Metrics;

/// Wherever finished frames go: a terminal, a log, a test buffer
pub trait DisplaySurface {
    /// Wipe whatever was shown before and show `buffer`
    fn present(&mut self, buffer: &CharBuffer) -> std::io::Result<()>;
}

/// The frame loop: pull a frame, present it, then ask `pause` whether to stop.
///
/// `pause` is where the caller sleeps between frames, so it is not called
/// after the last one. Returns how many frames were presented. Runs as long
/// as `frames` does if `pause` never says stop.
pub fn drive<I, S, P>(
    frames: I,
    surface: &mut S,
    metrics: &mut Metrics,
    mut pause: P,
) -> std::io::Result<u64>
where
    I: Iterator<Item = Frame>,
    S: DisplaySurface + ?Sized,
    P: FnMut() -> std::io::Result<bool>,
{
    let mut frames = frames.peekable();
    let mut shown = 0;
    let mut start = Instant::now();
    while let Some(frame) = frames.next() {
        surface.present(&frame.buffer)?;
        shown += 1;

        // Peeking draws the next frame, so it counts toward this one's time
        let last = frames.peek().is_none();
        metrics.update(start.elapsed());
        debug!("frame {} presented in {:?}", frame.index, start.elapsed());

        if last || pause()? {
            break;
        }
        start = Instant::now();
    }
    Ok(shown)
}
