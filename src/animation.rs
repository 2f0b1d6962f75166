use crate::core::{Config, Rotation};
use crate::pipeline::{CharBuffer, Pipeline};

/// One rendered frame
#[derive(Clone, Debug)]
pub struct Frame {
    pub index: u64,
    pub rotation: Rotation,
    pub buffer: CharBuffer,
}

/// Endless spin of the cube as a lazy sequence of frames.
///
/// Every `next` draws at the current angles, then advances them by the
/// configured deltas. Use `take(n)` for a finite run.
pub struct Animation {
    pipeline: Pipeline,
    rotation: Rotation,
    deltas: Rotation,
    index: u64,
}

impl Animation {
    pub fn new(config: Config) -> Self {
        Self::starting_at(config, Rotation::ZERO)
    }

    pub fn starting_at(config: Config, rotation: Rotation) -> Self {
        let deltas = config.deltas;
        Self {
            pipeline: Pipeline::new(config),
            rotation,
            deltas,
            index: 0,
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}

impl Iterator for Animation {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let rotation = self.rotation;
        let buffer = self.pipeline.draw(rotation).clone();
        let frame = Frame {
            index: self.index,
            rotation,
            buffer,
        };
        self.rotation.advance(self.deltas);
        self.index += 1;
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_at_rest() {
        let frame = Animation::new(Config::default()).next().unwrap();
        assert_eq!(frame.index, 0);
        assert_eq!(frame.rotation, Rotation::ZERO);
        assert_eq!(frame.buffer.bounds(), Some((74, 16, 126, 34)));
    }

    #[test]
    fn angles_advance_by_deltas() {
        let frames: Vec<Frame> = Animation::new(Config::default()).take(3).collect();
        assert_eq!(frames.len(), 3);
        let last = frames[2].rotation;
        assert!((last.x - 0.10).abs() < 1e-6);
        assert!((last.y - 0.06).abs() < 1e-6);
        assert!((last.z - 0.04).abs() < 1e-6);
        assert_eq!(frames[2].index, 2);

        let mut anim = Animation::new(Config::default());
        anim.next();
        assert_eq!(anim.rotation(), Config::default().deltas);
    }

    #[test]
    fn never_runs_dry() {
        let mut anim = Animation::new(Config {
            cols: 40,
            rows: 10,
            ..Config::default()
        });
        assert_eq!(anim.by_ref().take(500).count(), 500);
        assert!(anim.next().is_some());
    }

    #[test]
    fn frames_change_as_the_cube_spins() {
        let mut anim = Animation::starting_at(Config::default(), Rotation::new(0.5, 0.4, 0.3));
        let a = anim.next().unwrap();
        let b = anim.nth(10).unwrap();
        assert_ne!(a.buffer, b.buffer);
        assert_eq!(anim.pipeline().last_draw().len(), 6);
    }
}
