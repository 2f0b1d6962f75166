use std::{
    fmt::Display,
    path::PathBuf,
    time::Duration,
};

use clap::{value_parser, Arg, ArgAction, Command};
use log::LevelFilter;

pub mod animation;
pub mod core;
pub mod pipeline;
pub mod renderers;

pub use animation::{Animation, Frame};
pub use crate::core::{Config, EdgeStepping, Rotation};
pub use pipeline::{CharBuffer, Pipeline};

/// Per-frame timing, kept over the last 120 frames
pub struct Metrics {
    pub frames: u64,
    pub frame_times: Vec<f32>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            frames: 0,
            frame_times: Vec::with_capacity(120),
        }
    }

    pub fn update(&mut self, frame_delta: Duration) {
        self.frames += 1;
        self.frame_times.push(frame_delta.as_secs_f32() * 1000.0);
        if self.frame_times.len() > 120 {
            self.frame_times.remove(0);
        }
    }

    pub fn average_ms(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32
    }
}

impl Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Frames: {} | Avg: {:.2}ms | Min: {:.2}ms | Max: {:.2}ms",
            self.frames,
            self.average_ms(),
            self.frame_times
                .iter()
                .copied()
                .reduce(f32::min)
                .unwrap_or(0.0),
            self.frame_times
                .iter()
                .copied()
                .reduce(f32::max)
                .unwrap_or(0.0)
        )
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Stop after this many frames, `None` spins until the user quits
    pub frames: Option<usize>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub stepping: EdgeStepping,
}

pub fn create_clap_command() -> Command {
    Command::new("ascii_cube")
        .about("Spinning cube rasterized into ASCII art")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("frames")
                .short('n')
                .long("frames")
                .value_name("COUNT")
                .help("Stop after COUNT frames instead of running until 'q' is pressed")
                .value_parser(value_parser!(usize))
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("FILE")
                .help("Where log output goes, the terminal is busy showing the cube")
                .default_value("ascii_cube.log"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log a line per frame")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("legacy-stepping")
                .long("legacy-stepping")
                .help("Walk triangle edges with truncated integer slopes, like the classic renderer")
                .action(ArgAction::SetTrue),
        )
}

pub fn handle_clap_matches(matches: &clap::ArgMatches) -> Options {
    let frames = matches.get_one::<usize>("frames").copied();
    let log_file = matches
        .get_one::<String>("log-file")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("ascii_cube.log"));
    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let stepping = if matches.get_flag("legacy-stepping") {
        EdgeStepping::Accumulated
    } else {
        EdgeStepping::Interpolated
    };

    Options {
        frames,
        log_file,
        log_level,
        stepping,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Options {
        let matches = create_clap_command()
            .try_get_matches_from(args)
            .unwrap();
        handle_clap_matches(&matches)
    }

    #[test]
    fn no_flags_runs_forever_at_info() {
        let opts = parse(&["ascii_cube"]);
        assert_eq!(opts.frames, None);
        assert_eq!(opts.log_file, PathBuf::from("ascii_cube.log"));
        assert_eq!(opts.log_level, LevelFilter::Info);
        assert_eq!(opts.stepping, EdgeStepping::Interpolated);
    }

    #[test]
    fn flags_are_picked_up() {
        let opts = parse(&[
            "ascii_cube",
            "-n",
            "30",
            "--log-file",
            "/tmp/cube.log",
            "--verbose",
            "--legacy-stepping",
        ]);
        assert_eq!(opts.frames, Some(30));
        assert_eq!(opts.log_file, PathBuf::from("/tmp/cube.log"));
        assert_eq!(opts.log_level, LevelFilter::Debug);
        assert_eq!(opts.stepping, EdgeStepping::Accumulated);
    }

    #[test]
    fn frame_count_must_be_a_number() {
        assert!(create_clap_command()
            .try_get_matches_from(["ascii_cube", "--frames", "lots"])
            .is_err());
    }

    #[test]
    fn frame_count_is_a_platform_sized_count() {
        let max = usize::MAX.to_string();
        assert_eq!(parse(&["ascii_cube", "--frames", &max]).frames, Some(usize::MAX));
        assert!(create_clap_command()
            .try_get_matches_from(["ascii_cube", "--frames", "-3"])
            .is_err());
    }

    #[test]
    fn metrics_track_recent_frames() {
        let mut metrics = Metrics::new();
        assert_eq!(metrics.to_string(), "Frames: 0 | Avg: 0.00ms | Min: 0.00ms | Max: 0.00ms");
        for ms in [2, 4, 6] {
            metrics.update(Duration::from_millis(ms));
        }
        assert_eq!(metrics.frames, 3);
        assert!((metrics.average_ms() - 4.0).abs() < 1e-3);
        for _ in 0..200 {
            metrics.update(Duration::from_millis(1));
        }
        assert_eq!(metrics.frame_times.len(), 120);
        assert_eq!(metrics.frames, 203);
    }
}
