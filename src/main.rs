use std::fs::OpenOptions;
use std::io;

use ascii_cube::{
    create_clap_command, handle_clap_matches, renderers::terminal::TerminalRenderer, Animation,
    Config,
};
use log::info;
use simplelog::{Config as LogConfig, WriteLogger};

fn main() -> io::Result<()> {
    let options = handle_clap_matches(&create_clap_command().get_matches());

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&options.log_file)?;
    // A second logger can only fail to install if one already exists
    let _ = WriteLogger::init(options.log_level, LogConfig::default(), log_file);

    let config = Config {
        stepping: options.stepping,
        ..Config::default()
    };
    info!(
        "starting: {}x{} viewport, {:?} between frames, {:?} stepping, frame limit {:?}",
        config.cols, config.rows, config.interval, config.stepping, options.frames
    );

    let mut renderer = TerminalRenderer::new(config.interval)?;
    let animation = Animation::new(config);
    match options.frames {
        Some(limit) => renderer.run(animation.take(limit)),
        None => renderer.run(animation),
    }
}
