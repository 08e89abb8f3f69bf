use std::path::Path;

use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
    Config,
};

use crate::image::ImageDimensions;

const CONFIG_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE, Default::default()).is_ok() {
        return;
    }
    let stdout = ConsoleAppender::builder().build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info));
    if let Ok(config) = config {
        // a logger may already be installed by the host process
        let _ = log4rs::init_config(config);
    }
}

pub fn log_conversion(
    input_file: &Path,
    output_file: &Path,
    dimensions: &ImageDimensions,
    bytes_written: usize,
) {
    log::info!(
        "Converted '{}' to '{}'",
        input_file.display(),
        output_file.display()
    );
    log::info!(
        "Image dimensions: {} x {} ({} bytes written)",
        dimensions.width,
        dimensions.height,
        bytes_written
    );
}
