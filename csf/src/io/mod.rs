use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use svg::Document;

use cumulus::geometry::primitives::{Point, Rect};

use crate::EPOCH;
use crate::config::CsfConfig;
use crate::io::cloud_to_svg::cloud_to_svg;
use crate::io::output::CloudOutput;
use crate::io::svg_util::SvgDrawOptions;

pub mod cli;
pub mod cloud_to_svg;
pub mod output;
pub mod svg_util;

pub fn read_config(path: &Path) -> Result<CsfConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

pub fn write_json(output: &CloudOutput, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, output)
        .with_context(|| format!("could not write output file: {}", path.display()))?;
    info!("cloud written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("svg written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

/// Visualizes the cloud of a failed check as a timestamped SVG in `folder`,
/// so the failing layout can be inspected. Returns the written path.
pub fn write_failure_svg(
    rects: &[Rect],
    anchor: Point,
    options: SvgDrawOptions,
    folder: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(folder)
        .with_context(|| format!("could not create failure folder: {}", folder.display()))?;
    let stamp = jiff::Zoned::now().strftime("%Y%m%d_%H%M%S_%f").to_string();
    let path = folder.join(format!("cloud_{stamp}.svg"));
    write_svg(&cloud_to_svg(rects, anchor, options), &path)?;
    Ok(path)
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{:<27}{}", prefix, message))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    info!("epoch: {}", jiff::Zoned::now());
    Ok(())
}
