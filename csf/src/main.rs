use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use csf::config::CsfConfig;
use csf::io;
use csf::io::cli::Cli;
use csf::io::cloud_to_svg::cloud_to_svg;
use csf::io::output::CloudOutput;
use csf::samplers::SizeSampler;
use csf::stats::CloudStats;
use cumulus::layout::CloudLayouter;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CsfConfig::default()
        }
        Some(path) => io::read_config(path)?,
    };

    info!("Successfully parsed CsfConfig: {config:?}");

    let input_stem = args
        .config_file
        .as_deref()
        .and_then(Path::file_stem)
        .and_then(|stem| stem.to_str())
        .unwrap_or("default");

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder)
            .with_context(|| format!("could not create output folder: {:?}", args.output_folder))?;
    }

    let mut rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let sampler = SizeSampler::from_config(config.size_sampler)?;
    let mut layouter = CloudLayouter::new(config.anchor, config.layout_config);

    for i in 0..config.n_rects {
        let size = sampler.sample(&mut rng);
        let rect = layouter
            .place_next(size)
            .with_context(|| format!("placement {}/{} failed", i + 1, config.n_rects))?;
        info!(
            "[CSF] placed rectangle {}/{} of size {} at ({}, {})",
            i + 1,
            config.n_rects,
            size,
            rect.center().x(),
            rect.center().y()
        );
    }

    let stats = CloudStats::measure(&layouter).context("no rectangles were placed")?;
    info!(
        "[CSF] cloud contains {} rectangles with a density of {:.3}% ({} spiral points probed)",
        stats.n_placed,
        stats.density * 100.0,
        stats.n_probes.separate_with_commas()
    );

    {
        let output = CloudOutput {
            config,
            rectangles: layouter.placed().to_vec(),
            stats,
        };
        let json_path = args.output_folder.join(format!("cloud_{input_stem}.json"));
        io::write_json(&output, &json_path)?;
    }

    {
        let svg = cloud_to_svg(layouter.placed(), config.anchor, config.svg_draw_options);
        let svg_path = args.output_folder.join(format!("cloud_{input_stem}.svg"));
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(())
}
