use bmpfx::codec::{load_bmp, save_bmp};
use bmpfx::config::load_config;
use bmpfx::kernels::Transform;
use bmpfx::parallel::{apply_transform, ParallelOptions};
use bmpfx::report::{write_json_file, JobReport};

use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let options = ParallelOptions::new(config.workers);

    if let Some(dir) = &config.output_dir {
        std::fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;
    }

    let total_start = Instant::now();
    let source = load_bmp(&config.input)
        .map_err(|e| format!("Failed to load {}: {e}", config.input.display()))?;

    let mut report = JobReport {
        input: config.input.display().to_string(),
        width: source.width(),
        height: source.height(),
        workers: config.workers,
        ..Default::default()
    };

    let mut transforms = Vec::new();
    if config.grayscale {
        transforms.push(Transform::Grayscale);
    }
    transforms.extend(
        config
            .blur_sizes
            .iter()
            .map(|&size| Transform::BoxBlur { size }),
    );
    if transforms.is_empty() {
        return Err("nothing to do: grayscale disabled and no blur sizes".to_string());
    }

    for transform in transforms {
        let start = Instant::now();
        let mut image = source.clone();
        apply_transform(&mut image, transform, options)
            .map_err(|e| format!("{transform:?} failed: {e}"))?;

        let name = transform.output_name(&config.input);
        let out_path = config.output_path(&name);
        save_bmp(&image, &out_path)
            .map_err(|e| format!("Failed to save {}: {e}", out_path.display()))?;

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        report.push(name, elapsed_ms);
        println!("Saved {} ({elapsed_ms:.3} ms)", out_path.display());
    }

    report.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
    if let Some(report_path) = &config.report_json {
        write_json_file(report_path, &report)?;
        println!("Saved timing report to {}", report_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: bmpfx <config.json>".to_string()
}
