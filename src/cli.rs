use crate::config::load_config;
use crate::declutter::run_pass;
use crate::render::{RenderOptions, render_svg};
use crate::scene::{parse_scene, placements_json};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "declutter", version, about = "Label declutter pass over planar anchor scenes")]
pub struct Args {
    /// Scene JSON file or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "json")]
    pub output_format: OutputFormat,

    /// Config JSON5 file overriding the pass defaults
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Draw the accepted sector rays in SVG output
    #[arg(long = "rays")]
    pub rays: bool,

    /// Report per-anchor outcomes on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Svg,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let input = read_input(args.input.as_deref())?;
    let scene = parse_scene(&input)?;

    let report = run_pass(
        &scene.labels,
        scene.map_center,
        scene.map_scale_factor,
        &config,
    );

    if args.verbose {
        for outcome in &report.outcomes {
            match &outcome.result {
                Ok(placement) => eprintln!(
                    "{}: placed at bearing {} on attempt {}",
                    outcome.id, placement.bearing, placement.attempt
                ),
                Err(reason) => eprintln!("{}: dropped ({reason})", outcome.id),
            }
        }
    }

    let output = match args.output_format {
        OutputFormat::Json => placements_json(&report.placements)?,
        OutputFormat::Svg => render_svg(
            &scene,
            &report,
            &RenderOptions {
                show_rays: args.rays,
            },
        ),
    };
    write_output(&output, args.output.as_deref())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_parse_cleanly() {
        Args::command().debug_assert();
    }

    #[test]
    fn svg_format_is_selectable() {
        let args = Args::parse_from(["declutter", "-e", "svg", "--rays"]);
        assert!(matches!(args.output_format, OutputFormat::Svg));
        assert!(args.rays);
    }
}
