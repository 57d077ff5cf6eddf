//! rigmap - map a target rig's bones onto a source rig's bones
//!
//! # Usage
//!
//! ```bash
//! # One bone name per line in each file
//! rigmap source_bones.txt target_bones.txt
//!
//! # Raise the fuzzy acceptance threshold
//! RIGMAP_THRESHOLD=0.8 rigmap source_bones.txt target_bones.txt
//!
//! # Table lookup only, no fuzzy fallback
//! RIGMAP_FALLBACK=0 rigmap source_bones.txt target_bones.txt
//! ```
//!
//! The mapping goes to stdout, logs go to stderr.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use rigmap_core::{MapperConfig, MappingReport, Result, Retargeter, RigmapError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "rigmap <source-bones.txt> <target-bones.txt>";

fn main() {
    init_tracing();

    if let Err(e) = run() {
        error!(error = %e, "Bone mapping failed");
        std::process::exit(if e.is_config_error() { 2 } else { 1 });
    }
}

/// Initialize the tracing subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rigmap=info,rigmap_core=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let [source_path, target_path] = args.as_slice() else {
        return Err(RigmapError::Usage(USAGE.to_string()));
    };

    let config = MapperConfig::from_env()?;
    let source = read_bone_list(Path::new(source_path))?;
    let target = read_bone_list(Path::new(target_path))?;

    info!(
        source_bones = source.len(),
        target_bones = target.len(),
        threshold = config.acceptance_threshold,
        fallback = config.fallback_to_auto,
        "Mapping skeletons"
    );

    let report = Retargeter::new(config)?.map(&source, &target);
    write_report(&mut io::stdout().lock(), &report)?;
    Ok(())
}

/// Read a bone list: one name per line, blank lines ignored.
fn read_bone_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_bone_list(&text))
}

fn parse_bone_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn write_report(out: &mut impl Write, report: &MappingReport) -> Result<()> {
    for m in &report.matches {
        writeln!(out, "{m}")?;
    }
    for target in &report.unmapped {
        writeln!(out, "{target} -> (unmapped)")?;
    }
    writeln!(
        out,
        "# strategy: {} | convention: {} | direct: {} | fuzzy: {} | coverage: {:.0}%",
        report.strategy,
        report.convention,
        report.direct_count(),
        report.fuzzy_count(),
        report.coverage() * 100.0
    )?;
    Ok(())
}
