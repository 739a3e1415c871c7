//! Layout connectivity checker CLI
//!
//! Usage:
//!   nettrace <layout.json> <connectivity.txt> [options]
//!
//! Options:
//!   -m <file>   Layer map (layer/datatype:name lines)
//!   -t <name>   Top cell name
//!   -p <file>   Labels remap (label layer : conductor layer)
//!   -l <file>   Alternate label-source layout
//!   -r <file>   Remap for -l labels (required with -l)
//!   -n <file>   Layer map for the -l file
//!   -s <name>   Top cell in the -l file
//!   -o <file>   Write final net geometry as JSON
//!   -u          Keep raw label names (no _<integer> suffix stripping)
//!
//! Exit status is 0 when the analysis ran, even if shorts or opens were
//! found; non-zero on I/O or configuration-file failures.

use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use nettrace::config::{connectivity, layermap, remap};
use nettrace::geometry::scale::descale_point;
use nettrace::{
    check_connectivity, load_layout, Contour, Label, LayerId, NetRegistry, TraceResult,
    DEFAULT_SCALE_FACTOR,
};

struct Args {
    layout_path: PathBuf,
    connectivity_path: PathBuf,
    layermap_path: Option<PathBuf>,
    topcell: Option<String>,
    labels_remap_path: Option<PathBuf>,
    lfile_path: Option<PathBuf>,
    lfile_remap_path: Option<PathBuf>,
    lfile_layermap_path: Option<PathBuf>,
    lfile_topcell: Option<String>,
    output_path: Option<PathBuf>,
    raw_label_names: bool,
}

fn usage(program: &str) {
    eprintln!("Usage: {program} <layout.json> <connectivity.txt> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -m <file>   Layer map (layer/datatype:name lines)");
    eprintln!("  -t <name>   Top cell name");
    eprintln!("  -p <file>   Labels remap (label layer : conductor layer)");
    eprintln!("  -l <file>   Alternate label-source layout");
    eprintln!("  -r <file>   Remap for -l labels (required with -l)");
    eprintln!("  -n <file>   Layer map for the -l file");
    eprintln!("  -s <name>   Top cell in the -l file");
    eprintln!("  -o <file>   Write final net geometry as JSON");
    eprintln!("  -u          Keep raw label names (no _<integer> suffix stripping)");
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args {
        layout_path: PathBuf::from(&args[1]),
        connectivity_path: PathBuf::from(&args[2]),
        layermap_path: None,
        topcell: None,
        labels_remap_path: None,
        lfile_path: None,
        lfile_remap_path: None,
        lfile_layermap_path: None,
        lfile_topcell: None,
        output_path: None,
        raw_label_names: false,
    };

    let mut i = 3;
    while i < args.len() {
        let flag = args[i].as_str();
        if flag == "-u" {
            parsed.raw_label_names = true;
            i += 1;
            continue;
        }
        let Some(value) = args.get(i + 1) else {
            bail!("option {flag} is missing its argument");
        };
        match flag {
            "-m" => parsed.layermap_path = Some(PathBuf::from(value)),
            "-t" => parsed.topcell = Some(value.clone()),
            "-p" => parsed.labels_remap_path = Some(PathBuf::from(value)),
            "-l" => parsed.lfile_path = Some(PathBuf::from(value)),
            "-r" => parsed.lfile_remap_path = Some(PathBuf::from(value)),
            "-n" => parsed.lfile_layermap_path = Some(PathBuf::from(value)),
            "-s" => parsed.lfile_topcell = Some(value.clone()),
            "-o" => parsed.output_path = Some(PathBuf::from(value)),
            _ => bail!("unknown option {flag}"),
        }
        i += 2;
    }
    Ok(parsed)
}

fn run(args: &Args) -> Result<()> {
    let layer_map = match &args.layermap_path {
        Some(path) => layermap::read_layermap(path)?,
        None => IndexMap::new(),
    };

    let entries = connectivity::read_connectivity(&args.connectivity_path)?;
    let connections = connectivity::resolve_connectivity(&entries, &layer_map)?;

    let label_remap = match &args.labels_remap_path {
        Some(path) => remap::resolve_remap(&remap::read_remap(path)?, &layer_map)?,
        None => IndexMap::new(),
    };

    let layout = load_layout(&args.layout_path)?;
    let cell = layout.cell(args.topcell.as_deref())?;
    let polys = cell.polys_by_layer();
    let mut labels = cell.labels_by_layer(args.raw_label_names);

    if let Some(lfile_path) = &args.lfile_path {
        merge_label_file(&mut labels, lfile_path, args, &layer_map)?;
    }

    let registry = check_connectivity(
        &polys,
        &labels,
        &connections,
        &label_remap,
        DEFAULT_SCALE_FACTOR,
    )?;
    let result = TraceResult::from_registry(&registry);

    if let Some(output_path) = &args.output_path {
        write_net_geometry(&registry, output_path, DEFAULT_SCALE_FACTOR)?;
    }

    print!("{result}");
    Ok(())
}

/// Pull labels out of a second layout and fold them into the main label set,
/// moved onto the conductor layers its remap names.
fn merge_label_file(
    labels: &mut IndexMap<LayerId, Vec<Label>>,
    lfile_path: &Path,
    args: &Args,
    main_layer_map: &IndexMap<String, LayerId>,
) -> Result<()> {
    let Some(remap_path) = &args.lfile_remap_path else {
        bail!("-l was given but no label layers were specified with -r");
    };
    let lfile_layer_map = match &args.lfile_layermap_path {
        Some(path) => layermap::read_layermap(path)?,
        None => main_layer_map.clone(),
    };
    let lfile_remap = remap::resolve_remap(&remap::read_remap(remap_path)?, &lfile_layer_map)?;

    let lfile = load_layout(lfile_path)?;
    let cell = lfile.cell(args.lfile_topcell.as_deref())?;
    for (layer, layer_labels) in cell.labels_by_layer(args.raw_label_names) {
        let Some(&target) = lfile_remap.get(&layer) else {
            continue;
        };
        labels.entry(target).or_default().extend(layer_labels);
    }
    Ok(())
}

/// Dump the final per-net geometry, descaled back to input units.
fn write_net_geometry(
    registry: &NetRegistry<Contour>,
    path: &Path,
    scale_factor: i64,
) -> Result<()> {
    let mut nets: IndexMap<String, IndexMap<String, Vec<Vec<[f64; 2]>>>> = IndexMap::new();
    for (name, layers) in registry.iter() {
        let mut by_layer = IndexMap::new();
        for (layer, contours) in layers {
            let descaled: Vec<Vec<[f64; 2]>> = contours
                .iter()
                .map(|contour| {
                    contour.iter().map(|&p| descale_point(p, scale_factor)).collect()
                })
                .collect();
            by_layer.insert(layer.to_string(), descaled);
        }
        nets.insert(name.to_string(), by_layer);
    }

    let file = File::create(path)
        .with_context(|| format!("creating output {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &nets)
        .with_context(|| format!("writing output {}", path.display()))?;
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        usage(args.first().map(String::as_str).unwrap_or("nettrace"));
        return ExitCode::from(2);
    }

    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).init() {
        eprintln!("failed to initialise logging: {err}");
    }

    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            usage(&args[0]);
            return ExitCode::from(2);
        }
    };

    match run(&parsed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
