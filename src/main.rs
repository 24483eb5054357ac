use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use nss_tree::cli::{Args, OutputKind};
use nss_tree::{build, oracle, text, tree};

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let outputs = render_all(&args);
    for rendered in &outputs {
        match rendered {
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
            }
            Err(err) => {
                error!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

#[cfg(feature = "parallel")]
fn render_all(args: &Args) -> Vec<Result<Vec<String>, String>> {
    use rayon::prelude::*;

    if args.files.len() > 1 {
        return args
            .files
            .par_iter()
            .map(|path| run_one(args, path).map_err(|err| format!("{path:?}: {err}")))
            .collect();
    }
    args.files
        .iter()
        .map(|path| run_one(args, path).map_err(|err| format!("{path:?}: {err}")))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn render_all(args: &Args) -> Vec<Result<Vec<String>, String>> {
    args.files
        .iter()
        .map(|path| run_one(args, path).map_err(|err| format!("{path:?}: {err}")))
        .collect()
}

fn run_one(args: &Args, path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let loaded = text::load(path, args.length)?;
    info!("loaded {path:?}: {} bytes (sentinel-padded)", loaded.len());

    let mut lines = Vec::new();
    match args.output {
        OutputKind::Arrays => {
            let result = build(&loaded, args.delta);
            lines.push(format!("pss={:?}", result.pss));
            lines.push(format!("nss={:?}", result.nss));
            info!(
                "{path:?}: {} run-extension hits, {} lyndon-skip hits",
                result.stats.run_extensions, result.stats.lyndon_skips
            );
        }
        OutputKind::Bp => {
            let result = build(&loaded, args.delta);
            let bp = tree::pss_nss_to_bp(&result.nss);
            let bits: String = (0..bp.len())
                .map(|i| if bp.get(i) { '(' } else { ')' })
                .collect();
            lines.push(bits);
        }
        OutputKind::Oracle => {
            let (pss, nss) = oracle::psv_nsv(&loaded.bytes);
            lines.push(format!("pss={pss:?}"));
            lines.push(format!("nss={nss:?}"));
        }
    }

    Ok(lines)
}
