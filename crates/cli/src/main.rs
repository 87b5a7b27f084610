use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

use sightline::generate::{rectangle_rings, scatter, ReplayToken, ScatterCfg};
use sightline::geom::{Real, Segment};
use sightline::io;
use sightline::region::{prepare, visible_region, visible_region_par, Boundary};

#[derive(Parser)]
#[command(name = "sightline")]
#[command(about = "Visibility regions among segment obstacles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a scene file and print or write the visible boundary
    Solve {
        /// Scene file: one segment per line, two x,y points
        #[arg(long)]
        input: String,
        /// Output file; stdout when absent
        #[arg(long)]
        out: Option<String>,
        /// Dump raw view rays instead of reconstructed edges
        #[arg(long)]
        rays: bool,
        /// Emit the boundary as JSON
        #[arg(long)]
        json: bool,
        /// Compute in f32 instead of f64
        #[arg(long = "f32")]
        single: bool,
        /// Preprocess in exact rational arithmetic
        #[arg(long)]
        exact: bool,
        /// Use the multi-threaded solver
        #[arg(long)]
        parallel: bool,
    },
    /// Preprocess a scene and report what survives
    Project {
        #[arg(long)]
        input: String,
    },
    /// Generate a synthetic scene on stdout
    Generate {
        /// Rectangle rings with 2^k segments
        #[arg(long, conflicts_with = "count")]
        k: Option<u32>,
        /// Random scatter with this many segments
        #[arg(long)]
        count: Option<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            input,
            out,
            rays,
            json,
            single,
            exact,
            parallel,
        } => {
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("reading scene {input}"))?;
            let opts = SolveOpts {
                rays,
                json,
                exact,
                parallel,
            };
            let rendered = if single {
                solve_text::<f32>(&text, &opts)?
            } else {
                solve_text::<f64>(&text, &opts)?
            };
            emit(out.as_deref(), &rendered)
        }
        Action::Project { input } => {
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("reading scene {input}"))?;
            project(&text)
        }
        Action::Generate { k, count, seed } => {
            let segs = match (k, count) {
                (Some(k), _) => rectangle_rings(k)?,
                (None, count) => {
                    let cfg = ScatterCfg {
                        count: count.unwrap_or(ScatterCfg::default().count),
                        ..ScatterCfg::default()
                    };
                    scatter(&cfg, ReplayToken { seed, index: 0 })
                }
            };
            for s in &segs {
                println!("{},{} {},{}", s.a.x, s.a.y, s.b.x, s.b.y);
            }
            Ok(())
        }
    }
}

struct SolveOpts {
    rays: bool,
    json: bool,
    exact: bool,
    parallel: bool,
}

fn load_scene<T: Real>(text: &str, exact: bool) -> Result<Vec<Segment<T>>> {
    if exact {
        // Exact orientation and axis splitting; the solver's own float
        // preprocessing then finds nothing left to change.
        let parsed = io::parse_segments_exact(text)?;
        let prepared = sightline::exact::prepare(&parsed);
        prepared
            .segments
            .iter()
            .map(|s| {
                sightline::exact::to_segment(s)
                    .context("coordinate does not fit the target scalar")
            })
            .collect()
    } else {
        Ok(io::parse_segments(text)?)
    }
}

fn solve_text<T>(text: &str, opts: &SolveOpts) -> Result<String>
where
    T: Real + Send + Sync,
{
    let segments = load_scene::<T>(text, opts.exact)?;
    let prepared = prepare(&segments);
    let started = std::time::Instant::now();
    let region = if opts.parallel {
        visible_region_par(&prepared.segments)
    } else {
        visible_region(&prepared.segments)
    };
    tracing::info!(
        segments = segments.len(),
        dropped = prepared.dropped,
        split = prepared.split,
        rays = region.len(),
        exact = opts.exact,
        parallel = opts.parallel,
        elapsed_us = started.elapsed().as_micros() as u64,
        "solved"
    );
    if opts.json {
        Ok(render_json(&region)?)
    } else if opts.rays {
        Ok(io::format_rays(&region))
    } else {
        Ok(io::format_edges(&region))
    }
}

fn render_json<T: Real>(region: &Boundary<T>) -> Result<String> {
    let rays: Vec<_> = region
        .rays
        .iter()
        .map(|r| {
            serde_json::json!({
                "theta": format!("{}", r.theta),
                "dir": [format!("{}", r.dir.x), format!("{}", r.dir.y)],
                "inner": r.inner.map(|v| format!("{v}")),
                "outer": r.outer.map(|v| format!("{v}")),
            })
        })
        .collect();
    let obj = serde_json::json!({ "rays": rays });
    Ok(serde_json::to_string_pretty(&obj)?)
}

fn project(text: &str) -> Result<()> {
    let segments: Vec<Segment<f64>> = io::parse_segments(text)?;
    let prepared = prepare(&segments);
    tracing::info!(
        input = segments.len(),
        kept = prepared.segments.len(),
        dropped = prepared.dropped,
        split = prepared.split,
        "project"
    );
    for seg in &prepared.segments {
        let pair = sightline::region::project_segment(seg);
        print!("{}", io::format_rays(&pair));
    }
    Ok(())
}

fn emit(out: Option<&str>, rendered: &str) -> Result<()> {
    match out {
        Some(path) => {
            let p = Path::new(path);
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(p, rendered).with_context(|| format!("writing {path}"))?;
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn opts() -> SolveOpts {
        SolveOpts {
            rays: false,
            json: false,
            exact: false,
            parallel: false,
        }
    }

    #[test]
    fn solves_edges_in_both_precisions() {
        let scene = "1,1 -1,1\n";
        let wide = solve_text::<f64>(scene, &opts()).expect("solve");
        let narrow = solve_text::<f32>(scene, &opts()).expect("solve");
        assert_eq!(wide, "1.000,1.000 -1.000,1.000\n");
        assert_eq!(wide, narrow);
    }

    #[test]
    fn exact_preprocessing_matches_float() {
        let scene = "1,1 1,-1\n-2,3 2,3\n";
        let float = solve_text::<f64>(scene, &opts()).expect("solve");
        let exact = solve_text::<f64>(
            scene,
            &SolveOpts {
                exact: true,
                ..opts()
            },
        )
        .expect("solve");
        assert_eq!(float, exact);
    }

    #[test]
    fn json_dump_lists_every_ray() {
        let rendered = solve_text::<f64>(
            "1,1 -1,1\n",
            &SolveOpts {
                json: true,
                ..opts()
            },
        )
        .expect("solve");
        let parsed: serde_json::Value = serde_json::from_str(&rendered).expect("json");
        assert_eq!(parsed["rays"].as_array().expect("array").len(), 2);
        assert!(parsed["rays"][0]["inner"].is_null());
    }

    #[test]
    fn emit_writes_through_missing_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/out.txt");
        let path = path.to_str().expect("utf8 path");
        emit(Some(path), "edges\n").expect("emit");
        assert_eq!(std::fs::read_to_string(path).expect("read"), "edges\n");

        let mut scene = tempfile::NamedTempFile::new().expect("tmp");
        scene.write_all(b"1,1 -1,1\n").expect("write");
        let text = std::fs::read_to_string(scene.path()).expect("read");
        assert!(solve_text::<f64>(&text, &opts()).is_ok());
    }
}
