mod provenance;
mod table;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use massprops::api::{
    build_proxy, estimate_mass_properties, point_cloud_moments, sample_volume, EstimateCfg,
    MassEstimate, MomentResult, Proxy, SampleCfg, TriMesh, DEFAULT_ATTEMPTS_PER_POINT,
    DEFAULT_COUNT,
};
use nalgebra::{Point3, Vector3};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "massprops-cli")]
#[command(about = "Center of mass and inertia from random volume samples")]
struct Cmd {
    /// Log debug events (file reads, sample bookkeeping)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Centroid and axis moments of a point CSV (x,y,z)
    Moments {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Divide moments by the point count
        #[arg(long)]
        normalize: bool,
    },
    /// Draw uniform points inside a mesh (or its proxy) and write them as CSV
    Sample {
        #[command(flatten)]
        solid: SolidArgs,
        #[command(flatten)]
        sampling: SamplingArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Estimate volume, mass, center of mass and inertia of a mesh
    Estimate {
        #[command(flatten)]
        solid: SolidArgs,
        #[command(flatten)]
        sampling: SamplingArgs,
        /// Uniform density used to scale volume to mass
        #[arg(long, default_value_t = 1.0)]
        density: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(clap::Args)]
struct SolidArgs {
    /// Vertex CSV (x,y,z)
    #[arg(long)]
    input: PathBuf,
    /// Face CSV (a,b,c); without it only `hull` and `bbox` proxies apply
    #[arg(long)]
    faces: Option<PathBuf>,
    /// Solid to sample; defaults to `exact` with faces, `hull` without
    #[arg(long, value_enum)]
    proxy: Option<ProxyArg>,
}

#[derive(clap::Args)]
struct SamplingArgs {
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    count: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Rejection budget per requested point
    #[arg(long, default_value_t = DEFAULT_ATTEMPTS_PER_POINT)]
    attempts_per_point: usize,
}

impl SamplingArgs {
    fn cfg(&self) -> SampleCfg {
        SampleCfg {
            count: self.count,
            attempts_per_point: self.attempts_per_point,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProxyArg {
    Exact,
    Hull,
    Bbox,
}

impl From<ProxyArg> for Proxy {
    fn from(p: ProxyArg) -> Self {
        match p {
            ProxyArg::Exact => Proxy::Exact,
            ProxyArg::Hull => Proxy::ConvexHull,
            ProxyArg::Bbox => Proxy::BoundingBox,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Moments {
            input,
            out,
            normalize,
        } => moments(&input, &out, normalize),
        Action::Sample {
            solid,
            sampling,
            out,
        } => sample(&solid, &sampling, &out),
        Action::Estimate {
            solid,
            sampling,
            density,
            out,
        } => estimate(&solid, &sampling, density, &out),
        Action::Report => report(),
    }
}

#[derive(Serialize)]
struct MomentsReport {
    centroid: [f64; 3],
    moments: [f64; 3],
    count: usize,
    normalized: bool,
}

impl From<&MomentResult> for MomentsReport {
    fn from(r: &MomentResult) -> Self {
        Self {
            centroid: point_array(&r.centroid),
            moments: vector_array(&r.moments),
            count: r.count,
            normalized: r.normalized,
        }
    }
}

#[derive(Serialize)]
struct EstimateReport {
    proxy: String,
    centroid: [f64; 3],
    moments: [f64; 3],
    mean_moments: [f64; 3],
    inertia: [f64; 3],
    samples: usize,
    attempts: usize,
    volume: f64,
    density: f64,
    mass: f64,
}

impl EstimateReport {
    fn new(proxy: Proxy, e: &MassEstimate) -> Self {
        Self {
            proxy: proxy.to_string(),
            centroid: point_array(&e.centroid),
            moments: vector_array(&e.moments),
            mean_moments: vector_array(&e.mean_moments),
            inertia: vector_array(&e.inertia),
            samples: e.samples,
            attempts: e.attempts,
            volume: e.volume,
            density: e.density,
            mass: e.mass,
        }
    }
}

fn point_array(p: &Point3<f64>) -> [f64; 3] {
    [p.x, p.y, p.z]
}

fn vector_array(v: &Vector3<f64>) -> [f64; 3] {
    [v.x, v.y, v.z]
}

fn moments(input: &Path, out: &Path, normalize: bool) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), normalize, "moments");
    let points = table::read_points(input)?;
    let result = point_cloud_moments(&points, normalize)
        .with_context(|| format!("reducing {}", input.display()))?;
    tracing::info!(
        count = result.count,
        cx = result.centroid.x,
        cy = result.centroid.y,
        cz = result.centroid.z,
        "moments_done"
    );
    write_json(out, &MomentsReport::from(&result))?;
    write_sidecar(
        out,
        Payload::new(json!({ "command": "moments", "normalize": normalize })).with_input(input),
    )?;
    Ok(())
}

/// Vertices plus optional faces, and the proxy that applies to them.
fn load_mesh(args: &SolidArgs) -> Result<(TriMesh, Proxy)> {
    let vertices = table::read_points(&args.input)?;
    let faces = match &args.faces {
        Some(path) => table::read_faces(path)?,
        None => Vec::new(),
    };
    let proxy = match args.proxy {
        Some(p) => p.into(),
        None if faces.is_empty() => Proxy::ConvexHull,
        None => Proxy::Exact,
    };
    let mesh = TriMesh::new(vertices, faces)
        .with_context(|| format!("building mesh from {}", args.input.display()))?;
    tracing::info!(
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        proxy = %proxy,
        "mesh_loaded"
    );
    Ok((mesh, proxy))
}

fn solid_payload(args: &SolidArgs, sampling: &SamplingArgs, proxy: Proxy, command: &str) -> Payload {
    let mut payload = Payload::new(json!({
        "command": command,
        "proxy": proxy.to_string(),
        "count": sampling.count,
        "seed": sampling.seed,
        "attempts_per_point": sampling.attempts_per_point,
    }))
    .with_input(&args.input);
    if let Some(faces) = &args.faces {
        payload = payload.with_input(faces);
    }
    payload
}

fn sample(args: &SolidArgs, sampling: &SamplingArgs, out: &Path) -> Result<()> {
    let (mesh, proxy) = load_mesh(args)?;
    let solid = build_proxy(&mesh, proxy)?;
    let drawn = sample_volume(&solid, &sampling.cfg(), sampling.seed)?;
    tracing::info!(
        accepted = drawn.points.len(),
        attempts = drawn.attempts,
        acceptance = drawn.acceptance(),
        "sample_done"
    );
    ensure_parent(out)?;
    table::write_points(out, &drawn.points)?;
    write_sidecar(out, solid_payload(args, sampling, proxy, "sample"))?;
    Ok(())
}

fn estimate(args: &SolidArgs, sampling: &SamplingArgs, density: f64, out: &Path) -> Result<()> {
    let (mesh, proxy) = load_mesh(args)?;
    let solid = build_proxy(&mesh, proxy)?;
    let cfg = EstimateCfg {
        sample: sampling.cfg(),
        density,
    };
    let est = estimate_mass_properties(&solid, &cfg, sampling.seed)?;
    tracing::info!(
        volume = est.volume,
        mass = est.mass,
        ix = est.inertia.x,
        iy = est.inertia.y,
        iz = est.inertia.z,
        "estimate_done"
    );
    write_json(out, &EstimateReport::new(proxy, &est))?;
    let mut payload = solid_payload(args, sampling, proxy, "estimate");
    payload.params["density"] = json!(density);
    write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::code_rev(),
        "massprops_version": massprops::VERSION,
        "defaults": {
            "count": DEFAULT_COUNT,
            "attempts_per_point": DEFAULT_ATTEMPTS_PER_POINT,
        },
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
