use crate::csv::write_csv_1d;
use crate::decomposition::RingDecomposition;
use crate::domain::Geometry;
use crate::error::*;
use crate::initial_conditions::*;
use crate::par_slice;
use crate::solver::*;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Copy, Clone, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum Mode {
    Serial,
    Distributed,
    /// Run both kernels and require identical results.
    #[default]
    Both,
}

/// heat_ring 1D periodic heat equation executable
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory for output files, will be created.
    /// WARNING, if this Directory
    /// already exists, current contents will be removed.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Global domain size, must split evenly over the ranks.
    #[arg(short, long, default_value = "1000")]
    pub domain_size: usize,

    /// Number of ranks on the ring.
    #[arg(short, long, default_value = "4")]
    pub ranks: usize,

    /// Number of Forward Euler steps.
    #[arg(short, long, default_value = "1000")]
    pub steps: usize,

    /// Spatial step.
    #[arg(long, default_value = "1.0")]
    pub dx: f64,

    /// Time step, dt / dx^2 above 0.5 is unstable.
    #[arg(long, default_value = "0.25")]
    pub dt: f64,

    /// Initial condition.
    #[arg(short, long, value_enum, default_value_t = ClapICType::Impulse)]
    pub ic: ClapICType,

    /// Initial condition parameter: constant value, random max,
    /// or impulse variance.
    #[arg(long, default_value = "25.0")]
    pub dial: f64,

    /// Seed for random initial conditions.
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Chunk size to use for parallel setup and reductions.
    #[arg(short, long, default_value = "1000")]
    pub chunk_size: usize,

    /// Which kernels to run.
    #[arg(short, long, value_enum, default_value_t = Mode::Both)]
    pub mode: Mode,
}

impl Args {
    pub fn cli_parse(name: &str) -> Result<Self> {
        tracing::info!(name, "starting");
        let args = Args::parse();
        if let Some(output_dir) = &args.output_dir {
            prepare_output_dir(output_dir)?;
        }
        Ok(args)
    }

    pub fn ic_type(&self) -> ICType {
        self.ic.to_ic_type(self.dial, self.seed)
    }

    fn output_path(&self, name: &str) -> Option<PathBuf> {
        self.output_dir.as_ref().map(|d| d.join(format!("{name}.csv")))
    }
}

/// Removes any previous contents.
fn prepare_output_dir(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_dir_all(path)?;
    }
    std::fs::create_dir_all(path)?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct KernelRun {
    pub elapsed: Duration,
    pub mass_after: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub mode: Mode,
    pub domain_size: usize,
    pub ranks: usize,
    pub steps: usize,
    pub nu: f64,
    pub mass_before: f64,
    pub serial: Option<KernelRun>,
    pub distributed: Option<KernelRun>,
    /// Largest pointwise difference, only when both kernels ran.
    pub max_abs_diff: Option<f64>,
}

impl Report {
    pub fn print(&self) {
        println!("{{");
        println!("  \"mode\": \"{:?}\",", self.mode);
        println!("  \"domain_size\": {},", self.domain_size);
        println!("  \"ranks\": {},", self.ranks);
        println!("  \"steps\": {},", self.steps);
        println!("  \"nu\": {},", self.nu);
        println!("  \"mass_before\": {},", self.mass_before);
        for (name, kernel) in
            [("serial", &self.serial), ("distributed", &self.distributed)]
        {
            if let Some(kernel) = kernel {
                println!("  \"{name}_seconds\": {},", kernel.elapsed.as_secs_f64());
                println!("  \"{name}_mass_after\": {},", kernel.mass_after);
            }
        }
        match self.max_abs_diff {
            Some(d) => println!("  \"max_abs_diff\": {d}"),
            None => println!("  \"max_abs_diff\": null"),
        }
        println!("}}");
    }
}

/// Build the initial field, run the selected kernels, write outputs.
/// In `Mode::Both` any difference between the kernels is an error.
pub fn run(args: &Args) -> Result<Report> {
    profiling::scope!("driver::run");
    let decomposition = RingDecomposition::new(args.domain_size, args.ranks)?;
    let geometry = Geometry::new(args.dx, args.domain_size, args.dt, args.steps)?;
    let global = *decomposition.global();

    let mut initial = vec![0.0; args.domain_size];
    generate_ic(&mut initial, args.ic_type(), args.chunk_size);
    let mass_before = par_slice::sum(&initial, args.chunk_size);
    if let Some(path) = args.output_path("initial") {
        write_csv_1d(&initial, &global, &path)?;
    }

    let mut serial = None;
    let mut serial_result = None;
    if args.mode != Mode::Distributed {
        let mut u = initial.clone();
        let start = Instant::now();
        advance_serial(&mut u, args.dx, args.domain_size, args.dt, args.steps)?;
        let elapsed = start.elapsed();
        tracing::info!(seconds = elapsed.as_secs_f64(), "serial kernel done");
        serial = Some(KernelRun {
            elapsed,
            mass_after: par_slice::sum(&u, args.chunk_size),
        });
        if let Some(path) = args.output_path("serial") {
            write_csv_1d(&u, &global, &path)?;
        }
        serial_result = Some(u);
    }

    let mut distributed = None;
    let mut distributed_result = None;
    if args.mode != Mode::Serial {
        let mut u = initial.clone();
        let start = Instant::now();
        advance_on_thread_ring(&mut u, args.dx, args.dt, args.steps, args.ranks)?;
        let elapsed = start.elapsed();
        tracing::info!(
            seconds = elapsed.as_secs_f64(),
            ranks = args.ranks,
            "distributed kernel done"
        );
        distributed = Some(KernelRun {
            elapsed,
            mass_after: par_slice::sum(&u, args.chunk_size),
        });
        if let Some(path) = args.output_path("distributed") {
            write_csv_1d(&u, &global, &path)?;
        }
        distributed_result = Some(u);
    }

    let max_abs_diff = match (&serial_result, &distributed_result) {
        (Some(s), Some(d)) => {
            let diff = par_slice::max_abs_diff(s, d, args.chunk_size);
            if !par_slice::bitwise_eq(s, d, args.chunk_size) {
                return Err(HeatError::KernelMismatch { max_abs_diff: diff });
            }
            Some(diff)
        }
        _ => None,
    };

    Ok(Report {
        mode: args.mode,
        domain_size: args.domain_size,
        ranks: args.ranks,
        steps: args.steps,
        nu: geometry.nu(),
        mass_before,
        serial,
        distributed,
        max_abs_diff,
    })
}
