use std::io::Write;
use std::path::PathBuf;

use eyre::WrapErr;
use structopt::StructOpt;

use gas_simulator::constants::{GAS_CONSTANT, PRESSURE};
use gas_simulator::statistics::labelled_counts;
use gas_simulator::{GasParameters, GasSimulation, NeighborSearch, Scalar, SimulationStatistics};

#[derive(StructOpt, Debug)]
#[structopt(name = "gas_simulator")]
struct Opt {
    /// JSON file with the simulation parameters
    #[structopt(short, long)]
    config: Option<PathBuf>,
    /// Simulate the ideal gas instead of the reactive one
    #[structopt(long)]
    ideal: bool,
    #[structopt(long)]
    width: Option<Scalar>,
    #[structopt(long)]
    height: Option<Scalar>,
    #[structopt(long)]
    depth: Option<Scalar>,
    #[structopt(short, long, default_value = "100")]
    frames: usize,
    #[structopt(short, long)]
    seed: Option<u64>,
    /// Use the cell grid to find close pairs
    #[structopt(long)]
    grid: bool,
    /// Writes one MessagePack snapshot per frame into this directory
    #[structopt(short, long)]
    output_dir: Option<PathBuf>,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt::init();

    let opt = Opt::from_args();
    let params = parameters(&opt)?;

    tracing::info!("Temperature: {} K", params.temperature);
    tracing::info!("Mass: {} kg", params.unit_mass);
    tracing::info!("Pressure: {} Pa", PRESSURE);
    tracing::info!("Gas Constant: {} J/(mol*K)", GAS_CONSTANT);

    let mut simulation =
        GasSimulation::new(params).wrap_err("Failed to set up the gas simulation")?;

    if let Some(dir) = &opt.output_dir {
        std::fs::create_dir_all(dir)
            .wrap_err_with(|| format!("Failed to create output directory: {:?}", dir))?;
    }

    for frame in 0..opt.frames {
        let snapshot = simulation.tick();
        tracing::debug!(frame, average_mass = snapshot.average_mass, "Average Mass");

        if let Some(dir) = &opt.output_dir {
            let mut path = dir.clone();
            path.push(format!("{:03}.dat", frame));
            let mut writer = std::fs::File::create(&path)
                .wrap_err_with(|| format!("Failed to create snapshot file: {:?}", path))?;
            rmp_serde::encode::write(&mut writer, &snapshot)?;
        }
    }

    if let Some(counts) = simulation.category_counts() {
        for (category, count) in labelled_counts(counts) {
            tracing::info!(%category, count, "final composition");
        }
    }
    tracing::info!(
        frames = simulation.frame(),
        time = simulation.total_time(),
        bonds = simulation.bonds().len(),
        average_mass = simulation.average_mass(),
        "done"
    );

    Ok(())
}

/// Builds the parameters from the config file if there is one, otherwise from the defaults,
/// then applies the command line overrides. Box dimensions that are still missing are asked
/// for on stdin.
fn parameters(opt: &Opt) -> eyre::Result<GasParameters> {
    let mut params = match &opt.config {
        Some(path) => std::fs::read(path)
            .wrap_err_with(|| format!("Failed to read JSON settings file: {:?}", path))
            .and_then(|json| {
                serde_json::from_slice(&json).wrap_err("Serde failed to deserialize JSON.")
            })?,
        None => {
            let base = if opt.ideal {
                GasParameters::ideal()
            } else {
                GasParameters::reactive()
            };
            let width = dimension(opt.width, "width")?;
            let height = dimension(opt.height, "height")?;
            let depth = dimension(opt.depth, "depth")?;
            base.with_bounds(width, height, depth)
        }
    };

    if opt.config.is_some() {
        if let Some(width) = opt.width {
            params.bounds.x = width;
        }
        if let Some(height) = opt.height {
            params.bounds.y = height;
        }
        if let Some(depth) = opt.depth {
            params.bounds.z = depth;
        }
    }
    if let Some(seed) = opt.seed {
        params.seed = seed;
    }
    if opt.grid {
        params.neighbor_search = NeighborSearch::Grid;
    }

    Ok(params)
}

fn dimension(given: Option<Scalar>, name: &str) -> eyre::Result<Scalar> {
    if let Some(value) = given {
        return Ok(value);
    }

    print!("Insert {} in meters: ", name);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    line.trim()
        .parse()
        .wrap_err_with(|| format!("Invalid {}: {:?}", name, line.trim()))
}
