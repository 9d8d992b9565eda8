use clap::{Parser, ValueEnum};
use std::process;
use std::sync::Arc;
use std::time::Duration;
use swmr::arena::{ParkingLotArena, StdArena};
use swmr::role::Mix;
use swmr::scenario::Scenario;
use swmr::strategy::Backend;
use swmr::workload::ReadProfile;
use swmr_bench::scaling_harness;
use swmr_bench::scaling_harness::print::{Header, Separator};
use swmr_bench::scaling_harness::{ExtendedOptions, Options};

/// Sweeps thread counts over an exclusive and a shared-or-exclusive lock, printing the
/// throughput of each.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Thread counts to sweep.
    #[arg(long, short, value_delimiter = ',', default_values_t = [2, 4, 8].to_vec())]
    threads: Vec<usize>,

    /// Seconds per run.
    #[arg(long, short, default_value_t = 1)]
    duration: u64,

    /// Cost of a reader's critical section.
    #[arg(long, short, value_enum, value_delimiter = ',', default_values_t = [ProfileArg::Heavy, ProfileArg::Light].to_vec())]
    profiles: Vec<ProfileArg>,

    /// Lock implementations to compare.
    #[arg(long, short, value_enum, value_delimiter = ',', default_values_t = [BackendArg::Std, BackendArg::ParkingLot].to_vec())]
    backends: Vec<BackendArg>,

    /// Distribution of roles among the threads.
    #[arg(long, short, value_enum, default_value_t = MixArg::SingleWriter)]
    mix: MixArg,

    /// Print a line whenever a thread releases the lock.
    #[arg(long)]
    debug_locks: bool,

    /// Print a line whenever a thread exits.
    #[arg(long)]
    debug_exits: bool,

    /// Check occupancy inside every critical section. The checks share counters across
    /// threads and lower the reported rates.
    #[arg(long)]
    asserts: bool,
}

impl Args {
    fn ext_opts(&self) -> ExtendedOptions {
        ExtendedOptions {
            debug_locks: self.debug_locks,
            debug_exits: self.debug_exits,
            asserts_enabled: self.asserts,
            ..ExtendedOptions::default()
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProfileArg {
    Heavy,
    Light,
}

impl From<ProfileArg> for ReadProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Heavy => ReadProfile::Heavy,
            ProfileArg::Light => ReadProfile::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BackendArg {
    Std,
    ParkingLot,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Std => Backend::Std,
            BackendArg::ParkingLot => Backend::ParkingLot,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MixArg {
    SingleWriter,
    ReadOnly,
}

impl From<MixArg> for Mix {
    fn from(arg: MixArg) -> Self {
        match arg {
            MixArg::SingleWriter => Mix::SingleWriter,
            MixArg::ReadOnly => Mix::ReadOnly,
        }
    }
}

fn main() {
    let args = Args::parse();
    let ext_opts = args.ext_opts();

    let scenarios = args
        .profiles
        .iter()
        .flat_map(|&profile| Scenario::generate(profile.into(), args.mix.into()))
        .map(|scenario| scenario.with_thread_counts(args.threads.clone()))
        .collect::<Vec<_>>();
    for scenario in &scenarios {
        if let Err(err) = scenario.validate() {
            eprintln!("{err}");
            process::exit(1);
        }
    }

    if ext_opts.asserts_enabled {
        println!("occupancy checks enabled: rates include instrumentation overhead");
    }

    let std_arena = Arc::new(StdArena::new());
    let parking_lot_arena = Arc::new(ParkingLotArena::new());

    for &threads in &args.threads {
        let opts = Options {
            threads,
            duration: Duration::from_secs(args.duration),
        };
        println!("{}", Separator());
        println!("{}", opts);
        println!("{}", Header());
        for scenario in &scenarios {
            for &backend in &args.backends {
                let backend = Backend::from(backend);
                let result = match backend {
                    Backend::Std => scaling_harness::run_for(&std_arena, scenario, &opts, &ext_opts),
                    Backend::ParkingLot => {
                        scaling_harness::run_for(&parking_lot_arena, scenario, &opts, &ext_opts)
                    }
                };
                match result {
                    Ok(result) => println!("|{:55}|{result}", format!("{backend}/{}", scenario.name())),
                    Err(err) => {
                        eprintln!("{err}");
                        process::exit(1);
                    }
                }
            }
        }
    }
    println!("{}", Separator());
}
