use anyhow::{ Context, Result };
use clap::Parser;

use disk_sched::{
    config::Args,
    logging,
    report,
    request::{ parse_head, source::load_requests, Workload },
    SchedulingEngine,
};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    // Everything is validated before a single policy runs.
    let head = parse_head(&args.head)?;
    let options = args.scheduler_options()?;
    let requests = load_requests(&args.request_file, options.cylinders)?;
    let workload = Workload::new(head, requests, options.cylinders)?;

    let engine = SchedulingEngine::from_options(workload, &options);
    let schedule = engine.run_with(&options).await.context("failed to compute head movement")?;

    print!("{}", report::render(&schedule, args.format));

    Ok(())
}
