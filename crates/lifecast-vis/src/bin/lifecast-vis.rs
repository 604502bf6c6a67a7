//! Lifecast Server
//!
//! Seed the board, start the simulation loop, serve the viewer.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use lifecast_hub::{BroadcastHub, SimulationLoop, TICK_PERIOD};
use lifecast_vis::VisServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let port: u16 = args.get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);

    let tick_ms: u64 = args.get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(TICK_PERIOD.as_millis() as u64);

    println!("Lifecast");
    println!("========");
    println!();
    println!("Board seeded, advancing every {}ms.", tick_ms);
    println!("Open http://localhost:{} to watch and poke the board.", port);
    println!();

    let hub = Arc::new(BroadcastHub::with_seed_pattern());
    let sim = SimulationLoop::with_period(hub.clone(), Duration::from_millis(tick_ms)).spawn();

    // Start server
    let server = VisServer::new(hub);
    server.serve(port).await?;

    sim.shutdown().await;
    Ok(())
}
