use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;

use ret_analyzer::analyze_file;
use ret_analyzer::utils::format_duration;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("usage: ret_analyzer <combat_log> [output.json]");
        process::exit(2);
    };

    let report = analyze_file(Path::new(&input))?;
    info!(
        player = %report.player,
        boss = %report.boss,
        duration = %format_duration(report.duration),
        dps = report.dps,
        "combat log analyzed"
    );

    let json = serde_json::to_string_pretty(&report)?;
    match args.next() {
        Some(output) => fs::write(output, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
