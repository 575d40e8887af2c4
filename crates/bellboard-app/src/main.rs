//! bellboard console entry point.
//!
//! Connects to the device service from the config file (first CLI arg,
//! default `bellboard.toml`), loads the panel state, and runs a line
//! console over it. `play` blocks while driving the status poll loop so
//! the prompt comes back when the device goes idle.

mod commands;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;

use bellboard_client::HttpDeviceClient;
use bellboard_core::{Panel, PollOutcome};
use bellboard_types::backend::TextureId;
use bellboard_types::config::PanelConfig;

use commands::Command;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "bellboard.toml".to_string());
    let config = PanelConfig::load(Path::new(&config_path))?;
    log::info!("Using device service at {}", config.device_addr());

    let mut svc = HttpDeviceClient::new(config.device_host.clone(), config.device_port);

    // Console front end: the indicator textures are nominal ids, never
    // rendered here.
    let mut panel = Panel::load(&mut svc, &config, TextureId(1), TextureId(0));
    println!(
        "bellboard console: {} option(s), {} sound(s). Type 'help' for commands.",
        panel.filter.options().len(),
        panel.sounds.rows().len()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match commands::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Play) => run_play(&mut panel, &mut svc, &config),
            Ok(cmd) => {
                for out in commands::dispatch(cmd, &mut panel, &mut svc, &config) {
                    println!("{out}");
                }
            },
            Err(usage) => println!("{usage}"),
        }
    }

    log::info!("bellboard console exiting");
    Ok(())
}

/// Trigger playback and drive the poll loop until the device goes idle.
fn run_play(panel: &mut Panel, svc: &mut HttpDeviceClient, config: &PanelConfig) {
    if let Err(err) = panel.play(svc, Instant::now()) {
        println!("Play failed: {err}");
        return;
    }
    println!("Playing...");

    let step = Duration::from_millis(config.poll_interval_ms.max(10));
    while panel.is_polling() {
        std::thread::sleep(step);
        match panel.tick(svc, Instant::now()) {
            Some(PollOutcome::Finished) => println!("Playback finished."),
            Some(PollOutcome::Failed) => println!("Status check failed; treating device as idle."),
            _ => {},
        }
    }
}
