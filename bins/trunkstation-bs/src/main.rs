use clap::Parser;

use std::fs::File;
use std::io::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use nxdn_config::{toml_config, SharedConfig};
use nxdn_core::debug;
use nxdn_entities::acl::access_control::AccessControl;
use nxdn_entities::trunk::components::affiliations::Affiliations;
use nxdn_entities::trunk::components::line_coding::NxdnScrambler;
use nxdn_entities::TrunkBs;

/// Control-channel frame period: 384 bits at 4800 bit/s
const FRAME_PERIOD_MS: u64 = 80;

/// Broadcast rotation length; index 0 of each cycle is the site broadcast
const BCAST_SEQ_LEN: u8 = 4;

/// Load configuration file
fn load_config_from_toml(cfg_path: &str) -> SharedConfig {
    match toml_config::from_file(cfg_path) {
        Ok(c) => c,
        Err(e) => {
            println!("Failed to load configuration from {}: {}", cfg_path, e);
            std::process::exit(1);
        }
    }
}

/// Build the trunking engine from the loaded configuration
fn build_trunk(cfg: &SharedConfig) -> TrunkBs {
    let config = cfg.config();

    let acl = AccessControl::new(
        Arc::new(config.acl.radio_id_table()),
        Arc::new(config.acl.talkgroup_rules()),
    );
    let affiliations = Affiliations::new(&config.trunk.channels);

    TrunkBs::new(cfg.clone(), acl, affiliations, None, Box::new(NxdnScrambler::default()))
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "NXDN TrunkStation",
    long_about = "Runs the NXDN trunking control channel using the provided TOML configuration file"
)]
struct Args {
    /// Config file (required)
    #[arg(help = "TOML config with site/trunking parameters")]
    config: String,

    /// Write outbound frames (tag bytes included) to this file
    #[arg(long)]
    frame_dump: Option<String>,
}

fn main() {
    eprintln!("░█▀█░█░█░█▀▄░█▀█░░░░░▀█▀░█▀▄░█░█░█▀█░█░█░█▀▀░▀█▀░█▀█░▀█▀░▀█▀░█▀█░█▀█");
    eprintln!("░█░█░▄▀▄░█░█░█░█░▄▄▄░░█░░█▀▄░█░█░█░█░█▀▄░▀▀█░░█░░█▀█░░█░░░█░░█░█░█░█");
    eprintln!("░▀░▀░▀░▀░▀▀░░▀░▀░░░░░░▀░░▀░▀░▀▀▀░▀░▀░▀░▀░▀▀▀░░▀░░▀░▀░░▀░░▀▀▀░▀▀▀░▀░▀\n");

    let args = Args::parse();
    let cfg = load_config_from_toml(&args.config);
    let _log_guard = debug::setup_logging_default(cfg.config().debug_log.clone());

    let mut trunk = build_trunk(&cfg);

    let mut frame_dump = args.frame_dump.map(|path| match File::create(&path) {
        Ok(f) => f,
        Err(e) => {
            println!("Failed to open frame dump {}: {}", path, e);
            std::process::exit(1);
        }
    });

    // Set up Ctrl+C handler for graceful shutdown
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .expect("failed to set Ctrl+C handler");

    tracing::info!(
        "control channel up, site ${:06X}, RAN {}, {} voice channels",
        cfg.config().site.location_id,
        cfg.config().site.ran,
        cfg.config().trunk.channels.len()
    );

    let mut frame_cnt: u8 = 0;
    let mut seq: u8 = 0;
    while running.load(Ordering::SeqCst) {
        trunk.write_control_data(frame_cnt, seq, false);
        trunk.clock(FRAME_PERIOD_MS as u32);

        while let Some(frame) = trunk.queue.pop() {
            let mut dump_failed = false;
            if let Some(f) = frame_dump.as_mut() {
                if let Err(e) = f.write_all(&frame) {
                    tracing::error!("failed writing frame dump: {}", e);
                    dump_failed = true;
                }
            }
            if dump_failed {
                frame_dump = None;
            }
        }

        frame_cnt = frame_cnt.wrapping_add(1);
        seq = (seq + 1) % BCAST_SEQ_LEN;
        std::thread::sleep(Duration::from_millis(FRAME_PERIOD_MS));
    }

    tracing::info!("shutting down");
}
