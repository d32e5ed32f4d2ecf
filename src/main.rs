//! Headless dev harness: exercises the apportionment engine, both animated
//! sequences, and the two stores against a demo ratio, logging what the UI
//! layer would render.

use std::panic;

use anyhow::Result;
use clap::Parser;

use bead_loom::config::{DEMO_GOAL, PERSISTENCE, demo_colors};
use bead_loom::models::wire::ArrangeRequest;
use bead_loom::{AnimationController, Cli, DraftStore, HistoryEntry, HistoryStore, RatioContainer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, global_level)
        .filter(Some("bead_loom"), my_code_level)
        .init();

    let args = Cli::parse();
    let goal = DEMO_GOAL;
    let colors = demo_colors();
    let ratios = RatioContainer {
        current: goal,
        goal,
        colors: colors.clone(),
    };

    // 1. One-shot apportionment at the requested count.
    let controller = AnimationController::new();
    controller.set_num_beads(args.beads);
    controller.set_speed(args.speed);
    controller.randomize(&goal, &colors);
    let bracelet = controller.bracelet();
    let summary: Vec<&str> = bracelet
        .iter()
        .map(|b| match b.color_hex.as_str() {
            "#FFFFFF" => "metal",
            "#00A550" => "wood",
            "#0000FF" => "water",
            "#FF0000" => "fire",
            "#8B4513" => "earth",
            _ => "pad",
        })
        .collect();
    log::info!("Apportioned {} beads: {:?}", controller.num_beads(), summary);

    // 2. Animated sequences (real time; scaled by --speed).
    controller.flash_randomize(&goal, &colors).await;
    log::info!("Flash done: {} frames", controller.poll_frames().len());
    controller.grow(&goal, &colors).await;
    log::info!("Grow done: {} frames", controller.poll_frames().len());

    // 3. Session history round-trip.
    let history_path = args.data_dir.join(PERSISTENCE.history.filename);
    let mut history = HistoryStore::load(&history_path);
    let entry = HistoryEntry::new(
        chrono::NaiveDate::from_ymd_opt(1990, 1, 1).expect("static date"),
        "12:00",
        "female",
        controller.num_beads(),
        "demo session",
        ratios.clone(),
    )
    .with_beads(
        controller
            .bracelet()
            .iter()
            .map(|b| b.color_hex.clone())
            .collect(),
    );
    let id = entry.id;
    history.add(entry.clone());
    history.upsert(HistoryEntry { id, ..entry });
    log::info!("History now holds {} entries at {}", history.len(), history_path.display());

    // 4. Draft store + outbound request shape.
    let mut drafts = DraftStore::open(&args.data_dir);
    drafts.edit(format!("{}\n// touched by the dev harness\n", drafts.text()));
    drafts.save();
    let request = ArrangeRequest::new(controller.num_beads(), ratios, drafts.payload());
    log::info!(
        "Outbound arrange request:\n{}",
        serde_json::to_string_pretty(&request)?
    );

    Ok(())
}
