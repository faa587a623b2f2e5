//! Range Drill - Headless Shooting Session
//!
//! Run with: `cargo run --bin range_drill [tuning.json]`
//!
//! Drives the firing range through a scripted drill with no window: walk
//! downrange, put two rounds on the backstop from the hip, sight in and
//! walk an aimed burst down onto the far plate, then take one jump shot.
//! Every impact and effect is logged; set `RUST_LOG=debug` for per-shot
//! trace detail. Pass a JSON tuning file to override the default config.

use std::path::Path;

use hipfire_engine::combat::LogEffectSink;
use hipfire_engine::game::{FiringRange, TICK_RATE};
use hipfire_engine::input::{KeyCode, MouseButton};
use hipfire_engine::{load_config, ShooterConfig};

const DT: f32 = 1.0 / TICK_RATE;

/// Running totals for the end-of-drill summary.
#[derive(Default)]
struct Tally {
    shots: u32,
    plate_hits: u32,
}

fn main() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_secs()
    .try_init();

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(Path::new(&path)) {
            Ok(config) => {
                log::info!("[RangeDrill] loaded tuning from {path}");
                config
            }
            Err(err) => {
                eprintln!("error: failed to load tuning '{path}': {err}");
                std::process::exit(1);
            }
        },
        None => ShooterConfig::default(),
    };

    run_drill(&config);
}

fn run_drill(config: &ShooterConfig) {
    let mut range = FiringRange::with_config(config);
    let mut effects = LogEffectSink;
    let mut tally = Tally::default();

    log::info!(
        "[RangeDrill] {} plates downrange, {} Hz tick",
        range.targets().len(),
        TICK_RATE
    );

    // Walk downrange for a second and a half, then let the brakes settle.
    range.input_mut().handle_key(KeyCode::W, true);
    run_ticks(&mut range, &mut effects, 90, &mut tally);
    range.input_mut().handle_key(KeyCode::W, false);
    run_ticks(&mut range, &mut effects, 30, &mut tally);
    log::info!(
        "[RangeDrill] holding at {:.1?}, camera fov {:.1}",
        range.character().position(),
        range.view().fov_y_deg
    );

    // Two rounds from the hip.
    squeeze(&mut range, &mut effects, &mut tally);
    run_ticks(&mut range, &mut effects, 18, &mut tally);
    squeeze(&mut range, &mut effects, &mut tally);
    run_ticks(&mut range, &mut effects, 18, &mut tally);

    // Sight in and let the zoom settle.
    range.input_mut().handle_mouse_button(MouseButton::Right, true);
    run_ticks(&mut range, &mut effects, 60, &mut tally);
    log::info!(
        "[RangeDrill] sighted in, fov {:.1}, spread {:.2}",
        range.view().fov_y_deg,
        range.character().spread_multiplier()
    );

    // Walk five aimed rounds down the far plate with a slow mouse drag.
    for _ in 0..5 {
        range.input_mut().accumulate_mouse_delta(-3.0, 14.0);
        run_ticks(&mut range, &mut effects, 6, &mut tally);
        squeeze(&mut range, &mut effects, &mut tally);
        run_ticks(&mut range, &mut effects, 12, &mut tally);
    }

    // Off sights, then one jump shot to open the spread back up.
    range.input_mut().handle_mouse_button(MouseButton::Right, false);
    run_ticks(&mut range, &mut effects, 30, &mut tally);
    range.input_mut().handle_key(KeyCode::Space, true);
    run_ticks(&mut range, &mut effects, 12, &mut tally);
    let factors = range.character().spread_factors();
    log::info!(
        "[RangeDrill] airborne, spread {:.2} (air term {:.2})",
        range.character().spread_multiplier(),
        factors.in_air_factor
    );
    squeeze(&mut range, &mut effects, &mut tally);
    range.input_mut().handle_key(KeyCode::Space, false);
    run_ticks(&mut range, &mut effects, 60, &mut tally);

    log::info!(
        "[RangeDrill] drill complete: {} shots, {} plate hits, {} ticks",
        tally.shots,
        tally.plate_hits,
        range.tick()
    );
}

/// Advances a run of ticks, logging and tallying any shot that resolves.
fn run_ticks(range: &mut FiringRange, effects: &mut LogEffectSink, ticks: u32, tally: &mut Tally) {
    for _ in 0..ticks {
        if let Some(result) = range.advance(DT, effects) {
            tally.shots += 1;
            let spread = range.character().spread_multiplier();
            match range.target_containing(result.impact_point) {
                Some(slot) => {
                    tally.plate_hits += 1;
                    let target = &range.targets()[slot];
                    log::info!(
                        "[RangeDrill] hit the {} plate ({:.0} cm) at {:.1?}, spread {:.2}",
                        target.label,
                        target.range_cm,
                        result.impact_point,
                        spread
                    );
                }
                None => {
                    log::info!(
                        "[RangeDrill] impact at {:.1?}, spread {:.2}",
                        result.impact_point,
                        spread
                    );
                }
            }
        }
    }
}

/// Presses and releases the trigger across two ticks. The shot resolves on
/// the press edge.
fn squeeze(range: &mut FiringRange, effects: &mut LogEffectSink, tally: &mut Tally) {
    range.input_mut().handle_mouse_button(MouseButton::Left, true);
    run_ticks(range, effects, 1, tally);
    range.input_mut().handle_mouse_button(MouseButton::Left, false);
    run_ticks(range, effects, 1, tally);
}
