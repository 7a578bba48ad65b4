//! Circle Sim entry point
//!
//! Headless native runner: loads a scenario, replays a scripted key sequence
//! and prints the final body states as JSON.
//!
//! Usage: `circle-sim [preset | scatter:SEED | path.json] [ticks]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let source = args.first().map(String::as_str).unwrap_or("impulse");
    let ticks: u64 = match args.get(1).map(|s| s.parse()) {
        Some(Ok(n)) => n,
        Some(Err(_)) => {
            eprintln!("ticks must be a non-negative integer");
            std::process::exit(2);
        }
        None => 600,
    };

    let config = match load_config(source) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut state = match circle_sim::SimState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    log::info!("Circle Sim (native) starting: {} for {} ticks", source, ticks);
    run(&mut state, ticks);

    match serde_json::to_string_pretty(&state.bodies) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to serialize bodies: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host page; nothing to do here
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config(source: &str) -> circle_sim::ConfigResult<circle_sim::SimConfig> {
    use circle_sim::{ConfigError, Preset, SimConfig};

    if let Some(preset) = Preset::from_str(source) {
        return Ok(SimConfig::from_preset(preset));
    }
    if let Some(seed) = source.strip_prefix("scatter:") {
        let seed = seed
            .parse()
            .map_err(|_| ConfigError::unknown_preset(source))?;
        return Ok(SimConfig::scatter(seed, 30));
    }
    if source.ends_with(".json") {
        return SimConfig::load(source);
    }
    Err(ConfigError::unknown_preset(source))
}

/// Drive the simulation with a fixed key script
#[cfg(not(target_arch = "wasm32"))]
fn run(state: &mut circle_sim::SimState, ticks: u64) {
    use circle_sim::platform::KeyboardState;
    use circle_sim::platform::input::keys;
    use circle_sim::tick;

    // (tick, key, pressed)
    const SCRIPT: [(u64, u32, bool); 8] = [
        (0, keys::D, true),
        (30, keys::ARROW_DOWN, true),
        (90, keys::D, false),
        (120, keys::ARROW_DOWN, false),
        (180, keys::A, true),
        (200, keys::W, true),
        (260, keys::A, false),
        (300, keys::ARROW_UP, false),
    ];

    let mut keyboard = KeyboardState::new();
    let mut totals = (0u64, 0u64);

    for t in 0..ticks {
        for &(_, key, pressed) in SCRIPT.iter().filter(|(at, ..)| *at == t) {
            if pressed {
                keyboard.key_pressed(key);
            } else {
                keyboard.key_released(key);
            }
        }

        let stats = tick(state, &keyboard.snapshot());
        totals.0 += stats.pair_contacts as u64;
        totals.1 += stats.wall_contacts as u64;

        if (t + 1) % 120 == 0 {
            let p = state.total_momentum();
            log::info!(
                "tick {}: momentum ({:.3}, {:.3}), kinetic energy {:.3}",
                state.time_ticks,
                p.x,
                p.y,
                state.kinetic_energy()
            );
        }
    }

    log::info!(
        "Finished {} ticks: {} pair contacts, {} wall contacts",
        state.time_ticks,
        totals.0,
        totals.1
    );
}
