use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use rpg_roguelike::game::MovementIntent;
use rpg_roguelike::{CombatEffect, GameConfig, GameEvent, Simulation};

/// Length of the scripted demo, in 60 Hz frames
const DEMO_FRAMES: u32 = 120;

/// Frames during which the demo holds the game loop paused
const PAUSE_FRAME: u32 = 85;
const RESUME_FRAME: u32 = 90;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting RPG Roguelike simulation...");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(&path).with_context(|| format!("loading {}", path))?,
        None => GameConfig::default(),
    };

    let mut sim = Simulation::new(config.input_config()?);
    let hero = sim.spawn("Hero", config.stats.clone());

    let frame = Duration::from_micros(16_667);
    for n in 0..DEMO_FRAMES {
        for event in scripted_events(hero, n) {
            sim.push_event(event);
        }

        match n {
            PAUSE_FRAME => sim.game_loop_mut().pause(),
            RESUME_FRAME => sim.game_loop_mut().resume(),
            _ => {}
        }

        let report = sim.advance(frame);
        for intent in &report.intents {
            log_intent(n, intent);
        }
        if !report.is_clean() {
            info!("frame {:>3}: {} event(s) rejected", n, report.errors.len());
        }
    }

    let Some(character) = sim.character(hero) else {
        anyhow::bail!("character {} vanished", hero);
    };
    let status = &character.status;
    let game_loop = sim.game_loop();
    info!(
        "Finished after {} ticks over {} frames ({:.2}s fed)",
        game_loop.update_count(),
        game_loop.frame_count(),
        game_loop.elapsed().as_secs_f32(),
    );
    info!(
        "{}: health {}/{} ({:.0}%), mana {}/{}, attacking={}, last attack={:?}, yaw={:.1}",
        character.name,
        status.current_health(),
        status.max_health(),
        status.health_fraction() * 100.0,
        status.current_mana(),
        status.max_mana(),
        status.is_attacking(),
        status.attack_type().map(|kind| kind.tag()),
        character.control_rotation().yaw,
    );

    Ok(())
}

/// Input and encounter events the demo feeds in on a given frame
fn scripted_events(hero: u32, frame: u32) -> Vec<GameEvent> {
    match frame {
        0 => vec![GameEvent::axis(hero, "MoveForward", 1.0)],
        10 => vec![GameEvent::press(hero, "Sprint")],
        20 => vec![GameEvent::press(hero, "LightAttack")],
        25 => vec![GameEvent::press(hero, "HeavyAttack")],
        40 => vec![
            GameEvent::AttackFinished { character: hero },
            GameEvent::release(hero, "LightAttack"),
            GameEvent::release(hero, "HeavyAttack"),
        ],
        50 => vec![GameEvent::Combat {
            character: hero,
            effect: CombatEffect::Damage(30.0),
        }],
        60 => vec![
            GameEvent::axis(hero, "TurnRate", 1.0),
            GameEvent::Combat {
                character: hero,
                effect: CombatEffect::Damage(90.0),
            },
        ],
        80 => vec![
            GameEvent::axis(hero, "TurnRate", 0.0),
            GameEvent::Combat {
                character: hero,
                effect: CombatEffect::Heal(15.0),
            },
        ],
        100 => vec![
            GameEvent::release(hero, "Sprint"),
            GameEvent::axis(hero, "MoveForward", 0.0),
        ],
        _ => Vec::new(),
    }
}

fn log_intent(frame: u32, intent: &MovementIntent) {
    if frame % 20 == 0 {
        info!(
            "frame {:>3}: character {} input=({:.2}, {:.2}) velocity={:.0} jump={}",
            frame,
            intent.character,
            intent.input.x,
            intent.input.y,
            intent.desired_velocity.length(),
            intent.jump_held
        );
    }
}
