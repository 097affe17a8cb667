use creature_ik::{Creature, InputState, SpeciesConfig, Viewport};
use glam::Vec2;

const TICKS: u32 = 1200;

/// Headless demo: a lizard chasing a slowly orbiting target. Rendering is the
/// host's job; this just runs the model and logs the pose so the motion can
/// be eyeballed with RUST_LOG=info.
fn main() {
    env_logger::init();

    let viewport = Viewport::new(1920.0, 1080.0).with_header_offset(170.0);
    let center = Vec2::new(960.0, 540.0);
    let mut lizard = Creature::new(SpeciesConfig::lizard(), center);

    // start in seek mode
    let mut input = InputState {
        toggle_mode: true,
        ..InputState::default()
    };

    for tick in 0..TICKS {
        let phase = tick as f32 * 0.01;
        input.pointer =
            center + Vec2::new(phase.cos(), phase.sin()) * 600.0 + Vec2::new(0.0, 170.0);

        lizard.tick(&input, viewport);
        input.toggle_mode = false;

        if tick % 60 == 0 {
            let head = lizard.body().head();
            log::info!(
                "tick {tick:4}: head ({:7.1}, {:7.1}) angle {:5.2} tail bend {:+.3}",
                head.x,
                head.y,
                lizard.body().head_angle(),
                lizard.tail_curvature()
            );
            for (i, limb) in lizard.limbs().iter().enumerate() {
                let foot = limb.chain().effector();
                log::info!("         limb {i}: foot ({:7.1}, {:7.1})", foot.x, foot.y);
            }
        }
    }
}
