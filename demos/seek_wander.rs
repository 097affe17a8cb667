use creature_ik::{Creature, InputState, SpeciesConfig, Viewport};
use glam::Vec2;

/// A snake chasing a Lissajous curve, printing a coarse ASCII picture of the
/// pose every few hundred ticks.
fn main() {
    let viewport = Viewport::new(2000.0, 2000.0);
    let center = Vec2::new(1000.0, 1000.0);
    let mut snake = Creature::new(SpeciesConfig::snake(), center);

    let mut input = InputState {
        toggle_mode: true,
        ..InputState::default()
    };

    for tick in 0..3000u32 {
        let t = tick as f32 * 0.004;
        input.pointer = center + Vec2::new((3.0 * t).sin(), (2.0 * t).cos()) * 800.0;
        snake.tick(&input, viewport);
        input.toggle_mode = false;

        if tick % 300 == 0 {
            println!("tick {tick}:");
            print_pose(&snake, viewport);
        }
    }
}

fn print_pose(snake: &Creature, viewport: Viewport) {
    const COLS: usize = 72;
    const ROWS: usize = 24;
    let mut grid = vec![vec![' '; COLS]; ROWS];

    for (i, pos) in snake.body().positions().enumerate() {
        let col = (pos.x / viewport.width * COLS as f32) as isize;
        let row = (pos.y / viewport.height * ROWS as f32) as isize;
        if (0..COLS as isize).contains(&col) && (0..ROWS as isize).contains(&row) {
            grid[row as usize][col as usize] = if i == 0 { '@' } else { 'o' };
        }
    }

    for row in grid {
        println!("{}", row.into_iter().collect::<String>());
    }
    println!();
}
