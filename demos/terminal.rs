//! Drives a dots progress bar from a fixed-step loop and prints frames as
//! ASCII. Run with `RUST_LOG=debug` to see the transition log.

use std::time::Duration;

use dotbar::prelude::*;

const COLUMNS: usize = 72;

fn main() {
    env_logger::init();

    let config = DotsConfig::default()
        .dot_count(5)
        .dot_radius(3.0)
        .line_half_width(1.0)
        .speed(40)
        .tick_unit(Duration::from_millis(2));

    let mut bar = match DotsProgressBar::new(config, COLUMNS as f32) {
        Ok(bar) => bar,
        Err(e) => {
            log::error!("invalid progress bar config: {}", e);
            return;
        }
    };
    bar.set_curve(Curve::EaseInOut);

    let tick = bar.config().tick_unit;
    let script = [true, true, true, false, true, true, true, true];

    for forward in script {
        let started = if forward { bar.advance() } else { bar.retreat() };
        if !started {
            println!("request ignored at stop {}", bar.settled_index());
            continue;
        }

        let mut frame_no = 0;
        loop {
            let result = bar.tick(tick);
            if bar.take_changes().contains(ChangeFlags::NEEDS_PAINT) && frame_no % 10 == 0 {
                print_frame(&bar.frame());
            }
            frame_no += 1;
            if !result.needs_frame() {
                break;
            }
            std::thread::sleep(tick);
        }
        println!("settled at stop {}\n", bar.settled_index());
    }
}

fn print_frame(frame: &Frame) {
    let commands = frame.draw_commands();
    let rows = frame.track.height().ceil() as usize;
    for row in 0..rows {
        let line: String = (0..COLUMNS)
            .map(|col| {
                let (x, y) = (col as f32 + 0.5, row as f32 + 0.5);
                let hit = commands.iter().rev().find(|c| covers(c, x, y));
                match hit {
                    Some(c) if c.color() == frame.front_color => '#',
                    Some(_) => '.',
                    None => ' ',
                }
            })
            .collect();
        println!("{}", line);
    }
    // The terminal grid only has whole cells.
    if let Some(active) = &frame.active {
        let params = active.params.rounded();
        println!(
            "fill {} radius {} from stop {}",
            params.fill_length, params.radius, active.anchor
        );
    }
    println!();
}

fn covers(command: &DrawCommand, x: f32, y: f32) -> bool {
    match command {
        DrawCommand::Rect { rect, .. } => rect.contains(x, y),
        DrawCommand::Circle { center, radius, .. } => {
            let (dx, dy) = (x - center.0, y - center.1);
            dx * dx + dy * dy <= radius * radius
        }
    }
}
