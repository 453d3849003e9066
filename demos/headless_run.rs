use std::time::{Duration, Instant};

use particle_sandbox::*;

fn main() {
    env_logger::init();

    let viewport = Viewport::from_window(1280.0, 720.0);
    let mut session = match Session::new(SandboxConfig::default(), viewport) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return;
        }
    };
    session.start();

    // Thrust up for one second, right for one second, then coast.
    let script: [(&str, u32); 3] = [("w", 60), ("d", 60), ("", 120)];
    let keyboard = session.keyboard();
    let mut now = Instant::now();

    for (key, frames) in script {
        keyboard.release_all();
        if !key.is_empty() {
            keyboard.press(key);
        }
        for _ in 0..frames {
            now += Duration::from_micros(16_667);
            session.frame(now);
        }
        if let Some(stats) = session.hud_stats() {
            println!("{stats}");
        }
    }

    if let Some(output) = session.output() {
        println!("camera origin: {:?}", output.camera);
    }
}
