use wirecube::prelude::*;

fn main() -> Result<(), String> {
    let mut window = Window::new("wirecube", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut engine =
        Engine::new(window.width(), window.height()).map_err(|e| e.to_string())?;
    let mut clock = FrameClock::new(&window);

    while engine.is_running() {
        // Input
        let events = window.poll_events();
        let elapsed = clock.elapsed_seconds(&window);

        // Update
        engine.update(&events, elapsed);

        // Render
        engine.render();

        // Present; a failed blit costs one frame, not the program.
        if let Err(e) = window.present(engine.frame_buffer()) {
            eprintln!("present failed, dropping frame: {e}");
        }
    }

    Ok(())
}
