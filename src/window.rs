//! SDL2 window host and frame clock.
//!
//! SDL is used only for window management, input delivery, presentation,
//! and timing; every pixel comes from the CPU-side renderer.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

/// Keys the application reacts to. Anything else is dropped at the
/// translation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Left,
    Right,
    Up,
    Down,
    Space,
    Num1,
    Num2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

fn translate_key(keycode: Keycode) -> Option<Key> {
    match keycode {
        Keycode::Escape => Some(Key::Escape),
        Keycode::Left => Some(Key::Left),
        Keycode::Right => Some(Key::Right),
        Keycode::Up => Some(Key::Up),
        Keycode::Down => Some(Key::Down),
        Keycode::Space => Some(Key::Space),
        Keycode::Num1 => Some(Key::Num1),
        Keycode::Num2 => Some(Key::Num2),
        _ => None,
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    texture: sdl2::render::Texture<'static>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    /// Create a centered, fixed-size window with a streaming texture sized
    /// to the client area. The pixel buffer dimensions come from here and
    /// stay fixed for the life of the program.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // We ensure texture is dropped before texture_creator by struct field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            canvas,
            texture_creator,
            texture,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    /// Drain every pending platform event into a batch. Never blocks; an
    /// empty batch means nothing happened since the last poll.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(WindowEvent::Quit),
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => {
                    if let Some(key) = translate_key(keycode) {
                        events.push(WindowEvent::KeyDown(key));
                    }
                }
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => {
                    if let Some(key) = translate_key(keycode) {
                        events.push(WindowEvent::KeyUp(key));
                    }
                }
                _ => {}
            }
        }
        events
    }

    /// Upload the frame bytes (32-bit ARGB, top-down rows) and flip.
    pub fn present(&mut self, buffer: &[u8]) -> Result<(), String> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

/// Elapsed-time readings from SDL's high-resolution performance counter.
///
/// Never sleeps: the loop runs as fast as presentation allows, and pacing
/// is handled by the engine's step clamp instead.
pub struct FrameClock {
    previous: u64,
}

impl FrameClock {
    pub fn new(window: &Window) -> Self {
        Self {
            previous: window.timer().performance_counter(),
        }
    }

    /// Seconds since the previous reading.
    pub fn elapsed_seconds(&mut self, window: &Window) -> f32 {
        let now = window.timer().performance_counter();
        let frequency = window.timer().performance_frequency();
        let elapsed = (now - self.previous) as f64 / frequency as f64;
        self.previous = now;
        elapsed as f32
    }
}
