//! SDL2 host: window, presentation and input polling.
//!
//! The framebuffer is small (320x240 by default) and is presented stretched
//! by an integer pixel scale. Pointer coordinates are converted back into
//! framebuffer pixels before they reach the engine.

use std::path::PathBuf;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::engine::FrameInput;
use crate::math::vec2::Vec2;

/// Everything the host learned from one round of event polling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub quit: bool,
    pub input: FrameInput,
    /// Files dropped onto the window since the last poll.
    pub dropped_files: Vec<PathBuf>,
}

pub struct FrameLimiter {
    previous_frame_time: u64,
    frame_target_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window, fps: u32) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
            frame_target_time: 1000 / fps.max(1) as u64,
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    /// Delta time represents the time elapsed since the last call to this method.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < self.frame_target_time {
            let time_to_wait = self.frame_target_time - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

pub struct Window {
    // Declared first so it is dropped before the creator it borrows from.
    texture: sdl2::render::Texture<'static>,
    // Owns the allocation `texture` borrows from; never read directly.
    #[allow(dead_code)]
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
    pixel_scale: u32,
    frame: u64,
}

impl Window {
    /// Open a window showing a `width` x `height` framebuffer at `pixel_scale`.
    pub fn new(title: &str, width: u32, height: u32, pixel_scale: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width * pixel_scale, height * pixel_scale)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // texture is dropped before texture_creator by struct field order.
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
            pixel_scale,
            frame: 0,
        })
    }

    /// Drain pending events and sample the pointer for this frame.
    pub fn poll_events(&mut self) -> InputState {
        let mut state = InputState::default();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => state.quit = true,
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Right,
                    ..
                } => state.input.secondary_pressed = true,
                Event::DropFile { filename, .. } => {
                    state.dropped_files.push(PathBuf::from(filename))
                }
                _ => {}
            }
        }

        let mouse = self.event_pump.mouse_state();
        let scale = self.pixel_scale as f32;
        state.input.pointer = Vec2::new(mouse.x() as f32 / scale, mouse.y() as f32 / scale);
        state.input.primary_down = mouse.left();
        state.input.frame = self.frame;
        self.frame += 1;

        state
    }

    /// Upload an ARGB8888 frame and show it stretched to the window.
    pub fn present(&mut self, buffer: &[u8]) -> Result<(), String> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(
            &self.texture,
            None,
            Some(Rect::new(
                0,
                0,
                self.width * self.pixel_scale,
                self.height * self.pixel_scale,
            )),
        )?;
        self.canvas.present();
        Ok(())
    }

    /// Show the status line in the title bar.
    pub fn set_title(&mut self, title: &str) -> Result<(), String> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| e.to_string())
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
