//! Host-facing context
//!
//! A `Session` owns the memory the host reads and writes directly (balls,
//! canvas and save buffer) together with one chamber. Buffers are allocated
//! once in [`Session::new`] and never resized, so raw pointers handed to the
//! host stay valid for the session's lifetime. The save buffer is sized to
//! the chamber's blob up front so the host can write a blob in before `load`.

use bytemuck::Zeroable;
use log::{info, warn};

use crate::chamber::{Chamber, ChamberKind};
use crate::persistence::PersistError;
use crate::renderer::Canvas;
use crate::sim::Ball;
use crate::tuning::Tuning;

pub struct Session {
    kind: ChamberKind,
    chamber: Box<dyn Chamber>,
    balls: Vec<Ball>,
    canvas: Vec<u32>,
    save: Vec<u8>,
}

impl Session {
    pub fn new(kind: ChamberKind, max_balls: usize, max_canvas: usize, tuning: &Tuning) -> Self {
        info!(
            "session init: chamber={}, max_balls={}, max_canvas={}",
            kind.as_str(),
            max_balls,
            max_canvas
        );
        let chamber = kind.build(tuning);
        let save = chamber.save();
        Self {
            kind,
            chamber,
            balls: vec![Ball::zeroed(); max_balls],
            canvas: vec![0; max_canvas],
            save,
        }
    }

    pub fn kind(&self) -> ChamberKind {
        self.kind
    }

    pub fn chamber(&self) -> &dyn Chamber {
        self.chamber.as_ref()
    }

    pub fn max_balls(&self) -> usize {
        self.balls.len()
    }

    /// Advance the first `num_balls` balls by `dt` seconds
    pub fn step(&mut self, num_balls: usize, dt: f32) {
        let n = if num_balls > self.balls.len() {
            warn!(
                "step: {} balls requested, capacity is {}",
                num_balls,
                self.balls.len()
            );
            self.balls.len()
        } else {
            num_balls
        };
        self.chamber.step(&mut self.balls[..n], dt);
    }

    /// Redraw a `width × height` viewport at the start of the canvas buffer
    pub fn render(&mut self, width: usize, height: usize) {
        let capacity = self.canvas.len();
        let height = match width.checked_mul(height) {
            Some(area) if area <= capacity => height,
            _ => {
                let fit = capacity.checked_div(width).unwrap_or(0);
                warn!(
                    "render: {}x{} exceeds canvas capacity {}, clamping height to {}",
                    width, height, capacity, fit
                );
                fit
            }
        };
        let mut canvas = Canvas::new(&mut self.canvas, width, height);
        self.chamber.render(&mut canvas);
    }

    /// Snapshot the chamber into the save buffer
    pub fn save(&mut self) {
        let blob = self.chamber.save();
        if blob.len() == self.save.len() {
            self.save.copy_from_slice(&blob);
        } else {
            self.save = blob;
        }
    }

    /// Restore the chamber from the save buffer
    pub fn load(&mut self) -> Result<(), PersistError> {
        self.chamber.load(&self.save)
    }

    /// Place a blob in the save buffer, as the host does before `load`
    pub fn set_save_bytes(&mut self, blob: &[u8]) {
        self.save.clear();
        self.save.extend_from_slice(blob);
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    pub fn canvas(&self) -> &[u32] {
        &self.canvas
    }

    pub fn save_bytes(&self) -> &[u8] {
        &self.save
    }

    pub fn balls_ptr(&mut self) -> *mut Ball {
        self.balls.as_mut_ptr()
    }

    pub fn canvas_ptr(&mut self) -> *mut u32 {
        self.canvas.as_mut_ptr()
    }

    /// Host-writable save buffer, `save_bytes().len()` bytes long
    pub fn save_ptr(&mut self) -> *mut u8 {
        self.save.as_mut_ptr()
    }
}
