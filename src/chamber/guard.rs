//! Guard chamber: balls fall, the guard intercepts and kicks them away

use crate::persistence::{PersistError, decode_guard, encode_guard};
use crate::pos_to_pixel;
use crate::renderer::{Canvas, Image, colors, sprites};
use crate::sim::{Ball, Guard, integrate, resolve_guard_collision};
use crate::tuning::{GuardTuning, PhysicsTuning, Tuning};

use super::Chamber;

pub struct GuardChamber {
    guard: Guard,
    tuning: GuardTuning,
    physics: PhysicsTuning,
    /// Orb sprite and the canvas width it was rasterized for
    orb: Option<(usize, Image)>,
}

impl GuardChamber {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            guard: Guard::new(&tuning.guard),
            tuning: tuning.guard,
            physics: tuning.physics,
            orb: None,
        }
    }

    pub fn guard(&self) -> &Guard {
        &self.guard
    }

    fn orb_for(&mut self, canvas_width: usize) -> &Image {
        let radius_px = self.guard.radius * canvas_width as f32;
        let orb = self
            .orb
            .take()
            .filter(|(width, _)| *width == canvas_width)
            .unwrap_or_else(|| (canvas_width, sprites::orb(radius_px)));
        &self.orb.insert(orb).1
    }
}

impl Chamber for GuardChamber {
    fn name(&self) -> &'static str {
        "guard"
    }

    fn step(&mut self, balls: &mut [Ball], dt: f32) {
        for ball in balls.iter_mut() {
            integrate(ball, dt, &self.physics);
        }

        self.guard.update(balls, dt, &self.tuning, &self.physics);

        // The guard is immovable: any touch kicks the ball and ends the chase
        let mut collided = false;
        for ball in balls.iter_mut() {
            collided |= resolve_guard_collision(ball, &self.guard, self.tuning.restitution);
        }
        if collided {
            self.guard.release();
        }
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        let (width, height) = (canvas.width(), canvas.height());
        canvas.fill(colors::BACKGROUND);

        let guard_px = pos_to_pixel(self.guard.pos, width, height);
        let overlay = self.guard.target.filter(|_| self.tuning.debug_overlay);
        if let Some(target) = overlay {
            let target_px = pos_to_pixel(target.predicted_pos, width, height);
            let marker = (self.guard.radius * width as f32 * 0.5).max(2.0) as i32;
            canvas.fill_circle(target_px.x as i32, target_px.y as i32, marker, colors::TARGET);
            canvas.draw_line(
                guard_px.x as i32,
                guard_px.y as i32,
                target_px.x as i32,
                target_px.y as i32,
                colors::TARGET_PATH,
            );
        }

        let orb = self.orb_for(width);
        canvas.blit(orb, guard_px.x as i32, guard_px.y as i32);
    }

    fn save(&self) -> Vec<u8> {
        encode_guard(self.guard.pos)
    }

    fn load(&mut self, blob: &[u8]) -> Result<(), PersistError> {
        let pos = decode_guard(blob)?;
        self.guard.target = None;
        self.guard.pos = pos;
        self.guard.start_pos = pos;
        Ok(())
    }
}
