//! Simple chamber: one static surface to bounce on

use crate::pos_to_pixel;
use crate::renderer::{Canvas, colors};
use crate::sim::{Ball, Surface, bounce, integrate, surface_contact};
use crate::tuning::{PhysicsTuning, Tuning};

use super::Chamber;

pub struct SimpleChamber {
    surface: Surface,
    restitution: f32,
    physics: PhysicsTuning,
}

impl SimpleChamber {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            surface: Surface::new(tuning.surface.a, tuning.surface.b),
            restitution: tuning.surface.restitution,
            physics: tuning.physics,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}

impl Chamber for SimpleChamber {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn step(&mut self, balls: &mut [Ball], dt: f32) {
        for ball in balls.iter_mut() {
            integrate(ball, dt, &self.physics);
            if let Some(contact) = surface_contact(&self.surface, ball) {
                bounce(ball, &contact, self.restitution);
            }
        }
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        let (width, height) = (canvas.width(), canvas.height());
        canvas.fill(colors::BACKGROUND);

        let a = pos_to_pixel(self.surface.a, width, height);
        let b = pos_to_pixel(self.surface.b, width, height);
        canvas.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, colors::SURFACE);
    }
}
