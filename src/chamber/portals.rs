//! Portals chamber: two linked portals, a ball entering one leaves the other

use glam::Vec2;

use crate::pos_to_pixel;
use crate::renderer::{Canvas, Image, colors, sprites};
use crate::sim::{Ball, Portal, integrate, surface_contact, teleport};
use crate::tuning::{PhysicsTuning, Tuning};

use super::Chamber;

const BLUE_START: Vec2 = Vec2::new(0.805, 0.3);
const BLUE_END: Vec2 = Vec2::new(0.805, 0.35);
const BLUE_ROTATION_DEG: f32 = 45.0;
const BLUE_DURATION: f32 = 0.7;

const ORANGE_START: Vec2 = Vec2::new(0.25, 0.1);
const ORANGE_END: Vec2 = Vec2::new(0.25, 0.15);
const ORANGE_DURATION: f32 = 0.5;

pub struct PortalsChamber {
    /// Blue then orange; each one exits through the other
    portals: [Portal; 2],
    animated: [bool; 2],
    physics: PhysicsTuning,
    /// Portal sprites and the canvas width they were rasterized for
    sprites: Option<(usize, [Image; 2])>,
}

impl PortalsChamber {
    pub fn new(tuning: &Tuning) -> Self {
        let radii = (tuning.portals.rad_x, tuning.portals.rad_y);
        let blue = Portal::new(
            BLUE_START,
            BLUE_END,
            colors::PORTAL_BLUE,
            radii,
            BLUE_ROTATION_DEG.to_radians(),
            BLUE_DURATION,
        );
        let orange = Portal::new(
            ORANGE_START,
            ORANGE_END,
            colors::PORTAL_ORANGE,
            radii,
            0.0,
            ORANGE_DURATION,
        );

        Self {
            portals: [blue, orange],
            animated: [false, tuning.portals.animate_orange],
            physics: tuning.physics,
            sprites: None,
        }
    }

    pub fn portals(&self) -> &[Portal; 2] {
        &self.portals
    }

    fn sprites_for(&mut self, canvas_width: usize) -> &[Image; 2] {
        let scale = canvas_width as f32;
        let portals = &self.portals;
        let sprites = self
            .sprites
            .take()
            .filter(|(width, _)| *width == canvas_width)
            .unwrap_or_else(|| {
                let rasterize = |p: &Portal| {
                    sprites::portal(p.rad_x * scale, p.rad_y * scale, p.rotation, p.color)
                };
                (canvas_width, [rasterize(&portals[0]), rasterize(&portals[1])])
            });
        &self.sprites.insert(sprites).1
    }
}

impl Chamber for PortalsChamber {
    fn name(&self) -> &'static str {
        "portals"
    }

    fn step(&mut self, balls: &mut [Ball], dt: f32) {
        for ball in balls.iter_mut() {
            integrate(ball, dt, &self.physics);
        }

        for ball in balls.iter_mut() {
            // At most one trip per step, otherwise the exit could bounce it straight back
            for entry in 0..self.portals.len() {
                let entrance = &self.portals[entry];
                let exit = &self.portals[(entry + 1) % self.portals.len()];
                if surface_contact(&entrance.surface(), ball).is_some() {
                    teleport(ball, entrance, exit);
                    break;
                }
            }
        }

        for (portal, animated) in self.portals.iter_mut().zip(self.animated) {
            if animated {
                portal.update(dt);
            }
        }
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        let (width, height) = (canvas.width(), canvas.height());
        canvas.fill(colors::BACKGROUND);

        let centres = self.portals.map(|p| pos_to_pixel(p.pos, width, height));
        let sprites = self.sprites_for(width);
        for (sprite, centre) in sprites.iter().zip(centres) {
            canvas.blit(sprite, centre.x as i32, centre.y as i32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn still_tuning() -> Tuning {
        let mut tuning = Tuning::default();
        tuning.portals.animate_orange = false;
        tuning
    }

    #[test]
    fn test_ball_on_orange_exits_blue() {
        let mut chamber = PortalsChamber::new(&still_tuning());
        let mut balls = [Ball::new(Vec2::new(0.25, 0.115), 0.02, Vec2::new(0.0, -0.5))];
        let speed = balls[0].vel.length();

        chamber.step(&mut balls, DT);

        let blue = chamber.portals()[0];
        let reach = blue.rad_x + 3.0 * balls[0].radius;
        assert!(balls[0].pos.distance(blue.pos) < reach, "ball at {:?}", balls[0].pos);
        // Gravity adds a little over one step; the turn itself keeps speed
        assert!((balls[0].vel.length() - speed).abs() < 0.2);
    }

    #[test]
    fn test_ball_clear_of_portals_just_falls() {
        let mut chamber = PortalsChamber::new(&still_tuning());
        let mut balls = [Ball::new(Vec2::new(0.5, 0.6), 0.02, Vec2::ZERO)];
        chamber.step(&mut balls, DT);
        assert!(balls[0].pos.y < 0.6);
        assert!((balls[0].pos.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_only_orange_moves() {
        let mut chamber = PortalsChamber::new(&Tuning::default());
        let mut balls: [Ball; 0] = [];
        for _ in 0..10 {
            chamber.step(&mut balls, DT);
        }
        assert_eq!(chamber.portals()[0].pos, BLUE_START);
        assert!(chamber.portals()[1].pos.y > ORANGE_START.y);

        let mut still = PortalsChamber::new(&still_tuning());
        still.step(&mut balls, DT);
        assert_eq!(still.portals()[1].pos, ORANGE_START);
    }

    #[test]
    fn test_render_draws_both_portals() {
        let mut chamber = PortalsChamber::new(&still_tuning());
        let (w, h) = (300usize, 210usize);
        let mut pixels = vec![0u32; w * h];
        let mut canvas = Canvas::new(&mut pixels, w, h);
        chamber.render(&mut canvas);

        for portal in chamber.portals() {
            let c = pos_to_pixel(portal.pos, w, h);
            assert_eq!(canvas.get(c.x as i32, c.y as i32), Some(portal.color));
        }
        assert_eq!(canvas.get(0, 0), Some(colors::BACKGROUND));
    }

    #[test]
    fn test_has_nothing_to_save() {
        let chamber = PortalsChamber::new(&Tuning::default());
        assert!(chamber.save().is_empty());
    }
}
