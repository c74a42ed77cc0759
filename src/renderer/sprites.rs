//! Procedural sprites
//!
//! Rasterized once per size change; chambers blit the cached result.

use glam::Vec2;

use super::colors;
use super::image::Image;

/// Soft glow width around a portal, in pixels
const PORTAL_GLOW_PX: f32 = 15.0;
/// Peak glow opacity
const PORTAL_GLOW_ALPHA: f32 = 0.75;

#[inline]
fn with_alpha(color: u32, alpha: f32) -> u32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u32;
    (a << 24) | (color & 0x00FF_FFFF)
}

#[inline]
fn mix_rgb(a: u32, b: u32, t: f32) -> u32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |shift: u32| {
        let ca = ((a >> shift) & 0xFF) as f32;
        let cb = ((b >> shift) & 0xFF) as f32;
        ((ca + (cb - ca) * t).round() as u32) << shift
    };
    channel(16) | channel(8) | channel(0)
}

/// Shaded ball sprite with an anti-aliased rim, `radius` in pixels
pub fn orb(radius: f32) -> Image {
    let radius = radius.max(1.0);
    let size = (radius * 2.0).ceil() as usize + 2;
    let centre = Vec2::splat(size as f32 / 2.0);
    let highlight = centre + Vec2::splat(-0.35 * radius);

    let mut image = Image::new(size, size);
    for y in 0..size {
        for x in 0..size {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let d = p.distance(centre);
            // One pixel of rim falloff
            let coverage = (radius - d + 0.5).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }
            let shine = 1.0 - p.distance(highlight) / (radius * 1.3);
            let rgb = mix_rgb(colors::GUARD, colors::GUARD_HIGHLIGHT, shine);
            image.data[x + y * size] = with_alpha(rgb, coverage);
        }
    }
    image
}

/// Filled ellipse with a soft glow, rotated by `rotation` radians
/// (counter-clockwise in logical space). Radii are in pixels; the result is
/// trimmed to its visible pixels.
pub fn portal(rad_x: f32, rad_y: f32, rotation: f32, color: u32) -> Image {
    let rad_x = rad_x.max(1.0);
    let rad_y = rad_y.max(1.0);
    let extent = rad_x.max(rad_y) + PORTAL_GLOW_PX + 1.0;
    let size = (extent * 2.0).ceil() as usize;
    let centre = Vec2::splat(size as f32 / 2.0);
    // Pixel rows grow downward: flip y, then undo the portal's rotation
    let unrotate = Vec2::from_angle(-rotation);

    let mut image = Image::new(size, size);
    for y in 0..size {
        for x in 0..size {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - centre;
            let local = unrotate.rotate(Vec2::new(p.x, -p.y));
            let e = ((local.x / rad_x).powi(2) + (local.y / rad_y).powi(2)).sqrt();

            let pixel = if e <= 1.0 {
                with_alpha(color, 1.0)
            } else {
                // Approximate distance past the rim along the minor radius
                let past = (e - 1.0) * rad_y.min(rad_x);
                if past >= PORTAL_GLOW_PX {
                    continue;
                }
                let fade = 1.0 - past / PORTAL_GLOW_PX;
                with_alpha(color, PORTAL_GLOW_ALPHA * fade * fade)
            };
            image.data[x + y * size] = pixel;
        }
    }
    image.trimmed()
}
