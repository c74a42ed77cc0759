//! Save blob encoding
//!
//! The guard chamber persists only the guard's position. The blob is a fixed
//! 16-byte little-endian envelope:
//!
//! | offset | field            |
//! |--------|------------------|
//! | 0      | magic `b"CHMB"`  |
//! | 4      | version (`1`)    |
//! | 8      | `x: f32`         |
//! | 12     | `y: f32`         |

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use thiserror::Error;

pub const SAVE_MAGIC: u32 = u32::from_le_bytes(*b"CHMB");
pub const SAVE_VERSION: u32 = 1;

/// Why a blob could not be loaded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    #[error("save blob is {found} bytes, expected {expected}")]
    Truncated { expected: usize, found: usize },

    #[error("bad save magic {0:#010x}")]
    BadMagic(u32),

    #[error("unsupported save version {0}")]
    UnsupportedVersion(u32),
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
struct GuardSave {
    magic: u32,
    version: u32,
    pos: [f32; 2],
}

pub const GUARD_SAVE_SIZE: usize = std::mem::size_of::<GuardSave>();

/// Encode a guard position
pub fn encode_guard(pos: Vec2) -> Vec<u8> {
    let save = GuardSave {
        magic: SAVE_MAGIC.to_le(),
        version: SAVE_VERSION.to_le(),
        pos: [
            f32::from_bits(pos.x.to_bits().to_le()),
            f32::from_bits(pos.y.to_bits().to_le()),
        ],
    };
    bytemuck::bytes_of(&save).to_vec()
}

/// Decode a guard position written by [`encode_guard`]
pub fn decode_guard(blob: &[u8]) -> Result<Vec2, PersistError> {
    if blob.len() != GUARD_SAVE_SIZE {
        return Err(PersistError::Truncated {
            expected: GUARD_SAVE_SIZE,
            found: blob.len(),
        });
    }
    let save: GuardSave = bytemuck::pod_read_unaligned(blob);

    let magic = u32::from_le(save.magic);
    if magic != SAVE_MAGIC {
        return Err(PersistError::BadMagic(magic));
    }
    let version = u32::from_le(save.version);
    if version != SAVE_VERSION {
        return Err(PersistError::UnsupportedVersion(version));
    }
    Ok(Vec2::new(
        f32::from_bits(u32::from_le(save.pos[0].to_bits())),
        f32::from_bits(u32::from_le(save.pos[1].to_bits())),
    ))
}
