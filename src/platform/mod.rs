//! Platform layer
//!
//! The library itself holds no global state. On wasm32 the host talks to a
//! single [`Session`](crate::Session) kept by [`wasm`] behind C-style exports.

#[cfg(target_arch = "wasm32")]
pub mod wasm;

use crate::chamber::ChamberKind;

/// Resolve the host's chamber id, falling back to the default chamber
pub fn chamber_from_id(id: u32) -> ChamberKind {
    ChamberKind::from_id(id).unwrap_or_else(|| {
        let fallback = ChamberKind::default();
        log::warn!("unknown chamber id {}, using {}", id, fallback.as_str());
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_id_falls_back() {
        // A host that omits the id passes 0 and gets the guard
        assert_eq!(chamber_from_id(0), ChamberKind::Guard);
        assert_eq!(chamber_from_id(1), ChamberKind::Simple);
        assert_eq!(chamber_from_id(2), ChamberKind::Portals);
        assert_eq!(chamber_from_id(42), ChamberKind::Guard);
    }
}
