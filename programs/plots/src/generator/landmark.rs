use anchor_lang::prelude::*;

use crate::errors::PlotError;
use crate::generator::{Seed, ELEMENT_TYPE_OFFSET, FUEL_TYPE_OFFSET, SUBTYPES_PER_RESOURCE, U256};

pub const ELEMENT_LANDMARK_TIER: u8 = 3;
pub const FUEL_LANDMARK_TIER: u8 = 4;
pub const ARENA_TIER: u8 = 5;
pub const MAX_TIER: u8 = ARENA_TIER;

pub const ARENA_LANDMARK_ID: u8 = 7;

/// Landmark at the center of a plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandmarkKind {
    None,
    /// Element landmark, type id 1..=3
    Element(u8),
    /// Fuel landmark, type id 4..=6
    Fuel(u8),
    Arena,
}

impl LandmarkKind {
    pub fn type_id(self) -> u8 {
        match self {
            LandmarkKind::None => 0,
            LandmarkKind::Element(id) | LandmarkKind::Fuel(id) => id,
            LandmarkKind::Arena => ARENA_LANDMARK_ID,
        }
    }

    pub fn from_type_id(type_id: u8) -> Result<Self> {
        match type_id {
            0 => Ok(LandmarkKind::None),
            1..=3 => Ok(LandmarkKind::Element(type_id)),
            4..=6 => Ok(LandmarkKind::Fuel(type_id)),
            ARENA_LANDMARK_ID => Ok(LandmarkKind::Arena),
            _ => err!(PlotError::InvalidLandmark),
        }
    }

    /// Whether a plot of `tier_id` may carry this landmark.
    pub fn fits_tier(self, tier_id: u8) -> bool {
        matches!(
            (tier_id, self),
            (ELEMENT_LANDMARK_TIER, LandmarkKind::Element(_))
                | (FUEL_LANDMARK_TIER, LandmarkKind::Fuel(_))
                | (ARENA_TIER, LandmarkKind::Arena)
                | (0..=2, LandmarkKind::None)
        )
    }
}

/// Landmark type for a tier, taken straight from the seed. No draw is
/// consumed, so the seed stays as it is for site placement.
pub fn resolve_landmark(seed: Seed, tier_id: u8) -> LandmarkKind {
    let pick = |offset: u32| (offset + (seed % U256::from(SUBTYPES_PER_RESOURCE)).low_u32()) as u8;
    match tier_id {
        ELEMENT_LANDMARK_TIER => LandmarkKind::Element(pick(ELEMENT_TYPE_OFFSET)),
        FUEL_LANDMARK_TIER => LandmarkKind::Fuel(pick(FUEL_TYPE_OFFSET)),
        ARENA_TIER => LandmarkKind::Arena,
        _ => LandmarkKind::None,
    }
}

/// Checks a tier and landmark pair arriving from outside the generator.
pub fn validate_landmark(tier_id: u8, landmark_type_id: u8) -> Result<LandmarkKind> {
    require!(tier_id <= MAX_TIER, PlotError::InvalidTier);
    let kind = LandmarkKind::from_type_id(landmark_type_id)?;
    require!(kind.fits_tier(tier_id), PlotError::InvalidLandmark);
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_tier_ignores_seed() {
        for s in 0..10u64 {
            assert_eq!(resolve_landmark(U256::from(s), 5), LandmarkKind::Arena);
        }
        assert_eq!(LandmarkKind::Arena.type_id(), 7);
    }

    #[test]
    fn test_tiers_without_landmark() {
        let seed = U256::from(99u64);
        for tier in [0u8, 1, 2, 6, 15, 255] {
            assert_eq!(resolve_landmark(seed, tier), LandmarkKind::None);
        }
    }

    #[test]
    fn test_element_and_fuel_ranges() {
        for s in 0..50u64 {
            let seed = U256::from(s) * U256::from(0x9e37_79b9u64);
            assert!((1..=3).contains(&resolve_landmark(seed, 3).type_id()));
            assert!((4..=6).contains(&resolve_landmark(seed, 4).type_id()));
        }
    }

    #[test]
    fn test_pinned_landmarks() {
        let element = [1u8, 2, 3, 1, 2, 3];
        let fuel = [4u8, 5, 6, 4, 5, 6];
        for s in 0..6u64 {
            let seed = U256::from(s);
            assert_eq!(resolve_landmark(seed, 3), LandmarkKind::Element(element[s as usize]));
            assert_eq!(resolve_landmark(seed, 4), LandmarkKind::Fuel(fuel[s as usize]));
        }

        // 2^200 is 1 mod 3
        assert_eq!(
            resolve_landmark(U256::one() << 200u32, 3),
            LandmarkKind::Element(2)
        );
    }

    #[test]
    fn test_type_id_conversion() {
        for id in 0..=7u8 {
            assert_eq!(LandmarkKind::from_type_id(id).unwrap().type_id(), id);
        }
        assert!(LandmarkKind::from_type_id(8).is_err());
    }

    #[test]
    fn test_validate_landmark_against_tier() {
        assert_eq!(validate_landmark(0, 0).unwrap(), LandmarkKind::None);
        assert_eq!(validate_landmark(3, 2).unwrap(), LandmarkKind::Element(2));
        assert_eq!(validate_landmark(4, 6).unwrap(), LandmarkKind::Fuel(6));
        assert_eq!(validate_landmark(5, 7).unwrap(), LandmarkKind::Arena);

        assert!(validate_landmark(1, 7).is_err());
        assert!(validate_landmark(3, 5).is_err());
        assert!(validate_landmark(4, 0).is_err());
        assert!(validate_landmark(5, 0).is_err());
        assert!(validate_landmark(6, 0).is_err());
        assert!(validate_landmark(15, 0).is_err());
    }

    #[test]
    fn test_resolved_landmark_always_validates() {
        for tier in 0..=MAX_TIER {
            for s in 0..6u64 {
                let kind = resolve_landmark(U256::from(s), tier);
                assert_eq!(validate_landmark(tier, kind.type_id()).unwrap(), kind);
            }
        }
    }
}
