use anchor_lang::prelude::*;

use crate::errors::PlotError;
use crate::generator::{
    place_sites, resolve_landmark, LandmarkKind, Seed, DEFAULT_SITE_SIZE, MAX_TIER, U256,
};

/// Generator version written into every new blueprint.
pub const GENERATOR_VERSION: u8 = 1;

/// Bits of the seed that survive into the stored record.
pub const STORED_SEED_BITS: usize = 160;

/// Compact plot record, as stored on chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlotStore {
    pub version: u8,
    pub region_id: u16,
    pub x: u16,
    pub y: u16,
    pub tier_id: u8,
    /// Side length of the plot grid
    pub size: u16,
    pub landmark_type_id: u8,
    pub element_sites: u8,
    pub fuel_sites: u8,
    /// Generation seed, at most 160 bits wide
    pub seed: Seed,
}

/// Inputs chosen at mint time, before a seed is applied.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotParams {
    pub region_id: u16,
    pub x: u16,
    pub y: u16,
    pub tier_id: u8,
    pub size: u16,
    pub element_sites: u8,
    pub fuel_sites: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Element,
    Fuel,
}

/// A resource site's type and plot-local top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Site {
    pub type_id: u8,
    pub x: u16,
    pub y: u16,
}

impl Site {
    pub fn resource(&self) -> ResourceKind {
        if self.type_id <= 3 {
            ResourceKind::Element
        } else {
            ResourceKind::Fuel
        }
    }
}

/// A plot record with its sites enumerated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotView {
    pub version: u8,
    pub region_id: u16,
    pub x: u16,
    pub y: u16,
    pub tier_id: u8,
    pub size: u16,
    pub landmark_type_id: u8,
    pub seed: Seed,
    pub sites: Vec<Site>,
}

impl PlotView {
    pub fn landmark(&self) -> Result<LandmarkKind> {
        LandmarkKind::from_type_id(self.landmark_type_id)
    }

    /// (element, fuel) site counts
    pub fn site_counts(&self) -> (usize, usize) {
        let elements = self
            .sites
            .iter()
            .filter(|site| site.resource() == ResourceKind::Element)
            .count();
        (elements, self.sites.len() - elements)
    }
}

pub fn truncate_seed(seed: Seed) -> Seed {
    seed & ((U256::one() << STORED_SEED_BITS) - U256::one())
}

/// Builds the record for a freshly minted plot.
///
/// The landmark is read from the full seed; only the low 160 bits are kept,
/// and every later expansion works from those. The sites are placed once here
/// so a record that could not be expanded is never handed out.
pub fn generate(seed: Seed, params: &PlotParams, site_size: u16) -> Result<PlotStore> {
    require!(params.tier_id <= MAX_TIER, PlotError::InvalidTier);

    let stored_seed = truncate_seed(seed);
    place_sites(
        stored_seed,
        params.element_sites,
        params.fuel_sites,
        params.size,
        site_size,
    )?;

    let landmark = resolve_landmark(seed, params.tier_id);

    Ok(PlotStore {
        version: GENERATOR_VERSION,
        region_id: params.region_id,
        x: params.x,
        y: params.y,
        tier_id: params.tier_id,
        size: params.size,
        landmark_type_id: landmark.type_id(),
        element_sites: params.element_sites,
        fuel_sites: params.fuel_sites,
        seed: stored_seed,
    })
}

/// Expands a record using the default site size.
pub fn expand(store: &PlotStore) -> Result<PlotView> {
    expand_with_site_size(store, DEFAULT_SITE_SIZE)
}

pub fn expand_with_site_size(store: &PlotStore, site_size: u16) -> Result<PlotView> {
    let sites = place_sites(
        store.seed,
        store.element_sites,
        store.fuel_sites,
        store.size,
        site_size,
    )?;

    Ok(PlotView {
        version: store.version,
        region_id: store.region_id,
        x: store.x,
        y: store.y,
        tier_id: store.tier_id,
        size: store.size,
        landmark_type_id: store.landmark_type_id,
        seed: store.seed,
        sites,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> PlotParams {
        PlotParams {
            region_id: 7,
            x: 100,
            y: 200,
            tier_id: 3,
            size: 90,
            element_sites: 9,
            fuel_sites: 6,
        }
    }

    #[test]
    fn test_generate_truncates_seed() {
        let seed = U256::MAX;
        let store = generate(seed, &params(), DEFAULT_SITE_SIZE).unwrap();
        assert_eq!(store.seed, (U256::one() << 160u32) - U256::one());
        assert_eq!(store.version, GENERATOR_VERSION);
        assert_eq!(store.element_sites, 9);
        assert_eq!(store.fuel_sites, 6);
    }

    #[test]
    fn test_generate_landmark_uses_full_seed() {
        let seed = U256::from(12345u64) | (U256::one() << 200u32);
        let store = generate(seed, &params(), DEFAULT_SITE_SIZE).unwrap();
        // 12345 + 2^200 is 1 mod 3, the truncated 12345 alone is 0 mod 3
        assert_eq!(store.landmark_type_id, 2);
        assert_eq!(store.seed, U256::from(12345u64));
        assert_eq!(resolve_landmark(store.seed, 3).type_id(), 1);
    }

    #[test]
    fn test_generate_rejects_unknown_tier() {
        let mut p = params();
        p.tier_id = 6;
        let err = generate(U256::one(), &p, DEFAULT_SITE_SIZE).unwrap_err();
        match err {
            anchor_lang::error::Error::AnchorError(e) => {
                assert_eq!(e.error_code_number, u32::from(PlotError::InvalidTier))
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_generate_near_full_grid() {
        // 68 / 2 gives a 540 cell diamond, 510 of them taken
        let mut p = params();
        p.size = 68;
        p.element_sites = 255;
        p.fuel_sites = 255;
        for s in 0..5u64 {
            let store = generate(U256::from(s), &p, DEFAULT_SITE_SIZE).unwrap();
            let view = expand(&store).unwrap();
            assert_eq!(view.site_counts(), (255, 255));
        }
    }

    #[test]
    fn test_generate_arena_and_plain_tiers() {
        let mut p = params();
        p.tier_id = 5;
        assert_eq!(generate(U256::from(1u64), &p, 2).unwrap().landmark_type_id, 7);
        p.tier_id = 1;
        assert_eq!(generate(U256::from(1u64), &p, 2).unwrap().landmark_type_id, 0);
    }

    #[test]
    fn test_generate_rejects_overfull_plot() {
        let mut p = params();
        p.size = 12;
        p.element_sites = 5;
        p.fuel_sites = 4;
        assert!(generate(U256::zero(), &p, 2).is_err());
    }

    #[test]
    fn test_expand_carries_fields_through() {
        let store = generate(U256::from(12345u64), &params(), DEFAULT_SITE_SIZE).unwrap();
        let view = expand(&store).unwrap();

        assert_eq!(view.version, store.version);
        assert_eq!(view.region_id, 7);
        assert_eq!((view.x, view.y), (100, 200));
        assert_eq!(view.tier_id, 3);
        assert_eq!(view.size, 90);
        assert_eq!(view.landmark_type_id, store.landmark_type_id);
        assert_eq!(view.seed, store.seed);
        assert_eq!(view.site_counts(), (9, 6));
        assert!(matches!(view.landmark().unwrap(), LandmarkKind::Element(_)));
    }

    #[test]
    fn test_expand_is_deterministic() {
        let store = generate(U256::from(4242u64), &params(), DEFAULT_SITE_SIZE).unwrap();
        assert_eq!(expand(&store).unwrap(), expand(&store).unwrap());
    }

    #[test]
    fn test_expand_keeps_generation_order() {
        let store = generate(U256::from(12345u64), &params(), DEFAULT_SITE_SIZE).unwrap();
        let view = expand(&store).unwrap();
        let kinds: Vec<ResourceKind> = view.sites.iter().map(Site::resource).collect();
        assert!(kinds[..9].iter().all(|&k| k == ResourceKind::Element));
        assert!(kinds[9..].iter().all(|&k| k == ResourceKind::Fuel));
    }
}
