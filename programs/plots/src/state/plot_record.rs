use anchor_lang::prelude::*;

use crate::codec::blueprint;
use crate::generator::{expand_with_site_size, PlotStore, PlotView, U256};

#[account]
#[derive(InitSpace)]
pub struct PlotRecord {
    /// Token id, big-endian
    pub token_id: [u8; 32],
    /// Packed blueprint, big-endian
    pub blueprint: [u8; 32],
    /// Site size the blueprint was validated against at mint
    pub site_size: u16,
    pub bump: u8,
    /// Reserved for future fields
    pub _reserved: [u8; 30],
}

impl PlotRecord {
    pub const SEED: &'static [u8] = b"plot";

    pub fn token_id(&self) -> U256 {
        U256::from_big_endian(&self.token_id)
    }

    pub fn store(&self) -> PlotStore {
        blueprint::unpack(blueprint::from_bytes(&self.blueprint))
    }

    /// Expands the stored blueprint with the site size it was minted under.
    pub fn view(&self) -> Result<PlotView> {
        expand_with_site_size(&self.store(), self.site_size)
    }

    /// Packs `store` into this record, failing on out-of-range fields.
    pub fn write(
        &mut self,
        token_id: [u8; 32],
        store: &PlotStore,
        site_size: u16,
        bump: u8,
    ) -> Result<()> {
        let packed = blueprint::pack(store)?;
        self.token_id = token_id;
        self.blueprint = blueprint::to_bytes(packed);
        self.site_size = site_size;
        self.bump = bump;
        self._reserved = [0u8; 30];
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate, PlotParams};

    fn empty() -> PlotRecord {
        PlotRecord {
            token_id: [0u8; 32],
            blueprint: [0u8; 32],
            site_size: 0,
            bump: 0,
            _reserved: [0u8; 30],
        }
    }

    fn params() -> PlotParams {
        PlotParams {
            region_id: 3,
            x: 10,
            y: 20,
            tier_id: 4,
            size: 60,
            element_sites: 5,
            fuel_sites: 5,
        }
    }

    #[test]
    fn test_write_then_view_uses_minted_site_size() {
        let store = generate(U256::from(77u64), &params(), 3).unwrap();
        let mut record = empty();
        let mut token_id = [0u8; 32];
        token_id[31] = 9;
        record.write(token_id, &store, 3, 254).unwrap();

        assert_eq!(record.token_id(), U256::from(9u64));
        assert_eq!(record.store(), store);
        assert_eq!(record.site_size, 3);
        assert_eq!(record.bump, 254);
        assert_eq!(record.view().unwrap(), expand_with_site_size(&store, 3).unwrap());
    }

    #[test]
    fn test_view_ignores_later_site_size() {
        // 60 / 3 leaves 176 usable cells, 60 / 6 only 36
        let mut p = params();
        p.element_sites = 30;
        p.fuel_sites = 30;
        let store = generate(U256::from(5u64), &p, 3).unwrap();
        assert!(expand_with_site_size(&store, 6).is_err());

        let mut record = empty();
        record.write([1u8; 32], &store, 3, 255).unwrap();
        assert_eq!(record.view().unwrap().site_counts(), (30, 30));
    }

    #[test]
    fn test_write_rejects_unpackable_store() {
        let mut store = generate(U256::one(), &params(), 2).unwrap();
        store.tier_id = 16;
        assert!(empty().write([0u8; 32], &store, 2, 0).is_err());
    }
}
