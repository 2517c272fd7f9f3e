//! Fixed-width blueprint encoding of a [`PlotStore`].
//!
//! All fields share one 256-bit word, most significant first, in the order of
//! [`LAYOUT`]. Packing fails on any value wider than its slot instead of
//! truncating it.

use anchor_lang::prelude::*;

use crate::errors::PlotError;
use crate::generator::{PlotStore, U256};

pub const BLUEPRINT_BITS: u32 = 256;
pub const BLUEPRINT_BYTES: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Version,
    RegionId,
    X,
    Y,
    TierId,
    Size,
    LandmarkTypeId,
    ElementSites,
    FuelSites,
    Seed,
}

/// Field widths in bits, most significant field first.
pub const LAYOUT: [(Field, u32); 10] = [
    (Field::Version, 8),
    (Field::RegionId, 16),
    (Field::X, 16),
    (Field::Y, 16),
    (Field::TierId, 4),
    (Field::Size, 16),
    (Field::LandmarkTypeId, 4),
    (Field::ElementSites, 8),
    (Field::FuelSites, 8),
    (Field::Seed, 160),
];

const fn layout_bits() -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < LAYOUT.len() {
        total += LAYOUT[i].1;
        i += 1;
    }
    total
}

const _: () = assert!(layout_bits() == BLUEPRINT_BITS);

fn mask(width: u32) -> U256 {
    (U256::one() << width) - U256::one()
}

/// Appends fields in [`LAYOUT`] order.
struct BlueprintWriter {
    word: U256,
    next: usize,
}

impl BlueprintWriter {
    fn new() -> Self {
        Self {
            word: U256::zero(),
            next: 0,
        }
    }

    fn put(&mut self, field: Field, value: impl Into<U256>) -> Result<()> {
        let (expected, width) = LAYOUT[self.next];
        debug_assert_eq!(expected, field);

        let value = value.into();
        require!(value.bits() <= width as usize, PlotError::FieldOverflow);

        self.word = (self.word << width) | value;
        self.next += 1;
        Ok(())
    }

    fn finish(self) -> U256 {
        debug_assert_eq!(self.next, LAYOUT.len());
        self.word
    }
}

/// Reads fields back in [`LAYOUT`] order.
struct BlueprintReader {
    word: U256,
    consumed: u32,
    next: usize,
}

impl BlueprintReader {
    fn new(word: U256) -> Self {
        Self {
            word,
            consumed: 0,
            next: 0,
        }
    }

    fn take(&mut self, field: Field) -> U256 {
        let (expected, width) = LAYOUT[self.next];
        debug_assert_eq!(expected, field);

        self.consumed += width;
        self.next += 1;
        (self.word >> (BLUEPRINT_BITS - self.consumed)) & mask(width)
    }

    fn take_u8(&mut self, field: Field) -> u8 {
        self.take(field).low_u32() as u8
    }

    fn take_u16(&mut self, field: Field) -> u16 {
        self.take(field).low_u32() as u16
    }
}

pub fn pack(store: &PlotStore) -> Result<U256> {
    let mut writer = BlueprintWriter::new();
    writer.put(Field::Version, store.version)?;
    writer.put(Field::RegionId, store.region_id)?;
    writer.put(Field::X, store.x)?;
    writer.put(Field::Y, store.y)?;
    writer.put(Field::TierId, store.tier_id)?;
    writer.put(Field::Size, store.size)?;
    writer.put(Field::LandmarkTypeId, store.landmark_type_id)?;
    writer.put(Field::ElementSites, store.element_sites)?;
    writer.put(Field::FuelSites, store.fuel_sites)?;
    writer.put(Field::Seed, store.seed)?;
    Ok(writer.finish())
}

pub fn unpack(blueprint: U256) -> PlotStore {
    let mut reader = BlueprintReader::new(blueprint);
    PlotStore {
        version: reader.take_u8(Field::Version),
        region_id: reader.take_u16(Field::RegionId),
        x: reader.take_u16(Field::X),
        y: reader.take_u16(Field::Y),
        tier_id: reader.take_u8(Field::TierId),
        size: reader.take_u16(Field::Size),
        landmark_type_id: reader.take_u8(Field::LandmarkTypeId),
        element_sites: reader.take_u8(Field::ElementSites),
        fuel_sites: reader.take_u8(Field::FuelSites),
        seed: reader.take(Field::Seed),
    }
}

pub fn to_bytes(blueprint: U256) -> [u8; BLUEPRINT_BYTES] {
    let mut bytes = [0u8; BLUEPRINT_BYTES];
    blueprint.to_big_endian(&mut bytes);
    bytes
}

pub fn from_bytes(bytes: &[u8; BLUEPRINT_BYTES]) -> U256 {
    U256::from_big_endian(bytes)
}
