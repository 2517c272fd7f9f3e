use anchor_lang::prelude::*;

pub const DEFAULT_MIN_PLOT_SIZE: u16 = 32;

#[account]
#[derive(InitSpace)]
pub struct PlotConfig {
    pub authority: Pubkey,
    /// Bridge signer allowed to mint from cross-chain messages
    pub minter: Pubkey,
    pub minting_enabled: bool,
    /// Smallest plot side length the mint paths accept
    pub min_plot_size: u16,
    /// Side length of a resource site, in grid cells
    pub site_size: u16,
    pub total_plots: u64,
    pub bump: u8,
    pub _padding: [u8; 64],
}

impl PlotConfig {
    pub const SEED: &'static [u8] = b"plot_config";
}
