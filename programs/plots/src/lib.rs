use anchor_lang::prelude::*;

pub mod errors;
pub mod state;
pub mod codec;
pub mod generator;
pub mod instructions;

use instructions::*;
use generator::PlotParams;

declare_id!("CFtEVPi7andzwvZroAaUyn6ATLgLPnQp16d9qtitQQ1p");

#[program]
pub mod landplots {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        minter: Pubkey,
        min_plot_size: Option<u16>,
        site_size: Option<u16>,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, minter, min_plot_size, site_size)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        minter: Option<Pubkey>,
        minting_enabled: Option<bool>,
        min_plot_size: Option<u16>,
        site_size: Option<u16>,
    ) -> Result<()> {
        instructions::update_config::handler(ctx, minter, minting_enabled, min_plot_size, site_size)
    }

    pub fn generate_plot(
        ctx: Context<GeneratePlot>,
        token_id: [u8; 32],
        seed: [u8; 32],
        params: PlotParams,
    ) -> Result<()> {
        instructions::generate_plot::handler(ctx, token_id, seed, params)
    }

    pub fn mint_from_message(
        ctx: Context<MintFromMessage>,
        token_id: [u8; 32],
        blob: String,
    ) -> Result<()> {
        instructions::mint_from_message::handler(ctx, token_id, blob)
    }

    pub fn describe_plot(ctx: Context<DescribePlot>, token_id: [u8; 32]) -> Result<()> {
        instructions::describe_plot::handler(ctx, token_id)
    }

    pub fn close_plot(ctx: Context<ClosePlot>, token_id: [u8; 32]) -> Result<()> {
        instructions::close_plot::handler(ctx, token_id)
    }
}
