use anchor_lang::prelude::*;
use crate::state::{PlotConfig, PlotRecord};
use crate::errors::PlotError;
use crate::generator::{generate, PlotParams, U256};

#[derive(Accounts)]
#[instruction(token_id: [u8; 32])]
pub struct GeneratePlot<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [PlotConfig::SEED],
        bump = plot_config.bump,
        has_one = authority @ PlotError::Unauthorized,
    )]
    pub plot_config: Account<'info, PlotConfig>,

    #[account(
        init,
        payer = authority,
        space = 8 + PlotRecord::INIT_SPACE,
        seeds = [PlotRecord::SEED, token_id.as_ref()],
        bump
    )]
    pub plot_record: Account<'info, PlotRecord>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<GeneratePlot>,
    token_id: [u8; 32],
    seed: [u8; 32],
    params: PlotParams,
) -> Result<()> {
    let config = &mut ctx.accounts.plot_config;
    require!(config.minting_enabled, PlotError::MintingDisabled);
    require!(params.size >= config.min_plot_size, PlotError::PlotTooSmall);

    let store = generate(U256::from_big_endian(&seed), &params, config.site_size)?;
    ctx.accounts
        .plot_record
        .write(token_id, &store, config.site_size, ctx.bumps.plot_record)?;

    config.total_plots = config
        .total_plots
        .checked_add(1)
        .ok_or(PlotError::Overflow)?;

    msg!(
        "Plot {} generated in region {} at ({}, {}): tier {}, size {}, landmark {}, {} element / {} fuel sites",
        U256::from_big_endian(&token_id),
        store.region_id,
        store.x,
        store.y,
        store.tier_id,
        store.size,
        store.landmark_type_id,
        store.element_sites,
        store.fuel_sites
    );

    Ok(())
}
