use anchor_lang::prelude::*;
use crate::state::{PlotConfig, PlotRecord};
use crate::errors::PlotError;
use crate::codec::{parse_minting_blob, unpack};
use crate::generator::{expand_with_site_size, validate_landmark, U256};

#[derive(Accounts)]
#[instruction(token_id: [u8; 32])]
pub struct MintFromMessage<'info> {
    /// Bridge signer relaying the cross-chain mint
    #[account(
        mut,
        constraint = minter.key() == plot_config.minter @ PlotError::Unauthorized
    )]
    pub minter: Signer<'info>,

    #[account(
        mut,
        seeds = [PlotConfig::SEED],
        bump = plot_config.bump
    )]
    pub plot_config: Account<'info, PlotConfig>,

    #[account(
        init,
        payer = minter,
        space = 8 + PlotRecord::INIT_SPACE,
        seeds = [PlotRecord::SEED, token_id.as_ref()],
        bump
    )]
    pub plot_record: Account<'info, PlotRecord>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<MintFromMessage>, token_id: [u8; 32], blob: String) -> Result<()> {
    let config = &mut ctx.accounts.plot_config;
    require!(config.minting_enabled, PlotError::MintingDisabled);

    let message = parse_minting_blob(blob.as_bytes());
    message.require_well_formed()?;
    require!(
        message.token_id == U256::from_big_endian(&token_id),
        PlotError::TokenIdMismatch
    );

    // Blueprints from other chains are untrusted until they unpack to a usable plot
    let store = unpack(message.metadata);
    require!(store.size >= config.min_plot_size, PlotError::PlotTooSmall);
    validate_landmark(store.tier_id, store.landmark_type_id)?;
    expand_with_site_size(&store, config.site_size)?;

    ctx.accounts
        .plot_record
        .write(token_id, &store, config.site_size, ctx.bumps.plot_record)?;

    config.total_plots = config
        .total_plots
        .checked_add(1)
        .ok_or(PlotError::Overflow)?;

    msg!(
        "Plot {} minted from message: tier {}, size {}, {} element / {} fuel sites",
        message.token_id,
        store.tier_id,
        store.size,
        store.element_sites,
        store.fuel_sites
    );

    Ok(())
}
