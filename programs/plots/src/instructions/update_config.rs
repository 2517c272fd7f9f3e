use anchor_lang::prelude::*;
use crate::state::PlotConfig;
use crate::errors::PlotError;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        constraint = authority.key() == plot_config.authority @ PlotError::Unauthorized
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [PlotConfig::SEED],
        bump = plot_config.bump
    )]
    pub plot_config: Account<'info, PlotConfig>,
}

pub fn handler(
    ctx: Context<UpdateConfig>,
    minter: Option<Pubkey>,
    minting_enabled: Option<bool>,
    min_plot_size: Option<u16>,
    site_size: Option<u16>,
) -> Result<()> {
    let config = &mut ctx.accounts.plot_config;

    if let Some(minter) = minter {
        config.minter = minter;
        msg!("Updated minter to {}", minter);
    }

    if let Some(enabled) = minting_enabled {
        config.minting_enabled = enabled;
        msg!("Updated minting_enabled to {}", enabled);
    }

    if let Some(size) = min_plot_size {
        config.min_plot_size = size;
        msg!("Updated min_plot_size to {}", size);
    }

    if let Some(size) = site_size {
        require!(size > 0, PlotError::InvalidSiteSize);
        config.site_size = size;
        msg!("Updated site_size to {}", size);
    }

    Ok(())
}
