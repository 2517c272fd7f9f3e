use anchor_lang::prelude::*;
use crate::state::{PlotConfig, DEFAULT_MIN_PLOT_SIZE};
use crate::generator::DEFAULT_SITE_SIZE;
use crate::errors::PlotError;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + PlotConfig::INIT_SPACE,
        seeds = [PlotConfig::SEED],
        bump
    )]
    pub plot_config: Account<'info, PlotConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    minter: Pubkey,
    min_plot_size: Option<u16>,
    site_size: Option<u16>,
) -> Result<()> {
    let min_plot_size = min_plot_size.unwrap_or(DEFAULT_MIN_PLOT_SIZE);
    let site_size = site_size.unwrap_or(DEFAULT_SITE_SIZE);
    require!(site_size > 0, PlotError::InvalidSiteSize);

    let config = &mut ctx.accounts.plot_config;

    config.authority = ctx.accounts.authority.key();
    config.minter = minter;
    config.minting_enabled = true;
    config.min_plot_size = min_plot_size;
    config.site_size = site_size;
    config.total_plots = 0;
    config.bump = ctx.bumps.plot_config;
    config._padding = [0u8; 64];

    msg!(
        "Plots initialized with minter {}, min size {}, site size {}",
        minter,
        min_plot_size,
        site_size
    );
    Ok(())
}
