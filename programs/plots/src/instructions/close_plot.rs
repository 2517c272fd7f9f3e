use anchor_lang::prelude::*;

use crate::errors::PlotError;
use crate::state::{PlotConfig, PlotRecord};

#[derive(Accounts)]
#[instruction(token_id: [u8; 32])]
pub struct ClosePlot<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [PlotConfig::SEED],
        bump = plot_config.bump,
        has_one = authority @ PlotError::Unauthorized,
    )]
    pub plot_config: Account<'info, PlotConfig>,

    #[account(
        mut,
        seeds = [PlotRecord::SEED, token_id.as_ref()],
        bump = plot_record.bump,
        close = authority,
    )]
    pub plot_record: Account<'info, PlotRecord>,
}

pub fn handler(ctx: Context<ClosePlot>, _token_id: [u8; 32]) -> Result<()> {
    // Account is closed automatically by the `close = authority` constraint
    msg!("Closed PlotRecord for token {}", ctx.accounts.plot_record.token_id());
    Ok(())
}
