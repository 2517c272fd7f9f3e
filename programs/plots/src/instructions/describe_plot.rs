use anchor_lang::prelude::*;
use crate::state::PlotRecord;
use crate::generator::landmark_anchor;

#[derive(Accounts)]
#[instruction(token_id: [u8; 32])]
pub struct DescribePlot<'info> {
    #[account(
        seeds = [PlotRecord::SEED, token_id.as_ref()],
        bump = plot_record.bump
    )]
    pub plot_record: Account<'info, PlotRecord>,
}

pub fn handler(ctx: Context<DescribePlot>, _token_id: [u8; 32]) -> Result<()> {
    let record = &ctx.accounts.plot_record;
    let view = record.view()?;

    msg!(
        "Plot {} v{}: region {} at ({}, {}), tier {}, size {}",
        record.token_id(),
        view.version,
        view.region_id,
        view.x,
        view.y,
        view.tier_id,
        view.size
    );

    if let Some((x, y)) = landmark_anchor(view.size, record.site_size) {
        msg!("Landmark {} at ({}, {})", view.landmark_type_id, x, y);
    }

    for site in &view.sites {
        msg!("Site type {} at ({}, {})", site.type_id, site.x, site.y);
    }

    Ok(())
}
