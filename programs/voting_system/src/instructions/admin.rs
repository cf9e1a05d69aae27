use anchor_lang::prelude::*;

use crate::constants::*;
use crate::Initialize;

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;

    cfg.owner = ctx.accounts.admin.key();
    cfg.bump = ctx.bumps.config;

    cfg.election_counter = 0;
    cfg.position_counter = 0;
    cfg.candidate_counter = 0;

    cfg.version = INITIAL_VERSION;

    msg!("Voting system initialized, owner: {}", cfg.owner);

    Ok(())
}
