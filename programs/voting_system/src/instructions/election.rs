use anchor_lang::prelude::*;

use crate::{
    errors::VotingError,
    events::{ElectionCreated, ElectionStatusChanged},
    utils::{apply_status_change, next_id, validate_name, validate_schedule},
    CreateElection, ToggleElectionStatus,
};

pub fn create_election(
    ctx: Context<CreateElection>,
    name: String,
    start_time: i64,
    end_time: i64,
) -> Result<u64> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.owner, ctx.accounts.admin.key(), VotingError::Unauthorized);

    validate_name(&name)?;
    validate_schedule(start_time, end_time)?;

    let election_id = next_id(&mut cfg.election_counter)?;
    let now = Clock::get()?.unix_timestamp;

    let election = &mut ctx.accounts.election;
    election.id = election_id;
    election.bump = ctx.bumps.election;
    election.name = name;
    election.start_time = start_time;
    election.end_time = end_time;
    election.is_active = true;
    election.created_at = now;
    election.position_ids = Vec::new();

    msg!("Election {} created: {}", election_id, election.name);
    emit!(ElectionCreated {
        election_id,
        name: election.name.clone(),
        start_time,
        end_time,
    });

    Ok(election_id)
}

pub fn toggle_election_status(
    ctx: Context<ToggleElectionStatus>,
    election_id: u64,
    new_status: bool,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(cfg.owner, ctx.accounts.admin.key(), VotingError::Unauthorized);

    let election = &mut ctx.accounts.election;
    require!(election.id == election_id, VotingError::ElectionNotFound);

    let now = Clock::get()?.unix_timestamp;
    if !apply_status_change(election, new_status, now)? {
        return Ok(());
    }

    msg!("Election {} is_active -> {}", election_id, new_status);
    emit!(ElectionStatusChanged {
        election_id,
        is_active: new_status,
    });

    Ok(())
}
