use anchor_lang::prelude::*;

use crate::{
    errors::VotingError,
    events::{CandidateAdded, PositionAdded},
    utils::{attach_candidate, attach_position, next_id, validate_candidate_fields, validate_name},
    AddCandidate, AddPosition,
};

pub fn add_position(ctx: Context<AddPosition>, election_id: u64, name: String) -> Result<u64> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.owner, ctx.accounts.admin.key(), VotingError::Unauthorized);

    let election = &mut ctx.accounts.election;
    require!(election.id == election_id, VotingError::ElectionNotFound);

    validate_name(&name)?;

    let position_id = next_id(&mut cfg.position_counter)?;
    attach_position(election, position_id)?;

    let position = &mut ctx.accounts.position;
    position.id = position_id;
    position.election_id = election_id;
    position.bump = ctx.bumps.position;
    position.name = name;
    position.candidate_ids = Vec::new();

    emit!(PositionAdded {
        election_id,
        position_id,
        name: position.name.clone(),
    });

    Ok(position_id)
}

pub fn add_candidate(
    ctx: Context<AddCandidate>,
    position_id: u64,
    name: String,
    info: String,
    image_url: String,
) -> Result<u64> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.owner, ctx.accounts.admin.key(), VotingError::Unauthorized);

    let position = &mut ctx.accounts.position;
    require!(position.id == position_id, VotingError::PositionNotFound);

    validate_candidate_fields(&name, &info, &image_url)?;

    let candidate_id = next_id(&mut cfg.candidate_counter)?;
    attach_candidate(position, candidate_id)?;

    let candidate = &mut ctx.accounts.candidate;
    candidate.id = candidate_id;
    candidate.position_id = position_id;
    candidate.election_id = position.election_id;
    candidate.bump = ctx.bumps.candidate;
    candidate.name = name;
    candidate.info = info;
    candidate.image_url = image_url;
    candidate.vote_count = 0;

    emit!(CandidateAdded {
        election_id: position.election_id,
        position_id,
        candidate_id,
        name: candidate.name.clone(),
    });

    Ok(candidate_id)
}
