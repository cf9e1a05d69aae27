use anchor_lang::prelude::*;

use crate::{
    errors::VotingError,
    state::{Candidate, Election, Position},
    utils::{is_program_account, load_account},
    ReadCandidate, ReadConfig, ReadElection, ReadPosition, ReadRegistration, ReadVoteReceipt,
};

// Views return through the transaction return data; clients call them via simulation.

pub fn get_owner(ctx: Context<ReadConfig>) -> Result<Pubkey> {
    Ok(ctx.accounts.config.owner)
}

pub fn election_counter(ctx: Context<ReadConfig>) -> Result<u64> {
    Ok(ctx.accounts.config.election_counter)
}

pub fn position_counter(ctx: Context<ReadConfig>) -> Result<u64> {
    Ok(ctx.accounts.config.position_counter)
}

pub fn candidate_counter(ctx: Context<ReadConfig>) -> Result<u64> {
    Ok(ctx.accounts.config.candidate_counter)
}

fn read_election(ctx: &Context<ReadElection>, election_id: u64) -> Result<Election> {
    let election: Election =
        load_account(&ctx.accounts.election.to_account_info(), VotingError::ElectionNotFound)?;
    require!(election.id == election_id, VotingError::ElectionNotFound);
    Ok(election)
}

fn read_position(ctx: &Context<ReadPosition>, position_id: u64) -> Result<Position> {
    let position: Position =
        load_account(&ctx.accounts.position.to_account_info(), VotingError::PositionNotFound)?;
    require!(position.id == position_id, VotingError::PositionNotFound);
    Ok(position)
}

pub fn get_election_details(ctx: Context<ReadElection>, election_id: u64) -> Result<Election> {
    read_election(&ctx, election_id)
}

pub fn get_position_ids(ctx: Context<ReadElection>, election_id: u64) -> Result<Vec<u64>> {
    Ok(read_election(&ctx, election_id)?.position_ids)
}

pub fn get_position(ctx: Context<ReadPosition>, position_id: u64) -> Result<Position> {
    read_position(&ctx, position_id)
}

pub fn get_candidate_ids(ctx: Context<ReadPosition>, position_id: u64) -> Result<Vec<u64>> {
    Ok(read_position(&ctx, position_id)?.candidate_ids)
}

pub fn get_candidate(ctx: Context<ReadCandidate>, candidate_id: u64) -> Result<Candidate> {
    let candidate: Candidate =
        load_account(&ctx.accounts.candidate.to_account_info(), VotingError::CandidateNotFound)?;
    require!(candidate.id == candidate_id, VotingError::CandidateNotFound);
    Ok(candidate)
}

pub fn is_registered(ctx: Context<ReadRegistration>, _voter: Pubkey) -> Result<bool> {
    Ok(is_program_account(&ctx.accounts.voter_registration.to_account_info()))
}

pub fn has_voted(ctx: Context<ReadVoteReceipt>, _voter: Pubkey, _position_id: u64) -> Result<bool> {
    Ok(is_program_account(&ctx.accounts.vote_receipt.to_account_info()))
}
