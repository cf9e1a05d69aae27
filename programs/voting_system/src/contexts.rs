// programs/voting_system/src/contexts.rs

use anchor_lang::prelude::*;

use crate::state::{Candidate, Config, Election, Position};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Config::INIT_SPACE,
        seeds = [crate::CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

// ----------------------------
// Election lifecycle
// ----------------------------

#[derive(Accounts)]
pub struct CreateElection<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = admin,
        space = 8 + Election::INIT_SPACE,
        seeds = [crate::ELECTION_SEED, config.next_election_id().to_le_bytes().as_ref()],
        bump
    )]
    pub election: Account<'info, Election>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(election_id: u64)]
pub struct ToggleElectionStatus<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::ELECTION_SEED, election_id.to_le_bytes().as_ref()],
        bump = election.bump
    )]
    pub election: Account<'info, Election>,

    pub admin: Signer<'info>,
}

// ----------------------------
// Position & candidate registry
// ----------------------------

#[derive(Accounts)]
#[instruction(election_id: u64)]
pub struct AddPosition<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::ELECTION_SEED, election_id.to_le_bytes().as_ref()],
        bump = election.bump
    )]
    pub election: Account<'info, Election>,

    #[account(
        init,
        payer = admin,
        space = 8 + Position::INIT_SPACE,
        seeds = [crate::POSITION_SEED, config.next_position_id().to_le_bytes().as_ref()],
        bump
    )]
    pub position: Account<'info, Position>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(position_id: u64)]
pub struct AddCandidate<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::POSITION_SEED, position_id.to_le_bytes().as_ref()],
        bump = position.bump
    )]
    pub position: Account<'info, Position>,

    #[account(
        init,
        payer = admin,
        space = 8 + Candidate::INIT_SPACE,
        seeds = [crate::CANDIDATE_SEED, config.next_candidate_id().to_le_bytes().as_ref()],
        bump
    )]
    pub candidate: Account<'info, Candidate>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

// ----------------------------
// Voter registry
// ----------------------------

/// remaining_accounts: one writable VoterRegistration PDA per voter, same order.
#[derive(Accounts)]
pub struct RegisterVoters<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

// ----------------------------
// Voting
// ----------------------------

#[derive(Accounts)]
#[instruction(election_id: u64, position_id: u64, candidate_id: u64)]
pub struct CastVote<'info> {
    #[account(
        seeds = [crate::ELECTION_SEED, election_id.to_le_bytes().as_ref()],
        bump = election.bump
    )]
    pub election: Account<'info, Election>,

    #[account(
        seeds = [crate::POSITION_SEED, position_id.to_le_bytes().as_ref()],
        bump = position.bump
    )]
    pub position: Account<'info, Position>,

    #[account(
        mut,
        seeds = [crate::CANDIDATE_SEED, candidate_id.to_le_bytes().as_ref()],
        bump = candidate.bump
    )]
    pub candidate: Account<'info, Candidate>,

    /// CHECK: may be empty (unregistered voter). Address enforced by seeds/bump;
    /// presence is checked in the handler so the failure is NotRegistered.
    #[account(
        seeds = [crate::VOTER_SEED, voter.key().as_ref()],
        bump
    )]
    pub voter_registration: UncheckedAccount<'info>,

    /// CHECK: created by the handler. Address enforced by seeds/bump;
    /// an existing account means the voter already voted for this position.
    #[account(
        mut,
        seeds = [crate::VOTE_RECEIPT_SEED, position_id.to_le_bytes().as_ref(), voter.key().as_ref()],
        bump
    )]
    pub vote_receipt: UncheckedAccount<'info>,

    #[account(mut)]
    pub voter: Signer<'info>,

    pub system_program: Program<'info, System>,
}

// ----------------------------
// Read-only views
// ----------------------------

#[derive(Accounts)]
pub struct ReadConfig<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,
}

#[derive(Accounts)]
#[instruction(election_id: u64)]
pub struct ReadElection<'info> {
    /// CHECK: loaded in the handler so a missing id maps to ElectionNotFound.
    #[account(seeds = [crate::ELECTION_SEED, election_id.to_le_bytes().as_ref()], bump)]
    pub election: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(position_id: u64)]
pub struct ReadPosition<'info> {
    /// CHECK: loaded in the handler so a missing id maps to PositionNotFound.
    #[account(seeds = [crate::POSITION_SEED, position_id.to_le_bytes().as_ref()], bump)]
    pub position: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(candidate_id: u64)]
pub struct ReadCandidate<'info> {
    /// CHECK: loaded in the handler so a missing id maps to CandidateNotFound.
    #[account(seeds = [crate::CANDIDATE_SEED, candidate_id.to_le_bytes().as_ref()], bump)]
    pub candidate: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(voter: Pubkey)]
pub struct ReadRegistration<'info> {
    /// CHECK: only existence/ownership is inspected.
    #[account(seeds = [crate::VOTER_SEED, voter.as_ref()], bump)]
    pub voter_registration: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(voter: Pubkey, position_id: u64)]
pub struct ReadVoteReceipt<'info> {
    /// CHECK: only existence/ownership is inspected.
    #[account(
        seeds = [crate::VOTE_RECEIPT_SEED, position_id.to_le_bytes().as_ref(), voter.as_ref()],
        bump
    )]
    pub vote_receipt: UncheckedAccount<'info>,
}
