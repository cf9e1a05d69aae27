use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use events::*;
pub use state::*;
pub use utils::*;


declare_id!("GZkLxBF7GCNZb2LMZZsQaKjxbheLRK7qdzR5VZ1NtDnD");

#[program]
pub mod voting_system {
    use super::*;
    use crate::instructions::{admin, election, registry, views, vote, voters};

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        admin::initialize(ctx)
    }

    // ----------------------------
    // Election lifecycle (owner)
    // ----------------------------
    pub fn create_election(
        ctx: Context<CreateElection>,
        name: String,
        start_time: i64,
        end_time: i64,
    ) -> Result<u64> {
        election::create_election(ctx, name, start_time, end_time)
    }

    pub fn toggle_election_status(
        ctx: Context<ToggleElectionStatus>,
        election_id: u64,
        new_status: bool,
    ) -> Result<()> {
        election::toggle_election_status(ctx, election_id, new_status)
    }

    // ----------------------------
    // Registry (owner)
    // ----------------------------
    pub fn add_position(ctx: Context<AddPosition>, election_id: u64, name: String) -> Result<u64> {
        registry::add_position(ctx, election_id, name)
    }

    pub fn add_candidate(
        ctx: Context<AddCandidate>,
        position_id: u64,
        name: String,
        info: String,
        image_url: String,
    ) -> Result<u64> {
        registry::add_candidate(ctx, position_id, name, info, image_url)
    }

    pub fn register_voters<'info>(
        ctx: Context<'_, '_, 'info, 'info, RegisterVoters<'info>>,
        voters: Vec<Pubkey>,
    ) -> Result<()> {
        voters::register_voters(ctx, voters)
    }

    // core
    pub fn cast_vote(
        ctx: Context<CastVote>,
        election_id: u64,
        position_id: u64,
        candidate_id: u64,
    ) -> Result<()> {
        vote::cast_vote(ctx, election_id, position_id, candidate_id)
    }

    // ----------------------------
    // Views
    // ----------------------------
    pub fn get_owner(ctx: Context<ReadConfig>) -> Result<Pubkey> {
        views::get_owner(ctx)
    }

    pub fn election_counter(ctx: Context<ReadConfig>) -> Result<u64> {
        views::election_counter(ctx)
    }

    pub fn position_counter(ctx: Context<ReadConfig>) -> Result<u64> {
        views::position_counter(ctx)
    }

    pub fn candidate_counter(ctx: Context<ReadConfig>) -> Result<u64> {
        views::candidate_counter(ctx)
    }

    pub fn get_election_details(ctx: Context<ReadElection>, election_id: u64) -> Result<Election> {
        views::get_election_details(ctx, election_id)
    }

    pub fn get_position_ids(ctx: Context<ReadElection>, election_id: u64) -> Result<Vec<u64>> {
        views::get_position_ids(ctx, election_id)
    }

    pub fn get_position(ctx: Context<ReadPosition>, position_id: u64) -> Result<Position> {
        views::get_position(ctx, position_id)
    }

    pub fn get_candidate_ids(ctx: Context<ReadPosition>, position_id: u64) -> Result<Vec<u64>> {
        views::get_candidate_ids(ctx, position_id)
    }

    pub fn get_candidate(ctx: Context<ReadCandidate>, candidate_id: u64) -> Result<Candidate> {
        views::get_candidate(ctx, candidate_id)
    }

    pub fn is_registered(ctx: Context<ReadRegistration>, voter: Pubkey) -> Result<bool> {
        views::is_registered(ctx, voter)
    }

    pub fn has_voted(ctx: Context<ReadVoteReceipt>, voter: Pubkey, position_id: u64) -> Result<bool> {
        views::has_voted(ctx, voter, position_id)
    }
}
