use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Config {
    /// Single administrative key; every write except voting is gated on it.
    pub owner: Pubkey,
    pub bump: u8,

    // Global id counters. Each holds the last id handed out (0 = none yet).
    pub election_counter: u64,
    pub position_counter: u64,
    pub candidate_counter: u64,

    pub version: u16,
}

impl Config {
    // Wraps to 0 at u64::MAX so seeds still resolve and the handler's
    // checked `next_id` reports MathOverflow.
    pub fn next_election_id(&self) -> u64 {
        self.election_counter.wrapping_add(1)
    }

    pub fn next_position_id(&self) -> u64 {
        self.position_counter.wrapping_add(1)
    }

    pub fn next_candidate_id(&self) -> u64 {
        self.candidate_counter.wrapping_add(1)
    }
}

#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Election {
    pub id: u64,
    pub bump: u8,

    #[max_len(64)]
    pub name: String,

    // unix seconds
    pub start_time: i64,
    pub end_time: i64,

    pub is_active: bool,
    pub created_at: i64,

    /// Position ids in insertion order.
    /// NOTE: max_len mirrors MAX_POSITIONS_PER_ELECTION.
    #[max_len(32)]
    pub position_ids: Vec<u64>,
}

#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Position {
    pub id: u64,
    pub election_id: u64,
    pub bump: u8,

    #[max_len(64)]
    pub name: String,

    /// NOTE: max_len mirrors MAX_CANDIDATES_PER_POSITION.
    #[max_len(32)]
    pub candidate_ids: Vec<u64>,
}

#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Candidate {
    pub id: u64,
    pub position_id: u64,
    // denormalized so the vote path can check the full hierarchy
    pub election_id: u64,
    pub bump: u8,

    #[max_len(64)]
    pub name: String,
    #[max_len(256)]
    pub info: String,
    #[max_len(200)]
    pub image_url: String,

    /// Only ever incremented, and only by `cast_vote`.
    pub vote_count: u64,
}

/// Existence of this account is the registration; there is no unregister path.
#[account]
#[derive(InitSpace)]
pub struct VoterRegistration {
    pub voter: Pubkey,
    pub bump: u8,
    pub registered_by: Pubkey,
    pub registered_at: i64,
}

/// One per (position, voter). Existence marks the pair as voted.
#[account]
#[derive(InitSpace)]
pub struct VoteReceipt {
    pub voter: Pubkey,
    pub bump: u8,

    pub election_id: u64,
    pub position_id: u64,
    pub candidate_id: u64,

    pub cast_at: i64,

    // sha256 digest, see utils::receipt_digest
    pub digest: [u8; 32],
}
