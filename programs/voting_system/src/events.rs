use anchor_lang::prelude::*;

#[event]
pub struct ElectionCreated {
    pub election_id: u64,
    pub name: String,
    pub start_time: i64,
    pub end_time: i64,
}

#[event]
pub struct ElectionStatusChanged {
    pub election_id: u64,
    pub is_active: bool,
}

#[event]
pub struct PositionAdded {
    pub election_id: u64,
    pub position_id: u64,
    pub name: String,
}

#[event]
pub struct CandidateAdded {
    pub election_id: u64,
    pub position_id: u64,
    pub candidate_id: u64,
    pub name: String,
}

#[event]
pub struct VotersRegistered {
    pub requested: u32,
    pub newly_registered: u32,
}

/// Indexers key off-chain vote rows by `receipt`.
#[event]
pub struct VoteCast {
    pub voter: Pubkey,
    pub election_id: u64,
    pub position_id: u64,
    pub candidate_id: u64,
    pub receipt: [u8; 32],
}
