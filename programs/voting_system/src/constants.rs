// Centralized Program Constants

// Field limits
// ============

/// Maximum byte length of an election, position or candidate name.
pub const MAX_NAME_LEN: usize = 64;

/// Maximum byte length of a candidate's manifesto / info blurb.
pub const MAX_INFO_LEN: usize = 256;

/// Maximum byte length of a candidate image URL.
pub const MAX_IMAGE_URL_LEN: usize = 200;

// Capacity limits
// ===============

/// Positions an election can hold. Bounded so the election account has a fixed size.
pub const MAX_POSITIONS_PER_ELECTION: usize = 32;

/// Candidates a position can hold.
pub const MAX_CANDIDATES_PER_POSITION: usize = 32;

/// Voters registered per `register_voters` call.
/// Each entry costs one PDA derivation and one account creation, so the batch
/// stays well inside the compute budget.
pub const MAX_REGISTER_BATCH: usize = 16;

// Versioning
// ==========

/// Initial version for the config account.
pub const INITIAL_VERSION: u16 = 1;
