use anchor_lang::prelude::*;

#[error_code]
pub enum VotingError {
    #[msg("Unauthorized")]
    Unauthorized,

    // -----------------
    // Voting
    // -----------------
    #[msg("Not a registered voter")]
    NotRegistered,
    #[msg("Already voted for this position")]
    AlreadyVoted,
    #[msg("Election is not active")]
    ElectionInactive,
    #[msg("Election has not started yet")]
    ElectionNotStarted,
    #[msg("Election voting window has closed")]
    ElectionClosed,
    #[msg("Position does not belong to election, or candidate to position")]
    MismatchedHierarchy,
    #[msg("Candidate is not listed for this position")]
    InvalidCandidate,

    // -----------------
    // Lookups
    // -----------------
    #[msg("Election not found")]
    ElectionNotFound,
    #[msg("Position not found")]
    PositionNotFound,
    #[msg("Candidate not found")]
    CandidateNotFound,

    // -----------------
    // Lifecycle
    // -----------------
    #[msg("Cannot reactivate an election after its end time")]
    ElectionEnded,
    #[msg("Invalid schedule (start time must be before end time)")]
    InvalidSchedule,

    // -----------------
    // Input validation
    // -----------------
    #[msg("Name must not be empty")]
    EmptyName,
    #[msg("Name too long")]
    NameTooLong,
    #[msg("Candidate info too long")]
    InfoTooLong,
    #[msg("Image URL too long")]
    ImageUrlTooLong,
    #[msg("Invalid voter address")]
    InvalidVoter,
    #[msg("Too many entries")]
    TooManyEntries,
    #[msg("Election has reached its position limit")]
    TooManyPositions,
    #[msg("Position has reached its candidate limit")]
    TooManyCandidates,

    // -----------------
    // Accounts
    // -----------------
    #[msg("Voter registration PDA mismatch")]
    RegistrationPdaMismatch,
    #[msg("Failed to borrow account data")]
    AccountBorrowFailed,

    #[msg("Math overflow")]
    MathOverflow,
}
