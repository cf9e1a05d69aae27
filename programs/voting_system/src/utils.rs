use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    program::{invoke, invoke_signed},
    system_instruction,
};
use solana_sha256_hasher::hashv;

use crate::{
    constants::*,
    errors::VotingError,
    state::{Candidate, Election, Position},
};

// -----------------
// Seeds
// -----------------
pub const CONFIG_SEED: &[u8] = b"config_v1";
pub const ELECTION_SEED: &[u8] = b"election_v1";
pub const POSITION_SEED: &[u8] = b"position_v1";
pub const CANDIDATE_SEED: &[u8] = b"candidate_v1";
pub const VOTER_SEED: &[u8] = b"voter_v1";
pub const VOTE_RECEIPT_SEED: &[u8] = b"vote_receipt_v1";

pub fn voter_registration_address(voter: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VOTER_SEED, voter.as_ref()], &crate::ID)
}

pub fn vote_receipt_address(position_id: u64, voter: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VOTE_RECEIPT_SEED, &position_id.to_le_bytes(), voter.as_ref()],
        &crate::ID,
    )
}

// -------------------------
// Input validation
// -------------------------
pub fn validate_name(name: &str) -> Result<()> {
    require!(!name.trim().is_empty(), VotingError::EmptyName);
    require!(name.len() <= MAX_NAME_LEN, VotingError::NameTooLong);
    Ok(())
}

pub fn validate_candidate_fields(name: &str, info: &str, image_url: &str) -> Result<()> {
    validate_name(name)?;
    require!(info.len() <= MAX_INFO_LEN, VotingError::InfoTooLong);
    require!(image_url.len() <= MAX_IMAGE_URL_LEN, VotingError::ImageUrlTooLong);
    Ok(())
}

pub fn validate_schedule(start_time: i64, end_time: i64) -> Result<()> {
    require!(start_time < end_time, VotingError::InvalidSchedule);
    Ok(())
}

pub fn validate_voter_batch(voters: &[Pubkey]) -> Result<()> {
    require!(voters.len() <= MAX_REGISTER_BATCH, VotingError::TooManyEntries);
    for v in voters.iter() {
        require!(*v != Pubkey::default(), VotingError::InvalidVoter);
    }
    Ok(())
}

/// Checks each remaining-account slot against the voter's registration PDA
/// and returns the bumps in batch order.
pub fn match_registration_slots(voters: &[Pubkey], slots: &[Pubkey]) -> Result<Vec<u8>> {
    require!(
        slots.len() == voters.len(),
        VotingError::RegistrationPdaMismatch
    );
    voters
        .iter()
        .zip(slots.iter())
        .map(|(voter, slot)| {
            let (expected_pda, bump) = voter_registration_address(voter);
            require_keys_eq!(expected_pda, *slot, VotingError::RegistrationPdaMismatch);
            Ok(bump)
        })
        .collect()
}

/// Advances a counter and returns the new id.
pub fn next_id(counter: &mut u64) -> Result<u64> {
    *counter = counter
        .checked_add(1)
        .ok_or_else(|| error!(VotingError::MathOverflow))?;
    Ok(*counter)
}

// -------------------------
// Election lifecycle
// -------------------------

/// Returns whether the flag actually changed.
pub fn apply_status_change(election: &mut Election, new_status: bool, now: i64) -> Result<bool> {
    if election.is_active == new_status {
        return Ok(false);
    }

    // closing is always allowed; reopening only while the window is still live
    if new_status {
        require!(now <= election.end_time, VotingError::ElectionEnded);
    }

    election.is_active = new_status;
    Ok(true)
}

pub fn check_voting_window(election: &Election, now: i64) -> Result<()> {
    require!(election.is_active, VotingError::ElectionInactive);
    require!(now >= election.start_time, VotingError::ElectionNotStarted);
    require!(now <= election.end_time, VotingError::ElectionClosed);
    Ok(())
}

pub fn attach_position(election: &mut Election, position_id: u64) -> Result<()> {
    require!(
        election.position_ids.len() < MAX_POSITIONS_PER_ELECTION,
        VotingError::TooManyPositions
    );
    election.position_ids.push(position_id);
    Ok(())
}

pub fn attach_candidate(position: &mut Position, candidate_id: u64) -> Result<()> {
    require!(
        position.candidate_ids.len() < MAX_CANDIDATES_PER_POSITION,
        VotingError::TooManyCandidates
    );
    position.candidate_ids.push(candidate_id);
    Ok(())
}

// -------------------------
// Shared vote logic
// -------------------------

/// Runs every vote check in order and, if all pass, bumps the tally.
/// The caller persists the receipt afterwards.
#[allow(clippy::too_many_arguments)]
pub fn vote_core(
    election: &Election,
    position: &Position,
    candidate: &mut Candidate,
    registered: bool,
    already_voted: bool,
    election_id: u64,
    position_id: u64,
    candidate_id: u64,
    now: i64,
) -> Result<()> {
    require!(registered, VotingError::NotRegistered);
    require!(!already_voted, VotingError::AlreadyVoted);

    require!(election.id == election_id, VotingError::ElectionNotFound);
    check_voting_window(election, now)?;

    require!(position.id == position_id, VotingError::PositionNotFound);
    require!(candidate.id == candidate_id, VotingError::CandidateNotFound);
    require!(
        position.election_id == election_id
            && candidate.position_id == position_id
            && candidate.election_id == election_id,
        VotingError::MismatchedHierarchy
    );
    require!(
        position.candidate_ids.contains(&candidate_id),
        VotingError::InvalidCandidate
    );

    candidate.vote_count = candidate
        .vote_count
        .checked_add(1)
        .ok_or_else(|| error!(VotingError::MathOverflow))?;

    Ok(())
}

// -------------------------
// Receipt digest
// -------------------------
pub fn receipt_digest(
    program_id: &Pubkey,
    election_id: u64,
    position_id: u64,
    candidate_id: u64,
    voter: &Pubkey,
    cast_at: i64,
) -> [u8; 32] {
    hashv(&[
        b"voting-system:receipt_v1".as_ref(),
        program_id.as_ref(),
        election_id.to_le_bytes().as_ref(),
        position_id.to_le_bytes().as_ref(),
        candidate_id.to_le_bytes().as_ref(),
        voter.as_ref(),
        cast_at.to_le_bytes().as_ref(),
    ])
    .to_bytes()
}

// -------------------------
// Raw account helpers
// -------------------------

/// True when the account holds data written by this program.
pub fn is_program_account(ai: &AccountInfo) -> bool {
    ai.owner == &crate::ID && !ai.data_is_empty()
}

pub fn load_account<T: AccountDeserialize>(ai: &AccountInfo, missing: VotingError) -> Result<T> {
    if !is_program_account(ai) {
        return Err(missing.into());
    }
    let data = ai
        .try_borrow_data()
        .map_err(|_| error!(VotingError::AccountBorrowFailed))?;
    let mut slice: &[u8] = &data;
    T::try_deserialize(&mut slice)
}

pub fn write_account<T: AccountSerialize>(ai: &AccountInfo, value: &T) -> Result<()> {
    let mut data = ai
        .try_borrow_mut_data()
        .map_err(|_| error!(VotingError::AccountBorrowFailed))?;
    let mut w = std::io::Cursor::new(&mut data[..]);
    value.try_serialize(&mut w)
}

/// Creates a program-owned PDA at `target`, signed by `signer_seeds`.
/// A target that was pre-funded with lamports is topped up, allocated and
/// assigned instead, since `create_account` refuses non-empty balances.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        let ix = system_instruction::create_account(
            payer.key,
            target.key,
            required,
            space as u64,
            &crate::ID,
        );
        invoke_signed(
            &ix,
            &[payer.clone(), target.clone(), system_program.clone()],
            &[signer_seeds],
        )?;
        return Ok(());
    }

    let top_up = required.saturating_sub(current);
    if top_up > 0 {
        invoke(
            &system_instruction::transfer(payer.key, target.key, top_up),
            &[payer.clone(), target.clone(), system_program.clone()],
        )?;
    }
    invoke_signed(
        &system_instruction::allocate(target.key, space as u64),
        &[target.clone(), system_program.clone()],
        &[signer_seeds],
    )?;
    invoke_signed(
        &system_instruction::assign(target.key, &crate::ID),
        &[target.clone(), system_program.clone()],
        &[signer_seeds],
    )?;

    Ok(())
}

#[cfg(test)]
pub(crate) fn assert_voting_err<T>(res: Result<T>, expected: VotingError) {
    use anchor_lang::solana_program::program_error::ProgramError;

    match res {
        Ok(_) => panic!("expected {:?}, got Ok", expected),
        Err(e) => assert_eq!(
            ProgramError::from(e),
            ProgramError::from(anchor_lang::error::Error::from(expected)),
        ),
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn name_validation() {
        assert!(validate_name("President").is_ok());
        assert_voting_err(validate_name(""), VotingError::EmptyName);
        assert_voting_err(validate_name("   "), VotingError::EmptyName);
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
        assert_voting_err(
            validate_name(&"x".repeat(MAX_NAME_LEN + 1)),
            VotingError::NameTooLong,
        );
    }

    #[test]
    fn candidate_fields_respect_limits() {
        assert!(validate_candidate_fields("Jane Doe", "Manifesto info", "image_url").is_ok());
        assert!(validate_candidate_fields("Jane Doe", "", "").is_ok());
        assert_voting_err(
            validate_candidate_fields("Jane Doe", &"i".repeat(MAX_INFO_LEN + 1), ""),
            VotingError::InfoTooLong,
        );
        assert_voting_err(
            validate_candidate_fields("Jane Doe", "", &"u".repeat(MAX_IMAGE_URL_LEN + 1)),
            VotingError::ImageUrlTooLong,
        );
        assert_voting_err(
            validate_candidate_fields("", "info", "url"),
            VotingError::EmptyName,
        );
    }

    #[test]
    fn schedule_requires_start_before_end() {
        assert!(validate_schedule(NOW, NOW + 1).is_ok());
        assert_voting_err(validate_schedule(NOW, NOW), VotingError::InvalidSchedule);
        assert_voting_err(validate_schedule(NOW + 10, NOW), VotingError::InvalidSchedule);
    }

    #[test]
    fn voter_batch_rejects_default_key_and_oversize() {
        let ok: Vec<Pubkey> = (0..MAX_REGISTER_BATCH).map(|_| Pubkey::new_unique()).collect();
        assert!(validate_voter_batch(&ok).is_ok());
        assert!(validate_voter_batch(&[]).is_ok());

        let mut too_many = ok.clone();
        too_many.push(Pubkey::new_unique());
        assert_voting_err(validate_voter_batch(&too_many), VotingError::TooManyEntries);

        assert_voting_err(
            validate_voter_batch(&[Pubkey::new_unique(), Pubkey::default()]),
            VotingError::InvalidVoter,
        );
    }

    #[test]
    fn next_id_is_strictly_increasing_and_checked() {
        let mut counter = 0u64;
        assert_eq!(next_id(&mut counter).unwrap(), 1);
        assert_eq!(next_id(&mut counter).unwrap(), 2);
        assert_eq!(counter, 2);

        let mut full = u64::MAX;
        assert_voting_err(next_id(&mut full), VotingError::MathOverflow);
        assert_eq!(full, u64::MAX);
    }

    #[test]
    fn deactivate_then_reactivate_within_window() {
        let mut e = election(1);
        assert!(apply_status_change(&mut e, false, NOW).unwrap());
        assert!(!e.is_active);
        assert!(apply_status_change(&mut e, true, NOW).unwrap());
        assert!(e.is_active);
    }

    #[test]
    fn same_status_is_a_noop() {
        let mut e = election(1);
        assert!(!apply_status_change(&mut e, true, NOW).unwrap());
        assert!(e.is_active);
    }

    #[test]
    fn cannot_reopen_after_end_time() {
        let mut e = election(1);
        let after = e.end_time + 1;
        assert!(apply_status_change(&mut e, false, after).unwrap());
        assert_voting_err(apply_status_change(&mut e, true, after), VotingError::ElectionEnded);
        assert!(!e.is_active);
    }

    #[test]
    fn voting_window_bounds_are_inclusive() {
        let e = election(1);
        assert!(check_voting_window(&e, e.start_time).is_ok());
        assert!(check_voting_window(&e, e.end_time).is_ok());
        assert_voting_err(
            check_voting_window(&e, e.start_time - 1),
            VotingError::ElectionNotStarted,
        );
        assert_voting_err(
            check_voting_window(&e, e.end_time + 1),
            VotingError::ElectionClosed,
        );

        let mut closed = election(1);
        closed.is_active = false;
        assert_voting_err(check_voting_window(&closed, NOW), VotingError::ElectionInactive);
    }

    #[test]
    fn attach_keeps_insertion_order_and_caps() {
        let mut e = election(1);
        for id in [5u64, 2, 9] {
            attach_position(&mut e, id).unwrap();
        }
        assert_eq!(e.position_ids, vec![5, 2, 9]);

        let mut full = election(2);
        full.position_ids = (1..=MAX_POSITIONS_PER_ELECTION as u64).collect();
        assert_voting_err(attach_position(&mut full, 99), VotingError::TooManyPositions);

        let mut p = position(1, 1);
        p.candidate_ids = (1..=MAX_CANDIDATES_PER_POSITION as u64).collect();
        assert_voting_err(attach_candidate(&mut p, 99), VotingError::TooManyCandidates);
    }

    #[test]
    fn vote_checks_registration_before_double_vote() {
        let e = election(1);
        let mut p = position(1, 1);
        p.candidate_ids.push(1);
        let mut c = candidate(1, 1, 1);

        // both guards fail: registration wins
        assert_voting_err(
            vote_core(&e, &p, &mut c, false, true, 1, 1, 1, NOW),
            VotingError::NotRegistered,
        );
        assert_voting_err(
            vote_core(&e, &p, &mut c, true, true, 1, 1, 1, NOW),
            VotingError::AlreadyVoted,
        );
        assert_eq!(c.vote_count, 0);
    }

    #[test]
    fn vote_rejects_mismatched_hierarchy() {
        let e = election(1);
        let mut p = position(2, 7); // belongs to another election
        p.candidate_ids.push(3);
        let mut c = candidate(3, 2, 7);

        assert_voting_err(
            vote_core(&e, &p, &mut c, true, false, 1, 2, 3, NOW),
            VotingError::MismatchedHierarchy,
        );

        let p_ok = position(2, 1);
        let mut stray = candidate(3, 2, 1); // points at position 2 but is not listed there
        assert_voting_err(
            vote_core(&e, &p_ok, &mut stray, true, false, 1, 2, 3, NOW),
            VotingError::InvalidCandidate,
        );
        assert_eq!(c.vote_count, 0);
        assert_eq!(stray.vote_count, 0);
    }

    #[test]
    fn vote_respects_election_window() {
        let mut e = election(1);
        let mut p = position(1, 1);
        p.candidate_ids.push(1);
        let mut c = candidate(1, 1, 1);

        assert_voting_err(
            vote_core(&e, &p, &mut c, true, false, 1, 1, 1, e.end_time + 1),
            VotingError::ElectionClosed,
        );

        e.is_active = false;
        assert_voting_err(
            vote_core(&e, &p, &mut c, true, false, 1, 1, 1, NOW),
            VotingError::ElectionInactive,
        );
        assert_eq!(c.vote_count, 0);
    }

    #[test]
    fn vote_increments_by_exactly_one() {
        let e = election(1);
        let mut p = position(1, 1);
        p.candidate_ids.push(1);
        let mut c = candidate(1, 1, 1);
        c.vote_count = 41;

        vote_core(&e, &p, &mut c, true, false, 1, 1, 1, NOW).unwrap();
        assert_eq!(c.vote_count, 42);

        c.vote_count = u64::MAX;
        assert_voting_err(
            vote_core(&e, &p, &mut c, true, false, 1, 1, 1, NOW),
            VotingError::MathOverflow,
        );
        assert_eq!(c.vote_count, u64::MAX);
    }

    #[test]
    fn receipt_digest_binds_every_field() {
        let program = crate::ID;
        let voter = Pubkey::new_unique();
        let base = receipt_digest(&program, 1, 2, 3, &voter, NOW);

        assert_eq!(base, receipt_digest(&program, 1, 2, 3, &voter, NOW));
        assert_ne!(base, receipt_digest(&program, 1, 2, 4, &voter, NOW));
        assert_ne!(base, receipt_digest(&program, 1, 3, 3, &voter, NOW));
        assert_ne!(base, receipt_digest(&program, 1, 2, 3, &Pubkey::new_unique(), NOW));
        assert_ne!(base, receipt_digest(&program, 1, 2, 3, &voter, NOW + 1));
    }

    #[test]
    fn receipt_address_is_per_voter_and_position() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        assert_eq!(vote_receipt_address(1, &a), vote_receipt_address(1, &a));
        assert_ne!(vote_receipt_address(1, &a).0, vote_receipt_address(2, &a).0);
        assert_ne!(vote_receipt_address(1, &a).0, vote_receipt_address(1, &b).0);
        assert_ne!(voter_registration_address(&a).0, voter_registration_address(&b).0);
    }

    #[test]
    fn registration_slots_must_match_voter_order_and_count() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let (pda_a, bump_a) = voter_registration_address(&a);
        let (pda_b, bump_b) = voter_registration_address(&b);

        assert_eq!(
            match_registration_slots(&[a, b], &[pda_a, pda_b]).unwrap(),
            vec![bump_a, bump_b]
        );
        assert!(match_registration_slots(&[], &[]).unwrap().is_empty());

        // swapped order
        assert_voting_err(
            match_registration_slots(&[a, b], &[pda_b, pda_a]),
            VotingError::RegistrationPdaMismatch,
        );
        // missing slot
        assert_voting_err(
            match_registration_slots(&[a, b], &[pda_a]),
            VotingError::RegistrationPdaMismatch,
        );
        // extra slot
        assert_voting_err(
            match_registration_slots(&[a], &[pda_a, pda_b]),
            VotingError::RegistrationPdaMismatch,
        );
        // the voter's own key is not its registration PDA
        assert_voting_err(
            match_registration_slots(&[a], &[a]),
            VotingError::RegistrationPdaMismatch,
        );
    }

    #[test]
    fn next_seed_id_wraps_so_the_handler_reports_overflow() {
        let mut cfg = crate::state::Config {
            owner: Pubkey::new_unique(),
            bump: 255,
            election_counter: 4,
            position_counter: u64::MAX,
            candidate_counter: u64::MAX,
            version: INITIAL_VERSION,
        };
        assert_eq!(cfg.next_election_id(), 5);
        assert_eq!(next_id(&mut cfg.election_counter).unwrap(), 5);

        assert_eq!(cfg.next_position_id(), 0);
        assert_eq!(cfg.next_candidate_id(), 0);
        assert_voting_err(next_id(&mut cfg.position_counter), VotingError::MathOverflow);
        assert_voting_err(next_id(&mut cfg.candidate_counter), VotingError::MathOverflow);
    }

    #[test]
    fn empty_or_foreign_accounts_are_not_present() {
        let key = Pubkey::new_unique();
        let system = anchor_lang::solana_program::system_program::ID;
        let program = crate::ID;

        // pre-funded by someone else, never allocated
        let mut lamports = 1_000u64;
        let mut data: Vec<u8> = vec![];
        let prefunded = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &system, false, 0);
        assert!(!is_program_account(&prefunded));

        // system-owned with data
        let mut lamports = 1_000u64;
        let mut data = vec![1u8; 16];
        let foreign = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &system, false, 0);
        assert!(!is_program_account(&foreign));

        // program-owned but empty
        let mut lamports = 0u64;
        let mut data: Vec<u8> = vec![];
        let hollow = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &program, false, 0);
        assert!(!is_program_account(&hollow));

        // program-owned with data
        let mut lamports = 1_000u64;
        let mut data = vec![0u8; 8 + crate::state::VoterRegistration::INIT_SPACE];
        let present = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &program, false, 0);
        assert!(is_program_account(&present));
    }

    #[test]
    fn load_missing_account_maps_to_not_found() {
        let key = Pubkey::new_unique();
        let system = anchor_lang::solana_program::system_program::ID;

        let mut lamports = 1_000u64;
        let mut data: Vec<u8> = vec![];
        let missing = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &system, false, 0);

        assert_voting_err(
            load_account::<Election>(&missing, VotingError::ElectionNotFound),
            VotingError::ElectionNotFound,
        );
        assert_voting_err(
            load_account::<Position>(&missing, VotingError::PositionNotFound),
            VotingError::PositionNotFound,
        );
        assert_voting_err(
            load_account::<Candidate>(&missing, VotingError::CandidateNotFound),
            VotingError::CandidateNotFound,
        );
    }

    #[test]
    fn load_zeroed_program_account_fails_on_discriminator() {
        use anchor_lang::error::ErrorCode;
        use anchor_lang::solana_program::program_error::ProgramError;

        let key = Pubkey::new_unique();
        let program = crate::ID;
        let mut lamports = 1_000u64;
        let mut data = vec![0u8; 8 + Election::INIT_SPACE];
        let zeroed = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &program, false, 0);

        let err = load_account::<Election>(&zeroed, VotingError::ElectionNotFound).unwrap_err();
        assert_eq!(
            ProgramError::from(err),
            ProgramError::from(anchor_lang::error::Error::from(ErrorCode::AccountDiscriminatorMismatch)),
        );
    }

    #[test]
    fn written_account_loads_back_unchanged() {
        let key = Pubkey::new_unique();
        let program = crate::ID;
        let mut lamports = 1_000u64;
        let mut data = vec![0u8; 8 + Election::INIT_SPACE];
        let slot = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &program, false, 0);

        let mut original = election(3);
        original.position_ids = vec![1, 4, 7];
        write_account(&slot, &original).unwrap();

        assert!(is_program_account(&slot));
        let loaded: Election = load_account(&slot, VotingError::ElectionNotFound).unwrap();
        assert_eq!(loaded, original);

        // a different account type does not deserialize from it
        assert!(load_account::<Position>(&slot, VotingError::PositionNotFound).is_err());
    }
}
