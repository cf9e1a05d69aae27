use anchor_lang::prelude::*;

use crate::{
    errors::VotingError,
    events::VotersRegistered,
    state::VoterRegistration,
    utils::{
        create_pda_account, is_program_account, match_registration_slots, validate_voter_batch,
        write_account,
    },
    RegisterVoters, VOTER_SEED,
};

pub fn register_voters<'info>(
    ctx: Context<'_, '_, 'info, 'info, RegisterVoters<'info>>,
    voters: Vec<Pubkey>,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(cfg.owner, ctx.accounts.admin.key(), VotingError::Unauthorized);

    validate_voter_batch(&voters)?;
    let slot_keys: Vec<Pubkey> = ctx.remaining_accounts.iter().map(|a| *a.key).collect();
    let bumps = match_registration_slots(&voters, &slot_keys)?;

    let admin = ctx.accounts.admin.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();
    let space = 8 + VoterRegistration::INIT_SPACE;
    let now = Clock::get()?.unix_timestamp;

    let mut seen: Vec<Pubkey> = Vec::with_capacity(voters.len());
    let mut newly_registered: u32 = 0;

    for ((voter, slot), bump) in voters
        .iter()
        .zip(ctx.remaining_accounts.iter())
        .zip(bumps)
    {
        // re-registration is a silent no-op
        if seen.contains(voter) || is_program_account(slot) {
            continue;
        }
        seen.push(*voter);

        create_pda_account(
            &admin,
            slot,
            &system_program,
            space,
            &[VOTER_SEED, voter.as_ref(), &[bump]],
        )?;

        write_account(
            slot,
            &VoterRegistration {
                voter: *voter,
                bump,
                registered_by: admin.key(),
                registered_at: now,
            },
        )?;

        newly_registered += 1;
    }

    msg!(
        "Registered {} new voter(s) out of {}",
        newly_registered,
        voters.len()
    );
    emit!(VotersRegistered {
        requested: voters.len() as u32,
        newly_registered,
    });

    Ok(())
}
