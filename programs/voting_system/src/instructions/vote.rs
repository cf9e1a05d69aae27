use anchor_lang::prelude::*;

use crate::{
    events::VoteCast,
    state::VoteReceipt,
    utils::{create_pda_account, is_program_account, receipt_digest, vote_core, write_account},
    CastVote, VOTE_RECEIPT_SEED,
};

pub fn cast_vote(
    ctx: Context<CastVote>,
    election_id: u64,
    position_id: u64,
    candidate_id: u64,
) -> Result<()> {
    let voter = ctx.accounts.voter.key();
    let registered = is_program_account(&ctx.accounts.voter_registration.to_account_info());
    let receipt_ai = ctx.accounts.vote_receipt.to_account_info();
    let already_voted = is_program_account(&receipt_ai);

    let now = Clock::get()?.unix_timestamp;

    vote_core(
        &ctx.accounts.election,
        &ctx.accounts.position,
        &mut ctx.accounts.candidate,
        registered,
        already_voted,
        election_id,
        position_id,
        candidate_id,
        now,
    )?;

    // --- receipt (marks (voter, position) as voted) ---
    let bump = ctx.bumps.vote_receipt;
    let position_le = position_id.to_le_bytes();
    create_pda_account(
        &ctx.accounts.voter.to_account_info(),
        &receipt_ai,
        &ctx.accounts.system_program.to_account_info(),
        8 + VoteReceipt::INIT_SPACE,
        &[VOTE_RECEIPT_SEED, &position_le, voter.as_ref(), &[bump]],
    )?;

    let digest = receipt_digest(
        ctx.program_id,
        election_id,
        position_id,
        candidate_id,
        &voter,
        now,
    );

    write_account(
        &receipt_ai,
        &VoteReceipt {
            voter,
            bump,
            election_id,
            position_id,
            candidate_id,
            cast_at: now,
            digest,
        },
    )?;

    emit!(VoteCast {
        voter,
        election_id,
        position_id,
        candidate_id,
        receipt: digest,
    });

    Ok(())
}
