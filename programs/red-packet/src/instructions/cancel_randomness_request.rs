use anchor_lang::prelude::*;

use crate::constants::REQUEST_TIMEOUT_SLOTS;
use crate::errors::RedPacketError;
use crate::events::RandomnessRequestCancelled;
use crate::state::{ClaimStatus, RandomnessRequest};

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct CancelRandomnessRequest<'info> {
    #[account(mut)]
    pub claimer: Signer<'info>,

    #[account(
        mut,
        close = claimer,
        seeds = [RandomnessRequest::SEED, request_id.to_le_bytes().as_ref()],
        bump = request.bump,
        constraint = request.claimer == claimer.key() @ RedPacketError::RequestMismatch,
    )]
    pub request: Account<'info, RandomnessRequest>,

    #[account(
        mut,
        seeds = [ClaimStatus::SEED, request.pool.as_ref(), claimer.key().as_ref()],
        bump = claim_status.bump,
    )]
    pub claim_status: Account<'info, ClaimStatus>,
}

/// Drops a request the coordinator never answered so the claimer can try again.
pub fn handler(ctx: Context<CancelRandomnessRequest>, request_id: u64) -> Result<()> {
    let request = &ctx.accounts.request;
    require!(!request.fulfilled, RedPacketError::RequestAlreadyFulfilled);
    let slot = Clock::get()?.slot;
    require!(
        slot >= request.request_slot.saturating_add(REQUEST_TIMEOUT_SLOTS),
        RedPacketError::RequestNotExpired
    );

    let status = &mut ctx.accounts.claim_status;
    require!(
        status.pending_request == Some(request_id),
        RedPacketError::RequestMismatch
    );
    status.pending_request = None;

    emit!(RandomnessRequestCancelled {
        request_id,
        claimer: request.claimer,
        pool_id: request.pool_id,
    });
    Ok(())
}
