use anchor_lang::prelude::*;

use crate::constants::{CALLBACK_COMPUTE_LIMIT, NUM_WORDS, REQUEST_CONFIRMATIONS};
use crate::errors::RedPacketError;
use crate::events::RandomnessRequested;
use crate::state::{ClaimStatus, ProtocolConfig, RandomnessRequest, RedPacketPool};

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct ClaimRedPacket<'info> {
    #[account(mut)]
    pub claimer: Signer<'info>,

    #[account(
        mut,
        seeds = [ProtocolConfig::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, ProtocolConfig>>,

    #[account(
        seeds = [RedPacketPool::SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, RedPacketPool>>,

    #[account(
        init_if_needed,
        payer = claimer,
        space = ClaimStatus::SIZE,
        seeds = [ClaimStatus::SEED, pool.key().as_ref(), claimer.key().as_ref()],
        bump,
    )]
    pub claim_status: Box<Account<'info, ClaimStatus>>,

    /// Request for the next request id. Paid for by the claimer, who gets
    /// the rent back if the request is cancelled.
    #[account(
        init,
        payer = claimer,
        space = RandomnessRequest::SIZE,
        seeds = [RandomnessRequest::SEED, config.request_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub request: Box<Account<'info, RandomnessRequest>>,

    pub system_program: Program<'info, System>,
}

/// Records a randomness request for the claimer. Funds move only when the
/// coordinator answers through `fulfill_random_words`.
pub fn handler(ctx: Context<ClaimRedPacket>, pool_id: u64) -> Result<u64> {
    let claimer = ctx.accounts.claimer.key();
    let pool_key = ctx.accounts.pool.key();

    let status = &mut ctx.accounts.claim_status;
    if status.claimer == Pubkey::default() {
        status.pool = pool_key;
        status.claimer = claimer;
        status.has_claimed = false;
        status.pending_request = None;
        status.amount = 0;
        status.bump = ctx.bumps.claim_status;
    }
    require!(!status.has_claimed, RedPacketError::AlreadyClaimed);
    require!(
        !ctx.accounts.pool.is_exhausted(),
        RedPacketError::PoolExhausted
    );
    require!(
        status.pending_request.is_none(),
        RedPacketError::RequestPending
    );

    let request_id = ctx.accounts.config.next_request_id()?;
    status.pending_request = Some(request_id);

    let request = &mut ctx.accounts.request;
    request.request_id = request_id;
    request.claimer = claimer;
    request.pool = pool_key;
    request.pool_id = pool_id;
    request.request_slot = Clock::get()?.slot;
    request.num_words = NUM_WORDS;
    request.fulfilled = false;
    request.randomness = [0; 32];
    request.bump = ctx.bumps.request;

    emit!(RandomnessRequested {
        request_id,
        claimer,
        pool_id,
        key_hash: ctx.accounts.config.key_hash,
        confirmations: REQUEST_CONFIRMATIONS,
        callback_compute_limit: CALLBACK_COMPUTE_LIMIT,
        num_words: NUM_WORDS,
    });
    Ok(request_id)
}
