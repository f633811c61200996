use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{POOL_VAULT_SEED, REQUEST_CONFIRMATIONS};
use crate::errors::RedPacketError;
use crate::events::RedPacketClaimed;
use crate::state::{ClaimStatus, ProtocolConfig, RandomnessRequest, RedPacketPool};

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct FulfillRandomWords<'info> {
    /// The configured coordinator. Pays for the claimer's token account if needed.
    #[account(mut)]
    pub coordinator: Signer<'info>,

    #[account(
        seeds = [ProtocolConfig::SEED],
        bump = config.bump,
        constraint = config.vrf_coordinator == coordinator.key() @ RedPacketError::UnauthorizedFulfiller,
    )]
    pub config: Box<Account<'info, ProtocolConfig>>,

    #[account(
        mut,
        seeds = [RandomnessRequest::SEED, request_id.to_le_bytes().as_ref()],
        bump = request.bump,
    )]
    pub request: Box<Account<'info, RandomnessRequest>>,

    #[account(
        mut,
        address = request.pool @ RedPacketError::RequestMismatch,
    )]
    pub pool: Box<Account<'info, RedPacketPool>>,

    #[account(
        mut,
        seeds = [ClaimStatus::SEED, pool.key().as_ref(), request.claimer.as_ref()],
        bump = claim_status.bump,
    )]
    pub claim_status: Box<Account<'info, ClaimStatus>>,

    #[account(
        mut,
        seeds = [POOL_VAULT_SEED, pool.key().as_ref()],
        bump = pool.vault_bump,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// CHECK: Must be the wallet that made the request.
    #[account(address = request.claimer @ RedPacketError::RequestMismatch)]
    pub claimer: UncheckedAccount<'info>,

    #[account(address = pool.mint)]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = coordinator,
        associated_token::mint = mint,
        associated_token::authority = claimer,
    )]
    pub claimer_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Coordinator callback. Sizes the claimer's packet from the first word and
/// pays it out of the pool vault.
pub fn handler(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<[u8; 32]>,
) -> Result<()> {
    let request = &mut ctx.accounts.request;
    require!(!request.fulfilled, RedPacketError::RequestAlreadyFulfilled);
    let word = random_words
        .first()
        .copied()
        .ok_or(error!(RedPacketError::MissingRandomWords))?;
    let slot = Clock::get()?.slot;
    require!(
        slot >= request.request_slot.saturating_add(REQUEST_CONFIRMATIONS),
        RedPacketError::ConfirmationsPending
    );

    let status = &mut ctx.accounts.claim_status;
    require!(!status.has_claimed, RedPacketError::AlreadyClaimed);
    require!(
        status.pending_request == Some(request_id),
        RedPacketError::RequestMismatch
    );

    request.fulfilled = true;
    request.randomness = word;
    status.pending_request = None;

    let pool = &mut ctx.accounts.pool;
    if pool.is_exhausted() {
        // Other claims emptied the pool while this one waited.
        msg!(
            "pool {} exhausted before request {} was fulfilled",
            pool.id,
            request_id
        );
        return Ok(());
    }

    let amount = pool.next_share(&word);
    pool.record_payout(amount)?;
    status.has_claimed = true;
    status.amount = amount;

    if amount > 0 {
        let id_bytes = pool.id.to_le_bytes();
        let signer_seeds: &[&[&[u8]]] = &[&[RedPacketPool::SEED, &id_bytes, &[pool.bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.claimer_token_account.to_account_info(),
                    authority: pool.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;
    }

    emit!(RedPacketClaimed {
        id: pool.id,
        claimer: status.claimer,
        amount,
        randomness: word,
    });
    Ok(())
}
