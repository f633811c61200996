use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::POOL_VAULT_SEED;
use crate::errors::RedPacketError;
use crate::events::RedPacketCreated;
use crate::state::{ProtocolConfig, RedPacketPool};

#[derive(Accounts)]
pub struct CreateRedPacket<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [ProtocolConfig::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, ProtocolConfig>>,

    /// Pool for the next pool id.
    #[account(
        init,
        payer = creator,
        space = RedPacketPool::SIZE,
        seeds = [RedPacketPool::SEED, config.pool_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub pool: Box<Account<'info, RedPacketPool>>,

    #[account(
        init,
        payer = creator,
        token::mint = mint,
        token::authority = pool,
        seeds = [POOL_VAULT_SEED, pool.key().as_ref()],
        bump,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = creator,
    )]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateRedPacket>, num_packets: u64, amount: u64) -> Result<()> {
    require!(amount > 0, RedPacketError::InvalidAmount);
    require!(num_packets > 0, RedPacketError::InvalidPacketCount);
    // Every packet must be able to pay at least one unit.
    require!(amount >= num_packets, RedPacketError::InvalidPacketCount);
    require_keys_neq!(
        ctx.accounts.mint.key(),
        Pubkey::default(),
        RedPacketError::InvalidMint
    );

    let id = ctx.accounts.config.next_pool_id()?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.creator_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.creator.to_account_info(),
            },
        ),
        amount,
    )?;

    let pool = &mut ctx.accounts.pool;
    pool.id = id;
    pool.creator = ctx.accounts.creator.key();
    pool.mint = ctx.accounts.mint.key();
    pool.vault = ctx.accounts.vault.key();
    pool.total_amount = amount;
    pool.remaining_amount = amount;
    pool.total_packets = num_packets;
    pool.remaining_packets = num_packets;
    pool.bump = ctx.bumps.pool;
    pool.vault_bump = ctx.bumps.vault;

    emit!(RedPacketCreated {
        id,
        total_amount: amount,
        num_packets,
    });
    Ok(())
}
