use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{spl_token, Mint, Token, TokenAccount};

use crate::state::{GiftRecord, TokenBoundAccount};
use super::{call_as_bound_account, deploy_bound_account, require_holder};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct RedeemRedPacket<'info> {
    /// Current holder of the gift NFT.
    #[account(mut)]
    pub holder: Signer<'info>,

    #[account(
        seeds = [GiftRecord::SEED, token_id.to_le_bytes().as_ref()],
        bump = gift.bump,
    )]
    pub gift: Box<Account<'info, GiftRecord>>,

    /// Deployed here if nobody has called `create_account` for it yet.
    #[account(
        init_if_needed,
        payer = holder,
        space = TokenBoundAccount::SIZE,
        seeds = [
            TokenBoundAccount::SEED,
            gift.implementation.as_ref(),
            gift.salt.as_ref(),
            gift.chain_id.to_le_bytes().as_ref(),
            gift.token_contract.as_ref(),
            token_id.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub bound_account: Box<Account<'info, TokenBoundAccount>>,

    /// Holder's token account for the gift NFT.
    pub holder_nft_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = bound_account,
    )]
    pub bound_token_account: Box<Account<'info, TokenAccount>>,

    #[account(address = gift.mint)]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = holder,
        associated_token::mint = mint,
        associated_token::authority = holder,
    )]
    pub holder_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Sweeps the gift account's whole balance of the gifted mint to the
/// holder. The sweep runs through the account's own execute path, so it
/// advances the account's state like any other call.
pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, RedeemRedPacket<'info>>,
    _token_id: u64,
) -> Result<Vec<u8>> {
    let accounts = ctx.accounts;
    let address = accounts.bound_account.key();
    deploy_bound_account(
        &mut accounts.bound_account,
        address,
        &accounts.gift.identity(),
        ctx.bumps.bound_account,
    );

    require_holder(
        &accounts.holder.key(),
        &accounts.holder_nft_account,
        &accounts.gift.nft_mint,
    )?;

    let amount = accounts.bound_token_account.amount;
    let transfer_ix = spl_token::instruction::transfer(
        &accounts.token_program.key(),
        &accounts.bound_token_account.key(),
        &accounts.holder_token_account.key(),
        &accounts.bound_account.key(),
        &[],
        amount,
    )?;

    let transfer_accounts = [
        accounts.bound_token_account.to_account_info(),
        accounts.holder_token_account.to_account_info(),
        accounts.bound_account.to_account_info(),
    ];
    let token_program = accounts.token_program.to_account_info();
    let ret = call_as_bound_account(
        &mut accounts.bound_account,
        &token_program,
        0,
        transfer_ix.data,
        &transfer_accounts,
    )?;

    msg!(
        "gift {} redeemed: {} to {}",
        accounts.gift.token_id,
        amount,
        accounts.holder.key()
    );
    Ok(ret)
}
