use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{INVALID_SIGNER, IS_VALID_SIGNER_MAGIC};
use crate::state::{BoundToken, TokenBoundAccount};
use super::owner_of;

#[derive(Accounts)]
pub struct BoundAccountView<'info> {
    pub bound_account: Account<'info, TokenBoundAccount>,
}

#[derive(Accounts)]
pub struct BoundAccountHolder<'info> {
    pub bound_account: Account<'info, TokenBoundAccount>,

    /// Token account that should hold the bound NFT.
    pub holder_token_account: Account<'info, TokenAccount>,
}

pub fn owner_handler(ctx: Context<BoundAccountHolder>) -> Result<Pubkey> {
    owner_of(
        &ctx.accounts.holder_token_account,
        &ctx.accounts.bound_account.bound_mint(),
    )
}

/// Magic value if `signer` holds the bound NFT, zeroes otherwise. `context` is ignored.
pub fn is_valid_signer_handler(
    ctx: Context<BoundAccountHolder>,
    signer: Pubkey,
    _context: Vec<u8>,
) -> Result<[u8; 4]> {
    let owner = owner_of(
        &ctx.accounts.holder_token_account,
        &ctx.accounts.bound_account.bound_mint(),
    );
    Ok(match owner {
        Ok(owner) if owner == signer => IS_VALID_SIGNER_MAGIC,
        _ => INVALID_SIGNER,
    })
}

pub fn token_handler(ctx: Context<BoundAccountView>) -> Result<BoundToken> {
    let account = &ctx.accounts.bound_account;
    Ok(BoundToken {
        chain_id: account.chain_id,
        token_contract: account.token_contract,
        token_id: account.token_id,
    })
}

pub fn state_handler(ctx: Context<BoundAccountView>) -> Result<u64> {
    Ok(ctx.accounts.bound_account.state)
}
