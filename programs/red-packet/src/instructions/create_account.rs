use anchor_lang::prelude::*;

use crate::events::AccountCreated;
use crate::registry::AccountIdentity;
use crate::state::TokenBoundAccount;

#[derive(Accounts)]
#[instruction(
    implementation: Pubkey,
    salt: [u8; 32],
    chain_id: u64,
    token_contract: Pubkey,
    token_id: u64,
)]
pub struct CreateAccount<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Created on first call, left untouched afterwards.
    #[account(
        init_if_needed,
        payer = payer,
        space = TokenBoundAccount::SIZE,
        seeds = [
            TokenBoundAccount::SEED,
            implementation.as_ref(),
            salt.as_ref(),
            chain_id.to_le_bytes().as_ref(),
            token_contract.as_ref(),
            token_id.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub bound_account: Account<'info, TokenBoundAccount>,

    pub system_program: Program<'info, System>,
}

/// Any identity gets an address and a record, but only accounts whose
/// `token_contract` is the gift collection can resolve a holder: the bound
/// NFT is always the collection's mint PDA for `token_id`.
pub fn handler(
    ctx: Context<CreateAccount>,
    implementation: Pubkey,
    salt: [u8; 32],
    chain_id: u64,
    token_contract: Pubkey,
    token_id: u64,
) -> Result<Pubkey> {
    let identity = AccountIdentity {
        implementation,
        salt,
        chain_id,
        token_contract,
        token_id,
    };
    let bump = ctx.bumps.bound_account;
    let account = ctx.accounts.bound_account.key();
    deploy_bound_account(&mut ctx.accounts.bound_account, account, &identity, bump);
    Ok(account)
}

/// Writes `identity` into a freshly created account record and emits
/// `AccountCreated`. Does nothing for an account that already exists.
pub fn deploy_bound_account(
    bound_account: &mut TokenBoundAccount,
    address: Pubkey,
    identity: &AccountIdentity,
    bump: u8,
) {
    if !bound_account.deploy(identity, bump) {
        msg!("account {} already deployed", address);
        return;
    }
    emit!(AccountCreated {
        account: address,
        implementation: identity.implementation,
        salt: identity.salt,
        chain_id: identity.chain_id,
        token_contract: identity.token_contract,
        token_id: identity.token_id,
    });
}
