use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::{get_return_data, invoke_signed};
use anchor_spl::token::TokenAccount;

use crate::errors::RedPacketError;
use crate::state::{Operation, TokenBoundAccount};
use super::require_holder;

#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct Execute<'info> {
    /// Must hold the bound NFT.
    pub signer: Signer<'info>,

    #[account(mut)]
    pub bound_account: Account<'info, TokenBoundAccount>,

    /// Token account holding the bound NFT.
    pub holder_token_account: Account<'info, TokenAccount>,

    /// The call target. A program when `data` is non-empty, otherwise the
    /// recipient of `value` lamports (pass it writable in that case).
    /// CHECK: Validated against `to`; the callee validates itself.
    #[account(
        constraint = target.key() == to @ RedPacketError::TargetMismatch,
    )]
    pub target: UncheckedAccount<'info>,
    // remaining_accounts: accounts forwarded to the callee, in order.
}

pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, Execute<'info>>,
    _to: Pubkey,
    value: u64,
    data: Vec<u8>,
    operation: Operation,
) -> Result<Vec<u8>> {
    let accounts = ctx.accounts;
    require_holder(
        &accounts.signer.key(),
        &accounts.holder_token_account,
        &accounts.bound_account.bound_mint(),
    )?;
    require!(
        operation == Operation::Call,
        RedPacketError::UnsupportedOperation
    );

    let target = accounts.target.to_account_info();
    call_as_bound_account(
        &mut accounts.bound_account,
        &target,
        value,
        data,
        ctx.remaining_accounts,
    )
}

/// Performs a call on behalf of `bound_account` and bumps its nonce.
///
/// With empty `data` this moves `value` lamports to `target`, keeping the
/// bound account rent-exempt. Otherwise it invokes program `target` with
/// `accounts` as the instruction's accounts; wherever the bound account
/// appears among them it signs. Return data is passed back when the callee
/// set it.
pub fn call_as_bound_account<'info>(
    bound_account: &mut Account<'info, TokenBoundAccount>,
    target: &AccountInfo<'info>,
    value: u64,
    data: Vec<u8>,
    accounts: &[AccountInfo<'info>],
) -> Result<Vec<u8>> {
    require_keys_eq!(
        bound_account.implementation,
        crate::ID,
        RedPacketError::ImplementationMissing
    );

    let account_info = bound_account.to_account_info();
    let result = if data.is_empty() {
        transfer_lamports(&account_info, target, value)?;
        Vec::new()
    } else {
        require!(target.executable, RedPacketError::TargetNotExecutable);
        require!(value == 0, RedPacketError::NativeValueToProgram);

        let metas = accounts
            .iter()
            .map(|a| AccountMeta {
                pubkey: *a.key,
                is_signer: a.is_signer || a.key == account_info.key,
                is_writable: a.is_writable,
            })
            .collect();
        let ix = Instruction {
            program_id: *target.key,
            accounts: metas,
            data,
        };

        let mut infos = accounts.to_vec();
        infos.push(target.clone());

        let chain_id = bound_account.chain_id.to_le_bytes();
        let token_id = bound_account.token_id.to_le_bytes();
        let bump = [bound_account.bump];
        let seeds: &[&[u8]] = &[
            TokenBoundAccount::SEED,
            bound_account.implementation.as_ref(),
            &bound_account.salt,
            &chain_id,
            bound_account.token_contract.as_ref(),
            &token_id,
            &bump,
        ];
        invoke_signed(&ix, &infos, &[seeds])?;

        match get_return_data() {
            Some((program_id, ret)) if program_id == *target.key => ret,
            _ => Vec::new(),
        }
    };

    let nonce = bound_account.increment_state()?;
    msg!("account {} executed, state={}", account_info.key, nonce);
    Ok(result)
}

fn transfer_lamports(from: &AccountInfo, to: &AccountInfo, value: u64) -> Result<()> {
    if value == 0 {
        return Ok(());
    }
    let rent_floor = Rent::get()?.minimum_balance(from.data_len());
    let spendable = from.lamports().saturating_sub(rent_floor);
    require!(value <= spendable, RedPacketError::InsufficientFunds);

    let new_to = to
        .lamports()
        .checked_add(value)
        .ok_or(error!(RedPacketError::ArithmeticOverflow))?;
    **from.try_borrow_mut_lamports()? -= value;
    **to.try_borrow_mut_lamports()? = new_to;
    Ok(())
}
