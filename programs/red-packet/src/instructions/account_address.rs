use anchor_lang::prelude::*;

use crate::registry::derive_account_address;

#[derive(Accounts)]
pub struct AccountAddress {}

pub fn handler(
    _ctx: Context<AccountAddress>,
    implementation: Pubkey,
    salt: [u8; 32],
    chain_id: u64,
    token_contract: Pubkey,
    token_id: u64,
) -> Result<Pubkey> {
    let (address, _) =
        derive_account_address(&implementation, &salt, chain_id, &token_contract, token_id);
    Ok(address)
}
