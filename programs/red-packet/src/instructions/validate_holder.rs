use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::errors::RedPacketError;

/// Returns the wallet holding the NFT `nft_mint`, as proven by `holder_token_account`.
pub fn owner_of(holder_token_account: &TokenAccount, nft_mint: &Pubkey) -> Result<Pubkey> {
    require_keys_eq!(
        holder_token_account.mint,
        *nft_mint,
        RedPacketError::InvalidTokenAccount
    );
    require!(
        holder_token_account.amount == 1,
        RedPacketError::NotTokenHolder
    );
    Ok(holder_token_account.owner)
}

/// Fails with `Unauthorized` unless `signer` currently holds `nft_mint`.
pub fn require_holder(
    signer: &Pubkey,
    holder_token_account: &TokenAccount,
    nft_mint: &Pubkey,
) -> Result<()> {
    let owner = owner_of(holder_token_account, nft_mint)?;
    require_keys_eq!(*signer, owner, RedPacketError::Unauthorized);
    Ok(())
}
