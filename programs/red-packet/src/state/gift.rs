use anchor_lang::prelude::*;

use crate::registry::AccountIdentity;

/// What was issued for one gift NFT.
/// PDA seeds = [b"gift", token_id_le].
#[account]
pub struct GiftRecord {
    pub token_id: u64,
    /// The gift NFT mint (supply 1, decimals 0).
    pub nft_mint: Pubkey,
    /// The token-bound account holding the gift funds.
    pub account: Pubkey,
    // Identity of `account`, kept so redemption can deploy it.
    pub implementation: Pubkey,
    pub salt: [u8; 32],
    pub chain_id: u64,
    pub token_contract: Pubkey,
    /// Mint of the funds sent to `account`.
    pub mint: Pubkey,
    pub amount: u64,
    pub issuer: Pubkey,
    pub recipient: Pubkey,
    /// Bump seed for this PDA.
    pub bump: u8,
}

impl GiftRecord {
    pub const SEED: &'static [u8] = b"gift";
    // discriminator(8) + token_id(8) + nft_mint(32) + account(32)
    // + implementation(32) + salt(32) + chain_id(8) + token_contract(32)
    // + mint(32) + amount(8) + issuer(32) + recipient(32) + bump(1)
    pub const SIZE: usize = 8 + 8 + 32 + 32 + 32 + 32 + 8 + 32 + 32 + 8 + 32 + 32 + 1;

    pub fn identity(&self) -> AccountIdentity {
        AccountIdentity {
            implementation: self.implementation,
            salt: self.salt,
            chain_id: self.chain_id,
            token_contract: self.token_contract,
            token_id: self.token_id,
        }
    }
}
