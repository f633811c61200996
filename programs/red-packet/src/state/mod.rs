use anchor_lang::prelude::*;

use crate::errors::RedPacketError;

pub mod account;
pub mod gift;
pub mod pool;

pub use account::*;
pub use gift::*;
pub use pool::*;

/// Global protocol configuration. Singleton PDA (seeds = [b"config"]).
#[account]
pub struct ProtocolConfig {
    /// The admin who initialized the protocol.
    pub admin: Pubkey,
    /// Pending admin for two-step transfer (Pubkey::default() = no pending transfer).
    pub pending_admin: Pubkey,
    /// The only signer allowed to deliver random words.
    pub vrf_coordinator: Pubkey,
    /// Oracle key hash forwarded with every randomness request.
    pub key_hash: [u8; 32],
    /// Chain identifier written into every token-bound account this program derives.
    pub chain_id: u64,
    /// Next red packet pool id.
    pub pool_count: u64,
    /// Next randomness request id.
    pub request_count: u64,
    /// Bump seed for the config PDA.
    pub bump: u8,
}

impl ProtocolConfig {
    pub const SEED: &'static [u8] = b"config";
    // discriminator + admin + pending_admin + vrf_coordinator + key_hash
    // + chain_id + pool_count + request_count + bump
    pub const SIZE: usize = 8 + 32 + 32 + 32 + 32 + 8 + 8 + 8 + 1; // 161

    /// Hands out the next pool id.
    pub fn next_pool_id(&mut self) -> Result<u64> {
        let id = self.pool_count;
        self.pool_count = id
            .checked_add(1)
            .ok_or(error!(RedPacketError::ArithmeticOverflow))?;
        Ok(id)
    }

    /// Hands out the next randomness request id.
    pub fn next_request_id(&mut self) -> Result<u64> {
        let id = self.request_count;
        self.request_count = id
            .checked_add(1)
            .ok_or(error!(RedPacketError::ArithmeticOverflow))?;
        Ok(id)
    }
}

/// The gift NFT collection. Singleton PDA (seeds = [b"collection"]).
///
/// Its address is the `token_contract` of every gift-bound account, and it is
/// the mint authority of every gift NFT mint.
#[account]
pub struct GiftCollection {
    /// Token id the next issued gift receives. Ids start at 0.
    pub next_token_id: u64,
    /// Bump seed for the collection PDA.
    pub bump: u8,
}

impl GiftCollection {
    pub const SEED: &'static [u8] = b"collection";
    // discriminator(8) + next_token_id(8) + bump(1)
    pub const SIZE: usize = 8 + 8 + 1;

    pub fn advance(&mut self) -> Result<u64> {
        let id = self.next_token_id;
        self.next_token_id = id
            .checked_add(1)
            .ok_or(error!(RedPacketError::ArithmeticOverflow))?;
        Ok(id)
    }
}
