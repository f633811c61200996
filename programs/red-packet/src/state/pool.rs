use anchor_lang::prelude::*;

use crate::distribution::{random_amount, word_to_u128};
use crate::errors::RedPacketError;

/// A funded pool split into a fixed number of randomly sized packets.
/// PDA seeds = [b"pool", pool_id_le]. Funds sit in the vault token account
/// at [b"pool_vault", pool], owned by this PDA.
#[account]
pub struct RedPacketPool {
    pub id: u64,
    pub creator: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub total_amount: u64,
    pub remaining_amount: u64,
    pub total_packets: u64,
    pub remaining_packets: u64,
    /// Bump seed for this PDA.
    pub bump: u8,
    /// Bump seed for the vault PDA.
    pub vault_bump: u8,
}

impl RedPacketPool {
    pub const SEED: &'static [u8] = b"pool";
    // discriminator(8) + id(8) + creator(32) + mint(32) + vault(32)
    // + total_amount(8) + remaining_amount(8) + total_packets(8)
    // + remaining_packets(8) + bump(1) + vault_bump(1)
    pub const SIZE: usize = 8 + 8 + 32 + 32 + 32 + 8 + 8 + 8 + 8 + 1 + 1; // 146

    pub fn is_exhausted(&self) -> bool {
        self.remaining_packets == 0
    }

    /// Size of the next packet for the given random word. The last packet
    /// takes everything that is left.
    pub fn next_share(&self, randomness: &[u8; 32]) -> u64 {
        random_amount(
            self.remaining_amount,
            self.remaining_packets,
            word_to_u128(randomness),
        )
    }

    /// Takes one packet worth `amount` out of the pool.
    pub fn record_payout(&mut self, amount: u64) -> Result<()> {
        require!(!self.is_exhausted(), RedPacketError::PoolExhausted);
        self.remaining_amount = self
            .remaining_amount
            .checked_sub(amount)
            .ok_or(error!(RedPacketError::InsufficientFunds))?;
        self.remaining_packets -= 1;
        Ok(())
    }
}

/// Per (pool, claimer) claim progress.
/// PDA seeds = [b"claim", pool, claimer].
#[account]
pub struct ClaimStatus {
    pub pool: Pubkey,
    /// Pubkey::default() until the first claim initializes this record.
    pub claimer: Pubkey,
    pub has_claimed: bool,
    /// Request id awaiting fulfillment, if any.
    pub pending_request: Option<u64>,
    /// Amount paid out, once claimed.
    pub amount: u64,
    /// Bump seed for this PDA.
    pub bump: u8,
}

impl ClaimStatus {
    pub const SEED: &'static [u8] = b"claim";
    // discriminator(8) + pool(32) + claimer(32) + has_claimed(1)
    // + pending_request(1 + 8) + amount(8) + bump(1)
    pub const SIZE: usize = 8 + 32 + 32 + 1 + 9 + 8 + 1; // 91
}

/// An outstanding (or answered) request for random words.
/// PDA seeds = [b"request", request_id_le].
#[account]
pub struct RandomnessRequest {
    pub request_id: u64,
    pub claimer: Pubkey,
    pub pool: Pubkey,
    pub pool_id: u64,
    /// Slot the request was made in. Fulfillment waits for confirmations past it.
    pub request_slot: u64,
    pub num_words: u32,
    pub fulfilled: bool,
    /// First delivered word, zero until fulfilled.
    pub randomness: [u8; 32],
    /// Bump seed for this PDA.
    pub bump: u8,
}

impl RandomnessRequest {
    pub const SEED: &'static [u8] = b"request";
    // discriminator(8) + request_id(8) + claimer(32) + pool(32) + pool_id(8)
    // + request_slot(8) + num_words(4) + fulfilled(1) + randomness(32) + bump(1)
    pub const SIZE: usize = 8 + 8 + 32 + 32 + 8 + 8 + 4 + 1 + 32 + 1; // 134
}
