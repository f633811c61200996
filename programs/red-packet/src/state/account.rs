use anchor_lang::prelude::*;

use crate::errors::RedPacketError;
use crate::registry::{derive_nft_mint, AccountIdentity};

/// A smart account owned by whoever holds one specific NFT.
/// PDA seeds = [b"account", implementation, salt, chain_id_le, token_contract, token_id_le].
#[account]
pub struct TokenBoundAccount {
    /// Program that executes on behalf of this account.
    pub implementation: Pubkey,
    pub salt: [u8; 32],
    pub chain_id: u64,
    /// Collection the bound NFT belongs to.
    pub token_contract: Pubkey,
    pub token_id: u64,
    /// Nonce, incremented after every successful execution.
    pub state: u64,
    /// Set once the identity above has been written.
    pub initialized: bool,
    /// Bump seed for this PDA.
    pub bump: u8,
}

impl TokenBoundAccount {
    pub const SEED: &'static [u8] = b"account";
    // discriminator(8) + implementation(32) + salt(32) + chain_id(8)
    // + token_contract(32) + token_id(8) + state(8) + initialized(1) + bump(1)
    pub const SIZE: usize = 8 + 32 + 32 + 8 + 32 + 8 + 8 + 1 + 1; // 130

    /// Writes the identity on first use. Returns false (and changes nothing)
    /// if the account was already deployed.
    pub fn deploy(&mut self, identity: &AccountIdentity, bump: u8) -> bool {
        if self.initialized {
            return false;
        }
        self.implementation = identity.implementation;
        self.salt = identity.salt;
        self.chain_id = identity.chain_id;
        self.token_contract = identity.token_contract;
        self.token_id = identity.token_id;
        self.state = 0;
        self.initialized = true;
        self.bump = bump;
        true
    }

    pub fn identity(&self) -> AccountIdentity {
        AccountIdentity {
            implementation: self.implementation,
            salt: self.salt,
            chain_id: self.chain_id,
            token_contract: self.token_contract,
            token_id: self.token_id,
        }
    }

    /// Mint of the NFT this account is bound to. Only the gift collection
    /// ever creates these mints, so other `token_contract`s have no holder.
    pub fn bound_mint(&self) -> Pubkey {
        derive_nft_mint(&self.token_contract, self.token_id).0
    }

    pub fn increment_state(&mut self) -> Result<u64> {
        self.state = self
            .state
            .checked_add(1)
            .ok_or(error!(RedPacketError::ArithmeticOverflow))?;
        Ok(self.state)
    }
}

/// Kind of call an account is asked to make. Only `Call` is executed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Call,
    DelegateCall,
    Create,
    Create2,
}

/// Token an account is bound to, as returned by `account_token`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundToken {
    pub chain_id: u64,
    pub token_contract: Pubkey,
    pub token_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> TokenBoundAccount {
        TokenBoundAccount {
            implementation: Pubkey::default(),
            salt: [0; 32],
            chain_id: 0,
            token_contract: Pubkey::default(),
            token_id: 0,
            state: 0,
            initialized: false,
            bump: 0,
        }
    }

    fn identity(token_id: u64) -> AccountIdentity {
        AccountIdentity {
            implementation: crate::ID,
            salt: [9; 32],
            chain_id: 101,
            token_contract: Pubkey::new_unique(),
            token_id,
        }
    }

    #[test]
    fn test_deploy_writes_identity() {
        let mut acct = blank();
        let id = identity(7);
        assert!(acct.deploy(&id, 253));
        assert!(acct.initialized);
        assert_eq!(acct.identity(), id);
        assert_eq!(acct.state, 0);
        assert_eq!(acct.bump, 253);
    }

    #[test]
    fn test_deploy_twice_keeps_first_identity() {
        let mut acct = blank();
        let first = identity(1);
        acct.deploy(&first, 250);
        acct.increment_state().unwrap();

        assert!(!acct.deploy(&identity(2), 1));
        assert_eq!(acct.identity(), first);
        assert_eq!(acct.state, 1);
        assert_eq!(acct.bump, 250);
    }

    #[test]
    fn test_state_increments() {
        let mut acct = blank();
        acct.deploy(&identity(3), 255);
        assert_eq!(acct.increment_state().unwrap(), 1);
        assert_eq!(acct.increment_state().unwrap(), 2);
    }

    #[test]
    fn test_state_overflow() {
        let mut acct = blank();
        acct.state = u64::MAX;
        assert!(acct.increment_state().is_err());
    }

    #[test]
    fn test_bound_mint_depends_on_token() {
        let mut a = blank();
        let mut b = blank();
        let id = identity(4);
        a.deploy(&id, 255);
        b.deploy(&AccountIdentity { token_id: 5, ..id }, 255);
        assert_ne!(a.bound_mint(), b.bound_mint());
        assert_eq!(a.bound_mint(), derive_nft_mint(&id.token_contract, 4).0);
    }
}
