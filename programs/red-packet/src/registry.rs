//! Deterministic addresses for token-bound accounts and gift NFTs.
//!
//! An account's address is a pure function of its identity tuple, so it can
//! be computed (and funded) before the account record exists.

use anchor_lang::prelude::*;

use crate::constants::NFT_MINT_SEED;
use crate::state::{GiftCollection, TokenBoundAccount};

/// Everything that determines a token-bound account's address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountIdentity {
    pub implementation: Pubkey,
    pub salt: [u8; 32],
    pub chain_id: u64,
    pub token_contract: Pubkey,
    pub token_id: u64,
}

impl AccountIdentity {
    pub fn address(&self) -> (Pubkey, u8) {
        derive_account_address(
            &self.implementation,
            &self.salt,
            self.chain_id,
            &self.token_contract,
            self.token_id,
        )
    }
}

/// Address (and bump) of the token-bound account for this identity.
pub fn derive_account_address(
    implementation: &Pubkey,
    salt: &[u8; 32],
    chain_id: u64,
    token_contract: &Pubkey,
    token_id: u64,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            TokenBoundAccount::SEED,
            implementation.as_ref(),
            salt,
            &chain_id.to_le_bytes(),
            token_contract.as_ref(),
            &token_id.to_le_bytes(),
        ],
        &crate::ID,
    )
}

/// Salt used for gift accounts: the token id, big-endian, right-aligned in 32 bytes.
pub fn salt_for_token_id(token_id: u64) -> [u8; 32] {
    let mut salt = [0u8; 32];
    salt[24..].copy_from_slice(&token_id.to_be_bytes());
    salt
}

pub fn derive_collection() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GiftCollection::SEED], &crate::ID)
}

/// Mint of gift NFT `token_id` in `collection`.
pub fn derive_nft_mint(collection: &Pubkey, token_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[NFT_MINT_SEED, collection.as_ref(), &token_id.to_le_bytes()],
        &crate::ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> AccountIdentity {
        AccountIdentity {
            implementation: crate::ID,
            salt: salt_for_token_id(0),
            chain_id: 1,
            token_contract: derive_collection().0,
            token_id: 0,
        }
    }

    #[test]
    fn test_address_is_deterministic() {
        let id = identity();
        assert_eq!(id.address(), id.address());
        assert_eq!(
            id.address(),
            derive_account_address(
                &id.implementation,
                &id.salt,
                id.chain_id,
                &id.token_contract,
                id.token_id
            )
        );
    }

    #[test]
    fn test_each_field_changes_address() {
        let base = identity();
        let base_addr = base.address().0;
        let variants = [
            AccountIdentity { implementation: Pubkey::new_unique(), ..base },
            AccountIdentity { salt: [1; 32], ..base },
            AccountIdentity { chain_id: 2, ..base },
            AccountIdentity { token_contract: Pubkey::new_unique(), ..base },
            AccountIdentity { token_id: 1, ..base },
        ];
        for v in variants {
            assert_ne!(v.address().0, base_addr);
        }
    }

    #[test]
    fn test_salt_for_token_id() {
        assert_eq!(salt_for_token_id(0), [0u8; 32]);
        let salt = salt_for_token_id(0x0102);
        assert_eq!(salt[30], 0x01);
        assert_eq!(salt[31], 0x02);
        assert!(salt[..30].iter().all(|b| *b == 0));
        assert_eq!(&salt_for_token_id(u64::MAX)[24..], &[0xFF; 8]);
    }

    #[test]
    fn test_nft_mints_are_distinct() {
        let collection = derive_collection().0;
        assert_ne!(derive_nft_mint(&collection, 0).0, derive_nft_mint(&collection, 1).0);
    }
}
