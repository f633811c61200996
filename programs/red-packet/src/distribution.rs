//! Random packet sizing.
//!
//! Each claim draws uniformly from `[1, 2 * floor(remaining / packets)]`, so
//! the expected share stays near the running average. The final packet takes
//! whatever is left, which makes the payouts sum to the pool total.

/// Reads the first 16 bytes of a random word as a little-endian integer.
pub fn word_to_u128(word: &[u8; 32]) -> u128 {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&word[..16]);
    u128::from_le_bytes(bytes)
}

/// Size of the next packet.
///
/// Returns `remaining_amount` when at most one packet is left. Returns 0 when
/// fewer units than packets remain (the 2x cap rounds down to zero).
pub fn random_amount(remaining_amount: u64, remaining_packets: u64, randomness: u128) -> u64 {
    if remaining_packets <= 1 {
        return remaining_amount;
    }
    // remaining_packets >= 2, so this cannot overflow.
    let max_share = (remaining_amount / remaining_packets) * 2;
    if max_share == 0 {
        return 0;
    }
    (randomness % max_share as u128) as u64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::hash::hashv;

    #[test]
    fn test_last_packet_takes_everything() {
        assert_eq!(random_amount(777, 1, 12345), 777);
        assert_eq!(random_amount(0, 1, 12345), 0);
    }

    #[test]
    fn test_share_bounds() {
        // 1000 / 4 -> cap 500
        assert_eq!(random_amount(1000, 4, 0), 1);
        assert_eq!(random_amount(1000, 4, 499), 500);
        assert_eq!(random_amount(1000, 4, 500), 1);
        assert_eq!(random_amount(1000, 4, u128::MAX), (u128::MAX % 500) as u64 + 1);
    }

    #[test]
    fn test_fewer_units_than_packets() {
        assert_eq!(random_amount(3, 5, 42), 0);
    }

    #[test]
    fn test_large_draw_can_starve_later_packets() {
        // 3 units over 3 packets: the first draw may take 2.
        let first = random_amount(3, 3, 1);
        assert_eq!(first, 2);
        assert_eq!(random_amount(3 - first, 2, 7), 0);
        assert_eq!(random_amount(3 - first, 1, 7), 1);
    }

    #[test]
    fn test_large_amounts_do_not_overflow() {
        let share = random_amount(u64::MAX, 2, u128::MAX);
        assert!(share >= 1 && share <= u64::MAX - 1);
    }

    #[test]
    fn test_word_to_u128_uses_low_half() {
        let mut word = [0u8; 32];
        word[0] = 1;
        word[16] = 0xFF;
        assert_eq!(word_to_u128(&word), 1);
        word[15] = 0x80;
        assert_eq!(word_to_u128(&word), (1u128 << 127) | 1);
    }

    #[test]
    fn test_seeded_runs_sum_to_total() {
        for (seed, total, packets) in [(1u8, 1000u64, 4u64), (2, 1_000_000, 10), (3, 50, 50), (4, 7, 3)] {
            let mut remaining = total;
            let mut sum = 0u64;
            for i in 0..packets {
                let word = hashv(&[&[seed], &i.to_le_bytes()]).to_bytes();
                let share = random_amount(remaining, packets - i, word_to_u128(&word));
                assert!(share <= remaining);
                remaining -= share;
                sum += share;
            }
            assert_eq!(remaining, 0);
            assert_eq!(sum, total);
        }
    }
}
