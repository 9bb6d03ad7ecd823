use ring::{Polynomial, Ring};

/// Number of leading coefficients reserved for the mailbox identifier.
const MAILBOX_ID_BITS: usize = 64;

/// Writes the bits of `mailbox_id` one per coefficient into the first 64
/// slots and shifts the message into the slots after them. Deterministic
/// bit layout, not a hash; [`extract_mailbox_id`] inverts it.
pub fn embed_mailbox_id(ring: &Ring, mailbox_id: u64, message: &Polynomial) -> Polynomial {
    let n: usize = ring.degree();
    let mut coeffs: Vec<i64> = vec![0i64; n];
    for (i, c) in coeffs.iter_mut().enumerate().take(MAILBOX_ID_BITS) {
        *c = ((mailbox_id >> i) & 1) as i64;
    }
    for (i, &m) in message.coefficients().iter().enumerate() {
        if i + MAILBOX_ID_BITS >= n {
            break;
        }
        coeffs[i + MAILBOX_ID_BITS] = m as i64;
    }
    ring.from_coefficients(&coeffs)
}

/// Recovers a mailbox identifier by XOR-folding the first 64 coefficients,
/// each rotated by its position. On a polynomial produced by
/// [`embed_mailbox_id`] this returns the embedded id exactly.
pub fn extract_mailbox_id(poly: &Polynomial) -> u64 {
    let mut id: u64 = 0;
    for (i, &c) in poly
        .coefficients()
        .iter()
        .enumerate()
        .take(MAILBOX_ID_BITS)
    {
        id ^= c.rotate_left((i % 64) as u32);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring::RingParams;

    #[test]
    fn embed_extract_roundtrip() {
        let ring: Ring = Ring::new(RingParams::medium());
        let message: Polynomial = ring.encode(&[10, 20, 30]).unwrap();
        for id in [0u64, 1, 42, 0xDEAD_BEEF_CAFE_F00D, u64::MAX] {
            let embedded: Polynomial = embed_mailbox_id(&ring, id, &message);
            assert_eq!(extract_mailbox_id(&embedded), id);
        }
    }

    #[test]
    fn embed_shifts_message_past_id_block() {
        let ring: Ring = Ring::new(RingParams::medium());
        let message: Polynomial = ring.encode(&[10, 20, 30]).unwrap();
        let embedded: Polynomial = embed_mailbox_id(&ring, 0, &message);
        assert_eq!(embedded.coefficients()[64], 10);
        assert_eq!(embedded.coefficients()[65], 20);
        assert_eq!(embedded.coefficients()[66], 30);
        assert!(embedded.coefficients()[..64].iter().all(|&c| c == 0));
    }

    #[test]
    fn message_overflow_is_truncated() {
        let ring: Ring = Ring::new(RingParams::medium());
        let long: Polynomial = ring.encode(&vec![1i64; 256]).unwrap();
        let embedded: Polynomial = embed_mailbox_id(&ring, 7, &long);
        assert_eq!(embedded.len(), 256);
        assert_eq!(extract_mailbox_id(&embedded), 7);
    }
}
