use ring::{Polynomial, Ring, RingError};

/// Optional homomorphic back end: mirrors the depth-0 ring operations over
/// ciphertexts, so that decrypt(op(ct...)) equals op(plaintext...). Injected
/// where encrypted relaying is wanted; the routing core never requires it.
pub trait HomomorphicBackend {
    type Ciphertext;
    type Error: std::error::Error;

    fn encrypt(&self, coefficients: &[u64]) -> Result<Self::Ciphertext, Self::Error>;
    fn decrypt(&self, ciphertext: &Self::Ciphertext) -> Result<Vec<u64>, Self::Error>;

    fn add(
        &self,
        a: &Self::Ciphertext,
        b: &Self::Ciphertext,
    ) -> Result<Self::Ciphertext, Self::Error>;
    fn sub(
        &self,
        a: &Self::Ciphertext,
        b: &Self::Ciphertext,
    ) -> Result<Self::Ciphertext, Self::Error>;
    fn mul_scalar(&self, a: &Self::Ciphertext, scalar: i64)
    -> Result<Self::Ciphertext, Self::Error>;
    fn rotate(
        &self,
        a: &Self::Ciphertext,
        positions: i64,
    ) -> Result<Self::Ciphertext, Self::Error>;
}

/// Identity back end: "ciphertexts" are plain ring elements. Used as the
/// default in tests and wherever the relay runs unencrypted.
pub struct PlainBackend<'r> {
    ring: &'r Ring,
}

impl<'r> PlainBackend<'r> {
    pub fn new(ring: &'r Ring) -> Self {
        Self { ring }
    }
}

impl HomomorphicBackend for PlainBackend<'_> {
    type Ciphertext = Polynomial;
    type Error = RingError;

    fn encrypt(&self, coefficients: &[u64]) -> Result<Polynomial, RingError> {
        let signed: Vec<i64> = coefficients.iter().map(|&c| c as i64).collect();
        self.ring.encode(&signed)
    }

    fn decrypt(&self, ciphertext: &Polynomial) -> Result<Vec<u64>, RingError> {
        Ok(ciphertext.decode())
    }

    fn add(&self, a: &Polynomial, b: &Polynomial) -> Result<Polynomial, RingError> {
        Ok(self.ring.add(a, b))
    }

    fn sub(&self, a: &Polynomial, b: &Polynomial) -> Result<Polynomial, RingError> {
        Ok(self.ring.sub(a, b))
    }

    fn mul_scalar(&self, a: &Polynomial, scalar: i64) -> Result<Polynomial, RingError> {
        Ok(self.ring.mul_scalar(a, scalar))
    }

    fn rotate(&self, a: &Polynomial, positions: i64) -> Result<Polynomial, RingError> {
        Ok(self.ring.rotate(a, positions))
    }
}
