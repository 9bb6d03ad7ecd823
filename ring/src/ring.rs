use itertools::izip;
use num_complex::Complex64;
use sampling::source::Source;

use crate::errors::RingError;
use crate::fft::FftTable;
use crate::modulus::Modulus;
use crate::params::RingParams;
use crate::poly::Polynomial;

/// The injected ring handle: parameters plus the transform table shared by
/// every multiplication. All operations producing a [`Polynomial`] go
/// through a `&Ring`, so multiple ring sizes can coexist.
pub struct Ring {
    params: RingParams,
    modulus: Modulus,
    fft: FftTable,
}

impl Ring {
    pub fn new(params: RingParams) -> Self {
        let fft_len: usize = (2 * params.degree()).next_power_of_two();
        Self {
            params,
            modulus: Modulus::new(params.modulus()),
            fft: FftTable::new(fft_len),
        }
    }

    #[inline(always)]
    pub fn params(&self) -> &RingParams {
        &self.params
    }

    #[inline(always)]
    pub fn degree(&self) -> usize {
        self.params.degree()
    }

    #[inline(always)]
    pub fn modulus(&self) -> u64 {
        self.params.modulus()
    }

    #[inline(always)]
    pub fn characters(&self) -> usize {
        self.params.characters()
    }

    pub fn zero(&self) -> Polynomial {
        Polynomial(vec![0u64; self.degree()])
    }

    /// Builds an element from arbitrary signed coefficients: reduces each
    /// value mod q, zero-pads short inputs, and folds over-length inputs
    /// block-wise mod (x^n + 1) — even-indexed blocks add, odd-indexed
    /// blocks subtract, since x^n == -1.
    pub fn from_coefficients(&self, coeffs: &[i64]) -> Polynomial {
        let n: usize = self.degree();
        let mut out: Vec<u64> = vec![0u64; n];
        for (i, &c) in coeffs.iter().enumerate() {
            let r: u64 = self.modulus.reduce_i64(c);
            let pos: usize = i % n;
            if (i / n) & 1 == 0 {
                out[pos] = self.modulus.add(out[pos], r);
            } else {
                out[pos] = self.modulus.sub(out[pos], r);
            }
        }
        Polynomial(out)
    }

    /// Encodes up to `degree` values as a polynomial.
    pub fn encode(&self, values: &[i64]) -> Result<Polynomial, RingError> {
        if values.len() > self.degree() {
            return Err(RingError::EncodeTooLong {
                len: values.len(),
                degree: self.degree(),
            });
        }
        Ok(self.from_coefficients(values))
    }

    pub fn add(&self, a: &Polynomial, b: &Polynomial) -> Polynomial {
        self.elementwise(a, b, |x, y| self.modulus.add(x, y))
    }

    pub fn sub(&self, a: &Polynomial, b: &Polynomial) -> Polynomial {
        self.elementwise(a, b, |x, y| self.modulus.sub(x, y))
    }

    pub fn negate(&self, a: &Polynomial) -> Polynomial {
        debug_assert!(a.len() == self.degree());
        Polynomial(a.0.iter().map(|&x| self.modulus.neg(x)).collect())
    }

    pub fn mul_scalar(&self, a: &Polynomial, scalar: i64) -> Polynomial {
        debug_assert!(a.len() == self.degree());
        let s: u64 = self.modulus.reduce_i64(scalar);
        Polynomial(a.0.iter().map(|&x| self.modulus.mul(x, s)).collect())
    }

    /// Negacyclic product via the complex transform: lift both operands to
    /// length next_pow2(2n), transform, multiply pointwise, transform back,
    /// round real parts, and fold mod (x^n + 1, q). Exactness holds because
    /// [`RingParams`] bounds n * (q-1)^2 below the f64 rounding range.
    pub fn mul(&self, a: &Polynomial, b: &Polynomial) -> Polynomial {
        debug_assert!(a.len() == self.degree() && b.len() == self.degree());
        let m: usize = self.fft.m();

        let mut fa: Vec<Complex64> = vec![Complex64::new(0.0, 0.0); m];
        let mut fb: Vec<Complex64> = vec![Complex64::new(0.0, 0.0); m];
        for i in 0..self.degree() {
            fa[i].re = a.0[i] as f64;
            fb[i].re = b.0[i] as f64;
        }

        self.fft.forward_inplace(&mut fa);
        self.fft.forward_inplace(&mut fb);
        izip!(fa.iter_mut(), fb.iter()).for_each(|(x, y)| *x *= *y);
        self.fft.backward_inplace(&mut fa);

        let rounded: Vec<i64> = fa.iter().map(|c| c.re.round() as i64).collect();
        self.from_coefficients(&rounded)
    }

    /// Cyclic right-shift by `positions` (negative shifts rotate left).
    pub fn rotate(&self, a: &Polynomial, positions: i64) -> Polynomial {
        debug_assert!(a.len() == self.degree());
        let n: usize = self.degree();
        let shift: usize = positions.rem_euclid(n as i64) as usize;
        let mut out: Vec<u64> = vec![0u64; n];
        for i in 0..n {
            out[(i + shift) % n] = a.0[i];
        }
        Polynomial(out)
    }

    /// Projects onto character chi_j: the coefficient vector is read as
    /// degree/characters interleaved cycles of length `characters`, and the
    /// j-th Fourier component of each cycle is extracted with
    /// omega = exp(2*pi*i/characters).
    pub fn project_to_character(
        &self,
        a: &Polynomial,
        index: usize,
    ) -> Result<Polynomial, RingError> {
        if index >= self.characters() {
            return Err(RingError::CharacterOutOfRange {
                index,
                characters: self.characters(),
            });
        }
        Ok(self.project_unchecked(a, index))
    }

    /// All `characters` projections in index order. Infallible: the index
    /// range is validated once at [`RingParams`] construction, so no
    /// projection can fail here (no silently-short vectors).
    pub fn project_to_all_characters(&self, a: &Polynomial) -> Vec<Polynomial> {
        (0..self.characters())
            .map(|j| self.project_unchecked(a, j))
            .collect()
    }

    fn project_unchecked(&self, a: &Polynomial, index: usize) -> Polynomial {
        debug_assert!(a.len() == self.degree());
        let n: usize = self.degree();
        let k: usize = self.characters();
        let factor: f64 = 1.0 / k as f64;

        let mut out: Vec<u64> = vec![0u64; n];
        for (slot, o) in out.iter_mut().enumerate() {
            let mut sum: Complex64 = Complex64::new(0.0, 0.0);
            for m in 0..k {
                let angle: f64 =
                    -2.0 * std::f64::consts::PI * (index * m) as f64 / k as f64;
                let omega: Complex64 = Complex64::new(angle.cos(), angle.sin());
                let coeff: u64 = a.0[(slot * k + m) % n];
                sum += omega * coeff as f64;
            }
            *o = self.modulus.reduce_i64((sum.re * factor).round() as i64);
        }
        Polynomial(out)
    }

    /// Draws a fresh uniformly random element, one independent draw in
    /// [0, q) per coefficient.
    pub fn random(&self, source: &mut Source) -> Polynomial {
        let mut coeffs: Vec<u64> = vec![0u64; self.degree()];
        source.fill_uniform_mod(self.modulus(), &mut coeffs);
        Polynomial(coeffs)
    }

    fn elementwise<F: Fn(u64, u64) -> u64>(
        &self,
        a: &Polynomial,
        b: &Polynomial,
        f: F,
    ) -> Polynomial {
        debug_assert!(
            a.len() == self.degree() && b.len() == self.degree(),
            "invalid operands: a.len() = {} b.len() = {} degree = {}",
            a.len(),
            b.len(),
            self.degree()
        );
        Polynomial(a.0.iter().zip(b.0.iter()).map(|(&x, &y)| f(x, y)).collect())
    }
}
