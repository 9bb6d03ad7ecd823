use num_complex::Complex64;
use std::f64::consts::PI;

/// Bit helpers shared by the transform and the ring engine.
pub trait WordOps {
    fn log2(self) -> usize;
    fn reverse_bits_msb(self, n: u32) -> usize;
}

impl WordOps for usize {
    #[inline(always)]
    fn log2(self) -> usize {
        (usize::BITS - (self - 1).leading_zeros()) as _
    }

    #[inline(always)]
    fn reverse_bits_msb(self, n: u32) -> usize {
        self.reverse_bits() >> (usize::BITS - n)
    }
}

/// Precomputed-twiddle radix-2 complex transform of fixed size.
///
/// Forward uses e^{-2πik/m}, backward the conjugates with 1/m scaling, so
/// backward(forward(a)) == a up to f64 rounding. Built once per [`crate::Ring`]
/// at size next_pow2(2 * degree) and reused for every multiplication.
pub struct FftTable {
    m: usize,
    twiddle_forward: Vec<Complex64>,
    twiddle_backward: Vec<Complex64>,
}

impl FftTable {
    pub fn new(m: usize) -> Self {
        assert!(
            m >= 2 && m & (m - 1) == 0,
            "invalid argument m: m = {} is not a power of two",
            m
        );

        let half: usize = m >> 1;
        let mut twiddle_forward: Vec<Complex64> = Vec::with_capacity(half);
        let mut twiddle_backward: Vec<Complex64> = Vec::with_capacity(half);
        for k in 0..half {
            let angle: f64 = -2.0 * PI * k as f64 / m as f64;
            let w: Complex64 = Complex64::new(angle.cos(), angle.sin());
            twiddle_forward.push(w);
            twiddle_backward.push(w.conj());
        }

        Self {
            m,
            twiddle_forward,
            twiddle_backward,
        }
    }

    #[inline(always)]
    pub fn m(&self) -> usize {
        self.m
    }

    pub fn forward_inplace(&self, a: &mut [Complex64]) {
        self.transform_inplace(a, false);
    }

    pub fn backward_inplace(&self, a: &mut [Complex64]) {
        self.transform_inplace(a, true);
        let scale: f64 = 1.0 / self.m as f64;
        a.iter_mut().for_each(|x| *x *= scale);
    }

    fn transform_inplace(&self, a: &mut [Complex64], backward: bool) {
        let m: usize = self.m;
        assert!(
            a.len() == m,
            "invalid argument a: a.len() = {} != m = {}",
            a.len(),
            m
        );

        let log_m: u32 = m.log2() as u32;
        let twiddle: &[Complex64] = if backward {
            &self.twiddle_backward
        } else {
            &self.twiddle_forward
        };

        for i in 0..m {
            let i_rev: usize = i.reverse_bits_msb(log_m);
            if i < i_rev {
                a.swap(i, i_rev);
            }
        }

        let mut len: usize = 2;
        while len <= m {
            let half: usize = len >> 1;
            let stride: usize = m / len;
            for block in a.chunks_exact_mut(len) {
                let (lo, hi) = block.split_at_mut(half);
                for k in 0..half {
                    let t: Complex64 = twiddle[k * stride] * hi[k];
                    hi[k] = lo[k] - t;
                    lo[k] += t;
                }
            }
            len <<= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_backward_roundtrip() {
        let m: usize = 128;
        let table: FftTable = FftTable::new(m);
        let original: Vec<Complex64> = (0..m)
            .map(|i| Complex64::new(i as f64, 0.0))
            .collect();
        let mut a: Vec<Complex64> = original.clone();
        table.forward_inplace(&mut a);
        table.backward_inplace(&mut a);
        for (x, y) in a.iter().zip(original.iter()) {
            assert!((x.re - y.re).abs() < 1e-8);
            assert!(x.im.abs() < 1e-8);
        }
    }

    #[test]
    fn forward_of_delta_is_flat() {
        let m: usize = 16;
        let table: FftTable = FftTable::new(m);
        let mut a: Vec<Complex64> = vec![Complex64::new(0.0, 0.0); m];
        a[0] = Complex64::new(1.0, 0.0);
        table.forward_inplace(&mut a);
        for x in &a {
            assert!((x.re - 1.0).abs() < 1e-12);
            assert!(x.im.abs() < 1e-12);
        }
    }

    #[test]
    fn bit_reversal() {
        assert_eq!(0b001usize.reverse_bits_msb(3), 0b100);
        assert_eq!(0b110usize.reverse_bits_msb(3), 0b011);
        assert_eq!(8usize.log2(), 3);
        assert_eq!(9usize.log2(), 4);
    }
}
