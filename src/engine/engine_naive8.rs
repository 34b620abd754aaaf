use crate::engine::{
    field8,
    tables8::{self, Exp8, Log8, Skew8},
    Engine, ShardsRefMut,
};

type GfElement = field8::GfElement;

// ======================================================================
// Naive8 - PUBLIC

/// Simple reference implementation of [`Engine`] for GF(2^8).
///
/// - [`Naive8`] is meant for those who want to study
///   the source code to understand [`Engine`].
/// - [`Naive8`] also includes some debug assertions
///   which are not present in other implementations.
#[derive(Clone)]
pub struct Naive8 {
    exp: &'static Exp8,
    log: &'static Log8,
    skew: &'static Skew8,
}

impl Naive8 {
    /// Creates new [`Naive8`], initializing all tables
    /// needed for encoding or decoding.
    ///
    /// Currently only difference between encoding/decoding is
    /// `log_walsh` (512 byte) which is only needed for decoding.
    pub fn new() -> Self {
        let (exp, log) = tables8::initialize_exp_log();
        let skew = tables8::initialize_skew();

        // This is used in `Engine::eval_poly`.
        tables8::initialize_log_walsh::<Self>();

        Self { exp, log, skew }
    }
}

impl Engine for Naive8 {
    type Elem = GfElement;
    const ORDER: usize = field8::GF_ORDER;
    const MODULUS: GfElement = field8::GF_MODULUS;

    fn fft(
        &self,
        data: &mut ShardsRefMut,
        pos: usize,
        size: usize,
        truncated_size: usize,
        skew_delta: usize,
    ) {
        debug_assert!(size.is_power_of_two());
        debug_assert!(truncated_size <= size);

        let mut dist = size / 2;
        while dist > 0 {
            let mut r = 0;
            while r < truncated_size {
                let log_m = self.skew[r + dist + skew_delta - 1];
                for i in r..r + dist {
                    let (a, b) = data.dist2_mut(pos + i, dist);

                    // FFT BUTTERFLY

                    if log_m != field8::GF_MODULUS {
                        self.mul_add(a, b, log_m);
                    }
                    Self::xor(b, a);
                }
                r += dist * 2;
            }
            dist /= 2;
        }
    }

    fn fwht(data: &mut [GfElement], truncated_size: usize) {
        debug_assert!(truncated_size <= field8::GF_ORDER);

        let mut dist = 1;
        while dist < field8::GF_ORDER {
            let mut r = 0;
            while r < truncated_size {
                for i in r..r + dist {
                    let sum = field8::add_mod(data[i], data[i + dist]);
                    let dif = field8::sub_mod(data[i], data[i + dist]);
                    data[i] = sum;
                    data[i + dist] = dif;
                }
                r += dist * 2;
            }
            dist *= 2;
        }
    }

    fn ifft(
        &self,
        data: &mut ShardsRefMut,
        pos: usize,
        size: usize,
        truncated_size: usize,
        skew_delta: usize,
    ) {
        debug_assert!(size.is_power_of_two());
        debug_assert!(truncated_size <= size);

        let mut dist = 1;
        while dist < size {
            let mut r = 0;
            while r < truncated_size {
                let log_m = self.skew[r + dist + skew_delta - 1];
                for i in r..r + dist {
                    let (a, b) = data.dist2_mut(pos + i, dist);

                    // IFFT BUTTERFLY

                    Self::xor(b, a);
                    if log_m != field8::GF_MODULUS {
                        self.mul_add(a, b, log_m);
                    }
                }
                r += dist * 2;
            }
            dist *= 2;
        }
    }

    fn mul(&self, x: &mut [u8], log_m: GfElement) {
        let shard_bytes = x.len();
        debug_assert!(shard_bytes & 63 == 0);

        for i in 0..shard_bytes {
            x[i] = tables8::mul(x[i] as GfElement, log_m, self.exp, self.log);
        }
    }

    fn xor(x: &mut [u8], y: &[u8]) {
        let shard_bytes = x.len();
        debug_assert!(shard_bytes & 63 == 0);
        debug_assert_eq!(shard_bytes, y.len());

        for i in 0..shard_bytes {
            x[i] ^= y[i];
        }
    }

    fn eval_poly(erasures: &mut [GfElement], truncated_size: usize) {
        field8::eval_poly::<Self>(erasures, truncated_size);
    }
}

// ======================================================================
// Naive8 - IMPL Default

impl Default for Naive8 {
    fn default() -> Self {
        Self::new()
    }
}

// ======================================================================
// Naive8 - PRIVATE

impl Naive8 {
    /// `x[] ^= y[] * log_m`
    fn mul_add(&self, x: &mut [u8], y: &[u8], log_m: GfElement) {
        let shard_bytes = x.len();
        debug_assert!(shard_bytes & 63 == 0);
        debug_assert_eq!(shard_bytes, y.len());

        for i in 0..shard_bytes {
            x[i] ^= tables8::mul(y[i] as GfElement, log_m, self.exp, self.log);
        }
    }
}

// ======================================================================
// TESTS

// Engines are tested indirectly via roundtrip tests of HighRate and LowRate.
