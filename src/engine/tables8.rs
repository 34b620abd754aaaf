//! Lookup-tables used by GF(2^8) [`Engine`]:s.
//!
//! Mirrors [`tables`](crate::engine::tables) but for the 8-bit field:
//! every table is 256x smaller and [`Mul8`] only needs two nibble
//! sub-tables per constant since a GF(2^8) element is exactly one byte.
//!
//! [`NoSimd8`]: crate::engine::NoSimd8

use once_cell::sync::OnceCell;

use crate::engine::{
    field8::{self, GfElement, CANTOR_BASIS, GF_BITS, GF_MODULUS, GF_ORDER, GF_POLYNOMIAL},
    Engine,
};

// ======================================================================
// TYPE ALIASES - PUBLIC

/// Used by [`Naive8`] engine for multiplications
/// and by all GF(2^8) [`Engine`]:s to initialize other tables.
///
/// [`Naive8`]: crate::engine::Naive8
pub type Exp8 = [GfElement; GF_ORDER];

/// Used by [`Naive8`] engine for multiplications
/// and by all GF(2^8) [`Engine`]:s to initialize other tables.
///
/// [`Naive8`]: crate::engine::Naive8
pub type Log8 = [GfElement; GF_ORDER];

/// Used by all GF(2^8) [`Engine`]:s in [`Engine::eval_poly`].
pub type LogWalsh8 = [GfElement; GF_ORDER];

/// Used by [`NoSimd8`] engine for multiplications.
///
/// [`NoSimd8`]: crate::engine::NoSimd8
pub type Mul8 = [[[GfElement; 16]; 2]; GF_ORDER];

/// Used by all GF(2^8) [`Engine`]:s for FFT and IFFT.
pub type Skew8 = [GfElement; GF_MODULUS as usize];

// ======================================================================
// ExpLog8 - PRIVATE

struct ExpLog8 {
    exp: Box<Exp8>,
    log: Box<Log8>,
}

// ======================================================================
// STATIC - PRIVATE

static EXP_LOG8: OnceCell<ExpLog8> = OnceCell::new();
static LOG_WALSH8: OnceCell<Box<LogWalsh8>> = OnceCell::new();
static MUL8: OnceCell<Box<Mul8>> = OnceCell::new();
static SKEW8: OnceCell<Box<Skew8>> = OnceCell::new();

// ======================================================================
// FUNCTIONS - PUBLIC - math

/// Calculates `x * log_m` using [`Exp8`] and [`Log8`] tables.
#[inline(always)]
pub fn mul(x: GfElement, log_m: GfElement, exp: &Exp8, log: &Log8) -> GfElement {
    if x == 0 {
        0
    } else {
        exp[field8::add_mod(log[x as usize], log_m) as usize]
    }
}

// ======================================================================
// FUNCTIONS - PUBLIC - initialize tables

/// Initializes and returns [`Exp8`] and [`Log8`] tables.
#[allow(clippy::needless_range_loop)]
pub fn initialize_exp_log() -> (&'static Exp8, &'static Log8) {
    let exp_log = EXP_LOG8.get_or_init(|| {
        let mut exp = Box::new([0; GF_ORDER]);
        let mut log = Box::new([0; GF_ORDER]);

        // GENERATE LFSR TABLE

        let mut state = 1;
        for i in 0..GF_MODULUS {
            exp[state] = i;
            state <<= 1;
            if state >= GF_ORDER {
                state ^= GF_POLYNOMIAL;
            }
        }
        exp[0] = GF_MODULUS;

        // CONVERT TO CANTOR BASIS

        log[0] = 0;
        for i in 0..GF_BITS {
            let width = 1usize << i;
            for j in 0..width {
                log[j + width] = log[j] ^ CANTOR_BASIS[i];
            }
        }

        for i in 0..GF_ORDER {
            log[i] = exp[log[i] as usize];
        }

        for i in 0..GF_ORDER {
            exp[log[i] as usize] = i as GfElement;
        }

        exp[GF_MODULUS as usize] = exp[0];

        ExpLog8 { exp, log }
    });

    (&exp_log.exp, &exp_log.log)
}

/// Initializes and returns [`LogWalsh8`] table.
pub fn initialize_log_walsh<E: Engine<Elem = GfElement>>() -> &'static LogWalsh8 {
    LOG_WALSH8.get_or_init(|| {
        let (_, log) = initialize_exp_log();

        let mut log_walsh: Box<LogWalsh8> = Box::new([0; GF_ORDER]);

        log_walsh.copy_from_slice(log.as_ref());
        log_walsh[0] = 0;
        E::fwht(&mut log_walsh[..], GF_ORDER);

        log_walsh
    })
}

/// Initializes and returns [`Mul8`] table.
pub fn initialize_mul8() -> &'static Mul8 {
    MUL8.get_or_init(|| {
        let (exp, log) = initialize_exp_log();

        let mut mul8 = vec![[[0; 16]; 2]; GF_ORDER];

        for log_m in 0..=GF_MODULUS {
            let lut = &mut mul8[log_m as usize];
            for i in 0..16 {
                lut[0][i] = mul(i as GfElement, log_m, exp, log);
                lut[1][i] = mul((i << 4) as GfElement, log_m, exp, log);
            }
        }

        mul8.into_boxed_slice().try_into().unwrap()
    })
}

/// Initializes and returns [`Skew8`] table.
#[allow(clippy::needless_range_loop)]
pub fn initialize_skew() -> &'static Skew8 {
    SKEW8.get_or_init(|| {
        let (exp, log) = initialize_exp_log();

        let mut skew = Box::new([0; GF_MODULUS as usize]);

        let mut temp = [0; GF_BITS - 1];

        for i in 1..GF_BITS {
            temp[i - 1] = 1 << i;
        }

        for m in 0..GF_BITS - 1 {
            let step: usize = 1 << (m + 1);

            skew[(1 << m) - 1] = 0;

            for i in m..GF_BITS - 1 {
                let s: usize = 1 << (i + 1);
                let mut j = (1 << m) - 1;
                while j < s {
                    skew[j + s] = skew[j] ^ temp[i];
                    j += step;
                }
            }

            temp[m] =
                GF_MODULUS - log[mul(temp[m], log[(temp[m] ^ 1) as usize], exp, log) as usize];

            for i in m + 1..GF_BITS - 1 {
                let sum = field8::add_mod(log[(temp[i] ^ 1) as usize], temp[m]);
                temp[i] = mul(temp[i], sum, exp, log);
            }
        }

        for i in 0..GF_MODULUS as usize {
            skew[i] = log[skew[i] as usize];
        }

        skew
    })
}
