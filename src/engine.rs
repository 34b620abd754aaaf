//! Low-level building blocks for Reed-Solomon encoding/decoding.
//!
//! **This is an advanced module which is not needed for [simple usage] or [basic usage].**
//!
//! This module is relevant if you want to
//! - use [`rate`] module and need an [`Engine`] to use with it.
//! - create your own [`Engine`].
//! - understand/benchmark/test at low level.
//!
//! # Engines
//!
//! An [`Engine`] is an implementation of basic low-level algorithms
//! needed for Reed-Solomon encoding/decoding.
//!
//! - [`Naive`]
//!     - Simple reference implementation.
//! - [`NoSimd`]
//!     - Basic optimized engine without SIMD so that it works on all CPUs.
//! - [`DefaultEngine`]
//!     - Default engine which is used when no specific engine is given.
//!     - Currently just alias to [`NoSimd`].
//!
//! # Benchmarks
//!
//! - These benchmarks are from `cargo bench engine`
//!   with 3.4 GHz i5-3570K (Ivy Bridge, 3rd gen.).
//! - Shards are 1024 bytes.
//!
//! | Benchmark         | Shards  | ns [`Naive`] | ns [`NoSimd`] |
//! | ----------------- | ------- | ------------ | ------------- |
//! | xor               | 1 * 2   | 60           | 32            |
//! | mul               | 1       | 1 260        | 860           |
//! | xor_within        | 128 * 2 | 5 870        | 5 780         |
//! | formal_derivative | 128     | 21 300       | 15 800        |
//! | FFT               | 128     | 764 000      | 545 000       |
//! | IFFT              | 128     | 780 000      | 546 000       |
//! | FWHT              | -       | 898 000      | 622 000       |
//!
//! [simple usage]: crate#simple-usage
//! [basic usage]: crate#basic-usage
//! [`ReedSolomonEncoder`]: crate::ReedSolomonEncoder
//! [`ReedSolomonDecoder`]: crate::ReedSolomonDecoder
//! [`rate`]: crate::rate

pub(crate) use self::shards::Shards;

pub use self::{
    engine_naive::Naive, engine_naive8::Naive8, engine_nosimd::NoSimd, engine_nosimd8::NoSimd8,
    shards::ShardsRefMut,
};

pub use self::field16::{
    GfElement, CANTOR_BASIS, GF_BITS, GF_MODULUS, GF_ORDER, GF_POLYNOMIAL,
};

mod engine_naive;
mod engine_naive8;
mod engine_nosimd;
mod engine_nosimd8;

pub mod field16;
pub mod field8;

mod shards;

pub mod tables;
pub mod tables8;

// ======================================================================
// TYPE ALIASES - PUBLIC

/// Default [`Engine`] for the 16-bit field, currently just alias to [`NoSimd`].
pub type DefaultEngine = NoSimd;

/// Default [`Engine`] for the 8-bit field, currently just alias to [`NoSimd8`].
pub type DefaultEngine8 = NoSimd8;

// ======================================================================
// GfElem - PUBLIC

/// Bound satisfied by the scalar type of a Galois field used by an
/// [`Engine`], i.e. [`u8`] (GF(2^8)) or [`u16`] (GF(2^16)).
pub trait GfElem:
    Copy + Clone + Default + PartialEq + Eq + std::ops::Sub<Output = Self> + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity of the *exponent* domain, i.e. plain `1`.
    const ONE: Self;
}

impl GfElem for u8 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
}

impl GfElem for u16 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
}

// ======================================================================
// FUNCTIONS - PUBLIC - Galois field operations

/// Some kind of addition, for the 16-bit field.
///
/// Kept here for source compatibility; prefer [`field16::add_mod`].
#[inline(always)]
pub fn add_mod(x: GfElement, y: GfElement) -> GfElement {
    field16::add_mod(x, y)
}

/// Some kind of subtraction, for the 16-bit field.
///
/// Kept here for source compatibility; prefer [`field16::sub_mod`].
#[inline(always)]
pub fn sub_mod(x: GfElement, y: GfElement) -> GfElement {
    field16::sub_mod(x, y)
}

// ======================================================================
// FUNCTIONS - PUBLIC - misc

/// Returns smallest value that is greater than or equal to `a` and multiple of `b`,
/// or `None` if `b` is zero or operation would overflow.
///
/// - This function is available as [`usize::checked_next_multiple_of`] in nightly Rust.
///
/// # Examples
///
/// ```rust
/// use reed_solomon_fft::engine;
///
/// assert_eq!(engine::checked_next_multiple_of(20, 10), Some(20));
/// assert_eq!(engine::checked_next_multiple_of(27, 10), Some(30));
/// ```
///
/// [`usize::checked_next_multiple_of`]: https://doc.rust-lang.org/std/primitive.usize.html#method.checked_next_multiple_of
pub fn checked_next_multiple_of(a: usize, b: usize) -> Option<usize> {
    if b == 0 {
        None
    } else {
        let mut x = a / b;
        x += if a % b != 0 { 1 } else { 0 };
        x.checked_mul(b)
    }
}

// ======================================================================
// Engine - PUBLIC

/// Implementation of basic low-level algorithms needed
/// for Reed-Solomon encoding/decoding.
///
/// These algorithms are not properly documented.
///
/// [`Naive`] engine is provided for those who want to
/// study the source code to understand [`Engine`].
pub trait Engine: Clone
where
    Self: Sized,
{
    /// Scalar type of one field element: [`u8`] for GF(2^8)
    /// engines, [`u16`] (= [`GfElement`]) for GF(2^16) engines.
    type Elem: GfElem;

    /// Order of the field this engine operates over, i.e. `2^B`.
    const ORDER: usize;

    /// `ORDER - 1`, the field's multiplicative-group size.
    const MODULUS: Self::Elem;

    // ============================================================
    // REQUIRED

    /// In-place decimation-in-time FFT (fast Fourier transform).
    ///
    /// - FFT is done on chunk `data[pos .. pos + size]`
    /// - `size` must be `2^n`
    /// - Before function call `data[pos .. pos + size]` must be valid.
    /// - After function call
    ///     - `data[pos .. pos + truncated_size]`
    ///       contains valid FFT result.
    ///     - `data[pos + truncated_size .. pos + size]`
    ///       contains valid FFT result if this contained
    ///       only `0u8`:s and garbage otherwise.
    fn fft(
        &self,
        data: &mut ShardsRefMut,
        pos: usize,
        size: usize,
        truncated_size: usize,
        skew_delta: usize,
    );

    /// In-place FWHT (fast Walsh-Hadamard transform).
    ///
    /// - This is used only in [`Engine::eval_poly`],
    ///   both directly and indirectly via [`initialize_log_walsh`].
    /// - `truncated_size` must be handled so that
    ///   [`Engine::eval_poly`] returns correct result.
    /// - `data.len()` must equal [`Engine::ORDER`].
    ///
    /// [`initialize_log_walsh`]: self::tables::initialize_log_walsh
    fn fwht(data: &mut [Self::Elem], truncated_size: usize);

    /// In-place decimation-in-time IFFT (inverse fast Fourier transform).
    ///
    /// - IFFT is done on chunk `data[pos .. pos + size]`
    /// - `size` must be `2^n`
    /// - Before function call `data[pos .. pos + size]` must be valid.
    /// - After function call
    ///     - `data[pos .. pos + truncated_size]`
    ///       contains valid IFFT result.
    ///     - `data[pos + truncated_size .. pos + size]`
    ///       contains valid IFFT result if this contained
    ///       only `0u8`:s and garbage otherwise.
    fn ifft(
        &self,
        data: &mut ShardsRefMut,
        pos: usize,
        size: usize,
        truncated_size: usize,
        skew_delta: usize,
    );

    /// `x[] *= log_m`
    fn mul(&self, x: &mut [u8], log_m: Self::Elem);

    /// `x[] ^= y[]`
    fn xor(x: &mut [u8], y: &[u8]);

    /// Evaluate the error locator polynomial in log-domain.
    ///
    /// Each field has its own `log_walsh` table (see [`tables`] /
    /// [`tables8`](crate::engine::tables8)), so unlike the other
    /// provided methods this one can't share a single body across
    /// both field widths and must be implemented per engine, usually
    /// as a one-line call into `field16::eval_poly` or `field8::eval_poly`.
    fn eval_poly(erasures: &mut [Self::Elem], truncated_size: usize);

    // ============================================================
    // PROVIDED

    /// FFT with `skew_delta = pos + size`.
    #[inline(always)]
    fn fft_skew_end(
        &self,
        data: &mut ShardsRefMut,
        pos: usize,
        size: usize,
        truncated_size: usize,
    ) {
        self.fft(data, pos, size, truncated_size, pos + size)
    }

    /// Formal derivative.
    fn formal_derivative(data: &mut ShardsRefMut) {
        for i in 1..data.len() {
            let width: usize = ((i ^ (i - 1)) + 1) >> 1;
            Self::xor_within(data, i - width, i, width);
        }
    }

    /// IFFT with `skew_delta = pos + size`.
    #[inline(always)]
    fn ifft_skew_end(
        &self,
        data: &mut ShardsRefMut,
        pos: usize,
        size: usize,
        truncated_size: usize,
    ) {
        self.ifft(data, pos, size, truncated_size, pos + size)
    }

    /// `data[x .. x + count] ^= data[y .. y + count]`
    ///
    /// Ranges must not overlap.
    #[inline(always)]
    fn xor_within(data: &mut ShardsRefMut, x: usize, y: usize, count: usize) {
        let (xs, ys) = data.flat2_mut(x, y, count);
        Self::xor(xs, ys);
    }
}

// ======================================================================
// TESTS

// Engines are tested indirectly via roundtrip tests of HighRate and LowRate.
