use crate::{
    engine::{DefaultEngine, DefaultEngine8},
    rate::{DefaultRate, DefaultRateDecoder, DefaultRateEncoder, Rate, RateDecoder, RateEncoder},
    DecoderResult, EncoderResult, Error,
};

// ======================================================================
// FUNCTIONS - PRIVATE
//
// Dispatch between the two supported field widths: GF(2^8) is used
// whenever it can represent the whole codeword (smaller tables, smaller
// `log_walsh` cache), GF(2^16) otherwise.

fn use_narrow_field(original_count: usize, recovery_count: usize) -> bool {
    let narrow = DefaultRate::<DefaultEngine8>::supports(original_count, recovery_count);
    log::debug!(
        "selecting field width for original_count={} recovery_count={}: {}",
        original_count,
        recovery_count,
        if narrow { "GF(2^8)" } else { "GF(2^16)" },
    );
    narrow
}

// ======================================================================
// ReedSolomonEncoder - PUBLIC

/// Reed-Solomon encoder using [`DefaultEngine8`]/[`DefaultEngine`]
/// (whichever field width fits) and [`DefaultRate`].
///
/// [`DefaultEngine8`]: crate::engine::DefaultEngine8
/// [`DefaultEngine`]: crate::engine::DefaultEngine
pub struct ReedSolomonEncoder(InnerEncoder);

// ======================================================================
// InnerEncoder - PRIVATE

enum InnerEncoder {
    Narrow(DefaultRateEncoder<DefaultEngine8>),
    Wide(DefaultRateEncoder<DefaultEngine>),

    // This is only used temporarily during `reset`, never anywhere else.
    None,
}

impl Default for InnerEncoder {
    fn default() -> Self {
        InnerEncoder::None
    }
}

impl ReedSolomonEncoder {
    /// Adds one original shard to the encoder.
    ///
    /// Original shards have indexes `0..original_count` corresponding to the order
    /// in which they are added and these same indexes must be used when decoding.
    ///
    /// See [basic usage](crate#basic-usage) for an example.
    pub fn add_original_shard<T: AsRef<[u8]>>(&mut self, original_shard: T) -> Result<(), Error> {
        match &mut self.0 {
            InnerEncoder::Narrow(narrow) => narrow.add_original_shard(original_shard),
            InnerEncoder::Wide(wide) => wide.add_original_shard(original_shard),
            InnerEncoder::None => unreachable!(),
        }
    }

    /// Encodes the added original shards returning [`EncoderResult`]
    /// which contains the generated recovery shards.
    ///
    /// When returned [`EncoderResult`] is dropped the encoder is
    /// automatically [`reset`] and ready for new round of encoding.
    ///
    /// See [basic usage](crate#basic-usage) for an example.
    ///
    /// [`reset`]: ReedSolomonEncoder::reset
    pub fn encode(&mut self) -> Result<EncoderResult, Error> {
        match &mut self.0 {
            InnerEncoder::Narrow(narrow) => narrow.encode(),
            InnerEncoder::Wide(wide) => wide.encode(),
            InnerEncoder::None => unreachable!(),
        }
    }

    /// Creates new encoder with given configuration
    /// and allocates required working space.
    ///
    /// See [basic usage](crate#basic-usage) for an example.
    pub fn new(
        original_count: usize,
        recovery_count: usize,
        shard_bytes: usize,
    ) -> Result<Self, Error> {
        let inner = if use_narrow_field(original_count, recovery_count) {
            InnerEncoder::Narrow(DefaultRateEncoder::new(
                original_count,
                recovery_count,
                shard_bytes,
                DefaultEngine8::new(),
                None,
            )?)
        } else {
            InnerEncoder::Wide(DefaultRateEncoder::new(
                original_count,
                recovery_count,
                shard_bytes,
                DefaultEngine::new(),
                None,
            )?)
        };

        Ok(Self(inner))
    }

    /// Resets encoder to given configuration.
    ///
    /// - Added original shards are forgotten.
    /// - Existing working space is re-used if it's large enough
    ///   or re-allocated otherwise.
    pub fn reset(
        &mut self,
        original_count: usize,
        recovery_count: usize,
        shard_bytes: usize,
    ) -> Result<(), Error> {
        let new_field_is_narrow = use_narrow_field(original_count, recovery_count);

        self.0 = match std::mem::take(&mut self.0) {
            InnerEncoder::Narrow(mut narrow) => {
                if new_field_is_narrow {
                    narrow.reset(original_count, recovery_count, shard_bytes)?;
                    InnerEncoder::Narrow(narrow)
                } else {
                    let (_, work) = narrow.into_parts();
                    InnerEncoder::Wide(DefaultRateEncoder::new(
                        original_count,
                        recovery_count,
                        shard_bytes,
                        DefaultEngine::new(),
                        Some(work),
                    )?)
                }
            }

            InnerEncoder::Wide(mut wide) => {
                if new_field_is_narrow {
                    let (_, work) = wide.into_parts();
                    InnerEncoder::Narrow(DefaultRateEncoder::new(
                        original_count,
                        recovery_count,
                        shard_bytes,
                        DefaultEngine8::new(),
                        Some(work),
                    )?)
                } else {
                    wide.reset(original_count, recovery_count, shard_bytes)?;
                    InnerEncoder::Wide(wide)
                }
            }

            InnerEncoder::None => unreachable!(),
        };

        Ok(())
    }

    /// Returns `true` if given `original_count` / `recovery_count`
    /// combination is supported.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reed_solomon_fft::ReedSolomonEncoder;
    ///
    /// assert_eq!(ReedSolomonEncoder::supports(60_000, 4_000), true);
    /// assert_eq!(ReedSolomonEncoder::supports(60_000, 5_000), false);
    /// ```
    pub fn supports(original_count: usize, recovery_count: usize) -> bool {
        DefaultRate::<DefaultEngine8>::supports(original_count, recovery_count)
            || DefaultRate::<DefaultEngine>::supports(original_count, recovery_count)
    }
}

// ======================================================================
// ReedSolomonDecoder - PUBLIC

/// Reed-Solomon decoder using [`DefaultEngine8`]/[`DefaultEngine`]
/// (whichever field width fits) and [`DefaultRate`].
///
/// [`DefaultEngine8`]: crate::engine::DefaultEngine8
/// [`DefaultEngine`]: crate::engine::DefaultEngine
pub struct ReedSolomonDecoder(InnerDecoder);

// ======================================================================
// InnerDecoder - PRIVATE

enum InnerDecoder {
    Narrow(DefaultRateDecoder<DefaultEngine8>),
    Wide(DefaultRateDecoder<DefaultEngine>),

    // This is only used temporarily during `reset`, never anywhere else.
    None,
}

impl Default for InnerDecoder {
    fn default() -> Self {
        InnerDecoder::None
    }
}

impl ReedSolomonDecoder {
    /// Adds one original shard to the decoder.
    ///
    /// - Shards can be added in any order.
    /// - Index must be the same that was used in encoding.
    ///
    /// See [basic usage](crate#basic-usage) for an example.
    pub fn add_original_shard<T: AsRef<[u8]>>(
        &mut self,
        index: usize,
        original_shard: T,
    ) -> Result<(), Error> {
        match &mut self.0 {
            InnerDecoder::Narrow(narrow) => narrow.add_original_shard(index, original_shard),
            InnerDecoder::Wide(wide) => wide.add_original_shard(index, original_shard),
            InnerDecoder::None => unreachable!(),
        }
    }

    /// Adds one recovery shard to the decoder.
    ///
    /// - Shards can be added in any order.
    /// - Index must be the same that was used in encoding.
    ///
    /// See [basic usage](crate#basic-usage) for an example.
    pub fn add_recovery_shard<T: AsRef<[u8]>>(
        &mut self,
        index: usize,
        recovery_shard: T,
    ) -> Result<(), Error> {
        match &mut self.0 {
            InnerDecoder::Narrow(narrow) => narrow.add_recovery_shard(index, recovery_shard),
            InnerDecoder::Wide(wide) => wide.add_recovery_shard(index, recovery_shard),
            InnerDecoder::None => unreachable!(),
        }
    }

    /// Decodes the added shards returning [`DecoderResult`]
    /// which contains the restored original shards.
    ///
    /// When returned [`DecoderResult`] is dropped the decoder is
    /// automatically [`reset`] and ready for new round of decoding.
    ///
    /// See [basic usage](crate#basic-usage) for an example.
    ///
    /// [`reset`]: ReedSolomonDecoder::reset
    pub fn decode(&mut self) -> Result<DecoderResult, Error> {
        match &mut self.0 {
            InnerDecoder::Narrow(narrow) => narrow.decode(),
            InnerDecoder::Wide(wide) => wide.decode(),
            InnerDecoder::None => unreachable!(),
        }
    }

    /// Creates new decoder with given configuration
    /// and allocates required working space.
    ///
    /// See [basic usage](crate#basic-usage) for an example.
    pub fn new(
        original_count: usize,
        recovery_count: usize,
        shard_bytes: usize,
    ) -> Result<Self, Error> {
        let inner = if use_narrow_field(original_count, recovery_count) {
            InnerDecoder::Narrow(DefaultRateDecoder::new(
                original_count,
                recovery_count,
                shard_bytes,
                DefaultEngine8::new(),
                None,
            )?)
        } else {
            InnerDecoder::Wide(DefaultRateDecoder::new(
                original_count,
                recovery_count,
                shard_bytes,
                DefaultEngine::new(),
                None,
            )?)
        };

        Ok(Self(inner))
    }

    /// Resets decoder to given configuration.
    ///
    /// - Added shards are forgotten.
    /// - Existing working space is re-used if it's large enough
    ///   or re-allocated otherwise.
    pub fn reset(
        &mut self,
        original_count: usize,
        recovery_count: usize,
        shard_bytes: usize,
    ) -> Result<(), Error> {
        let new_field_is_narrow = use_narrow_field(original_count, recovery_count);

        self.0 = match std::mem::take(&mut self.0) {
            InnerDecoder::Narrow(mut narrow) => {
                if new_field_is_narrow {
                    narrow.reset(original_count, recovery_count, shard_bytes)?;
                    InnerDecoder::Narrow(narrow)
                } else {
                    let (_, work) = narrow.into_parts();
                    InnerDecoder::Wide(DefaultRateDecoder::new(
                        original_count,
                        recovery_count,
                        shard_bytes,
                        DefaultEngine::new(),
                        Some(work),
                    )?)
                }
            }

            InnerDecoder::Wide(mut wide) => {
                if new_field_is_narrow {
                    let (_, work) = wide.into_parts();
                    InnerDecoder::Narrow(DefaultRateDecoder::new(
                        original_count,
                        recovery_count,
                        shard_bytes,
                        DefaultEngine8::new(),
                        Some(work),
                    )?)
                } else {
                    wide.reset(original_count, recovery_count, shard_bytes)?;
                    InnerDecoder::Wide(wide)
                }
            }

            InnerDecoder::None => unreachable!(),
        };

        Ok(())
    }

    /// Returns `true` if given `original_count` / `recovery_count`
    /// combination is supported.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reed_solomon_fft::ReedSolomonDecoder;
    ///
    /// assert_eq!(ReedSolomonDecoder::supports(60_000, 4_000), true);
    /// assert_eq!(ReedSolomonDecoder::supports(60_000, 5_000), false);
    /// ```
    pub fn supports(original_count: usize, recovery_count: usize) -> bool {
        DefaultRate::<DefaultEngine8>::supports(original_count, recovery_count)
            || DefaultRate::<DefaultEngine>::supports(original_count, recovery_count)
    }
}

// ======================================================================
// TESTS

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use fixedbitset::FixedBitSet;

    use super::*;
    use crate::test_util;

    // ============================================================
    // HELPERS

    // `recovery_hash` is checked only when given. The golden hashes in
    // `test_util` are all computed against GF(2^16) (`Naive`/`NoSimd`), but
    // `ReedSolomonEncoder`/`ReedSolomonDecoder` transparently dispatch small
    // shard counts to GF(2^8) (see `use_narrow_field`), which produces
    // different recovery bytes for the same input. Rounds that land on the
    // narrow field are verified by round-trip correctness alone.
    fn roundtrip(
        encoder: &mut ReedSolomonEncoder,
        decoder: &mut ReedSolomonDecoder,
        original_count: usize,
        recovery_hash: Option<&str>,
        decoder_original: &[usize],
        decoder_recovery: &[usize],
        seed: u8,
    ) {
        let original = test_util::generate_original(original_count, 1024, seed);

        for original in &original {
            encoder.add_original_shard(original).unwrap();
        }

        let result = encoder.encode().unwrap();
        let recovery: Vec<_> = result.recovery_iter().collect();

        if let Some(recovery_hash) = recovery_hash {
            test_util::assert_hash(&recovery, recovery_hash);
        }

        let mut original_received = FixedBitSet::with_capacity(original_count);

        for i in decoder_original {
            decoder.add_original_shard(*i, &original[*i]).unwrap();
            original_received.set(*i, true);
        }

        for i in decoder_recovery {
            decoder.add_recovery_shard(*i, recovery[*i]).unwrap();
        }

        let result = decoder.decode().unwrap();
        let restored: HashMap<_, _> = result.restored_original_iter().collect();

        for i in 0..original_count {
            if !original_received[i] {
                assert_eq!(restored[&i], original[i]);
            }
        }
    }

    // ============================================================
    // ROUNDTRIP - TWO ROUNDS

    #[test]
    fn roundtrip_two_rounds_reset_low_to_high() {
        let mut encoder = ReedSolomonEncoder::new(4, 3, 1024).unwrap();
        let mut decoder = ReedSolomonDecoder::new(4, 3, 1024).unwrap();

        // `(4, 3)` is a tie (`4.next_power_of_two() == 3.next_power_of_two()`)
        // with `original_count > recovery_count`, so `DefaultRate` picks Low.

        roundtrip(&mut encoder, &mut decoder, 4, None, &[2], &[0, 1, 2], 143);

        encoder.reset(3, 2, 1024).unwrap();
        decoder.reset(3, 2, 1024).unwrap();

        // `(3, 2)` is not a tie, so `DefaultRate` picks High.

        roundtrip(&mut encoder, &mut decoder, 3, None, &[1], &[0, 1], 132);
    }

    // ============================================================
    // ROUNDTRIP - FIELD WIDTH SWITCH
    //
    // `(3, 2)` fits GF(2^8); `(200, 56)` needs GF(2^16).

    #[test]
    fn roundtrip_field_width_switch() {
        let mut encoder = ReedSolomonEncoder::new(3, 2, 1024).unwrap();
        let mut decoder = ReedSolomonDecoder::new(3, 2, 1024).unwrap();

        roundtrip(&mut encoder, &mut decoder, 3, None, &[1], &[0, 1], 132);

        encoder.reset(200, 56, 64).unwrap();
        decoder.reset(200, 56, 64).unwrap();

        let original = test_util::generate_original(200, 64, 20);
        for original in &original {
            encoder.add_original_shard(original).unwrap();
        }
        let result = encoder.encode().unwrap();
        let recovery: Vec<_> = result.recovery_iter().collect();

        for i in 0..56 {
            decoder.add_recovery_shard(i, recovery[i]).unwrap();
        }
        for i in 56..200 {
            decoder.add_original_shard(i, &original[i]).unwrap();
        }

        let result = decoder.decode().unwrap();
        let restored: HashMap<_, _> = result.restored_original_iter().collect();

        for i in 0..56 {
            assert_eq!(restored[&i], original[i]);
        }
    }

    // ==================================================
    // supports

    #[test]
    fn supports() {
        assert!(ReedSolomonEncoder::supports(4096, 4096));
        assert!(ReedSolomonEncoder::supports(61440, 4096));
        assert!(ReedSolomonEncoder::supports(200, 56));
        assert!(!ReedSolomonEncoder::supports(4096, 61440));

        assert!(ReedSolomonDecoder::supports(4096, 4096));
        assert!(ReedSolomonDecoder::supports(61440, 4096));
        assert!(ReedSolomonDecoder::supports(200, 56));
        assert!(!ReedSolomonDecoder::supports(4096, 61440));
    }
}
