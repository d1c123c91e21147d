//! SHAKE per [FIPS 202].
//!
//! The seed is absorbed once and the output stream is squeezed
//! from the sponge.
//!
//! [FIPS 202]: https://csrc.nist.gov/pubs/fips/202/final

#![forbid(unsafe_code)]

use core::fmt;

use zeroize::ZeroizeOnDrop;

use crate::{
    XofError,
    alg::XofAlgorithm,
    xof::{Construction, Instance, XofReader},
};

macro_rules! impl_shake {
    (
        $name:ident,
        $reader:ident,
        $xof:ident,
        rate: $rate:literal,
        capacity: $capacity:literal,
        $doc:expr
    ) => {
        #[doc = concat!($doc, ".")]
        #[doc = ""]
        #[doc = "The block size is the sponge rate and the seed size"]
        #[doc = "is the sponge capacity."]
        #[derive(Copy, Clone, Debug, Default)]
        pub struct $name;

        impl Construction for $name {
            const ID: XofAlgorithm = XofAlgorithm::$name;
            const BLOCK_SIZE: usize = $rate;
            const SEED_SIZE: usize = $capacity;

            type Reader = $reader;

            fn init(&self, seed: &[u8]) -> Result<Self::Reader, XofError> {
                use sha3::digest::{ExtendableOutput, Update};

                let mut shake = sha3::$name::default();
                shake.update(seed);
                Ok($reader {
                    reader: shake.finalize_xof(),
                })
            }
        }

        #[doc = "An [`XofReader`] for"]
        #[doc = concat!("[`", stringify!($name), "`].")]
        pub struct $reader {
            reader: <sha3::$name as sha3::digest::ExtendableOutput>::Reader,
        }

        impl XofReader for $reader {
            #[inline]
            fn read(&mut self, out: &mut [u8]) -> Result<(), XofError> {
                use sha3::digest::XofReader;

                self.reader.read(out);
                Ok(())
            }
        }

        // `sha3` wipes the sponge state when it is dropped.
        impl ZeroizeOnDrop for $reader {}

        impl fmt::Debug for $reader {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($reader)).finish_non_exhaustive()
            }
        }

        #[doc = concat!("An [`Xof`][crate::Xof] for ", $doc, ".")]
        pub type $xof = Instance<$name>;
    };
}
impl_shake!(
    Shake128,
    Shake128Reader,
    Shake128Xof,
    rate: 168,
    capacity: 32,
    "SHAKE128"
);
impl_shake!(
    Shake256,
    Shake256Reader,
    Shake256Xof,
    rate: 136,
    capacity: 64,
    "SHAKE256"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Xof, test_util::test_xof};

    test_xof!(shake128, Shake128);
    test_xof!(shake256, Shake256);

    const SHAKE128_ZERO_16: &str = "\
        8f8e4f612e61ffb9d78c3ea707e3776805a4f86e1d7371f4c7fea77a668c8b84\
        14312535ceb17e964e850419909301bafff0c13facf0f09c1a07eee4067536df";
    const SHAKE256_ZERO_32: &str = "\
        f5977c8283546a63723bc31d2619124f11db4658643336741df81757d5ad3062\
        221e124311ec7f7181568de7938df805d894f5fded465001a04e260a49482cf5";

    #[test]
    fn test_shake128_zero_seed() {
        let want = hex::decode(SHAKE128_ZERO_16).expect("valid hex");

        // 32 bytes, then 32 more.
        let mut xof = Shake128Xof::default();
        xof.set_seed(&[0u8; 16]).expect("SHAKE accepts any seed");
        let mut got = [0u8; 64];
        let (lhs, rhs) = got.split_at_mut(32);
        xof.get_bytes(lhs).expect("should not fail");
        xof.get_bytes(rhs).expect("should not fail");
        assert_eq!(got[..], want[..]);
        assert_eq!(xof.position(), Some(64));

        // All 64 at once from a fresh instance.
        let mut xof = Shake128Xof::default();
        xof.set_seed(&[0u8; 16]).expect("SHAKE accepts any seed");
        assert_eq!(&*xof.allocate_bytes(64).expect("should not fail"), &want[..]);
    }

    #[test]
    fn test_shake256_zero_seed() {
        let want = hex::decode(SHAKE256_ZERO_32).expect("valid hex");
        let mut stream = Shake256.seed(&[0u8; 32]).expect("SHAKE accepts any seed");
        assert_eq!(stream.read_fixed::<64>().expect("should not fail")[..], want[..]);
    }

    #[test]
    fn test_empty_seed() {
        let cases: [(&mut dyn Xof, &str); 2] = [
            (
                &mut Shake128Xof::default(),
                "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26",
            ),
            (
                &mut Shake256Xof::default(),
                "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f",
            ),
        ];
        for (xof, want) in cases {
            xof.set_seed(&[]).expect("empty seeds are allowed");
            let got = xof.allocate_bytes(32).expect("should not fail");
            assert_eq!(hex::encode(got), want, "{}", xof.get_type());
        }
    }

    #[test]
    fn test_zeroize_on_drop() {
        fn assert_zeroize_on_drop<T: ZeroizeOnDrop>() {}
        assert_zeroize_on_drop::<Shake128Reader>();
        assert_zeroize_on_drop::<Shake256Reader>();
    }

    #[test]
    fn test_sizes() {
        let xof = Shake128Xof::default();
        assert_eq!(xof.get_type(), XofAlgorithm::Shake128);
        assert_eq!(xof.get_block_size(), 168);
        assert_eq!(xof.get_seed_size(), 32);

        let xof = Shake256Xof::default();
        assert_eq!(xof.get_type(), XofAlgorithm::Shake256);
        assert_eq!(xof.get_block_size(), 136);
        assert_eq!(xof.get_seed_size(), 64);
    }
}
