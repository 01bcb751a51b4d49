mod block;
mod galois;

pub(crate) use block::*;
pub(crate) use galois::*;

use crate::common::tables::GENERATOR_POLYNOMIALS;

// Polynomial division
//------------------------------------------------------------------------------

/// Remainder of `dividend` divided by `divisor` over GF(256). Coefficients are ordered from the
/// highest degree down and the remainder has `divisor.len() - 1` coefficients.
pub fn poly_rem(dividend: &[u8], divisor: &[u8]) -> Vec<u8> {
    assert!(divisor.first().is_some_and(|&c| c != 0), "Divisor must have a non zero lead");

    let deg = divisor.len() - 1;
    let lead = G(divisor[0]);
    let mut rem = dividend.to_vec();
    if rem.len() < deg {
        rem.splice(0..0, std::iter::repeat(0).take(deg - rem.len()));
    }
    let steps = rem.len() - deg;

    for i in 0..steps {
        if rem[i] == 0 {
            continue;
        }
        let factor = G(rem[i]) / lead;
        for (r, &d) in rem[i..].iter_mut().zip(divisor.iter()) {
            *r = (G(*r) - factor * G(d)).into();
        }
    }

    rem.split_off(steps)
}

/// Error correction codewords for one block: the remainder of `data` followed by `ecc_len`
/// zeros divided by the generator polynomial of degree `ecc_len`.
pub fn ecc(data: &[u8], ecc_len: usize) -> Vec<u8> {
    let gen_poly = &GENERATOR_POLYNOMIALS[ecc_len][..=ecc_len];

    let mut dividend = Vec::with_capacity(data.len() + ecc_len);
    dividend.extend_from_slice(data);
    dividend.resize(data.len() + ecc_len, 0);

    let rem = poly_rem(&dividend, gen_poly);
    assert_eq!(rem.len(), ecc_len, "Ecc remainder length mismatch");
    rem
}
