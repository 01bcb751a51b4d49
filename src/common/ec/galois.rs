use std::ops::{Add, Div, Mul, Sub};

use crate::common::tables::{EXP_TABLE, LOG_TABLE};

// Galois field element
//------------------------------------------------------------------------------

/// Element of GF(256) under the primitive polynomial 0x11D.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct G(pub u8);

impl G {
    pub const ZERO: G = G(0);

    /// Generator raised to `i`, with `i` taken modulo 255.
    pub fn gen_pow(i: usize) -> Self {
        G(EXP_TABLE[i % 255])
    }

    pub fn log(self) -> usize {
        assert!(self.0 != 0, "Log of zero is undefined");
        LOG_TABLE[self.0 as usize] as usize
    }
}

impl From<G> for u8 {
    fn from(value: G) -> Self {
        value.0
    }
}

// Addition and subtraction are both xor in a field of characteristic 2
impl Add for G {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        G(self.0 ^ rhs.0)
    }
}

impl Sub for G {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        G(self.0 ^ rhs.0)
    }
}

impl Mul for G {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        if self.0 == 0 || rhs.0 == 0 {
            return G::ZERO;
        }
        G::gen_pow(self.log() + rhs.log())
    }
}

impl Div for G {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        assert!(rhs.0 != 0, "Division by zero in GF(256)");
        if self.0 == 0 {
            return G::ZERO;
        }
        // log(b) * 254 is -log(b) modulo 255
        G::gen_pow(self.log() + rhs.log() * 254)
    }
}
