#![no_std]

#[cfg(test)]
extern crate std;

pub mod roots;

pub use roots::{
    CONFIG, Config, FloatBits, Ieee754, Roots, cbrt, cbrtf, rcbrt, rcbrtf, sqrt, sqrtf,
};
