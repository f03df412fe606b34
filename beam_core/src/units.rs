//! # Unit Types
//!
//! Lightweight f64 newtypes for the SI units the calculator reports. They keep
//! lengths, forces and moments from being mixed up in the presentation layer
//! while serializing as bare numbers.
//!
//! - Length: metres (m)
//! - Force: kilonewtons (kN)
//! - Moment: kilonewton-metres (kNm)
//! - Distributed load: kilonewtons per metre (kN/m)
//!
//! `Display` renders two decimals followed by the unit, which is the format
//! used in calculation summaries.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{KiloNewtons, Meters};
//!
//! let span = Meters(5.0);
//! assert_eq!(span.to_string(), "5.00 m");
//!
//! let half = KiloNewtons(10.0) / 2.0;
//! assert_eq!(half.value(), 5.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

/// Bending moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

/// Distributed load intensity in kilonewtons per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerMeter(pub f64);

impl Mul<Meters> for KiloNewtons {
    type Output = KiloNewtonMeters;
    fn mul(self, rhs: Meters) -> Self::Output {
        KiloNewtonMeters(self.0 * rhs.0)
    }
}

impl Div<Meters> for KiloNewtons {
    type Output = KnPerMeter;
    fn div(self, rhs: Meters) -> Self::Output {
        KnPerMeter(self.0 / rhs.0)
    }
}

impl Mul<Meters> for KnPerMeter {
    type Output = KiloNewtons;
    fn mul(self, rhs: Meters) -> Self::Output {
        KiloNewtons(self.0 * rhs.0)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty, $suffix:literal) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $type {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:.2} {}", self.0, $suffix)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters, "m");
impl_arithmetic!(KiloNewtons, "kN");
impl_arithmetic!(KiloNewtonMeters, "kNm");
impl_arithmetic!(KnPerMeter, "kN/m");
