//! Randomized synthesis of cellular device identities.
//!
//! [`IdentityGenerator`] draws models, regions, carriers and identifiers from
//! a [`devsim_registry::ReferenceRegistry`] using an injected
//! [`RandomSource`]. Identical seeds produce identical identities.

#![deny(unsafe_code)]

pub mod dialing;
pub mod generator;
pub mod random;

pub use dialing::{DIALING_PLANS, DialingPlan, dialing_plan, generic_phone_number};
pub use generator::{
    FALLBACK_MOBILE_COUNTRY_CODE, IMSI_LEN, IdentityGenerator, IdentityHints, UNKNOWN,
};
pub use random::{GENERATOR_STREAM, MAPPER_STREAM, RandomSource, SeedPolicy, SeededRandom};
