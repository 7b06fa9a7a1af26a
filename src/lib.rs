//! Acceleration curve configuration for RawAccel.
//!
//! A [`Controller`] owns the six parameter slots, shows the ones the
//! selected curve uses, and converts them to and from [`AccelArgs`].

mod args;
mod catalog;
mod controller;
mod error;
mod layout;
mod slot;
mod variant;

pub use {
    args::AccelArgs,
    catalog::VariantCatalog,
    controller::Controller,
    error::{Error, ParseError, UnknownVariant, VariantKey},
    layout::{Geometry, SlotLayout, VariantLayout},
    slot::{CapMode, Field, OffsetMode, ParameterSlot, SlotRole, Slots, SubValue},
    variant::AccelVariant
};
