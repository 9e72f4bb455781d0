//! # Built-in Schemas
//!
//! Schemas for common NMEA 0183 sentences, and [`standard`] collecting all of
//! them into one [`Catalog`]:
//!
//! | Message     | Schema      |
//! |-------------|-------------|
//! | `GGA`       | [`gga()`]   |
//! | `GLL`       | [`gll()`]   |
//! | `GNS`       | [`gns()`]   |
//! | `HDT`       | [`hdt()`]   |
//! | `RMC`       | [`rmc()`]   |
//! | `VTG`       | [`vtg()`]   |
//! | `ZDA`       | [`zda()`]   |
//! | `PSAT,HPR`  | [`hpr()`]   |
//!
//! GLL, RMC and VTG carry the NMEA 2.3 FAA mode field when the `nmea-v2-3`
//! feature (default) is enabled. [`gll_v2_0`], [`rmc_v2_0`] and [`vtg_v2_0`]
//! always build the shorter, older layout.
//!
//! Positions decode into signed decimal degrees ([`FieldValue::Degrees`]),
//! times of day into [`UtcTime`] and mode indicators into [`GpsMode`]s.
//!
//! [`FieldValue::Degrees`]: crate::FieldValue::Degrees
//! [`UtcTime`]: crate::UtcTime
//! [`GpsMode`]: crate::GpsMode

mod gga;
mod gll;
mod gns;
mod hdt;
mod hpr;
mod rmc;
mod vtg;
mod zda;

pub use gga::gga;
pub use gll::{gll, gll_v2_0};
pub use gns::gns;
pub use hdt::hdt;
pub use hpr::hpr;
pub use rmc::{rmc, rmc_v2_0};
pub use vtg::{vtg, vtg_v2_0};
pub use zda::zda;

use crate::{Catalog, ConfigError, FieldSpec, PostProcess, Primitive, TokenFormat};

/// All built-in schemas.
///
/// ```rust
/// use nmea0183_schema::catalog;
///
/// let catalog = catalog::standard().unwrap();
/// let ids: Vec<_> = catalog.iter().map(|s| s.message_id()).collect();
///
/// assert_eq!(ids, ["GGA", "GLL", "GNS", "HDT", "RMC", "VTG", "ZDA", "HPR"]);
/// ```
pub fn standard() -> Result<Catalog, ConfigError> {
    Catalog::new([
        gga()?,
        gll()?,
        gns()?,
        hdt()?,
        rmc()?,
        vtg()?,
        zda()?,
        hpr()?,
    ])
}

/// `hhmmss.ss` as a [`UtcTime`](crate::UtcTime).
fn utc_time(name: &str) -> Result<FieldSpec, ConfigError> {
    FieldSpec::with(
        name,
        [
            TokenFormat::fixed(Primitive::U8, 2),
            TokenFormat::fixed(Primitive::U8, 2),
            TokenFormat::new(Primitive::F64),
        ],
        PostProcess::UtcTime,
    )
}

/// `ddmm.mm,a`
fn latitude() -> Result<FieldSpec, ConfigError> {
    FieldSpec::with(
        "latitude",
        [
            TokenFormat::fixed(Primitive::U8, 2),
            TokenFormat::new(Primitive::F64),
            TokenFormat::new(Primitive::Char),
        ],
        PostProcess::Degrees,
    )
}

/// `dddmm.mm,a`
fn longitude() -> Result<FieldSpec, ConfigError> {
    FieldSpec::with(
        "longitude",
        [
            TokenFormat::fixed(Primitive::U16, 3),
            TokenFormat::new(Primitive::F64),
            TokenFormat::new(Primitive::Char),
        ],
        PostProcess::Degrees,
    )
}

fn scalar(name: &str, primitive: Primitive) -> Result<FieldSpec, ConfigError> {
    FieldSpec::new(name, [TokenFormat::new(primitive)])
}

/// A value followed by its unit marker, such as `545.4,M`.
fn with_unit(name: &str, primitive: Primitive, unit: &str) -> Result<FieldSpec, ConfigError> {
    FieldSpec::new(name, [TokenFormat::new(primitive), TokenFormat::literal(unit)])
}

/// A single FAA mode indicator.
fn faa_mode() -> Result<FieldSpec, ConfigError> {
    FieldSpec::with(
        "mode",
        [TokenFormat::new(Primitive::Char)],
        PostProcess::Modes { columns: 1 },
    )
}
