//! # qrmint
//!
//! A QR Code encoder following ISO/IEC 18004. Text goes in, a finished symbol comes out: mode
//! and version analysis, Reed-Solomon error correction over GF(256), block interleaving, data
//! placement and the 8 way mask search are all done here.
//!
//! ## Quick Start
//!
//! ```rust
//! use qrmint::{OutputFormat, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Mode, version, error correction level and mask are chosen automatically
//! let qr = QRBuilder::new(b"HELLO WORLD").build()?;
//! println!("{}", qr.render(OutputFormat::Utf8));
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrmint::{ECLevel, MaskPattern, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new("Hello, World!".as_bytes())
//!     .version(Version::new(2)?)        // Smallest fitting version if not provided
//!     .ec_level(ECLevel::M)             // Highest level fitting the version if not provided
//!     .mask(MaskPattern::new(3)?)       // Lowest penalty mask if not provided
//!     .build()?;
//!
//! let img = qr.to_image(4); // 4 pixels per module
//! assert_eq!(img.width(), 4 * (25 + 8));
//! # Ok(())
//! # }
//! ```
//!
//! ## QR Code Components
//!
//! ### Versions
//! Versions 1 to 40, with sizes from 21x21 to 177x177 modules.
//!
//! ### Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction
//!
//! ### Modes
//! Numeric, alphanumeric (`0-9A-Z $%*+-./:`) and byte. The most compact mode covering the
//! whole input is used.

#![allow(clippy::suspicious_arithmetic_impl)]

pub mod builder;
pub(crate) mod common;
pub mod render;

pub use builder::{Module, QRBuilder, QR};
pub use common::codec::Mode;
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{Color, ECLevel, Metadata, Version};
pub use render::OutputFormat;
