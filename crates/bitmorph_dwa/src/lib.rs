//! Compiled word-accumulation morphology kernels for the basic sel set.
//!
//! The two modules in this crate are the checked-in output of one
//! `bitmorph_gen` run with fileindex 1 over
//! [`Sela::basic`](bitmorph_types::sel::Sela::basic); the integration
//! tests regenerate them and compare byte-for-byte, so the committed text
//! can never drift from the generator.
//!
//! # Examples
//!
//! ```
//! use bitmorph_dwa::pix_fmorphop_gen_1;
//! use bitmorph_types::morph::MorphOp;
//! use bitmorph_types::pix::Pix;
//!
//! # fn main() -> Result<(), bitmorph_types::PixError> {
//! let pix = Pix::create(16, 16, 1)?;
//! pix.set_pixel(8, 8, 1)?;
//!
//! let fat = pix_fmorphop_gen_1(None, &pix, MorphOp::Dilate, "sel_3x3")?;
//! assert_eq!(fat.get_pixel(7, 7)?, 1);
//! assert_eq!(fat.get_pixel(9, 9)?, 1);
//! # Ok(())
//! # }
//! ```

mod fmorphgen_1;
mod fmorphgenlow_1;

pub use fmorphgen_1::{NUM_SELS_GENERATED, SEL_NAMES, pix_fmorphop_gen_1};
