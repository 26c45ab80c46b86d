//! High-level interface to the compiled word-accumulation morphology
//! kernels.
//!
//! This module was produced by the bitmorph code generator; edit the
//! generator, not this file.  It resolves a structuring-element name and a
//! morphological operation to a kernel index, prepares a bordered copy of
//! the source image, and dispatches into the companion low-level module.

use bitmorph_types::PixError;
use bitmorph_types::morph::MorphOp;
use bitmorph_types::pix::Pix;

use crate::fmorphgenlow_1::fmorphopgen_low_1;

/// Border, in pixels, added around the source before a kernel runs.
///
/// Kernels read at most 31 rows and 31 columns away from the current pixel,
/// plus one whole word of horizontal slack.
const ADDED_BORDER: u32 = 32;

/// Number of structuring elements compiled into this unit.
pub const NUM_SELS_GENERATED: usize = 6;

/// Names of the compiled structuring elements, in kernel-pair order.
pub static SEL_NAMES: [&str; NUM_SELS_GENERATED] = [
	"sel_1",
	"sel_2h",
	"sel_5h",
	"sel_5v",
	"sel_3x3",
	"sel_ul3",
];

/// Dilates or erodes `pixs` by the named structuring element.
///
/// Kernel `2 * i` dilates by sel `i` of [`SEL_NAMES`]; kernel `2 * i + 1`
/// erodes by it.  When `pixd` is `None` a fresh destination is allocated;
/// otherwise the caller-supplied destination is written through (it may be
/// the same handle as `pixs`).  Returns the destination.
///
/// # Errors
///
/// Fails when the sel name is unknown, the source is not 1 bpp, or the
/// supplied destination does not match the source in size.
pub fn pix_fmorphop_gen_1(
	pixd: Option<Pix>,
	pixs: &Pix,
	operation: MorphOp,
	selname: &str,
) -> Result<Pix, PixError> {
	let Some(sel) = SEL_NAMES.iter().position(|&name| name == selname) else {
		return Err(PixError::UnknownSelName(selname.to_string()));
	};
	let index = 2 * sel + usize::from(operation == MorphOp::Erode);

	if pixs.depth() != 1 {
		return Err(PixError::BadDepth(pixs.depth()));
	}
	let w = pixs.width();
	let h = pixs.height();
	let wpld = pixs.wpl();

	// Bordered copy of the source, filled with the identity value for the
	// operation, so kernels can read past every image edge.
	let pixt = pixs.add_border(ADDED_BORDER, operation.border_value())?;
	let wpls = pixt.wpl();
	let datat = pixt.data();

	match pixd {
		Some(pixd) => {
			if !pixd.sizes_equal(pixs) {
				return Err(PixError::SizeMismatch);
			}
			fmorphopgen_low_1(&mut pixd.data_mut(), w, h, wpld, &datat, wpls, index);
			Ok(pixd)
		}
		None => {
			let pixd = Pix::create_template(pixs)?;
			fmorphopgen_low_1(&mut pixd.data_mut(), w, h, wpld, &datat, wpls, index);
			Ok(pixd)
		}
	}
}
