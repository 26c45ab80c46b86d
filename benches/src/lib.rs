//! Benchmark helper utilities for bitmorph-rs.
//!
//! Provides synthetic 1-bpp test images shared by the benchmark suite.

use bitmorph_types::pix::Pix;

/// Builds a deterministic speckled binary image of the given size.
///
/// Roughly half the pixels are set, drawn from a linear congruential
/// generator so repeated runs measure identical inputs.
pub fn speckle_image(width: u32, height: u32, seed: u32) -> Pix {
	let pix = Pix::create(width, height, 1).expect("valid bench dimensions");
	let mut state = seed | 1;
	{
		let mut data = pix.data_mut();
		for word in data.iter_mut() {
			state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
			*word = state;
		}
	}
	pix.set_pad_bits(0);
	pix
}
