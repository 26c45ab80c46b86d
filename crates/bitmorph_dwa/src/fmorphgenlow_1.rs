//! Low-level word-accumulation morphology kernels.
//!
//! This module was produced by the bitmorph code generator; edit the
//! generator, not this file.  Each structuring element is compiled into a
//! dilation/erosion kernel pair; one destination word is produced per
//! inner-loop iteration by combining barrel-shifted aligned reads of the
//! bordered source.

/// Runs kernel `index` over packed 1-bpp image data.
///
/// `datas` must hold a bordered copy of the source image: 32 pixels on
/// every side, which leaves one whole word of horizontal slack per row.
/// The destination receives exactly `h` rows of `wpld` words each and is
/// never read.
pub(crate) fn fmorphopgen_low_1(
	datad: &mut [u32],
	w: u32,
	h: u32,
	wpld: u32,
	datas: &[u32],
	wpls: u32,
	index: usize,
) {
	match index {
		0 => fdilate_1_0(datad, w, h, wpld, datas, wpls),
		1 => ferode_1_0(datad, w, h, wpld, datas, wpls),
		2 => fdilate_1_1(datad, w, h, wpld, datas, wpls),
		3 => ferode_1_1(datad, w, h, wpld, datas, wpls),
		4 => fdilate_1_2(datad, w, h, wpld, datas, wpls),
		5 => ferode_1_2(datad, w, h, wpld, datas, wpls),
		6 => fdilate_1_3(datad, w, h, wpld, datas, wpls),
		7 => ferode_1_3(datad, w, h, wpld, datas, wpls),
		8 => fdilate_1_4(datad, w, h, wpld, datas, wpls),
		9 => ferode_1_4(datad, w, h, wpld, datas, wpls),
		10 => fdilate_1_5(datad, w, h, wpld, datas, wpls),
		11 => ferode_1_5(datad, w, h, wpld, datas, wpls),
		_ => {}
	}
}

// Kernels follow, one dilation/erosion pair per structuring element.  Each
// kernel computes one destination word per inner iteration from aligned
// source words combined with sub-word barrel shifts.

fn fdilate_1_0(
	datad: &mut [u32],
	_w: u32,
	h: u32,
	wpld: u32,
	datas: &[u32],
	wpls: u32,
) {
	let wpls = wpls as usize;
	let wpld = wpld as usize;
	for i in 0..h as usize {
		let sbase = (i + 32) * wpls + 1;
		let dbase = i * wpld;
		for j in 0..wpld {
			let sptr = sbase + j;
			let dptr = dbase + j;
			datad[dptr] = datas[sptr];
		}
	}
}

fn ferode_1_0(
	datad: &mut [u32],
	_w: u32,
	h: u32,
	wpld: u32,
	datas: &[u32],
	wpls: u32,
) {
	let wpls = wpls as usize;
	let wpld = wpld as usize;
	for i in 0..h as usize {
		let sbase = (i + 32) * wpls + 1;
		let dbase = i * wpld;
		for j in 0..wpld {
			let sptr = sbase + j;
			let dptr = dbase + j;
			datad[dptr] = datas[sptr];
		}
	}
}

fn fdilate_1_1(
	datad: &mut [u32],
	_w: u32,
	h: u32,
	wpld: u32,
	datas: &[u32],
	wpls: u32,
) {
	let wpls = wpls as usize;
	let wpld = wpld as usize;
	for i in 0..h as usize {
		let sbase = (i + 32) * wpls + 1;
		let dbase = i * wpld;
		for j in 0..wpld {
			let sptr = sbase + j;
			let dptr = dbase + j;
			datad[dptr] = (datas[sptr]) |
				((datas[sptr] >> 1) | (datas[sptr - 1] << 31));
		}
	}
}

fn ferode_1_1(
	datad: &mut [u32],
	_w: u32,
	h: u32,
	wpld: u32,
	datas: &[u32],
	wpls: u32,
) {
	let wpls = wpls as usize;
	let wpld = wpld as usize;
	for i in 0..h as usize {
		let sbase = (i + 32) * wpls + 1;
		let dbase = i * wpld;
		for j in 0..wpld {
			let sptr = sbase + j;
			let dptr = dbase + j;
			datad[dptr] = (datas[sptr]) &
				((datas[sptr] << 1) | (datas[sptr + 1] >> 31));
		}
	}
}

fn fdilate_1_2(
	datad: &mut [u32],
	_w: u32,
	h: u32,
	wpld: u32,
	datas: &[u32],
	wpls: u32,
) {
	let wpls = wpls as usize;
	let wpld = wpld as usize;
	for i in 0..h as usize {
		let sbase = (i + 32) * wpls + 1;
		let dbase = i * wpld;
		for j in 0..wpld {
			let sptr = sbase + j;
			let dptr = dbase + j;
			datad[dptr] = ((datas[sptr] << 2) | (datas[sptr + 1] >> 30)) |
				((datas[sptr] << 1) | (datas[sptr + 1] >> 31)) |
				(datas[sptr]) |
				((datas[sptr] >> 1) | (datas[sptr - 1] << 31)) |
				((datas[sptr] >> 2) | (datas[sptr - 1] << 30));
		}
	}
}

fn ferode_1_2(
	datad: &mut [u32],
	_w: u32,
	h: u32,
	wpld: u32,
	datas: &[u32],
	wpls: u32,
) {
	let wpls = wpls as usize;
	let wpld = wpld as usize;
	for i in 0..h as usize {
		let sbase = (i + 32) * wpls + 1;
		let dbase = i * wpld;
		for j in 0..wpld {
			let sptr = sbase + j;
			let dptr = dbase + j;
			datad[dptr] = ((datas[sptr] >> 2) | (datas[sptr - 1] << 30)) &
				((datas[sptr] >> 1) | (datas[sptr - 1] << 31)) &
				(datas[sptr]) &
				((datas[sptr] << 1) | (datas[sptr + 1] >> 31)) &
				((datas[sptr] << 2) | (datas[sptr + 1] >> 30));
		}
	}
}

fn fdilate_1_3(
	datad: &mut [u32],
	_w: u32,
	h: u32,
	wpld: u32,
	datas: &[u32],
	wpls: u32,
) {
	let wpls = wpls as usize;
	let wpld = wpld as usize;
	let wpls2 = 2 * wpls;
	for i in 0..h as usize {
		let sbase = (i + 32) * wpls + 1;
		let dbase = i * wpld;
		for j in 0..wpld {
			let sptr = sbase + j;
			let dptr = dbase + j;
			datad[dptr] = (datas[sptr + wpls2]) |
				(datas[sptr + wpls]) |
				(datas[sptr]) |
				(datas[sptr - wpls]) |
				(datas[sptr - wpls2]);
		}
	}
}

fn ferode_1_3(
	datad: &mut [u32],
	_w: u32,
	h: u32,
	wpld: u32,
	datas: &[u32],
	wpls: u32,
) {
	let wpls = wpls as usize;
	let wpld = wpld as usize;
	let wpls2 = 2 * wpls;
	for i in 0..h as usize {
		let sbase = (i + 32) * wpls + 1;
		let dbase = i * wpld;
		for j in 0..wpld {
			let sptr = sbase + j;
			let dptr = dbase + j;
			datad[dptr] = (datas[sptr - wpls2]) &
				(datas[sptr - wpls]) &
				(datas[sptr]) &
				(datas[sptr + wpls]) &
				(datas[sptr + wpls2]);
		}
	}
}

fn fdilate_1_4(
	datad: &mut [u32],
	_w: u32,
	h: u32,
	wpld: u32,
	datas: &[u32],
	wpls: u32,
) {
	let wpls = wpls as usize;
	let wpld = wpld as usize;
	for i in 0..h as usize {
		let sbase = (i + 32) * wpls + 1;
		let dbase = i * wpld;
		for j in 0..wpld {
			let sptr = sbase + j;
			let dptr = dbase + j;
			datad[dptr] = ((datas[sptr + wpls] << 1) | (datas[sptr + wpls + 1] >> 31)) |
				(datas[sptr + wpls]) |
				((datas[sptr + wpls] >> 1) | (datas[sptr + wpls - 1] << 31)) |
				((datas[sptr] << 1) | (datas[sptr + 1] >> 31)) |
				(datas[sptr]) |
				((datas[sptr] >> 1) | (datas[sptr - 1] << 31)) |
				((datas[sptr - wpls] << 1) | (datas[sptr - wpls + 1] >> 31)) |
				(datas[sptr - wpls]) |
				((datas[sptr - wpls] >> 1) | (datas[sptr - wpls - 1] << 31));
		}
	}
}

fn ferode_1_4(
	datad: &mut [u32],
	_w: u32,
	h: u32,
	wpld: u32,
	datas: &[u32],
	wpls: u32,
) {
	let wpls = wpls as usize;
	let wpld = wpld as usize;
	for i in 0..h as usize {
		let sbase = (i + 32) * wpls + 1;
		let dbase = i * wpld;
		for j in 0..wpld {
			let sptr = sbase + j;
			let dptr = dbase + j;
			datad[dptr] = ((datas[sptr - wpls] >> 1) | (datas[sptr - wpls - 1] << 31)) &
				(datas[sptr - wpls]) &
				((datas[sptr - wpls] << 1) | (datas[sptr - wpls + 1] >> 31)) &
				((datas[sptr] >> 1) | (datas[sptr - 1] << 31)) &
				(datas[sptr]) &
				((datas[sptr] << 1) | (datas[sptr + 1] >> 31)) &
				((datas[sptr + wpls] >> 1) | (datas[sptr + wpls - 1] << 31)) &
				(datas[sptr + wpls]) &
				((datas[sptr + wpls] << 1) | (datas[sptr + wpls + 1] >> 31));
		}
	}
}

fn fdilate_1_5(
	datad: &mut [u32],
	_w: u32,
	h: u32,
	wpld: u32,
	datas: &[u32],
	wpls: u32,
) {
	let wpls = wpls as usize;
	let wpld = wpld as usize;
	let wpls2 = 2 * wpls;
	for i in 0..h as usize {
		let sbase = (i + 32) * wpls + 1;
		let dbase = i * wpld;
		for j in 0..wpld {
			let sptr = sbase + j;
			let dptr = dbase + j;
			datad[dptr] = (datas[sptr]) |
				((datas[sptr] >> 1) | (datas[sptr - 1] << 31)) |
				((datas[sptr] >> 2) | (datas[sptr - 1] << 30)) |
				(datas[sptr - wpls]) |
				((datas[sptr - wpls] >> 1) | (datas[sptr - wpls - 1] << 31)) |
				((datas[sptr - wpls] >> 2) | (datas[sptr - wpls - 1] << 30)) |
				(datas[sptr - wpls2]) |
				((datas[sptr - wpls2] >> 1) | (datas[sptr - wpls2 - 1] << 31)) |
				((datas[sptr - wpls2] >> 2) | (datas[sptr - wpls2 - 1] << 30));
		}
	}
}

fn ferode_1_5(
	datad: &mut [u32],
	_w: u32,
	h: u32,
	wpld: u32,
	datas: &[u32],
	wpls: u32,
) {
	let wpls = wpls as usize;
	let wpld = wpld as usize;
	let wpls2 = 2 * wpls;
	for i in 0..h as usize {
		let sbase = (i + 32) * wpls + 1;
		let dbase = i * wpld;
		for j in 0..wpld {
			let sptr = sbase + j;
			let dptr = dbase + j;
			datad[dptr] = (datas[sptr]) &
				((datas[sptr] << 1) | (datas[sptr + 1] >> 31)) &
				((datas[sptr] << 2) | (datas[sptr + 1] >> 30)) &
				(datas[sptr + wpls]) &
				((datas[sptr + wpls] << 1) | (datas[sptr + wpls + 1] >> 31)) &
				((datas[sptr + wpls] << 2) | (datas[sptr + wpls + 1] >> 30)) &
				(datas[sptr + wpls2]) &
				((datas[sptr + wpls2] << 1) | (datas[sptr + wpls2 + 1] >> 31)) &
				((datas[sptr + wpls2] << 2) | (datas[sptr + wpls2 + 1] >> 30));
		}
	}
}
