//! Generic bit-block transfer over packed images.
//!
//! Works at bit granularity in destination-word-aligned strips: each
//! destination word in the affected span is rewritten once, with the
//! source window fetched by a two-load barrel shift when the transfer is
//! not word aligned.  Pad bits are never touched.

use super::Pix;
use crate::error::PixError;

/// Combining rule for [`Pix::rasterop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterOp {
	/// Clear destination bits
	Clr,
	/// Set destination bits
	Set,
	/// Invert destination bits
	NotDst,
	/// Replace destination with source
	Src,
	/// Replace destination with inverted source
	NotSrc,
	/// OR source into destination
	SrcOrDst,
	/// AND source into destination
	SrcAndDst,
	/// XOR source into destination
	SrcXorDst,
}

impl RasterOp {
	fn needs_src(self) -> bool {
		matches!(
			self,
			Self::Src | Self::NotSrc | Self::SrcOrDst | Self::SrcAndDst | Self::SrcXorDst
		)
	}

	fn combine(self, s: u32, d: u32) -> u32 {
		match self {
			Self::Clr => 0,
			Self::Set => u32::MAX,
			Self::NotDst => !d,
			Self::Src => s,
			Self::NotSrc => !s,
			Self::SrcOrDst => s | d,
			Self::SrcAndDst => s & d,
			Self::SrcXorDst => s ^ d,
		}
	}
}

/// Mask for bit positions `b0..b1` of a word, counted from the most
/// significant bit.
fn span_mask(b0: u32, b1: u32) -> u32 {
	debug_assert!(b0 < b1 && b1 <= 32);
	let hi = u32::MAX >> b0;
	let lo = if b1 >= 32 { 0 } else { u32::MAX >> b1 };
	hi & !lo
}

/// Fetches 32 bits of a row starting at bit offset `bit`, which may be
/// negative or run past the stored words; missing bits read as 0.
fn fetch32(line: &[u32], bit: i64) -> u32 {
	let word = bit.div_euclid(32);
	let off = bit.rem_euclid(32) as u32;
	let get = |index: i64| {
		if index < 0 {
			0
		} else {
			line.get(index as usize).copied().unwrap_or(0)
		}
	};
	let w0 = get(word);
	if off == 0 {
		w0
	} else {
		(w0 << off) | (get(word + 1) >> (32 - off))
	}
}

impl Pix {
	/// General raster operation: combines a `dw` x `dh` rectangle of `src`
	/// at `(sx, sy)` into `self` at `(dx, dy)` under `op`, clipping the
	/// rectangle to both images.  Destination-only ops ignore `src`.
	///
	/// Passing the same handle as source and destination operates on a
	/// snapshot of the source, so overlapping transfers are well defined.
	///
	/// # Errors
	///
	/// A source-consuming op without a source, or a source whose depth
	/// differs from the destination's, is an error.
	pub fn rasterop(
		&self,
		dx: i32,
		dy: i32,
		dw: i32,
		dh: i32,
		op: RasterOp,
		src: Option<&Pix>,
		sx: i32,
		sy: i32,
	) -> Result<(), PixError> {
		if !op.needs_src() {
			return self.rasterop_dst_only(dx, dy, dw, dh, op);
		}
		let Some(src) = src else {
			return Err(PixError::MissingSource(op));
		};
		if Pix::same_handle(self, src) {
			let snapshot = src.copy(None)?;
			return self.rasterop(dx, dy, dw, dh, op, Some(&snapshot), sx, sy);
		}
		if self.depth() != src.depth() {
			return Err(PixError::SizeMismatch);
		}

		let (dwid, dhei, depth) = self.dimensions();
		let (swid, shei, _) = src.dimensions();
		let (mut dx, mut dy, mut dw, mut dh, mut sx, mut sy) = (
			i64::from(dx),
			i64::from(dy),
			i64::from(dw),
			i64::from(dh),
			i64::from(sx),
			i64::from(sy),
		);

		// Clip against the destination, shifting the source origin along,
		// then against the source.
		if dx < 0 {
			dw += dx;
			sx -= dx;
			dx = 0;
		}
		if dy < 0 {
			dh += dy;
			sy -= dy;
			dy = 0;
		}
		if sx < 0 {
			dw += sx;
			dx -= sx;
			sx = 0;
		}
		if sy < 0 {
			dh += sy;
			dy -= sy;
			sy = 0;
		}
		dw = dw.min(i64::from(dwid) - dx).min(i64::from(swid) - sx);
		dh = dh.min(i64::from(dhei) - dy).min(i64::from(shei) - sy);
		if dw <= 0 || dh <= 0 {
			return Ok(());
		}

		let depth = i64::from(depth);
		let dbx = dx * depth;
		let sbx = sx * depth;
		let bw = dw * depth;
		let dwpl = self.wpl() as usize;
		let swpl = src.wpl() as usize;

		let sdata = src.data();
		let mut ddata = self.data_mut();
		for row in 0..dh {
			let dline = (dy + row) as usize * dwpl;
			let sline = (sy + row) as usize * swpl;
			let srow = &sdata[sline..sline + swpl];

			let first = (dbx / 32) as usize;
			let last = ((dbx + bw - 1) / 32) as usize;
			for wi in first..=last {
				let b0 = if wi == first { (dbx % 32) as u32 } else { 0 };
				let b1 = if wi == last {
					(dbx + bw - wi as i64 * 32) as u32
				} else {
					32
				};
				let mask = span_mask(b0, b1);
				let sbit = sbx + (wi as i64 * 32 - dbx);
				let s = fetch32(srow, sbit);
				let d = ddata[dline + wi];
				ddata[dline + wi] = (d & !mask) | (op.combine(s, d) & mask);
			}
		}
		Ok(())
	}

	fn rasterop_dst_only(
		&self,
		dx: i32,
		dy: i32,
		dw: i32,
		dh: i32,
		op: RasterOp,
	) -> Result<(), PixError> {
		let (dwid, dhei, depth) = self.dimensions();
		let (mut dx, mut dy, mut dw, mut dh) =
			(i64::from(dx), i64::from(dy), i64::from(dw), i64::from(dh));

		if dx < 0 {
			dw += dx;
			dx = 0;
		}
		if dy < 0 {
			dh += dy;
			dy = 0;
		}
		dw = dw.min(i64::from(dwid) - dx);
		dh = dh.min(i64::from(dhei) - dy);
		if dw <= 0 || dh <= 0 {
			return Ok(());
		}

		let depth = i64::from(depth);
		let dbx = dx * depth;
		let bw = dw * depth;
		let dwpl = self.wpl() as usize;

		let mut ddata = self.data_mut();
		for row in 0..dh {
			let dline = (dy + row) as usize * dwpl;
			let first = (dbx / 32) as usize;
			let last = ((dbx + bw - 1) / 32) as usize;
			for wi in first..=last {
				let b0 = if wi == first { (dbx % 32) as u32 } else { 0 };
				let b1 = if wi == last {
					(dbx + bw - wi as i64 * 32) as u32
				} else {
					32
				};
				let mask = span_mask(b0, b1);
				let d = ddata[dline + wi];
				ddata[dline + wi] = (d & !mask) | (op.combine(0, d) & mask);
			}
		}
		Ok(())
	}
}
