//! Pixel access, whole-image fills, pad bits, borders and endian
//! conversion for [`Pix`].

use log::warn;

use super::{Pix, RMASK32, RasterOp};
use crate::error::PixError;

impl Pix {
	/// Reads the pixel at `(x, y)`.
	///
	/// # Errors
	///
	/// Fails outside the image, and for 24 bpp images, whose samples do
	/// not pack into whole words.
	pub fn get_pixel(&self, x: u32, y: u32) -> Result<u32, PixError> {
		let inner = self.inner.borrow();
		if x >= inner.w || y >= inner.h {
			return Err(PixError::OutOfBounds {
				x,
				y,
				width: inner.w,
				height: inner.h,
			});
		}
		if inner.d == 24 {
			return Err(PixError::BadDepth(24));
		}

		let line = u64::from(y) * u64::from(inner.wpl);
		if inner.d == 32 {
			return Ok(inner.data[(line + u64::from(x)) as usize]);
		}
		let bits = u64::from(x) * u64::from(inner.d);
		let word = inner.data[(line + bits / 32) as usize];
		let shift = 32 - inner.d - (bits % 32) as u32;
		Ok((word >> shift) & RMASK32[inner.d as usize])
	}

	/// Writes the pixel at `(x, y)`.  `val` is masked to the depth.
	///
	/// # Errors
	///
	/// Same conditions as [`Pix::get_pixel`].
	pub fn set_pixel(&self, x: u32, y: u32, val: u32) -> Result<(), PixError> {
		let mut inner = self.inner.borrow_mut();
		if x >= inner.w || y >= inner.h {
			return Err(PixError::OutOfBounds {
				x,
				y,
				width: inner.w,
				height: inner.h,
			});
		}
		if inner.d == 24 {
			return Err(PixError::BadDepth(24));
		}

		let line = u64::from(y) * u64::from(inner.wpl);
		if inner.d == 32 {
			let index = (line + u64::from(x)) as usize;
			inner.data[index] = val;
			return Ok(());
		}
		let bits = u64::from(x) * u64::from(inner.d);
		let index = (line + bits / 32) as usize;
		let shift = 32 - inner.d - (bits % 32) as u32;
		let mask = RMASK32[inner.d as usize] << shift;
		let word = inner.data[index];
		inner.data[index] = (word & !mask) | ((val & RMASK32[inner.d as usize]) << shift);
		Ok(())
	}

	/// Clears every pixel to 0.
	pub fn clear_all(&self) -> Result<(), PixError> {
		let (w, h, _) = self.dimensions();
		self.rasterop(0, 0, w as i32, h as i32, RasterOp::Clr, None, 0, 0)
	}

	/// Sets every pixel to the maximum value for the depth.
	pub fn set_all(&self) -> Result<(), PixError> {
		let (w, h, _) = self.dimensions();
		self.rasterop(0, 0, w as i32, h as i32, RasterOp::Set, None, 0, 0)
	}

	/// Sets every pixel to `val`, clamping over-range values with a logged
	/// warning.  Pad bits are overwritten as well.
	pub fn set_all_arbitrary(&self, val: u32) {
		let mut inner = self.inner.borrow_mut();
		let maxval = if inner.d == 32 {
			u32::MAX
		} else {
			(1 << inner.d) - 1
		};
		let val = if val > maxval {
			warn!("pixel value {val} clamped to {maxval}");
			maxval
		} else {
			val
		};

		// Tile one word with as many samples as fit, then blast rows.
		let npix = 32 / inner.d;
		let mut wordval = 0u32;
		for k in 0..npix {
			wordval |= val << (k * inner.d);
		}
		inner.data.fill(wordval);
	}

	/// Sets the pad bits of every row to `val` (0 or 1).
	///
	/// Pad bits are the low bits of the last word in each row that round
	/// `w * d` up to a multiple of 32.  No-op at 32 bpp or when rows end
	/// on a word boundary.
	pub fn set_pad_bits(&self, val: u32) {
		let h = self.height();
		self.set_pad_bits_rows(0, h, val);
	}

	/// Sets the pad bits within a band of `bh` rows starting at `by`.
	///
	/// A negative `by` is clipped to 0; a band extending past the bottom
	/// is truncated.
	pub fn set_pad_bits_band(&self, by: i32, bh: u32, val: u32) -> Result<(), PixError> {
		let h = self.height();
		let start = by.max(0) as u32;
		if start >= h {
			return Err(PixError::BandOutOfRange {
				by,
				height: h,
			});
		}
		self.set_pad_bits_rows(start, bh.min(h - start), val);
		Ok(())
	}

	fn set_pad_bits_rows(&self, by: u32, bh: u32, val: u32) {
		let mut inner = self.inner.borrow_mut();
		if inner.d == 32 {
			return;
		}
		let rowbits = u64::from(inner.w) * u64::from(inner.d);
		let endbits = (32 - rowbits % 32) as u32;
		if endbits == 32 {
			return;
		}
		let fullwords = (rowbits / 32) as usize;
		let wpl = inner.wpl as usize;

		let mask = RMASK32[endbits as usize];
		for i in by..by + bh {
			let index = i as usize * wpl + fullwords;
			if val == 0 {
				inner.data[index] &= !mask;
			} else {
				inner.data[index] |= mask;
			}
		}
	}

	/// Sets or clears all pixels within the given distance of each edge.
	///
	/// # Errors
	///
	/// `op` must be [`RasterOp::Set`] or [`RasterOp::Clr`].
	pub fn set_or_clear_border(
		&self,
		left: u32,
		right: u32,
		top: u32,
		bottom: u32,
		op: RasterOp,
	) -> Result<(), PixError> {
		if op != RasterOp::Set && op != RasterOp::Clr {
			return Err(PixError::BadRasterOp(op));
		}
		let (w, h, _) = self.dimensions();
		let (w, h) = (w as i32, h as i32);
		self.rasterop(0, 0, left as i32, h, op, None, 0, 0)?;
		self.rasterop(w - right as i32, 0, right as i32, h, op, None, 0, 0)?;
		self.rasterop(0, 0, w, top as i32, op, None, 0, 0)?;
		self.rasterop(0, h - bottom as i32, w, bottom as i32, op, None, 0, 0)?;
		Ok(())
	}

	/// Returns a new image with `self` centered inside a border of `npix`
	/// pixels on every side, each border pixel holding `val`.
	///
	/// With `npix == 0` this aliases `self` rather than copying.
	pub fn add_border(&self, npix: u32, val: u32) -> Result<Pix, PixError> {
		self.add_border_general(npix, npix, npix, npix, val)
	}

	/// Returns a new image with `self` inset by the given border widths.
	pub fn add_border_general(
		&self,
		left: u32,
		right: u32,
		top: u32,
		bottom: u32,
		val: u32,
	) -> Result<Pix, PixError> {
		if left == 0 && right == 0 && top == 0 && bottom == 0 {
			return Ok(self.clone());
		}
		let (w, h, d) = self.dimensions();
		let pixd = Pix::create(w + left + right, h + top + bottom, d)?;
		pixd.set_xres(self.xres());
		pixd.set_yres(self.yres());
		pixd.set_colormap(self.colormap());

		pixd.set_all_arbitrary(val);
		pixd.rasterop(
			left as i32,
			top as i32,
			w as i32,
			h as i32,
			RasterOp::Src,
			Some(self),
			0,
			0,
		)?;
		Ok(pixd)
	}

	/// Returns a new image with `npix` pixels stripped from every side.
	///
	/// With `npix == 0` this aliases `self` rather than copying.
	pub fn remove_border(&self, npix: u32) -> Result<Pix, PixError> {
		self.remove_border_general(npix, npix, npix, npix)
	}

	/// Returns a new image with the given border widths stripped.
	///
	/// # Errors
	///
	/// Fails when nothing would remain along either axis.
	pub fn remove_border_general(
		&self,
		left: u32,
		right: u32,
		top: u32,
		bottom: u32,
	) -> Result<Pix, PixError> {
		if left == 0 && right == 0 && top == 0 && bottom == 0 {
			return Ok(self.clone());
		}
		let (w, h, d) = self.dimensions();
		if left + right >= w {
			return Err(PixError::BorderTooLarge {
				npix: left + right,
				axis: "width",
				size: w,
			});
		}
		if top + bottom >= h {
			return Err(PixError::BorderTooLarge {
				npix: top + bottom,
				axis: "height",
				size: h,
			});
		}
		let (wd, hd) = (w - left - right, h - top - bottom);
		let pixd = Pix::create(wd, hd, d)?;
		pixd.set_xres(self.xres());
		pixd.set_yres(self.yres());
		pixd.set_colormap(self.colormap());

		pixd.rasterop(
			0,
			0,
			wd as i32,
			hd as i32,
			RasterOp::Src,
			Some(self),
			left as i32,
			top as i32,
		)?;
		Ok(pixd)
	}

	/// Swaps the bytes within each word, in place.
	///
	/// Canonical word order keeps pixel 0 at the most significant bit, so
	/// serializing to raster byte order needs this flip on little-endian
	/// hosts.  On big-endian hosts it is a no-op.
	pub fn endian_byte_swap(&self) {
		if cfg!(target_endian = "big") {
			return;
		}
		let mut inner = self.inner.borrow_mut();
		for word in &mut inner.data {
			*word = word.swap_bytes();
		}
	}

	/// Like [`Pix::endian_byte_swap`], but leaves `self` untouched:
	/// returns a byte-flipped copy on little-endian hosts and a clone on
	/// big-endian hosts.
	pub fn endian_byte_swap_new(&self) -> Result<Pix, PixError> {
		if cfg!(target_endian = "big") {
			return Ok(self.clone());
		}
		let pixd = Pix::create_template_no_init(self)?;
		{
			let s = self.inner.borrow();
			let mut d = pixd.inner.borrow_mut();
			for (dst, src) in d.data.iter_mut().zip(&s.data) {
				*dst = src.swap_bytes();
			}
		}
		Ok(pixd)
	}

	/// Swaps the two 16-bit halves of each word, in place.  No-op on
	/// big-endian hosts.
	pub fn endian_two_byte_swap(&self) {
		if cfg!(target_endian = "big") {
			return;
		}
		let mut inner = self.inner.borrow_mut();
		for word in &mut inner.data {
			*word = word.rotate_left(16);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_pixel_roundtrip_depths() {
		for d in [1u32, 2, 4, 8, 16, 32] {
			let pix = Pix::create(37, 5, d).unwrap();
			let maxval = if d == 32 { u32::MAX } else { (1 << d) - 1 };
			pix.set_pixel(0, 0, maxval).unwrap();
			pix.set_pixel(36, 4, maxval).unwrap();
			pix.set_pixel(17, 2, 1).unwrap();
			assert_eq!(pix.get_pixel(0, 0).unwrap(), maxval, "{d} bpp");
			assert_eq!(pix.get_pixel(36, 4).unwrap(), maxval, "{d} bpp");
			assert_eq!(pix.get_pixel(17, 2).unwrap(), 1, "{d} bpp");
			assert_eq!(pix.get_pixel(16, 2).unwrap(), 0, "{d} bpp");
		}
	}

	#[test]
	fn test_pixel_msb_first_packing() {
		let pix = Pix::create(64, 1, 1).unwrap();
		pix.set_pixel(0, 0, 1).unwrap();
		pix.set_pixel(33, 0, 1).unwrap();
		let data = pix.data();
		assert_eq!(data[0], 0x8000_0000);
		assert_eq!(data[1], 0x4000_0000);
	}

	#[test]
	fn test_pixel_bounds_and_depth() {
		let pix = Pix::create(4, 4, 1).unwrap();
		assert!(matches!(
			pix.get_pixel(4, 0),
			Err(PixError::OutOfBounds { .. })
		));
		assert!(matches!(
			pix.set_pixel(0, 4, 1),
			Err(PixError::OutOfBounds { .. })
		));
		let rgb = Pix::create(4, 4, 24).unwrap();
		assert!(matches!(rgb.get_pixel(0, 0), Err(PixError::BadDepth(24))));
	}

	#[test]
	fn test_set_all_arbitrary_tiles_and_clamps() {
		let pix = Pix::create(6, 2, 4).unwrap();
		pix.set_all_arbitrary(5);
		for y in 0..2 {
			for x in 0..6 {
				assert_eq!(pix.get_pixel(x, y).unwrap(), 5);
			}
		}
		// over-range values clamp to the depth's maximum
		pix.set_all_arbitrary(99);
		assert_eq!(pix.get_pixel(0, 0).unwrap(), 15);
	}

	#[test]
	fn test_pad_bits() {
		// 33 x 1 bpp: 31 pad bits in the second word of each row
		let pix = Pix::create(33, 3, 1).unwrap();
		pix.set_pixel(32, 1, 1).unwrap();
		pix.set_pad_bits(1);
		{
			let data = pix.data();
			for row in 0..3 {
				assert_eq!(data[row * 2 + 1] & 0x7fff_ffff, 0x7fff_ffff);
			}
		}
		// pixel content is untouched
		assert_eq!(pix.get_pixel(32, 1).unwrap(), 1);
		assert_eq!(pix.get_pixel(32, 0).unwrap(), 0);

		pix.set_pad_bits(0);
		let data = pix.data();
		for row in 0..3 {
			assert_eq!(data[row * 2 + 1] & 0x7fff_ffff, 0);
		}
	}

	#[test]
	fn test_pad_bits_full_word_is_noop() {
		let pix = Pix::create(32, 2, 1).unwrap();
		pix.set_pad_bits(1);
		assert!(pix.data().iter().all(|&word| word == 0));
	}

	#[test]
	fn test_pad_bits_band() {
		let pix = Pix::create(33, 4, 1).unwrap();
		pix.set_pad_bits_band(1, 2, 1).unwrap();
		let data = pix.data();
		assert_eq!(data[1], 0);
		assert_eq!(data[3] & 0x7fff_ffff, 0x7fff_ffff);
		assert_eq!(data[5] & 0x7fff_ffff, 0x7fff_ffff);
		assert_eq!(data[7], 0);
		drop(data);
		assert!(matches!(
			pix.set_pad_bits_band(7, 1, 1),
			Err(PixError::BandOutOfRange { .. })
		));
	}

	#[test]
	fn test_border_roundtrip() {
		let pix = Pix::create(13, 7, 1).unwrap();
		pix.set_pixel(0, 0, 1).unwrap();
		pix.set_pixel(12, 6, 1).unwrap();
		pix.set_pixel(5, 3, 1).unwrap();

		for npix in [0u32, 1, 3, 32] {
			let bordered = pix.add_border(npix, 1).unwrap();
			assert_eq!(bordered.width(), 13 + 2 * npix);
			let restored = bordered.remove_border(npix).unwrap();
			for y in 0..7 {
				for x in 0..13 {
					assert_eq!(
						restored.get_pixel(x, y).unwrap(),
						pix.get_pixel(x, y).unwrap(),
						"npix {npix} at ({x}, {y})"
					);
				}
			}
		}
	}

	#[test]
	fn test_add_border_fills_value() {
		let pix = Pix::create(4, 4, 1).unwrap();
		let bordered = pix.add_border(2, 1).unwrap();
		assert_eq!(bordered.get_pixel(0, 0).unwrap(), 1);
		assert_eq!(bordered.get_pixel(7, 7).unwrap(), 1);
		assert_eq!(bordered.get_pixel(2, 2).unwrap(), 0);
	}

	#[test]
	fn test_add_border_zero_aliases() {
		let pix = Pix::create(4, 4, 1).unwrap();
		let same = pix.add_border(0, 0).unwrap();
		assert!(Pix::same_handle(&pix, &same));
	}

	#[test]
	fn test_remove_border_too_large() {
		let pix = Pix::create(4, 4, 1).unwrap();
		assert!(matches!(
			pix.remove_border(2),
			Err(PixError::BorderTooLarge { .. })
		));
	}

	#[test]
	fn test_set_or_clear_border() {
		let pix = Pix::create(8, 8, 1).unwrap();
		pix.set_or_clear_border(2, 2, 2, 2, RasterOp::Set).unwrap();
		assert_eq!(pix.get_pixel(0, 4).unwrap(), 1);
		assert_eq!(pix.get_pixel(7, 0).unwrap(), 1);
		assert_eq!(pix.get_pixel(4, 4).unwrap(), 0);

		pix.set_or_clear_border(2, 2, 2, 2, RasterOp::Clr).unwrap();
		assert_eq!(pix.get_pixel(0, 4).unwrap(), 0);

		assert!(matches!(
			pix.set_or_clear_border(1, 1, 1, 1, RasterOp::Src),
			Err(PixError::BadRasterOp(RasterOp::Src))
		));
	}

	#[test]
	fn test_endian_byte_swap_roundtrip() {
		let pix = Pix::create(40, 3, 1).unwrap();
		pix.set_pixel(0, 0, 1).unwrap();
		pix.set_pixel(39, 2, 1).unwrap();
		let before: Vec<u32> = pix.data().to_vec();

		pix.endian_byte_swap();
		pix.endian_byte_swap();
		assert_eq!(&*pix.data(), &before[..]);
	}

	#[test]
	fn test_endian_byte_swap_new() {
		let pix = Pix::create(8, 1, 8).unwrap();
		pix.set_pixel(0, 0, 0xab).unwrap();
		let swapped = pix.endian_byte_swap_new().unwrap();
		if cfg!(target_endian = "big") {
			assert!(Pix::same_handle(&pix, &swapped));
		} else {
			assert_eq!(swapped.data()[0], 0x0000_00ab);
			// source is untouched
			assert_eq!(pix.data()[0], 0xab00_0000);
		}
	}

	#[test]
	fn test_endian_two_byte_swap() {
		let pix = Pix::create(2, 1, 16).unwrap();
		pix.set_pixel(0, 0, 0x1234).unwrap();
		pix.set_pixel(1, 0, 0x5678).unwrap();
		pix.endian_two_byte_swap();
		if cfg!(target_endian = "little") {
			assert_eq!(pix.data()[0], 0x5678_1234);
		}
	}
}
