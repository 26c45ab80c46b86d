//! Packed raster image buffer.
//!
//! A [`Pix`] stores its pixels in 32-bit words, `wpl = ceil(w * d / 32)`
//! words per line, in canonical word order: within each word, pixel 0
//! occupies the most significant bit(s), independent of host endianness.
//! The unused low bits that round a row up to a whole word are *pad bits*
//! and never carry pixel content.
//!
//! `Pix` is a shared handle.  `Clone` aliases the underlying buffer and
//! bumps the reference count; dropping the last handle releases the buffer
//! together with any text and colormap.  Use [`Pix::copy`] for an
//! independent duplicate.
//!
//! # Examples
//!
//! ```
//! use bitmorph_types::pix::Pix;
//!
//! # fn main() -> Result<(), bitmorph_types::PixError> {
//! let pix = Pix::create(100, 60, 1)?;
//! assert_eq!(pix.wpl(), 4);
//!
//! let alias = pix.clone();
//! assert_eq!(pix.refcount(), 2);
//! drop(alias);
//!
//! pix.set_pixel(3, 4, 1)?;
//! assert_eq!(pix.get_pixel(3, 4)?, 1);
//! # Ok(())
//! # }
//! ```

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::error::PixError;

mod ops;
mod rasterop;

pub use rasterop::RasterOp;

/// Bit depths a [`Pix`] may carry.
pub const ALLOWED_DEPTHS: [u32; 7] = [1, 2, 4, 8, 16, 24, 32];

/// Masks with the low `n` bits set, indexed by `n` in `0..=32`.
pub(crate) const RMASK32: [u32; 33] = {
	let mut masks = [0u32; 33];
	let mut i = 1;
	while i <= 32 {
		masks[i] = if i == 32 { u32::MAX } else { (1 << i) - 1 };
		i += 1;
	}
	masks
};

/// Provenance tag recording the external format an image was read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
	/// No known provenance
	#[default]
	Unknown,
	/// Windows bitmap
	Bmp,
	/// JFIF / JPEG
	Jfif,
	/// Portable network graphics
	Png,
	/// Tagged image file format
	Tiff,
	/// Portable anymap
	Pnm,
}

/// Color table for images whose pixels index into a palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixColormap {
	depth: u32,
	colors: Vec<(u8, u8, u8)>,
}

impl PixColormap {
	/// Creates an empty colormap for pixels of the given depth.
	pub fn new(depth: u32) -> Result<Self, PixError> {
		if !matches!(depth, 1 | 2 | 4 | 8) {
			return Err(PixError::BadDepth(depth));
		}
		Ok(Self {
			depth,
			colors: Vec::new(),
		})
	}

	/// Returns the pixel depth this colormap serves.
	pub fn depth(&self) -> u32 {
		self.depth
	}

	/// Number of colors currently stored.
	pub fn count(&self) -> usize {
		self.colors.len()
	}

	/// Appends a color, returning its index, or `None` when the table is
	/// full for its depth.
	pub fn add_color(&mut self, r: u8, g: u8, b: u8) -> Option<usize> {
		if self.colors.len() >= 1 << self.depth {
			return None;
		}
		self.colors.push((r, g, b));
		Some(self.colors.len() - 1)
	}

	/// Returns the color at `index`.
	pub fn color(&self, index: usize) -> Option<(u8, u8, u8)> {
		self.colors.get(index).copied()
	}
}

/// Owned state behind a [`Pix`] handle.
#[derive(Debug)]
pub(crate) struct PixData {
	pub(crate) w: u32,
	pub(crate) h: u32,
	pub(crate) d: u32,
	pub(crate) wpl: u32,
	pub(crate) xres: u32,
	pub(crate) yres: u32,
	pub(crate) informat: InputFormat,
	pub(crate) text: Option<String>,
	pub(crate) colormap: Option<PixColormap>,
	pub(crate) data: Vec<u32>,
}

/// Shared handle to a packed raster image.
///
/// Cloning is cheap and aliases the buffer; the image is released when the
/// last handle is dropped.
#[derive(Debug, Clone)]
pub struct Pix {
	inner: Rc<RefCell<PixData>>,
}

impl Pix {
	/// Creates an image with a zeroed pixel buffer.
	///
	/// # Errors
	///
	/// Rejects zero extents and depths outside [`ALLOWED_DEPTHS`].
	pub fn create(width: u32, height: u32, depth: u32) -> Result<Self, PixError> {
		Self::create_no_init(width, height, depth)
	}

	/// Creates an image without guaranteeing buffer contents.
	///
	/// The buffer is zero-filled here as well: safe Rust has no cheap
	/// uninitialized allocation, so this differs from [`Pix::create`] only
	/// in the contract callers may rely on.
	pub fn create_no_init(width: u32, height: u32, depth: u32) -> Result<Self, PixError> {
		if width == 0 || height == 0 {
			return Err(PixError::BadDimensions {
				width,
				height,
			});
		}
		if !ALLOWED_DEPTHS.contains(&depth) {
			return Err(PixError::BadDepth(depth));
		}

		let wpl = (u64::from(width) * u64::from(depth)).div_ceil(32);
		let words = wpl * u64::from(height);
		Ok(Self {
			inner: Rc::new(RefCell::new(PixData {
				w: width,
				h: height,
				d: depth,
				wpl: wpl as u32,
				xres: 0,
				yres: 0,
				informat: InputFormat::Unknown,
				text: None,
				colormap: None,
				data: vec![0; words as usize],
			})),
		})
	}

	/// Creates a zeroed image with the dimensions, depth, resolution,
	/// colormap, text and format tag of `src`.
	pub fn create_template(src: &Pix) -> Result<Self, PixError> {
		Self::create_template_no_init(src)
	}

	/// Like [`Pix::create_template`]; see [`Pix::create_no_init`] for the
	/// initialization caveat.
	pub fn create_template_no_init(src: &Pix) -> Result<Self, PixError> {
		let s = src.inner.borrow();
		let pixd = Self::create_no_init(s.w, s.h, s.d)?;
		{
			let mut d = pixd.inner.borrow_mut();
			d.xres = s.xres;
			d.yres = s.yres;
			d.informat = s.informat;
			d.text = s.text.clone();
			d.colormap = s.colormap.clone();
		}
		Ok(pixd)
	}

	/// Copies `self` into `pixd`, or into a fresh image when `pixd` is
	/// `None`.  Pixels, resolution, text, colormap and format tag are all
	/// copied.
	///
	/// # Errors
	///
	/// When `pixd` is supplied it must match `self` in width, height and
	/// depth.  Passing the same handle for both is a no-op.
	pub fn copy(&self, pixd: Option<Pix>) -> Result<Pix, PixError> {
		let pixd = match pixd {
			Some(pixd) => {
				if Pix::same_handle(&pixd, self) {
					return Ok(pixd);
				}
				if !pixd.sizes_equal(self) {
					return Err(PixError::SizeMismatch);
				}
				pixd
			}
			None => Self::create_template_no_init(self)?,
		};
		{
			let s = self.inner.borrow();
			let mut d = pixd.inner.borrow_mut();
			d.data.copy_from_slice(&s.data);
			d.xres = s.xres;
			d.yres = s.yres;
			d.informat = s.informat;
			d.text = s.text.clone();
			d.colormap = s.colormap.clone();
		}
		Ok(pixd)
	}

	/// Returns whether two handles alias the same image.
	pub fn same_handle(a: &Pix, b: &Pix) -> bool {
		Rc::ptr_eq(&a.inner, &b.inner)
	}

	/// Number of live handles to this image.
	pub fn refcount(&self) -> usize {
		Rc::strong_count(&self.inner)
	}

	/// Width in pixels.
	pub fn width(&self) -> u32 {
		self.inner.borrow().w
	}

	/// Height in pixels.
	pub fn height(&self) -> u32 {
		self.inner.borrow().h
	}

	/// Bits per pixel.
	pub fn depth(&self) -> u32 {
		self.inner.borrow().d
	}

	/// 32-bit words per line.
	pub fn wpl(&self) -> u32 {
		self.inner.borrow().wpl
	}

	/// Width, height and depth in one call.
	pub fn dimensions(&self) -> (u32, u32, u32) {
		let inner = self.inner.borrow();
		(inner.w, inner.h, inner.d)
	}

	/// Returns whether `self` and `other` agree in width, height and depth.
	pub fn sizes_equal(&self, other: &Pix) -> bool {
		if Pix::same_handle(self, other) {
			return true;
		}
		let a = self.inner.borrow();
		let b = other.inner.borrow();
		a.w == b.w && a.h == b.h && a.d == b.d
	}

	/// Horizontal resolution in pixels per inch (0 when unknown).
	pub fn xres(&self) -> u32 {
		self.inner.borrow().xres
	}

	/// Sets the horizontal resolution.
	pub fn set_xres(&self, xres: u32) {
		self.inner.borrow_mut().xres = xres;
	}

	/// Vertical resolution in pixels per inch (0 when unknown).
	pub fn yres(&self) -> u32 {
		self.inner.borrow().yres
	}

	/// Sets the vertical resolution.
	pub fn set_yres(&self, yres: u32) {
		self.inner.borrow_mut().yres = yres;
	}

	/// Input-format provenance tag.
	pub fn input_format(&self) -> InputFormat {
		self.inner.borrow().informat
	}

	/// Sets the input-format provenance tag.
	pub fn set_input_format(&self, informat: InputFormat) {
		self.inner.borrow_mut().informat = informat;
	}

	/// Text annotation, if any.
	pub fn text(&self) -> Option<String> {
		self.inner.borrow().text.clone()
	}

	/// Replaces the text annotation.
	pub fn set_text(&self, text: Option<String>) {
		self.inner.borrow_mut().text = text;
	}

	/// Colormap, if any.
	pub fn colormap(&self) -> Option<PixColormap> {
		self.inner.borrow().colormap.clone()
	}

	/// Replaces the colormap.
	pub fn set_colormap(&self, colormap: Option<PixColormap>) {
		self.inner.borrow_mut().colormap = colormap;
	}

	/// Read access to the raw word buffer.
	///
	/// The borrow is released when the returned guard is dropped.
	pub fn data(&self) -> Ref<'_, [u32]> {
		Ref::map(self.inner.borrow(), |inner| inner.data.as_slice())
	}

	/// Write access to the raw word buffer.
	pub fn data_mut(&self) -> RefMut<'_, [u32]> {
		RefMut::map(self.inner.borrow_mut(), |inner| inner.data.as_mut_slice())
	}
}

impl std::fmt::Display for Pix {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner = self.inner.borrow();
		write!(
			f,
			"Pix: {} x {}, {} bpp, {} wpl, rc {}",
			inner.w,
			inner.h,
			inner.d,
			inner.wpl,
			Rc::strong_count(&self.inner)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_create_word_geometry() {
		// wpl = ceil(w * d / 32), buffer holds exactly wpl * h words
		let cases = [(1, 1, 1, 1), (32, 7, 1, 1), (33, 7, 1, 2), (100, 60, 1, 4), (10, 3, 8, 3), (5, 2, 32, 5)];
		for (w, h, d, wpl) in cases {
			let pix = Pix::create(w, h, d).unwrap();
			assert_eq!(pix.wpl(), wpl, "{w}x{h}x{d}");
			assert_eq!(pix.data().len(), (wpl * h) as usize);
			assert!(pix.data().iter().all(|&word| word == 0));
		}
	}

	#[test]
	fn test_create_rejects_bad_args() {
		assert!(matches!(
			Pix::create(0, 10, 1),
			Err(PixError::BadDimensions { .. })
		));
		assert!(matches!(
			Pix::create(10, 0, 1),
			Err(PixError::BadDimensions { .. })
		));
		assert!(matches!(Pix::create(10, 10, 3), Err(PixError::BadDepth(3))));
		assert!(matches!(Pix::create(10, 10, 64), Err(PixError::BadDepth(64))));
	}

	#[test]
	fn test_clone_refcount_sequence() {
		let pix = Pix::create(8, 8, 1).unwrap();
		assert_eq!(pix.refcount(), 1);
		let alias = pix.clone();
		assert_eq!(pix.refcount(), 2);
		assert!(Pix::same_handle(&pix, &alias));
		drop(alias);
		assert_eq!(pix.refcount(), 1);
	}

	#[test]
	fn test_clone_aliases_pixels() {
		let pix = Pix::create(8, 8, 1).unwrap();
		let alias = pix.clone();
		alias.set_pixel(2, 3, 1).unwrap();
		assert_eq!(pix.get_pixel(2, 3).unwrap(), 1);
	}

	#[test]
	fn test_copy_is_independent() {
		let pix = Pix::create(8, 8, 1).unwrap();
		pix.set_pixel(1, 1, 1).unwrap();
		pix.set_text(Some("glyph".to_string()));

		let copy = pix.copy(None).unwrap();
		assert!(!Pix::same_handle(&pix, &copy));
		assert_eq!(copy.get_pixel(1, 1).unwrap(), 1);
		assert_eq!(copy.text().as_deref(), Some("glyph"));

		copy.set_pixel(5, 5, 1).unwrap();
		assert_eq!(pix.get_pixel(5, 5).unwrap(), 0);
	}

	#[test]
	fn test_copy_into_existing() {
		let src = Pix::create(8, 8, 1).unwrap();
		src.set_pixel(0, 0, 1).unwrap();
		let dst = Pix::create(8, 8, 1).unwrap();
		let dst = src.copy(Some(dst)).unwrap();
		assert_eq!(dst.get_pixel(0, 0).unwrap(), 1);

		let wrong = Pix::create(9, 8, 1).unwrap();
		assert!(matches!(src.copy(Some(wrong)), Err(PixError::SizeMismatch)));
	}

	#[test]
	fn test_copy_same_handle_is_noop() {
		let pix = Pix::create(4, 4, 1).unwrap();
		let out = pix.copy(Some(pix.clone())).unwrap();
		assert!(Pix::same_handle(&pix, &out));
	}

	#[test]
	fn test_create_template_copies_metadata() {
		let src = Pix::create(20, 10, 2).unwrap();
		src.set_xres(300);
		src.set_yres(300);
		src.set_input_format(InputFormat::Png);
		src.set_text(Some("page 1".to_string()));

		let pixd = Pix::create_template(&src).unwrap();
		assert_eq!(pixd.dimensions(), (20, 10, 2));
		assert_eq!(pixd.xres(), 300);
		assert_eq!(pixd.input_format(), InputFormat::Png);
		assert_eq!(pixd.text().as_deref(), Some("page 1"));
		assert!(pixd.data().iter().all(|&word| word == 0));
	}

	#[test]
	fn test_colormap_capacity() {
		let mut cmap = PixColormap::new(2).unwrap();
		for i in 0..4 {
			assert_eq!(cmap.add_color(i, i, i), Some(i as usize));
		}
		assert_eq!(cmap.add_color(9, 9, 9), None);
		assert_eq!(cmap.count(), 4);
		assert_eq!(cmap.color(2), Some((2, 2, 2)));
		assert!(PixColormap::new(16).is_err());
	}
}
