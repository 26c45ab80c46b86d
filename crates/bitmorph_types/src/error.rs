//! Error types for image buffers and structuring elements.

use thiserror::Error;

/// Errors that can occur when creating or manipulating a [`crate::pix::Pix`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PixError {
	/// Width or height is zero
	#[error("invalid dimensions: {width} x {height}")]
	BadDimensions {
		/// Requested width in pixels
		width: u32,
		/// Requested height in pixels
		height: u32,
	},

	/// Depth is not one of the packed depths the buffer supports
	#[error("unsupported depth: {0} bpp")]
	BadDepth(u32),

	/// Pixel coordinate outside the image
	#[error("pixel ({x}, {y}) outside {width} x {height} image")]
	OutOfBounds {
		/// Requested x coordinate
		x: u32,
		/// Requested y coordinate
		y: u32,
		/// Image width in pixels
		width: u32,
		/// Image height in pixels
		height: u32,
	},

	/// Two images were required to agree in width, height and depth
	#[error("images differ in size or depth")]
	SizeMismatch,

	/// Row band does not intersect the image
	#[error("band starting at row {by} outside image of height {height}")]
	BandOutOfRange {
		/// First row of the band
		by: i32,
		/// Image height in pixels
		height: u32,
	},

	/// Border removal would leave no pixels
	#[error("border of {npix} pixels leaves no {axis} in {size}-pixel image")]
	BorderTooLarge {
		/// Pixels removed from each side
		npix: u32,
		/// Axis that vanished ("width" or "height")
		axis: &'static str,
		/// Image extent along that axis
		size: u32,
	},

	/// Operation restricted to a subset of raster ops was given another
	#[error("raster op {0:?} not allowed here")]
	BadRasterOp(crate::pix::RasterOp),

	/// A source image was required but not supplied
	#[error("raster op {0:?} requires a source image")]
	MissingSource(crate::pix::RasterOp),

	/// Structuring-element name not present in a compiled dispatch table
	#[error("unknown structuring element name: {0}")]
	UnknownSelName(String),
}

/// Errors that can occur when constructing a [`crate::sel::Sel`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelError {
	/// Extents must both be at least one
	#[error("invalid sel dimensions: {sx} x {sy}")]
	BadDimensions {
		/// Horizontal extent
		sx: u32,
		/// Vertical extent
		sy: u32,
	},

	/// Origin must lie inside the cell matrix
	#[error("origin ({cx}, {cy}) outside {sx} x {sy} sel")]
	BadOrigin {
		/// Origin x
		cx: u32,
		/// Origin y
		cy: u32,
		/// Horizontal extent
		sx: u32,
		/// Vertical extent
		sy: u32,
	},

	/// Cell coordinate outside the cell matrix
	#[error("cell ({x}, {y}) outside {sx} x {sy} sel")]
	CellOutOfBounds {
		/// Cell x
		x: u32,
		/// Cell y
		y: u32,
		/// Horizontal extent
		sx: u32,
		/// Vertical extent
		sy: u32,
	},

	/// Pattern rows must all have the same width
	#[error("pattern row {row} has width {got}, expected {expected}")]
	RaggedPattern {
		/// Offending row index
		row: usize,
		/// Width of that row
		got: usize,
		/// Width of the first row
		expected: usize,
	},

	/// Unrecognized character in a pattern string
	#[error("unrecognized pattern character {0:?}")]
	BadPatternChar(char),

	/// Pattern must mark the origin exactly once
	#[error("pattern marks {0} origins, expected exactly one")]
	BadOriginCount(usize),
}
