//! Structuring elements for binary morphology.
//!
//! A [`Sel`] is a small 2-D template of [`SelValue`] cells with an origin
//! inside the cell matrix.  Only hits participate in word-accumulation
//! lowering; misses exist for hit-miss transforms and are preserved by the
//! model.
//!
//! # Examples
//!
//! ```
//! use bitmorph_types::sel::Sel;
//!
//! # fn main() -> Result<(), bitmorph_types::SelError> {
//! // A 3 x 3 brick with the origin marked at its centre.
//! let sel = Sel::from_pattern("xxx\nxXx\nxxx", Some("sel_3x3"))?;
//! assert_eq!(sel.extents(), (3, 3));
//! assert_eq!(sel.origin(), (1, 1));
//! assert_eq!(sel.hits().count(), 9);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SelError;

mod sela;

pub use sela::Sela;

/// One cell of a structuring element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelValue {
	/// Cell does not constrain the image
	#[default]
	DontCare,
	/// Cell must contain a foreground pixel
	Hit,
	/// Cell must contain a background pixel
	Miss,
}

/// A structuring element: cell matrix plus origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sel {
	sx: u32,
	sy: u32,
	cx: u32,
	cy: u32,
	data: Vec<SelValue>,
	name: Option<String>,
}

impl Sel {
	/// Creates a sel of the given extents with every cell
	/// [`SelValue::DontCare`] and the origin at `(0, 0)`.
	pub fn new(sx: u32, sy: u32, name: Option<&str>) -> Result<Self, SelError> {
		if sx == 0 || sy == 0 {
			return Err(SelError::BadDimensions {
				sx,
				sy,
			});
		}
		Ok(Self {
			sx,
			sy,
			cx: 0,
			cy: 0,
			data: vec![SelValue::DontCare; (sx * sy) as usize],
			name: name.map(str::to_string),
		})
	}

	/// Creates a solid rectangle of hits with the origin at `(cx, cy)`.
	pub fn new_brick(sx: u32, sy: u32, cx: u32, cy: u32, name: Option<&str>) -> Result<Self, SelError> {
		let mut sel = Self::new(sx, sy, name)?;
		sel.set_origin(cx, cy)?;
		sel.data.fill(SelValue::Hit);
		Ok(sel)
	}

	/// Builds a sel from rows of pattern characters.
	///
	/// `x` is a hit, `o` a miss and `.` a don't-care; uppercase `X` or `O`
	/// additionally marks the origin, which must appear exactly once.
	/// Rows are separated by newlines and must all have the same width.
	pub fn from_pattern(pattern: &str, name: Option<&str>) -> Result<Self, SelError> {
		let rows: Vec<&str> = pattern.lines().collect();
		let sy = rows.len() as u32;
		let sx = rows.first().map_or(0, |row| row.chars().count()) as u32;
		let mut sel = Self::new(sx, sy, name)?;

		let mut origins = 0usize;
		for (i, row) in rows.iter().enumerate() {
			let width = row.chars().count();
			if width != sx as usize {
				return Err(SelError::RaggedPattern {
					row: i,
					got: width,
					expected: sx as usize,
				});
			}
			for (j, ch) in row.chars().enumerate() {
				let (x, y) = (j as u32, i as u32);
				let value = match ch {
					'x' => SelValue::Hit,
					'o' => SelValue::Miss,
					'.' => SelValue::DontCare,
					'X' | 'O' => {
						origins += 1;
						sel.cx = x;
						sel.cy = y;
						if ch == 'X' {
							SelValue::Hit
						} else {
							SelValue::Miss
						}
					}
					other => return Err(SelError::BadPatternChar(other)),
				};
				sel.set_element(x, y, value)?;
			}
		}
		if origins != 1 {
			return Err(SelError::BadOriginCount(origins));
		}
		Ok(sel)
	}

	/// Horizontal and vertical extents `(sx, sy)`.
	pub fn extents(&self) -> (u32, u32) {
		(self.sx, self.sy)
	}

	/// Origin `(cx, cy)`.
	pub fn origin(&self) -> (u32, u32) {
		(self.cx, self.cy)
	}

	/// Moves the origin.
	///
	/// # Errors
	///
	/// The origin must lie inside the cell matrix.
	pub fn set_origin(&mut self, cx: u32, cy: u32) -> Result<(), SelError> {
		if cx >= self.sx || cy >= self.sy {
			return Err(SelError::BadOrigin {
				cx,
				cy,
				sx: self.sx,
				sy: self.sy,
			});
		}
		self.cx = cx;
		self.cy = cy;
		Ok(())
	}

	/// Name of the sel, if any.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Renames the sel.
	pub fn set_name(&mut self, name: Option<&str>) {
		self.name = name.map(str::to_string);
	}

	/// Reads the cell at `(x, y)`.
	pub fn element(&self, x: u32, y: u32) -> Result<SelValue, SelError> {
		self.index(x, y).map(|index| self.data[index])
	}

	/// Writes the cell at `(x, y)`.
	pub fn set_element(&mut self, x: u32, y: u32, value: SelValue) -> Result<(), SelError> {
		let index = self.index(x, y)?;
		self.data[index] = value;
		Ok(())
	}

	/// Iterates the hit cells as `(x, y)` pairs in row-major order.
	pub fn hits(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
		self.data.iter().enumerate().filter_map(|(index, &value)| {
			(value == SelValue::Hit)
				.then(|| (index as u32 % self.sx, index as u32 / self.sx))
		})
	}

	fn index(&self, x: u32, y: u32) -> Result<usize, SelError> {
		if x >= self.sx || y >= self.sy {
			return Err(SelError::CellOutOfBounds {
				x,
				y,
				sx: self.sx,
				sy: self.sy,
			});
		}
		Ok((y * self.sx + x) as usize)
	}
}

impl std::fmt::Display for Sel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(
			f,
			"Sel {}: {} x {}, origin ({}, {})",
			self.name.as_deref().unwrap_or("<unnamed>"),
			self.sx,
			self.sy,
			self.cx,
			self.cy
		)?;
		for y in 0..self.sy {
			for x in 0..self.sx {
				let ch = match self.data[(y * self.sx + x) as usize] {
					SelValue::Hit => 'x',
					SelValue::Miss => 'o',
					SelValue::DontCare => '.',
				};
				let ch = if (x, y) == (self.cx, self.cy) {
					ch.to_ascii_uppercase()
				} else {
					ch
				};
				write!(f, "{ch}")?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}
