//! Ordered collections of structuring elements.

use serde::{Deserialize, Serialize};

use super::Sel;
use crate::error::SelError;

/// An append-only, ordered collection of [`Sel`]s.
///
/// The position of a sel is its identity for code generation: sel `i`
/// owns generated kernels `2 * i` (dilation) and `2 * i + 1` (erosion),
/// so indices stay stable once assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sela {
	sels: Vec<Sel>,
}

impl Sela {
	/// Creates an empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of sels held.
	pub fn count(&self) -> usize {
		self.sels.len()
	}

	/// Appends a sel, returning its index.
	pub fn push(&mut self, sel: Sel) -> usize {
		self.sels.push(sel);
		self.sels.len() - 1
	}

	/// Returns the sel at `index`.
	pub fn get(&self, index: usize) -> Option<&Sel> {
		self.sels.get(index)
	}

	/// Finds a sel by name with a case-sensitive linear scan, returning
	/// its index and the sel.
	pub fn find_by_name(&self, name: &str) -> Option<(usize, &Sel)> {
		self.sels
			.iter()
			.enumerate()
			.find(|(_, sel)| sel.name() == Some(name))
	}

	/// Iterates the sels in index order.
	pub fn iter(&self) -> std::slice::Iter<'_, Sel> {
		self.sels.iter()
	}

	/// The basic sel set used by the checked-in generation run: an
	/// identity sel, horizontal and vertical lines, and two 3 x 3 bricks
	/// differing in origin placement.
	pub fn basic() -> Result<Self, SelError> {
		let mut sela = Self::new();
		sela.push(Sel::from_pattern("X", Some("sel_1"))?);
		sela.push(Sel::from_pattern("Xx", Some("sel_2h"))?);
		sela.push(Sel::from_pattern("xxXxx", Some("sel_5h"))?);
		sela.push(Sel::from_pattern("x\nx\nX\nx\nx", Some("sel_5v"))?);
		sela.push(Sel::from_pattern("xxx\nxXx\nxxx", Some("sel_3x3"))?);
		sela.push(Sel::from_pattern("Xxx\nxxx\nxxx", Some("sel_ul3"))?);
		Ok(sela)
	}
}

impl<'a> IntoIterator for &'a Sela {
	type Item = &'a Sel;
	type IntoIter = std::slice::Iter<'a, Sel>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
