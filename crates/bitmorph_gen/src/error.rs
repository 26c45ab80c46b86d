//! Error types for code generation.

use thiserror::Error;

/// Errors that can occur while generating morphology translation units
#[derive(Debug, Error)]
pub enum GenError {
	/// The sel collection holds nothing to compile
	#[error("sela holds no structuring elements")]
	EmptySela,

	/// Every compiled sel needs a name for the dispatch table
	#[error("sel {index} has no name")]
	UnnamedSel {
		/// Index of the unnamed sel
		index: usize,
	},

	/// A sel lowered to an empty accumulation
	#[error("sel {index} has no hits within the +/-31 offset range")]
	NoLowerableHits {
		/// Index of the offending sel
		index: usize,
	},

	/// Template text held content before the first region marker
	#[error("template content precedes the first region marker")]
	LeadingContent,

	/// Two template regions share a name
	#[error("duplicate template region {0:?}")]
	DuplicateRegion(String),

	/// A referenced template region does not exist
	#[error("template region {0:?} is missing")]
	MissingRegion(String),

	/// Output file could not be written
	#[error(transparent)]
	Io(#[from] std::io::Error),
}
