//! Core data types for the `bitmorph` workspace.
//!
//! # Components
//!
//! - [`pix`]: packed raster image buffer ([`pix::Pix`]) with shared-handle
//!   aliasing, pad-bit and border management, endian conversion and a
//!   generic raster op
//! - [`sel`]: structuring elements ([`sel::Sel`]) and ordered collections
//!   of them ([`sel::Sela`])
//! - [`morph`]: the dilation/erosion selector consumed by generated code
//!
//! # Examples
//!
//! ```
//! use bitmorph_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pix = Pix::create(64, 64, 1)?;
//! pix.set_pixel(10, 10, 1)?;
//!
//! let sela = Sela::basic()?;
//! let (index, sel) = sela.find_by_name("sel_3x3").expect("basic set has it");
//! assert_eq!(index, 4);
//! assert_eq!(sel.hits().count(), 9);
//! # Ok(())
//! # }
//! ```

mod error;

pub mod morph;
pub mod pix;
pub mod prelude;
pub mod sel;

pub use error::{PixError, SelError};

// Re-export the main types at the crate root for convenience
pub use morph::MorphOp;
pub use pix::{InputFormat, Pix, PixColormap, RasterOp};
pub use sel::{Sel, SelValue, Sela};
