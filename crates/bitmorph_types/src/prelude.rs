//! Prelude module for `bitmorph_types`.
//!
//! `use bitmorph_types::prelude::*;` to import the commonly used types.
//!
//! # Examples
//!
//! ```
//! use bitmorph_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pix = Pix::create(32, 32, 1)?;
//! pix.set_all()?;
//!
//! let sel = Sel::new_brick(3, 3, 1, 1, Some("brick"))?;
//! assert_eq!(sel.hits().count(), 9);
//! # Ok(())
//! # }
//! ```

pub use crate::error::{PixError, SelError};
pub use crate::morph::MorphOp;
pub use crate::pix::{InputFormat, Pix, PixColormap, RasterOp};
pub use crate::sel::{Sel, SelValue, Sela};
