//! Code generator for word-parallel binary morphology.
//!
//! Given a collection of structuring elements
//! ([`Sela`](bitmorph_types::sel::Sela)), one call to [`fmorphautogen`]
//! writes two Rust modules implementing dilation and erosion by every sel
//! in the collection, using destination word accumulation: the inner loop
//! produces one 32-bit destination word per iteration by OR-ing (dilation)
//! or AND-ing (erosion) barrel-shifted aligned reads of the source.  The
//! sel is baked into the generated kernel; nothing is interpreted at run
//! time.
//!
//! # Examples
//!
//! ```no_run
//! use bitmorph_gen::fmorphautogen;
//! use bitmorph_types::sel::Sela;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sela = Sela::basic()?;
//! // writes fmorphgen_1.rs and fmorphgenlow_1.rs to the current directory
//! fmorphautogen(&sela, 1)?;
//! # Ok(())
//! # }
//! ```

mod dwa;
mod error;
mod generate;
mod template;

pub use error::GenError;
pub use generate::{build_dispatch_module, build_kernels_module, fmorphautogen, fmorphautogen_in};
pub use template::Template;
