#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `bitmorph-rs` is a binary-image morphology toolkit built around a code
//! generator: structuring elements are compiled ahead of time into dense
//! word-parallel dilation and erosion kernels instead of being interpreted
//! at run time.
//!
//! The workspace splits into three crates, re-exported here:
//!
//! - [`types`]: the packed image buffer ([`Pix`]), structuring elements
//!   ([`Sel`], [`Sela`]) and the raster-op primitive
//! - [`codegen`]: the generator that lowers a [`Sela`] to two Rust
//!   modules of destination-word-accumulation kernels
//! - [`dwa`]: one checked-in generator run over [`Sela::basic`], ready to
//!   call through [`dwa::pix_fmorphop_gen_1`]

pub use bitmorph_dwa as dwa;
pub use bitmorph_gen as codegen;
pub use bitmorph_types as types;

pub use bitmorph_types::prelude::*;
