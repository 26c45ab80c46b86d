//! Generation of the two morphology translation units.
//!
//! One invocation compiles every sel of a [`Sela`] into a pair of Rust
//! modules: a high-level dispatcher that resolves sel names and prepares
//! bordered sources, and a low-level module holding one dilation and one
//! erosion kernel per sel.  Both are assembled by splicing generated
//! fragments between the fixed regions of the embedded templates.
//!
//! The `fileindex` argument parameterizes every public name and both file
//! names, so the output of several runs can live in one program.

use std::fs;
use std::path::Path;

use bitmorph_types::sel::Sela;

use crate::dwa::{make_inner_loop_code, make_wpls_code};
use crate::error::GenError;
use crate::template::Template;

pub(crate) static DISPATCH_TEMPLATE: &str = include_str!("templates/fmorphgen.tmpl");
pub(crate) static KERNELS_TEMPLATE: &str = include_str!("templates/fmorphgenlow.tmpl");

const OUT_ROOT: &str = "fmorphgen";
const OUT_ROOT_LOW: &str = "fmorphgenlow";

/// Writes `fmorphgen_{index}.rs` and `fmorphgenlow_{index}.rs` to the
/// current directory, overwriting existing files.
///
/// A negative `fileindex` is coerced to 0.
///
/// # Errors
///
/// Fails on an empty or unnamed sela, a sel with no expressible hits, a
/// malformed template, or an output write failure.  Files already written
/// when a later step fails are left behind.
pub fn fmorphautogen(sela: &Sela, fileindex: i32) -> Result<(), GenError> {
	fmorphautogen_in(sela, fileindex, Path::new("."))
}

/// Like [`fmorphautogen`], writing into `dir` instead of the current
/// directory.
pub fn fmorphautogen_in(sela: &Sela, fileindex: i32, dir: &Path) -> Result<(), GenError> {
	let fileindex = fileindex.max(0);
	let dispatch = build_dispatch_module(sela, fileindex)?;
	let kernels = build_kernels_module(sela, fileindex)?;
	fs::write(dir.join(format!("{OUT_ROOT}_{fileindex}.rs")), dispatch)?;
	fs::write(dir.join(format!("{OUT_ROOT_LOW}_{fileindex}.rs")), kernels)?;
	Ok(())
}

/// Builds the dispatcher translation unit as a string.
///
/// Layout: header; generated import of the kernels module; border
/// constant; generated `NUM_SELS_GENERATED` and `SEL_NAMES` table; entry
/// doc; generated signature; entry body with one generated low-level call
/// for the caller-supplied destination and one for the fresh destination.
pub fn build_dispatch_module(sela: &Sela, fileindex: i32) -> Result<String, GenError> {
	let fileindex = fileindex.max(0);
	let names = sel_names(sela)?;
	let template = Template::parse(DISPATCH_TEMPLATE)?;

	let mut out = String::new();
	out.push_str(template.region("header")?);
	out.push_str(&format!(
		"use crate::{OUT_ROOT_LOW}_{fileindex}::fmorphopgen_low_{fileindex};\n"
	));
	out.push_str(template.region("prelude")?);

	out.push_str("/// Number of structuring elements compiled into this unit.\n");
	out.push_str(&format!(
		"pub const NUM_SELS_GENERATED: usize = {};\n\n",
		names.len()
	));
	out.push_str("/// Names of the compiled structuring elements, in kernel-pair order.\n");
	out.push_str("pub static SEL_NAMES: [&str; NUM_SELS_GENERATED] = [\n");
	for name in &names {
		out.push_str(&format!("\t\"{name}\",\n"));
	}
	out.push_str("];\n");

	out.push_str(template.region("entry_doc")?);
	out.push_str(&format!("pub fn pix_fmorphop_gen_{fileindex}(\n"));
	out.push_str(template.region("entry_open")?);
	let call = format!(
		"\t\t\tfmorphopgen_low_{fileindex}(&mut pixd.data_mut(), w, h, wpld, &datat, wpls, index);\n"
	);
	out.push_str(&call);
	out.push_str(template.region("entry_mid")?);
	out.push_str(&call);
	out.push_str(template.region("entry_close")?);
	Ok(out)
}

/// Builds the kernels translation unit as a string.
///
/// Layout: header; dispatcher doc, generated signature, parameter block
/// and one generated match arm per kernel; then for every sel a dilation
/// and an erosion kernel, each spliced from the generated `fn` line, the
/// fixed parameter block, the generated row-stride definitions, the fixed
/// loop opening, the generated accumulation statement and the fixed loop
/// closing.
pub fn build_kernels_module(sela: &Sela, fileindex: i32) -> Result<String, GenError> {
	let fileindex = fileindex.max(0);
	let names = sel_names(sela)?;
	let template = Template::parse(KERNELS_TEMPLATE)?;

	let kernel_names: Vec<String> = (0..names.len())
		.flat_map(|i| {
			[
				format!("fdilate_{fileindex}_{i}"),
				format!("ferode_{fileindex}_{i}"),
			]
		})
		.collect();

	let mut out = String::new();
	out.push_str(template.region("header")?);
	out.push_str(template.region("dispatch_doc")?);
	out.push_str(&format!("pub(crate) fn fmorphopgen_low_{fileindex}(\n"));
	out.push_str(template.region("dispatch_params")?);
	for (index, name) in kernel_names.iter().enumerate() {
		out.push_str(&format!(
			"\t\t{index} => {name}(datad, w, h, wpld, datas, wpls),\n"
		));
	}
	out.push_str(template.region("dispatch_close")?);
	out.push_str(template.region("kernel_intro")?);

	let sels: Vec<_> = sela.iter().collect();
	for (index, name) in kernel_names.iter().enumerate() {
		let sel = sels[index / 2];
		out.push('\n');
		out.push_str(&format!("fn {name}(\n"));
		out.push_str(template.region("kernel_params")?);
		out.push_str(&make_wpls_code(sel));
		out.push_str(template.region("loop_open")?);
		let statement =
			make_inner_loop_code(sel, index).ok_or(GenError::NoLowerableHits {
				index: index / 2,
			})?;
		out.push_str(&statement);
		out.push_str(template.region("loop_close")?);
	}
	Ok(out)
}

/// Collects the sel names in index order, validating that generation has
/// something to compile and that every sel can be dispatched on.
fn sel_names(sela: &Sela) -> Result<Vec<String>, GenError> {
	if sela.count() == 0 {
		return Err(GenError::EmptySela);
	}
	sela.iter()
		.enumerate()
		.map(|(index, sel)| {
			sel.name().map(str::to_string).ok_or(GenError::UnnamedSel {
				index,
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use bitmorph_types::sel::Sel;

	use super::*;

	fn tiny_sela() -> Sela {
		let mut sela = Sela::new();
		sela.push(Sel::from_pattern("Xx", Some("pair_h")).unwrap());
		sela.push(Sel::from_pattern("x\nX", Some("pair_v")).unwrap());
		sela
	}

	#[test]
	fn test_dispatch_module_contents() {
		let text = build_dispatch_module(&tiny_sela(), 3).unwrap();
		assert!(text.contains("pub const NUM_SELS_GENERATED: usize = 2;"));
		assert!(text.contains("\t\"pair_h\",\n\t\"pair_v\",\n];"));
		assert!(text.contains("pub fn pix_fmorphop_gen_3(\n"));
		assert!(text.contains("use crate::fmorphgenlow_3::fmorphopgen_low_3;"));
		// one call per destination branch
		let calls = text.matches("fmorphopgen_low_3(&mut pixd.data_mut()").count();
		assert_eq!(calls, 2);
	}

	#[test]
	fn test_kernels_module_contents() {
		let text = build_kernels_module(&tiny_sela(), 3).unwrap();
		assert!(text.contains("pub(crate) fn fmorphopgen_low_3(\n"));
		for name in ["fdilate_3_0", "ferode_3_0", "fdilate_3_1", "ferode_3_1"] {
			assert!(text.contains(&format!("fn {name}(\n")), "{name}");
		}
		assert!(text.contains("\t\t0 => fdilate_3_0(datad, w, h, wpld, datas, wpls),\n"));
		assert!(text.contains("\t\t3 => ferode_3_1(datad, w, h, wpld, datas, wpls),\n"));
		// vertical pair sel needs no extra strides beyond the bare wpls
		assert!(!text.contains("wpls2"));
	}

	#[test]
	fn test_negative_fileindex_coerced() {
		let a = build_dispatch_module(&tiny_sela(), -5).unwrap();
		let b = build_dispatch_module(&tiny_sela(), 0).unwrap();
		assert_eq!(a, b);
		assert!(a.contains("pix_fmorphop_gen_0"));
	}

	#[test]
	fn test_generation_is_deterministic() {
		let sela = Sela::basic().unwrap();
		assert_eq!(
			build_dispatch_module(&sela, 7).unwrap(),
			build_dispatch_module(&sela, 7).unwrap()
		);
		assert_eq!(
			build_kernels_module(&sela, 7).unwrap(),
			build_kernels_module(&sela, 7).unwrap()
		);
	}

	#[test]
	fn test_empty_sela_rejected() {
		let sela = Sela::new();
		assert!(matches!(
			build_dispatch_module(&sela, 1),
			Err(GenError::EmptySela)
		));
	}

	#[test]
	fn test_unnamed_sel_rejected() {
		let mut sela = Sela::new();
		sela.push(Sel::from_pattern("X", None).unwrap());
		assert!(matches!(
			build_kernels_module(&sela, 1),
			Err(GenError::UnnamedSel { index: 0 })
		));
	}

	#[test]
	fn test_unlowerable_sel_rejected() {
		let mut sela = Sela::new();
		let mut sel = Sel::new(40, 1, Some("too_wide")).unwrap();
		sel.set_element(39, 0, bitmorph_types::sel::SelValue::Hit).unwrap();
		sela.push(sel);
		assert!(matches!(
			build_kernels_module(&sela, 1),
			Err(GenError::NoLowerableHits { index: 0 })
		));
	}

	#[test]
	fn test_file_output() {
		let dir = std::env::temp_dir().join(format!("bitmorph_gen_test_{}", std::process::id()));
		fs::create_dir_all(&dir).unwrap();
		fmorphautogen_in(&tiny_sela(), 9, &dir).unwrap();

		let dispatch = fs::read_to_string(dir.join("fmorphgen_9.rs")).unwrap();
		assert_eq!(dispatch, build_dispatch_module(&tiny_sela(), 9).unwrap());
		let kernels = fs::read_to_string(dir.join("fmorphgenlow_9.rs")).unwrap();
		assert_eq!(kernels, build_kernels_module(&tiny_sela(), 9).unwrap());

		// a second run overwrites in place
		fmorphautogen_in(&tiny_sela(), 9, &dir).unwrap();
		let again = fs::read_to_string(dir.join("fmorphgen_9.rs")).unwrap();
		assert_eq!(again, dispatch);

		fs::remove_dir_all(&dir).ok();
	}
}
