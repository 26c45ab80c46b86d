//! Lowering of structuring elements to destination-word-accumulation code.
//!
//! Each hit of a sel becomes one aligned-read expression over the bordered
//! source; the expressions for all hits are OR-combined for dilation and
//! AND-combined for erosion into a single statement that assigns one
//! destination word.  A horizontal offset is realized as an unaligned
//! 32-bit window glued from two aligned loads (the barrel shift); a
//! vertical offset selects a row through a precomputed `wplsN` stride.

use bitmorph_types::sel::Sel;
use log::warn;

/// Largest sub-word offset a barrel shift can express.
pub(crate) const MAX_SHIFT: i32 = 31;

/// Stride identifier for a vertical offset of `absy` rows.
fn wpls_name(absy: u32) -> String {
	if absy == 1 {
		"wpls".to_string()
	} else {
		format!("wpls{absy}")
	}
}

/// Builds the aligned-read expression for a source window displaced by
/// `(delx, dely)` from the current word, or `None` when either offset is
/// outside the expressible range.
pub(crate) fn barrelshift_expr(delx: i32, dely: i32) -> Option<String> {
	if delx.abs() > MAX_SHIFT || dely.abs() > MAX_SHIFT {
		warn!("hit offset ({delx}, {dely}) exceeds +/-{MAX_SHIFT}; skipping");
		return None;
	}
	let absx = delx.unsigned_abs();
	let absy = dely.unsigned_abs();

	// Row selector relative to `sptr`, empty for the current row.
	let row = match dely.signum() {
		-1 => format!(" - {}", wpls_name(absy)),
		1 => format!(" + {}", wpls_name(absy)),
		_ => String::new(),
	};

	let expr = match delx.signum() {
		0 => format!("(datas[sptr{row}])"),
		-1 => format!(
			"((datas[sptr{row}] >> {absx}) | (datas[sptr{row} - 1] << {rest}))",
			rest = 32 - absx
		),
		_ => format!(
			"((datas[sptr{row}] << {absx}) | (datas[sptr{row} + 1] >> {rest}))",
			rest = 32 - absx
		),
	};
	Some(expr)
}

/// Displacements `(delx, dely)` of the hits that lower, in row-major sel
/// order.  Even kernel indices dilate, odd erode; the sign convention
/// differs because dilation reads through the reflected sel.
fn lowered_offsets(sel: &Sel, index: usize) -> Vec<(i32, i32)> {
	let (cx, cy) = sel.origin();
	let (cx, cy) = (cx as i32, cy as i32);
	sel.hits()
		.map(|(x, y)| {
			if index % 2 == 0 {
				(cx - x as i32, cy - y as i32)
			} else {
				(x as i32 - cx, y as i32 - cy)
			}
		})
		.collect()
}

/// Emits the `let wplsN = N * wpls;` stride definitions a kernel needs:
/// one per row distance in `2..=ymax` over the hits that actually lower.
/// (A `let` introduces each identifier exactly once, so no separate
/// declaration pass is needed.)
pub(crate) fn make_wpls_code(sel: &Sel) -> String {
	let ymax = lowered_offsets(sel, 0)
		.iter()
		.filter(|(delx, dely)| delx.abs() <= MAX_SHIFT && dely.abs() <= MAX_SHIFT)
		.map(|(_, dely)| dely.unsigned_abs())
		.max()
		.unwrap_or(0);

	let mut out = String::new();
	for n in 2..=ymax {
		out.push_str(&format!("\tlet wpls{n} = {n} * wpls;\n"));
	}
	out
}

/// Emits the single accumulation statement of kernel `index` for `sel`,
/// or `None` when no hit lowers.
///
/// With one expression the statement fits a line; with several, the
/// combiner (`|` for dilation, `&` for erosion) trails every line but the
/// last.
pub(crate) fn make_inner_loop_code(sel: &Sel, index: usize) -> Option<String> {
	let combiner = if index % 2 == 0 { "|" } else { "&" };
	let exprs: Vec<String> = lowered_offsets(sel, index)
		.into_iter()
		.filter_map(|(delx, dely)| barrelshift_expr(delx, dely))
		.collect();
	if exprs.is_empty() {
		return None;
	}

	let count = exprs.len();
	let mut out = String::new();
	for (nfound, expr) in exprs.iter().enumerate() {
		if count == 1 {
			// Strip the grouping parentheses: the expression stands alone.
			out.push_str(&format!(
				"\t\t\tdatad[dptr] = {};\n",
				&expr[1..expr.len() - 1]
			));
		} else if nfound == 0 {
			out.push_str(&format!("\t\t\tdatad[dptr] = {expr} {combiner}\n"));
		} else if nfound < count - 1 {
			out.push_str(&format!("\t\t\t\t{expr} {combiner}\n"));
		} else {
			out.push_str(&format!("\t\t\t\t{expr};\n"));
		}
	}
	Some(out)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_center_read() {
		assert_eq!(barrelshift_expr(0, 0).unwrap(), "(datas[sptr])");
	}

	#[test]
	fn test_vertical_reads() {
		assert_eq!(barrelshift_expr(0, -1).unwrap(), "(datas[sptr - wpls])");
		assert_eq!(barrelshift_expr(0, 1).unwrap(), "(datas[sptr + wpls])");
		assert_eq!(barrelshift_expr(0, -7).unwrap(), "(datas[sptr - wpls7])");
		assert_eq!(barrelshift_expr(0, 31).unwrap(), "(datas[sptr + wpls31])");
	}

	#[test]
	fn test_horizontal_barrel_shifts() {
		assert_eq!(
			barrelshift_expr(-3, 0).unwrap(),
			"((datas[sptr] >> 3) | (datas[sptr - 1] << 29))"
		);
		assert_eq!(
			barrelshift_expr(3, 0).unwrap(),
			"((datas[sptr] << 3) | (datas[sptr + 1] >> 29))"
		);
		assert_eq!(
			barrelshift_expr(31, 0).unwrap(),
			"((datas[sptr] << 31) | (datas[sptr + 1] >> 1))"
		);
	}

	#[test]
	fn test_diagonal_reads() {
		assert_eq!(
			barrelshift_expr(-2, -4).unwrap(),
			"((datas[sptr - wpls4] >> 2) | (datas[sptr - wpls4 - 1] << 30))"
		);
		assert_eq!(
			barrelshift_expr(5, 1).unwrap(),
			"((datas[sptr + wpls] << 5) | (datas[sptr + wpls + 1] >> 27))"
		);
		assert_eq!(
			barrelshift_expr(1, -1).unwrap(),
			"((datas[sptr - wpls] << 1) | (datas[sptr - wpls + 1] >> 31))"
		);
	}

	#[test]
	fn test_out_of_range_offsets_are_skipped() {
		assert!(barrelshift_expr(32, 0).is_none());
		assert!(barrelshift_expr(0, -32).is_none());
		assert!(barrelshift_expr(-40, 12).is_none());
	}

	#[test]
	fn test_wpls_code_bounds() {
		// ymax 1: vertical strides all use the bare `wpls`
		let sel = Sel::from_pattern("x\nX\nx", None).unwrap();
		assert_eq!(make_wpls_code(&sel), "");

		// ymax 2
		let sel = Sel::from_pattern("x\nx\nX\nx\nx", None).unwrap();
		assert_eq!(make_wpls_code(&sel), "\tlet wpls2 = 2 * wpls;\n");

		// ymax 4, origin at the top
		let sel = Sel::from_pattern("X\nx\nx\nx\nx", None).unwrap();
		assert_eq!(
			make_wpls_code(&sel),
			"\tlet wpls2 = 2 * wpls;\n\tlet wpls3 = 3 * wpls;\n\tlet wpls4 = 4 * wpls;\n"
		);
	}

	#[test]
	fn test_single_hit_statement() {
		let sel = Sel::from_pattern("X", None).unwrap();
		assert_eq!(
			make_inner_loop_code(&sel, 0).unwrap(),
			"\t\t\tdatad[dptr] = datas[sptr];\n"
		);
		assert_eq!(
			make_inner_loop_code(&sel, 1).unwrap(),
			"\t\t\tdatad[dptr] = datas[sptr];\n"
		);
	}

	#[test]
	fn test_single_shifted_hit_strips_grouping() {
		let sel = Sel::from_pattern(".O\nx.", None).unwrap();
		// only hit is at (0, 1): dilation reads (delx, dely) = (1, -1)
		let code = make_inner_loop_code(&sel, 0).unwrap();
		assert_eq!(
			code,
			"\t\t\tdatad[dptr] = (datas[sptr - wpls] << 1) | (datas[sptr - wpls + 1] >> 31);\n"
		);
	}

	#[test]
	fn test_multi_hit_dilation_statement() {
		let sel = Sel::from_pattern("Xx", None).unwrap();
		let code = make_inner_loop_code(&sel, 0).unwrap();
		let expected = "\t\t\tdatad[dptr] = (datas[sptr]) |\n\
			\t\t\t\t((datas[sptr] >> 1) | (datas[sptr - 1] << 31));\n";
		assert_eq!(code, expected);
	}

	#[test]
	fn test_multi_hit_erosion_statement() {
		let sel = Sel::from_pattern("x\nX\nx", None).unwrap();
		let code = make_inner_loop_code(&sel, 1).unwrap();
		let expected = "\t\t\tdatad[dptr] = (datas[sptr - wpls]) &\n\
			\t\t\t\t(datas[sptr]) &\n\
			\t\t\t\t(datas[sptr + wpls]);\n";
		assert_eq!(code, expected);
	}

	#[test]
	fn test_unlowerable_sel() {
		let mut sel = Sel::new(40, 1, None).unwrap();
		sel.set_element(39, 0, bitmorph_types::sel::SelValue::Hit).unwrap();
		// origin at (0, 0): the only hit sits 39 columns out
		assert!(make_inner_loop_code(&sel, 0).is_none());
		assert_eq!(make_wpls_code(&sel), "");
	}
}
