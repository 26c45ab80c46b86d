//! Thresholds an image to 1 bpp, runs a compiled morphology kernel over
//! it, and writes the result as a PNG (black foreground on white).

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use image::GrayImage;

use bitmorph_dwa::{SEL_NAMES, pix_fmorphop_gen_1};
use bitmorph_types::morph::MorphOp;
use bitmorph_types::pix::Pix;

#[derive(Clone, Copy, ValueEnum)]
enum Op {
	Dilate,
	Erode,
}

#[derive(Parser)]
#[command(about = "Apply a compiled dilation or erosion to an image")]
struct Args {
	/// Input image, any format the image crate reads
	input: PathBuf,

	/// Output PNG
	output: PathBuf,

	/// Structuring element name
	#[arg(long, default_value = "sel_3x3")]
	sel: String,

	/// Operation to apply
	#[arg(long, value_enum, default_value = "dilate")]
	op: Op,

	/// Gray level below which a pixel counts as foreground
	#[arg(long, default_value_t = 128)]
	threshold: u8,
}

fn main() -> anyhow::Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let args = Args::parse();
	let gray = image::open(&args.input)
		.with_context(|| format!("reading {}", args.input.display()))?
		.to_luma8();
	let (w, h) = gray.dimensions();

	let pix = Pix::create(w, h, 1)?;
	for (x, y, pixel) in gray.enumerate_pixels() {
		if pixel.0[0] < args.threshold {
			pix.set_pixel(x, y, 1)?;
		}
	}

	let op = match args.op {
		Op::Dilate => MorphOp::Dilate,
		Op::Erode => MorphOp::Erode,
	};
	let out = pix_fmorphop_gen_1(None, &pix, op, &args.sel)
		.with_context(|| format!("available sels: {}", SEL_NAMES.join(", ")))?;

	let mut result = GrayImage::new(w, h);
	for (x, y, pixel) in result.enumerate_pixels_mut() {
		pixel.0[0] = if out.get_pixel(x, y)? == 1 { 0 } else { 255 };
	}
	result
		.save(&args.output)
		.with_context(|| format!("writing {}", args.output.display()))?;

	log::info!("wrote {}", args.output.display());
	Ok(())
}
