//! Generates morphology translation units from a sel collection.
//!
//! By default this compiles the basic sel set with fileindex 1, which is
//! exactly how the checked-in `bitmorph_dwa` modules were produced.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use bitmorph_gen::fmorphautogen_in;
use bitmorph_types::sel::Sela;

#[derive(Parser)]
#[command(about = "Compile structuring elements into word-parallel morphology kernels")]
struct Args {
	/// Integer label baked into the generated file and function names
	#[arg(long, default_value_t = 1)]
	fileindex: i32,

	/// JSON file holding the sel collection; the basic set when omitted
	#[arg(long)]
	sela: Option<PathBuf>,

	/// Directory the two modules are written into
	#[arg(long, default_value = ".")]
	out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let args = Args::parse();
	let sela = match &args.sela {
		Some(path) => {
			let text = std::fs::read_to_string(path)
				.with_context(|| format!("reading {}", path.display()))?;
			serde_json::from_str(&text).context("parsing sela JSON")?
		}
		None => Sela::basic()?,
	};

	for sel in &sela {
		log::debug!("compiling:\n{sel}");
	}
	fmorphautogen_in(&sela, args.fileindex, &args.out_dir)?;

	let fileindex = args.fileindex.max(0);
	log::info!(
		"wrote fmorphgen_{fileindex}.rs and fmorphgenlow_{fileindex}.rs to {}",
		args.out_dir.display()
	);
	Ok(())
}
