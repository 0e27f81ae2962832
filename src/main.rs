#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {clap::Parser, dice_spritesheet_remap::remap, std::process::ExitCode};

#[derive(Parser)]
#[clap(about = "rearranges a 192x128 dice spritesheet (2x3 of 64x64 frames) into a 384x64 1x6 strip")]
struct Args {
	inputFilePath: String,
	outputFilePath: String,
}

fn main() -> ExitCode {
	let Args { inputFilePath, outputFilePath } = match Args::try_parse() {
		Ok(args) => args,
		Err(err) => {
			println!("{err}");
			return ExitCode::FAILURE;
		}
	};
	match remap::convert(&inputFilePath, &outputFilePath) {
		Ok(()) => {
			println!("spritesheet strip saved as: {outputFilePath:?}");
			ExitCode::SUCCESS
		}
		Err(err) => {
			println!("conversion failed: {err}");
			ExitCode::FAILURE
		}
	}
}
