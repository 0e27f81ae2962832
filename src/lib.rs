#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use std::io;

pub const TILE_SIZE: usize = 64;
pub const BYTES_PER_PIXEL: usize = 4;

pub type Vec2 = [usize; 2];
pub const X: usize = 0;
pub const Y: usize = 1;
pub const WIDTH: usize = X;
pub const HEIGHT: usize = Y;

/*
	RGBA8 raster, rows top-to-bottom, `width * height * BYTES_PER_PIXEL` bytes.
*/
pub struct Image {
	pub width: usize,
	pub height: usize,
	pub data: Vec<u8>,
}

impl Image {
	pub fn fromWidthHeight(width: usize, height: usize) -> Image {
		Image { width, height, data: vec![0; width * height * BYTES_PER_PIXEL] }
	}

	/*
		Expects the decoder to have been given `Transformations::normalize_to_color8() |
		Transformations::ALPHA`, which leaves only two possible output color types.
	*/
	pub fn fromPNG<R: io::Read>(png: &mut png::Reader<R>) -> Result<Image, png::DecodingError> {
		let mut buffer = vec![0; png.output_buffer_size()];
		let info = png.next_frame(&mut buffer)?;
		let [width, height] = [info.width as usize, info.height as usize];
		let data = match info.color_type {
			png::ColorType::Rgba => {
				buffer.truncate(info.buffer_size());
				buffer
			}
			png::ColorType::GrayscaleAlpha => {
				let mut data = Vec::with_capacity(width * height * BYTES_PER_PIXEL);
				for pixel in buffer[..info.buffer_size()].chunks_exact(2) {
					data.extend_from_slice(&[pixel[0], pixel[0], pixel[0], pixel[1]]);
				}
				data
			}
			colorType => panic!("{colorType:?}"),
		};
		Ok(Image { width, height, data })
	}

	/*
		Overwrites a `dimensions`-sized pixel rectangle of `self` at `destPoint` with the
		rectangle of `src` at `srcPoint`, alpha included, no blending. The rectangle is
		clipped against both rasters; destination pixels outside the clipped region keep
		their previous value.
	*/
	pub fn blitPixelsRectangle(&mut self, destPoint: Vec2, dimensions: Vec2, src: &Image, srcPoint: Vec2) {
		let columns = dimensions[WIDTH]
			.min(src.width.saturating_sub(srcPoint[X]))
			.min(self.width.saturating_sub(destPoint[X]));
		let rows = dimensions[HEIGHT]
			.min(src.height.saturating_sub(srcPoint[Y]))
			.min(self.height.saturating_sub(destPoint[Y]));
		for row in 0..rows {
			let [i, j] = [
				((srcPoint[Y] + row) * src.width + srcPoint[X]) * BYTES_PER_PIXEL,
				((destPoint[Y] + row) * self.width + destPoint[X]) * BYTES_PER_PIXEL,
			];
			self.data[j..j + columns * BYTES_PER_PIXEL]
				.copy_from_slice(&src.data[i..i + columns * BYTES_PER_PIXEL]);
		}
	}
}

pub mod remap {
	use {
		crate::{Image, TILE_SIZE},
		std::{
			fs::File,
			io::{BufReader, BufWriter},
		},
		thiserror::Error,
	};

	pub const SRC_WIDTH: usize = 3 * TILE_SIZE;
	pub const SRC_HEIGHT: usize = 2 * TILE_SIZE;
	pub const STRIP_WIDTH: usize = 6 * TILE_SIZE;
	pub const STRIP_HEIGHT: usize = TILE_SIZE;

	pub struct TileMapping {
		pub srcColumn: usize,
		pub srcRow: usize,
		pub destColumn: usize,
	}

	/*
		Die-face sheet coordinates, kept exactly as drawn in the original 192x128 asset.
		Two sources repeat on purpose: slots 0 and 5 share one tile, and slots 1 and 3
		share another because face 2 never got its own art. The `srcRow: 2` entries
		address the row below the sheet's bottom edge, so the clipped blit leaves those
		two slots fully transparent.
	*/
	pub static TILE_MAPPINGS: [TileMapping; 6] = [
		TileMapping { srcColumn: 1, srcRow: 1, destColumn: 5 },
		TileMapping { srcColumn: 1, srcRow: 0, destColumn: 2 },
		TileMapping { srcColumn: 0, srcRow: 1, destColumn: 4 },
		TileMapping { srcColumn: 1, srcRow: 1, destColumn: 0 },
		TileMapping { srcColumn: 1, srcRow: 2, destColumn: 1 },
		TileMapping { srcColumn: 1, srcRow: 2, destColumn: 3 },
	];

	#[derive(Debug, Error)]
	pub enum Error {
		#[error("cannot decode {path:?}: {source}")]
		Decode { path: String, source: png::DecodingError },

		#[error("{path:?} is {width}x{height} pixels, expected 192x128")]
		DimensionMismatch { path: String, width: usize, height: usize },

		#[error("cannot encode {path:?}: {source}")]
		Encode { path: String, source: png::EncodingError },
	}

	/*
		The whole tool: decode, validate 192x128, blit the six mapped tiles onto a fresh
		transparent 384x64 strip, encode. The output file is only created once decoding
		and validation have succeeded.
	*/
	pub fn convert(inputFilePath: &str, outputFilePath: &str) -> Result<(), Error> {
		let decodeErr = |source| Error::Decode { path: inputFilePath.to_owned(), source };
		let srcImage = &{
			let mut decoder = png::Decoder::new(BufReader::new(
				File::open(inputFilePath).map_err(|err| decodeErr(err.into()))?,
			));
			decoder.set_transformations(
				png::Transformations::normalize_to_color8() | png::Transformations::ALPHA,
			);
			Image::fromPNG(&mut decoder.read_info().map_err(decodeErr)?).map_err(decodeErr)?
		};
		if [srcImage.width, srcImage.height] != [SRC_WIDTH, SRC_HEIGHT] {
			return Err(Error::DimensionMismatch {
				path: inputFilePath.to_owned(),
				width: srcImage.width,
				height: srcImage.height,
			});
		}
		let destImage = &mut Image::fromWidthHeight(STRIP_WIDTH, STRIP_HEIGHT);
		for &TileMapping { srcColumn, srcRow, destColumn } in &TILE_MAPPINGS {
			destImage.blitPixelsRectangle(
				[destColumn * TILE_SIZE, 0],
				[TILE_SIZE; 2],
				srcImage,
				[srcColumn * TILE_SIZE, srcRow * TILE_SIZE],
			);
		}
		let encodeErr = |source| Error::Encode { path: outputFilePath.to_owned(), source };
		let mut png = png::Encoder::new(
			BufWriter::new(File::create(outputFilePath).map_err(|err| encodeErr(err.into()))?),
			destImage.width as _,
			destImage.height as _,
		);
		png.set_color(png::ColorType::Rgba);
		png.set_depth(png::BitDepth::Eight);
		png.write_header().map_err(encodeErr)?.write_image_data(&destImage.data).map_err(encodeErr)?;
		Ok(())
	}
}
