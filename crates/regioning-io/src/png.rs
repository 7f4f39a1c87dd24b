//! PNG image format support

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use regioning_core::{RGB_CHANNELS, Raster, RgbRaster};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image as a binary mask
///
/// A pixel is foreground (`1`) when any of its color samples is non-zero;
/// alpha is ignored. Indexed images are binarised on the palette index, so
/// index 0 is background.
pub fn read_mask_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    // Keep palette indices and packed depths as stored
    decoder.set_transformations(Transformations::IDENTITY);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let (color_type, bit_depth) = reader.output_color_type();

    // Color samples to test, and total samples, per pixel
    let (color_samples, samples) = match color_type {
        ColorType::Grayscale | ColorType::Indexed => (1, 1),
        ColorType::GrayscaleAlpha => (1, 2),
        ColorType::Rgb => (3, 3),
        ColorType::Rgba => (3, 4),
    };
    let bits = bit_depth as usize;
    if bits < 8 && samples != 1 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG format: {:?} {:?}",
            color_type, bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut mask = Vec::with_capacity(width as usize * height as usize);

    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..(y + 1) * bytes_per_row];
        for x in 0..width as usize {
            let on = if bits < 8 {
                let per_byte = 8 / bits;
                let shift = 8 - bits * (x % per_byte + 1);
                (row[x / per_byte] >> shift) & ((1u8 << bits) - 1) != 0
            } else {
                let bytes_per_sample = bits / 8;
                let start = x * samples * bytes_per_sample;
                row[start..start + color_samples * bytes_per_sample]
                    .iter()
                    .any(|&b| b != 0)
            };
            mask.push(u16::from(on));
        }
    }

    Ok(Raster::from_vec(width, height, mask)?)
}

/// Read an RGB or RGBA PNG as a colorized image
///
/// 16-bit channels are kept as stored; 8-bit channels are widened without
/// scaling, so a value of 200 reads back as 200. Alpha is dropped.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for grayscale or indexed images.
pub fn read_rgb_png<R: BufRead + Seek>(reader: R) -> IoResult<RgbRaster> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::IDENTITY);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let width = reader.info().width;
    let height = reader.info().height;
    let (color_type, bit_depth) = reader.output_color_type();

    let samples = match color_type {
        ColorType::Rgb => RGB_CHANNELS,
        ColorType::Rgba => RGB_CHANNELS + 1,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "expected RGB or RGBA PNG, got {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };
    let wide = bit_depth == BitDepth::Sixteen;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut channels = Vec::with_capacity(width as usize * height as usize * RGB_CHANNELS);

    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..(y + 1) * bytes_per_row];
        for x in 0..width as usize {
            for c in 0..RGB_CHANNELS {
                let i = x * samples + c;
                let value = if wide {
                    u16::from_be_bytes([row[2 * i], row[2 * i + 1]])
                } else {
                    u16::from(row[i])
                };
                channels.push(value);
            }
        }
    }

    Ok(RgbRaster::from_vec(width, height, channels)?)
}

/// Write a colorized image as a 16-bit RGB PNG
///
/// Channels are written big-endian, so every `u16` value survives a round
/// trip unchanged.
pub fn write_rgb_png<W: Write>(image: &RgbRaster, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Sixteen);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(image.data().len() * 2);
    for &channel in image.data() {
        data.extend_from_slice(&channel.to_be_bytes());
    }
    debug_assert_eq!(
        data.len(),
        image.width() as usize * image.height() as usize * RGB_CHANNELS * 2
    );

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

/// Write a binary mask as an 8-bit grayscale PNG
///
/// Background is written as 0 and every other sample as 255.
pub fn write_mask_png<W: Write>(mask: &Raster, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, mask.width(), mask.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let data: Vec<u8> = mask
        .data()
        .iter()
        .map(|&v| if v != 0 { 255 } else { 0 })
        .collect();

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use regioning_core::Rgb;
    use std::io::Cursor;

    fn encode(width: u32, height: u32, color: ColorType, depth: BitDepth, data: &[u8]) -> Vec<u8> {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buffer
    }

    #[test]
    fn test_mask_roundtrip() {
        let mut mask = Raster::new(10, 4).unwrap();
        mask.set(0, 0, 1).unwrap();
        mask.set(9, 3, 1).unwrap();
        mask.set(4, 2, 1).unwrap();

        let mut buffer = Vec::new();
        write_mask_png(&mask, &mut buffer).unwrap();
        let back = read_mask_png(Cursor::new(buffer)).unwrap();

        assert_eq!(back, mask);
    }

    #[test]
    fn test_read_gray_binarises() {
        let png = encode(4, 1, ColorType::Grayscale, BitDepth::Eight, &[0, 1, 128, 255]);
        let mask = read_mask_png(Cursor::new(png)).unwrap();
        assert_eq!(mask.data(), &[0, 1, 1, 1]);
    }

    #[test]
    fn test_read_one_bit() {
        // 10 pixels: 1000000001 padded to two bytes
        let png = encode(10, 1, ColorType::Grayscale, BitDepth::One, &[0b1000_0000, 0b0100_0000]);
        let mask = read_mask_png(Cursor::new(png)).unwrap();
        assert_eq!(mask.data(), &[1, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_read_rgba_ignores_alpha() {
        let png = encode(
            3,
            1,
            ColorType::Rgba,
            BitDepth::Eight,
            &[0, 0, 0, 255, 0, 0, 9, 0, 0, 0, 0, 0],
        );
        let mask = read_mask_png(Cursor::new(png)).unwrap();
        assert_eq!(mask.data(), &[0, 1, 0]);
    }

    #[test]
    fn test_read_gray16() {
        let png = encode(2, 1, ColorType::Grayscale, BitDepth::Sixteen, &[0, 0, 0, 1]);
        let mask = read_mask_png(Cursor::new(png)).unwrap();
        assert_eq!(mask.data(), &[0, 1]);
    }

    #[test]
    fn test_write_rgb_16bit() {
        let mut image = RgbRaster::new(2, 1).unwrap();
        image.set(1, 0, Rgb::new(50, 255, 300)).unwrap();

        let mut buffer = Vec::new();
        write_rgb_png(&image, &mut buffer).unwrap();

        let decoder = Decoder::new(Cursor::new(buffer));
        let mut reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().color_type, ColorType::Rgb);
        assert_eq!(reader.info().bit_depth, BitDepth::Sixteen);

        let mut buf = vec![0; reader.output_buffer_size().unwrap()];
        let info = reader.next_frame(&mut buf).unwrap();
        let data = &buf[..info.buffer_size()];
        let channels: Vec<u16> = data
            .chunks(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        assert_eq!(channels, vec![0, 0, 0, 50, 255, 300]);
    }

    #[test]
    fn test_read_rgb_roundtrip() {
        let mut image = RgbRaster::new(3, 2).unwrap();
        image.set(0, 0, Rgb::new(50, 255, 300)).unwrap();
        image.set(2, 1, Rgb::new(1, 2, 3)).unwrap();

        let mut buffer = Vec::new();
        write_rgb_png(&image, &mut buffer).unwrap();
        assert_eq!(read_rgb_png(Cursor::new(buffer)).unwrap(), image);
    }

    #[test]
    fn test_read_rgb_eight_bit_rgba() {
        let png = encode(2, 1, ColorType::Rgba, BitDepth::Eight, &[200, 60, 0, 9, 0, 0, 7, 255]);
        let image = read_rgb_png(Cursor::new(png)).unwrap();
        assert_eq!(image.get(0, 0), Some(Rgb::new(200, 60, 0)));
        assert_eq!(image.get(1, 0), Some(Rgb::new(0, 0, 7)));
    }

    #[test]
    fn test_read_rgb_rejects_gray() {
        let png = encode(2, 1, ColorType::Grayscale, BitDepth::Eight, &[0, 255]);
        assert!(matches!(
            read_rgb_png(Cursor::new(png)),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
