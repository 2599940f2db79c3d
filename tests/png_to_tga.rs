use std::io::Cursor;

use idtech3_tga_rs::image_pipeline::{
    decode_rle_tga, derive_output_path, reorder, ConversionConfig, ConversionError,
    PngToTgaPipeline, Raster,
};
use image::{DynamicImage, ImageFormat, RgbaImage};
use tempfile::tempdir;

fn png_bytes(width: u32, height: u32, pixels: Vec<u8>) -> Vec<u8> {
    let img = RgbaImage::from_raw(width, height, pixels).expect("buffer matches dimensions");
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn gradient(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::new();
    for y in 0..height {
        for x in 0..width {
            // repeat columns in pairs so both packet kinds appear
            let v = ((x / 2) * 7 + y * 13) as u8;
            pixels.extend_from_slice(&[v, v.wrapping_add(1), v.wrapping_add(2), 200]);
        }
    }
    pixels
}

fn assert_round_trip(width: u32, height: u32, pixels: Vec<u8>) {
    let raster = Raster::new(width, height, pixels.clone()).unwrap();
    let expected = reorder(&raster).unwrap();

    let pipeline = PngToTgaPipeline::new(ConversionConfig::default());
    let mut output = Vec::new();
    pipeline.convert(&png_bytes(width, height, pixels), &mut output).unwrap();

    let decoded = decode_rle_tga(&output).unwrap();
    assert_eq!(decoded.width as u32, width);
    assert_eq!(decoded.height as u32, height);
    assert_eq!(decoded.as_bytes(), expected.as_bytes());
}

#[test]
fn test_round_trip_mixed_content() {
    assert_round_trip(37, 11, gradient(37, 11));
}

#[test]
fn test_round_trip_all_identical() {
    let pixels = [12u8, 34, 56, 78].repeat(300 * 2);
    assert_round_trip(300, 2, pixels);
}

#[test]
fn test_round_trip_all_distinct() {
    let pixels: Vec<u8> = (0..500u32)
        .flat_map(|i| [i as u8, (i >> 8) as u8, 0x80, 0xFF])
        .collect();
    assert_round_trip(250, 2, pixels);
}

#[test]
fn test_convert_file_bottom_up_bgra() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("sprite.png");
    let output = dir.path().join("sprite.tga");

    // top row red, bottom row blue
    let pixels = vec![
        255, 0, 0, 255, 255, 0, 0, 255,
        0, 0, 255, 128, 0, 0, 255, 128,
    ];
    std::fs::write(&input, png_bytes(2, 2, pixels)).unwrap();

    let pipeline = PngToTgaPipeline::new(ConversionConfig::default());
    pipeline.convert_file(&input, &output).unwrap();

    let written = std::fs::read(&output).unwrap();
    assert_eq!(
        written,
        vec![
            0, 0, 10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 2, 0, 32, 8,
            // bottom row (blue) first, stored BGRA
            0x81, 255, 0, 0, 128,
            0x81, 0, 0, 255, 255,
        ]
    );
}

#[test]
fn test_deterministic_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("a.png");
    std::fs::write(&input, png_bytes(20, 20, gradient(20, 20))).unwrap();

    let pipeline = PngToTgaPipeline::new(ConversionConfig::default());
    let first = dir.path().join("first.tga");
    let second = dir.path().join("second.tga");
    pipeline.convert_file(&input, &first).unwrap();
    pipeline.convert_file(&input, &second).unwrap();

    assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
}

#[test]
fn test_missing_input_is_unreadable() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.tga");

    let pipeline = PngToTgaPipeline::new(ConversionConfig::default());
    let result = pipeline.convert_file(dir.path().join("missing.png"), &output);

    assert!(matches!(result, Err(ConversionError::InputUnreadable(_))));
    assert!(!output.exists());
}

#[test]
fn test_malformed_input_leaves_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.png");
    let output = dir.path().join("broken.tga");
    std::fs::write(&input, b"\x89PNG\r\n\x1a\nnot really").unwrap();

    let pipeline = PngToTgaPipeline::new(ConversionConfig::default());
    let result = pipeline.convert_file(&input, &output);

    assert!(matches!(result, Err(ConversionError::DecodeFailure(_))));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ok.png");
    std::fs::write(&input, png_bytes(1, 1, vec![1, 2, 3, 4])).unwrap();

    let pipeline = PngToTgaPipeline::new(ConversionConfig::default());
    let result = pipeline.convert_file(&input, dir.path().join("no/such/dir/ok.tga"));

    assert!(matches!(result, Err(ConversionError::OutputWriteFailure(_))));
}

#[test]
fn test_derived_output_path_conversion() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("skybox.png");
    std::fs::write(&input, png_bytes(3, 1, vec![1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3])).unwrap();

    let config = ConversionConfig::default();
    let output = derive_output_path(&input, &config).unwrap();
    assert_eq!(output, dir.path().join("skybox.tga"));

    PngToTgaPipeline::new(config).convert_file(&input, &output).unwrap();

    let written = std::fs::read(&output).unwrap();
    assert_eq!(written.len(), 18 + 1 + 12);
    assert_eq!(written[18], 0x02);
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &b in bytes {
        crc ^= b as u32;
        for _ in 0..8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ 0xEDB8_8320 } else { crc >> 1 };
        }
    }
    !crc
}

fn push_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    let mut body = kind.to_vec();
    body.extend_from_slice(data);
    out.extend_from_slice(&body);
    out.extend_from_slice(&crc32(&body).to_be_bytes());
}

/// PNG whose header declares `width`x`height` RGBA8 but whose pixel data
/// stops after a few bytes.
fn header_only_png(width: u32, height: u32) -> Vec<u8> {
    let mut out = b"\x89PNG\r\n\x1a\n".to_vec();
    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[8, 6, 0, 0, 0]);
    push_chunk(&mut out, b"IHDR", &ihdr);
    push_chunk(&mut out, b"IDAT", &[0x78, 0x9C, 0x63, 0x00]);
    push_chunk(&mut out, b"IEND", &[]);
    out
}

#[test]
fn test_convert_reports_dimension_overflow() {
    let pipeline = PngToTgaPipeline::new(ConversionConfig::default());

    let mut output = Vec::new();
    let result = pipeline.convert(&header_only_png(70000, 2000), &mut output);

    assert!(matches!(result, Err(ConversionError::DimensionOverflow(70000, 2000))));
    assert!(output.is_empty());
}

#[test]
fn test_convert_accepts_large_dimensions() {
    let pipeline = PngToTgaPipeline::new(ConversionConfig::default());

    for (width, height) in [(12000, 12000), (65535, 2100)] {
        let mut output = Vec::new();
        match pipeline.convert(&header_only_png(width, height), &mut output) {
            // only the truncated pixel data may fail, never the size
            Err(ConversionError::DecodeFailure(msg)) => {
                assert!(!msg.to_lowercase().contains("limit"), "{}x{}: {}", width, height, msg)
            }
            other => panic!("{}x{}: unexpected result {:?}", width, height, other),
        }
        assert!(output.is_empty());
    }
}

#[test]
fn test_convert_file_overflow_leaves_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("wide.png");
    let output = dir.path().join("wide.tga");
    std::fs::write(&input, header_only_png(70000, 1)).unwrap();

    let pipeline = PngToTgaPipeline::new(ConversionConfig::default());
    let result = pipeline.convert_file(&input, &output);

    assert!(matches!(result, Err(ConversionError::DimensionOverflow(70000, 1))));
    assert!(!output.exists());
}

#[test]
fn test_convert_file_zero_height_leaves_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("flat.png");
    let output = dir.path().join("flat.tga");
    std::fs::write(&input, header_only_png(16, 0)).unwrap();

    let pipeline = PngToTgaPipeline::new(ConversionConfig::default());
    let result = pipeline.convert_file(&input, &output);

    assert!(matches!(
        result,
        Err(ConversionError::DecodeFailure(_)) | Err(ConversionError::InvalidDimensions(16, 0))
    ));
    assert!(!output.exists());
}
