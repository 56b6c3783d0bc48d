//! Test module for image reconstruction out of whole files.
//!
//! Files are built in memory, element by element,
//! and go through the full path from framing to pixel buffer.

use dcmtree_core::{PropertyTree, Tag, Value};
use dcmtree_encoding::TransferSyntax;
use dcmtree_object::codec::CodecError;
use dcmtree_object::{from_bytes, DicomFile, ImageCodec, OpenFileOptions};
use dcmtree_pixeldata::{Error, PixelBuffer, PixelDecoder};
use rstest::rstest;

const EXPLICIT: &str = "1.2.840.10008.1.2.1";
const PHILIPS_CT: &str = "1.3.46.670589.33.1.4.1";
const JPEG_2000_LOSSLESS: &str = "1.2.840.10008.1.2.4.90";

fn explicit(group: u16, element: u16, vr: &[u8; 2], value: &[u8]) -> Vec<u8> {
    let mut value = value.to_vec();
    if value.len() % 2 == 1 {
        value.push(if vr == b"OB" { 0 } else { b' ' });
    }
    let mut out = Vec::new();
    out.extend_from_slice(&group.to_le_bytes());
    out.extend_from_slice(&element.to_le_bytes());
    out.extend_from_slice(vr);
    if matches!(vr, b"OB" | b"OW" | b"SQ" | b"UN" | b"UT") {
        out.extend_from_slice(&[0, 0]);
        out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    } else {
        out.extend_from_slice(&(value.len() as u16).to_le_bytes());
    }
    out.extend_from_slice(&value);
    out
}

fn us(group: u16, element: u16, value: u16) -> Vec<u8> {
    explicit(group, element, b"US", &value.to_le_bytes())
}

fn file_with(transfer_syntax: &str, dataset: &[u8]) -> Vec<u8> {
    let mut uid = transfer_syntax.as_bytes().to_vec();
    if uid.len() % 2 == 1 {
        uid.push(0);
    }
    let meta = explicit(0x0002, 0x0010, b"UI", &uid);
    let mut out = vec![0; 128];
    out.extend_from_slice(b"DICM");
    out.extend_from_slice(&explicit(0x0002, 0x0000, b"UL", &(meta.len() as u32).to_le_bytes()));
    out.extend_from_slice(&meta);
    out.extend_from_slice(dataset);
    out
}

/// An uncompressed image, with the image type first
/// and the pixel data last.
fn image(
    image_type: &str,
    pi: &str,
    rows: u16,
    columns: u16,
    bits_allocated: u16,
    extra: &[Vec<u8>],
    pixels: &[u8],
) -> DicomFile {
    let mut dataset = explicit(0x0008, 0x0008, b"CS", image_type.as_bytes());
    for element in extra {
        dataset.extend_from_slice(element);
    }
    dataset.extend(explicit(0x0028, 0x0004, b"CS", pi.as_bytes()));
    dataset.extend(us(0x0028, 0x0010, rows));
    dataset.extend(us(0x0028, 0x0011, columns));
    dataset.extend(us(0x0028, 0x0100, bits_allocated));
    dataset.extend(explicit(0x7FE0, 0x0010, b"OB", pixels));
    from_bytes(&file_with(EXPLICIT, &dataset)).unwrap()
}

#[test]
fn monochrome2_16_bit() {
    let file = image(
        "ORIGINAL\\PRIMARY",
        "MONOCHROME2",
        2,
        3,
        16,
        &[],
        &[1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 0, 1],
    );
    let image = file.decode_pixel_data().unwrap();
    assert_eq!((image.columns, image.rows, image.slices), (3, 2, 1));
    assert_eq!(image.buffer, PixelBuffer::U16(vec![1, 2, 3, 4, 5, 256]));
}

#[test]
fn only_the_first_pixel_data_is_used() {
    let dataset = [
        explicit(0x0008, 0x0008, b"CS", b"ORIGINAL"),
        explicit(0x0028, 0x0004, b"CS", b"MONOCHROME2"),
        us(0x0028, 0x0010, 1),
        us(0x0028, 0x0011, 2),
        us(0x0028, 0x0100, 8),
        explicit(0x7FE0, 0x0010, b"OB", &[7, 8]),
        explicit(0x7FE0, 0x0010, b"OB", &[90, 91, 92, 93]),
    ]
    .concat();
    let file = from_bytes(&file_with(EXPLICIT, &dataset)).unwrap();
    assert_eq!(file.blobs().get(Tag(0x7FE0, 0x0010)).len(), 2);
    let image = file.decode_pixel_data().unwrap();
    assert_eq!((image.columns, image.rows), (2, 1));
    assert_eq!(image.buffer, PixelBuffer::U8(vec![7, 8]));
}

#[test]
fn monochrome1_is_inverted() {
    let file = image("ORIGINAL", "MONOCHROME1", 2, 2, 8, &[], &[10, 20, 30, 40]);
    let image = file.decode_pixel_data().unwrap();
    assert_eq!(image.buffer, PixelBuffer::U8(vec![39, 29, 19, 9]));
}

#[test]
fn signed_samples() {
    let file = image(
        "ORIGINAL",
        "MONOCHROME2",
        1,
        2,
        16,
        &[us(0x0028, 0x0103, 1)],
        &[0xFF, 0xFF, 0x00, 0x80],
    );
    let image = file.decode_pixel_data().unwrap();
    assert_eq!(image.buffer, PixelBuffer::I16(vec![-1, i16::MIN]));
}

#[test]
fn planar_rgb() {
    let file = image(
        "ORIGINAL",
        "RGB",
        1,
        2,
        8,
        &[us(0x0028, 0x0006, 1)],
        &[1, 2, 10, 20, 100, 200],
    );
    let image = file.decode_pixel_data().unwrap();
    assert_eq!(image.buffer, PixelBuffer::Rgb8(vec![[1, 10, 100], [2, 20, 200]]));
}

#[rstest]
#[case("YBR_FULL")]
#[case("PALETTE COLOR")]
fn unsupported_photometric_interpretation(#[case] pi: &str) {
    let file = image("ORIGINAL", pi, 1, 2, 8, &[], &[1, 2]);
    assert!(matches!(
        file.decode_pixel_data(),
        Err(Error::UnsupportedPhotometricInterpretation { pi: got, .. }) if got == pi
    ));
}

#[test]
fn pixel_count_must_match() {
    let file = image("ORIGINAL", "MONOCHROME2", 2, 2, 8, &[], &[1, 2, 3, 4, 5, 6]);
    assert!(matches!(
        file.decode_pixel_data(),
        Err(Error::LengthMismatch { pixels: 6, rows: 2, columns: 2, .. })
    ));
}

#[test]
fn missing_pixel_data() {
    let dataset = [
        explicit(0x0028, 0x0004, b"CS", b"MONOCHROME2"),
        us(0x0028, 0x0010, 1),
        us(0x0028, 0x0011, 1),
        us(0x0028, 0x0100, 8),
    ]
    .concat();
    let file = from_bytes(&file_with(EXPLICIT, &dataset)).unwrap();
    assert!(matches!(
        file.decode_pixel_data(),
        Err(Error::NoPixelData { .. })
    ));
}

fn philips_ct(compression: &[u8]) -> DicomFile {
    let dataset = [
        explicit(0x0028, 0x0004, b"CS", b"MONOCHROME2"),
        us(0x0028, 0x0010, 2),
        us(0x0028, 0x0011, 2),
        us(0x0028, 0x0100, 16),
        explicit(0x07A1, 0x100A, b"OB", &[0xA5, 0x02, 0x07, 0x5A, 0x01, 0x00]),
        explicit(0x07A1, 0x1011, b"CS", compression),
    ]
    .concat();
    from_bytes(&file_with(PHILIPS_CT, &dataset)).unwrap()
}

#[test]
fn philips_private_ct() {
    let image = philips_ct(b"PMSCT_RLE1").decode_pixel_data().unwrap();
    assert_eq!(image.buffer, PixelBuffer::U16(vec![7, 14, 21, 1]));

    assert!(matches!(
        philips_ct(b"PMSCT_RGB1").decode_pixel_data(),
        Err(Error::UnknownCompression { compression, .. }) if compression == "PMSCT_RGB1"
    ));
}

#[derive(Debug)]
struct FakeJ2k;

impl ImageCodec for FakeJ2k {
    fn name(&self) -> &str {
        "fake j2k"
    }

    fn supports(&self, ts: TransferSyntax) -> bool {
        ts == TransferSyntax::Jpeg2000Lossless
    }

    fn decode(&self, fragments: &[Vec<u8>], tree: &PropertyTree) -> Result<Vec<u8>, CodecError> {
        let rows: usize = tree.value("Rows").ok_or("no rows")?.to_int()?;
        let columns: usize = tree.value("Columns").ok_or("no columns")?.to_int()?;
        // every fragment byte stands for one sample
        let samples: Vec<u16> = fragments.concat().iter().map(|&b| u16::from(b) * 100).collect();
        if samples.len() != rows * columns {
            return Err("unexpected number of samples".into());
        }
        Ok(samples.iter().flat_map(|s| s.to_le_bytes()).collect())
    }
}

#[test]
fn jpeg2000_with_codec() {
    let mut dataset = [
        explicit(0x0028, 0x0004, b"CS", b"MONOCHROME2"),
        us(0x0028, 0x0010, 2),
        us(0x0028, 0x0011, 2),
        us(0x0028, 0x0100, 16),
    ]
    .concat();
    #[rustfmt::skip]
    dataset.extend_from_slice(&[
        // (7FE0,0010) OB, undefined length
        0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        // empty offset table
        0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // two fragments
        0xFE, 0xFF, 0x00, 0xE0, 0x02, 0x00, 0x00, 0x00,
        1, 2,
        0xFE, 0xFF, 0x00, 0xE0, 0x02, 0x00, 0x00, 0x00,
        3, 4,
        // sequence delimiter
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ]);
    let file = OpenFileOptions::new()
        .codec(FakeJ2k)
        .from_bytes(&file_with(JPEG_2000_LOSSLESS, &dataset))
        .unwrap();
    let image = file.decode_pixel_data().unwrap();
    assert_eq!(image.buffer, PixelBuffer::U16(vec![100, 200, 300, 400]));
}

const MOSAIC_PIXELS: [u8; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

fn mosaic_file(image_type: &str, options: OpenFileOptions) -> DicomFile {
    let dataset = [
        explicit(0x0008, 0x0008, b"CS", image_type.as_bytes()),
        us(0x0019, 0x100A, 4),
        explicit(0x0028, 0x0004, b"CS", b"MONOCHROME2"),
        us(0x0028, 0x0010, 4),
        us(0x0028, 0x0011, 4),
        us(0x0028, 0x0100, 8),
        explicit(0x7FE0, 0x0010, b"OB", &MOSAIC_PIXELS),
    ]
    .concat();
    options.from_bytes(&file_with(EXPLICIT, &dataset)).unwrap()
}

#[test]
fn mosaic_is_decomposed() {
    let mut file = mosaic_file("ORIGINAL\\PRIMARY\\MOSAIC", OpenFileOptions::new());
    let volume = file.load_image().unwrap();
    assert_eq!((volume.columns, volume.rows, volume.slices), (2, 2, 4));
    assert_eq!(
        volume.buffer,
        PixelBuffer::U8(vec![0, 1, 4, 5, 2, 3, 6, 7, 8, 9, 12, 13, 10, 11, 14, 15])
    );
    assert_eq!(
        file.value("ImageType"),
        Some(&Value::Strs(vec![
            "ORIGINAL".into(),
            "PRIMARY".into(),
            "WAS_MOSAIC".into()
        ]))
    );
    assert!(!file.tree().contains("SiemensNumberOfImagesInMosaic"));
    assert!(!file.tree().contains("SliceOrientation"));
}

#[test]
fn mosaic_is_kept() {
    let mut file = mosaic_file("ORIGINAL\\PRIMARY\\MOSAIC", OpenFileOptions::new().keep_mosaic());
    let image = file.load_image().unwrap();
    assert_eq!((image.columns, image.rows, image.slices), (4, 4, 1));
    assert_eq!(image.buffer, PixelBuffer::U8(MOSAIC_PIXELS.to_vec()));
    assert!(!file.tree().contains("SiemensNumberOfImagesInMosaic"));
    assert_eq!(file.value("SliceOrientation"), Some(&Value::U16(4)));
}

#[rstest]
#[case(OpenFileOptions::new(), 1)]
#[case(OpenFileOptions::new().force_mosaic(), 4)]
fn mosaic_is_forced(#[case] options: OpenFileOptions, #[case] slices: u32) {
    let mut file = mosaic_file("ORIGINAL\\PRIMARY", options);
    let image = file.load_image().unwrap();
    assert_eq!(image.slices, slices);
}

#[cfg(feature = "ndarray")]
#[test]
fn volume_to_ndarray() {
    let mut file = mosaic_file("ORIGINAL\\PRIMARY\\MOSAIC", OpenFileOptions::new());
    let volume = file.load_image().unwrap().to_ndarray::<f32>().unwrap();
    assert_eq!(volume.shape(), &[4, 2, 2]);
    assert_eq!(volume[[1, 0, 1]], 3.);
    assert_eq!(volume[[3, 1, 0]], 14.);
}
