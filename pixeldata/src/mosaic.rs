//! Decomposition of Siemens mosaic images.
//!
//! A mosaic packs the slices of a volume as tiles of one large 2-D image,
//! in row major order. Decomposing it yields a volume of
//! `columns / m` by `rows / m` by `slices` voxels,
//! where `m` is the number of tiles along each side.

use crate::reconstruct::PixelBuffer;
use crate::{DecodedImage, GuessSliceCountSnafu, MosaicShapeSnafu, Result};
use dcmtree_core::chrono::{Duration, NaiveDateTime};
use dcmtree_core::tree::PropertyTree;
use dcmtree_core::value::Value;
use snafu::{ensure, OptionExt};

/// The slice count written by Siemens in the standard data set.
pub const SLICE_COUNT: &str = "SiemensNumberOfImagesInMosaic";
/// The slice count written in the CSA header.
pub const CSA_SLICE_COUNT: &str = "SIEMENS CSA HEADER/NumberOfImagesInMosaic";
/// The acquisition time offsets of each slice, in milliseconds.
pub const CSA_ACQ_TIMES: &str = "SIEMENS CSA HEADER/MosaicRefAcqTimes";

/// The spatial description of an image, in patient coordinates.
///
/// Unknown components are NaN.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geometry {
    /// size of one voxel (column spacing, row spacing, slice thickness)
    pub voxel_size: [f64; 3],
    /// space between voxels
    pub voxel_gap: [f64; 3],
    /// direction of the rows
    pub row_vec: [f64; 3],
    /// direction of the columns
    pub column_vec: [f64; 3],
    /// position of the first voxel
    pub origin: [f64; 3],
    /// field of view
    pub fov: Option<[f64; 3]>,
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            voxel_size: [f64::NAN; 3],
            voxel_gap: [0.; 3],
            row_vec: [1., 0., 0.],
            column_vec: [0., 1., 0.],
            origin: [0.; 3],
            fov: None,
        }
    }
}

impl Geometry {
    /// Gather the geometry from the image attributes of a data set.
    ///
    /// The tree is left untouched; missing attributes keep their default.
    pub fn from_tree(tree: &PropertyTree) -> Self {
        let mut geometry = Geometry::default();
        let floats = |name: &str| {
            tree.value(name)
                .and_then(|v| v.to_multi_f64().ok())
                .unwrap_or_default()
        };

        // row spacing comes first, which is the size along the columns
        if let [row_spacing, column_spacing, ..] = floats("PixelSpacing")[..] {
            geometry.voxel_size[0] = column_spacing;
            geometry.voxel_size[1] = row_spacing;
        }
        if let [thickness, ..] = floats("SliceThickness")[..] {
            geometry.voxel_size[2] = thickness;
            if let [spacing, ..] = floats("SpacingBetweenSlices")[..] {
                geometry.voxel_gap[2] = spacing - thickness;
            }
        }
        match floats("ImageOrientationPatient")[..] {
            [r0, r1, r2, c0, c1, c2] => {
                geometry.row_vec = [r0, r1, r2];
                geometry.column_vec = [c0, c1, c2];
            }
            [] => {}
            ref other => tracing::warn!(
                "Could not extract row and column vectors from {:?}",
                other
            ),
        }
        if let [x, y, z] = floats("ImagePositionPatient")[..] {
            geometry.origin = [x, y, z];
        }
        geometry.fov = tree
            .value("SiemensFieldOfView")
            .and_then(|v| parse_fov(&v.to_str()));
        geometry
    }
}

/// Parse the Siemens field of view string `FoV <columns>*<rows>`.
fn parse_fov(text: &str) -> Option<[f64; 3]> {
    let (column, row) = text.trim().strip_prefix("FoV")?.split_once('*')?;
    let column: f64 = column.trim().parse().ok()?;
    let row: f64 = row.trim().parse().ok()?;
    Some([row, column, f64::NAN])
}

/// The acquisition date and time of the image,
/// falling back to its content date and time.
pub fn acquisition_time(tree: &PropertyTree) -> Option<NaiveDateTime> {
    let time = ["AcquisitionTime", "ContentTime"]
        .iter()
        .find_map(|name| tree.value(name)?.to_time().ok())?;
    let date = ["AcquisitionDate", "ContentDate"]
        .iter()
        .find_map(|name| tree.value(name)?.to_date().ok())?;
    Some(date.and_time(time))
}

/// Whether the image type marks the image as a mosaic.
pub fn is_mosaic(tree: &PropertyTree) -> bool {
    crate::attribute::image_type(tree)
        .iter()
        .any(|t| t == "MOSAIC")
}

/// Decompose a mosaic image into a volume.
///
/// The bookkeeping attributes of the data set are updated:
/// the image type `MOSAIC` becomes `WAS_MOSAIC`,
/// and the slice count and acquisition time offsets are removed.
/// The origin and field of view of the image geometry are corrected
/// and, if the slice acquisition times are known,
/// one acquisition time per slice is computed.
pub fn decompose_mosaic(image: DecodedImage, tree: &mut PropertyTree) -> Result<DecodedImage> {
    ensure!(
        image.slices == 1,
        MosaicShapeSnafu {
            reason: "the image already has more than one slice"
        }
    );

    let image_type: Vec<String> = crate::attribute::image_type(tree)
        .into_iter()
        .map(|t| if t == "MOSAIC" { "WAS_MOSAIC".to_string() } else { t })
        .collect();

    let count_property = [SLICE_COUNT, CSA_SLICE_COUNT]
        .into_iter()
        .find(|name| tree.contains(name));
    let images: u32 = match count_property.and_then(|name| tree.value(name)?.to_int().ok()) {
        Some(images) => images,
        None => {
            let matrix = tree
                .value("AcquisitionMatrix")
                .and_then(|v| v.to_multi_int::<u32>().ok())
                .and_then(|m| m.first().copied())
                .filter(|&m| m > 0)
                .context(GuessSliceCountSnafu)?;
            let per_side = image.columns / matrix;
            let images = per_side * per_side;
            tracing::warn!(
                "Guessing number of slices in the mosaic as {}, this might be too many",
                images
            );
            images
        }
    };
    ensure!(
        images > 0,
        MosaicShapeSnafu {
            reason: "the mosaic has no slices"
        }
    );

    let matrix_size = f64::from(images).sqrt().ceil() as u32;
    let size = [
        image.columns / matrix_size,
        image.rows / matrix_size,
        images,
    ];
    ensure!(
        size[0] > 0 && size[1] > 0,
        MosaicShapeSnafu {
            reason: "the tiles are empty"
        }
    );
    tracing::debug!(
        "Decomposing a {}x{} mosaic image into a {}x{}x{} volume",
        image.columns,
        image.rows,
        size[0],
        size[1],
        size[2]
    );

    // remove the offset of the oversized mosaic canvas,
    // e.g. the half size of 9 images for a 10x10 mosaic
    let mut geometry = image.geometry;
    if geometry.voxel_size[..2].iter().any(|v| v.is_nan()) {
        tracing::warn!("Pixel spacing is unknown, the origin of the mosaic is left as is");
    } else {
        let fov_corr: [f64; 3] = std::array::from_fn(|i| {
            (geometry.voxel_size[i] + geometry.voxel_gap[i]) * f64::from(size[i])
                * f64::from(matrix_size - 1)
                / 2.
        });
        for i in 0..3 {
            geometry.origin[i] +=
                geometry.row_vec[i] * fov_corr[0] + geometry.column_vec[i] * fov_corr[1];
        }
    }
    if let Some(fov) = geometry.fov.as_mut() {
        fov[0] /= f64::from(matrix_size);
        fov[1] /= f64::from(matrix_size);
        fov[2] = geometry.voxel_size[2] * f64::from(images)
            + geometry.voxel_gap[2] * f64::from(images - 1);
    }

    if let Some(name) = count_property {
        tree.remove(name);
    }
    tree.set("ImageType", Value::Strs(image_type));

    let offsets = tree
        .value(CSA_ACQ_TIMES)
        .and_then(|v| v.to_multi_f64().ok());
    tree.remove(CSA_ACQ_TIMES);
    let acquisition_times = match (offsets, acquisition_time(tree)) {
        (Some(offsets), Some(base)) => {
            tracing::debug!("Acquisition time offsets of the mosaic slices: {:?}", offsets);
            offsets
                .iter()
                .take(images as usize)
                .map(|&ms| base + Duration::milliseconds(ms as i64))
                .collect()
        }
        (Some(_), None) => {
            tracing::info!(
                "Ignoring {} because there is no acquisition time",
                CSA_ACQ_TIMES
            );
            Vec::new()
        }
        (None, _) => Vec::new(),
    };

    let tiles = Tiles {
        source_columns: image.columns as usize,
        tile_columns: size[0] as usize,
        tile_rows: size[1] as usize,
        matrix_size: matrix_size as usize,
        images: images as usize,
    };
    let buffer = match &image.buffer {
        PixelBuffer::U8(v) => PixelBuffer::U8(tiles.split(v)),
        PixelBuffer::I8(v) => PixelBuffer::I8(tiles.split(v)),
        PixelBuffer::U16(v) => PixelBuffer::U16(tiles.split(v)),
        PixelBuffer::I16(v) => PixelBuffer::I16(tiles.split(v)),
        PixelBuffer::U32(v) => PixelBuffer::U32(tiles.split(v)),
        PixelBuffer::I32(v) => PixelBuffer::I32(tiles.split(v)),
        PixelBuffer::Rgb8(v) => PixelBuffer::Rgb8(tiles.split(v)),
        PixelBuffer::Rgb16(v) => PixelBuffer::Rgb16(tiles.split(v)),
    };

    Ok(DecodedImage {
        buffer,
        columns: size[0],
        rows: size[1],
        slices: size[2],
        geometry,
        acquisition_times,
    })
}

/// How the tiles are laid out in the mosaic.
struct Tiles {
    source_columns: usize,
    tile_columns: usize,
    tile_rows: usize,
    matrix_size: usize,
    images: usize,
}

impl Tiles {
    /// Copy each tile, line by line, into its own slice of the volume.
    fn split<T: Copy>(&self, source: &[T]) -> Vec<T> {
        let mut out = Vec::with_capacity(self.tile_columns * self.tile_rows * self.images);
        for slice in 0..self.images {
            let column = slice % self.matrix_size;
            let row = slice / self.matrix_size;
            for line in 0..self.tile_rows {
                let start = (row * self.tile_rows + line) * self.source_columns
                    + column * self.tile_columns;
                out.extend_from_slice(&source[start..start + self.tile_columns]);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmtree_core::chrono::{NaiveDate, NaiveTime};
    use rstest::rstest;

    /// A 2-D image whose samples encode their own position.
    fn mosaic(columns: u32, rows: u32) -> DecodedImage {
        let buffer = (0..rows)
            .flat_map(|y| (0..columns).map(move |x| y * 1000 + x))
            .collect();
        DecodedImage {
            buffer: PixelBuffer::U32(buffer),
            columns,
            rows,
            slices: 1,
            geometry: Geometry::default(),
            acquisition_times: Vec::new(),
        }
    }

    fn mosaic_tree(slices: u16) -> PropertyTree {
        let mut tree = PropertyTree::new();
        tree.set(
            "ImageType",
            Value::Strs(vec!["ORIGINAL".into(), "PRIMARY".into(), "MOSAIC".into()]),
        );
        tree.set(CSA_SLICE_COUNT, slices);
        tree
    }

    #[test]
    fn decomposes_16_slices() {
        let mut tree = mosaic_tree(16);
        let volume = decompose_mosaic(mosaic(256, 256), &mut tree).unwrap();
        assert_eq!((volume.columns, volume.rows, volume.slices), (64, 64, 16));
        let PixelBuffer::U32(voxels) = &volume.buffer else {
            panic!("unexpected buffer {:?}", volume.buffer.type_name());
        };
        assert_eq!(voxels.len(), 64 * 64 * 16);
        for slice in 0..16_usize {
            let (tile_x, tile_y) = (slice % 4 * 64, slice / 4 * 64);
            for (y, x) in [(0, 0), (5, 63), (63, 7), (63, 63)] {
                let voxel = voxels[slice * 64 * 64 + y * 64 + x];
                assert_eq!(voxel as usize, (tile_y + y) * 1000 + tile_x + x);
            }
        }

        assert_eq!(
            tree.value("ImageType").unwrap().to_multi_str(),
            ["ORIGINAL", "PRIMARY", "WAS_MOSAIC"]
        );
        assert!(!tree.contains(CSA_SLICE_COUNT));
    }

    #[rstest]
    #[case(9, 3)]
    #[case(10, 4)]
    #[case(2, 2)]
    fn incomplete_mosaics(#[case] slices: u16, #[case] matrix_size: u32) {
        let mut tree = mosaic_tree(slices);
        let volume = decompose_mosaic(mosaic(48, 48), &mut tree).unwrap();
        assert_eq!(volume.columns, 48 / matrix_size);
        assert_eq!(volume.slices, u32::from(slices));
        assert_eq!(
            volume.buffer.len(),
            (48 / matrix_size as usize).pow(2) * slices as usize
        );
    }

    #[test]
    fn guesses_slice_count() {
        let mut tree = PropertyTree::new();
        tree.set("ImageType", "MOSAIC");
        tree.set("AcquisitionMatrix", Value::Ints(vec![64, 0, 0, 64]));
        let volume = decompose_mosaic(mosaic(256, 256), &mut tree).unwrap();
        assert_eq!(volume.slices, 16);

        let mut tree = PropertyTree::new();
        assert!(matches!(
            decompose_mosaic(mosaic(256, 256), &mut tree),
            Err(crate::Error::GuessSliceCount { .. })
        ));
    }

    #[test]
    fn corrects_geometry() {
        let mut tree = mosaic_tree(16);
        let mut image = mosaic(256, 256);
        image.geometry = Geometry {
            voxel_size: [3., 3., 3.],
            voxel_gap: [0., 0., 0.5],
            origin: [-10., -20., 5.],
            fov: Some([768., 768., f64::NAN]),
            ..Geometry::default()
        };
        let volume = decompose_mosaic(image, &mut tree).unwrap();
        // (3 + 0) * 64 * 3 / 2
        assert_eq!(volume.geometry.origin, [278., 268., 5.]);
        assert_eq!(volume.geometry.fov, Some([192., 192., 3. * 16. + 0.5 * 15.]));
    }

    #[test]
    fn unknown_spacing_keeps_origin() {
        let mut tree = mosaic_tree(16);
        let mut image = mosaic(256, 256);
        image.geometry.origin = [-10., -20., 5.];
        let volume = decompose_mosaic(image, &mut tree).unwrap();
        assert_eq!(volume.geometry.origin, [-10., -20., 5.]);
        assert_eq!(volume.slices, 16);
    }

    #[test]
    fn slice_acquisition_times() {
        let mut tree = mosaic_tree(4);
        tree.set(CSA_ACQ_TIMES, Value::Floats(vec![0., 1500., 500., 2000.]));
        tree.set("AcquisitionDate", "20200501");
        tree.set("AcquisitionTime", "101500.000000");
        let volume = decompose_mosaic(mosaic(16, 16), &mut tree).unwrap();
        let base = NaiveDate::from_ymd_opt(2020, 5, 1)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(10, 15, 0).unwrap());
        assert_eq!(
            volume.acquisition_times,
            [
                base,
                base + Duration::milliseconds(1500),
                base + Duration::milliseconds(500),
                base + Duration::milliseconds(2000),
            ]
        );
        assert!(!tree.contains(CSA_ACQ_TIMES));

        let mut tree = mosaic_tree(4);
        tree.set(CSA_ACQ_TIMES, Value::Floats(vec![0., 1500., 500., 2000.]));
        let volume = decompose_mosaic(mosaic(16, 16), &mut tree).unwrap();
        assert!(volume.acquisition_times.is_empty());
        assert!(!tree.contains(CSA_ACQ_TIMES));
    }

    #[test]
    fn geometry_from_tree() {
        let mut tree = PropertyTree::new();
        tree.set("PixelSpacing", Value::Strs(vec!["0.5".into(), "0.8".into()]));
        tree.set("SliceThickness", "3");
        tree.set("SpacingBetweenSlices", "3.5");
        tree.set(
            "ImageOrientationPatient",
            Value::Strs(["1", "0", "0", "0", "0.6", "0.8"].map(String::from).to_vec()),
        );
        tree.set("ImagePositionPatient", Value::Floats(vec![1., 2., 3.]));
        tree.set("SiemensFieldOfView", "FoV 220*240");
        let geometry = Geometry::from_tree(&tree);
        assert_eq!(geometry.voxel_size, [0.8, 0.5, 3.]);
        assert_eq!(geometry.voxel_gap, [0., 0., 0.5]);
        assert_eq!(geometry.row_vec, [1., 0., 0.]);
        assert_eq!(geometry.column_vec, [0., 0.6, 0.8]);
        assert_eq!(geometry.origin, [1., 2., 3.]);
        let fov = geometry.fov.unwrap();
        assert_eq!(fov[..2], [240., 220.]);
        assert!(fov[2].is_nan());
    }
}
