//! Tag constants and the entries of the standard dictionary.
//!
//! Besides the attributes of the DICOM standard,
//! this module names a few vendor private attributes
//! (Siemens and Philips) which consumers of decoded files rely on.
use dcmtree_core::dictionary::DictionaryEntry;
use dcmtree_core::header::{Tag, VR::*};

type E = DictionaryEntry;

/// FileMetaInformationGroupLength (0002,0000) UL
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// PrivateInformationCreatorUID (0002,0100) UI
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// PrivateInformation (0002,0102) OB
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// SpecificCharacterSet (0008,0005) CS
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType (0008,0008) CS
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate (0008,0012) DA
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// SOPClassUID (0008,0016) UI
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate (0008,0020) DA
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023) DA
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// AcquisitionDateTime (0008,002A) DT
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// StudyTime (0008,0030) TM
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032) TM
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime (0008,0033) TM
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber (0008,0050) SH
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Modality (0008,0060) CS
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ConversionType (0008,0064) CS
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Manufacturer (0008,0070) LO
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// InstitutionAddress (0008,0081) ST
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// ReferringPhysicianName (0008,0090) PN
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// StationName (0008,1010) SH
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// StudyDescription (0008,1030) LO
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// SeriesDescription (0008,103E) LO
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// InstitutionalDepartmentName (0008,1040) LO
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// PerformingPhysicianName (0008,1050) PN
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// OperatorsName (0008,1070) PN
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// ManufacturerModelName (0008,1090) LO
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedImageSequence (0008,1140) SQ
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedSOPClassUID (0008,1150) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// PixelPresentation (0008,9205) CS
#[rustfmt::skip]
pub const PIXEL_PRESENTATION: Tag = Tag(0x0008, 0x9205);
/// PatientName (0010,0010) PN
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// PatientBirthDate (0010,0030) DA
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientSex (0010,0040) CS
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// PatientAge (0010,1010) AS
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020) DS
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientWeight (0010,1030) DS
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// AdditionalPatientHistory (0010,21B0) LT
#[rustfmt::skip]
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// BodyPartExamined (0018,0015) CS
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// ScanningSequence (0018,0020) CS
#[rustfmt::skip]
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// SequenceVariant (0018,0021) CS
#[rustfmt::skip]
pub const SEQUENCE_VARIANT: Tag = Tag(0x0018, 0x0021);
/// ScanOptions (0018,0022) CS
#[rustfmt::skip]
pub const SCAN_OPTIONS: Tag = Tag(0x0018, 0x0022);
/// MRAcquisitionType (0018,0023) CS
#[rustfmt::skip]
pub const MR_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x0023);
/// SequenceName (0018,0024) SH
#[rustfmt::skip]
pub const SEQUENCE_NAME: Tag = Tag(0x0018, 0x0024);
/// SliceThickness (0018,0050) DS
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// RepetitionTime (0018,0080) DS
#[rustfmt::skip]
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
/// EchoTime (0018,0081) DS
#[rustfmt::skip]
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);
/// InversionTime (0018,0082) DS
#[rustfmt::skip]
pub const INVERSION_TIME: Tag = Tag(0x0018, 0x0082);
/// NumberOfAverages (0018,0083) DS
#[rustfmt::skip]
pub const NUMBER_OF_AVERAGES: Tag = Tag(0x0018, 0x0083);
/// ImagingFrequency (0018,0084) DS
#[rustfmt::skip]
pub const IMAGING_FREQUENCY: Tag = Tag(0x0018, 0x0084);
/// ImagedNucleus (0018,0085) SH
#[rustfmt::skip]
pub const IMAGED_NUCLEUS: Tag = Tag(0x0018, 0x0085);
/// EchoNumbers (0018,0086) IS
#[rustfmt::skip]
pub const ECHO_NUMBERS: Tag = Tag(0x0018, 0x0086);
/// MagneticFieldStrength (0018,0087) DS
#[rustfmt::skip]
pub const MAGNETIC_FIELD_STRENGTH: Tag = Tag(0x0018, 0x0087);
/// SpacingBetweenSlices (0018,0088) DS
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// EchoTrainLength (0018,0091) IS
#[rustfmt::skip]
pub const ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x0091);
/// PixelBandwidth (0018,0095) DS
#[rustfmt::skip]
pub const PIXEL_BANDWIDTH: Tag = Tag(0x0018, 0x0095);
/// DeviceSerialNumber (0018,1000) LO
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// SoftwareVersions (0018,1020) LO
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// ProtocolName (0018,1030) LO
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// ImagerPixelSpacing (0018,1164) DS
#[rustfmt::skip]
pub const IMAGER_PIXEL_SPACING: Tag = Tag(0x0018, 0x1164);
/// ReceiveCoilName (0018,1250) SH
#[rustfmt::skip]
pub const RECEIVE_COIL_NAME: Tag = Tag(0x0018, 0x1250);
/// AcquisitionMatrix (0018,1310) US
#[rustfmt::skip]
pub const ACQUISITION_MATRIX: Tag = Tag(0x0018, 0x1310);
/// InPlanePhaseEncodingDirection (0018,1312) CS
#[rustfmt::skip]
pub const IN_PLANE_PHASE_ENCODING_DIRECTION: Tag = Tag(0x0018, 0x1312);
/// FlipAngle (0018,1314) DS
#[rustfmt::skip]
pub const FLIP_ANGLE: Tag = Tag(0x0018, 0x1314);
/// SAR (0018,1316) DS
#[rustfmt::skip]
pub const SAR: Tag = Tag(0x0018, 0x1316);
/// PatientPosition (0018,5100) CS
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// DiffusionBValue (0018,9087) FD
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE: Tag = Tag(0x0018, 0x9087);
/// DiffusionGradientOrientation (0018,9089) FD
#[rustfmt::skip]
pub const DIFFUSION_GRADIENT_ORIENTATION: Tag = Tag(0x0018, 0x9089);
/// MRDiffusionSequence (0018,9117) SQ
#[rustfmt::skip]
pub const MR_DIFFUSION_SEQUENCE: Tag = Tag(0x0018, 0x9117);
/// SiemensNumberOfImagesInMosaic (0019,100A) US
#[rustfmt::skip]
pub const SIEMENS_NUMBER_OF_IMAGES_IN_MOSAIC: Tag = Tag(0x0019, 0x100A);
/// SiemensSliceMeasurementDuration (0019,100B) DS
#[rustfmt::skip]
pub const SIEMENS_SLICE_MEASUREMENT_DURATION: Tag = Tag(0x0019, 0x100B);
/// SiemensDiffusionBValue (0019,100C) IS
#[rustfmt::skip]
pub const SIEMENS_DIFFUSION_B_VALUE: Tag = Tag(0x0019, 0x100C);
/// SiemensDiffusionDirectionality (0019,100D) CS
#[rustfmt::skip]
pub const SIEMENS_DIFFUSION_DIRECTIONALITY: Tag = Tag(0x0019, 0x100D);
/// SiemensDiffusionGradientOrientation (0019,100E) FD
#[rustfmt::skip]
pub const SIEMENS_DIFFUSION_GRADIENT_ORIENTATION: Tag = Tag(0x0019, 0x100E);
/// SiemensBMatrix (0019,1027) FD
#[rustfmt::skip]
pub const SIEMENS_B_MATRIX: Tag = Tag(0x0019, 0x1027);
/// SiemensBandwidthPerPixelPhaseEncode (0019,1028) FD
#[rustfmt::skip]
pub const SIEMENS_BANDWIDTH_PER_PIXEL_PHASE_ENCODE: Tag = Tag(0x0019, 0x1028);
/// SiemensMosaicRefAcqTimes (0019,1029) FD
#[rustfmt::skip]
pub const SIEMENS_MOSAIC_REF_ACQ_TIMES: Tag = Tag(0x0019, 0x1029);
/// StudyInstanceUID (0020,000D) UI
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber (0020,0012) IS
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber (0020,0013) IS
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// ImagePositionPatient (0020,0032) DS
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037) DS
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID (0020,0052) UI
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// PositionReferenceIndicator (0020,1040) LO
#[rustfmt::skip]
pub const POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x1040);
/// SliceLocation (0020,1041) DS
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// ImageComments (0020,4000) LT
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// PlanePositionSequence (0020,9113) SQ
#[rustfmt::skip]
pub const PLANE_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9113);
/// PlaneOrientationSequence (0020,9116) SQ
#[rustfmt::skip]
pub const PLANE_ORIENTATION_SEQUENCE: Tag = Tag(0x0020, 0x9116);
/// SamplesPerPixel (0028,0002) US
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration (0028,0006) US
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Rows (0028,0010) US
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// PixelAspectRatio (0028,0034) IS
#[rustfmt::skip]
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// BitsAllocated (0028,0100) US
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue (0028,0106) US
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107) US
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// WindowCenter (0028,1050) DS
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType (0028,1054) LO
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// LossyImageCompression (0028,2110) CS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// PixelMeasuresSequence (0028,9110) SQ
#[rustfmt::skip]
pub const PIXEL_MEASURES_SEQUENCE: Tag = Tag(0x0028, 0x9110);
/// SiemensCSAImageHeaderType (0029,1008) CS
#[rustfmt::skip]
pub const SIEMENS_CSA_IMAGE_HEADER_TYPE: Tag = Tag(0x0029, 0x1008);
/// SiemensCSAImageHeaderVersion (0029,1009) LO
#[rustfmt::skip]
pub const SIEMENS_CSA_IMAGE_HEADER_VERSION: Tag = Tag(0x0029, 0x1009);
/// SiemensCSAImageHeaderInfo (0029,1010) OB
#[rustfmt::skip]
pub const SIEMENS_CSA_IMAGE_HEADER_INFO: Tag = Tag(0x0029, 0x1010);
/// SiemensCSASeriesHeaderType (0029,1018) CS
#[rustfmt::skip]
pub const SIEMENS_CSA_SERIES_HEADER_TYPE: Tag = Tag(0x0029, 0x1018);
/// SiemensCSASeriesHeaderVersion (0029,1019) LO
#[rustfmt::skip]
pub const SIEMENS_CSA_SERIES_HEADER_VERSION: Tag = Tag(0x0029, 0x1019);
/// SiemensCSASeriesHeaderInfo (0029,1020) OB
#[rustfmt::skip]
pub const SIEMENS_CSA_SERIES_HEADER_INFO: Tag = Tag(0x0029, 0x1020);
/// RequestedProcedureDescription (0032,1060) LO
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// PerformedProcedureStepStartDate (0040,0244) DA
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// PerformedProcedureStepStartTime (0040,0245) TM
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// PerformedProcedureStepID (0040,0253) SH
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// PerformedProcedureStepDescription (0040,0254) LO
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// RealWorldValueMappingSequence (0040,9096) SQ
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9096);
/// RealWorldValueIntercept (0040,9224) FD
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_INTERCEPT: Tag = Tag(0x0040, 0x9224);
/// RealWorldValueSlope (0040,9225) FD
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_SLOPE: Tag = Tag(0x0040, 0x9225);
/// SiemensFieldOfView (0051,100C) LO
#[rustfmt::skip]
pub const SIEMENS_FIELD_OF_VIEW: Tag = Tag(0x0051, 0x100C);
/// StorageMediaFileSetUID (0088,0140) UI
#[rustfmt::skip]
pub const STORAGE_MEDIA_FILE_SET_UID: Tag = Tag(0x0088, 0x0140);
/// PhilipsScaleIntercept (2005,100D) FL
#[rustfmt::skip]
pub const PHILIPS_SCALE_INTERCEPT: Tag = Tag(0x2005, 0x100D);
/// PhilipsScaleSlope (2005,100E) FL
#[rustfmt::skip]
pub const PHILIPS_SCALE_SLOPE: Tag = Tag(0x2005, 0x100E);
/// PhilipsPrivateSequence (2005,140F) SQ
#[rustfmt::skip]
pub const PHILIPS_PRIVATE_SEQUENCE: Tag = Tag(0x2005, 0x140F);
/// SharedFunctionalGroupsSequence (5200,9229) SQ
#[rustfmt::skip]
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
/// PerFrameFunctionalGroupsSequence (5200,9230) SQ
#[rustfmt::skip]
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
/// PixelData (7FE0,0010) OW
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// DataSetTrailingPadding (FFFC,FFFC) OB
#[rustfmt::skip]
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);

#[rustfmt::skip]
pub(crate) static ENTRIES: &[E] = &[
    E::new(FILE_META_INFORMATION_GROUP_LENGTH, Some(UL), "FileMetaInformationGroupLength"),
    E::new(FILE_META_INFORMATION_VERSION, Some(OB), "FileMetaInformationVersion"),
    E::new(MEDIA_STORAGE_SOP_CLASS_UID, Some(UI), "MediaStorageSOPClassUID"),
    E::new(MEDIA_STORAGE_SOP_INSTANCE_UID, Some(UI), "MediaStorageSOPInstanceUID"),
    E::new(TRANSFER_SYNTAX_UID, Some(UI), "TransferSyntaxUID"),
    E::new(IMPLEMENTATION_CLASS_UID, Some(UI), "ImplementationClassUID"),
    E::new(IMPLEMENTATION_VERSION_NAME, Some(SH), "ImplementationVersionName"),
    E::new(SOURCE_APPLICATION_ENTITY_TITLE, Some(AE), "SourceApplicationEntityTitle"),
    E::new(PRIVATE_INFORMATION_CREATOR_UID, Some(UI), "PrivateInformationCreatorUID"),
    E::new(PRIVATE_INFORMATION, Some(OB), "PrivateInformation"),
    E::new(SPECIFIC_CHARACTER_SET, Some(CS), "SpecificCharacterSet"),
    E::new(IMAGE_TYPE, Some(CS), "ImageType"),
    E::new(INSTANCE_CREATION_DATE, Some(DA), "InstanceCreationDate"),
    E::new(INSTANCE_CREATION_TIME, Some(TM), "InstanceCreationTime"),
    E::new(SOP_CLASS_UID, Some(UI), "SOPClassUID"),
    E::new(SOP_INSTANCE_UID, Some(UI), "SOPInstanceUID"),
    E::new(STUDY_DATE, Some(DA), "StudyDate"),
    E::new(SERIES_DATE, Some(DA), "SeriesDate"),
    E::new(ACQUISITION_DATE, Some(DA), "AcquisitionDate"),
    E::new(CONTENT_DATE, Some(DA), "ContentDate"),
    E::new(ACQUISITION_DATE_TIME, Some(DT), "AcquisitionDateTime"),
    E::new(STUDY_TIME, Some(TM), "StudyTime"),
    E::new(SERIES_TIME, Some(TM), "SeriesTime"),
    E::new(ACQUISITION_TIME, Some(TM), "AcquisitionTime"),
    E::new(CONTENT_TIME, Some(TM), "ContentTime"),
    E::new(ACCESSION_NUMBER, Some(SH), "AccessionNumber"),
    E::new(MODALITY, Some(CS), "Modality"),
    E::new(CONVERSION_TYPE, Some(CS), "ConversionType"),
    E::new(MANUFACTURER, Some(LO), "Manufacturer"),
    E::new(INSTITUTION_NAME, Some(LO), "InstitutionName"),
    E::new(INSTITUTION_ADDRESS, Some(ST), "InstitutionAddress"),
    E::new(REFERRING_PHYSICIAN_NAME, Some(PN), "ReferringPhysicianName"),
    E::new(STATION_NAME, Some(SH), "StationName"),
    E::new(STUDY_DESCRIPTION, Some(LO), "StudyDescription"),
    E::new(SERIES_DESCRIPTION, Some(LO), "SeriesDescription"),
    E::new(INSTITUTIONAL_DEPARTMENT_NAME, Some(LO), "InstitutionalDepartmentName"),
    E::new(PERFORMING_PHYSICIAN_NAME, Some(PN), "PerformingPhysicianName"),
    E::new(OPERATORS_NAME, Some(PN), "OperatorsName"),
    E::new(MANUFACTURER_MODEL_NAME, Some(LO), "ManufacturerModelName"),
    E::new(REFERENCED_IMAGE_SEQUENCE, Some(SQ), "ReferencedImageSequence"),
    E::new(REFERENCED_SOP_CLASS_UID, Some(UI), "ReferencedSOPClassUID"),
    E::new(REFERENCED_SOP_INSTANCE_UID, Some(UI), "ReferencedSOPInstanceUID"),
    E::new(PIXEL_PRESENTATION, Some(CS), "PixelPresentation"),
    E::new(PATIENT_NAME, Some(PN), "PatientName"),
    E::new(PATIENT_ID, Some(LO), "PatientID"),
    E::new(PATIENT_BIRTH_DATE, Some(DA), "PatientBirthDate"),
    E::new(PATIENT_SEX, Some(CS), "PatientSex"),
    E::new(PATIENT_AGE, Some(AS), "PatientAge"),
    E::new(PATIENT_SIZE, Some(DS), "PatientSize"),
    E::new(PATIENT_WEIGHT, Some(DS), "PatientWeight"),
    E::new(ADDITIONAL_PATIENT_HISTORY, Some(LT), "AdditionalPatientHistory"),
    E::new(BODY_PART_EXAMINED, Some(CS), "BodyPartExamined"),
    E::new(SCANNING_SEQUENCE, Some(CS), "ScanningSequence"),
    E::new(SEQUENCE_VARIANT, Some(CS), "SequenceVariant"),
    E::new(SCAN_OPTIONS, Some(CS), "ScanOptions"),
    E::new(MR_ACQUISITION_TYPE, Some(CS), "MRAcquisitionType"),
    E::new(SEQUENCE_NAME, Some(SH), "SequenceName"),
    E::new(SLICE_THICKNESS, Some(DS), "SliceThickness"),
    E::new(KVP, Some(DS), "KVP"),
    E::new(REPETITION_TIME, Some(DS), "RepetitionTime"),
    E::new(ECHO_TIME, Some(DS), "EchoTime"),
    E::new(INVERSION_TIME, Some(DS), "InversionTime"),
    E::new(NUMBER_OF_AVERAGES, Some(DS), "NumberOfAverages"),
    E::new(IMAGING_FREQUENCY, Some(DS), "ImagingFrequency"),
    E::new(IMAGED_NUCLEUS, Some(SH), "ImagedNucleus"),
    E::new(ECHO_NUMBERS, Some(IS), "EchoNumbers"),
    E::new(MAGNETIC_FIELD_STRENGTH, Some(DS), "MagneticFieldStrength"),
    E::new(SPACING_BETWEEN_SLICES, Some(DS), "SpacingBetweenSlices"),
    E::new(ECHO_TRAIN_LENGTH, Some(IS), "EchoTrainLength"),
    E::new(PIXEL_BANDWIDTH, Some(DS), "PixelBandwidth"),
    E::new(DEVICE_SERIAL_NUMBER, Some(LO), "DeviceSerialNumber"),
    E::new(SOFTWARE_VERSIONS, Some(LO), "SoftwareVersions"),
    E::new(PROTOCOL_NAME, Some(LO), "ProtocolName"),
    E::new(IMAGER_PIXEL_SPACING, Some(DS), "ImagerPixelSpacing"),
    E::new(RECEIVE_COIL_NAME, Some(SH), "ReceiveCoilName"),
    E::new(ACQUISITION_MATRIX, Some(US), "AcquisitionMatrix"),
    E::new(IN_PLANE_PHASE_ENCODING_DIRECTION, Some(CS), "InPlanePhaseEncodingDirection"),
    E::new(FLIP_ANGLE, Some(DS), "FlipAngle"),
    E::new(SAR, Some(DS), "SAR"),
    E::new(PATIENT_POSITION, Some(CS), "PatientPosition"),
    E::new(DIFFUSION_B_VALUE, Some(FD), "DiffusionBValue"),
    E::new(DIFFUSION_GRADIENT_ORIENTATION, Some(FD), "DiffusionGradientOrientation"),
    E::new(MR_DIFFUSION_SEQUENCE, Some(SQ), "MRDiffusionSequence"),
    E::new(SIEMENS_NUMBER_OF_IMAGES_IN_MOSAIC, Some(US), "SiemensNumberOfImagesInMosaic"),
    E::new(SIEMENS_SLICE_MEASUREMENT_DURATION, Some(DS), "SiemensSliceMeasurementDuration"),
    E::new(SIEMENS_DIFFUSION_B_VALUE, Some(IS), "SiemensDiffusionBValue"),
    E::new(SIEMENS_DIFFUSION_DIRECTIONALITY, Some(CS), "SiemensDiffusionDirectionality"),
    E::new(SIEMENS_DIFFUSION_GRADIENT_ORIENTATION, Some(FD), "SiemensDiffusionGradientOrientation"),
    E::new(SIEMENS_B_MATRIX, Some(FD), "SiemensBMatrix"),
    E::new(SIEMENS_BANDWIDTH_PER_PIXEL_PHASE_ENCODE, Some(FD), "SiemensBandwidthPerPixelPhaseEncode"),
    E::new(SIEMENS_MOSAIC_REF_ACQ_TIMES, Some(FD), "SiemensMosaicRefAcqTimes"),
    E::new(STUDY_INSTANCE_UID, Some(UI), "StudyInstanceUID"),
    E::new(SERIES_INSTANCE_UID, Some(UI), "SeriesInstanceUID"),
    E::new(STUDY_ID, Some(SH), "StudyID"),
    E::new(SERIES_NUMBER, Some(IS), "SeriesNumber"),
    E::new(ACQUISITION_NUMBER, Some(IS), "AcquisitionNumber"),
    E::new(INSTANCE_NUMBER, Some(IS), "InstanceNumber"),
    E::new(IMAGE_POSITION_PATIENT, Some(DS), "ImagePositionPatient"),
    E::new(IMAGE_ORIENTATION_PATIENT, Some(DS), "ImageOrientationPatient"),
    E::new(FRAME_OF_REFERENCE_UID, Some(UI), "FrameOfReferenceUID"),
    E::new(POSITION_REFERENCE_INDICATOR, Some(LO), "PositionReferenceIndicator"),
    E::new(SLICE_LOCATION, Some(DS), "SliceLocation"),
    E::new(IMAGE_COMMENTS, Some(LT), "ImageComments"),
    E::new(PLANE_POSITION_SEQUENCE, Some(SQ), "PlanePositionSequence"),
    E::new(PLANE_ORIENTATION_SEQUENCE, Some(SQ), "PlaneOrientationSequence"),
    E::new(SAMPLES_PER_PIXEL, Some(US), "SamplesPerPixel"),
    E::new(PHOTOMETRIC_INTERPRETATION, Some(CS), "PhotometricInterpretation"),
    E::new(PLANAR_CONFIGURATION, Some(US), "PlanarConfiguration"),
    E::new(NUMBER_OF_FRAMES, Some(IS), "NumberOfFrames"),
    E::new(ROWS, Some(US), "Rows"),
    E::new(COLUMNS, Some(US), "Columns"),
    E::new(PIXEL_SPACING, Some(DS), "PixelSpacing"),
    E::new(PIXEL_ASPECT_RATIO, Some(IS), "PixelAspectRatio"),
    E::new(BITS_ALLOCATED, Some(US), "BitsAllocated"),
    E::new(BITS_STORED, Some(US), "BitsStored"),
    E::new(HIGH_BIT, Some(US), "HighBit"),
    E::new(PIXEL_REPRESENTATION, Some(US), "PixelRepresentation"),
    E::new(SMALLEST_IMAGE_PIXEL_VALUE, Some(US), "SmallestImagePixelValue"),
    E::new(LARGEST_IMAGE_PIXEL_VALUE, Some(US), "LargestImagePixelValue"),
    E::new(WINDOW_CENTER, Some(DS), "WindowCenter"),
    E::new(WINDOW_WIDTH, Some(DS), "WindowWidth"),
    E::new(RESCALE_INTERCEPT, Some(DS), "RescaleIntercept"),
    E::new(RESCALE_SLOPE, Some(DS), "RescaleSlope"),
    E::new(RESCALE_TYPE, Some(LO), "RescaleType"),
    E::new(LOSSY_IMAGE_COMPRESSION, Some(CS), "LossyImageCompression"),
    E::new(PIXEL_MEASURES_SEQUENCE, Some(SQ), "PixelMeasuresSequence"),
    E::new(SIEMENS_CSA_IMAGE_HEADER_TYPE, Some(CS), "SiemensCSAImageHeaderType"),
    E::new(SIEMENS_CSA_IMAGE_HEADER_VERSION, Some(LO), "SiemensCSAImageHeaderVersion"),
    E::new(SIEMENS_CSA_IMAGE_HEADER_INFO, Some(OB), "SiemensCSAImageHeaderInfo"),
    E::new(SIEMENS_CSA_SERIES_HEADER_TYPE, Some(CS), "SiemensCSASeriesHeaderType"),
    E::new(SIEMENS_CSA_SERIES_HEADER_VERSION, Some(LO), "SiemensCSASeriesHeaderVersion"),
    E::new(SIEMENS_CSA_SERIES_HEADER_INFO, Some(OB), "SiemensCSASeriesHeaderInfo"),
    E::new(REQUESTED_PROCEDURE_DESCRIPTION, Some(LO), "RequestedProcedureDescription"),
    E::new(PERFORMED_PROCEDURE_STEP_START_DATE, Some(DA), "PerformedProcedureStepStartDate"),
    E::new(PERFORMED_PROCEDURE_STEP_START_TIME, Some(TM), "PerformedProcedureStepStartTime"),
    E::new(PERFORMED_PROCEDURE_STEP_ID, Some(SH), "PerformedProcedureStepID"),
    E::new(PERFORMED_PROCEDURE_STEP_DESCRIPTION, Some(LO), "PerformedProcedureStepDescription"),
    E::new(REAL_WORLD_VALUE_MAPPING_SEQUENCE, Some(SQ), "RealWorldValueMappingSequence"),
    E::new(REAL_WORLD_VALUE_INTERCEPT, Some(FD), "RealWorldValueIntercept"),
    E::new(REAL_WORLD_VALUE_SLOPE, Some(FD), "RealWorldValueSlope"),
    E::new(SIEMENS_FIELD_OF_VIEW, Some(LO), "SiemensFieldOfView"),
    E::new(STORAGE_MEDIA_FILE_SET_UID, Some(UI), "StorageMediaFileSetUID"),
    E::new(PHILIPS_SCALE_INTERCEPT, Some(FL), "PhilipsScaleIntercept"),
    E::new(PHILIPS_SCALE_SLOPE, Some(FL), "PhilipsScaleSlope"),
    E::new(PHILIPS_PRIVATE_SEQUENCE, Some(SQ), "PhilipsPrivateSequence"),
    E::new(SHARED_FUNCTIONAL_GROUPS_SEQUENCE, Some(SQ), "SharedFunctionalGroupsSequence"),
    E::new(PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE, Some(SQ), "PerFrameFunctionalGroupsSequence"),
    E::new(PIXEL_DATA, Some(OW), "PixelData"),
    E::new(DATA_SET_TRAILING_PADDING, Some(OB), "DataSetTrailingPadding"),
];
