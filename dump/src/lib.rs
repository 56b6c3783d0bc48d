//! Decoded DICOM file dumping library
//!
//! This is a helper library
//! for printing the contents of a decoded file in a human readable way:
//! the file meta group, every property of the decoded tree,
//! the binary values left aside, and a summary of the reconstructed image.
//!
//! # Examples
//!
//! ```no_run
//! use dcmtree_object::open_file;
//! use dcmtree_dump::DumpOptions;
//!
//! let mut file = open_file("path/to/file.dcm")?;
//! let mut options = DumpOptions::new();
//! // dump to stdout (width = 100)
//! options.width(100).dump_file(&mut file)?;
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```
use dcmtree_core::{DataDictionary, Property, Value};
use dcmtree_dictionary_std::StandardDataDictionary;
use dcmtree_object::{DicomFile, FileMetaTable, TransferSyntax};
use dcmtree_pixeldata::{DecodedImage, PixelDecoder};
use owo_colors::*;
use snafu::Report;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::io::{stdout, Result as IoResult, Write};
use std::str::FromStr;

/// Options and flags to configure how to dump a decoded file.
///
/// # Example
///
/// ```no_run
/// use dcmtree_object::open_file;
/// use dcmtree_dump::{ColorMode, DumpOptions};
///
/// let mut file = open_file("/path_to_file")?;
/// DumpOptions::new()
///     // maximum 120 characters per line
///     .width(120)
///     // never print colored output
///     .color_mode(ColorMode::Never)
///     // only the tree
///     .no_pixels(true)
///     .dump_file(&mut file)?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct DumpOptions {
    /// whether to produce colored output
    pub color: ColorMode,
    /// the console width to assume when trimming long values
    pub width: Option<u32>,
    /// never trim out any values
    pub no_limit: bool,
    /// do not reconstruct the image
    pub no_pixels: bool,
}

impl DumpOptions {
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the maximum output width in number of characters.
    pub fn width(&mut self, width: u32) -> &mut Self {
        self.width = Some(width);
        self
    }

    /// Set the maximum output width to automatic,
    /// based on terminal size.
    ///
    /// This is the default behavior.
    /// If a terminal width could not be determined,
    /// the default width of 120 characters is used.
    pub fn width_auto(&mut self) -> &mut Self {
        self.width = None;
        self
    }

    /// Set whether to remove the maximum width restriction for all values.
    pub fn no_limit(&mut self, no_limit: bool) -> &mut Self {
        self.no_limit = no_limit;
        self
    }

    /// Set whether to skip image reconstruction.
    pub fn no_pixels(&mut self, no_pixels: bool) -> &mut Self {
        self.no_pixels = no_pixels;
        self
    }

    /// Set the output color mode.
    pub fn color_mode(&mut self, color: ColorMode) -> &mut Self {
        self.color = color;
        self
    }

    /// Dump the contents of a decoded file to standard output.
    ///
    /// Unless disabled, the image is reconstructed first,
    /// which may update the mosaic attributes of the tree.
    pub fn dump_file(&self, file: &mut DicomFile) -> IoResult<()> {
        self.dump_file_impl(stdout(), file, true)
    }

    /// Dump the contents of a decoded file to the given writer.
    ///
    /// Values are never trimmed and output is only colored
    /// if [`ColorMode::Always`] is set.
    pub fn dump_file_to(&self, to: impl Write, file: &mut DicomFile) -> IoResult<()> {
        self.dump_file_impl(to, file, false)
    }

    fn dump_file_impl(&self, mut to: impl Write, file: &mut DicomFile, to_stdout: bool) -> IoResult<()> {
        match (self.color, to_stdout) {
            (ColorMode::Never, _) => owo_colors::set_override(false),
            (ColorMode::Always, _) => owo_colors::set_override(true),
            (ColorMode::Auto, false) => owo_colors::set_override(false),
            (ColorMode::Auto, true) => owo_colors::unset_override(),
        }

        let width = determine_width(self.width);
        let max_characters = if to_stdout && !self.no_limit {
            Some(width.saturating_sub(44))
        } else {
            None
        };

        let image = if self.no_pixels {
            None
        } else {
            Some(file.load_image())
        };

        meta_dump(&mut to, file.meta(), file.transfer_syntax())?;
        writeln!(to, "{:-<58}", "")?;
        tree_dump(&mut to, file, max_characters)?;

        match image {
            None => {}
            Some(Ok(image)) => {
                writeln!(to, "{:-<58}", "")?;
                image_dump(&mut to, &image)?;
            }
            Some(Err(e)) => {
                writeln!(to, "{:-<58}", "")?;
                writeln!(
                    to,
                    "{}: {}",
                    "Image".if_supports_color(Stream::Stdout, |v| v.bold()),
                    DumpValue::Invalid(Report::from_error(e).to_string()),
                )?;
            }
        }
        Ok(())
    }
}

/// Enumeration of output coloring modes.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ColorMode {
    /// Produce colored output if supported by the destination
    /// (namely, if the destination is a terminal).
    /// When calling [`dump_file_to`](DumpOptions::dump_file_to),
    /// the output will not be colored.
    ///
    /// This is the default behavior.
    #[default]
    Auto,
    /// Never produce colored output.
    Never,
    /// Always produce colored output.
    Always,
}

impl Display for ColorMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Never => f.write_str("never"),
            ColorMode::Auto => f.write_str("auto"),
            ColorMode::Always => f.write_str("always"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = ColorModeError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "never" => Ok(ColorMode::Never),
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            _ => Err(ColorModeError),
        }
    }
}

/// The error raised when providing an invalid color mode.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct ColorModeError;

impl Display for ColorModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("invalid color mode")
    }
}

impl std::error::Error for ColorModeError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DumpValue<T>
where
    T: ToString,
{
    Path(T),
    Num(T),
    Str(T),
    DateTime(T),
    Invalid(T),
}

impl<T> Display for DumpValue<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        fn write_value_with_width(value: impl Display, f: &mut Formatter) -> fmt::Result {
            if let Some(width) = f.width() {
                write!(f, "{:width$}", value, width = width)
            } else {
                write!(f, "{}", value)
            }
        }

        match self {
            DumpValue::Path(v) => {
                let value = v.if_supports_color(Stream::Stdout, |v| v.bold());
                write_value_with_width(value, f)
            }
            DumpValue::Num(v) => {
                let value = v.if_supports_color(Stream::Stdout, |v| v.cyan());
                write_value_with_width(value, f)
            }
            DumpValue::Str(v) => {
                let value = v.if_supports_color(Stream::Stdout, |v| v.yellow());
                write_value_with_width(value, f)
            }
            DumpValue::DateTime(v) => {
                let value = v.if_supports_color(Stream::Stdout, |v| v.green());
                write_value_with_width(value, f)
            }
            DumpValue::Invalid(v) => {
                let value = v.if_supports_color(Stream::Stdout, |v| v.red());
                write_value_with_width(value, f)
            }
        }
    }
}

/// Dump the contents of a decoded file to stdout.
pub fn dump_file(file: &mut DicomFile) -> IoResult<()> {
    DumpOptions::new().dump_file(file)
}

/// Dump the contents of a decoded file to the given writer.
pub fn dump_file_to(to: impl Write, file: &mut DicomFile) -> IoResult<()> {
    DumpOptions::new().dump_file_to(to, file)
}

fn meta_dump<W>(to: &mut W, meta: &FileMetaTable, ts: TransferSyntax) -> IoResult<()>
where
    W: ?Sized + Write,
{
    let mut line = |name: &str, value: &str| {
        writeln!(
            to,
            "{}: {}",
            name.if_supports_color(Stream::Stdout, |v| v.bold()),
            value
        )
    };

    if let Some(uid) = meta.media_storage_sop_class_uid.as_deref() {
        line("Media Storage SOP Class UID", uid)?;
    }
    if let Some(uid) = meta.media_storage_sop_instance_uid.as_deref() {
        line("Media Storage SOP Instance UID", uid)?;
    }
    line(
        "Transfer Syntax",
        &format!("{} ({})", meta.transfer_syntax(), ts.name()),
    )?;
    if let Some(uid) = meta.implementation_class_uid.as_deref() {
        line("Implementation Class UID", uid)?;
    }
    if let Some(name) = meta.implementation_version_name.as_deref() {
        line("Implementation version name", name)?;
    }
    if let Some(title) = meta.source_application_entity_title.as_deref() {
        line("Source Application Entity Title", title)?;
    }

    writeln!(to)?;
    Ok(())
}

fn tree_dump<W>(to: &mut W, file: &DicomFile, max_characters: Option<u32>) -> IoResult<()>
where
    W: ?Sized + Write,
{
    let mut result = Ok(());
    file.tree().walk(|path, property| {
        if result.is_ok() {
            result = property_dump(&mut *to, path, property, max_characters);
        }
    });
    result?;

    for (tag, blobs) in file.blobs().iter() {
        let bytes: usize = blobs.iter().map(Vec::len).sum();
        writeln!(
            to,
            "{} {:32} ({} value{}, {} bytes)",
            DumpValue::Num(tag),
            DumpValue::Path(StandardDataDictionary.name_of(tag)),
            blobs.len(),
            if blobs.len() == 1 { "" } else { "s" },
            bytes,
        )?;
    }
    Ok(())
}

fn property_dump<W>(
    to: &mut W,
    path: &str,
    property: &Property,
    max_characters: Option<u32>,
) -> IoResult<()>
where
    W: ?Sized + Write,
{
    for value in property {
        writeln!(
            to,
            "{:44} {}",
            DumpValue::Path(path),
            value_summary(value, max_characters),
        )?;
    }
    Ok(())
}

fn image_dump<W>(to: &mut W, image: &DecodedImage) -> IoResult<()>
where
    W: ?Sized + Write,
{
    write!(
        to,
        "{}: {}x{}x{} {}",
        "Image".if_supports_color(Stream::Stdout, |v| v.bold()),
        image.columns,
        image.rows,
        image.slices,
        image.buffer.type_name(),
    )?;
    if let Some((min, max)) = image.buffer.min_max() {
        write!(to, ", range {}", DumpValue::Num(format!("[{}, {}]", min, max)))?;
    }
    writeln!(to)?;

    let geometry = &image.geometry;
    writeln!(
        to,
        "{}: {}",
        "Voxel size".if_supports_color(Stream::Stdout, |v| v.bold()),
        DumpValue::Num(format_value_list(geometry.voxel_size, None, false)),
    )?;
    writeln!(
        to,
        "{}: {}",
        "Origin".if_supports_color(Stream::Stdout, |v| v.bold()),
        DumpValue::Num(format_value_list(geometry.origin, None, false)),
    )?;
    if !image.acquisition_times.is_empty() {
        writeln!(
            to,
            "{}: {}",
            "Acquisition times".if_supports_color(Stream::Stdout, |v| v.bold()),
            DumpValue::DateTime(format_value_list(&image.acquisition_times, None, false)),
        )?;
    }
    Ok(())
}

fn value_summary(value: &Value, max_characters: Option<u32>) -> DumpValue<String> {
    match value {
        Value::Str(s) => {
            let txt = format!("\"{}\"", sanitize(s));
            if let Some(max) = max_characters {
                DumpValue::Str(cut_str(&txt, max).into_owned())
            } else {
                DumpValue::Str(txt)
            }
        }
        Value::Strs(values) => DumpValue::Str(format_value_list(values, max_characters, true)),
        Value::I16(_)
        | Value::I32(_)
        | Value::I64(_)
        | Value::U16(_)
        | Value::U32(_)
        | Value::U64(_)
        | Value::F32(_)
        | Value::F64(_) => DumpValue::Num(value.to_string()),
        Value::Ints(values) => DumpValue::Num(format_value_list(values, max_characters, false)),
        Value::Floats(values) => DumpValue::Num(format_value_list(values, max_characters, false)),
        Value::Date(date) => DumpValue::DateTime(date.to_string()),
        Value::Dates(values) => {
            DumpValue::DateTime(format_value_list(values, max_characters, false))
        }
        Value::Time(time) => DumpValue::DateTime(time.to_string()),
        Value::DateTime(datetime) => DumpValue::DateTime(datetime.to_string()),
    }
}

fn sanitize(text: &str) -> String {
    text.replace('\n', "␊")
        .replace('\r', "␍")
        .replace('\0', "␀")
        .replace(|c: char| c.is_control(), "�")
}

fn format_value_list<I>(values: I, max_characters: Option<u32>, quoted: bool) -> String
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: Display,
{
    let values = values.into_iter();
    let len = values.len();
    let mut acc_size = 0;
    let mut pieces = String::new();
    if len > 1 {
        pieces.push('[');
    }
    for piece in values {
        let mut piece = sanitize(&piece.to_string());
        if acc_size > 0 {
            pieces.push_str(", ");
        }
        if quoted {
            piece = piece.replace('\"', "\\\"");
            pieces.push('"');
        }
        acc_size += piece.len();
        pieces.push_str(&piece);
        if quoted {
            pieces.push('"');
        }
        // stop earlier if applicable
        if max_characters.is_some_and(|max| (max as usize) < acc_size) {
            break;
        }
    }
    if len > 1 {
        pieces.push(']');
    }
    if let Some(max_characters) = max_characters {
        cut_str(&pieces, max_characters).into_owned()
    } else {
        pieces
    }
}

fn cut_str(s: &str, max_characters: u32) -> Cow<str> {
    let max = (max_characters.saturating_sub(3)) as usize;
    let len = s.chars().count();
    if len > max {
        s.chars()
            .take(max)
            .chain("...".chars())
            .collect::<String>()
            .into()
    } else {
        s.into()
    }
}

fn determine_width(user_width: Option<u32>) -> u32 {
    user_width
        .or_else(|| terminal_size::terminal_size().map(|(width, _)| width.0 as u32))
        .unwrap_or(120)
}
