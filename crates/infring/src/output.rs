use crate::render::{MAX_SIZE, MIN_SIZE, Theme};
use modring::{Arrow, Diagram};
use serde::Serialize;
use serde_with::DeserializeFromStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    Json,
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Json => "json",
            Self::Text => "txt",
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Png | Self::Svg)
    }

    /// Images always go to a file; data formats go to stdout unless asked otherwise.
    pub fn default_path(&self) -> Option<PathBuf> {
        self.is_image()
            .then(|| PathBuf::from(format!("infinity-ring.{}", self.extension())))
    }
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Rendering error: {0}")]
    Render(Box<dyn std::error::Error + Send + Sync>),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Canvas size {0} is outside {min}..={max} pixels", min = MIN_SIZE, max = MAX_SIZE)]
    InvalidSize(u32),
    #[error("Format `{0}` needs infring built with the `render` feature")]
    RenderingDisabled(OutputFormat),
}

#[cfg(feature = "render")]
impl From<cairo::Error> for OutputError {
    fn from(e: cairo::Error) -> Self {
        Self::Render(Box::new(e))
    }
}

#[cfg(feature = "render")]
impl From<cairo::IoError> for OutputError {
    fn from(e: cairo::IoError) -> Self {
        Self::Render(Box::new(e))
    }
}

/// Everything one invocation writes out.
#[derive(Debug, Serialize)]
pub struct Rendering<'a> {
    #[serde(flatten)]
    pub diagram: &'a Diagram,
    pub arrows: &'a [Arrow],
}

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions<'a> {
    pub format: OutputFormat,
    pub path: Option<&'a Path>,
    pub size: u32,
    pub theme: &'a Theme,
}

/// Writes the rendering and returns the file it went to, if any.
pub fn write(
    rendering: &Rendering<'_>,
    options: &OutputOptions<'_>,
) -> Result<Option<PathBuf>, OutputError> {
    let path = options
        .path
        .map(Path::to_path_buf)
        .or_else(|| options.format.default_path());

    match &path {
        None => {
            let mut stdout = std::io::stdout().lock();
            write_data(&mut stdout, rendering, options.format)?;
        }
        Some(p) if options.format.is_image() => write_image(p, rendering, options)?,
        Some(p) => {
            let mut file = fs_err::File::create(p)?;
            write_data(&mut file, rendering, options.format)?;
        }
    }
    Ok(path)
}

pub fn write_data<W: Write>(
    out: &mut W,
    rendering: &Rendering<'_>,
    format: OutputFormat,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rendering)?;
            writeln!(out)?;
        }
        _ => {
            let diagram = rendering.diagram;
            writeln!(
                out,
                "{} ring: base {}, operand {}, {} segments",
                diagram.mode,
                diagram.base,
                diagram.operand,
                diagram.walk.len()
            )?;
            for segment in &diagram.walk {
                writeln!(out, "{segment}")?;
            }
        }
    }
    Ok(())
}

#[cfg(feature = "render")]
fn write_image(
    path: &Path,
    rendering: &Rendering<'_>,
    options: &OutputOptions<'_>,
) -> Result<(), OutputError> {
    use crate::render::{render_png, render_svg};

    if !(MIN_SIZE..=MAX_SIZE).contains(&options.size) {
        return Err(OutputError::InvalidSize(options.size));
    }
    let (diagram, arrows) = (rendering.diagram, rendering.arrows);
    match options.format {
        OutputFormat::Svg => render_svg(path, diagram, arrows, options.theme, options.size),
        _ => render_png(path, diagram, arrows, options.theme, options.size),
    }
}

#[cfg(not(feature = "render"))]
fn write_image(
    _path: &Path,
    _rendering: &Rendering<'_>,
    options: &OutputOptions<'_>,
) -> Result<(), OutputError> {
    Err(OutputError::RenderingDisabled(options.format))
}
