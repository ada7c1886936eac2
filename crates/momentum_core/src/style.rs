//! Visual style and aspect ratio enumerations.

use serde::{Deserialize, Serialize};

/// The visual treatment applied to generated scripts and images.
///
/// The display form of each variant is the label the generation prompts use,
/// so it doubles as the wire value sent to the model.
///
/// # Examples
///
/// ```
/// use momentum_core::VisualStyle;
/// use std::str::FromStr;
///
/// assert_eq!(format!("{}", VisualStyle::News), "News-Style");
/// assert_eq!(VisualStyle::from_str("cinematic").unwrap(), VisualStyle::Cinematic);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum VisualStyle {
    /// Photojournalistic, documentary treatment
    #[serde(rename = "News-Style")]
    #[strum(to_string = "News-Style", serialize = "news")]
    News,
    /// Moody, film-like treatment
    #[default]
    #[strum(to_string = "Cinematic", serialize = "cinematic")]
    Cinematic,
    /// Clean, muted, white-space-heavy treatment
    #[strum(to_string = "Minimalist", serialize = "minimalist")]
    Minimalist,
}

/// Target aspect ratio for generated images.
///
/// The display form is the ratio string the image API expects.
///
/// # Examples
///
/// ```
/// use momentum_core::AspectRatio;
/// use std::str::FromStr;
///
/// assert_eq!(format!("{}", AspectRatio::Portrait), "9:16");
/// assert_eq!(AspectRatio::from_str("1:1").unwrap(), AspectRatio::Square);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum AspectRatio {
    /// 1:1 square frame
    #[serde(rename = "1:1")]
    #[strum(to_string = "1:1", serialize = "square")]
    Square,
    /// 9:16 vertical frame
    #[default]
    #[serde(rename = "9:16")]
    #[strum(to_string = "9:16", serialize = "portrait")]
    Portrait,
}
