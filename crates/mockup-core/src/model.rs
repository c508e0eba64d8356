//! Core element model for garment mockup designs.
//!
//! A design is a set of flat, ordered element lists — one per [`ViewKey`].
//! Every element carries the same geometry (`x`, `y`, `width`, `height`,
//! `rotation` in degrees) and a [`Payload`] that is either text or an image
//! reference. List order is paint order: the last element is drawn on top.

use crate::config::TextDefaults;
use crate::error::CanvasError;
use crate::id::ElementId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0], serialized as a hex string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        let channels: Vec<u8> = match bytes.len() {
            3 | 4 => bytes
                .iter()
                .map(|&c| hex_val(c).map(|v| v * 17))
                .collect::<Option<_>>()?,
            6 | 8 => bytes
                .chunks(2)
                .map(|pair| Some(hex_val(pair[0])? << 4 | hex_val(pair[1])?))
                .collect::<Option<_>>()?,
            _ => return None,
        };

        let alpha = channels.get(3).copied().unwrap_or(255);
        Some(Self::rgba(
            channels[0] as f32 / 255.0,
            channels[1] as f32 / 255.0,
            channels[2] as f32 / 255.0,
            alpha as f32 / 255.0,
        ))
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = [self.r, self.g, self.b, self.a].map(|c| (c * 255.0).round() as u8);
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color `{s}`")))
    }
}

// ─── Views ───────────────────────────────────────────────────────────────

/// One of the four mutually exclusive editing surfaces of a garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKey {
    #[default]
    Front,
    Back,
    Left,
    Right,
}

impl ViewKey {
    pub const ALL: [ViewKey; 4] = [ViewKey::Front, ViewKey::Back, ViewKey::Left, ViewKey::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewKey::Front => "front",
            ViewKey::Back => "back",
            ViewKey::Left => "left",
            ViewKey::Right => "right",
        }
    }

    /// Dense index into per-view arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKey {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewKey::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CanvasError::UnknownView(s.to_string()))
    }
}

// ─── Text ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Horizontal text alignment (default: Left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPayload {
    pub text: String,
    pub font_size: f32,
    pub font_family: String,
    pub color: Color,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub text_align: TextAlign,
}

/// Partial update for a [`TextPayload`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextPatch {
    pub text: Option<String>,
    pub font_size: Option<f32>,
    pub font_family: Option<String>,
    pub color: Option<Color>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub text_align: Option<TextAlign>,
}

impl TextPatch {
    pub fn apply(self, payload: &mut TextPayload) {
        if let Some(text) = self.text {
            payload.text = text;
        }
        if let Some(size) = self.font_size {
            payload.font_size = size;
        }
        if let Some(family) = self.font_family {
            payload.font_family = family;
        }
        if let Some(color) = self.color {
            payload.color = color;
        }
        if let Some(weight) = self.font_weight {
            payload.font_weight = weight;
        }
        if let Some(style) = self.font_style {
            payload.font_style = style;
        }
        if let Some(align) = self.text_align {
            payload.text_align = align;
        }
    }
}

// ─── Images ──────────────────────────────────────────────────────────────

/// An image reference. `source` is an opaque URI handed over by the upload
/// or asset-picker collaborator; it is never fetched or validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub source: String,
    /// Size at placement time, kept for aspect-ratio aware resizing.
    pub original_width: f32,
    pub original_height: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImagePatch {
    pub source: Option<String>,
    pub original_width: Option<f32>,
    pub original_height: Option<f32>,
}

impl ImagePatch {
    pub fn apply(self, payload: &mut ImagePayload) {
        if let Some(source) = self.source {
            payload.source = source;
        }
        if let Some(w) = self.original_width {
            payload.original_width = w;
        }
        if let Some(h) = self.original_height {
            payload.original_height = h;
        }
    }
}

// ─── Elements ────────────────────────────────────────────────────────────

/// Variant tag of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Payload {
    Text(TextPayload),
    Image(ImagePayload),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum PayloadPatch {
    Text(TextPatch),
    Image(ImagePatch),
}

/// Generic partial update: any geometry field and, optionally, a payload
/// patch that must match the element's variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementPatch {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub rotation: Option<f32>,
    pub payload: Option<PayloadPatch>,
}

/// A positioned, sized, rotatable design primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignElement {
    pub id: ElementId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Degrees, clockwise, about the element centre.
    #[serde(default)]
    pub rotation: f32,
    pub payload: Payload,
}

impl DesignElement {
    /// New text element with a fresh id and the stock defaults
    /// (24px Arial, black, left aligned).
    pub fn text(x: f32, y: f32, text: &str) -> Self {
        Self::text_with(
            ElementId::with_prefix("text"),
            x,
            y,
            text,
            &TextDefaults::default(),
        )
    }

    /// New text element styled from `defaults`.
    ///
    /// The size is a placement estimate, not a measurement: width is
    /// `max(200, chars × font_size × 0.6)` and height is `font_size × 1.5`.
    pub fn text_with(id: ElementId, x: f32, y: f32, text: &str, defaults: &TextDefaults) -> Self {
        let font_size = defaults.font_size;
        let estimated = text.chars().count() as f32 * font_size * 0.6;
        Self {
            id,
            x,
            y,
            width: estimated.max(200.0),
            height: font_size * 1.5,
            rotation: 0.0,
            payload: Payload::Text(TextPayload {
                text: text.to_string(),
                font_size,
                font_family: defaults.font_family.clone(),
                color: defaults.color,
                font_weight: FontWeight::Normal,
                font_style: FontStyle::Normal,
                text_align: TextAlign::Left,
            }),
        }
    }

    /// New image element with a fresh id.
    pub fn image(x: f32, y: f32, source: &str, width: f32, height: f32) -> Self {
        Self::image_with(ElementId::with_prefix("image"), x, y, source, width, height)
    }

    /// New image element; the placement size is remembered as the original size.
    pub fn image_with(
        id: ElementId,
        x: f32,
        y: f32,
        source: &str,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            rotation: 0.0,
            payload: Payload::Image(ImagePayload {
                source: source.to_string(),
                original_width: width,
                original_height: height,
            }),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self.payload {
            Payload::Text(_) => ElementKind::Text,
            Payload::Image(_) => ElementKind::Image,
        }
    }

    pub fn as_text(&self) -> Option<&TextPayload> {
        match &self.payload {
            Payload::Text(t) => Some(t),
            Payload::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImagePayload> {
        match &self.payload {
            Payload::Image(i) => Some(i),
            Payload::Text(_) => None,
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn rotate_to(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    /// Apply a text payload update. Fails without touching the element when
    /// the element is an image.
    pub fn update_text(&mut self, patch: TextPatch) -> Result<(), CanvasError> {
        match &mut self.payload {
            Payload::Text(t) => {
                patch.apply(t);
                Ok(())
            }
            Payload::Image(_) => Err(CanvasError::NotText(self.id)),
        }
    }

    /// Apply a generic patch. The variant is checked before any field is
    /// written, so a mismatched patch leaves the element as it was.
    pub fn apply_patch(&mut self, patch: ElementPatch) -> Result<(), CanvasError> {
        match (&mut self.payload, patch.payload) {
            (_, None) => {}
            (Payload::Text(t), Some(PayloadPatch::Text(p))) => p.apply(t),
            (Payload::Image(i), Some(PayloadPatch::Image(p))) => p.apply(i),
            (Payload::Image(_), Some(PayloadPatch::Text(_))) => {
                return Err(CanvasError::NotText(self.id));
            }
            (Payload::Text(_), Some(PayloadPatch::Image(_))) => {
                return Err(CanvasError::NotImage(self.id));
            }
        }
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(w) = patch.width {
            self.width = w;
        }
        if let Some(h) = patch.height {
            self.height = h;
        }
        if let Some(r) = patch.rotation {
            self.rotation = r;
        }
        Ok(())
    }

    /// Geometry is usable for painting and hit testing.
    pub fn has_valid_geometry(&self) -> bool {
        [self.x, self.y, self.width, self.height, self.rotation]
            .iter()
            .all(|v| v.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let c = Color::from_hex("#FF8800").unwrap();
        assert_eq!(c.to_hex(), "#FF8800");
        assert_eq!(Color::from_hex("000").unwrap(), Color::BLACK);
        assert_eq!(Color::from_hex("#fff").unwrap().to_hex(), "#FFFFFF");
        assert_eq!(Color::from_hex("#00000080").unwrap().to_hex(), "#00000080");
        assert!(Color::from_hex("#12").is_none());
        assert!(Color::from_hex("#GG0000").is_none());
    }

    #[test]
    fn text_defaults() {
        let el = DesignElement::text(10.0, 20.0, "Logo");
        let t = el.as_text().unwrap();
        assert_eq!(t.font_size, 24.0);
        assert_eq!(t.font_family, "Arial");
        assert_eq!(t.color, Color::BLACK);
        assert_eq!(t.font_weight, FontWeight::Normal);
        assert_eq!(t.font_style, FontStyle::Normal);
        assert_eq!(t.text_align, TextAlign::Left);
        // Short text falls back to the 200px minimum width
        assert_eq!(el.width, 200.0);
        assert_eq!(el.height, 36.0);
    }

    #[test]
    fn long_text_width_estimate() {
        let text = "x".repeat(20);
        let el = DesignElement::text(0.0, 0.0, &text);
        assert!((el.width - 20.0 * 24.0 * 0.6).abs() < 1e-3);
    }

    #[test]
    fn image_keeps_original_size() {
        let el = DesignElement::image(0.0, 0.0, "https://cdn/x.png", 128.0, 64.0);
        let img = el.as_image().unwrap();
        assert_eq!(el.kind(), ElementKind::Image);
        assert_eq!((img.original_width, img.original_height), (128.0, 64.0));
    }

    #[test]
    fn text_patch_on_image_is_rejected_untouched() {
        let mut el = DesignElement::image(0.0, 0.0, "uri", 10.0, 10.0);
        let before = el.clone();
        let patch = ElementPatch {
            x: Some(99.0),
            payload: Some(PayloadPatch::Text(TextPatch {
                text: Some("nope".into()),
                ..Default::default()
            })),
            ..Default::default()
        };
        assert!(matches!(el.apply_patch(patch), Err(CanvasError::NotText(_))));
        assert_eq!(el, before);
    }

    #[test]
    fn view_key_parse() {
        assert_eq!("Back".parse::<ViewKey>().unwrap(), ViewKey::Back);
        assert!("top".parse::<ViewKey>().is_err());
        assert_eq!(ViewKey::Right.index(), 3);
    }
}
