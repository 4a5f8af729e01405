//! Element definitions for the canvas.
//!
//! Elements are owned by the host and persisted with percentage coordinates so
//! that a layout survives any change of container size. The engine only reads
//! them and hands back modified copies.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Deserialize an explicit `null` the same way as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn id_or_new<'de, D>(deserializer: D) -> Result<ElementId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ElementId>::deserialize(deserializer)?.unwrap_or_else(Uuid::new_v4))
}

/// Position and size of an element as percentages of the container.
///
/// Top-left anchored: `x_pct`/`w_pct` are relative to the container width,
/// `y_pct`/`h_pct` to its height. Missing or `null` fields deserialize to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    #[serde(default, deserialize_with = "null_as_default")]
    pub x_pct: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub y_pct: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub w_pct: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub h_pct: f64,
}

impl Placement {
    pub fn new(x_pct: f64, y_pct: f64, w_pct: f64, h_pct: f64) -> Self {
        Self {
            x_pct,
            y_pct,
            w_pct,
            h_pct,
        }
    }
}

/// Type-specific payload of an element. Opaque to the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    /// A text block. Editing the content is the host's job.
    Text {
        #[serde(default, deserialize_with = "null_as_default")]
        text: String,
    },
    /// A filled rectangle.
    Rect {
        #[serde(default, deserialize_with = "null_as_default")]
        fill: String,
        #[serde(default, deserialize_with = "null_as_default")]
        stroke: String,
    },
    /// An image referenced by URL.
    Image {
        #[serde(default, deserialize_with = "null_as_default")]
        url: String,
        #[serde(default, deserialize_with = "null_as_default")]
        alt: String,
    },
}

impl ElementKind {
    /// Name of the variant as it appears in the `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Text { .. } => "text",
            ElementKind::Rect { .. } => "rect",
            ElementKind::Image { .. } => "image",
        }
    }
}

/// A positionable object on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default = "Uuid::new_v4", deserialize_with = "id_or_new")]
    pub id: ElementId,
    #[serde(flatten)]
    pub kind: ElementKind,
    #[serde(flatten)]
    pub placement: Placement,
    /// Rotation in degrees. Carried through untouched; never applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl Element {
    /// Create a new element with a fresh id.
    pub fn new(kind: ElementKind, placement: Placement) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            placement,
            rotation: None,
        }
    }

    /// Create a text element.
    pub fn text(text: impl Into<String>, placement: Placement) -> Self {
        Self::new(ElementKind::Text { text: text.into() }, placement)
    }

    /// Create a rectangle element.
    pub fn rect(fill: impl Into<String>, stroke: impl Into<String>, placement: Placement) -> Self {
        Self::new(
            ElementKind::Rect {
                fill: fill.into(),
                stroke: stroke.into(),
            },
            placement,
        )
    }

    /// Create an image element.
    pub fn image(url: impl Into<String>, alt: impl Into<String>, placement: Placement) -> Self {
        Self::new(
            ElementKind::Image {
                url: url.into(),
                alt: alt.into(),
            },
            placement,
        )
    }

    /// Copy of this element with a different placement.
    pub fn with_placement(&self, placement: Placement) -> Self {
        Self {
            placement,
            ..self.clone()
        }
    }
}

/// Find an element by id.
pub fn find(elements: &[Element], id: ElementId) -> Option<&Element> {
    elements.iter().find(|e| e.id == id)
}
