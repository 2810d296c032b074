use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ViewerError, ViewerResult};
use crate::render::{CirclePrimitive, LinePrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive};

/// Visual layer a command belongs to. Frames list layers in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawLayer {
    Segments,
    Series,
    Candidates,
    Axes,
    Hover,
    Overview,
    Placeholder,
}

/// Why a frame degraded to the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoDataReason {
    EmptySeries,
    MalformedSeries,
    /// The series has data, but none of it falls inside the viewport.
    EmptyWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameStatus {
    Rendered,
    NoData(NoDataReason),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(LinePrimitive),
    Polyline(PolylinePrimitive),
    Circle(CirclePrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
}

impl Shape {
    pub fn validate(&self) -> ViewerResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Polyline(polyline) => polyline.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub layer: DrawLayer,
    pub shape: Shape,
}

/// Backend-agnostic scene for one draw pass.
///
/// Commands execute in list order; backends must not reorder them.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub status: FrameStatus,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            status: FrameStatus::Rendered,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, layer: DrawLayer, shape: Shape) {
        self.commands.push(DrawCommand { layer, shape });
    }

    pub fn push_line(&mut self, layer: DrawLayer, line: LinePrimitive) {
        self.push(layer, Shape::Line(line));
    }

    pub fn push_polyline(&mut self, layer: DrawLayer, polyline: PolylinePrimitive) {
        self.push(layer, Shape::Polyline(polyline));
    }

    pub fn push_circle(&mut self, layer: DrawLayer, circle: CirclePrimitive) {
        self.push(layer, Shape::Circle(circle));
    }

    pub fn push_rect(&mut self, layer: DrawLayer, rect: RectPrimitive) {
        self.push(layer, Shape::Rect(rect));
    }

    pub fn push_text(&mut self, layer: DrawLayer, text: TextPrimitive) {
        self.push(layer, Shape::Text(text));
    }

    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(self.status, FrameStatus::NoData(_))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Layers in first-appearance order, each listed once.
    #[must_use]
    pub fn layer_order(&self) -> Vec<DrawLayer> {
        let mut order: Vec<DrawLayer> = Vec::new();
        for command in &self.commands {
            if !order.contains(&command.layer) {
                order.push(command.layer);
            }
        }
        order
    }

    pub fn shapes_in(&self, layer: DrawLayer) -> impl Iterator<Item = &Shape> {
        self.commands
            .iter()
            .filter(move |command| command.layer == layer)
            .map(|command| &command.shape)
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|c| match &c.shape {
            Shape::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &PolylinePrimitive> {
        self.commands.iter().filter_map(|c| match &c.shape {
            Shape::Polyline(polyline) => Some(polyline),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.commands.iter().filter_map(|c| match &c.shape {
            Shape::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|c| match &c.shape {
            Shape::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|c| match &c.shape {
            Shape::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn validate(&self) -> ViewerResult<()> {
        if !self.viewport.is_valid() {
            return Err(ViewerError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for command in &self.commands {
            command.shape.validate()?;
        }
        Ok(())
    }
}
