use crate::error::{ViewerError, ViewerResult};
use crate::render::Color;

/// Colors, stroke widths and font sizes used when building frames.
///
/// Marker pixel offsets live in [`crate::extensions::CandidateMarkerGeometry`];
/// this struct only carries paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub curve_color: Color,
    pub raw_line_width: f64,
    /// Opacity applied to the raw curve when it is drawn.
    pub raw_curve_alpha: f64,
    pub processed_line_width: f64,
    pub binned_color: Color,
    pub binned_line_width: f64,
    pub binned_dash: [f64; 2],

    pub segment_line_color: Color,
    pub segment_line_width: f64,
    pub segment_label_color: Color,
    pub segment_label_font_size_px: f64,

    pub candidate_line_color: Color,
    pub candidate_dot_color: Color,
    pub selected_candidate_line_color: Color,
    pub selected_candidate_dot_color: Color,
    pub candidate_rank_label_color: Color,
    pub candidate_rank_font_size_px: f64,
    pub candidate_depth_label_color: Color,
    pub candidate_depth_font_size_px: f64,

    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    pub axis_title_color: Color,
    pub axis_title_font_size_px: f64,

    pub crosshair_color: Color,
    pub crosshair_line_width: f64,
    pub tooltip_fill_color: Color,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    pub tooltip_corner_radius_px: f64,

    pub placeholder_color: Color,
    pub placeholder_font_size_px: f64,

    pub overview_line_color: Color,
    pub overview_line_width: f64,
    pub overview_window_fill_color: Color,
    pub overview_window_border_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            curve_color: Color::rgba8(54, 209, 195, 1.0),
            raw_line_width: 1.2,
            raw_curve_alpha: 0.9,
            processed_line_width: 1.8,
            binned_color: Color::rgba8(43, 185, 169, 1.0),
            binned_line_width: 2.4,
            binned_dash: [6.0, 4.0],

            segment_line_color: Color::rgb(1.0, 1.0, 1.0),
            segment_line_width: 1.0,
            segment_label_color: Color::rgb(1.0, 1.0, 1.0),
            segment_label_font_size_px: 10.0,

            candidate_line_color: Color::rgba8(255, 190, 60, 0.95),
            candidate_dot_color: Color::rgba8(255, 190, 60, 1.0),
            selected_candidate_line_color: Color::rgba8(255, 99, 90, 0.95),
            selected_candidate_dot_color: Color::rgba8(255, 99, 90, 1.0),
            candidate_rank_label_color: Color::rgba8(234, 247, 244, 1.0),
            candidate_rank_font_size_px: 11.0,
            candidate_depth_label_color: Color::rgba8(200, 220, 230, 0.8),
            candidate_depth_font_size_px: 10.0,

            axis_label_color: Color::rgba8(170, 190, 200, 0.9),
            axis_label_font_size_px: 11.0,
            axis_title_color: Color::rgba8(220, 235, 245, 0.9),
            axis_title_font_size_px: 12.0,

            crosshair_color: Color::rgba8(255, 99, 90, 0.9),
            crosshair_line_width: 0.8,
            tooltip_fill_color: Color::rgba8(12, 16, 22, 0.95),
            tooltip_text_color: Color::rgb(1.0, 1.0, 1.0),
            tooltip_font_size_px: 12.0,
            tooltip_corner_radius_px: 6.0,

            placeholder_color: Color::rgba8(122, 136, 151, 1.0),
            placeholder_font_size_px: 13.0,

            overview_line_color: Color::rgba(1.0, 1.0, 1.0, 0.12),
            overview_line_width: 1.0,
            overview_window_fill_color: Color::rgba8(54, 209, 195, 0.10),
            overview_window_border_color: Color::rgba8(54, 209, 195, 0.22),
        }
    }
}

impl RenderStyle {
    /// Color of the raw curve once its opacity is applied.
    #[must_use]
    pub fn raw_curve_color(self) -> Color {
        self.curve_color
            .with_alpha(self.curve_color.alpha * self.raw_curve_alpha)
    }

    pub fn validate(self) -> ViewerResult<Self> {
        for color in [
            self.curve_color,
            self.binned_color,
            self.segment_line_color,
            self.segment_label_color,
            self.candidate_line_color,
            self.candidate_dot_color,
            self.selected_candidate_line_color,
            self.selected_candidate_dot_color,
            self.candidate_rank_label_color,
            self.candidate_depth_label_color,
            self.axis_label_color,
            self.axis_title_color,
            self.crosshair_color,
            self.tooltip_fill_color,
            self.tooltip_text_color,
            self.placeholder_color,
            self.overview_line_color,
            self.overview_window_fill_color,
            self.overview_window_border_color,
        ] {
            color.validate()?;
        }

        if !self.raw_curve_alpha.is_finite() || !(0.0..=1.0).contains(&self.raw_curve_alpha) {
            return Err(ViewerError::InvalidData(
                "raw curve alpha must be finite and in [0, 1]".to_owned(),
            ));
        }

        for (name, value) in [
            ("raw_line_width", self.raw_line_width),
            ("processed_line_width", self.processed_line_width),
            ("binned_line_width", self.binned_line_width),
            ("binned_dash[0]", self.binned_dash[0]),
            ("binned_dash[1]", self.binned_dash[1]),
            ("segment_line_width", self.segment_line_width),
            ("segment_label_font_size_px", self.segment_label_font_size_px),
            ("candidate_rank_font_size_px", self.candidate_rank_font_size_px),
            ("candidate_depth_font_size_px", self.candidate_depth_font_size_px),
            ("axis_label_font_size_px", self.axis_label_font_size_px),
            ("axis_title_font_size_px", self.axis_title_font_size_px),
            ("crosshair_line_width", self.crosshair_line_width),
            ("tooltip_font_size_px", self.tooltip_font_size_px),
            ("placeholder_font_size_px", self.placeholder_font_size_px),
            ("overview_line_width", self.overview_line_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ViewerError::InvalidData(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }

        if !self.tooltip_corner_radius_px.is_finite() || self.tooltip_corner_radius_px < 0.0 {
            return Err(ViewerError::InvalidData(
                "render style `tooltip_corner_radius_px` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::RenderStyle;

    #[test]
    fn raw_curve_is_drawn_slightly_transparent() {
        let style = RenderStyle::default();
        assert!((style.raw_curve_color().alpha - 0.9).abs() <= 1e-12);
        assert_eq!(style.raw_curve_color().red, style.curve_color.red);
    }

    #[test]
    fn zero_width_stroke_is_rejected() {
        let style = RenderStyle {
            crosshair_line_width: 0.0,
            ..RenderStyle::default()
        };
        let err = style.validate().expect_err("must fail");
        assert!(format!("{err}").contains("crosshair_line_width"));
    }
}
