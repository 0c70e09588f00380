//! Hero background gradient sweep

use terro_dom::NodeId;
use terro_runtime::Page;

use super::format_number;
use crate::behavior::Binding;
use crate::config::GradientConfig;
use crate::SiteResult;

/// Endless back-and-forth rotation of the `.hero__background` gradient
#[derive(Debug)]
pub struct Gradient {
    element: NodeId,
    angle: f64,
    direction: f64,
    config: GradientConfig,
}

impl Gradient {
    /// Bind and paint the first frame immediately
    pub fn bind(page: &mut Page, config: &GradientConfig) -> SiteResult<Binding<Self>> {
        let Some(element) = page.document().query_selector(".hero__background")? else {
            return Ok(Binding::Skipped("no .hero__background element"));
        };
        let mut gradient = Self {
            element,
            angle: config.start_angle,
            direction: 1.0,
            config: config.clone(),
        };
        gradient.on_frame(page);
        Ok(Binding::Bound(gradient))
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Step the angle, bouncing between the bounds, and repaint
    pub fn on_frame(&mut self, page: &mut Page) {
        self.angle += self.direction * self.config.step;
        if self.angle >= self.config.max_angle || self.angle <= self.config.min_angle {
            self.direction = -self.direction;
        }
        let background = self.background();
        page.document_mut()
            .set_style_property(self.element, "background", &background);
    }

    pub fn background(&self) -> String {
        format!(
            "linear-gradient({}deg, {})",
            format_number(self.angle),
            self.config.stops.join(", ")
        )
    }
}
