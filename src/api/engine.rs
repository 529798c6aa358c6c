#[cfg(feature = "parallel-layout")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DisplayConvention, DisplayMode};
use crate::error::LayoutResult;
use crate::placement::{
    ChartPlacement, LabelConfig, PlacementAssembler, PlacementRequest, SlotLayoutConfig,
};
use crate::render::{FrameMetrics, RenderFrame, Renderer, build_render_frame};

use super::ChartInput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayoutConfig {
    pub convention: DisplayConvention,
    pub mode: DisplayMode,
    pub metrics: FrameMetrics,
    pub labels: LabelConfig,
}

impl ChartLayoutConfig {
    #[must_use]
    pub fn new(convention: DisplayConvention, mode: DisplayMode) -> Self {
        Self {
            convention,
            mode,
            metrics: FrameMetrics::default(),
            labels: LabelConfig::default(),
        }
    }

    #[must_use]
    pub fn with_surface_size(mut self, surface_size: f64) -> Self {
        self.metrics.surface_size = surface_size;
        self
    }

    #[must_use]
    pub fn with_slot_layout(mut self, slot_layout: SlotLayoutConfig) -> Self {
        self.metrics.slot_layout = slot_layout;
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: FrameMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: LabelConfig) -> Self {
        self.labels = labels;
        self
    }
}

/// Stateless front door: lays out charts and turns placements into frames.
///
/// The engine holds only validated configuration, so one instance can serve
/// any number of charts, from any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayoutEngine {
    config: ChartLayoutConfig,
}

impl ChartLayoutEngine {
    pub fn new(config: ChartLayoutConfig) -> LayoutResult<Self> {
        config.metrics.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &ChartLayoutConfig {
        &self.config
    }

    #[must_use]
    pub fn request_for(&self, input: &ChartInput) -> PlacementRequest {
        PlacementRequest::new(
            input.ascendant,
            self.config.convention,
            self.config.mode,
            input.cusps,
        )
    }

    pub fn layout(&self, input: &ChartInput) -> LayoutResult<ChartPlacement> {
        let assembler = PlacementAssembler::new(self.request_for(input));
        let mut placement = assembler.assemble(&input.bodies, &input.transits)?;
        placement.transit_epoch = input.transit_epoch;
        Ok(placement)
    }

    /// Lays out independent charts; output order matches input order.
    pub fn layout_batch(&self, inputs: &[ChartInput]) -> LayoutResult<Vec<ChartPlacement>> {
        debug!(charts = inputs.len(), "layout batch");

        #[cfg(feature = "parallel-layout")]
        {
            inputs.par_iter().map(|input| self.layout(input)).collect()
        }

        #[cfg(not(feature = "parallel-layout"))]
        {
            inputs.iter().map(|input| self.layout(input)).collect()
        }
    }

    pub fn build_frame(&self, placement: &ChartPlacement) -> LayoutResult<RenderFrame> {
        build_render_frame(placement, self.config.metrics, &self.config.labels)
    }

    /// Lays out `input`, draws it with `renderer` and returns the placement.
    ///
    /// Nothing reaches the renderer when layout fails.
    pub fn render<R: Renderer>(
        &self,
        renderer: &mut R,
        input: &ChartInput,
    ) -> LayoutResult<ChartPlacement> {
        let placement = self.layout(input)?;
        let frame = self.build_frame(&placement)?;
        renderer.render(&frame)?;
        Ok(placement)
    }
}
