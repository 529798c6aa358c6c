use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Ascendant, Body, BodyOrigin, DisplayConvention, DisplayMode, HouseCusps, ZodiacSign};
use crate::error::{LayoutError, LayoutResult};

use super::{PlacementStrategy, SlotAllocator};

/// Everything fixed for one chart before any body is placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementRequest {
    pub ascendant: Ascendant,
    pub convention: DisplayConvention,
    pub strategy: PlacementStrategy,
}

impl PlacementRequest {
    #[must_use]
    pub fn new(
        ascendant: Ascendant,
        convention: DisplayConvention,
        mode: DisplayMode,
        cusps: Option<HouseCusps>,
    ) -> Self {
        Self {
            ascendant,
            convention,
            strategy: PlacementStrategy::for_mode(mode, cusps),
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: PlacementStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.strategy.mode()
    }
}

/// Where one body lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementEntry {
    /// House number (North Indian) or sign number (South Indian), 1..=12.
    pub cell: u8,
    /// 0-based stacking order inside `cell`.
    pub slot_index: usize,
    /// Position of the body in its input list.
    pub body_index: usize,
    pub body_name: String,
    pub origin: BodyOrigin,
    pub house: u8,
    /// Sign displayed for `house`.
    pub sign: ZodiacSign,
    pub longitude: Option<f64>,
    pub is_retrograde: bool,
}

/// Placement of a whole chart: natal entries in input order, then transits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPlacement {
    pub request: PlacementRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_epoch: Option<DateTime<Utc>>,
    entries: Vec<PlacementEntry>,
}

pub type CellGroup<'a> = SmallVec<[&'a PlacementEntry; 4]>;

impl ChartPlacement {
    #[must_use]
    pub fn entries(&self) -> &[PlacementEntry] {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<PlacementEntry> {
        self.entries
    }

    pub fn natal(&self) -> impl Iterator<Item = &PlacementEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.origin == BodyOrigin::Natal)
    }

    pub fn transits(&self) -> impl Iterator<Item = &PlacementEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.origin == BodyOrigin::Transit)
    }

    /// Entries of `cell` in slot order.
    pub fn entries_in_cell(&self, cell: u8) -> impl Iterator<Item = &PlacementEntry> {
        self.entries.iter().filter(move |entry| entry.cell == cell)
    }

    #[must_use]
    pub fn slot_count(&self, cell: u8) -> usize {
        self.entries_in_cell(cell).count()
    }

    /// Non-empty cells in order of first appearance, each with its entries in
    /// slot order.
    #[must_use]
    pub fn cell_groups(&self) -> IndexMap<u8, CellGroup<'_>> {
        let mut groups: IndexMap<u8, CellGroup<'_>> = IndexMap::new();
        for entry in &self.entries {
            groups.entry(entry.cell).or_default().push(entry);
        }
        groups
    }

    #[must_use]
    pub fn ascendant_cell(&self) -> u8 {
        self.request
            .convention
            .ascendant_cell(self.request.ascendant)
    }

    /// Merges a transit set after the bodies already placed.
    ///
    /// Existing slots are kept as they are; transits continue each cell's
    /// numbering.
    pub fn overlay_transits(
        mut self,
        transits: &[Body],
        epoch: Option<DateTime<Utc>>,
    ) -> LayoutResult<Self> {
        let mut allocator = SlotAllocator::resume(
            self.entries
                .iter()
                .map(|entry| (entry.cell, entry.slot_index)),
        )?;
        let assembler = PlacementAssembler::new(self.request);
        assembler.place_into(
            &mut self.entries,
            &mut allocator,
            transits,
            BodyOrigin::Transit,
        )?;
        if epoch.is_some() {
            self.transit_epoch = epoch;
        }
        debug!(
            transits = transits.len(),
            total = self.entries.len(),
            "overlaid transits"
        );
        Ok(self)
    }
}

/// Resolves, groups and stacks bodies for one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementAssembler {
    request: PlacementRequest,
}

impl PlacementAssembler {
    #[must_use]
    pub fn new(request: PlacementRequest) -> Self {
        Self { request }
    }

    #[must_use]
    pub fn request(&self) -> PlacementRequest {
        self.request
    }

    /// Places `natal` bodies, then `transits`, with a shared slot allocator.
    ///
    /// Bodies keep their input order inside every cell. Any invalid body
    /// fails the whole chart.
    pub fn assemble(&self, natal: &[Body], transits: &[Body]) -> LayoutResult<ChartPlacement> {
        let mut entries = Vec::with_capacity(natal.len() + transits.len());
        let mut allocator = SlotAllocator::default();
        self.place_into(&mut entries, &mut allocator, natal, BodyOrigin::Natal)?;
        self.place_into(&mut entries, &mut allocator, transits, BodyOrigin::Transit)?;

        debug!(
            convention = ?self.request.convention,
            mode = ?self.request.mode(),
            ascendant = %self.request.ascendant.sign,
            natal = natal.len(),
            transits = transits.len(),
            "assembled chart placement"
        );

        Ok(ChartPlacement {
            request: self.request,
            transit_epoch: None,
            entries,
        })
    }

    fn place_into(
        &self,
        entries: &mut Vec<PlacementEntry>,
        allocator: &mut SlotAllocator,
        bodies: &[Body],
        origin: BodyOrigin,
    ) -> LayoutResult<()> {
        for (body_index, body) in bodies.iter().enumerate() {
            if body.origin != origin {
                return Err(LayoutError::OriginMismatch {
                    name: body.name.clone(),
                    expected: origin.as_str(),
                    found: body.origin.as_str(),
                });
            }
            let resolved = self.request.strategy.resolve(self.request.ascendant, body)?;
            let cell = self.request.convention.cell_for(resolved.house, resolved.sign);
            let slot_index = allocator.allocate(cell)?;
            trace!(
                body = %body.name,
                origin = origin.as_str(),
                house = resolved.house,
                cell,
                slot_index,
                "placed body"
            );
            entries.push(PlacementEntry {
                cell,
                slot_index,
                body_index,
                body_name: body.name.clone(),
                origin,
                house: resolved.house,
                sign: resolved.sign,
                longitude: body.checked_longitude()?,
                is_retrograde: body.is_retrograde,
            });
        }
        Ok(())
    }
}
