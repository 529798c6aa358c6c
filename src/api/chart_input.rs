use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Ascendant, Body, BodyOrigin, HouseCusps};
use crate::error::{LayoutError, LayoutResult};

/// Body as delivered by the upstream chart service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyRecord {
    pub name: String,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub sign_index: Option<u8>,
    #[serde(default)]
    pub house_number: Option<u8>,
    #[serde(default)]
    pub is_retrograde: bool,
}

impl BodyRecord {
    #[must_use]
    pub fn into_body(self, origin: BodyOrigin) -> Body {
        Body {
            name: self.name,
            longitude: self.longitude,
            sign_index: self.sign_index,
            house_number: self.house_number,
            is_retrograde: self.is_retrograde,
            origin,
        }
    }
}

/// Ascendant as delivered upstream: a sign index, a sign name, or a rising
/// degree. The index wins when several are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AscendantRecord {
    #[serde(default)]
    pub sign_index: Option<u8>,
    #[serde(default)]
    pub sign: Option<String>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl AscendantRecord {
    pub fn resolve(&self) -> LayoutResult<Ascendant> {
        if let Some(index) = self.sign_index {
            return Ascendant::from_index(Some(index));
        }
        if let Some(longitude) = self.longitude {
            return Ascendant::from_longitude(longitude);
        }
        Ok(Ascendant::from_name(self.sign.as_deref()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartInputRecord {
    #[serde(default)]
    ascendant: Option<AscendantRecord>,
    #[serde(default)]
    bodies: Vec<BodyRecord>,
    #[serde(default)]
    transits: Vec<BodyRecord>,
    #[serde(default)]
    cusps: Option<Vec<f64>>,
    #[serde(default)]
    transit_epoch: Option<DateTime<Utc>>,
}

/// One chart to lay out: natal bodies, optional transits and optional cusps.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInput {
    pub ascendant: Ascendant,
    pub bodies: Vec<Body>,
    pub transits: Vec<Body>,
    pub cusps: Option<HouseCusps>,
    pub transit_epoch: Option<DateTime<Utc>>,
}

impl ChartInput {
    #[must_use]
    pub fn new(ascendant: Ascendant, bodies: Vec<Body>) -> Self {
        Self {
            ascendant,
            bodies,
            transits: Vec::new(),
            cusps: None,
            transit_epoch: None,
        }
    }

    #[must_use]
    pub fn with_transits(mut self, transits: Vec<Body>) -> Self {
        self.transits = transits;
        self
    }

    #[must_use]
    pub fn with_cusps(mut self, cusps: HouseCusps) -> Self {
        self.cusps = Some(cusps);
        self
    }

    #[must_use]
    pub fn with_transit_epoch(mut self, epoch: DateTime<Utc>) -> Self {
        self.transit_epoch = Some(epoch);
        self
    }

    /// Parses the upstream JSON shape.
    ///
    /// A missing ascendant falls back to Aries; a cusp list of the wrong
    /// length is rejected.
    pub fn from_json_str(input: &str) -> LayoutResult<Self> {
        let record: ChartInputRecord = serde_json::from_str(input).map_err(|e| {
            LayoutError::InvalidData(format!("failed to parse chart input json: {e}"))
        })?;
        let ascendant = record.ascendant.unwrap_or_default().resolve()?;
        let cusps = record
            .cusps
            .as_deref()
            .map(HouseCusps::new)
            .transpose()?;

        Ok(Self {
            ascendant,
            bodies: record
                .bodies
                .into_iter()
                .map(|body| body.into_body(BodyOrigin::Natal))
                .collect(),
            transits: record
                .transits
                .into_iter()
                .map(|body| body.into_body(BodyOrigin::Transit))
                .collect(),
            cusps,
            transit_epoch: record.transit_epoch,
        })
    }
}
