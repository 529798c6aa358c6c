use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::placement::ChartPlacement;

pub const PLACEMENT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementJsonContractV1 {
    pub schema_version: u32,
    pub placement: ChartPlacement,
}

impl ChartPlacement {
    pub fn to_json_contract_v1_pretty(&self) -> LayoutResult<String> {
        let payload = PlacementJsonContractV1 {
            schema_version: PLACEMENT_JSON_SCHEMA_V1,
            placement: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            LayoutError::InvalidData(format!("failed to serialize placement contract v1: {e}"))
        })
    }

    /// Accepts either a bare placement or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> LayoutResult<Self> {
        let placement = match serde_json::from_str::<ChartPlacement>(input) {
            Ok(placement) => placement,
            Err(_) => {
                let payload: PlacementJsonContractV1 =
                    serde_json::from_str(input).map_err(|e| {
                        LayoutError::InvalidData(format!(
                            "failed to parse placement json payload: {e}"
                        ))
                    })?;
                if payload.schema_version != PLACEMENT_JSON_SCHEMA_V1 {
                    return Err(LayoutError::InvalidData(format!(
                        "unsupported placement schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.placement
            }
        };
        validate_placement(&placement)?;
        Ok(placement)
    }
}

// Decoded payloads bypass the assembler, so re-check what it guarantees:
// cells and houses in range, each entry's sign and cell consistent with its
// house under the decoded ascendant, and gap-free slot numbering per cell.
fn validate_placement(placement: &ChartPlacement) -> LayoutResult<()> {
    let convention = placement.request.convention;
    let rising = placement.request.ascendant.sign;
    let mut next_slot = [0usize; 12];
    for entry in placement.entries() {
        convention.cell(entry.cell)?;
        crate::core::rotation::validate_house(entry.house)?;
        let drawn = rising.for_house(entry.house)?;
        if entry.sign != drawn {
            return Err(LayoutError::InvalidData(format!(
                "`{}` in house {} is tagged {} but that house shows {}",
                entry.body_name, entry.house, entry.sign, drawn
            )));
        }
        let cell = convention.cell_for(entry.house, entry.sign);
        if entry.cell != cell {
            return Err(LayoutError::InvalidData(format!(
                "`{}` belongs in cell {}, found {}",
                entry.body_name, cell, entry.cell
            )));
        }
        let expected = &mut next_slot[usize::from(entry.cell - 1)];
        if entry.slot_index != *expected {
            return Err(LayoutError::InvalidData(format!(
                "cell {} expected slot {} for `{}`, found {}",
                entry.cell, expected, entry.body_name, entry.slot_index
            )));
        }
        *expected += 1;
    }
    Ok(())
}
