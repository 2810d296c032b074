use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};
use crate::render::Renderer;

use super::{LightCurveViewer, ViewerSnapshot};

pub const VIEWER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ViewerSnapshot,
}

impl ViewerSnapshot {
    pub fn to_json_pretty(&self) -> ViewerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ViewerError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ViewerResult<String> {
        let payload = ViewerSnapshotJsonContractV1 {
            schema_version: VIEWER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ViewerError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts a bare snapshot or a versioned v1 envelope.
    pub fn from_json_compat_str(input: &str) -> ViewerResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ViewerSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ViewerSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ViewerError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != VIEWER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ViewerError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> LightCurveViewer<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> ViewerResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }

    /// Restores the persisted parts of a snapshot: visibility, view mode,
    /// viewport and candidate selection. Curves and candidates are not part of
    /// the blob and must already be loaded.
    pub fn restore_view_from_json(&mut self, input: &str) -> ViewerResult<()> {
        let snapshot = ViewerSnapshot::from_json_compat_str(input)?;
        self.set_visibility(snapshot.visibility);
        self.set_view_mode(snapshot.view_mode)?;
        match snapshot.view_range {
            Some(range) => self.set_forced_view_range(Some((range.lo, range.hi)))?,
            None => self.reset_view(),
        }
        let selection = snapshot
            .selected_candidate
            .filter(|&index| index < self.candidates.len());
        self.state.select_candidate(selection);
        Ok(())
    }
}
