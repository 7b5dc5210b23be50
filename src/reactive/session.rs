//! Dashboard Session
//!
//! Per-client control state. A session moves
//! `AwaitingInput → Recomputing → AwaitingInput` for every control change;
//! the recomputation runs synchronously, so changes on one session never
//! overlap.

use std::sync::Arc;

use super::error::CallbackError;
use super::ids::{ControlChange, ControlId};
use super::registry::{CallbackRegistry, Update};
use crate::dataset::LaunchTable;
use crate::view::FilterSelection;

/// Where a session is in its input cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    Recomputing,
}

/// One client's view of the dashboard
pub struct Session {
    table: Arc<LaunchTable>,
    registry: Arc<CallbackRegistry>,
    selection: FilterSelection,
    phase: Phase,
}

impl Session {
    /// Start a session with the controls at their defaults
    pub fn new(table: Arc<LaunchTable>, registry: Arc<CallbackRegistry>) -> Self {
        let selection = FilterSelection::defaults(table.payload_bounds());
        Self {
            table,
            registry,
            selection,
            phase: Phase::AwaitingInput,
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Compute every output for the current selection
    pub fn render_all(&mut self) -> Vec<Update> {
        self.recompute(None)
    }

    /// Apply a raw control value and recompute the outputs that depend on it
    ///
    /// An invalid value leaves the selection untouched and recomputes nothing.
    pub fn control_changed(
        &mut self,
        control: ControlId,
        value: serde_json::Value,
    ) -> Result<Vec<Update>, CallbackError> {
        let change = ControlChange::parse(control, value)?;
        Ok(self.apply(change))
    }

    /// Apply a typed control change and recompute dependent outputs
    pub fn apply(&mut self, change: ControlChange) -> Vec<Update> {
        let control = change.control();
        match change {
            ControlChange::Site(site) => self.selection.site = site,
            ControlChange::Payload(range) => self.selection.payload = range,
        }
        self.recompute(Some(control))
    }

    fn recompute(&mut self, trigger: Option<ControlId>) -> Vec<Update> {
        self.phase = Phase::Recomputing;
        tracing::debug!(
            trigger = ?trigger,
            site = %self.selection.site,
            low = self.selection.payload.low(),
            high = self.selection.payload.high(),
            "Recomputing outputs"
        );

        let updates = self.registry.dispatch(&self.table, trigger, &self.selection);

        self.phase = Phase::AwaitingInput;
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, Outcome};
    use crate::reactive::OutputId;
    use crate::view::{PayloadRange, SiteSelection};
    use serde_json::json;

    fn session() -> Session {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("A", 0.0, "v1.0", Outcome::Failure),
            LaunchRecord::new("B", 4000.0, "FT", Outcome::Success),
            LaunchRecord::new("B", 9600.0, "B5", Outcome::Success),
        ])
        .unwrap();
        Session::new(
            Arc::new(table),
            Arc::new(CallbackRegistry::dashboard().unwrap()),
        )
    }

    #[test]
    fn test_defaults() {
        let session = session();
        assert_eq!(session.phase(), Phase::AwaitingInput);
        assert_eq!(session.selection().site, SiteSelection::All);
        assert_eq!(
            session.selection().payload,
            PayloadRange::new(0.0, 9600.0).unwrap()
        );
    }

    #[test]
    fn test_render_all_returns_to_awaiting_input() {
        let mut session = session();
        let updates = session.render_all();
        assert_eq!(updates.len(), 2);
        assert_eq!(session.phase(), Phase::AwaitingInput);
    }

    #[test]
    fn test_site_change_updates_both_charts() {
        let mut session = session();
        let updates = session
            .control_changed(ControlId::SiteDropdown, json!("B"))
            .unwrap();

        let outputs: Vec<OutputId> = updates.iter().map(|u| u.output).collect();
        assert_eq!(
            outputs,
            vec![OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart]
        );
        assert_eq!(session.selection().site, SiteSelection::from("B"));
    }

    #[test]
    fn test_invalid_range_keeps_selection() {
        let mut session = session();
        let before = session.selection().clone();

        let result = session.control_changed(ControlId::PayloadSlider, json!([9000, 1000]));
        assert!(result.is_err());
        assert_eq!(session.selection(), &before);
        assert_eq!(session.phase(), Phase::AwaitingInput);
    }

    #[test]
    fn test_selection_persists_across_changes() {
        let mut session = session();
        session
            .control_changed(ControlId::PayloadSlider, json!([1000, 5000]))
            .unwrap();
        session
            .control_changed(ControlId::SiteDropdown, json!("A"))
            .unwrap();

        assert_eq!(session.selection().site, SiteSelection::from("A"));
        assert_eq!(
            session.selection().payload,
            PayloadRange::new(1000.0, 5000.0).unwrap()
        );
    }
}
