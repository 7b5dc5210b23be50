//! Callback Registry
//!
//! Maps controls to the handlers that depend on them. A control change
//! dispatches every callback listing that control as an input, in
//! registration order, each against the same selection snapshot.

use std::time::Instant;

use super::callbacks;
use super::error::{CallbackError, RegistryError};
use super::ids::{ControlId, OutputId};
use crate::chart::Figure;
use crate::dataset::LaunchTable;
use crate::view::FilterSelection;

/// A recomputation handler: pure over the shared table and the selection
pub type Handler = fn(&LaunchTable, &FilterSelection) -> Result<Figure, CallbackError>;

/// One registered output and the controls it reads
pub struct Callback {
    output: OutputId,
    inputs: Vec<ControlId>,
    handler: Handler,
}

impl Callback {
    pub fn output(&self) -> OutputId {
        self.output
    }

    pub fn inputs(&self) -> &[ControlId] {
        &self.inputs
    }

    /// Whether a change to `control` should rerun this callback
    pub fn is_triggered_by(&self, control: ControlId) -> bool {
        self.inputs.contains(&control)
    }
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback")
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .finish()
    }
}

/// Result of running one callback
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub output: OutputId,
    pub result: Result<Figure, CallbackError>,
}

/// Registry of all callbacks on the page
#[derive(Debug, Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry wired for the launch dashboard
    ///
    /// - `success-pie-chart` ← `site-dropdown`
    /// - `success-payload-scatter-chart` ← `site-dropdown`, `payload-slider`
    pub fn dashboard() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register(
            OutputId::SuccessPieChart,
            &[ControlId::SiteDropdown],
            callbacks::update_pie_chart,
        )?;
        registry.register(
            OutputId::SuccessPayloadScatterChart,
            &[ControlId::SiteDropdown, ControlId::PayloadSlider],
            callbacks::update_scatter_chart,
        )?;
        Ok(registry)
    }

    /// Register a handler for `output`
    ///
    /// Each output may have at most one callback.
    pub fn register(
        &mut self,
        output: OutputId,
        inputs: &[ControlId],
        handler: Handler,
    ) -> Result<(), RegistryError> {
        if inputs.is_empty() {
            return Err(RegistryError::NoInputs(output));
        }
        if self.callbacks.iter().any(|c| c.output == output) {
            return Err(RegistryError::DuplicateOutput(output));
        }

        tracing::debug!(output = %output, inputs = ?inputs, "Registered callback");

        self.callbacks.push(Callback {
            output,
            inputs: inputs.to_vec(),
            handler,
        });
        Ok(())
    }

    /// All registered callbacks in registration order
    pub fn callbacks(&self) -> &[Callback] {
        &self.callbacks
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Run the callbacks affected by `trigger`
    ///
    /// `None` is the initial render and runs every callback. A failing
    /// callback only affects its own update.
    pub fn dispatch(
        &self,
        table: &LaunchTable,
        trigger: Option<ControlId>,
        selection: &FilterSelection,
    ) -> Vec<Update> {
        self.callbacks
            .iter()
            .filter(|c| trigger.map_or(true, |control| c.is_triggered_by(control)))
            .map(|c| {
                let started = Instant::now();
                let result = (c.handler)(table, selection);

                match &result {
                    Ok(_) => tracing::debug!(
                        output = %c.output,
                        elapsed_us = started.elapsed().as_micros() as u64,
                        "Callback completed"
                    ),
                    Err(e) => tracing::warn!(output = %c.output, error = %e, "Callback failed"),
                }

                Update {
                    output: c.output,
                    result,
                }
            })
            .collect()
    }
}
