//! The machine abstraction and the pointer-keyed dispatch registry.

use crate::config::MachineConfig;
use crate::error::{CoreError, CoreResult};
use crate::successor::SuccessorMachine;
use crate::sum::SumMachine;
use natprove_api::{ProofRequest, ProofResponse};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// A hosted proof machine: answers requests about one statement family.
pub trait Machine: Send + Sync {
    /// Platform pointer this machine is registered under.
    fn pointer(&self) -> &str;

    /// Answer one request. Statements the machine cannot interpret get
    /// an `UNKNOWN` verdict, not an error.
    fn respond(&self, request: &ProofRequest) -> ProofResponse;
}

/// Pointer-keyed table of the machines this service hosts.
#[derive(Default)]
pub struct MachineRegistry {
    machines: HashMap<String, Arc<dyn Machine>>,
}

impl MachineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry hosting the standard arithmetic machines, configured
    /// and validated from `config`.
    pub fn standard(config: MachineConfig) -> CoreResult<Self> {
        config.validate()?;
        let mut registry = Self::new();
        registry.register(Arc::new(SuccessorMachine::new(config.clone())));
        registry.register(Arc::new(SumMachine::new(config)));
        Ok(registry)
    }

    pub fn register(&mut self, machine: Arc<dyn Machine>) {
        info!(pointer = machine.pointer(), "registered machine");
        self.machines.insert(machine.pointer().to_string(), machine);
    }

    /// Dispatch a request to the machine its pointer names.
    pub fn dispatch(&self, request: &ProofRequest) -> CoreResult<ProofResponse> {
        let machine = self
            .machines
            .get(&request.machine_pointer)
            .ok_or_else(|| CoreError::unknown_machine(&request.machine_pointer))?;
        debug!(
            pointer = %request.machine_pointer,
            statement = %request.proposition.statement,
            "dispatching proof request"
        );
        Ok(machine.respond(request))
    }

    /// Pointers of every registered machine, sorted for stable output.
    pub fn pointers(&self) -> Vec<&str> {
        let mut pointers: Vec<&str> = self.machines.keys().map(String::as_str).collect();
        pointers.sort_unstable();
        pointers
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }
}
