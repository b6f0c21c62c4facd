//! Vehicle Registry
//!
//! Exclusive owner of vehicle records. Ids are assigned sequentially
//! and never reused; vehicles are never removed.

use std::collections::BTreeMap;

use crate::domain::shared::{TreasuryError, VehicleId};
use crate::domain::vehicle_registry::aggregate::{InvestmentVehicle, RegisterVehicleCommand};

/// In-memory registry of investment vehicles.
#[derive(Debug, Default, Clone)]
pub struct VehicleRegistry {
    vehicles: BTreeMap<VehicleId, InvestmentVehicle>,
    next_id: u64,
}

impl VehicleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vehicles: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Register a new vehicle, assigning the next sequential id.
    ///
    /// # Errors
    ///
    /// Returns error if the registration command is invalid. The id
    /// counter does not advance on failure.
    pub fn register(&mut self, cmd: RegisterVehicleCommand) -> Result<VehicleId, TreasuryError> {
        let id = VehicleId::new(self.next_id);
        let vehicle = InvestmentVehicle::new(id, cmd)?;
        self.next_id += 1;
        self.vehicles.insert(id, vehicle);
        Ok(id)
    }

    /// Look up a vehicle by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is unknown.
    pub fn get(&self, id: VehicleId) -> Result<&InvestmentVehicle, TreasuryError> {
        self.vehicles.get(&id).ok_or_else(|| TreasuryError::NotFound {
            entity: "vehicle".to_string(),
            id: id.to_string(),
        })
    }

    /// Look up a vehicle for mutation.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is unknown.
    pub(crate) fn get_mut(
        &mut self,
        id: VehicleId,
    ) -> Result<&mut InvestmentVehicle, TreasuryError> {
        self.vehicles
            .get_mut(&id)
            .ok_or_else(|| TreasuryError::NotFound {
                entity: "vehicle".to_string(),
                id: id.to_string(),
            })
    }

    /// Iterate over all vehicles in id order.
    pub fn iter(&self) -> impl Iterator<Item = &InvestmentVehicle> {
        self.vehicles.values()
    }

    /// Number of registered vehicles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns true if no vehicle has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
