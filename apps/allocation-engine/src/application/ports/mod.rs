//! Outbound ports to external collaborators.

mod authorization_port;

pub use authorization_port::{AuthorizationPort, StaticRoleGate};

#[cfg(test)]
pub use authorization_port::MockAuthorizationPort;
