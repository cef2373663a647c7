//! Built-in [`ActionProvider`](crate::ActionProvider) implementations.
mod autopilot;
mod scripted;

pub use autopilot::AutoPilotProvider;
pub use scripted::ScriptedProvider;
