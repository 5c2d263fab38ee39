//! Shared constants for the ripple CLI.

/// The built-in seed knowledge base.
///
/// A small car-domain document used when no input is provided via `--text`,
/// `--file`, or configuration. Keeps every command runnable out of the box
/// and doubles as a quick demo of the extraction pipeline.
pub const SEED_KNOWLEDGE_BASE: &str = "The Battery powers the Engine. \
The Engine drives the Wheels. \
The Wheels support the Chassis. \
The Chassis holds the PassengerSeat. \
The CoolingSystem cools the Engine. \
The Chipset controls the CoolingSystem.";
