//! Lifecycle phase vocabulary and capability detection.
//!
//! The request-processing pipeline exposes a fixed set of phases a
//! plugin may hook into. Published phase lists always follow the
//! vocabulary order below, never the order a plugin declared them in.

use crate::shape::PluginConfig;

/// A lifecycle phase a plugin may handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// TLS certificate selection.
    Certificate,
    /// Request rewriting before routing.
    Rewrite,
    /// Access control after routing.
    Access,
    /// Response header/body processing.
    Response,
    /// Pre-read handling for stream connections.
    Preread,
    /// Post-request logging.
    Log,
}

impl Phase {
    /// All phases, in the fixed vocabulary order used everywhere a
    /// phase list is published.
    pub const ALL: [Phase; 6] = [
        Phase::Certificate,
        Phase::Rewrite,
        Phase::Access,
        Phase::Response,
        Phase::Preread,
        Phase::Log,
    ];

    /// Lowercased phase name as published in descriptors.
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Certificate => "certificate",
            Phase::Rewrite => "rewrite",
            Phase::Access => "access",
            Phase::Response => "response",
            Phase::Preread => "preread",
            Phase::Log => "log",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of phases a plugin handles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseSet {
    bits: u8,
}

impl PhaseSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Detects the config's declared capabilities, testing each phase
    /// of the vocabulary in turn.
    pub fn detect(config: &dyn PluginConfig) -> Self {
        let mut set = Self::EMPTY;
        for phase in Phase::ALL {
            if config.handles(phase) {
                set.insert(phase);
            }
        }
        set
    }

    /// Adds a phase to the set.
    pub fn insert(&mut self, phase: Phase) {
        self.bits |= phase.bit();
    }

    /// Whether the set contains the given phase.
    pub fn contains(self, phase: Phase) -> bool {
        self.bits & phase.bit() != 0
    }

    /// Whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Phase names in fixed vocabulary order, regardless of insertion
    /// order.
    pub fn names(self) -> Vec<&'static str> {
        Phase::ALL
            .iter()
            .filter(|phase| self.contains(**phase))
            .map(|phase| phase.as_str())
            .collect()
    }
}
