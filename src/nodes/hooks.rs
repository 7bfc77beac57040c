//! Observer hooks for downstream notifications
//!
//! The engine notifies registered observers of every "output updated" /
//! "output invalidated" signal it routes, including signals raised while a
//! delivery cascades through downstream nodes. UI layers use this to repaint
//! affected nodes without polling the whole graph.

use super::node::NodeId;
use super::port::PortId;

/// Trait for host-side observers of routing signals
pub trait GraphObserver: Send {
    /// An output port holds fresh data (possibly empty after a compute error)
    fn on_output_updated(&mut self, _node: NodeId, _port: PortId) {}

    /// An output port's previous data no longer holds
    fn on_output_invalidated(&mut self, _node: NodeId, _port: PortId) {}
}
