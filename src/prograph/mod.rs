// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The PC-prograph: the planar dual of a triangulation.
//!
//! Each face becomes a node (BLUE faces are products, RED faces coproducts)
//! and each edge becomes a wire from the producer's output port to the
//! consumer's input port. The root edge crosses infinity; its wire is the open
//! leg shared by the two outer nodes.
//!
//! A prograph is a pure function of its triangulation. It is rebuilt after
//! every committed edit and never patched.

use std::fmt;

use slotmap::SecondaryMap;
use tracing::warn;

use crate::errors::{ConsistencyError, Element};
use crate::geometry::{Color, EdgeId, FaceId, Port};
use crate::triangulation::Triangulation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Product,
    Coproduct,
}

impl NodeKind {
    pub fn of(color: Color) -> Self {
        match color {
            Color::Blue => NodeKind::Product,
            Color::Red => NodeKind::Coproduct,
        }
    }

    pub fn color(self) -> Color {
        match self {
            NodeKind::Product => Color::Blue,
            NodeKind::Coproduct => Color::Red,
        }
    }

    pub fn opposite(self) -> Self {
        NodeKind::of(self.color().opposite())
    }

    pub fn ports(self) -> [Port; 3] {
        Port::of(self.color())
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Product => write!(f, "product"),
            NodeKind::Coproduct => write!(f, "coproduct"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub face: FaceId,
    pub kind: NodeKind,
    /// Wire index at each port, in [`Port::slot`] order.
    pub ports: [usize; 3],
    /// One of the two nodes sharing the open leg.
    pub at_infinity: bool,
}

impl Node {
    pub fn wire(&self, port: Port) -> Option<usize> {
        (port.color() == self.kind.color()).then(|| self.ports[port.slot()])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub node: usize,
    pub port: Port,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wire {
    pub edge: EdgeId,
    /// Output port of the producing node.
    pub source: Endpoint,
    /// Input port of the consuming node.
    pub target: Endpoint,
    pub at_infinity: bool,
}

#[derive(Debug, Clone)]
pub struct PcProgram {
    nodes: Vec<Node>,
    wires: Vec<Wire>,
    node_of_face: SecondaryMap<FaceId, usize>,
    wire_of_edge: SecondaryMap<EdgeId, usize>,
    entry: usize,
    exit: usize,
    root: usize,
}

impl PcProgram {
    pub fn build(triangulation: &Triangulation) -> Result<Self, ConsistencyError> {
        let mut nodes = Vec::with_capacity(triangulation.face_count());
        let mut node_of_face = SecondaryMap::new();
        for (face, _) in triangulation.faces() {
            let kind = NodeKind::of(triangulation.color(face)?);
            node_of_face.insert(face, nodes.len());
            nodes.push(Node {
                face,
                kind,
                ports: [usize::MAX; 3],
                at_infinity: triangulation.is_outer(face),
            });
        }

        let mut wires = Vec::with_capacity(triangulation.edge_count());
        let mut wire_of_edge = SecondaryMap::new();
        for (edge, e) in triangulation.edges() {
            let index = wires.len();
            let mut endpoint = |face: FaceId| -> Result<Endpoint, ConsistencyError> {
                let node = *node_of_face
                    .get(face)
                    .ok_or(ConsistencyError::Dangling(Element::Face(face)))?;
                let port = triangulation.port_of(edge, face)?;
                nodes[node].ports[port.slot()] = index;
                Ok(Endpoint { node, port })
            };
            let source = endpoint(e.producer)?;
            let target = endpoint(e.consumer)?;
            wire_of_edge.insert(edge, index);
            wires.push(Wire {
                edge,
                source,
                target,
                at_infinity: edge == triangulation.root(),
            });
        }

        let lookup = |face: FaceId| {
            node_of_face
                .get(face)
                .copied()
                .ok_or(ConsistencyError::Dangling(Element::Face(face)))
        };
        let root = triangulation.root();
        let program = PcProgram {
            entry: lookup(triangulation.top_face()?)?,
            exit: lookup(triangulation.bottom_face()?)?,
            root: wire_of_edge
                .get(root)
                .copied()
                .ok_or(ConsistencyError::Dangling(Element::Edge(root)))?,
            nodes,
            wires,
            node_of_face,
            wire_of_edge,
        };
        program.validate()?;
        Ok(program)
    }

    /// Every node has three distinct wires, one per port, each pointing back
    /// at it. The two infinity nodes have two ordinary wires plus the open leg.
    pub fn validate(&self) -> Result<(), ConsistencyError> {
        for (index, node) in self.nodes.iter().enumerate() {
            let mut degree = 0;
            let mut legs = 0;
            for (slot, &wire) in node.ports.iter().enumerate() {
                let Some(w) = self.wires.get(wire) else {
                    continue;
                };
                let port = node.kind.ports()[slot];
                let end = if port.is_output() { w.source } else { w.target };
                if end.node != index || end.port != port {
                    continue;
                }
                if w.at_infinity {
                    legs += 1;
                } else {
                    degree += 1;
                }
            }
            let expected = if node.at_infinity { (2, 1) } else { (3, 0) };
            if (degree, legs) != expected {
                warn!(face = ?node.face, degree, legs, "dual node has the wrong degree");
                return Err(ConsistencyError::DualDegree {
                    face: node.face,
                    degree: degree + legs,
                });
            }
        }
        let entry = self.node(self.entry)?;
        let exit = self.node(self.exit)?;
        if entry.kind != NodeKind::Coproduct || exit.kind != NodeKind::Product {
            return Err(ConsistencyError::Root);
        }
        Ok(())
    }

    /// The mirror image: node kinds swap, each node reads its ports backwards
    /// and each wire runs the other way.
    pub fn mirrored(&self) -> Self {
        let nodes = self
            .nodes
            .iter()
            .map(|node| {
                let [a, b, c] = node.ports;
                Node {
                    kind: node.kind.opposite(),
                    ports: [c, b, a],
                    ..*node
                }
            })
            .collect();
        let wires = self
            .wires
            .iter()
            .map(|wire| Wire {
                source: Endpoint {
                    node: wire.target.node,
                    port: wire.target.port.mirror(),
                },
                target: Endpoint {
                    node: wire.source.node,
                    port: wire.source.port.mirror(),
                },
                ..*wire
            })
            .collect();
        PcProgram {
            nodes,
            wires,
            node_of_face: self.node_of_face.clone(),
            wire_of_edge: self.wire_of_edge.clone(),
            entry: self.exit,
            exit: self.entry,
            root: self.root,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    pub fn node(&self, index: usize) -> Result<&Node, ConsistencyError> {
        self.nodes
            .get(index)
            .ok_or(ConsistencyError::Traversal("node index out of range"))
    }

    pub fn wire(&self, index: usize) -> Result<&Wire, ConsistencyError> {
        self.wires
            .get(index)
            .ok_or(ConsistencyError::Traversal("wire index out of range"))
    }

    pub fn node_of(&self, face: FaceId) -> Option<usize> {
        self.node_of_face.get(face).copied()
    }

    pub fn wire_of(&self, edge: EdgeId) -> Option<usize> {
        self.wire_of_edge.get(edge).copied()
    }

    /// The coproduct at infinity, consuming the open leg.
    pub fn entry(&self) -> usize {
        self.entry
    }

    /// The product at infinity, producing the open leg.
    pub fn exit(&self) -> usize {
        self.exit
    }

    pub fn root_wire(&self) -> usize {
        self.root
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|node| node.kind == kind).count()
    }
}

impl PartialEq for PcProgram {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
            && self.wires == other.wires
            && self.entry == other.entry
            && self.exit == other.exit
            && self.root == other.root
    }
}

impl Eq for PcProgram {}

#[cfg(test)]
mod tests {
    use super::*;

    fn grown() -> Triangulation {
        let mut t = Triangulation::new();
        let top = t.top_face().unwrap();
        let insertion = t.add_point(top).unwrap();
        t.add_point(insertion.faces[2]).unwrap();
        t
    }

    #[test]
    fn test_minimal_prograph() {
        let t = Triangulation::new();
        let p = PcProgram::build(&t).unwrap();
        assert_eq!(p.nodes().len(), 2);
        assert_eq!(p.wires().len(), 3);
        assert_eq!(p.count(NodeKind::Product), 1);
        assert_eq!(p.count(NodeKind::Coproduct), 1);
        let entry = p.node(p.entry()).unwrap();
        assert!(entry.at_infinity);
        assert_eq!(entry.wire(Port::Input), Some(p.root_wire()));
        assert_eq!(entry.wire(Port::Output), None);
        assert!(p.wire(p.root_wire()).unwrap().at_infinity);
    }

    #[test]
    fn test_wires_join_output_to_input() {
        let t = grown();
        let p = PcProgram::build(&t).unwrap();
        assert_eq!(p.nodes().len(), t.face_count());
        for wire in p.wires() {
            assert!(wire.source.port.is_output());
            assert!(wire.target.port.is_input());
            let edge = t.edge(wire.edge).unwrap();
            assert_eq!(p.node_of(edge.producer), Some(wire.source.node));
            assert_eq!(p.node_of(edge.consumer), Some(wire.target.node));
        }
    }

    #[test]
    fn test_degree_mismatch_is_detected() {
        let t = grown();
        let mut p = PcProgram::build(&t).unwrap();
        let inner = p.nodes.iter().position(|n| !n.at_infinity).unwrap();
        p.nodes[inner].ports[0] = p.nodes[inner].ports[1];
        assert!(matches!(
            p.validate(),
            Err(ConsistencyError::DualDegree { degree: 2, .. })
        ));
    }

    #[test]
    fn test_mirror_is_involutive() {
        let p = PcProgram::build(&grown()).unwrap();
        let m = p.mirrored();
        assert_ne!(m, p);
        assert_eq!(m.count(NodeKind::Product), p.count(NodeKind::Coproduct));
        m.validate().unwrap();
        assert_eq!(m.mirrored(), p);
    }

    #[test]
    fn test_mirror_matches_reversed_triangulation() {
        let mut t = grown();
        let p = PcProgram::build(&t).unwrap();
        t.reverse_orientation();
        assert_eq!(PcProgram::build(&t).unwrap(), p.mirrored());
    }
}
