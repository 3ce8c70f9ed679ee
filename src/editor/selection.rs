// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The armed-tool selection state.

use crate::geometry::{EdgeId, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    /// Waiting for the face that receives a new point.
    PointArmed,
    /// Waiting for the vertex to move.
    VertexArmed,
    /// Waiting for the new position of this vertex.
    VertexSelected(VertexId),
    /// Waiting for an edge.
    EdgeArmed,
    /// This edge waits to be flipped.
    EdgeSelected(EdgeId),
}

/// The tools a user can arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    AddPoint,
    MovePoint,
    SelectEdge,
}

impl Selection {
    pub fn prompt(&self) -> &'static str {
        match self {
            Selection::Idle => "waiting for a new action...",
            Selection::PointArmed => "click inside a face to add a new point",
            Selection::VertexArmed => "select the point to move",
            Selection::VertexSelected(_) => "click where the point should go",
            Selection::EdgeArmed => "select an edge",
            Selection::EdgeSelected(_) => "flip the selected edge up or down",
        }
    }

    pub fn tool(&self) -> Option<Tool> {
        match self {
            Selection::Idle => None,
            Selection::PointArmed => Some(Tool::AddPoint),
            Selection::VertexArmed | Selection::VertexSelected(_) => Some(Tool::MovePoint),
            Selection::EdgeArmed | Selection::EdgeSelected(_) => Some(Tool::SelectEdge),
        }
    }

    /// The interaction that is mid-way, if another command would interrupt it.
    pub fn sequence(&self) -> Option<&'static str> {
        match self.tool() {
            Some(Tool::AddPoint) => Some("point insertion"),
            Some(Tool::MovePoint) => Some("point move"),
            Some(Tool::SelectEdge) | None => None,
        }
    }

    /// State entered when `tool` is armed from here.
    pub(crate) fn armed(&self, tool: Tool) -> Selection {
        if self.tool() == Some(tool) {
            return Selection::Idle;
        }
        match tool {
            Tool::AddPoint => Selection::PointArmed,
            Tool::MovePoint => Selection::VertexArmed,
            Tool::SelectEdge => Selection::EdgeArmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arming_toggles() {
        let armed = Selection::Idle.armed(Tool::AddPoint);
        assert_eq!(armed, Selection::PointArmed);
        assert_eq!(armed.armed(Tool::AddPoint), Selection::Idle);
        assert_eq!(
            Selection::EdgeSelected(EdgeId::default()).armed(Tool::SelectEdge),
            Selection::Idle
        );
    }

    #[test]
    fn test_sequences() {
        assert_eq!(Selection::Idle.sequence(), None);
        assert_eq!(Selection::EdgeArmed.sequence(), None);
        assert_eq!(
            Selection::VertexSelected(VertexId::default()).sequence(),
            Some("point move")
        );
        assert_eq!(Selection::default().prompt(), "waiting for a new action...");
    }
}
