// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The editor: one owned state object behind an explicit command interface.
//!
//! The editor holds the committed triangulation together with everything
//! derived from it (prograph, labelled tableau) and the layout. Structural
//! commands run on a scratch copy; the derived representations are rebuilt
//! from the copy and the whole bundle replaces the committed one only when
//! every step succeeded. A failed command leaves all of it untouched.
//!
//! Every command records its outcome: failures become the status message and
//! are counted by kind in the [`Statistics`].

pub mod selection;
pub mod statistics;

pub use selection::{Selection, Tool};
pub use statistics::{Counters, Statistics};

use kurbo::Point;
use tracing::{debug, info, warn};

use crate::errors::{ConsistencyError, EditError, Element};
use crate::geometry::plane::inside_disc;
use crate::geometry::{EdgeId, FaceId, VertexId};
use crate::layout::Layout;
use crate::prograph::PcProgram;
use crate::symmetry;
use crate::tableau::{LabelledTableau, Tableau, TableauBuilder};
use crate::triangulation::{FlipDirection, Triangulation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    /// Run the full invariant check on every commit.
    pub full_validation: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            full_validation: true,
        }
    }
}

/// The committed state: a triangulation and everything derived from it.
#[derive(Debug, Clone)]
struct Committed {
    triangulation: Triangulation,
    prograph: PcProgram,
    tableau: LabelledTableau,
    layout: Layout,
}

impl Committed {
    fn derive(
        triangulation: Triangulation,
        layout: Layout,
        config: &EditorConfig,
    ) -> Result<Self, ConsistencyError> {
        if config.full_validation {
            triangulation.validate()?;
        }
        let prograph = PcProgram::build(&triangulation)?;
        let tableau = TableauBuilder::build_labelled(&prograph)?;
        Ok(Self {
            triangulation,
            prograph,
            tableau,
            layout,
        })
    }

    fn minimal(config: &EditorConfig) -> Result<Self, ConsistencyError> {
        let triangulation = Triangulation::new();
        let layout = Layout::minimal(&triangulation)?;
        Self::derive(triangulation, layout, config)
    }
}

#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    state: Committed,
    selection: Selection,
    overlay: bool,
    status: Option<String>,
    statistics: Statistics,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Result<Self, ConsistencyError> {
        Ok(Self {
            config,
            state: Committed::minimal(&config)?,
            selection: Selection::Idle,
            overlay: false,
            status: None,
            statistics: Statistics::new(),
        })
    }

    // Queries.

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn triangulation(&self) -> &Triangulation {
        &self.state.triangulation
    }

    pub fn prograph(&self) -> &PcProgram {
        &self.state.prograph
    }

    pub fn tableau(&self) -> &Tableau {
        &self.state.tableau.tableau
    }

    pub fn labels(&self) -> &LabelledTableau {
        &self.state.tableau
    }

    pub fn edge_by_label(&self, label: usize) -> Option<EdgeId> {
        self.state.tableau.edge(label)
    }

    pub fn label_of(&self, edge: EdgeId) -> Option<usize> {
        self.state.tableau.label_of(edge)
    }

    pub fn layout(&self) -> &Layout {
        &self.state.layout
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn overlay_enabled(&self) -> bool {
        self.overlay
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Text for the status line: the last failure, or a prompt for the
    /// current selection state.
    pub fn status_message(&self) -> &str {
        self.status
            .as_deref()
            .unwrap_or_else(|| self.selection.prompt())
    }

    // Selection commands.

    pub fn arm_add_point(&mut self) -> Result<(), EditError> {
        self.arm(Tool::AddPoint)
    }

    pub fn arm_move_point(&mut self) -> Result<(), EditError> {
        self.arm(Tool::MovePoint)
    }

    pub fn arm_select_edge(&mut self) -> Result<(), EditError> {
        self.arm(Tool::SelectEdge)
    }

    fn arm(&mut self, tool: Tool) -> Result<(), EditError> {
        let result = match self.selection.sequence() {
            Some(sequence) if self.selection.tool() != Some(tool) => Err(EditError::Busy(sequence)),
            _ => {
                self.selection = self.selection.armed(tool);
                Ok(())
            }
        };
        self.record(result)
    }

    /// Drop any armed tool or selection.
    pub fn cancel(&mut self) {
        self.selection = Selection::Idle;
        self.status = None;
    }

    pub fn select_vertex_for_move(&mut self, vertex: VertexId) -> Result<(), EditError> {
        let result = self.allow_from(Some(Tool::MovePoint)).and_then(|()| {
            if self.state.triangulation.find_vertex(vertex)?.is_extremal() {
                return Err(EditError::ForbiddenMove(vertex));
            }
            Ok(())
        });
        if result.is_ok() {
            self.selection = Selection::VertexSelected(vertex);
        }
        self.record(result)
    }

    pub fn select_edge(&mut self, edge: EdgeId) -> Result<(), EditError> {
        let result = self
            .allow_from(Some(Tool::SelectEdge))
            .and_then(|()| self.state.triangulation.find_edge(edge).map(|_| ()));
        if result.is_ok() {
            self.selection = Selection::EdgeSelected(edge);
        }
        self.record(result)
    }

    pub fn select_edge_by_label(&mut self, label: usize) -> Result<(), EditError> {
        match self.edge_by_label(label) {
            Some(edge) => self.select_edge(edge),
            None => self.record(Err(EditError::NotFound(Element::Label(label)))),
        }
    }

    /// Refuse with [`EditError::Busy`] when a sequence of a tool other than
    /// `tool` is mid-way.
    fn allow_from(&self, tool: Option<Tool>) -> Result<(), EditError> {
        match self.selection.sequence() {
            Some(sequence) if self.selection.tool() != tool => Err(EditError::Busy(sequence)),
            _ => Ok(()),
        }
    }

    // Structural commands.

    /// Reset to the minimal triangulation. Always allowed.
    pub fn reset(&mut self) -> Result<(), EditError> {
        let result = Committed::minimal(&self.config).map(|state| {
            self.state = state;
            self.selection = Selection::Idle;
            self.statistics.increment_counter(Counters::Resets);
            info!("reset to the minimal triangulation");
        });
        self.record(result.map_err(EditError::from))
    }

    /// Insert a point into `face`, placed at the layout's default position.
    pub fn add_point(&mut self, face: FaceId) -> Result<VertexId, EditError> {
        let result = self.allow_from(Some(Tool::AddPoint)).and_then(|()| {
            self.commit(|triangulation, layout| {
                if triangulation.face(face).is_none() {
                    return Err(EditError::InvalidTarget(face));
                }
                let point = layout.insertion_point(triangulation, face)?;
                let insertion = triangulation.add_point(face)?;
                layout.place(insertion.vertex, point);
                Ok(insertion.vertex)
            })
        });
        if let Ok(vertex) = result {
            self.selection = Selection::Idle;
            self.statistics.increment_counter(Counters::PointsAdded);
            info!(?vertex, size = self.tableau().size(), "committed point insertion");
        }
        self.record(result)
    }

    /// Insert a point at `point`, into whichever face contains it.
    ///
    /// A point outside the disc is rejected and nothing is inserted.
    pub fn add_point_at(&mut self, point: Point) -> Result<VertexId, EditError> {
        let result = self.allow_from(Some(Tool::AddPoint)).and_then(|()| {
            let face = self.state.layout.locate(&self.state.triangulation, point)?;
            self.commit(|triangulation, layout| {
                let insertion = triangulation.add_point(face)?;
                if !inside_disc(point) {
                    return Err(EditError::PlanarityViolation {
                        vertex: insertion.vertex,
                        face: None,
                    });
                }
                layout.place(insertion.vertex, point);
                Ok(insertion.vertex)
            })
        });
        if let Ok(vertex) = result {
            self.selection = Selection::Idle;
            self.statistics.increment_counter(Counters::PointsAdded);
            info!(?vertex, "committed point insertion at a position");
        }
        self.record(result)
    }

    pub fn move_selected_vertex(&mut self, point: Point) -> Result<(), EditError> {
        let result = match self.selection {
            Selection::VertexSelected(vertex) => self.commit(|triangulation, layout| {
                layout.move_point(triangulation, vertex, point)
            }),
            _ => Err(EditError::NoSelection("vertex")),
        };
        if result.is_ok() {
            self.selection = Selection::Idle;
            self.statistics.increment_counter(Counters::Moves);
            info!(x = point.x, y = point.y, "committed point move");
        }
        self.record(result)
    }

    /// Flip the selected edge. A rejected flip keeps the edge selected.
    pub fn flip_selected_edge(&mut self, direction: FlipDirection) -> Result<EdgeId, EditError> {
        let result = match self.selection {
            Selection::EdgeSelected(edge) => {
                self.commit(|triangulation, _| triangulation.flip(edge, direction))
            }
            _ => Err(EditError::NoSelection("edge")),
        };
        if let Ok(diagonal) = result {
            self.selection = Selection::Idle;
            self.statistics.increment_counter(match direction {
                FlipDirection::Up => Counters::FlipsUp,
                FlipDirection::Down => Counters::FlipsDown,
            });
            info!(?diagonal, %direction, label = self.label_of(diagonal), "committed flip");
        }
        self.record(result)
    }

    /// Returns whether the overlay is now shown.
    pub fn toggle_dual_overlay(&mut self) -> bool {
        self.overlay = !self.overlay;
        debug!(overlay = self.overlay, "toggled dual overlay");
        self.overlay
    }

    pub fn apply_involution(&mut self) -> Result<(), EditError> {
        let result = self.allow_from(None).and_then(|()| {
            let state = &self.state;
            let image =
                symmetry::apply(&state.triangulation, &state.prograph, &state.tableau.tableau)?;
            if self.config.full_validation {
                image.triangulation.validate()?;
            }
            let mut layout = state.layout.clone();
            layout.rotate_half_turn();
            Ok(Committed {
                triangulation: image.triangulation,
                prograph: image.prograph,
                tableau: image.tableau,
                layout,
            })
        });
        let result = result.map(|state| {
            self.state = state;
            self.selection = Selection::Idle;
            self.statistics.increment_counter(Counters::Involutions);
            info!(size = self.tableau().size(), "committed involution");
        });
        self.record(result)
    }

    /// Run `edit` on scratch copies and commit the rebuilt state if every step
    /// succeeds.
    fn commit<T>(
        &mut self,
        edit: impl FnOnce(&mut Triangulation, &mut Layout) -> Result<T, EditError>,
    ) -> Result<T, EditError> {
        let mut triangulation = self.state.triangulation.clone();
        let mut layout = self.state.layout.clone();
        let value = edit(&mut triangulation, &mut layout)?;
        layout.retain(&triangulation);
        self.state = Committed::derive(triangulation, layout, &self.config)?;
        Ok(value)
    }

    fn record<T>(&mut self, result: Result<T, EditError>) -> Result<T, EditError> {
        match &result {
            Ok(_) => self.status = None,
            Err(error) => {
                if error.is_user_error() {
                    debug!(%error, "command rejected");
                } else {
                    warn!(%error, "command aborted on a consistency failure");
                }
                self.statistics.record_rejection(error.kind());
                self.status = Some(error.to_string());
            }
        }
        result
    }
}
