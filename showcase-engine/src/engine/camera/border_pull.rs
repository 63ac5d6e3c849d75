use bevy::prelude::*;
use constants::camera::{BORDER_RESISTANCE_POINTER, BORDER_RESISTANCE_TOUCH};

use crate::engine::events::InputKind;
use crate::engine::state::WorldBounds;

/// One side of the world bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub fn index(self) -> usize {
        match self {
            Edge::Top => 0,
            Edge::Right => 1,
            Edge::Bottom => 2,
            Edge::Left => 3,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }

    /// True when `target` lies beyond this edge.
    pub fn exceeded_by(self, target: Vec2, bounds: &WorldBounds) -> bool {
        match self {
            Edge::Top => target.y > bounds.top,
            Edge::Right => target.x > bounds.right,
            Edge::Bottom => target.y < bounds.bottom,
            Edge::Left => target.x < bounds.left,
        }
    }

    /// Move `target` to `inset` units inside this edge, leaving the other axis alone.
    pub fn snap_inside(self, target: &mut Vec2, bounds: &WorldBounds, inset: f32) {
        match self {
            Edge::Top => target.y = bounds.top - inset,
            Edge::Right => target.x = bounds.right - inset,
            Edge::Bottom => target.y = bounds.bottom + inset,
            Edge::Left => target.x = bounds.left + inset,
        }
    }

    /// Component of a window-space point measured along this edge's pull axis.
    pub fn axis_of(self, point: Vec2) -> f32 {
        if self.is_horizontal() {
            point.x
        } else {
            point.y
        }
    }
}

/// Pull state of a single edge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgePull {
    pub pulling: bool,
    /// Pointer position when the edge was crossed.
    pub reference: Vec2,
}

/// Elastic resistance shared by all four edges.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderPull {
    edges: [EdgePull; 4],
    resistance: f32,
}

impl Default for BorderPull {
    fn default() -> Self {
        Self {
            edges: [EdgePull::default(); 4],
            resistance: 1.0,
        }
    }
}

impl BorderPull {
    pub fn resistance(&self) -> f32 {
        self.resistance
    }

    pub fn edge(&self, edge: Edge) -> EdgePull {
        self.edges[edge.index()]
    }

    pub fn is_pulling(&self, edge: Edge) -> bool {
        self.edges[edge.index()].pulling
    }

    pub fn any_pulling(&self) -> bool {
        self.edges.iter().any(|e| e.pulling)
    }

    pub fn pulled_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        Edge::ALL.into_iter().filter(|edge| self.is_pulling(*edge))
    }

    /// Update every edge against `target`. Returns the edges entered by this call.
    ///
    /// Entering latches the edge, records `pointer` as its reference and lowers
    /// the shared resistance. An edge whose bound is no longer exceeded is
    /// released; once no edge is pulled the resistance returns to 1.
    pub fn detect(
        &mut self,
        target: Vec2,
        bounds: &WorldBounds,
        pointer: Vec2,
        input: InputKind,
        horizontal_locked: bool,
    ) -> Vec<Edge> {
        let mut entered = Vec::new();

        for edge in Edge::ALL {
            let exceeded = !(horizontal_locked && edge.is_horizontal())
                && edge.exceeded_by(target, bounds);
            let state = &mut self.edges[edge.index()];

            if exceeded && !state.pulling {
                state.pulling = true;
                state.reference = pointer;
                self.resistance = self.resistance.min(resistance_for(input));
                entered.push(edge);
            } else if !exceeded && state.pulling {
                state.pulling = false;
            }
        }

        if !self.any_pulling() {
            self.resistance = 1.0;
        }

        entered
    }

    /// Absolute pointer travel along the pull axis since `edge` was crossed.
    pub fn offset(&self, edge: Edge, pointer: Vec2) -> Option<f32> {
        let state = self.edges[edge.index()];
        state
            .pulling
            .then(|| (edge.axis_of(pointer) - edge.axis_of(state.reference)).abs())
    }

    /// Clear every edge and restore full drag response. Returns the edges that were pulled.
    pub fn release(&mut self) -> Vec<Edge> {
        let released: Vec<Edge> = self.pulled_edges().collect();
        self.edges = [EdgePull::default(); 4];
        self.resistance = 1.0;
        released
    }
}

fn resistance_for(input: InputKind) -> f32 {
    match input {
        InputKind::Pointer => BORDER_RESISTANCE_POINTER,
        InputKind::Touch => BORDER_RESISTANCE_TOUCH,
    }
}
