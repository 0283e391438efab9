// src/animation/chain.rs
//
// The fixed-length chain of animatable blocker units and the cursor
// that walks it.
//
// The chain is one owning Vec; nodes reach their neighbors by index
// arithmetic only, and the ends do not wrap. The cursor sweeps the
// chain forward, flips at the far end, sweeps back, and reports
// completion once node 0 has settled back at its starting baseline.

use super::progress::{ProgressState, StepEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelDir {
    Forward,
    Backward,
}

impl TravelDir {
    pub fn flipped(self) -> Self {
        match self {
            TravelDir::Forward => TravelDir::Backward,
            TravelDir::Backward => TravelDir::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChainNode {
    index: usize,
    state: ProgressState,
}

impl ChainNode {
    fn new(index: usize) -> Self {
        Self {
            index,
            state: ProgressState::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn scale(&self) -> f32 {
        self.state.scale()
    }

    pub fn committed(&self) -> f32 {
        self.state.committed()
    }

    pub fn is_resting(&self) -> bool {
        self.state.is_resting()
    }

    fn update(&mut self, step: f32) -> StepEvent {
        self.state.update(step)
    }

    fn start_updating(&mut self) -> bool {
        self.state.start_updating()
    }
}

/// What one tick of the cursor did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorEvent {
    /// The current node is still mid-travel.
    Advancing,
    /// The current node settled and the cursor moved to this neighbor.
    Advanced(usize),
    /// A chain end was reached; travel reversed, cursor stayed put.
    Flipped(TravelDir),
    /// The whole traversal settled back at the starting position.
    Completed,
}

pub struct ChainCursor {
    nodes: Vec<ChainNode>,
    current: usize,
    direction: TravelDir,
}

impl ChainCursor {
    /// Build the whole chain up front, one node per palette entry.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "chain must have at least one node");
        Self {
            nodes: (0..len).map(ChainNode::new).collect(),
            current: 0,
            direction: TravelDir::Forward,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> TravelDir {
        self.direction
    }

    pub fn current_node(&self) -> &ChainNode {
        &self.nodes[self.current]
    }

    /// The neighbor index in the direction of travel, or None at a
    /// chain end.
    fn neighbor(&self) -> Option<usize> {
        match self.direction {
            TravelDir::Forward => {
                let next = self.current + 1;
                (next < self.nodes.len()).then(|| next)
            }
            TravelDir::Backward => self.current.checked_sub(1),
        }
    }

    /// Kick off the current node's run. False (and no state change)
    /// while a run is already in flight.
    pub fn start_updating(&mut self) -> bool {
        self.nodes[self.current].start_updating()
    }

    /// One tick. Settlement, hand-off and direction flip all happen
    /// within this single call, so no two ticks interleave on a node.
    pub fn update(&mut self, step: f32) -> CursorEvent {
        match self.nodes[self.current].update(step) {
            StepEvent::Advancing => CursorEvent::Advancing,
            StepEvent::Settled => match self.neighbor() {
                Some(next) => {
                    self.current = next;
                    self.nodes[next].start_updating();
                    CursorEvent::Advanced(next)
                }
                None => {
                    self.direction = self.direction.flipped();
                    if self.nodes[self.current].committed() == 0.0 {
                        // back at the starting extreme: the sweep is over
                        CursorEvent::Completed
                    } else {
                        self.nodes[self.current].start_updating();
                        CursorEvent::Flipped(self.direction)
                    }
                }
            },
        }
    }
}
