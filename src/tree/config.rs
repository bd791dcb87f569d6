//! Configuration types for the tree walker

/// Order in which descendant directories are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Each directory is expanded before its next sibling (pre-order)
    #[default]
    DepthFirst,
    /// Every directory at one depth is emitted before the next depth
    BreadthFirst,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub order: TraversalOrder,
    /// Direct children of the root are depth 1.
    pub max_depth: Option<usize>,
    pub ignore_patterns: Vec<String>,
    /// Descend into symlinked directories (cycles are still cut off)
    pub follow_symlinks: bool,
}

impl WalkerConfig {
    pub fn with_order(order: TraversalOrder) -> Self {
        Self {
            order,
            ..Default::default()
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            order: TraversalOrder::DepthFirst,
            max_depth: None,
            ignore_patterns: Vec::new(),
            follow_symlinks: true,
        }
    }
}
