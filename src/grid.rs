//! Height resolution for the expandable picture grid.

/// Height constraint imposed by the host layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightConstraint {
    /// The content may be at most this many pixels tall.
    AtMost(u32),
    /// Effectively unbounded; the content reports its natural height.
    Unspecified,
}

/// Resolve the height of a grid container. An expanded grid measures its
/// content against an unbounded constraint and adopts the resulting height,
/// showing every row; a collapsed grid takes whatever the host imposes.
pub fn resolve_height<F>(expanded: bool, constraint: HeightConstraint, measure: F) -> u32
where
    F: FnOnce(HeightConstraint) -> u32,
{
    if expanded {
        measure(HeightConstraint::Unspecified)
    } else {
        match constraint {
            HeightConstraint::AtMost(limit) => measure(constraint).min(limit),
            HeightConstraint::Unspecified => measure(constraint),
        }
    }
}
