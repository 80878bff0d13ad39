//! Panel layout composition.
//!
//! The region tree is derived from the enabled panel set once at startup and
//! resolved to concrete rectangles on every draw. Renderers look their panel
//! up in the resolved layout; a panel whose region is missing falls back to
//! the content root instead of aborting the frame.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::config::PanelSet;

/// Panels a region can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Metrics,
    Trends,
    Disk,
    Network,
    Processes,
    Placeholder,
}

/// A node of the layout tree: either a panel leaf or a proportional split.
#[derive(Debug, Clone)]
pub enum Region {
    Leaf(PanelKind),
    Split {
        direction: Direction,
        ratios: Vec<u32>,
        children: Vec<Region>,
    },
}

impl Region {
    fn resolve(&self, area: Rect, out: &mut Vec<(PanelKind, Rect)>) {
        match self {
            Region::Leaf(kind) => out.push((*kind, area)),
            Region::Split {
                direction,
                ratios,
                children,
            } => {
                let total: u32 = ratios.iter().sum();
                let constraints: Vec<Constraint> =
                    ratios.iter().map(|r| Constraint::Ratio(*r, total)).collect();
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(constraints)
                    .split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.resolve(*chunk, out);
                }
            }
        }
    }
}

/// Builds the region tree for the enabled panel set.
///
/// Zero panels produce a placeholder leaf, one a full-area leaf, two a
/// side-by-side split. Three or more enabled categories use a two-column
/// split with the wider left column holding metrics, processes and trends
/// and the right column holding disk and network.
pub fn build_layout(panels: &PanelSet) -> Region {
    let mut sections = Vec::new();
    if panels.has_trends() {
        sections.push(PanelKind::Metrics);
    }
    if panels.disk {
        sections.push(PanelKind::Disk);
    }
    if panels.network {
        sections.push(PanelKind::Network);
    }
    if panels.processes {
        sections.push(PanelKind::Processes);
    }

    match sections.len() {
        0 => Region::Leaf(PanelKind::Placeholder),
        1 => Region::Leaf(sections[0]),
        2 => Region::Split {
            direction: Direction::Horizontal,
            ratios: vec![1, 1],
            children: vec![Region::Leaf(sections[0]), Region::Leaf(sections[1])],
        },
        _ => {
            let mut left = Vec::new();
            if panels.has_trends() {
                left.push(PanelKind::Metrics);
            }
            if panels.processes {
                left.push(PanelKind::Processes);
            }
            if panels.has_trends() {
                left.push(PanelKind::Trends);
            }
            let mut right = Vec::new();
            if panels.disk {
                right.push(PanelKind::Disk);
            }
            if panels.network {
                right.push(PanelKind::Network);
            }
            Region::Split {
                direction: Direction::Horizontal,
                ratios: vec![2, 1],
                children: vec![column(left), column(right)],
            }
        }
    }
}

/// Stacks panels vertically; a single panel collapses to a leaf.
fn column(panels: Vec<PanelKind>) -> Region {
    if panels.len() == 1 {
        Region::Leaf(panels[0])
    } else {
        let ratios = vec![1; panels.len()];
        Region::Split {
            direction: Direction::Vertical,
            ratios,
            children: panels.into_iter().map(Region::Leaf).collect(),
        }
    }
}

/// The layout tree resolved against a concrete content area.
pub struct ResolvedLayout {
    root: Rect,
    regions: Vec<(PanelKind, Rect)>,
}

impl ResolvedLayout {
    pub fn new(layout: &Region, area: Rect) -> Self {
        let mut regions = Vec::new();
        layout.resolve(area, &mut regions);
        Self {
            root: area,
            regions,
        }
    }

    /// Rectangle bound to the panel, or the content root when the layout
    /// carries no region for it.
    pub fn area_for(&self, kind: PanelKind) -> Rect {
        self.regions
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, rect)| *rect)
            .unwrap_or(self.root)
    }

    pub fn contains(&self, kind: PanelKind) -> bool {
        self.regions.iter().any(|(k, _)| *k == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_set(cpu: bool, memory: bool, disk: bool, network: bool, processes: bool) -> PanelSet {
        PanelSet {
            cpu,
            memory,
            disk,
            network,
            processes,
        }
    }

    fn area() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    #[test]
    fn test_empty_set_yields_placeholder() {
        let layout = build_layout(&panel_set(false, false, false, false, false));
        let resolved = ResolvedLayout::new(&layout, area());
        assert!(resolved.contains(PanelKind::Placeholder));
        assert_eq!(resolved.area_for(PanelKind::Placeholder), area());
    }

    #[test]
    fn test_single_panel_fills_area() {
        let layout = build_layout(&panel_set(true, false, false, false, false));
        let resolved = ResolvedLayout::new(&layout, area());
        assert!(resolved.contains(PanelKind::Metrics));
        assert!(!resolved.contains(PanelKind::Trends));
        assert_eq!(resolved.area_for(PanelKind::Metrics), area());
    }

    #[test]
    fn test_two_panels_split_side_by_side() {
        let layout = build_layout(&panel_set(false, false, true, true, false));
        let resolved = ResolvedLayout::new(&layout, area());
        let disk = resolved.area_for(PanelKind::Disk);
        let net = resolved.area_for(PanelKind::Network);
        assert_eq!(disk.width, net.width);
        assert!(disk.x < net.x);
        assert_eq!(disk.y, net.y);
    }

    #[test]
    fn test_full_set_builds_two_columns() {
        let layout = build_layout(&panel_set(true, true, true, true, true));
        let resolved = ResolvedLayout::new(&layout, area());

        let metrics = resolved.area_for(PanelKind::Metrics);
        let processes = resolved.area_for(PanelKind::Processes);
        let trends = resolved.area_for(PanelKind::Trends);
        let disk = resolved.area_for(PanelKind::Disk);
        let net = resolved.area_for(PanelKind::Network);

        // Left column stacks metrics, processes, trends top to bottom.
        assert_eq!(metrics.x, processes.x);
        assert_eq!(processes.x, trends.x);
        assert!(metrics.y < processes.y);
        assert!(processes.y < trends.y);

        // Right column stacks disk above network, narrower than the left.
        assert_eq!(disk.x, net.x);
        assert!(disk.y < net.y);
        assert!(metrics.x < disk.x);
        assert!(disk.width < metrics.width);
    }

    #[test]
    fn test_missing_region_falls_back_to_root() {
        let layout = build_layout(&panel_set(false, false, true, false, false));
        let resolved = ResolvedLayout::new(&layout, area());
        assert!(!resolved.contains(PanelKind::Trends));
        assert_eq!(resolved.area_for(PanelKind::Trends), area());
    }
}
