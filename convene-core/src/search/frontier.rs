use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

use crate::{
    model::{FlightLeg, Location},
    search::{Direction, FrontierKey, NodeId, PartialNode},
};

/// an arena of partial itineraries grown from one end of the search, indexed
/// by (location, date). within a key only non-dominated partials stay live.
#[derive(Debug, Clone)]
pub struct Frontier<'a> {
    direction: Direction,
    nodes: Vec<PartialNode<'a>>,
    by_key: BTreeMap<FrontierKey, Vec<NodeId>>,
}

impl<'a> Frontier<'a> {
    pub const ROOT: NodeId = 0;

    pub fn new(direction: Direction, location: Location, instant: DateTime<Utc>) -> Frontier<'a> {
        let root = PartialNode::root(location, instant);
        let mut by_key = BTreeMap::new();
        by_key.insert(root.key(), vec![Frontier::ROOT]);
        Frontier {
            direction,
            nodes: vec![root],
            by_key,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&PartialNode<'a>> {
        self.nodes.get(id)
    }

    /// adds a node unless a live node under the same key dominates it.
    /// live nodes the new one dominates are pruned.
    pub fn push(&mut self, node: PartialNode<'a>) -> Option<NodeId> {
        let direction = self.direction;
        let ids = self.by_key.entry(node.key()).or_default();
        let dominated = ids.iter().any(|id| {
            self.nodes
                .get(*id)
                .map(|other| !other.pruned && other.dominates(&node, direction))
                .unwrap_or_default()
        });
        if dominated {
            return None;
        }
        for id in ids.iter() {
            if let Some(other) = self.nodes.get_mut(*id) {
                if !other.pruned && node.dominates(other, direction) {
                    other.pruned = true;
                }
            }
        }
        let id = self.nodes.len();
        ids.push(id);
        self.nodes.push(node);
        Some(id)
    }

    /// live nodes added at the given depth, in insertion order.
    pub fn live_at_depth(&self, depth: usize) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.depth == depth && !n.pruned)
            .map(|(id, _)| id)
            .collect()
    }

    /// every live node.
    pub fn live(&self) -> impl Iterator<Item = (NodeId, &PartialNode<'a>)> + '_ {
        self.nodes.iter().enumerate().filter(|(_, n)| !n.pruned)
    }

    /// live nodes at `location` keyed on or after `from`.
    pub fn live_at_or_after(
        &self,
        location: &Location,
        from: NaiveDate,
    ) -> impl Iterator<Item = (NodeId, &PartialNode<'a>)> + '_ {
        let lower = FrontierKey {
            location: location.clone(),
            date: from,
        };
        let upper = FrontierKey {
            location: location.clone(),
            date: NaiveDate::MAX,
        };
        self.by_key
            .range(lower..=upper)
            .flat_map(|(_, ids)| ids.iter())
            .filter_map(|id| self.nodes.get(*id).map(|n| (*id, n)))
            .filter(|(_, n)| !n.pruned)
    }

    /// locations on the path from the root to `id`, root first.
    pub fn path_locations(&self, id: NodeId) -> Vec<&Location> {
        let mut locations = self.walk(id).map(|n| &n.location).collect::<Vec<_>>();
        locations.reverse();
        locations
    }

    pub fn visits(&self, id: NodeId, location: &Location) -> bool {
        self.walk(id).any(|n| n.location == *location)
    }

    /// the node's legs in travel order. forward paths run root to node,
    /// backward paths run node to root.
    pub fn legs(&self, id: NodeId) -> Vec<&'a FlightLeg> {
        let mut legs = self.walk(id).filter_map(|n| n.leg).collect::<Vec<_>>();
        if self.direction == Direction::Forward {
            legs.reverse();
        }
        legs
    }

    fn walk(&self, id: NodeId) -> impl Iterator<Item = &PartialNode<'a>> + '_ {
        std::iter::successors(self.nodes.get(id), |n| {
            n.parent.and_then(|parent| self.nodes.get(parent))
        })
    }
}
