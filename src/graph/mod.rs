//! The resolved package graph.
//!
//! A PackageGraph is built once (by hand or from a snapshot file) and is
//! read-only afterwards. Everything that projects information out of it
//! borrows it immutably.

pub mod errors;
pub mod snapshot;

pub use errors::{GraphError, SnapshotError};
pub use snapshot::{load_graph, GraphSnapshot};

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::algo::{is_cyclic_directed, kosaraju_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Topo;

use crate::core::{
    PackageId, ProductId, ProductType, ResolvedPackage, ResolvedProduct, ResolvedTarget, TargetId,
};

/// The resolved package graph.
///
/// Packages are nodes, dependency edges point from a package to the packages
/// it depends on. Targets and products live in insertion-ordered arenas so
/// that iteration over them is deterministic.
#[derive(Debug, Clone, Default)]
pub struct PackageGraph {
    /// Package dependency graph
    graph: DiGraph<ResolvedPackage, ()>,

    /// Map from PackageId to node index
    pkg_to_node: HashMap<PackageId, NodeIndex>,

    /// All targets, indexed by TargetId
    targets: Vec<ResolvedTarget>,

    /// All products, indexed by ProductId
    products: Vec<ResolvedProduct>,

    /// Owning package of each target
    target_owner: HashMap<TargetId, NodeIndex>,
}

impl PackageGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package to the graph. Adding the same package twice is a no-op.
    pub fn add_package(&mut self, pkg_id: PackageId) {
        if self.pkg_to_node.contains_key(&pkg_id) {
            return;
        }

        let node = self.graph.add_node(ResolvedPackage::new(pkg_id.clone()));
        self.pkg_to_node.insert(pkg_id, node);
    }

    /// Add a dependency edge between packages.
    pub fn add_dependency(&mut self, from: &PackageId, to: &PackageId) {
        if let (Some(&from_node), Some(&to_node)) =
            (self.pkg_to_node.get(from), self.pkg_to_node.get(to))
        {
            if !self.graph.contains_edge(from_node, to_node) {
                self.graph.add_edge(from_node, to_node, ());
            }
        }
    }

    /// Add a target.
    ///
    /// `owner` names the package the target belongs to. A target whose owner
    /// is `None` or not in the graph is kept but has no owning package.
    pub fn add_target(&mut self, target: ResolvedTarget, owner: Option<&PackageId>) -> TargetId {
        let id = TargetId(self.targets.len());
        self.targets.push(target);

        if let Some(&node) = owner.and_then(|o| self.pkg_to_node.get(o)) {
            self.graph[node].push_target(id);
            self.target_owner.insert(id, node);
        }

        id
    }

    /// Add a product declared by the given package.
    pub fn add_product(&mut self, product: ResolvedProduct, owner: Option<&PackageId>) -> ProductId {
        let id = ProductId(self.products.len());
        self.products.push(product);

        if let Some(&node) = owner.and_then(|o| self.pkg_to_node.get(o)) {
            self.graph[node].push_product(id);
        }

        id
    }

    /// Convenience for adding a product built from targets.
    pub fn add_product_with(
        &mut self,
        owner: &PackageId,
        name: &str,
        product_type: ProductType,
        targets: Vec<TargetId>,
    ) -> ProductId {
        self.add_product(ResolvedProduct::new(name, product_type, targets), Some(owner))
    }

    /// Get a package by ID.
    pub fn package(&self, pkg_id: &PackageId) -> Option<&ResolvedPackage> {
        self.pkg_to_node.get(pkg_id).map(|&n| &self.graph[n])
    }

    /// Get a package by name.
    pub fn package_by_name(&self, name: &str) -> Option<&ResolvedPackage> {
        self.packages().find(|p| p.name() == name)
    }

    /// Get the package that owns a target.
    pub fn package_for(&self, target: TargetId) -> Option<&ResolvedPackage> {
        self.target_owner.get(&target).map(|&n| &self.graph[n])
    }

    /// Get a target by ID.
    pub fn target(&self, id: TargetId) -> Option<&ResolvedTarget> {
        self.targets.get(id.0)
    }

    /// Get a product by ID.
    pub fn product(&self, id: ProductId) -> Option<&ResolvedProduct> {
        self.products.get(id.0)
    }

    /// Iterate over all packages in insertion order.
    pub fn packages(&self) -> impl Iterator<Item = &ResolvedPackage> {
        self.graph.node_weights()
    }

    /// Iterate over all targets in insertion order.
    pub fn all_targets(&self) -> impl Iterator<Item = (TargetId, &ResolvedTarget)> {
        self.targets.iter().enumerate().map(|(i, t)| (TargetId(i), t))
    }

    /// Iterate over all products in insertion order.
    pub fn all_products(&self) -> impl Iterator<Item = (ProductId, &ResolvedProduct)> {
        self.products
            .iter()
            .enumerate()
            .map(|(i, p)| (ProductId(i), p))
    }

    /// Get the number of packages.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Check if a package is in the graph.
    pub fn contains(&self, pkg_id: &PackageId) -> bool {
        self.pkg_to_node.contains_key(pkg_id)
    }

    /// Get direct dependencies of a package.
    pub fn deps(&self, pkg_id: &PackageId) -> Vec<PackageId> {
        if let Some(&node) = self.pkg_to_node.get(pkg_id) {
            self.graph
                .neighbors(node)
                .map(|n| self.graph[n].package_id().clone())
                .collect()
        } else {
            Vec::new()
        }
    }

    /// Get packages that depend on the given package.
    pub fn dependents(&self, pkg_id: &PackageId) -> Vec<PackageId> {
        if let Some(&node) = self.pkg_to_node.get(pkg_id) {
            self.graph
                .neighbors_directed(node, petgraph::Direction::Incoming)
                .map(|n| self.graph[n].package_id().clone())
                .collect()
        } else {
            Vec::new()
        }
    }

    /// Get packages in topological order (dependencies before dependents).
    pub fn topological_order(&self) -> Vec<PackageId> {
        let mut topo = Topo::new(&self.graph);
        let mut order = Vec::new();

        while let Some(node) = topo.next(&self.graph) {
            order.push(self.graph[node].package_id().clone());
        }

        // add_dependency(a, b) means "a depends on b", so b must come first.
        order.reverse();
        order
    }

    /// Check whether the dependency edges contain a cycle.
    pub fn is_cyclic(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Find a dependency cycle, if any.
    ///
    /// The returned path follows dependency edges, starting and ending at the
    /// smallest package of the cycle.
    pub fn find_cycle(&self) -> Option<Vec<PackageId>> {
        for component in kosaraju_scc(&self.graph) {
            let is_cycle = component.len() > 1
                || component
                    .first()
                    .is_some_and(|&n| self.graph.contains_edge(n, n));
            if !is_cycle {
                continue;
            }

            let Some(&start) = component
                .iter()
                .min_by(|&&a, &&b| self.graph[a].package_id().cmp(self.graph[b].package_id()))
            else {
                continue;
            };

            let members: HashSet<NodeIndex> = component.iter().copied().collect();
            if let Some(path) = self.cycle_through(start, &members) {
                return Some(
                    path.into_iter()
                        .map(|n| self.graph[n].package_id().clone())
                        .collect(),
                );
            }
        }

        None
    }

    /// Shortest path of dependency edges from `start` back to itself that
    /// stays inside `members`.
    fn cycle_through(&self, start: NodeIndex, members: &HashSet<NodeIndex>) -> Option<Vec<NodeIndex>> {
        let mut came_from: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut queue = VecDeque::from([start]);

        while let Some(node) = queue.pop_front() {
            let mut next: Vec<NodeIndex> = self
                .graph
                .neighbors(node)
                .filter(|n| members.contains(n))
                .collect();
            next.sort_by(|&a, &b| self.graph[a].package_id().cmp(self.graph[b].package_id()));

            for succ in next {
                if succ == start {
                    let mut back = Vec::new();
                    let mut cur = node;
                    while cur != start {
                        back.push(cur);
                        cur = came_from[&cur];
                    }
                    back.reverse();

                    let mut path = vec![start];
                    path.extend(back);
                    path.push(start);
                    return Some(path);
                }
                if !came_from.contains_key(&succ) {
                    came_from.insert(succ, node);
                    queue.push_back(succ);
                }
            }
        }

        None
    }
}
