use std::ops::Range;

use log::{debug, trace};

use crate::{
    median_split, AccelStruct, BvhConfig, BvhError, FastRayIntersect, IntersectionRecord, Ray,
    Surface, AABB,
};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BvhNode {
    pub aabb: AABB,
    surface_start: u32,
    surface_end: u32,
    left_child: u32,
}

impl BvhNode {
    /// Leaves have no children. Slot 0 of the node arena is never a child, so 0 marks a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left_child == 0
    }

    #[inline]
    pub fn left_child(&self) -> u32 {
        assert!(!self.is_leaf());
        self.left_child
    }

    #[inline]
    pub fn right_child(&self) -> u32 {
        self.left_child() + 1
    }

    /// (Left Child, Right Child), or None for leaves
    #[inline]
    pub fn children(&self) -> Option<(u32, u32)> {
        if self.is_leaf() {
            None
        } else {
            Some((self.left_child, self.left_child + 1))
        }
    }

    /// Range of surfaces under this node. For internal nodes it covers all their descendants.
    #[inline]
    pub fn surface_range(&self) -> Range<usize> {
        self.surface_start as usize..self.surface_end as usize
    }

    #[inline]
    pub fn prim_count(&self) -> usize {
        (self.surface_end - self.surface_start) as usize
    }

    #[inline]
    fn setup_prims(&mut self, surface_start: u32, surface_end: u32) {
        self.surface_start = surface_start;
        self.surface_end = surface_end;
        self.left_child = 0;
    }

    #[inline]
    fn setup_left_child(&mut self, left_child: u32) {
        self.left_child = left_child;
    }
}

/// Bounding volume hierarchy over an owned collection of surfaces.
///
/// Built by recursively sorting surface ranges along the widest axis of their bounds and
/// cutting them at the median, until a range fits in a leaf. Surfaces are reordered in place
/// and nodes refer to them by index range.
#[derive(Debug, Clone)]
pub struct Bvh<S> {
    surfaces: Vec<S>,
    nodes: Vec<BvhNode>,
    config: BvhConfig,
}

impl<S> Default for Bvh<S> {
    fn default() -> Self {
        Self {
            surfaces: Vec::new(),
            nodes: Vec::new(),
            config: BvhConfig::default(),
        }
    }
}

impl<S> Bvh<S>
where
    S: Surface,
{
    /// Node id of the root (node 0 is left empty)
    pub const ROOT_NODE_ID: u32 = 1;

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_config(config: BvhConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> &BvhConfig {
        &self.config
    }

    /// Take ownership of the surfaces and build the tree over them, replacing any previous tree
    pub fn build(&mut self, surfaces: Vec<S>) {
        assert!(
            surfaces.len() <= u32::MAX as usize,
            "Max Possible Capacity Reached"
        );

        if self.is_built() {
            trace!(
                "Replacing BVH over {} surfaces with one over {}",
                self.surfaces.len(),
                surfaces.len()
            );
        }

        let surface_count = surfaces.len();
        self.surfaces = surfaces;

        self.nodes.clear();
        // A binary tree with at most N leaves has less than 2 * N nodes, plus the empty slot 0
        self.nodes.reserve(2 * surface_count.max(1));
        self.nodes.push(Default::default());
        self.nodes.push(Default::default());

        self.create_subtree(Self::ROOT_NODE_ID, 0, surface_count);

        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "Built BVH over {} surfaces: {} nodes, height {}, leaf size {}",
                surface_count,
                self.node_count(),
                self.height(),
                self.config.leaf_size()
            );
        }
    }

    fn create_subtree(&mut self, node_id: u32, start: usize, end: usize) {
        let surfaces = &mut self.surfaces[start..end];
        let aabb = AABB::from_surfaces(surfaces);

        let node = &mut self.nodes[node_id as usize];
        node.aabb = aabb;
        node.setup_prims(start as u32, end as u32);

        if end - start <= self.config.leaf_size() {
            return;
        }

        let split = median_split(&aabb, surfaces);
        let center = start + split.center;

        // Children are allocated next to each other
        let left_child_id = self.nodes.len() as u32;
        self.nodes.push(Default::default());
        self.nodes.push(Default::default());
        self.nodes[node_id as usize].setup_left_child(left_child_id);

        self.create_subtree(left_child_id, start, center);
        self.create_subtree(left_child_id + 1, center, end);
    }

    /// If `build` was called
    #[inline]
    pub fn is_built(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Surfaces in tree order
    #[inline]
    pub fn surfaces(&self) -> &[S] {
        &self.surfaces
    }

    #[inline]
    pub fn root(&self) -> Option<&BvhNode> {
        self.nodes.get(Self::ROOT_NODE_ID as usize)
    }

    /// # Panic
    /// If the id is not a node of this tree
    #[inline]
    pub fn node(&self, node_id: u32) -> &BvhNode {
        assert!(node_id >= Self::ROOT_NODE_ID, "Node 0 is not part of the tree");
        &self.nodes[node_id as usize]
    }

    /// Number of nodes in the tree
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Bounds of everything in the tree. Inverted if there is nothing.
    #[inline]
    pub fn bounds(&self) -> AABB {
        self.root().map(|root| root.aabb).unwrap_or_default()
    }

    /// Edges on the longest root to leaf path
    pub fn height(&self) -> usize {
        if self.is_built() {
            self.node_height(Self::ROOT_NODE_ID)
        } else {
            0
        }
    }

    fn node_height(&self, node_id: u32) -> usize {
        match self.nodes[node_id as usize].children() {
            None => 0,
            Some((left, right)) => 1 + self.node_height(left).max(self.node_height(right)),
        }
    }

    /// Leaves from left to right
    pub fn leaves(&self) -> Vec<&BvhNode> {
        let mut leaves = Vec::new();
        if self.is_built() {
            self.collect_leaves(Self::ROOT_NODE_ID, &mut leaves);
        }
        leaves
    }

    fn collect_leaves<'a>(&'a self, node_id: u32, leaves: &mut Vec<&'a BvhNode>) {
        let node = &self.nodes[node_id as usize];
        match node.children() {
            None => leaves.push(node),
            Some((left, right)) => {
                self.collect_leaves(left, leaves);
                self.collect_leaves(right, leaves);
            }
        }
    }

    /// Intersect the ray with the surfaces in the tree.
    ///
    /// # Panic
    /// If the BVH was not built
    #[inline]
    pub fn intersect(
        &self,
        record: Option<&mut IntersectionRecord>,
        ray: &Ray,
        any_intersection: bool,
    ) -> bool {
        match self.try_intersect(record, ray, any_intersection) {
            Ok(hit) => hit,
            Err(err) => panic!("{}", err),
        }
    }

    /// Same as [`Bvh::intersect`], but reports a missing build as an error
    pub fn try_intersect(
        &self,
        record: Option<&mut IntersectionRecord>,
        ray: &Ray,
        any_intersection: bool,
    ) -> Result<bool, BvhError> {
        if !self.is_built() {
            return Err(BvhError::NotBuilt);
        }

        Ok(self
            .intersect_node(Self::ROOT_NODE_ID, record, ray, any_intersection)
            .is_some())
    }

    /// Returns the distance of the closest hit under the node, or of the first one found with
    /// `any_intersection`. The ray's interval is narrowed on a local copy only.
    fn intersect_node(
        &self,
        node_id: u32,
        mut record: Option<&mut IntersectionRecord>,
        ray: &Ray,
        any_intersection: bool,
    ) -> Option<f32> {
        let node = &self.nodes[node_id as usize];
        if !node.aabb.fast_ray_intersect(ray) {
            return None;
        }

        let mut ray = *ray;

        if let Some((left_child, right_child)) = node.children() {
            let left_hit =
                self.intersect_node(left_child, record.as_deref_mut(), &ray, any_intersection);
            if let Some(t) = left_hit {
                if any_intersection {
                    return left_hit;
                }
                ray.end = t;
            }

            // Anything the right child finds is closer than the left hit
            return self
                .intersect_node(right_child, record, &ray, any_intersection)
                .or(left_hit);
        }

        let mut closest = None;
        for surface in &self.surfaces[node.surface_range()] {
            let Some(hit) = surface.intersect(&ray) else {
                continue;
            };
            if hit.t >= ray.end {
                continue;
            }
            if any_intersection {
                return Some(hit.t);
            }

            ray.end = hit.t;
            closest = Some(hit.t);
            if let Some(record) = record.as_deref_mut() {
                record.set(&hit);
            }
        }

        closest
    }
}

impl<S> AccelStruct<S> for Bvh<S>
where
    S: Surface,
{
    #[inline]
    fn build(&mut self, surfaces: Vec<S>) {
        Bvh::build(self, surfaces);
    }

    #[inline]
    fn intersect(
        &self,
        record: Option<&mut IntersectionRecord>,
        ray: &Ray,
        any_intersection: bool,
    ) -> bool {
        Bvh::intersect(self, record, ray, any_intersection)
    }
}
