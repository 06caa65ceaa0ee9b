//! Single-droplet reconciliation.
//!
//! A diagram with one box of `type: droplet` describes exactly one droplet,
//! identified by the box's `name` attribute. [`DropletAgent`] makes the
//! provider hold that droplet and nothing else:
//!
//! ```text
//! +------------------+
//! | name: my_droplet |
//! | type: droplet    |
//! +------------------+
//! ```

use indexmap::IndexSet;
use log::{debug, info};
use thiserror::Error;

use boxwire_core::graph::{Edge, Node};

use super::{ReconcileError, Reconciler};

/// Node `type` handled by [`DropletAgent`].
pub const DROPLET_KIND: &str = "droplet";
/// Attribute naming the droplet.
pub const NAME_ATTRIBUTE: &str = "name";

/// A droplet, identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Droplet {
    name: String,
}

impl Droplet {
    /// Create a droplet called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Build the droplet a node asks for.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::MissingAttribute`] if the node has no `name`.
    pub fn from_node(node: &Node) -> Result<Self, ReconcileError> {
        node.attribute(NAME_ATTRIBUTE)
            .map(Self::new)
            .ok_or(ReconcileError::MissingAttribute {
                node: node.id(),
                attribute: NAME_ATTRIBUTE,
            })
    }

    /// The droplet's name, unique within the account.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Failures reported by a [`DropletApi`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("droplet `{0}` already exists")]
    AlreadyExists(String),

    #[error("droplet `{0}` does not exist")]
    NotFound(String),
}

/// The provider operations the agent relies on.
pub trait DropletApi {
    /// List every droplet the account currently holds.
    fn list_droplets(&self) -> Result<Vec<Droplet>, ApiError>;

    /// Create `droplet`; fails with [`ApiError::AlreadyExists`] if it is present.
    fn create_droplet(&mut self, droplet: &Droplet) -> Result<(), ApiError>;

    /// Remove `droplet`; fails with [`ApiError::NotFound`] if it is absent.
    fn remove_droplet(&mut self, droplet: &Droplet) -> Result<(), ApiError>;
}

/// Keeps exactly the droplet drawn in the diagram.
///
/// The graph must hold one node of type `droplet` and no edges. The
/// droplet is created when missing; every other droplet is removed.
#[derive(Debug)]
pub struct DropletAgent<A> {
    api: A,
}

impl<A: DropletApi> DropletAgent<A> {
    /// Create an agent that reconciles through `api`.
    ///
    /// ```
    /// use boxwire::reconcile::{Droplet, DropletAgent, InMemoryDropletApi};
    ///
    /// let api = InMemoryDropletApi::with_droplets([Droplet::new("old")]);
    /// let agent = DropletAgent::new(api);
    ///
    /// assert_eq!(agent.into_api().droplets().count(), 1);
    /// ```
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Returns the underlying API client.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Consume the agent and return the API client.
    pub fn into_api(self) -> A {
        self.api
    }

    fn required_droplet(nodes: &[Node], edges: &[Edge]) -> Result<Droplet, ReconcileError> {
        if !edges.is_empty() {
            return Err(ReconcileError::UnexpectedEdges(edges.len()));
        }

        let [node] = nodes else {
            return Err(ReconcileError::NodeCount(nodes.len()));
        };

        match node.kind() {
            Some(DROPLET_KIND) => Droplet::from_node(node),
            found => Err(ReconcileError::UnsupportedKind {
                node: node.id(),
                expected: DROPLET_KIND,
                found: found.map(str::to_string),
            }),
        }
    }
}

impl<A: DropletApi> Reconciler for DropletAgent<A> {
    fn reconcile(&mut self, nodes: &[Node], edges: &[Edge]) -> Result<(), ReconcileError> {
        let required = Self::required_droplet(nodes, edges)?;
        let existing = self.api.list_droplets()?;
        debug!(required = required.name(), existing = existing.len(); "Reconciling droplets");

        if existing.contains(&required) {
            debug!(droplet = required.name(); "Droplet already exists");
        } else {
            info!(droplet = required.name(); "Creating droplet");
            self.api.create_droplet(&required)?;
        }

        for droplet in existing.iter().filter(|&droplet| *droplet != required) {
            info!(droplet = droplet.name(); "Removing droplet");
            self.api.remove_droplet(droplet)?;
        }

        Ok(())
    }
}

/// A [`DropletApi`] that keeps droplets in memory, for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDropletApi {
    droplets: IndexSet<Droplet>,
}

impl InMemoryDropletApi {
    /// Creates an API holding no droplets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an API that already holds `droplets`.
    pub fn with_droplets(droplets: impl IntoIterator<Item = Droplet>) -> Self {
        Self {
            droplets: droplets.into_iter().collect(),
        }
    }

    /// Returns the droplets currently held, in creation order.
    pub fn droplets(&self) -> impl Iterator<Item = &Droplet> {
        self.droplets.iter()
    }
}

impl DropletApi for InMemoryDropletApi {
    fn list_droplets(&self) -> Result<Vec<Droplet>, ApiError> {
        Ok(self.droplets.iter().cloned().collect())
    }

    fn create_droplet(&mut self, droplet: &Droplet) -> Result<(), ApiError> {
        if !self.droplets.insert(droplet.clone()) {
            return Err(ApiError::AlreadyExists(droplet.name().to_string()));
        }
        Ok(())
    }

    fn remove_droplet(&mut self, droplet: &Droplet) -> Result<(), ApiError> {
        if !self.droplets.shift_remove(droplet) {
            return Err(ApiError::NotFound(droplet.name().to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use boxwire_core::{
        geometry::{Position, Rect},
        graph::NodeId,
    };
    use indexmap::{IndexMap, IndexSet};

    use super::*;

    fn node(index: usize, attributes: &[(&str, &str)]) -> Node {
        Node::new(
            NodeId::new(index),
            Rect::new(Position::new(0, 0), Position::new(3, 20)),
            attributes
                .iter()
                .map(|&(name, value)| (name.to_string(), value.to_string()))
                .collect::<IndexMap<_, _>>(),
        )
    }

    fn droplet_node(name: &str) -> Node {
        node(0, &[("name", name), ("type", "droplet")])
    }

    fn names(api: &InMemoryDropletApi) -> Vec<&str> {
        api.droplets().map(Droplet::name).collect()
    }

    #[test]
    fn test_creates_missing_droplet() {
        let mut agent = DropletAgent::new(InMemoryDropletApi::new());

        agent
            .reconcile(&[droplet_node("my_droplet")], &[])
            .expect("reconcile");

        assert_eq!(names(agent.api()), vec!["my_droplet"]);
    }

    #[test]
    fn test_keeps_existing_and_removes_others() {
        let api = InMemoryDropletApi::with_droplets([
            Droplet::new("old"),
            Droplet::new("my_droplet"),
            Droplet::new("stale"),
        ]);
        let mut agent = DropletAgent::new(api);

        agent
            .reconcile(&[droplet_node("my_droplet")], &[])
            .expect("reconcile");

        assert_eq!(names(agent.api()), vec!["my_droplet"]);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut agent = DropletAgent::new(InMemoryDropletApi::new());
        let nodes = [droplet_node("web")];

        agent.reconcile(&nodes, &[]).expect("first run");
        agent.reconcile(&nodes, &[]).expect("second run");

        assert_eq!(names(&agent.into_api()), vec!["web"]);
    }

    #[test]
    fn test_unknown_attributes_are_ignored() {
        let mut agent = DropletAgent::new(InMemoryDropletApi::new());
        let nodes = [node(
            0,
            &[("name", "web"), ("type", "droplet"), ("region", "ams3")],
        )];

        agent.reconcile(&nodes, &[]).expect("reconcile");

        assert_eq!(names(agent.api()), vec!["web"]);
    }

    #[test]
    fn test_rejects_edges() {
        let mut agent = DropletAgent::new(InMemoryDropletApi::new());
        let edge = Edge::new(IndexSet::new(), vec![NodeId::new(0)], Vec::new());

        let err = agent
            .reconcile(&[droplet_node("web")], &[edge])
            .unwrap_err();

        assert_eq!(err, ReconcileError::UnexpectedEdges(1));
        assert_eq!(agent.api().droplets().count(), 0);
    }

    #[test]
    fn test_rejects_wrong_node_count() {
        let mut agent = DropletAgent::new(InMemoryDropletApi::new());

        assert_eq!(
            agent.reconcile(&[], &[]).unwrap_err(),
            ReconcileError::NodeCount(0)
        );

        let nodes = [droplet_node("a"), node(1, &[("name", "b"), ("type", "droplet")])];
        assert_eq!(
            agent.reconcile(&nodes, &[]).unwrap_err(),
            ReconcileError::NodeCount(2)
        );
    }

    #[test]
    fn test_rejects_other_kinds() {
        let mut agent = DropletAgent::new(InMemoryDropletApi::new());

        let err = agent
            .reconcile(&[node(0, &[("name", "fw"), ("type", "firewall")])], &[])
            .unwrap_err();

        assert_eq!(
            err,
            ReconcileError::UnsupportedKind {
                node: NodeId::new(0),
                expected: DROPLET_KIND,
                found: Some("firewall".to_string()),
            }
        );
    }

    #[test]
    fn test_requires_name() {
        let mut agent = DropletAgent::new(InMemoryDropletApi::new());

        let err = agent
            .reconcile(&[node(0, &[("type", "droplet")])], &[])
            .unwrap_err();

        assert_eq!(
            err,
            ReconcileError::MissingAttribute {
                node: NodeId::new(0),
                attribute: NAME_ATTRIBUTE,
            }
        );
    }

    #[test]
    fn test_in_memory_api_reports_conflicts() {
        let mut api = InMemoryDropletApi::new();
        let droplet = Droplet::new("web");

        api.create_droplet(&droplet).expect("create");
        assert_eq!(
            api.create_droplet(&droplet),
            Err(ApiError::AlreadyExists("web".to_string()))
        );

        api.remove_droplet(&droplet).expect("remove");
        assert_eq!(
            api.remove_droplet(&droplet),
            Err(ApiError::NotFound("web".to_string()))
        );
    }
}
