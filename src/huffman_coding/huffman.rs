use log::{debug, info, trace};
use std::collections::BTreeMap;

use super::code_table::CodeTable;
use crate::error::Result;
use crate::tools::freq_count::{freqs, FreqTable};

/// Handle of a node inside a [`HuffmanTree`].
pub type NodeId = usize;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(NodeId, NodeId),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, node_data: NodeData) -> Node {
        Node { weight, node_data }
    }
}

/// Huffman tree stored as an arena. Children always have lower ids than their parent, and
/// the root is the last node pushed.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Number of nodes, leaves and internal nodes together.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk the tree without recursion and record the path to every leaf: '0' for a left
    /// edge, '1' for a right edge. A tree that is a lone leaf gets the one bit code "0".
    pub fn code_table(&self) -> CodeTable {
        let mut codes = BTreeMap::new();
        let mut stack: Vec<(NodeId, Vec<bool>)> = vec![(self.root, Vec::new())];

        while let Some((id, path)) = stack.pop() {
            match self.nodes[id].node_data {
                NodeData::Kids(left, right) => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    let mut left_path = path;
                    left_path.push(false);
                    // Right goes on the stack first so the left branch is walked first.
                    stack.push((right, right_path));
                    stack.push((left, left_path));
                }
                NodeData::Leaf(sym) => {
                    let code = if path.is_empty() { vec![false] } else { path };
                    trace!("Symbol {:?} gets a {} bit code.", sym as char, code.len());
                    codes.insert(sym, code);
                }
            }
        }
        CodeTable::new(codes)
    }
}

/// Build a Huffman tree from symbol weights. The working list is kept sorted by descending
/// weight and the two lightest nodes are popped off the end and joined: the lightest becomes
/// the left child, the next lightest the right child. Equal weights keep their previous order.
pub fn build_tree(freq: &FreqTable) -> HuffmanTree {
    let mut nodes: Vec<Node> = freq
        .entries()
        .map(|(sym, count)| Node::new(count as u64, NodeData::Leaf(sym)))
        .collect();
    let mut working: Vec<NodeId> = (0..nodes.len()).collect();

    // ...then pare it down to one single node with child nodes - keep it sorted.
    while working.len() > 1 {
        working.sort_by(|a, b| nodes[*b].weight.cmp(&nodes[*a].weight));

        // Pull off the bottom nodes and make a new parent
        let (left, right) = match (working.pop(), working.pop()) {
            (Some(left), Some(right)) => (left, right),
            _ => break,
        };
        let weight = nodes[left].weight + nodes[right].weight;
        nodes.push(Node::new(weight, NodeData::Kids(left, right)));
        working.push(nodes.len() - 1);
    }

    let root = working.first().copied().unwrap_or(0);
    debug!(
        "Built tree of {} nodes over {} symbols.",
        nodes.len(),
        freq.distinct()
    );
    HuffmanTree { nodes, root }
}

/// Count `data`, build its tree and code table, and encode it. Returns the table and the
/// concatenated code bits.
pub fn huf_encode(data: &[u8]) -> Result<(CodeTable, Vec<bool>)> {
    let freq = freqs(data)?;
    let tree = build_tree(&freq);
    let table = tree.code_table();
    let bits = table.encode(data)?;
    info!(
        "Huffman coded {} symbols into {} bits using {} codes.",
        data.len(),
        bits.len(),
        table.len()
    );
    Ok((table, bits))
}
