//! Built-in sample trees.

use clap::ValueEnum;
use nestwalk_tree::{LeafKind, TreeDef};

/// Sample trees selectable with `--sample`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sample {
    /// A platoon of troopers and nested squads
    Platoon,
    /// A web page of images, links and tables in nested containers
    Page,
    /// A chain of singly nested containers ending in one leaf
    Nested,
}

impl Sample {
    /// Builds the sample. `depth` only applies to [`Sample::Nested`].
    pub fn build(self, depth: u32) -> TreeDef {
        match self {
            Sample::Platoon => platoon(),
            Sample::Page => page(),
            Sample::Nested => nested(depth),
        }
    }
}

fn trooper(label: &str) -> TreeDef {
    TreeDef::leaf(LeafKind::Marker, label)
}

fn image(n: u32) -> TreeDef {
    TreeDef::leaf(LeafKind::ResourceReference, format!("https://some.image/{n}"))
}

fn link(n: u32) -> TreeDef {
    TreeDef::leaf(LeafKind::ResourceReference, format!("https://some.link/{n}"))
}

fn table() -> TreeDef {
    TreeDef::leaf(LeafKind::Marker, "table")
}

fn platoon() -> TreeDef {
    TreeDef::container([
        trooper("t1"),
        TreeDef::container([trooper("t2")]),
        trooper("t3"),
        TreeDef::container([trooper("t4"), trooper("t5")]),
        trooper("t6"),
    ])
}

fn page() -> TreeDef {
    TreeDef::container([
        TreeDef::container([image(1), link(1), image(2)]),
        table(),
        link(2),
        TreeDef::container([table(), link(3)]),
        TreeDef::container([image(3), TreeDef::container([image(4), link(4)])]),
    ])
}

/// `depth` containers, the innermost holding `X`. Always at least one
/// container, so the result is a valid root.
fn nested(depth: u32) -> TreeDef {
    let mut def = TreeDef::leaf(LeafKind::Marker, "X");
    for _ in 0..depth.max(1) {
        def = TreeDef::container([def]);
    }
    def
}
