//! Text output formatter

use nestwalk_tree::Leaf;

pub fn output_leaves(leaves: &[Leaf<'_>]) {
    for leaf in leaves {
        println!("{}\t{}", leaf.kind, leaf.payload);
    }
}

pub fn output_links(links: &[&str]) {
    for link in links {
        println!("{}", link);
    }
}
