use std::fmt::Display;
use std::path::Path;

use natural::{MappableFrame, MappableFrameRef, Shape, Transformation};
use serde::Serialize;

type VizNodeId = u32;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "typ", rename_all = "snake_case")]
pub enum VizAction {
    // expand a seed to a source frame, with the child seeds that survive the transformation
    ExpandSeed {
        target_id: VizNodeId,
        txt: String,
        seeds: Vec<VizSeed>,
    },
    // the same frame, after the transformation
    TransformFrame {
        target_id: VizNodeId,
        txt: String,
    },
    // collapse node to value, removing all child nodes
    CollapseNode {
        target_id: VizNodeId,
        txt: String,
    },
    // info text display!
    InfoCard {
        info_header: String,
        info_txt: String,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VizSeed {
    pub node_id: VizNodeId,
    pub txt: String,
}

/// A recorded trace of a [`hoist_v`] run.
#[derive(Clone, Debug, Serialize)]
pub struct Viz {
    seed_txt: String,
    root_id: VizNodeId,
    actions: Vec<VizAction>,
}

impl Viz {
    pub fn actions(&self) -> &[VizAction] {
        &self.actions
    }

    /// Prepend an info card.
    pub fn label(mut self, info_header: String, info_txt: String) -> Self {
        let mut actions = vec![VizAction::InfoCard {
            info_header,
            info_txt,
        }];
        actions.extend(self.actions);
        self.actions = actions;

        self
    }

    /// Append the actions of `next`, separated by an info card.
    pub fn fuse(self, next: Self, info_header: String, info_txt: String) -> Self {
        let mut actions = self.actions;
        actions.push(VizAction::InfoCard {
            info_txt,
            info_header,
        });
        actions.extend(next.actions);

        Self {
            seed_txt: self.seed_txt,
            root_id: self.root_id,
            actions,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
    }
}

/// [`natural::hoist`], recording each step: the source frame produced by expanding a seed,
/// the frame after `transformation`, and the value each frame collapses to.
pub fn hoist_v<T, Seed, Out>(
    seed: Seed,
    transformation: &T,
    mut expand_frame: impl FnMut(Seed) -> <T::Source as Shape>::Frame<Seed>,
    mut collapse_frame: impl FnMut(<T::Target as Shape>::Frame<Out>) -> Out,
) -> (Out, Viz)
where
    T: Transformation,
    T::Source: MappableFrameRef,
    T::Target: MappableFrame,
    <T::Source as Shape>::Frame<()>: Display,
    <T::Target as Shape>::Frame<()>: Display,
    Seed: Clone + Display,
    Out: Display,
{
    enum State<Pre, Post> {
        PreVisit(Pre),
        PostVisit(Post),
    }

    let mut keygen = 1; // 0 is used for root node
    let mut v = Vec::new();
    let root_seed_txt = seed.to_string();

    let mut vals: Vec<Out> = vec![];
    let mut todo: Vec<State<(VizNodeId, Seed), (VizNodeId, <T::Target as Shape>::Frame<()>)>> =
        vec![State::PreVisit((0, seed))];

    while let Some(item) = todo.pop() {
        match item {
            State::PreVisit((viz_node_id, seed)) => {
                let node = expand_frame(seed);
                let source_txt = <T::Source as MappableFrame>::map_frame::<&Seed, ()>(
                    <T::Source as MappableFrameRef>::as_ref::<Seed>(&node),
                    |_| (),
                )
                .to_string();

                let node = transformation.apply::<Seed>(node);

                let mut seeds_v = Vec::new();
                let mut topush = Vec::new();
                let node = <T::Target as MappableFrame>::map_frame::<Seed, ()>(node, |seed| {
                    let k = keygen;
                    keygen += 1;
                    seeds_v.push(VizSeed {
                        node_id: k,
                        txt: seed.to_string(),
                    });

                    topush.push(State::PreVisit((k, seed)))
                });

                v.push(VizAction::ExpandSeed {
                    target_id: viz_node_id,
                    txt: source_txt,
                    seeds: seeds_v,
                });
                v.push(VizAction::TransformFrame {
                    target_id: viz_node_id,
                    txt: node.to_string(),
                });

                todo.push(State::PostVisit((viz_node_id, node)));
                todo.extend(topush);
            }
            State::PostVisit((viz_node_id, node)) => {
                let node =
                    <T::Target as MappableFrame>::map_frame::<(), Out>(node, |_| vals.pop().unwrap());

                let out = collapse_frame(node);

                v.push(VizAction::CollapseNode {
                    target_id: viz_node_id,
                    txt: out.to_string(),
                });

                vals.push(out)
            }
        };
    }

    let out = vals.pop().unwrap();

    v.push(VizAction::InfoCard {
        info_header: "Completed".to_string(),
        info_txt: format!("result: {}", out),
    });

    (
        out,
        Viz {
            seed_txt: root_seed_txt,
            root_id: 0,
            actions: v,
        },
    )
}
