// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bialgebra layers.
//!
//! A prograph can be cut into horizontal layers, each a row of coproducts,
//! products and identity wires side by side. Composing the layers from top
//! to bottom rebuilds the prograph. The decomposition is computed from the
//! tableau alone by pushing the wire labels of the current cut through every
//! node that can fire.

use std::fmt;

use crate::tableau::Tableau;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Coproduct,
    Product,
    Identity,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Coproduct => write!(f, "C"),
            Layer::Product => write!(f, "P"),
            Layer::Identity => write!(f, "Id"),
        }
    }
}

impl Tableau {
    /// The shortest list of layers whose composition is this tableau's prograph.
    pub fn layers(&self) -> Vec<Vec<Layer>> {
        let rows = self.row_index();
        let mut products = self.product_inputs();
        let coproducts = self.coproduct_outputs();
        let mut fired = 0;
        let mut cut = vec![1];
        let mut layers = Vec::new();

        while !products.is_empty() || fired < self.size() {
            let mut layer = Vec::with_capacity(cut.len());
            let mut next = Vec::with_capacity(cut.len() + 1);
            let mut i = 0;
            while i < cut.len() {
                let label = cut[i];
                if rows.get(label) == Some(&0) {
                    layer.push(Layer::Coproduct);
                    fired += 1;
                    let split = coproducts.iter().find(|(left, _)| *left == label + 1);
                    if let Some(&(left, right)) = split {
                        next.extend([left, right]);
                    }
                    i += 1;
                } else if let Some(index) = cut
                    .get(i + 1)
                    .and_then(|&right| products.iter().position(|&p| p == (label, right)))
                {
                    layer.push(Layer::Product);
                    let (_, right) = products.remove(index);
                    next.push(right + 1);
                    i += 2;
                } else {
                    layer.push(Layer::Identity);
                    next.push(label);
                    i += 1;
                }
            }
            if layer.iter().all(|&l| l == Layer::Identity) {
                break;
            }
            layers.push(layer);
            cut = next;
        }
        layers
    }
}
