mod subset;
pub use subset::{convert_to_dfa, StateSet};

mod complement;
pub use complement::complement;

mod product;
pub use product::{
    are_equivalent, intersection_is_empty, intersection_witness, Product, ProductIndex,
};

mod isomorphism;
pub use isomorphism::are_isomorphic;
