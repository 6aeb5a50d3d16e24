//! Attribute maps attached to nodes, edges and graphs.
//!
//! Attribute maps are string-keyed maps of arbitrary JSON-like values.  They
//! are owned by the graph: node attributes by the node store, edge attributes
//! by the edge arena (once per edge, however many adjacency entries point at
//! it), and graph attributes by the graph itself.

use std::fmt::Debug;

pub use serde_json::Value as AttrValue;

use crate::error::{GraphError, Result};

/// A string-keyed attribute map.
pub type Attrs = serde_json::Map<String, AttrValue>;

/// The attribute key conventionally used for edge weights.
pub const DEFAULT_WEIGHT: &str = "weight";

/// Builds an [`Attrs`] map from `key => value` pairs.  Values may be anything
/// convertible into an [`AttrValue`].
///
/// ```
/// use netgraph::attrs;
///
/// let a = attrs! { "color" => "red", "weight" => 2.5 };
/// assert_eq!(a["color"], "red");
/// assert_eq!(attrs! {}.len(), 0);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attrs::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Attrs::new();
        $(
            map.insert(::std::string::String::from($key), $crate::AttrValue::from($value));
        )+
        map
    }};
}

/// Merges `update` into `target`: keys present in `update` overwrite, all
/// other keys of `target` are kept.
pub fn merge_attrs(target: &mut Attrs, update: Attrs) {
    target.extend(update);
}

/// Reads the numeric weight stored under `weight_key`.  A missing attribute
/// counts as `1.0`; a present but non-numeric one is an
/// [`GraphError::InvalidArgument`].
pub(crate) fn weight_of(attrs: &Attrs, weight_key: &str) -> Result<f64> {
    match attrs.get(weight_key) {
        None => Ok(1.0),
        Some(value) => value.as_f64().ok_or_else(|| {
            GraphError::InvalidArgument(format!(
                "edge attribute {:?} is not numeric: {}",
                weight_key, value
            ))
        }),
    }
}

/// Like [`weight_of`], with the offending edge named in the error.
pub(crate) fn edge_weight<N: Debug>(attrs: &Attrs, weight_key: &str, u: &N, v: &N) -> Result<f64> {
    weight_of(attrs, weight_key).map_err(|_| {
        GraphError::InvalidArgument(format!(
            "edge {:?}-{:?} has non-numeric {:?} attribute",
            u, v, weight_key
        ))
    })
}
