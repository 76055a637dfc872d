use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::BinarySearchTree;

/// Serialized as a sequence of values in pre-order, so that deserializing reproduces the shape
impl<T> Serialize for BinarySearchTree<T>
    where T: Ord + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_preorder())
    }
}

impl<'de, T> Deserialize<'de> for BinarySearchTree<T>
    where T: Ord + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}
