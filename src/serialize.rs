//! `Serialize` and `Deserialize` for [`Array`], enabled by the `serde`
//! feature. An `Array` has the same representation as a `Vec`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Array};

impl<T: Serialize> Serialize for Array<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Array<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::deserialize(deserializer).map(Array::from_vec)
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::{array, Array};

    #[test]
    fn json() {
        let a = array!["b", "a"];
        assert_eq!(serde_json::to_string(&a).unwrap(), r#"["b","a"]"#);
        let b: Array<u16> = serde_json::from_str("[3, 1, 2]").unwrap();
        assert_eq!(b, array![3, 1, 2]);
        assert!(serde_json::from_str::<Array<u16>>("{}").is_err());
    }
}
