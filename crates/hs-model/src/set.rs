//! Named collection of profiles.

use crate::error::{ModelError, ModelResult};
use crate::profile::AtmosphereProfile;
use std::collections::BTreeMap;

/// Profiles that coexist in one problem (e.g. stacked layers), keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileSet {
    profiles: BTreeMap<String, AtmosphereProfile>,
}

impl ProfileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile under `id`. Ids are unique within a set.
    pub fn insert(&mut self, id: impl Into<String>, profile: AtmosphereProfile) -> ModelResult<()> {
        let id = id.into();
        if self.profiles.contains_key(&id) {
            return Err(ModelError::InvalidInput {
                what: "duplicate profile id",
            });
        }
        self.profiles.insert(id, profile);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&AtmosphereProfile> {
        self.profiles.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.profiles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AtmosphereProfile)> + '_ {
        self.profiles.iter().map(|(id, p)| (id.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_eos::Species;

    fn tiny() -> AtmosphereProfile {
        AtmosphereProfile::from_columns(
            vec![Species::He4],
            &[1.0],
            vec![0.5],
            vec![1.0],
            vec![1.0],
            vec![1.0],
        )
    }

    #[test]
    fn insert_and_lookup() {
        let mut set = ProfileSet::new();
        set.insert("lower", tiny()).unwrap();
        set.insert("upper", tiny()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.get("lower").is_some());
        assert!(set.get("middle").is_none());
        assert_eq!(set.ids().collect::<Vec<_>>(), vec!["lower", "upper"]);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut set = ProfileSet::new();
        set.insert("layer", tiny()).unwrap();
        assert!(matches!(
            set.insert("layer", tiny()),
            Err(ModelError::InvalidInput { .. })
        ));
    }
}
