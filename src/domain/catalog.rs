//! Device catalog and baseline screen size
//!
//! This module maps known physical screen sizes to named device profiles
//! and exposes the design baseline every scaled dimension is authored
//! against. The catalog is built once, validated, and never mutated.

use crate::domain::core::Size;

/// Errors that can occur while constructing a catalog
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A profile screen size is zero, negative or non-finite
    InvalidScreen { name: String, screen: Size },
    /// The baseline screen size is zero, negative or non-finite
    InvalidBaseline { baseline: Size },
    /// Two profiles share the same screen size, making lookup ambiguous
    DuplicateScreen { name: String, screen: Size },
}

/// Immutable association between a known screen size and a device name
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceProfile {
    /// Marketing name of the device
    pub name: String,
    /// Portrait screen size in points
    pub screen: Size,
}

impl DeviceProfile {
    pub fn new(name: impl Into<String>, screen: Size) -> Self {
        Self {
            name: name.into(),
            screen,
        }
    }
}

/// Fixed table of known device screen sizes plus the design baseline
///
/// Lookup uses exact floating-point equality on both components: sizes
/// not present in the table (tablets, newer phones, arbitrary simulator
/// bounds) are simply unknown devices, never an error. The scaling math
/// in [`crate::domain::scale`] depends only on the baseline, not on a
/// successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceCatalog {
    profiles: Vec<DeviceProfile>,
    baseline: Size,
}

impl DeviceCatalog {
    /// Portrait screen size of the baseline device (iPhone SE)
    pub const BASELINE_SCREEN: Size = Size::new(320.0, 568.0);

    /// Creates the built-in catalog of legacy iPhone screen sizes
    ///
    /// The baseline is the smallest entry, the iPhone SE at 320x568.
    pub fn builtin() -> Self {
        let profiles = vec![
            DeviceProfile::new("iPhone SE", Self::BASELINE_SCREEN),
            DeviceProfile::new("iPhone 8", Size::new(375.0, 667.0)),
            DeviceProfile::new("iPhone 8 Plus", Size::new(414.0, 736.0)),
            DeviceProfile::new("iPhone 11 Pro", Size::new(375.0, 812.0)),
            DeviceProfile::new("iPhone 11 Pro Max", Size::new(414.0, 896.0)),
        ];

        // The built-in table is known-valid; validation cannot fail here.
        Self {
            profiles,
            baseline: Self::BASELINE_SCREEN,
        }
    }

    /// Creates a catalog from custom profiles and a baseline screen size
    ///
    /// Validation happens once, here: a malformed baseline would poison
    /// every later scaling call with division by zero, so construction
    /// fails fast instead.
    ///
    /// # Arguments
    /// * `profiles` - Device entries; screen sizes must be valid and unique
    /// * `baseline` - Design reference screen; must be strictly positive
    ///   and finite
    pub fn new(profiles: Vec<DeviceProfile>, baseline: Size) -> Result<Self, CatalogError> {
        if !baseline.is_valid() {
            return Err(CatalogError::InvalidBaseline { baseline });
        }

        for (index, profile) in profiles.iter().enumerate() {
            if !profile.screen.is_valid() {
                return Err(CatalogError::InvalidScreen {
                    name: profile.name.clone(),
                    screen: profile.screen,
                });
            }
            let duplicated = profiles[..index]
                .iter()
                .any(|earlier| earlier.screen == profile.screen);
            if duplicated {
                return Err(CatalogError::DuplicateScreen {
                    name: profile.name.clone(),
                    screen: profile.screen,
                });
            }
        }

        Ok(Self { profiles, baseline })
    }

    /// Returns the profile whose screen size exactly equals the input
    ///
    /// # Returns
    /// The matching profile, or None for an unknown device
    pub fn lookup(&self, size: Size) -> Option<&DeviceProfile> {
        self.profiles.iter().find(|profile| profile.screen == size)
    }

    /// Returns the design baseline screen size
    pub fn baseline(&self) -> Size {
        self.baseline
    }

    /// Returns all known device profiles
    pub fn profiles(&self) -> &[DeviceProfile] {
        &self.profiles
    }
}

impl Default for DeviceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_baseline_is_smallest_entry() {
        let catalog = DeviceCatalog::builtin();
        assert_eq!(catalog.baseline(), Size::new(320.0, 568.0));
        for profile in catalog.profiles() {
            assert!(profile.screen.width >= catalog.baseline().width);
            assert!(profile.screen.height >= catalog.baseline().height);
        }
    }

    #[test]
    fn lookup_known_size() {
        let catalog = DeviceCatalog::builtin();
        let profile = catalog.lookup(Size::new(375.0, 667.0)).unwrap();
        assert_eq!(profile.name, "iPhone 8");
    }

    #[test]
    fn lookup_unknown_size() {
        let catalog = DeviceCatalog::builtin();
        assert!(catalog.lookup(Size::new(999.0, 999.0)).is_none());
        // Landscape-swapped bounds are not catalog entries either
        assert!(catalog.lookup(Size::new(568.0, 320.0)).is_none());
    }

    #[test]
    fn builtin_has_five_entries() {
        assert_eq!(DeviceCatalog::builtin().profiles().len(), 5);
    }

    #[test]
    fn rejects_invalid_baseline() {
        let result = DeviceCatalog::new(vec![], Size::new(0.0, 568.0));
        assert_eq!(
            result,
            Err(CatalogError::InvalidBaseline {
                baseline: Size::new(0.0, 568.0)
            })
        );

        let result = DeviceCatalog::new(vec![], Size::new(320.0, f64::NAN));
        assert!(matches!(result, Err(CatalogError::InvalidBaseline { .. })));
    }

    #[test]
    fn rejects_invalid_profile_screen() {
        let profiles = vec![DeviceProfile::new("broken", Size::new(-320.0, 568.0))];
        let result = DeviceCatalog::new(profiles, Size::new(320.0, 568.0));
        assert!(matches!(result, Err(CatalogError::InvalidScreen { .. })));
    }

    #[test]
    fn rejects_duplicate_screens() {
        let profiles = vec![
            DeviceProfile::new("first", Size::new(375.0, 667.0)),
            DeviceProfile::new("second", Size::new(375.0, 667.0)),
        ];
        let result = DeviceCatalog::new(profiles, Size::new(320.0, 568.0));
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateScreen { ref name, .. }) if name == "second"
        ));
    }

    #[test]
    fn custom_catalog_lookup() {
        let profiles = vec![DeviceProfile::new("kiosk", Size::new(1080.0, 1920.0))];
        let catalog = DeviceCatalog::new(profiles, Size::new(1080.0, 1920.0)).unwrap();
        assert_eq!(catalog.lookup(Size::new(1080.0, 1920.0)).unwrap().name, "kiosk");
        assert_eq!(catalog.baseline(), Size::new(1080.0, 1920.0));
    }
}
