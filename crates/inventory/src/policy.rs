use storeops_core::{StoreError, StoreResult};

use crate::inventory::{Inventory, InventoryType};

/// Action name carried by errors from the quantity-mutation path.
pub(crate) const UPDATE_ACTION: &str = "update quantity";

/// Strategy seam for quantity mutation.
///
/// A policy interprets `delta` as a signed change added to the current count,
/// never as an absolute target. On success the record's count is updated in
/// place and nothing else is touched.
pub trait CapacityPolicy: Send + Sync + core::fmt::Debug {
    /// The inventory type this policy is valid for.
    fn inventory_type(&self) -> InventoryType;

    /// Apply `delta` to `inventory`, returning the new count.
    fn apply(&self, inventory: &mut Inventory, delta: i64) -> StoreResult<u32>;
}

/// Standard policy: the count stays within `[0, capacity]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardPolicy;

impl CapacityPolicy for StandardPolicy {
    fn inventory_type(&self) -> InventoryType {
        InventoryType::Standard
    }

    fn apply(&self, inventory: &mut Inventory, delta: i64) -> StoreResult<u32> {
        apply_bounded(self.inventory_type(), inventory, delta)
    }
}

/// Flexible policy: tolerates 20% over-capacity, `[0, floor(capacity * 1.2)]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlexiblePolicy;

impl CapacityPolicy for FlexiblePolicy {
    fn inventory_type(&self) -> InventoryType {
        InventoryType::Flexible
    }

    fn apply(&self, inventory: &mut Inventory, delta: i64) -> StoreResult<u32> {
        apply_bounded(self.inventory_type(), inventory, delta)
    }
}

/// Shared bound check. The two policies differ only in the effective maximum,
/// which is derived from the (already verified) inventory type.
fn apply_bounded(
    expected: InventoryType,
    inventory: &mut Inventory,
    delta: i64,
) -> StoreResult<u32> {
    if inventory.inventory_type() != expected {
        return Err(StoreError::type_mismatch(
            UPDATE_ACTION,
            format!(
                "{expected} policy cannot be applied to {} inventory",
                inventory.inventory_type()
            ),
        ));
    }

    let max = inventory.effective_max();
    let updated = i64::from(inventory.count()) + delta;

    if updated < 0 {
        return Err(StoreError::negative_count(
            UPDATE_ACTION,
            format!("count {} plus delta {delta} is negative", inventory.count()),
        ));
    }
    if updated > i64::from(max) {
        return Err(StoreError::capacity_exceeded(
            UPDATE_ACTION,
            format!("count {updated} exceeds effective maximum {max}"),
        ));
    }

    // Bounds checked above; the cast cannot truncate.
    let updated = updated as u32;
    inventory.set_count(updated);
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryLocation;

    fn inventory(capacity: u32, count: u32, inventory_type: InventoryType) -> Inventory {
        Inventory::new(
            "inv-1",
            InventoryLocation::new("store-1", "aisle-1", "shelf-1"),
            capacity,
            count,
            "test record",
            inventory_type,
        )
        .unwrap()
    }

    #[test]
    fn standard_delta_within_capacity_succeeds() {
        let mut record = inventory(100, 90, InventoryType::Standard);
        let count = StandardPolicy.apply(&mut record, 10).unwrap();
        assert_eq!(count, 100);
        assert_eq!(record.count(), 100);
    }

    #[test]
    fn standard_delta_beyond_capacity_fails_and_leaves_count_untouched() {
        let mut record = inventory(100, 90, InventoryType::Standard);
        let err = StandardPolicy.apply(&mut record, 11).unwrap_err();
        assert!(matches!(err, StoreError::CapacityExceeded { .. }));
        assert_eq!(record.count(), 90);
    }

    #[test]
    fn flexible_allows_twenty_percent_over_capacity() {
        let mut record = inventory(100, 115, InventoryType::Flexible);
        assert_eq!(FlexiblePolicy.apply(&mut record, 5).unwrap(), 120);

        let err = FlexiblePolicy.apply(&mut record, 1).unwrap_err();
        assert!(matches!(err, StoreError::CapacityExceeded { .. }));
        assert_eq!(record.count(), 120);
    }

    #[test]
    fn negative_result_fails_regardless_of_type() {
        let mut standard = inventory(100, 5, InventoryType::Standard);
        let err = StandardPolicy.apply(&mut standard, -10).unwrap_err();
        assert!(matches!(err, StoreError::NegativeCount { .. }));

        let mut flexible = inventory(100, 5, InventoryType::Flexible);
        let err = FlexiblePolicy.apply(&mut flexible, -10).unwrap_err();
        assert!(matches!(err, StoreError::NegativeCount { .. }));
    }

    #[test]
    fn negative_delta_within_bounds_succeeds() {
        let mut record = inventory(100, 5, InventoryType::Standard);
        assert_eq!(StandardPolicy.apply(&mut record, -5).unwrap(), 0);
    }

    #[test]
    fn policy_rejects_wrong_inventory_type_both_ways() {
        let mut flexible = inventory(100, 0, InventoryType::Flexible);
        let err = StandardPolicy.apply(&mut flexible, 1).unwrap_err();
        assert!(matches!(err, StoreError::TypeMismatch { .. }));

        let mut standard = inventory(100, 0, InventoryType::Standard);
        let err = FlexiblePolicy.apply(&mut standard, 1).unwrap_err();
        assert!(matches!(err, StoreError::TypeMismatch { .. }));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: standard apply succeeds iff `0 <= count + delta <= capacity`,
            /// and the stored count never leaves that range.
            #[test]
            fn standard_apply_respects_bounds(
                capacity in 0u32..1_000,
                start in 0u32..1_000,
                delta in -1_200i64..1_200,
            ) {
                let start = start.min(capacity);
                let mut record = inventory(capacity, start, InventoryType::Standard);

                let expected = i64::from(start) + delta;
                let result = StandardPolicy.apply(&mut record, delta);

                if (0..=i64::from(capacity)).contains(&expected) {
                    prop_assert_eq!(result.unwrap(), expected as u32);
                    prop_assert_eq!(record.count(), expected as u32);
                } else {
                    prop_assert!(result.is_err());
                    prop_assert_eq!(record.count(), start);
                }
                prop_assert!(record.count() <= capacity);
            }

            /// Property: flexible apply respects the widened bound `floor(capacity * 1.2)`.
            #[test]
            fn flexible_apply_respects_widened_bounds(
                capacity in 0u32..1_000,
                start in 0u32..1_200,
                delta in -1_400i64..1_400,
            ) {
                let max = InventoryType::Flexible.effective_max(capacity);
                let start = start.min(max);
                let mut record = inventory(capacity, start, InventoryType::Flexible);

                let expected = i64::from(start) + delta;
                let result = FlexiblePolicy.apply(&mut record, delta);

                if (0..=i64::from(max)).contains(&expected) {
                    prop_assert_eq!(result.unwrap(), expected as u32);
                } else {
                    prop_assert!(result.is_err());
                    prop_assert_eq!(record.count(), start);
                }
                prop_assert!(record.count() <= max);
            }
        }
    }
}
