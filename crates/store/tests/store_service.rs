//! End-to-end exercise of the gated store surface: token lifecycle, layout
//! provisioning, inventory policies, baskets, and the device event pipeline.

use std::sync::{Arc, Mutex};
use std::thread;

use storeops_auth::{Token, TokenRegistry};
use storeops_core::{
    AisleId, BasketId, CustomerId, DeviceId, InventoryId, ProductId, ShelfId, StoreError, StoreId,
};
use storeops_events::{AlertMonitor, DeviceEvent, EventLogger, Listener, ManagementNotifier};
use storeops_inventory::InventoryType;
use storeops_store::{
    AisleLocation, ProductKind, ShelfLevel, StoreService, StoreServiceProxy, Temperature,
    guest_customer, make_product,
};

fn gated_service() -> (StoreServiceProxy, Token) {
    storeops_observability::init();

    let proxy = StoreServiceProxy::new(
        Arc::new(TokenRegistry::new()),
        Arc::new(StoreService::new(Arc::new(ManagementNotifier::new()))),
    );
    let token = Token::mint();
    proxy.register_token(&token);
    (proxy, token)
}

fn provision_layout(proxy: &StoreServiceProxy, token: &Token) {
    proxy
        .provision_store("store-1", "Main Street", "1 Main St", token)
        .unwrap();
    proxy
        .provision_aisle(
            &StoreId::new("store-1"),
            "a-1",
            "Dairy",
            "dairy goods",
            AisleLocation::Floor,
            token,
        )
        .unwrap();
    proxy
        .provision_shelf(
            &StoreId::new("store-1"),
            &AisleId::new("a-1"),
            "s-1",
            "Milk",
            ShelfLevel::Medium,
            "milk shelf",
            Temperature::Refrigerated,
            token,
        )
        .unwrap();
}

/// Counts deliveries; used to observe fan-out from outside the crate.
#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<DeviceEvent>>,
}

impl Listener for Recorder {
    fn name(&self) -> &'static str {
        "recorder"
    }

    fn notify(&self, event: &DeviceEvent) {
        self.seen.lock().unwrap().push(event.clone());
    }
}

#[test]
fn every_operation_fails_closed_without_a_token() {
    let (proxy, _token) = gated_service();
    let intruder = Token::new("never-registered");

    let err = proxy
        .provision_store("store-1", "Main Street", "1 Main St", &intruder)
        .unwrap_err();
    assert_eq!(err, StoreError::unauthorized("provision store"));

    let err = proxy
        .update_inventory(&InventoryId::new("inv-1"), 1, &intruder)
        .unwrap_err();
    assert_eq!(err, StoreError::unauthorized("update inventory"));

    let err = proxy
        .raise_event(&DeviceId::new("dev-1"), Some("overheat"), None, &intruder)
        .unwrap_err();
    assert_eq!(err, StoreError::unauthorized("raise event"));
}

#[test]
fn inventory_lifecycle_respects_both_policies() {
    let (proxy, token) = gated_service();
    provision_layout(&proxy, &token);

    proxy
        .provision_inventory(
            "inv-std",
            &StoreId::new("store-1"),
            &AisleId::new("a-1"),
            &ShelfId::new("s-1"),
            100,
            90,
            "whole milk",
            InventoryType::Standard,
            &token,
        )
        .unwrap();
    proxy
        .provision_inventory(
            "inv-flex",
            &StoreId::new("store-1"),
            &AisleId::new("a-1"),
            &ShelfId::new("s-1"),
            100,
            115,
            "oat milk",
            InventoryType::Flexible,
            &token,
        )
        .unwrap();

    // Standard: bounded by capacity.
    assert_eq!(
        proxy
            .update_inventory(&InventoryId::new("inv-std"), 10, &token)
            .unwrap(),
        100
    );
    let err = proxy
        .update_inventory(&InventoryId::new("inv-std"), 1, &token)
        .unwrap_err();
    assert!(matches!(err, StoreError::CapacityExceeded { .. }));

    // Flexible: bounded by floor(capacity * 1.2).
    assert_eq!(
        proxy
            .update_inventory(&InventoryId::new("inv-flex"), 5, &token)
            .unwrap(),
        120
    );
    let err = proxy
        .update_inventory(&InventoryId::new("inv-flex"), 1, &token)
        .unwrap_err();
    assert!(matches!(err, StoreError::CapacityExceeded { .. }));

    // Negative results fail regardless of type.
    let err = proxy
        .update_inventory(&InventoryId::new("inv-std"), -101, &token)
        .unwrap_err();
    assert!(matches!(err, StoreError::NegativeCount { .. }));

    // Missing record: NullInventory, not NotFound.
    let err = proxy
        .update_inventory(&InventoryId::new("ghost"), 1, &token)
        .unwrap_err();
    assert!(matches!(err, StoreError::NullInventory { .. }));
}

#[test]
fn customer_basket_flow_end_to_end() {
    let (proxy, token) = gated_service();
    provision_layout(&proxy, &token);

    proxy
        .provision_customer(
            guest_customer("c-1", "Ada", "Lovelace", "ada@example.com"),
            &token,
        )
        .unwrap();
    proxy
        .provision_product(
            make_product(
                "p-1",
                "Milk",
                "whole milk",
                "1L",
                "dairy",
                150,
                Temperature::Refrigerated,
                ProductKind::Standard,
            ),
            &token,
        )
        .unwrap();
    proxy.provision_basket("b-1", &token).unwrap();
    proxy
        .assign_customer_basket(&CustomerId::new("c-1"), &BasketId::new("b-1"), &token)
        .unwrap();

    proxy
        .add_basket_product(&BasketId::new("b-1"), &ProductId::new("p-1"), 2, &token)
        .unwrap();
    let basket = proxy
        .get_customer_basket(&CustomerId::new("c-1"), &token)
        .unwrap();
    assert_eq!(basket.line_count(&ProductId::new("p-1")), 2);

    proxy
        .update_customer(
            &CustomerId::new("c-1"),
            &StoreId::new("store-1"),
            &AisleId::new("a-1"),
            &token,
        )
        .unwrap();
    let customer = proxy.show_customer(&CustomerId::new("c-1"), &token).unwrap();
    assert_eq!(customer.last_seen().unwrap().store_id, StoreId::new("store-1"));
}

#[test]
fn device_events_reach_all_listeners_and_alerts_filter_by_keyword() {
    let (proxy, token) = gated_service();
    provision_layout(&proxy, &token);
    proxy
        .provision_device(
            "dev-1",
            "Freezer Sensor",
            "sensor",
            &StoreId::new("store-1"),
            &AisleId::new("a-1"),
            &token,
        )
        .unwrap();

    let alert = AlertMonitor::new();
    assert!(alert.triggered(&DeviceEvent::new("dev-1", Some("overheat"), Some("shelf 3"))));
    assert!(!alert.triggered(&DeviceEvent::new("dev-1", Some("ok"), Some("nominal"))));

    let recorder = Arc::new(Recorder::default());
    proxy
        .register_listener(&DeviceId::new("dev-1"), Arc::new(EventLogger::new()), &token)
        .unwrap();
    proxy
        .register_listener(&DeviceId::new("dev-1"), Arc::new(alert), &token)
        .unwrap();
    proxy
        .register_listener(&DeviceId::new("dev-1"), recorder.clone(), &token)
        .unwrap();

    proxy
        .raise_event(&DeviceId::new("dev-1"), Some("overheat"), Some("shelf 3"), &token)
        .unwrap();
    proxy
        .raise_event(&DeviceId::new("dev-1"), Some("ok"), Some("nominal"), &token)
        .unwrap();
    proxy
        .issue_command(&DeviceId::new("dev-1"), "defrost", &token)
        .unwrap();

    let seen = recorder.seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].event_type.as_deref(), Some("overheat"));
    assert_eq!(seen[2].message.as_deref(), Some("defrost"));
}

#[test]
fn concurrent_gated_updates_to_one_inventory_never_lose_changes() {
    let (proxy, token) = gated_service();
    provision_layout(&proxy, &token);
    proxy
        .provision_inventory(
            "inv-1",
            &StoreId::new("store-1"),
            &AisleId::new("a-1"),
            &ShelfId::new("s-1"),
            10_000,
            0,
            "whole milk",
            InventoryType::Standard,
            &token,
        )
        .unwrap();

    let threads: Vec<_> = (0..8)
        .map(|_| {
            let proxy = proxy.clone();
            let token = token.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    proxy
                        .update_inventory(&InventoryId::new("inv-1"), 1, &token)
                        .unwrap();
                }
            })
        })
        .collect();
    for t in threads {
        t.join().unwrap();
    }

    let inventory = proxy
        .show_inventory(&InventoryId::new("inv-1"), &token)
        .unwrap();
    assert_eq!(inventory.count(), 800);
}

#[test]
fn revocation_cuts_off_a_caller_mid_session() {
    let (proxy, token) = gated_service();
    provision_layout(&proxy, &token);

    proxy.show_store(&StoreId::new("store-1"), &token).unwrap();
    proxy.revoke_token(&token);

    let err = proxy.show_store(&StoreId::new("store-1"), &token).unwrap_err();
    assert_eq!(err, StoreError::unauthorized("show store"));

    // Re-registering the same token restores access (registry is a plain set).
    proxy.register_token(&token);
    proxy.show_store(&StoreId::new("store-1"), &token).unwrap();
}
