use chrono::Utc;
use tank_aquarium::tracing_setup::{init_from_config, init_tracing};
use tank_aquarium::Aquarium;
use tank_core::config::ObservabilityConfig;

#[test]
fn init_from_config_installs_once() {
    let config = ObservabilityConfig {
        log_level: "debug".to_string(),
        json: false,
    };
    assert!(init_from_config(&config));
    assert!(!init_from_config(&config), "second install must be refused");
    assert!(!init_tracing());

    // Emits through the installed subscriber.
    let aquarium = Aquarium::new();
    let item = aquarium.register("video-a", Utc::now()).unwrap();
    aquarium.record_watch(&item.id, Utc::now()).unwrap();
}
