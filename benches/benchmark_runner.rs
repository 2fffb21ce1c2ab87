/// Benchmark runner for the descriptor layer.
///
/// Compares a modern host against a legacy one on the same workloads.

extern crate propshim;

use propshim::ds::object::new_object;
use propshim::ds::object_property::PropertyDescriptorSetter;
use propshim::ds::value::JsValue;
use propshim::shim::{HostConfig, ObjectRegistry};
use std::time::{Duration, Instant};

type Workload = fn(&mut ObjectRegistry, usize) -> usize;

/// Run a workload and return the execution time.
fn run_benchmark(config: &HostConfig, work: Workload, size: usize, iterations: u32) -> Duration {
    let start = Instant::now();

    for _ in 0..iterations {
        let mut registry = ObjectRegistry::new(config.clone());
        let _ = work(&mut registry, size);
    }

    start.elapsed()
}

fn prop_name(i: usize) -> String {
    format!("p{}", i)
}

// ============================================================================
// Workloads
// ============================================================================

fn define_data(registry: &mut ObjectRegistry, size: usize) -> usize {
    let o = JsValue::Object(new_object());
    for i in 0..size {
        let setter = PropertyDescriptorSetter::data(JsValue::int(i as i64)).with_enumerable(i % 2 == 0);
        let _ = registry.define_property(&o, &prop_name(i), setter);
    }
    registry.keys(&o).map(|k| k.len()).unwrap_or(0)
}

fn define_batch(registry: &mut ObjectRegistry, size: usize) -> usize {
    let o = JsValue::Object(new_object());
    let map = (0..size)
        .map(|i| (prop_name(i), PropertyDescriptorSetter::open_data(JsValue::int(i as i64))))
        .collect();
    let _ = registry.define_properties(&o, map);
    registry.list_own_property_names(&o).map(|n| n.len()).unwrap_or(0)
}

fn read_descriptors(registry: &mut ObjectRegistry, size: usize) -> usize {
    let o = JsValue::Object(new_object());
    for i in 0..size {
        let _ = registry.put(&o, &prop_name(i), JsValue::int(i as i64));
    }
    let mut found = 0;
    for i in 0..size {
        if let Ok(Some(_)) = registry.get_descriptor(&o, &prop_name(i)) {
            found += 1;
        }
    }
    found
}

fn prototype_chain(registry: &mut ObjectRegistry, size: usize) -> usize {
    let mut current = JsValue::Null;
    for _ in 0..size {
        match registry.create_with_prototype(&current, None) {
            Ok(o) => current = JsValue::Object(o),
            Err(_) => return 0,
        }
    }
    let _ = registry.put(&current, "leaf", JsValue::Boolean(true));
    let mut depth = 0;
    let mut cursor = registry.prototype_of(&current).ok().flatten();
    while let Some(p) = cursor {
        depth += 1;
        cursor = registry.prototype_of(&JsValue::Object(p)).ok().flatten();
    }
    depth
}

fn freeze_many(registry: &mut ObjectRegistry, size: usize) -> usize {
    let mut frozen = 0;
    for i in 0..size {
        let o = JsValue::Object(new_object());
        let _ = registry.put(&o, "v", JsValue::int(i as i64));
        let _ = registry.freeze(&o);
        if registry.is_frozen(&o).unwrap_or(false) {
            frozen += 1;
        }
    }
    registry.sweep();
    frozen
}

fn main() {
    println!("=======================================================");
    println!("  Descriptor Layer Benchmarks");
    println!("=======================================================\n");

    let benchmarks: Vec<(&str, Workload, usize, u32)> = vec![
        ("defineProperty (200)", define_data as Workload, 200, 200),
        ("defineProperties (200)", define_batch as Workload, 200, 200),
        ("getDescriptor (500)", read_descriptors as Workload, 500, 100),
        ("create chain (100)", prototype_chain as Workload, 100, 200),
        ("freeze + sweep (500)", freeze_many as Workload, 500, 50),
    ];

    let modern = HostConfig::modern();
    let legacy = HostConfig::legacy();

    println!("{:<30} {:>14} {:>14} {:>10}", "Benchmark", "Modern", "Legacy", "Ratio");
    println!("{}", "-".repeat(70));

    let mut total_modern = Duration::ZERO;
    let mut total_legacy = Duration::ZERO;

    for (name, work, size, iterations) in &benchmarks {
        let modern_dur = run_benchmark(&modern, *work, *size, *iterations);
        let legacy_dur = run_benchmark(&legacy, *work, *size, *iterations);
        total_modern += modern_dur;
        total_legacy += legacy_dur;

        let ratio = legacy_dur.as_secs_f64() / modern_dur.as_secs_f64();

        println!(
            "{:<30} {:>12.2?} {:>12.2?} {:>9.2}x",
            name, modern_dur, legacy_dur, ratio
        );
    }

    println!("{}", "-".repeat(70));
    let total_ratio = total_legacy.as_secs_f64() / total_modern.as_secs_f64();
    println!(
        "{:<30} {:>12.2?} {:>12.2?} {:>9.2}x",
        "TOTAL", total_modern, total_legacy, total_ratio
    );

    // Verify correctness
    println!("\n=======================================================");
    println!("  Correctness Verification");
    println!("=======================================================\n");

    let verifications: Vec<(&str, Workload, usize, usize)> = vec![
        ("Enumerable keys", define_data as Workload, 200, 100),
        ("Batch names", define_batch as Workload, 200, 200),
        ("Descriptors found", read_descriptors as Workload, 500, 500),
        ("Chain depth", prototype_chain as Workload, 100, 99),
        ("Frozen", freeze_many as Workload, 500, 500),
    ];

    println!("{:<20} {:>12} {:>12} {:>12}", "Test", "Expected", "Modern", "Legacy");
    println!("{}", "-".repeat(58));

    for (name, work, size, expected) in verifications {
        let modern_val = work(&mut ObjectRegistry::new(modern.clone()), size);
        let legacy_val = work(&mut ObjectRegistry::new(legacy.clone()), size);

        let m_status = if modern_val == expected { "✓" } else { "✗" };
        let l_status = if legacy_val == expected { "✓" } else { "✗" };
        println!(
            "{:<20} {:>12} {:>4} {:>7} {:>4} {:>7}",
            name, expected, m_status, modern_val, l_status, legacy_val
        );
    }
}
