#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;

use mathlab_worker::{Response, ServiceConfig, WorkerService};

fn service() -> &'static WorkerService {
    static SERVICE: OnceLock<WorkerService> = OnceLock::new();
    SERVICE.get_or_init(|| {
        WorkerService::spawn(ServiceConfig {
            max_depth: 6,
            ..ServiceConfig::default()
        })
        .expect("spawn workers")
    })
}

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };
    // Every line gets exactly one well-formed reply
    let reply = service().handle_json(line);
    let _: Response = serde_json::from_str(&reply).expect("reply is valid JSON");
});
