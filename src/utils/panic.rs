use std::panic;

/// Routes panics through `tracing` so they end up next to the request that
/// caused them instead of on bare stderr.
pub fn set_hook() {
    panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("<non-string payload>");

        match info.location() {
            Some(location) => error!(
                file = location.file(),
                line = location.line(),
                "panicked: {payload}"
            ),
            None => error!("panicked: {payload}"),
        }
    }));
}
